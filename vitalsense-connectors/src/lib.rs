//! Push-Channel Transport Adapters for VitalSense
//!
//! ## Overview
//!
//! The engine consumes reading batches through the abstract
//! [`BatchStream`](vitalsense_core::BatchStream) interface; this crate
//! provides the pieces that sit between a concrete transport (the hub's
//! WebSocket, a serial bridge, a message broker) and that interface:
//!
//! - [`payload`] — decoding the hub's JSON frames into
//!   [`ReadingBatch`](vitalsense_core::ReadingBatch) values
//! - [`channel`] — a [`FrameStream`](channel::FrameStream) adapting a queue
//!   of raw frames into a batch stream, discarding malformed frames
//! - [`ReconnectPolicy`] — the retry schedule a transport loop follows when
//!   the channel drops
//!
//! ## Reconnect Strategy
//!
//! The hub's channel is long-lived but expected to drop (hub reboots, WiFi
//! roaming). The policy is a fixed interval with unbounded attempts:
//!
//! ```text
//! retry_delay = RETRY_INTERVAL        // every attempt, forever
//! ```
//!
//! The engine holds no state across batches, so a reconnect needs no
//! replay or resynchronization; the transport simply resumes pushing
//! frames. The policy lives entirely outside the core — the engine never
//! assumes a connected state.
//!
//! ## Malformed Frames
//!
//! A frame that does not parse as a reading batch is this layer's problem:
//! it is logged and discarded, and the engine is never invoked for it. The
//! worst case is one missing dashboard update.

pub mod channel;
pub mod payload;

pub use channel::{ChannelStats, FrameStream, PushChannel};

use std::time::Duration;

use thiserror::Error;

/// Common connector errors
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Frame rejected by the payload decoder
    #[error("payload rejected: {0}")]
    Payload(#[from] serde_json::Error),

    /// The underlying channel dropped
    #[error("channel disconnected")]
    Disconnected,
}

impl ConnectorError {
    /// Collapse into the core's inline error for stream consumers
    pub fn to_ingest(&self) -> vitalsense_core::IngestError {
        match self {
            ConnectorError::Payload(_) => vitalsense_core::IngestError::MalformedPayload {
                reason: "frame is not a valid reading batch",
            },
            ConnectorError::Disconnected => vitalsense_core::IngestError::Disconnected,
        }
    }
}

/// Retry schedule for re-establishing a dropped push channel
///
/// Fixed interval, unbounded attempts. A transport loop asks
/// [`delay_for`](Self::delay_for) before each attempt:
///
/// ```no_run
/// use std::thread;
/// use vitalsense_connectors::ReconnectPolicy;
///
/// let policy = ReconnectPolicy::default();
/// let mut attempt = 0;
/// loop {
///     // if connect_to_hub().is_ok() { break; }
///     thread::sleep(policy.delay_for(attempt));
///     attempt += 1;
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    retry_interval: Duration,
}

impl ReconnectPolicy {
    /// Default spacing between reconnect attempts
    pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(5000);

    /// Create a policy with a fixed interval between attempts
    pub const fn fixed(interval: Duration) -> Self {
        Self {
            retry_interval: interval,
        }
    }

    /// Delay before the given attempt
    ///
    /// Constant regardless of attempt number; there is no backoff and no
    /// give-up threshold.
    pub const fn delay_for(&self, _attempt: u32) -> Duration {
        self.retry_interval
    }

    /// Maximum number of attempts before giving up
    ///
    /// Always `None`: the channel is retried for as long as the process
    /// runs.
    pub const fn max_attempts(&self) -> Option<u32> {
        None
    }
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::fixed(Self::DEFAULT_RETRY_INTERVAL)
    }
}
