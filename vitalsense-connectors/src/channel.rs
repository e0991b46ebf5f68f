//! Push-Channel Adapter
//!
//! Adapts a queue of raw frames — fed by whatever concrete transport the
//! deployment uses — into the engine's [`BatchStream`] interface. The
//! transport side owns the socket and the reconnect loop; this side owns
//! decoding and the discard policy for malformed frames.
//!
//! ```text
//! Transport thread ── frames ──→ FrameStream ──→ StreamProcessor
//!        │                           │
//!   ReconnectPolicy            decode / discard
//! ```

use std::sync::mpsc::{Receiver, TryRecvError};

use vitalsense_core::{BatchStream, IngestError, ReadingBatch};

use crate::payload;

/// Trait for persistent inbound channels delivering reading frames
pub trait PushChannel {
    /// True while the underlying transport is connected
    fn is_connected(&self) -> bool;

    /// Delivery statistics for this channel
    fn stats(&self) -> &ChannelStats;
}

/// Delivery statistics common to all push channels
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChannelStats {
    /// Frames received from the transport
    pub frames_received: u64,
    /// Frames rejected by the payload decoder
    pub frames_rejected: u64,
}

/// Batch stream over a queue of raw JSON frames
///
/// Malformed frames are logged, counted, and skipped; the engine only ever
/// sees decodable batches. When the sending side hangs up the stream
/// reports [`IngestError::Disconnected`] and the transport loop takes over
/// with its reconnect policy.
pub struct FrameStream {
    frames: Receiver<String>,
    stats: ChannelStats,
    connected: bool,
}

impl FrameStream {
    /// Create a stream over a frame queue
    pub fn new(frames: Receiver<String>) -> Self {
        Self {
            frames,
            stats: ChannelStats::default(),
            connected: true,
        }
    }
}

impl PushChannel for FrameStream {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn stats(&self) -> &ChannelStats {
        &self.stats
    }
}

impl BatchStream for FrameStream {
    type Error = IngestError;

    fn poll_next(&mut self) -> nb::Result<ReadingBatch, Self::Error> {
        loop {
            match self.frames.try_recv() {
                Ok(frame) => {
                    self.stats.frames_received += 1;
                    match payload::decode_lossy(&frame) {
                        Some(batch) => return Ok(batch),
                        None => {
                            // Discarded; keep draining the queue
                            self.stats.frames_rejected += 1;
                        }
                    }
                }
                Err(TryRecvError::Empty) => return Err(nb::Error::WouldBlock),
                Err(TryRecvError::Disconnected) => {
                    self.connected = false;
                    return Err(nb::Error::Other(IngestError::Disconnected));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use vitalsense_core::SignalType;

    #[test]
    fn frames_decode_into_batches() {
        let (tx, rx) = mpsc::channel();
        let mut stream = FrameStream::new(rx);

        tx.send(r#"{"heartRate":80,"spo2":97}"#.to_string()).unwrap();

        let batch = stream.poll_next().unwrap();
        assert_eq!(batch.get(SignalType::HeartRate), Some(80.0));
        assert_eq!(batch.get(SignalType::SpO2), Some(97.0));
        assert_eq!(stream.stats().frames_received, 1);
    }

    #[test]
    fn empty_queue_would_block() {
        let (_tx, rx) = mpsc::channel::<String>();
        let mut stream = FrameStream::new(rx);

        assert_eq!(stream.poll_next(), Err(nb::Error::WouldBlock));
        assert!(stream.is_connected());
    }

    #[test]
    fn malformed_frames_are_skipped() {
        let (tx, rx) = mpsc::channel();
        let mut stream = FrameStream::new(rx);

        tx.send("not json".to_string()).unwrap();
        tx.send(r#"{"hrv":"high"}"#.to_string()).unwrap();
        tx.send(r#"{"hrv":44}"#.to_string()).unwrap();

        // Two rejects are skipped in one poll; the good frame comes through
        let batch = stream.poll_next().unwrap();
        assert_eq!(batch.get(SignalType::Hrv), Some(44.0));
        assert_eq!(stream.stats().frames_rejected, 2);
        assert_eq!(stream.stats().frames_received, 3);
    }

    #[test]
    fn hangup_reports_disconnect() {
        let (tx, rx) = mpsc::channel::<String>();
        let mut stream = FrameStream::new(rx);
        drop(tx);

        assert_eq!(
            stream.poll_next(),
            Err(nb::Error::Other(IngestError::Disconnected))
        );
        assert!(!stream.is_connected());
    }
}
