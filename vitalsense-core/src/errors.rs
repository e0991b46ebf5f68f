//! Error Types for the Ingestion Path
//!
//! The engine's computation is pure arithmetic over assumed-valid numbers,
//! so the error taxonomy is narrow: everything here describes the inbound
//! channel, not the math. Errors are kept small and `Copy` with inline
//! `&'static str` payloads only — no heap, deterministic size, cheap to
//! return through the polling hot path.
//!
//! Nothing in this enum is fatal to the process. A malformed payload costs
//! one discarded frame; a disconnect hands control to the transport's
//! reconnect policy; the core holds no state across batches either way.

use thiserror_no_std::Error;

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Ingestion errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestError {
    /// Inbound frame could not be parsed as a reading batch
    ///
    /// The coordinating layer logs and discards; the core is never invoked
    /// for the frame.
    #[error("malformed payload: {reason}")]
    MalformedPayload {
        /// What the decoder rejected
        reason: &'static str,
    },

    /// The push channel dropped
    ///
    /// Reconnection is the transport's concern; the core holds no state
    /// across batches and resumes cleanly on the next frame.
    #[error("transport disconnected")]
    Disconnected,

    /// A bounded replay source ran out of batches
    #[error("end of stream")]
    EndOfStream,
}

#[cfg(feature = "defmt")]
impl defmt::Format for IngestError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::MalformedPayload { reason } => {
                defmt::write!(fmt, "malformed payload: {}", reason)
            }
            Self::Disconnected => defmt::write!(fmt, "transport disconnected"),
            Self::EndOfStream => defmt::write!(fmt, "end of stream"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_small() {
        // Returned through the polling hot path; keep them pointer-sized-ish
        assert!(core::mem::size_of::<IngestError>() <= 24);
    }

    #[test]
    fn errors_are_copy() {
        let e = IngestError::Disconnected;
        let copied = e;
        assert_eq!(e, copied);
    }
}
