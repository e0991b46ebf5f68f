//! Hub Payload Decoding
//!
//! The hub pushes one JSON object per frame, keyed by signal name in
//! camelCase, with any subset of keys present:
//!
//! ```json
//! {"temperature": 36.52, "heartRate": 74, "hrv": 43, "spo2": 97.8, "conductance": 4.6}
//! ```
//!
//! Decoding maps straight onto [`ReadingBatch`]; missing keys become absent
//! slots, unknown keys are ignored. A frame with a non-numeric value for a
//! present key is malformed and rejected whole — partial salvage is not
//! attempted.

use vitalsense_core::ReadingBatch;

use crate::ConnectorError;

/// Decode one frame into a reading batch
pub fn decode(frame: &str) -> Result<ReadingBatch, ConnectorError> {
    let batch = serde_json::from_str(frame)?;
    Ok(batch)
}

/// Decode one frame, logging and discarding on failure
///
/// This is the coordinating layer's "log and discard" policy for malformed
/// payloads: the engine is never invoked for a frame that returns `None`.
pub fn decode_lossy(frame: &str) -> Option<ReadingBatch> {
    match decode(frame) {
        Ok(batch) => Some(batch),
        Err(err) => {
            log::warn!("discarding malformed frame: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitalsense_core::SignalType;

    #[test]
    fn full_frame_decodes() {
        let frame = r#"{"temperature":36.5,"heartRate":75,"hrv":45,"spo2":98,"conductance":5}"#;
        let batch = decode(frame).unwrap();

        assert_eq!(batch.get(SignalType::Temperature), Some(36.5));
        assert_eq!(batch.get(SignalType::HeartRate), Some(75.0));
        assert_eq!(batch.get(SignalType::Hrv), Some(45.0));
        assert_eq!(batch.get(SignalType::SpO2), Some(98.0));
        assert_eq!(batch.get(SignalType::Conductance), Some(5.0));
    }

    #[test]
    fn partial_frame_decodes_with_absent_slots() {
        let frame = r#"{"heartRate":130}"#;
        let batch = decode(frame).unwrap();

        assert_eq!(batch.get(SignalType::HeartRate), Some(130.0));
        assert_eq!(batch.get(SignalType::Temperature), None);
        assert_eq!(batch.get(SignalType::Conductance), None);
    }

    #[test]
    fn empty_object_is_an_empty_batch() {
        let batch = decode("{}").unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let frame = r#"{"heartRate":72,"battery":87,"firmware":"2.4.1"}"#;
        let batch = decode(frame).unwrap();
        assert_eq!(batch.get(SignalType::HeartRate), Some(72.0));
    }

    #[test]
    fn non_numeric_value_rejects_the_frame() {
        assert!(decode(r#"{"heartRate":"fast"}"#).is_err());
        assert!(decode(r#"{"temperature":null,"heartRate":75}"#).is_ok()); // null = absent
        assert!(decode("[1,2,3]").is_err());
        assert!(decode("").is_err());
    }

    #[test]
    fn lossy_decode_discards_quietly() {
        assert!(decode_lossy(r#"{"hrv":44}"#).is_some());
        assert!(decode_lossy("garbage").is_none());
    }
}
