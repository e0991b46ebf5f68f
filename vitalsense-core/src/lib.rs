//! Classification and stress-scoring engine for VitalSense
//!
//! Turns raw physiological readings from a wearable hub (skin temperature,
//! heart rate, HRV, SpO2, skin conductance) into per-signal severity bands
//! and a single weighted stress score with a display mood band.
//!
//! Key constraints:
//! - Runs on small edge targets (ESP32-class hubs)
//! - No heap allocation in the hot path
//! - Pure, bounded-time computation per batch; no state across batches
//!
//! ```no_run
//! use vitalsense_core::{classify, estimate, MoodBand, ReadingBatch, SignalType};
//!
//! let batch = ReadingBatch::empty()
//!     .with(SignalType::HeartRate, 72.0)
//!     .with(SignalType::SpO2, 98.0);
//!
//! let hr = classify(SignalType::HeartRate, 72.0);
//! let score = estimate(&batch);
//! let mood = MoodBand::from_score(score);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod classifier;
pub mod constants;
pub mod errors;
pub mod pipeline;
pub mod signals;
pub mod stream;
pub mod stress;

// Public API
pub use classifier::{classify, SignalRangeConfig};
pub use errors::{IngestError, IngestResult};
pub use pipeline::{BatchUpdate, IngestionPipeline, PresentationSink};
pub use signals::{ClassificationResult, ReadingBatch, SignalType, StatusLabel};
pub use stream::{BatchStream, MemoryStream, StreamProcessor};
pub use stress::{estimate, is_signal_present, MoodBand};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
