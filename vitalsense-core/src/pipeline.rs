//! Batch Ingestion Pipeline
//!
//! ## Overview
//!
//! The pipeline is the coordinator between the two pure leaves: for each
//! inbound [`ReadingBatch`] it classifies every present signal, estimates
//! the composite stress score once, maps the score to a mood band, and
//! emits a single [`BatchUpdate`] to the presentation sink.
//!
//! ```text
//! ReadingBatch → classify per signal → estimate → mood band → Sink
//! ```
//!
//! ## Processing Model
//!
//! Single-threaded and event-driven: one batch is fully processed before
//! the next is accepted. The pipeline holds no state across batches, so
//! feeding the same batch twice produces two identical emissions. Nothing
//! here blocks or awaits I/O; each invocation is a bounded-time pure
//! computation plus one sink call.
//!
//! ## Missing Sink
//!
//! A pipeline without an attached sink still processes batches; the
//! emission becomes a logged no-op. This is a non-fatal, locally handled
//! condition — the worst case is one batch with no visible update.

use heapless::Vec;

use crate::classifier::classify;
use crate::signals::{ClassificationResult, ReadingBatch, SignalType};
use crate::stress::{estimate, MoodBand};

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// One classified update, emitted per inbound batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchUpdate {
    /// Per-signal classification results in canonical order, absent
    /// signals skipped
    pub classifications: Vec<ClassificationResult, 5>,
    /// Composite stress score (nominally 0–100, unclamped)
    pub stress_score: f32,
    /// Mood band derived from the stress score
    pub mood: MoodBand,
}

impl BatchUpdate {
    /// Build the update for one batch
    ///
    /// Pure: classification, estimation, and band mapping with no side
    /// effects.
    pub fn from_batch(batch: &ReadingBatch) -> Self {
        let mut classifications = Vec::new();
        for signal in SignalType::ALL {
            if let Some(raw) = batch.get(signal) {
                // Capacity is exactly one slot per signal type
                let _ = classifications.push(classify(signal, raw));
            }
        }

        let stress_score = estimate(batch);

        Self {
            classifications,
            stress_score,
            mood: MoodBand::from_score(stress_score),
        }
    }
}

/// Sink consuming classified output for rendering
///
/// The pipeline is agnostic to how updates are displayed; implementors
/// render the formatted value and status label per signal plus the mood
/// band's label and icon.
pub trait PresentationSink {
    /// Receive one update for rendering
    fn render(&mut self, update: &BatchUpdate);
}

/// Coordinator driving classification and scoring for inbound batches
pub struct IngestionPipeline<S: PresentationSink> {
    sink: Option<S>,
}

impl<S: PresentationSink> IngestionPipeline<S> {
    /// Create a pipeline emitting to the given sink
    pub fn new(sink: S) -> Self {
        Self { sink: Some(sink) }
    }

    /// Create a pipeline with no sink attached
    ///
    /// Batches are still processed; emissions are dropped with a warning.
    pub fn detached() -> Self {
        Self { sink: None }
    }

    /// Process one inbound batch and emit its update
    pub fn on_batch(&mut self, batch: &ReadingBatch) {
        let update = BatchUpdate::from_batch(batch);
        match self.sink.as_mut() {
            Some(sink) => sink.render(&update),
            None => log_warn!("no presentation sink attached; dropping update"),
        }
    }

    /// Borrow the attached sink, if any
    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Detach and return the sink, if any
    pub fn into_sink(self) -> Option<S> {
        self.sink
    }
}
