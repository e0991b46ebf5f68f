//! Stream Abstraction for Inbound Reading Batches
//!
//! ## Overview
//!
//! The hub delivers reading batches over a persistent push channel; this
//! module defines the abstraction the engine consumes them through, so the
//! same pipeline runs against a live transport, a replay buffer, or a test
//! fixture:
//!
//! ```text
//! Push channel ─┐
//! Replay       ─┼─→ BatchStream ─→ StreamProcessor ─→ IngestionPipeline
//! Test fixture ─┘
//! ```
//!
//! ## Design Rationale
//!
//! The trait uses the `nb` crate pattern for non-blocking I/O:
//! - `WouldBlock`: no batch available yet, poll again later
//! - `Ok(batch)`: next batch ready
//! - `Err(e)`: channel-level condition (disconnect, end of replay)
//!
//! This works with interrupt-driven embedded targets, polling event loops,
//! and async runtimes via adapters. Batch completeness is never guaranteed:
//! any subset of the five signals may be present, and the consumer must
//! tolerate partial batches without erroring.

use crate::errors::{IngestError, IngestResult};
use crate::pipeline::{IngestionPipeline, PresentationSink};
use crate::signals::ReadingBatch;

/// Core stream trait for batch sources
pub trait BatchStream {
    /// Error type for channel-level conditions
    type Error;

    /// Poll for the next batch (non-blocking)
    ///
    /// Returns:
    /// - `Ok(batch)`: next batch available
    /// - `Err(nb::Error::WouldBlock)`: try again later
    /// - `Err(nb::Error::Other(e))`: channel-level condition
    fn poll_next(&mut self) -> nb::Result<ReadingBatch, Self::Error>;

    /// Hint about remaining batches
    ///
    /// Used for progress tracking; `(0, None)` when unknown.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

/// Memory-based stream for testing and replay
///
/// Yields a fixed slice of batches in order, then reports
/// [`IngestError::EndOfStream`].
pub struct MemoryStream<'a> {
    /// Batches to replay
    batches: &'a [ReadingBatch],
    /// Current position
    position: usize,
}

impl<'a> MemoryStream<'a> {
    /// Create a new memory stream from a slice
    pub fn new(batches: &'a [ReadingBatch]) -> Self {
        Self {
            batches,
            position: 0,
        }
    }

    /// Reset to the beginning
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl<'a> BatchStream for MemoryStream<'a> {
    type Error = IngestError;

    fn poll_next(&mut self) -> nb::Result<ReadingBatch, Self::Error> {
        if self.position >= self.batches.len() {
            return Err(nb::Error::Other(IngestError::EndOfStream));
        }

        let batch = self.batches[self.position];
        self.position += 1;
        Ok(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.batches.len() - self.position;
        (remaining, Some(remaining))
    }
}

/// Drives a batch stream into an ingestion pipeline
///
/// Enforces the processing model: one batch is fully classified, scored,
/// and emitted before the next is polled. There is no internal queue and
/// no coalescing.
pub struct StreamProcessor<S, K>
where
    S: BatchStream<Error = IngestError>,
    K: PresentationSink,
{
    stream: S,
    pipeline: IngestionPipeline<K>,
}

impl<S, K> StreamProcessor<S, K>
where
    S: BatchStream<Error = IngestError>,
    K: PresentationSink,
{
    /// Create a processor from a stream and a pipeline
    pub fn new(stream: S, pipeline: IngestionPipeline<K>) -> Self {
        Self { stream, pipeline }
    }

    /// Process every batch currently available
    ///
    /// Returns the number of batches processed. `WouldBlock` and a clean
    /// end of stream both return `Ok`; other channel conditions surface as
    /// errors after the batches before them were processed.
    pub fn process_available(&mut self) -> IngestResult<usize> {
        let mut processed = 0;
        loop {
            match self.stream.poll_next() {
                Ok(batch) => {
                    self.pipeline.on_batch(&batch);
                    processed += 1;
                }
                Err(nb::Error::WouldBlock) => return Ok(processed),
                Err(nb::Error::Other(IngestError::EndOfStream)) => return Ok(processed),
                Err(nb::Error::Other(e)) => return Err(e),
            }
        }
    }

    /// Borrow the pipeline (e.g. to inspect the sink)
    pub fn pipeline(&self) -> &IngestionPipeline<K> {
        &self.pipeline
    }

    /// Tear down into the stream and pipeline
    pub fn into_parts(self) -> (S, IngestionPipeline<K>) {
        (self.stream, self.pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::BatchUpdate;
    use crate::signals::SignalType;

    struct CountingSink {
        rendered: usize,
    }

    impl PresentationSink for CountingSink {
        fn render(&mut self, _update: &BatchUpdate) {
            self.rendered += 1;
        }
    }

    #[test]
    fn memory_stream_yields_in_order() {
        let batches = [
            ReadingBatch::empty().with(SignalType::HeartRate, 70.0),
            ReadingBatch::empty().with(SignalType::HeartRate, 80.0),
        ];
        let mut stream = MemoryStream::new(&batches);

        assert_eq!(stream.size_hint(), (2, Some(2)));
        assert_eq!(
            stream.poll_next().unwrap().get(SignalType::HeartRate),
            Some(70.0)
        );
        assert_eq!(
            stream.poll_next().unwrap().get(SignalType::HeartRate),
            Some(80.0)
        );
        assert_eq!(
            stream.poll_next(),
            Err(nb::Error::Other(IngestError::EndOfStream))
        );
    }

    #[test]
    fn memory_stream_resets() {
        let batches = [ReadingBatch::empty()];
        let mut stream = MemoryStream::new(&batches);

        assert!(stream.poll_next().is_ok());
        assert!(stream.poll_next().is_err());

        stream.reset();
        assert!(stream.poll_next().is_ok());
    }

    #[test]
    fn processor_drains_stream() {
        let batches = [
            ReadingBatch::empty().with(SignalType::Temperature, 36.5),
            ReadingBatch::empty(),
            ReadingBatch::empty().with(SignalType::SpO2, 97.0),
        ];
        let stream = MemoryStream::new(&batches);
        let pipeline = IngestionPipeline::new(CountingSink { rendered: 0 });

        let mut processor = StreamProcessor::new(stream, pipeline);
        let processed = processor.process_available().unwrap();
        assert_eq!(processed, 3);

        let (_, pipeline) = processor.into_parts();
        assert_eq!(pipeline.into_sink().unwrap().rendered, 3);
    }

    #[test]
    fn processor_surfaces_disconnect() {
        struct DroppingStream {
            sent: bool,
        }

        impl BatchStream for DroppingStream {
            type Error = IngestError;

            fn poll_next(&mut self) -> nb::Result<ReadingBatch, Self::Error> {
                if self.sent {
                    Err(nb::Error::Other(IngestError::Disconnected))
                } else {
                    self.sent = true;
                    Ok(ReadingBatch::empty())
                }
            }
        }

        let pipeline = IngestionPipeline::new(CountingSink { rendered: 0 });
        let mut processor = StreamProcessor::new(DroppingStream { sent: false }, pipeline);

        assert_eq!(
            processor.process_available(),
            Err(IngestError::Disconnected)
        );
        assert_eq!(processor.pipeline().sink().unwrap().rendered, 1);
    }
}
