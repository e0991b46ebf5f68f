//! End-to-End Ingestion Tests for VitalSense
//!
//! These tests replay complete wearable sessions through the stream
//! processor and assert on what the presentation sink receives, validating
//! the whole path from inbound batch to rendered update.
//!
//! Scenario values are chosen from realistic wearable telemetry: a resting
//! adult baseline, an acute stress response, and the degraded frames a hub
//! produces when electrodes lose contact.

use vitalsense_core::{
    BatchUpdate, IngestionPipeline, MemoryStream, MoodBand, PresentationSink, ReadingBatch,
    SignalType, StatusLabel, StreamProcessor,
};

// ===== SCENARIO CONSTANTS =====

/// Resting adult baseline: every signal inside its normal band.
const RESTING_TEMP_C: f32 = 36.5;
const RESTING_HR_BPM: f32 = 75.0;
const RESTING_HRV_MS: f32 = 45.0;
const RESTING_SPO2_PCT: f32 = 98.0;
const RESTING_EDA_US: f32 = 5.0;

/// Acute stress response: sympathetic arousal across the board.
/// Elevated heart rate, collapsed HRV, heavy sweat-gland activity.
const STRESSED_HR_BPM: f32 = 118.0;
const STRESSED_HRV_MS: f32 = 12.0;
const STRESSED_EDA_US: f32 = 9.5;
const STRESSED_TEMP_C: f32 = 35.8;
const STRESSED_SPO2_PCT: f32 = 95.0;

/// Sink recording every update for later assertions.
struct RecordingSink {
    updates: Vec<BatchUpdate>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            updates: Vec::new(),
        }
    }
}

impl PresentationSink for RecordingSink {
    fn render(&mut self, update: &BatchUpdate) {
        self.updates.push(update.clone());
    }
}

fn resting_batch() -> ReadingBatch {
    ReadingBatch::empty()
        .with(SignalType::Temperature, RESTING_TEMP_C)
        .with(SignalType::HeartRate, RESTING_HR_BPM)
        .with(SignalType::Hrv, RESTING_HRV_MS)
        .with(SignalType::SpO2, RESTING_SPO2_PCT)
        .with(SignalType::Conductance, RESTING_EDA_US)
}

fn stressed_batch() -> ReadingBatch {
    ReadingBatch::empty()
        .with(SignalType::Temperature, STRESSED_TEMP_C)
        .with(SignalType::HeartRate, STRESSED_HR_BPM)
        .with(SignalType::Hrv, STRESSED_HRV_MS)
        .with(SignalType::SpO2, STRESSED_SPO2_PCT)
        .with(SignalType::Conductance, STRESSED_EDA_US)
}

/// Drain a fixed session through the full path and return the sink.
fn replay(batches: &[ReadingBatch]) -> RecordingSink {
    let stream = MemoryStream::new(batches);
    let pipeline = IngestionPipeline::new(RecordingSink::new());
    let mut processor = StreamProcessor::new(stream, pipeline);

    let processed = processor.process_available().expect("replay cannot fail");
    assert_eq!(processed, batches.len());

    let (_, pipeline) = processor.into_parts();
    pipeline.into_sink().expect("sink was attached")
}

#[test]
fn resting_session_reads_all_normal() {
    let sink = replay(&[resting_batch()]);
    let update = &sink.updates[0];

    assert_eq!(update.classifications.len(), 5);
    for classification in &update.classifications {
        assert_eq!(
            classification.status,
            StatusLabel::Normal,
            "{} should be normal at rest",
            classification.signal.name()
        );
    }

    // Weighted score for the baseline lands mid-band
    assert!(update.stress_score > 30.0 && update.stress_score <= 70.0);
    assert_eq!(update.mood, MoodBand::Stable);
}

#[test]
fn acute_stress_session_raises_the_band() {
    let sink = replay(&[resting_batch(), stressed_batch()]);

    let resting = &sink.updates[0];
    let stressed = &sink.updates[1];

    assert!(stressed.stress_score > resting.stress_score);
    assert_eq!(stressed.mood, MoodBand::Stressed);

    // The per-signal view agrees with the composite: HR high, HRV low
    let by_signal = |update: &BatchUpdate, signal: SignalType| {
        update
            .classifications
            .iter()
            .find(|c| c.signal == signal)
            .expect("signal present")
            .status
    };
    assert_eq!(by_signal(stressed, SignalType::HeartRate), StatusLabel::High);
    assert_eq!(by_signal(stressed, SignalType::Hrv), StatusLabel::Low);
}

#[test]
fn partial_batches_flow_without_error() {
    // Electrodes detached: the hub sends whatever it still samples
    let hr_only = ReadingBatch::empty().with(SignalType::HeartRate, 130.0);
    let empty = ReadingBatch::empty();

    let sink = replay(&[hr_only, empty]);

    let first = &sink.updates[0];
    assert_eq!(first.classifications.len(), 1);
    assert_eq!(first.classifications[0].status, StatusLabel::Critical);
    // Non-renormalized denominator keeps the sparse score low
    assert!(first.stress_score < 20.0);
    assert_eq!(first.mood, MoodBand::Relaxed);

    let second = &sink.updates[1];
    assert!(second.classifications.is_empty());
    assert_eq!(second.stress_score, 0.0);
}

#[test]
fn replaying_a_session_twice_is_idempotent() {
    let session = [resting_batch(), stressed_batch()];

    let first = replay(&session);
    let second = replay(&session);

    assert_eq!(first.updates, second.updates);
}

#[test]
fn zero_valued_sensors_render_but_do_not_score() {
    // Conductance electrode reporting flat zero: shown as Low on the
    // dashboard, excluded from the composite
    let batch = ReadingBatch::empty()
        .with(SignalType::HeartRate, RESTING_HR_BPM)
        .with(SignalType::Conductance, 0.0);
    let reference = ReadingBatch::empty().with(SignalType::HeartRate, RESTING_HR_BPM);

    let sink = replay(&[batch, reference]);

    assert_eq!(sink.updates[0].classifications.len(), 2);
    assert_eq!(sink.updates[1].classifications.len(), 1);
    // Identical scores: the zero reading contributed nothing
    assert_eq!(
        sink.updates[0].stress_score,
        sink.updates[1].stress_score
    );
}
