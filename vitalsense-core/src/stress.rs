//! Composite Stress Estimation
//!
//! ## Overview
//!
//! Collapses the concurrently available signals of one [`ReadingBatch`] into
//! a single stress score, nominally in [0, 100]. Each available signal is
//! rescaled over its stress-model normalization range, flipped where a low
//! raw value indicates arousal, weighted, and summed:
//!
//! ```text
//! score = Σ(contribution_i × weight_i) / Σweight × 100
//! ```
//!
//! This is the weighted-average shape with a fixed per-signal weight table;
//! weights encode how strongly each signal tracks short-horizon arousal
//! (see [`crate::constants::stress`]).
//!
//! ## Directionality
//!
//! Conductance and heart rate are direct (higher raw value, higher stress);
//! temperature, HRV, and SpO2 are inverted (`1 - norm`), since peripheral
//! cooling, low vagal tone, and desaturation all read as arousal.
//!
//! ## Availability Policy
//!
//! A signal contributes iff its slot is present and strictly greater than
//! zero. A present reading of exactly 0 is treated as "sensor not attached"
//! and excluded — the same as an absent key. This conflates "no reading"
//! with a genuine zero (a near-zero conductance is physically plausible);
//! the policy is isolated in [`is_signal_present`] so it can be revisited
//! without touching the aggregation math.
//!
//! ## Known Bias: Non-Renormalized Denominator
//!
//! The divisor is always the full five-signal weight sum, even when signals
//! are missing. A batch carrying only heart rate can therefore never score
//! above 15% of the heart-rate contribution range. Preserved deliberately
//! for compatibility with deployed dashboards; open question for product
//! owners, do not "fix" silently.
//!
//! ## Unclamped Contributions
//!
//! Raw values outside the normalization range produce contributions below 0
//! or above 1, and the final score can leave [0, 100]. Accepted input-domain
//! behavior; the mood-band mapping absorbs it (anything above the Stable
//! cutoff is Stressed).

use crate::constants::stress::{
    MOOD_RELAXED_MAX, MOOD_STABLE_MAX, STRESS_NORM_EDA_MAX_US, STRESS_NORM_EDA_MIN_US,
    STRESS_NORM_HRV_MAX_MS, STRESS_NORM_HRV_MIN_MS, STRESS_NORM_HR_MAX_BPM,
    STRESS_NORM_HR_MIN_BPM, STRESS_NORM_SPO2_MAX_PCT, STRESS_NORM_SPO2_MIN_PCT,
    STRESS_NORM_TEMP_MAX_C, STRESS_NORM_TEMP_MIN_C, TOTAL_WEIGHT, WEIGHT_CONDUCTANCE,
    WEIGHT_HEART_RATE, WEIGHT_HRV, WEIGHT_SPO2, WEIGHT_TEMPERATURE,
};
use crate::signals::{ReadingBatch, SignalType};

/// Contribution direction of a signal in the stress model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Higher raw value, higher stress
    Direct,
    /// Lower raw value, higher stress
    Inverted,
}

/// One row of the stress model: normalization range, weight, direction
struct ModelRow {
    signal: SignalType,
    min: f32,
    max: f32,
    weight: f32,
    direction: Direction,
}

/// Stress model table, one row per signal
static MODEL: [ModelRow; 5] = [
    ModelRow {
        signal: SignalType::Temperature,
        min: STRESS_NORM_TEMP_MIN_C,
        max: STRESS_NORM_TEMP_MAX_C,
        weight: WEIGHT_TEMPERATURE,
        direction: Direction::Inverted,
    },
    ModelRow {
        signal: SignalType::HeartRate,
        min: STRESS_NORM_HR_MIN_BPM,
        max: STRESS_NORM_HR_MAX_BPM,
        weight: WEIGHT_HEART_RATE,
        direction: Direction::Direct,
    },
    ModelRow {
        signal: SignalType::Hrv,
        min: STRESS_NORM_HRV_MIN_MS,
        max: STRESS_NORM_HRV_MAX_MS,
        weight: WEIGHT_HRV,
        direction: Direction::Inverted,
    },
    ModelRow {
        signal: SignalType::SpO2,
        min: STRESS_NORM_SPO2_MIN_PCT,
        max: STRESS_NORM_SPO2_MAX_PCT,
        weight: WEIGHT_SPO2,
        direction: Direction::Inverted,
    },
    ModelRow {
        signal: SignalType::Conductance,
        min: STRESS_NORM_EDA_MIN_US,
        max: STRESS_NORM_EDA_MAX_US,
        weight: WEIGHT_CONDUCTANCE,
        direction: Direction::Direct,
    },
];

/// Whether a raw slot carries a usable reading
///
/// Policy: present and strictly greater than zero. A reported 0 means
/// "sensor not attached / no data" and is excluded from the stress estimate
/// (it is still classified by the range classifier). See the module docs
/// for why this lives behind a named predicate.
pub fn is_signal_present(slot: Option<f32>) -> bool {
    matches!(slot, Some(value) if value > 0.0)
}

/// Estimate the composite stress score for one batch
///
/// Pure function. Returns exactly 0 when no signal in the batch is usable,
/// skipping the division entirely.
pub fn estimate(batch: &ReadingBatch) -> f32 {
    let mut total_stress = 0.0f32;
    let mut available = 0u32;

    for row in &MODEL {
        let slot = batch.get(row.signal);
        if !is_signal_present(slot) {
            continue;
        }
        let Some(value) = slot else { continue };

        let norm = (value - row.min) / (row.max - row.min);
        let contribution = match row.direction {
            Direction::Direct => norm,
            Direction::Inverted => 1.0 - norm,
        };

        total_stress += contribution * row.weight;
        available += 1;
    }

    if available == 0 {
        return 0.0;
    }

    (total_stress / TOTAL_WEIGHT) * 100.0
}

/// Coarse three-tier bucketing of the stress score for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MoodBand {
    /// Score at or below the relaxed cutoff
    Relaxed = 0,
    /// Score between the relaxed and stable cutoffs
    Stable = 1,
    /// Everything above the stable cutoff, including out-of-range scores
    Stressed = 2,
}

impl MoodBand {
    /// Map a stress score to its band
    ///
    /// Bands are contiguous and exhaustive: cutoffs are inclusive on the
    /// upper end of each band.
    pub fn from_score(score: f32) -> Self {
        if score <= MOOD_RELAXED_MAX {
            MoodBand::Relaxed
        } else if score <= MOOD_STABLE_MAX {
            MoodBand::Stable
        } else {
            MoodBand::Stressed
        }
    }

    /// Display label for the presentation layer
    pub const fn label(&self) -> &'static str {
        match self {
            MoodBand::Relaxed => "Relaxed",
            MoodBand::Stable => "Stable",
            MoodBand::Stressed => "Stressed",
        }
    }

    /// Icon identifier the presentation layer resolves to an asset
    pub const fn icon(&self) -> &'static str {
        match self {
            MoodBand::Relaxed => "calm.png",
            MoodBand::Stable => "neutral.png",
            MoodBand::Stressed => "frustrated.png",
        }
    }
}
