//! Stress-Model Parameters
//!
//! Normalization ranges, weights, and mood-band cutoffs for the composite
//! stress estimate. These ranges are stress-modeling ranges, not the
//! clinical classification bounds from [`super::clinical`]: they define the
//! span over which each signal is rescaled to a 0–1 contribution before
//! weighting.

// ===== NORMALIZATION RANGES =====

/// Temperature normalization range lower bound (°C).
///
/// Temperature is inverted in the model: a colder periphery (vasoconstriction)
/// reads as higher stress.
pub const STRESS_NORM_TEMP_MIN_C: f32 = 30.0;

/// Temperature normalization range upper bound (°C).
pub const STRESS_NORM_TEMP_MAX_C: f32 = 37.0;

/// Conductance normalization range lower bound (μS).
///
/// Conductance is direct: more sweat-gland activity reads as higher stress.
pub const STRESS_NORM_EDA_MIN_US: f32 = 0.0;

/// Conductance normalization range upper bound (μS).
pub const STRESS_NORM_EDA_MAX_US: f32 = 10.0;

/// Heart-rate normalization range lower bound (bpm). Direct.
pub const STRESS_NORM_HR_MIN_BPM: f32 = 50.0;

/// Heart-rate normalization range upper bound (bpm).
pub const STRESS_NORM_HR_MAX_BPM: f32 = 120.0;

/// HRV normalization range lower bound (ms). Inverted.
pub const STRESS_NORM_HRV_MIN_MS: f32 = 0.0;

/// HRV normalization range upper bound (ms).
pub const STRESS_NORM_HRV_MAX_MS: f32 = 80.0;

/// SpO2 normalization range lower bound (%). Inverted.
pub const STRESS_NORM_SPO2_MIN_PCT: f32 = 90.0;

/// SpO2 normalization range upper bound (%).
pub const STRESS_NORM_SPO2_MAX_PCT: f32 = 100.0;

// ===== WEIGHTS =====
//
// Weights sum to 1.0. Conductance and HRV dominate: electrodermal activity
// and vagal tone are the strongest short-horizon arousal markers among the
// five signals.

/// Temperature weight in the composite estimate.
pub const WEIGHT_TEMPERATURE: f32 = 0.05;

/// Conductance weight in the composite estimate.
pub const WEIGHT_CONDUCTANCE: f32 = 0.40;

/// Heart-rate weight in the composite estimate.
pub const WEIGHT_HEART_RATE: f32 = 0.15;

/// HRV weight in the composite estimate.
pub const WEIGHT_HRV: f32 = 0.30;

/// SpO2 weight in the composite estimate.
pub const WEIGHT_SPO2: f32 = 0.10;

/// Sum of all five signal weights.
///
/// The aggregation divides by this full sum even when signals are missing
/// (the denominator is NOT renormalized to the available subset). Sparse
/// batches therefore score systematically lower; see the `stress` module
/// docs before changing this.
pub const TOTAL_WEIGHT: f32 =
    WEIGHT_TEMPERATURE + WEIGHT_CONDUCTANCE + WEIGHT_HEART_RATE + WEIGHT_HRV + WEIGHT_SPO2;

// ===== MOOD BANDS =====

/// Upper cutoff of the Relaxed band (inclusive).
pub const MOOD_RELAXED_MAX: f32 = 30.0;

/// Upper cutoff of the Stable band (inclusive).
///
/// Everything above is Stressed, including out-of-range scores from
/// unclamped contributions.
pub const MOOD_STABLE_MAX: f32 = 70.0;
