//! Clinical Classification Bounds
//!
//! Normal bands and critical limits for each signal type, based on adult
//! resting reference ranges. These bounds drive the per-signal severity
//! classification only; the stress model uses its own normalization ranges
//! (see [`super::stress`]).

// ===== SKIN TEMPERATURE =====

/// Lower edge of the normal temperature band (°C).
///
/// Below this a reading is classified Low.
///
/// Source: adult normothermia range, 36.1–37.2°C
pub const TEMP_NORMAL_MIN_C: f32 = 36.1;

/// Upper edge of the normal temperature band (°C).
///
/// Above this a reading is classified High.
pub const TEMP_NORMAL_MAX_C: f32 = 37.2;

/// Critical hypothermia threshold (°C).
///
/// Readings strictly below this are Critical regardless of the normal band.
///
/// Source: clinical hypothermia definition, core temp < 35°C
pub const TEMP_CRITICAL_LOW_C: f32 = 35.0;

/// Critical hyperthermia threshold (°C).
///
/// Readings strictly above this are Critical.
///
/// Source: high-grade fever threshold, > 38°C
pub const TEMP_CRITICAL_HIGH_C: f32 = 38.0;

// ===== HEART RATE =====

/// Lower edge of the normal resting heart-rate band (bpm).
///
/// Source: AHA adult resting range, 60–100 bpm
pub const HR_NORMAL_MIN_BPM: f32 = 60.0;

/// Upper edge of the normal resting heart-rate band (bpm).
pub const HR_NORMAL_MAX_BPM: f32 = 100.0;

/// Critical bradycardia threshold (bpm).
pub const HR_CRITICAL_LOW_BPM: f32 = 40.0;

/// Critical tachycardia threshold (bpm).
pub const HR_CRITICAL_HIGH_BPM: f32 = 120.0;

// ===== HEART-RATE VARIABILITY =====

/// Lower edge of the normal HRV band (ms, RMSSD).
///
/// Low HRV correlates with sympathetic dominance. HRV has no critical
/// tier: readings outside the band are at most Low or High.
///
/// Source: typical adult short-term RMSSD range
pub const HRV_NORMAL_MIN_MS: f32 = 20.0;

/// Upper edge of the normal HRV band (ms, RMSSD).
pub const HRV_NORMAL_MAX_MS: f32 = 70.0;

// ===== BLOOD OXYGEN SATURATION =====

/// Lower edge of the normal SpO2 band (%).
///
/// Below this a reading is classified Low. There is no High tier: any
/// reading at or above this bound is Normal, including values above the
/// theoretical 100% maximum (sensor overshoot is not rejected here).
///
/// Source: WHO pulse-oximetry guidance, >= 95% normal
pub const SPO2_NORMAL_MIN_PCT: f32 = 95.0;

/// Nominal upper bound of SpO2 (%).
///
/// Informational only; no classification rule fires above it.
pub const SPO2_NORMAL_MAX_PCT: f32 = 100.0;

/// Critical hypoxemia threshold (%).
///
/// Source: clinical hypoxemia definition, SpO2 < 90%
pub const SPO2_CRITICAL_LOW_PCT: f32 = 90.0;

// ===== SKIN CONDUCTANCE =====

/// Lower edge of the normal tonic conductance band (μS).
///
/// The Low check is inclusive for conductance: a reading of exactly this
/// value is classified Low.
///
/// Source: typical tonic EDA range for dry skin, 2–10 μS
pub const EDA_NORMAL_MIN_US: f32 = 2.0;

/// Upper edge of the normal tonic conductance band (μS).
pub const EDA_NORMAL_MAX_US: f32 = 10.0;

/// Critical low conductance threshold (μS).
///
/// Negative conductance is physically impossible and indicates electrode
/// failure.
pub const EDA_CRITICAL_LOW_US: f32 = 0.0;

/// Critical high conductance threshold (μS).
///
/// Readings above this are outside any plausible electrodermal response.
pub const EDA_CRITICAL_HIGH_US: f32 = 50.0;
