//! Constants for VitalSense Core
//!
//! Centralized, documented numeric values used throughout the engine.
//! Always use these constants instead of magic numbers; when adding new
//! ones, reference the clinical guideline or product decision they came
//! from and keep related values grouped.
//!
//! ## Organization
//!
//! - **Clinical**: per-signal classification bounds (normal bands and
//!   critical limits)
//! - **Stress**: stress-model normalization ranges, weights, and mood-band
//!   cutoffs
//!
//! The clinical bounds and the stress normalization ranges intentionally
//! differ: the former classify a single reading against reference ranges,
//! the latter rescale readings for the composite stress estimate.

/// Per-signal classification bounds based on clinical reference ranges.
pub mod clinical;

/// Stress-model normalization ranges, weights, and mood-band cutoffs.
pub mod stress;

// Re-export commonly used constants for convenience
pub use clinical::{
    HR_CRITICAL_HIGH_BPM, HR_CRITICAL_LOW_BPM, HR_NORMAL_MAX_BPM, HR_NORMAL_MIN_BPM,
    SPO2_CRITICAL_LOW_PCT, SPO2_NORMAL_MIN_PCT, TEMP_CRITICAL_HIGH_C, TEMP_CRITICAL_LOW_C,
    TEMP_NORMAL_MAX_C, TEMP_NORMAL_MIN_C,
};

pub use stress::{
    MOOD_RELAXED_MAX, MOOD_STABLE_MAX, TOTAL_WEIGHT, WEIGHT_CONDUCTANCE, WEIGHT_HEART_RATE,
    WEIGHT_HRV, WEIGHT_SPO2, WEIGHT_TEMPERATURE,
};
