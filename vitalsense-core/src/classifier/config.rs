//! Per-signal classification configuration
//!
//! Bounds, format rules, and classification patterns are modeled as data so
//! that adding a signal type or retuning a band is a table edit, not a code
//! change. The generic routine in the parent module interprets one
//! [`SignalRangeConfig`] row per signal.

use crate::constants::clinical;
use crate::signals::SignalType;

/// Output formatting rule for a signal's raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Two decimal places ("36.50")
    Decimal2,
    /// Nearest integer ("75")
    Integer,
}

/// Classification pattern for a signal type
///
/// Three of the five signals follow the uniform banded pattern; HRV and
/// SpO2 are irregular and get their own arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRule {
    /// Low below `min`, High above `max` (critical bounds checked first)
    Banded {
        /// Whether a reading of exactly `min` classifies as Low
        low_inclusive: bool,
    },
    /// Low below `min`, High above `max`; the signal has no critical tier
    NoCritical,
    /// Low below `min`; everything at or above it is Normal (no High tier)
    FloorOnly,
}

/// Immutable range configuration for one signal type
///
/// One row per [`SignalType`], process-wide, initialized once and never
/// mutated. Safe for unsynchronized concurrent reads.
#[derive(Debug, Clone, Copy)]
pub struct SignalRangeConfig {
    /// Signal this row configures
    pub signal: SignalType,
    /// Lower edge of the normal band
    pub min: f32,
    /// Upper edge of the normal band
    pub max: f32,
    /// Critical threshold below the band; `None` means the check never fires
    pub critical_low: Option<f32>,
    /// Critical threshold above the band; `None` means the check never fires
    pub critical_high: Option<f32>,
    /// How to render the raw value for presentation
    pub format: ValueFormat,
    /// Which classification pattern applies
    pub rule: StatusRule,
}

impl SignalRangeConfig {
    /// Look up the process-wide configuration for a signal
    pub fn for_signal(signal: SignalType) -> &'static SignalRangeConfig {
        &RANGE_TABLE[signal as usize]
    }
}

/// Process-wide classification table
///
/// Indexed by the `SignalType` discriminant; rows must stay in the same
/// order as [`SignalType::ALL`].
pub static RANGE_TABLE: [SignalRangeConfig; 5] = [
    SignalRangeConfig {
        signal: SignalType::Temperature,
        min: clinical::TEMP_NORMAL_MIN_C,
        max: clinical::TEMP_NORMAL_MAX_C,
        critical_low: Some(clinical::TEMP_CRITICAL_LOW_C),
        critical_high: Some(clinical::TEMP_CRITICAL_HIGH_C),
        format: ValueFormat::Decimal2,
        rule: StatusRule::Banded {
            low_inclusive: false,
        },
    },
    SignalRangeConfig {
        signal: SignalType::HeartRate,
        min: clinical::HR_NORMAL_MIN_BPM,
        max: clinical::HR_NORMAL_MAX_BPM,
        critical_low: Some(clinical::HR_CRITICAL_LOW_BPM),
        critical_high: Some(clinical::HR_CRITICAL_HIGH_BPM),
        format: ValueFormat::Integer,
        rule: StatusRule::Banded {
            low_inclusive: false,
        },
    },
    SignalRangeConfig {
        signal: SignalType::Hrv,
        min: clinical::HRV_NORMAL_MIN_MS,
        max: clinical::HRV_NORMAL_MAX_MS,
        critical_low: None,
        critical_high: None,
        format: ValueFormat::Integer,
        rule: StatusRule::NoCritical,
    },
    SignalRangeConfig {
        signal: SignalType::SpO2,
        min: clinical::SPO2_NORMAL_MIN_PCT,
        max: clinical::SPO2_NORMAL_MAX_PCT,
        critical_low: Some(clinical::SPO2_CRITICAL_LOW_PCT),
        critical_high: None,
        format: ValueFormat::Decimal2,
        rule: StatusRule::FloorOnly,
    },
    SignalRangeConfig {
        signal: SignalType::Conductance,
        min: clinical::EDA_NORMAL_MIN_US,
        max: clinical::EDA_NORMAL_MAX_US,
        critical_low: Some(clinical::EDA_CRITICAL_LOW_US),
        critical_high: Some(clinical::EDA_CRITICAL_HIGH_US),
        format: ValueFormat::Decimal2,
        rule: StatusRule::Banded {
            low_inclusive: true,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_index_matches_discriminant() {
        for signal in SignalType::ALL {
            assert_eq!(SignalRangeConfig::for_signal(signal).signal, signal);
        }
    }

    #[test]
    fn hrv_has_no_critical_bounds() {
        let cfg = SignalRangeConfig::for_signal(SignalType::Hrv);
        assert!(cfg.critical_low.is_none());
        assert!(cfg.critical_high.is_none());
    }

    #[test]
    fn integer_format_only_for_rate_signals() {
        for signal in SignalType::ALL {
            let cfg = SignalRangeConfig::for_signal(signal);
            let expect_integer =
                matches!(signal, SignalType::HeartRate | SignalType::Hrv);
            assert_eq!(cfg.format == ValueFormat::Integer, expect_integer);
        }
    }
}
