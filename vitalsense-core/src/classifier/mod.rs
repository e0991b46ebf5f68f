//! Per-Signal Range Classification
//!
//! ## Overview
//!
//! Maps a raw numeric reading to a severity label ([`StatusLabel`]) and a
//! formatted display value, using the per-signal configuration table in
//! [`config`]. Classification is a pure function of the raw value: no
//! history, no side effects, safe to invoke concurrently for different
//! signals.
//!
//! ## Classification Order
//!
//! Checks run in fixed priority order, first match wins:
//!
//! 1. Critical bounds (strict `<` / `>`, only where configured)
//! 2. Low bound (strict for most signals; inclusive for conductance)
//! 3. High bound (where the signal has a High tier)
//! 4. Normal
//!
//! ## No Input Validation
//!
//! Any finite input produces a result. A negative temperature is not
//! rejected; it falls into Critical via the thresholds like any other
//! out-of-band reading. Non-finite values are the transport layer's
//! responsibility to filter upstream.
//!
//! ## Usage
//!
//! ```
//! use vitalsense_core::classifier::classify;
//! use vitalsense_core::signals::{SignalType, StatusLabel};
//!
//! let result = classify(SignalType::HeartRate, 75.4);
//! assert_eq!(result.status, StatusLabel::Normal);
//! assert_eq!(result.formatted.as_str(), "75");
//! ```

mod config;

pub use config::{SignalRangeConfig, StatusRule, ValueFormat, RANGE_TABLE};

use core::fmt::Write;

use heapless::String;

use crate::signals::{ClassificationResult, SignalType, StatusLabel, MAX_FORMATTED_LEN};

/// Classify a raw reading for one signal
///
/// Pure function: identical input always yields an identical result.
pub fn classify(signal: SignalType, raw: f32) -> ClassificationResult {
    let cfg = SignalRangeConfig::for_signal(signal);
    ClassificationResult {
        signal,
        formatted: format_value(cfg.format, raw),
        status: status_for(cfg, raw),
    }
}

/// Render a raw value per a format rule
///
/// Integer formatting rounds to the nearest whole number (ties away from
/// zero, matching the hub firmware's display rounding).
pub fn format_value(format: ValueFormat, raw: f32) -> String<MAX_FORMATTED_LEN> {
    let mut out = String::new();
    // The buffer is sized for any finite f32; write cannot fail here
    let _ = match format {
        ValueFormat::Decimal2 => write!(out, "{:.2}", raw),
        ValueFormat::Integer => write!(out, "{}", libm::roundf(raw) as i64),
    };
    out
}

/// Evaluate the status rule for one configuration row
///
/// Critical bounds are checked first and only where configured, so the
/// generic arm order encodes the documented first-match-wins priority.
fn status_for(cfg: &SignalRangeConfig, value: f32) -> StatusLabel {
    if let Some(critical_low) = cfg.critical_low {
        if value < critical_low {
            return StatusLabel::Critical;
        }
    }
    if let Some(critical_high) = cfg.critical_high {
        if value > critical_high {
            return StatusLabel::Critical;
        }
    }

    match cfg.rule {
        StatusRule::Banded { low_inclusive } => {
            let below = if low_inclusive {
                value <= cfg.min
            } else {
                value < cfg.min
            };
            if below {
                StatusLabel::Low
            } else if value > cfg.max {
                StatusLabel::High
            } else {
                StatusLabel::Normal
            }
        }
        StatusRule::NoCritical => {
            if value < cfg.min {
                StatusLabel::Low
            } else if value > cfg.max {
                StatusLabel::High
            } else {
                StatusLabel::Normal
            }
        }
        StatusRule::FloorOnly => {
            if value < cfg.min {
                StatusLabel::Low
            } else {
                StatusLabel::Normal
            }
        }
    }
}
