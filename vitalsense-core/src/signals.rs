//! Signal and reading types for the ingestion pipeline
//!
//! ## Overview
//!
//! This module defines the data carried through VitalSense: the closed set of
//! physiological signal types, the raw reading batch delivered by the hub,
//! and the classified per-signal result handed to the presentation layer.
//!
//! ## Memory Model
//!
//! All types here are designed for embedded constraints:
//! - **Stack-allocated**: no heap required, `Copy` where the payload allows
//! - **Fixed-capacity strings**: formatted values use inline storage
//! - **Transient**: a `ReadingBatch` is consumed synchronously into one
//!   classified update and then discarded; nothing is retained across batches
//!
//! ## Batch Semantics
//!
//! The hub pushes whatever it sampled since the last frame, so any subset of
//! the five signals may be present. A slot that is absent means "key not in
//! the frame". A slot holding exactly `0.0` is still classified, but the
//! stress estimator treats it as "sensor not attached" (see
//! [`crate::stress::is_signal_present`]).

use heapless::String;

/// Maximum length of a formatted reading value
///
/// Sized so any finite `f32` rendered with two decimals fits without
/// truncation.
pub const MAX_FORMATTED_LEN: usize = 48;

/// Physiological signal enumeration
///
/// Fixed, closed set. The discriminant doubles as the index into the
/// process-wide configuration tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SignalType {
    /// Skin temperature (°C)
    Temperature = 0,
    /// Heart rate (beats per minute)
    HeartRate = 1,
    /// Heart-rate variability, RMSSD (ms)
    Hrv = 2,
    /// Blood oxygen saturation (%)
    SpO2 = 3,
    /// Skin conductance / electrodermal activity (μS)
    Conductance = 4,
}

impl SignalType {
    /// All signal types in canonical presentation order
    ///
    /// Classification lists are emitted in this order, skipping absent slots.
    pub const ALL: [SignalType; 5] = [
        SignalType::Temperature,
        SignalType::HeartRate,
        SignalType::Hrv,
        SignalType::SpO2,
        SignalType::Conductance,
    ];

    /// Get the hub's wire key for this signal
    pub const fn name(&self) -> &'static str {
        match self {
            SignalType::Temperature => "temperature",
            SignalType::HeartRate => "heartRate",
            SignalType::Hrv => "hrv",
            SignalType::SpO2 => "spo2",
            SignalType::Conductance => "conductance",
        }
    }

    /// Get expected unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            SignalType::Temperature => "°C",
            SignalType::HeartRate => "bpm",
            SignalType::Hrv => "ms",
            SignalType::SpO2 => "%",
            SignalType::Conductance => "μS",
        }
    }
}

/// Severity classification for a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StatusLabel {
    /// Reading is inside the normal band
    Normal = 0,
    /// Reading is below the normal band
    Low = 1,
    /// Reading is above the normal band
    High = 2,
    /// Reading is outside the critical bounds
    ///
    /// Only reachable for signal types with configured critical bounds;
    /// HRV has no critical tier.
    Critical = 3,
}

impl StatusLabel {
    /// Display label for the presentation layer
    pub const fn label(&self) -> &'static str {
        match self {
            StatusLabel::Normal => "Normal",
            StatusLabel::Low => "Low",
            StatusLabel::High => "High",
            StatusLabel::Critical => "Critical",
        }
    }
}

/// One arrival of raw signal values from the hub
///
/// Maps a subset of [`SignalType`] to a raw numeric value. Values are assumed
/// to be valid finite numbers; filtering malformed frames is the transport
/// layer's job.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ReadingBatch {
    /// Skin temperature in °C, if sampled
    pub temperature: Option<f32>,
    /// Heart rate in bpm, if sampled
    pub heart_rate: Option<f32>,
    /// HRV (RMSSD) in ms, if sampled
    pub hrv: Option<f32>,
    /// SpO2 in %, if sampled
    pub spo2: Option<f32>,
    /// Skin conductance in μS, if sampled
    pub conductance: Option<f32>,
}

impl ReadingBatch {
    /// Create a batch with no signals present
    pub const fn empty() -> Self {
        Self {
            temperature: None,
            heart_rate: None,
            hrv: None,
            spo2: None,
            conductance: None,
        }
    }

    /// Get the raw value for a signal, if present in this batch
    pub const fn get(&self, signal: SignalType) -> Option<f32> {
        match signal {
            SignalType::Temperature => self.temperature,
            SignalType::HeartRate => self.heart_rate,
            SignalType::Hrv => self.hrv,
            SignalType::SpO2 => self.spo2,
            SignalType::Conductance => self.conductance,
        }
    }

    /// Set the raw value for a signal
    pub fn set(&mut self, signal: SignalType, value: f32) {
        match signal {
            SignalType::Temperature => self.temperature = Some(value),
            SignalType::HeartRate => self.heart_rate = Some(value),
            SignalType::Hrv => self.hrv = Some(value),
            SignalType::SpO2 => self.spo2 = Some(value),
            SignalType::Conductance => self.conductance = Some(value),
        }
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, signal: SignalType, value: f32) -> Self {
        self.set(signal, value);
        self
    }

    /// Check whether no signal is present at all
    pub fn is_empty(&self) -> bool {
        SignalType::ALL.iter().all(|s| self.get(*s).is_none())
    }
}

/// Classified reading for one signal, ready for presentation
///
/// Carries the formatted value (per the signal's format rule) and the
/// severity label. The raw value is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Signal this result belongs to
    pub signal: SignalType,
    /// Raw value rendered per the signal's format rule
    pub formatted: String<MAX_FORMATTED_LEN>,
    /// Severity classification
    pub status: StatusLabel,
}
