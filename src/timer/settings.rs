//! Timer settings and settings intake

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimerError};

/// Largest integer a setup form can submit without losing precision (2^53 - 1).
const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Validated settings for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSettings {
    /// Length of each active phase in seconds
    pub duration: u64,
    /// Length of each break phase in seconds
    pub break_duration: u64,
    /// Number of stations (active + break pairs)
    pub num_repeats: u32,
}

impl TimerSettings {
    /// Build settings, rejecting values the sequencer cannot run
    pub fn new(duration: u64, break_duration: u64, num_repeats: u32) -> Result<Self> {
        let settings = Self {
            duration,
            break_duration,
            num_repeats,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_repeats == 0 {
            return Err(TimerError::invalid("numRepeats", "must be at least 1"));
        }
        Ok(())
    }
}

/// A single numeric form field, sent either as a JSON number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl FieldValue {
    /// Interpret the field as a safe integer
    fn as_integer(&self) -> Option<i64> {
        let value = match self {
            Self::Number(n) => match n.as_i64() {
                Some(v) => v,
                None => whole_number(n.as_f64()?)?,
            },
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                match text.parse::<i64>() {
                    Ok(v) => v,
                    Err(_) => whole_number(parse_decimal(text)?)?,
                }
            }
        };

        (value.unsigned_abs() <= MAX_SAFE_INTEGER as u64).then_some(value)
    }
}

/// Decimal or exponent text such as "30.0" or "1e2". Rejects nan/inf spellings.
fn parse_decimal(text: &str) -> Option<f64> {
    let digits_only = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !digits_only {
        return None;
    }
    text.parse::<f64>().ok()
}

fn whole_number(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_INTEGER as f64 {
        return None;
    }
    Some(value as i64)
}

/// Settings payload submitted by the setup surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPayload {
    pub duration: FieldValue,
    pub break_duration: FieldValue,
    pub num_repeats: FieldValue,
}

impl SettingsPayload {
    pub fn new(
        duration: impl Into<FieldValue>,
        break_duration: impl Into<FieldValue>,
        num_repeats: impl Into<FieldValue>,
    ) -> Self {
        Self {
            duration: duration.into(),
            break_duration: break_duration.into(),
            num_repeats: num_repeats.into(),
        }
    }
}

/// Declared min/max bounds for each settings field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsBounds {
    pub duration: RangeInclusive<i64>,
    pub break_duration: RangeInclusive<i64>,
    pub num_repeats: RangeInclusive<i64>,
}

impl Default for SettingsBounds {
    fn default() -> Self {
        Self {
            duration: 1..=86_399,
            break_duration: 0..=86_399,
            num_repeats: 1..=99,
        }
    }
}

impl SettingsBounds {
    /// Validate a payload against the bounds and build settings from it
    pub fn check(&self, payload: &SettingsPayload) -> Result<TimerSettings> {
        let duration = check_field("duration", &payload.duration, &self.duration)?;
        let break_duration =
            check_field("breakDuration", &payload.break_duration, &self.break_duration)?;
        let num_repeats = check_field("numRepeats", &payload.num_repeats, &self.num_repeats)?;

        let num_repeats = u32::try_from(num_repeats)
            .map_err(|_| TimerError::invalid("numRepeats", "is too large"))?;

        TimerSettings::new(duration, break_duration, num_repeats)
    }
}

fn check_field(name: &'static str, value: &FieldValue, bounds: &RangeInclusive<i64>) -> Result<u64> {
    let value = value
        .as_integer()
        .ok_or_else(|| TimerError::invalid(name, "must be a whole number"))?;

    if !bounds.contains(&value) {
        return Err(TimerError::invalid(
            name,
            format!("must be between {} and {}", bounds.start(), bounds.end()),
        ));
    }

    u64::try_from(value).map_err(|_| TimerError::invalid(name, "must not be negative"))
}
