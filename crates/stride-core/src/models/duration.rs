//! Duration value type: how long a step lasts.

use std::str::FromStr;

use crate::error::{Result, StructureError};

/// What a duration measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationKind {
    /// Wall-clock time
    Time,
    /// Distance covered
    Distance,
    /// Number of repetitions of a movement
    Repetitions,
}

impl DurationKind {
    /// Canonical wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationKind::Time => "time",
            DurationKind::Distance => "distance",
            DurationKind::Repetitions => "repetitions",
        }
    }
}

impl FromStr for DurationKind {
    type Err = StructureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "time" | "duration" => Ok(DurationKind::Time),
            "distance" => Ok(DurationKind::Distance),
            "repetitions" | "reps" | "repetition" => Ok(DurationKind::Repetitions),
            _ => Err(StructureError::UnknownDurationUnit { tag: s.to_string() }),
        }
    }
}

/// Unit attached to a duration magnitude. The unit determines the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
    Meters,
    Kilometers,
    Reps,
}

impl DurationUnit {
    /// Canonical wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Seconds => "seconds",
            DurationUnit::Minutes => "minutes",
            DurationUnit::Hours => "hours",
            DurationUnit::Meters => "meters",
            DurationUnit::Kilometers => "kilometers",
            DurationUnit::Reps => "reps",
        }
    }

    /// Short suffix used when displaying a duration.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DurationUnit::Seconds => "s",
            DurationUnit::Minutes => "min",
            DurationUnit::Hours => "h",
            DurationUnit::Meters => "m",
            DurationUnit::Kilometers => "km",
            DurationUnit::Reps => "reps",
        }
    }

    pub fn kind(&self) -> DurationKind {
        match self {
            DurationUnit::Seconds | DurationUnit::Minutes | DurationUnit::Hours => {
                DurationKind::Time
            }
            DurationUnit::Meters | DurationUnit::Kilometers => DurationKind::Distance,
            DurationUnit::Reps => DurationKind::Repetitions,
        }
    }

    /// Multiplier to seconds for time units.
    fn seconds_factor(&self) -> Option<f64> {
        match self {
            DurationUnit::Seconds => Some(1.0),
            DurationUnit::Minutes => Some(60.0),
            DurationUnit::Hours => Some(3600.0),
            DurationUnit::Meters | DurationUnit::Kilometers | DurationUnit::Reps => None,
        }
    }
}

impl FromStr for DurationUnit {
    type Err = StructureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "seconds" | "second" | "sec" | "secs" | "s" => Ok(DurationUnit::Seconds),
            "minutes" | "minute" | "min" | "mins" => Ok(DurationUnit::Minutes),
            "hours" | "hour" | "hr" | "hrs" | "h" => Ok(DurationUnit::Hours),
            "meters" | "meter" | "metres" | "metre" | "m" => Ok(DurationUnit::Meters),
            "kilometers" | "kilometer" | "kilometres" | "kilometre" | "km" => {
                Ok(DurationUnit::Kilometers)
            }
            "reps" | "rep" | "repetitions" => Ok(DurationUnit::Reps),
            _ => Err(StructureError::UnknownDurationUnit { tag: s.to_string() }),
        }
    }
}

/// A positive quantity of time, distance or repetitions.
///
/// Fields are private: every `Duration` in existence passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Duration {
    value: f64,
    unit: DurationUnit,
}

impl Duration {
    /// Create a duration, rejecting zero, negative and non-finite magnitudes.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::InvalidDuration` when `value <= 0` or is not
    /// finite.
    pub fn new(value: f64, unit: DurationUnit) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(StructureError::InvalidDuration { value });
        }
        Ok(Self { value, unit })
    }

    pub fn seconds(value: f64) -> Result<Self> {
        Self::new(value, DurationUnit::Seconds)
    }

    pub fn minutes(value: f64) -> Result<Self> {
        Self::new(value, DurationUnit::Minutes)
    }

    pub fn hours(value: f64) -> Result<Self> {
        Self::new(value, DurationUnit::Hours)
    }

    pub fn meters(value: f64) -> Result<Self> {
        Self::new(value, DurationUnit::Meters)
    }

    pub fn kilometers(value: f64) -> Result<Self> {
        Self::new(value, DurationUnit::Kilometers)
    }

    pub fn reps(value: f64) -> Result<Self> {
        Self::new(value, DurationUnit::Reps)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> DurationUnit {
        self.unit
    }

    pub fn kind(&self) -> DurationKind {
        self.unit.kind()
    }

    /// Wall-clock length in seconds, or `None` for distance and repetition
    /// durations. No pace model is applied.
    pub fn as_seconds(&self) -> Option<f64> {
        self.unit.seconds_factor().map(|factor| self.value * factor)
    }

    pub fn is_timed(&self) -> bool {
        self.kind() == DurationKind::Time
    }
}
