//! Intensity targets attached to steps.

use std::str::FromStr;

use crate::error::{Result, StructureError};

/// Physiological metric a target is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetMetric {
    /// Percentage of functional threshold power
    RelativeToFtp,
    /// Percentage of threshold heart rate
    RelativeToThresholdHr,
    /// Percentage of maximum heart rate
    RelativeToMaxHr,
    /// Power in watts
    AbsoluteWatts,
    /// Pedalling or stride cadence in rpm/spm
    Cadence,
    /// Rate of perceived effort on a 0-10 scale
    PerceivedEffort,
    /// Heart rate in beats per minute
    AbsoluteHeartRate,
}

/// Plausible values for a metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricBounds {
    pub min: f64,
    pub max: f64,
    /// Whether `min` itself is an acceptable value
    pub min_inclusive: bool,
}

impl MetricBounds {
    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.min_inclusive {
            value >= self.min
        } else {
            value > self.min
        };
        value.is_finite() && above_min && value <= self.max
    }
}

impl TargetMetric {
    pub const ALL: [TargetMetric; 7] = [
        TargetMetric::RelativeToFtp,
        TargetMetric::RelativeToThresholdHr,
        TargetMetric::RelativeToMaxHr,
        TargetMetric::AbsoluteWatts,
        TargetMetric::Cadence,
        TargetMetric::PerceivedEffort,
        TargetMetric::AbsoluteHeartRate,
    ];

    /// Canonical wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetMetric::RelativeToFtp => "relative_to_ftp",
            TargetMetric::RelativeToThresholdHr => "relative_to_threshold_hr",
            TargetMetric::RelativeToMaxHr => "relative_to_max_hr",
            TargetMetric::AbsoluteWatts => "absolute_watts",
            TargetMetric::Cadence => "cadence",
            TargetMetric::PerceivedEffort => "perceived_effort",
            TargetMetric::AbsoluteHeartRate => "absolute_heart_rate",
        }
    }

    /// Unit suffix used when displaying an intensity.
    pub fn unit(&self) -> &'static str {
        match self {
            TargetMetric::RelativeToFtp => "% FTP",
            TargetMetric::RelativeToThresholdHr => "% threshold HR",
            TargetMetric::RelativeToMaxHr => "% max HR",
            TargetMetric::AbsoluteWatts => "W",
            TargetMetric::Cadence => "rpm",
            TargetMetric::PerceivedEffort => "RPE",
            TargetMetric::AbsoluteHeartRate => "bpm",
        }
    }

    pub fn bounds(&self) -> MetricBounds {
        match self {
            TargetMetric::RelativeToFtp
            | TargetMetric::RelativeToThresholdHr
            | TargetMetric::RelativeToMaxHr => MetricBounds {
                min: 0.0,
                max: 200.0,
                min_inclusive: false,
            },
            TargetMetric::PerceivedEffort => MetricBounds {
                min: 0.0,
                max: 10.0,
                min_inclusive: true,
            },
            TargetMetric::AbsoluteWatts => MetricBounds {
                min: 0.0,
                max: 3000.0,
                min_inclusive: false,
            },
            TargetMetric::Cadence => MetricBounds {
                min: 0.0,
                max: 300.0,
                min_inclusive: false,
            },
            TargetMetric::AbsoluteHeartRate => MetricBounds {
                min: 0.0,
                max: 260.0,
                min_inclusive: false,
            },
        }
    }

    fn check(&self, label: &str, value: f64) -> Result<()> {
        let bounds = self.bounds();
        if bounds.contains(value) {
            return Ok(());
        }
        let open = if bounds.min_inclusive { '[' } else { '(' };
        Err(StructureError::invalid_intensity(self.as_str()).with_reason(format!(
            "{label} {value} outside {open}{}, {}]",
            bounds.min, bounds.max
        )))
    }
}

impl FromStr for TargetMetric {
    type Err = StructureError;

    /// Parses canonical tags as well as the spellings found in older
    /// documents (`RelativeToFTP`, `%FTP`, `rpe`, ...). Case, spaces, `_`,
    /// `-` and `%` are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "relativetoftp" | "ftp" | "percentftp" | "ftppercent" => Ok(TargetMetric::RelativeToFtp),
            "relativetothresholdhr" | "thresholdhr" | "percentthresholdhr" | "lthr" => {
                Ok(TargetMetric::RelativeToThresholdHr)
            }
            "relativetomaxhr" | "maxhr" | "percentmaxhr" => Ok(TargetMetric::RelativeToMaxHr),
            "absolutewatts" | "watts" | "power" => Ok(TargetMetric::AbsoluteWatts),
            "cadence" | "rpm" => Ok(TargetMetric::Cadence),
            "perceivedeffort" | "rpe" => Ok(TargetMetric::PerceivedEffort),
            "absoluteheartrate" | "heartrate" | "bpm" | "hr" => {
                Ok(TargetMetric::AbsoluteHeartRate)
            }
            _ => Err(StructureError::UnknownTargetType { tag: s.to_string() }),
        }
    }
}

/// A single intensity or a min/max band with an optional preferred value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intensity {
    Single(f64),
    Range {
        min: f64,
        max: f64,
        target: Option<f64>,
    },
}

impl Intensity {
    /// Midpoint used when a single representative value is needed.
    pub fn representative(&self) -> f64 {
        match *self {
            Intensity::Single(value) => value,
            Intensity::Range {
                target: Some(target),
                ..
            } => target,
            Intensity::Range { min, max, .. } => (min + max) / 2.0,
        }
    }
}

/// Intensity specification tied to one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    metric: TargetMetric,
    intensity: Intensity,
}

impl Target {
    /// Create a single-value target.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::InvalidIntensity` when `value` falls outside
    /// the metric's plausible range.
    pub fn single(metric: TargetMetric, value: f64) -> Result<Self> {
        metric.check("intensity", value)?;
        Ok(Self {
            metric,
            intensity: Intensity::Single(value),
        })
    }

    /// Create a range target.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::InvalidIntensity` when any bound is out of
    /// range, `min > max`, or `target` lies outside `[min, max]`.
    pub fn range(metric: TargetMetric, min: f64, max: f64, target: Option<f64>) -> Result<Self> {
        metric.check("min", min)?;
        metric.check("max", max)?;
        if min > max {
            return Err(StructureError::invalid_intensity(metric.as_str())
                .with_reason(format!("min {min} is greater than max {max}")));
        }
        if let Some(target) = target {
            metric.check("target", target)?;
            if target < min || target > max {
                return Err(StructureError::invalid_intensity(metric.as_str())
                    .with_reason(format!("target {target} outside [{min}, {max}]")));
            }
        }
        Ok(Self {
            metric,
            intensity: Intensity::Range { min, max, target },
        })
    }

    pub fn metric(&self) -> TargetMetric {
        self.metric
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }
}
