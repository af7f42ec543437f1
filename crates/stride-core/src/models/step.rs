//! Step model definition and related functionality.

use super::{Duration, Target};

/// Segment label reserved for warm-up steps.
pub const WARMUP_LABEL: &str = "warmup";
/// Segment label reserved for cool-down steps.
pub const COOLDOWN_LABEL: &str = "cooldown";

/// Presentation role carried by the reserved segment labels.
///
/// Roles never change how a step is aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    Warmup,
    Cooldown,
}

impl SegmentRole {
    pub fn label(&self) -> &'static str {
        match self {
            SegmentRole::Warmup => WARMUP_LABEL,
            SegmentRole::Cooldown => COOLDOWN_LABEL,
        }
    }
}

/// Leaf node of a workout: one duration with its intensity targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Short label shown to the athlete
    name: String,

    /// How long the step lasts
    duration: Duration,

    /// Simultaneous intensity targets, in authoring order
    targets: Vec<Target>,

    /// Free-form coaching notes
    notes: Option<String>,

    /// Segment this step belongs to (`warmup`, `cooldown`, `main`, ...)
    segment_label: Option<String>,
}

impl Step {
    /// Create a step without targets.
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
            targets: Vec::new(),
            notes: None,
            segment_label: None,
        }
    }

    /// Add one target after the existing ones.
    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        self.targets.extend(targets);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_segment_label(mut self, label: impl Into<String>) -> Self {
        self.segment_label = Some(label.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> &Duration {
        &self.duration
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn segment_label(&self) -> Option<&str> {
        self.segment_label.as_deref()
    }

    /// Reserved role derived from the segment label, if any.
    pub fn role(&self) -> Option<SegmentRole> {
        match self.segment_label.as_deref() {
            Some(WARMUP_LABEL) => Some(SegmentRole::Warmup),
            Some(COOLDOWN_LABEL) => Some(SegmentRole::Cooldown),
            _ => None,
        }
    }
}
