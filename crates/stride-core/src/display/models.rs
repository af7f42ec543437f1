//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the workout
//! models, separated from the model definitions to maintain clean separation
//! of concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Compact one-line steps with their targets and segment labels
//! - Nested lists for repetition blocks

use std::fmt;

use super::clock::Clock;
use crate::{
    metrics::{estimated_duration_seconds, PlanMetrics},
    models::{
        ActivityClassification, Duration, DurationKind, DurationUnit, Intensity, Node,
        PlanStructure, Repetition, SegmentRole, Step, Target, TargetMetric,
    },
};

impl fmt::Display for DurationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TargetMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit().abbreviation())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.metric().unit();
        // Percentages read as `90% FTP`, everything else as `250 W`.
        let separator = if unit.starts_with('%') { "" } else { " " };
        match self.intensity() {
            Intensity::Single(value) => write!(f, "{value}{separator}{unit}"),
            Intensity::Range { min, max, target } => {
                write!(f, "{min}-{max}{separator}{unit}")?;
                if let Some(target) = target {
                    write!(f, " (target {target})")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ActivityClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if let Some(location) = &self.location {
            write!(f, " ({location})")?;
        }
        Ok(())
    }
}

impl Step {
    /// Format the step as one list item, prefixed with `indent`.
    fn fmt_step(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        write!(f, "{indent}- {}: {}", self.name(), self.duration())?;

        if !self.targets().is_empty() {
            let targets: Vec<String> = self.targets().iter().map(ToString::to_string).collect();
            write!(f, " @ {}", targets.join(", "))?;
        }

        match (self.role(), self.segment_label()) {
            (Some(SegmentRole::Warmup), _) => write!(f, " _(warm-up)_")?,
            (Some(SegmentRole::Cooldown), _) => write!(f, " _(cool-down)_")?,
            (None, Some(label)) => write!(f, " [{label}]")?,
            (None, None) => {}
        }
        writeln!(f)?;

        if let Some(notes) = self.notes() {
            writeln!(f, "{indent}  > {notes}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_step(f, "")
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}x", self.repeat_count())?;
        if let Some(label) = self.segment_label() {
            write!(f, " [{label}]")?;
        }
        writeln!(f)?;
        for step in self.steps() {
            step.fmt_step(f, "  ")?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Step(step) => write!(f, "{step}"),
            Node::Repetition(repetition) => write!(f, "{repetition}"),
        }
    }
}

impl fmt::Display for PlanStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name())?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Activity: {}", self.activity())?;
        writeln!(f, "- Version: {}", self.version())?;
        writeln!(
            f,
            "- Estimated duration: {}",
            Clock(estimated_duration_seconds(self))
        )?;

        if let Some(desc) = self.description() {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        writeln!(f, "\n## Structure")?;
        writeln!(f)?;
        for node in self.nodes() {
            write!(f, "{node}")?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Metrics")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Computed duration: {} ({} s)",
            Clock(self.computed_duration_seconds),
            self.computed_duration_seconds
        )?;

        match self.declared_duration_seconds {
            Some(declared) => writeln!(
                f,
                "- Declared duration: {} ({declared} s)",
                Clock(declared)
            )?,
            None => writeln!(f, "- Declared duration: not declared")?,
        }
        if let Some(delta) = self.declared_duration_delta() {
            writeln!(f, "- Declared minus computed: {delta:+} s")?;
        }

        match self.declared_training_stress {
            Some(stress) => writeln!(f, "- Declared training stress: {stress}")?,
            None => writeln!(f, "- Declared training stress: not declared")?,
        }

        writeln!(f, "- Top-level nodes: {}", self.node_count)?;
        writeln!(f, "- Leaf steps: {}", self.leaf_step_count)?;
        if !self.is_fully_timed() {
            writeln!(
                f,
                "- Untimed steps excluded from the estimate: {}",
                self.untimed_step_count
            )?;
        }
        Ok(())
    }
}
