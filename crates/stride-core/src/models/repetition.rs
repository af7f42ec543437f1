//! Repetition blocks: a group of steps repeated a fixed number of times.

use super::Step;
use crate::error::{Result, StructureError};

/// Container repeating an ordered group of steps.
///
/// Only steps can be repeated; a repetition never holds another repetition.
#[derive(Debug, Clone, PartialEq)]
pub struct Repetition {
    repeat_count: u32,
    steps: Vec<Step>,
    segment_label: Option<String>,
}

impl Repetition {
    /// Create a repetition block.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::InvalidRepeatCount` when `repeat_count` is 0
    /// and `StructureError::EmptyRepetitionSteps` when `steps` is empty.
    pub fn new(repeat_count: u32, steps: Vec<Step>) -> Result<Self> {
        if repeat_count < 1 {
            return Err(StructureError::InvalidRepeatCount {
                count: i64::from(repeat_count),
            });
        }
        if steps.is_empty() {
            return Err(StructureError::EmptyRepetitionSteps);
        }
        Ok(Self {
            repeat_count,
            steps,
            segment_label: None,
        })
    }

    pub fn with_segment_label(mut self, label: impl Into<String>) -> Self {
        self.segment_label = Some(label.into());
        self
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    /// Steps of a single iteration.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn segment_label(&self) -> Option<&str> {
        self.segment_label.as_deref()
    }

    /// Every leaf step as executed: `repeat_count` passes over `steps`.
    pub fn flatten(&self) -> impl Iterator<Item = &Step> + '_ {
        (0..self.repeat_count).flat_map(move |_| self.steps.iter())
    }
}
