//! Plan structure definition and related functionality.

use super::{Repetition, Step};
use crate::error::{Result, StructureError};

/// Version tag carried by every canonical plan.
pub const SCHEMA_VERSION: &str = "2.0";

/// Sport and setting a plan is written for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityClassification {
    /// Sport category, e.g. `bike`, `run`, `strength`
    pub category: String,
    /// Where the session happens, e.g. `indoor`, `outdoor`, `track`
    pub location: Option<String>,
}

impl ActivityClassification {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Top-level entry of a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Step(Step),
    Repetition(Repetition),
}

impl Node {
    /// Leaf steps in execution order.
    pub fn flatten(&self) -> Box<dyn Iterator<Item = &Step> + '_> {
        match self {
            Node::Step(step) => Box::new(std::iter::once(step)),
            Node::Repetition(repetition) => Box::new(repetition.flatten()),
        }
    }

    pub fn segment_label(&self) -> Option<&str> {
        match self {
            Node::Step(step) => step.segment_label(),
            Node::Repetition(repetition) => repetition.segment_label(),
        }
    }
}

impl From<Step> for Node {
    fn from(step: Step) -> Self {
        Node::Step(step)
    }
}

impl From<Repetition> for Node {
    fn from(repetition: Repetition) -> Self {
        Node::Repetition(repetition)
    }
}

/// Complete, validated workout plan.
///
/// Once constructed a plan is never mutated; editing goes through
/// [`PlanStructure::to_builder`] and produces a new plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStructure {
    pub(crate) version: String,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) activity: ActivityClassification,
    /// Author-supplied, never recomputed
    pub(crate) estimated_duration_seconds: Option<f64>,
    /// Author-supplied, never recomputed
    pub(crate) estimated_training_stress: Option<f64>,
    pub(crate) nodes: Vec<Node>,
}

impl PlanStructure {
    /// Assemble a plan directly from nodes.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::EmptyPlan` when `nodes` is empty.
    pub fn new(
        name: impl Into<String>,
        activity: ActivityClassification,
        nodes: Vec<Node>,
    ) -> Result<Self> {
        if nodes.is_empty() {
            return Err(StructureError::EmptyPlan);
        }
        Ok(Self {
            version: SCHEMA_VERSION.to_string(),
            name: name.into(),
            description: None,
            activity,
            estimated_duration_seconds: None,
            estimated_training_stress: None,
            nodes,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Author-supplied duration in seconds; NaN and infinities are dropped.
    pub fn with_estimated_duration_seconds(mut self, seconds: f64) -> Self {
        self.estimated_duration_seconds = finite_estimate(seconds);
        self
    }

    /// Author-supplied training stress; NaN and infinities are dropped.
    pub fn with_estimated_training_stress(mut self, stress: f64) -> Self {
        self.estimated_training_stress = finite_estimate(stress);
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn activity(&self) -> &ActivityClassification {
        &self.activity
    }

    /// Duration declared by the plan's author, if any.
    pub fn estimated_duration_seconds(&self) -> Option<f64> {
        self.estimated_duration_seconds
    }

    /// Training stress declared by the plan's author, if any.
    pub fn estimated_training_stress(&self) -> Option<f64> {
        self.estimated_training_stress
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Every leaf step in execution order, repetitions expanded.
    pub fn flatten(&self) -> impl Iterator<Item = &Step> + '_ {
        self.nodes.iter().flat_map(Node::flatten)
    }
}

/// `None` for NaN and infinities, which JSON cannot encode.
pub(crate) fn finite_estimate(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
