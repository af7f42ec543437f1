//! Fluent construction of workout plans.
//!
//! [`PlanBuilder`] accumulates top-level nodes and produces an immutable
//! [`PlanStructure`] on [`PlanBuilder::finalize`]. It has two states:
//!
//! ```text
//! ┌─────────────┐   finalize()   ┌─────────────┐
//! │  Building   │───────────────▶│  Finalized  │
//! │ (append_*)  │                │ (terminal)  │
//! └─────────────┘                └─────────────┘
//! ```
//!
//! Appends validate immediately and fail at the call that caused the
//! problem. Only the "at least one node" rule is checked at finalize time, so
//! nodes can be appended in any order. Once finalized, every further append
//! and a second `finalize()` fail with
//! [`StructureError::BuilderAlreadyFinalized`].
//!
//! # Examples
//!
//! ```rust
//! use stride_core::{
//!     builder::{IntervalSpec, PlanBuilder},
//!     metrics::estimated_duration_seconds,
//!     models::{ActivityClassification, Duration, Step},
//! };
//!
//! # fn example() -> stride_core::Result<()> {
//! let mut builder = PlanBuilder::new("Over-unders")
//!     .with_activity(ActivityClassification::new("bike").with_location("indoor"));
//!
//! builder
//!     .append_warmup(Step::new("Easy spin", Duration::minutes(10.0)?))?
//!     .append_interval(IntervalSpec::new(
//!         3,
//!         vec![
//!             Step::new("Over", Duration::minutes(2.0)?),
//!             Step::new("Under", Duration::minutes(3.0)?),
//!         ],
//!     ))?
//!     .append_cooldown(Step::new("Spin down", Duration::minutes(5.0)?))?;
//!
//! let plan = builder.finalize()?;
//! assert_eq!(estimated_duration_seconds(&plan), 1800.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::debug;

use crate::{
    error::{Result, StructureError},
    models::{
        plan::finite_estimate, ActivityClassification, Node, PlanStructure, Repetition,
        SegmentRole, Step, SCHEMA_VERSION,
    },
};


/// Lifecycle of a [`PlanBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Accepting appends
    Building,
    /// Plan produced; terminal
    Finalized,
}

/// Input for [`PlanBuilder::append_interval`].
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSpec {
    pub repeat_count: u32,
    pub steps: Vec<Step>,
    pub segment_label: Option<String>,
}

impl IntervalSpec {
    pub fn new(repeat_count: u32, steps: Vec<Step>) -> Self {
        Self {
            repeat_count,
            steps,
            segment_label: None,
        }
    }

    pub fn with_segment_label(mut self, label: impl Into<String>) -> Self {
        self.segment_label = Some(label.into());
        self
    }
}

/// Stateful accumulator that produces a [`PlanStructure`].
///
/// The node buffer is private; callers only ever see the independent copy
/// returned by [`PlanBuilder::finalize`].
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    name: String,
    description: Option<String>,
    activity: ActivityClassification,
    estimated_duration_seconds: Option<f64>,
    estimated_training_stress: Option<f64>,
    nodes: Vec<Node>,
    state: BuilderState,
}

impl PlanBuilder {
    /// Creates a new builder for a plan with the given name.
    ///
    /// The activity defaults to an unspecified category until
    /// [`PlanBuilder::with_activity`] is called.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            activity: ActivityClassification::new("general"),
            estimated_duration_seconds: None,
            estimated_training_stress: None,
            nodes: Vec::new(),
            state: BuilderState::Building,
        }
    }

    /// Starts a builder seeded with a copy of an existing plan.
    pub fn from_plan(plan: &PlanStructure) -> Self {
        Self {
            name: plan.name.clone(),
            description: plan.description.clone(),
            activity: plan.activity.clone(),
            estimated_duration_seconds: plan.estimated_duration_seconds,
            estimated_training_stress: plan.estimated_training_stress,
            nodes: plan.nodes.clone(),
            state: BuilderState::Building,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_activity(mut self, activity: ActivityClassification) -> Self {
        self.activity = activity;
        self
    }

    /// Records an author-supplied duration. It is kept as-is and never
    /// compared with the computed estimate. NaN and infinities have no JSON
    /// form and are dropped.
    pub fn with_estimated_duration_seconds(mut self, seconds: f64) -> Self {
        self.estimated_duration_seconds = finite_estimate(seconds);
        self
    }

    /// Records an author-supplied training stress annotation. Non-finite
    /// values are dropped.
    pub fn with_estimated_training_stress(mut self, stress: f64) -> Self {
        self.estimated_training_stress = finite_estimate(stress);
        self
    }

    /// Appends a single step.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::BuilderAlreadyFinalized` after `finalize()`.
    pub fn append_step(&mut self, step: Step) -> Result<&mut Self> {
        self.append_node(Node::Step(step))
    }

    /// Appends a repetition block built from `spec`.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::InvalidRepeatCount` or
    /// `StructureError::EmptyRepetitionSteps` for an invalid block and
    /// `StructureError::BuilderAlreadyFinalized` after `finalize()`.
    pub fn append_interval(&mut self, spec: IntervalSpec) -> Result<&mut Self> {
        self.ensure_building()?;
        let IntervalSpec {
            repeat_count,
            steps,
            segment_label,
        } = spec;
        let mut repetition = Repetition::new(repeat_count, steps)?;
        if let Some(label) = segment_label {
            repetition = repetition.with_segment_label(label);
        }
        self.append_node(Node::Repetition(repetition))
    }

    /// Appends a step tagged with the warm-up role.
    pub fn append_warmup(&mut self, step: Step) -> Result<&mut Self> {
        self.append_step(step.with_segment_label(SegmentRole::Warmup.label()))
    }

    /// Appends a step tagged with the cool-down role.
    pub fn append_cooldown(&mut self, step: Step) -> Result<&mut Self> {
        self.append_step(step.with_segment_label(SegmentRole::Cooldown.label()))
    }

    /// Appends an already constructed node.
    pub fn append_node(&mut self, node: Node) -> Result<&mut Self> {
        self.ensure_building()?;
        self.nodes.push(node);
        Ok(self)
    }

    /// Validates the accumulated nodes and returns an independent plan.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::EmptyPlan` when nothing was appended (the
    /// builder stays in `Building`), and
    /// `StructureError::BuilderAlreadyFinalized` on a second call.
    pub fn finalize(&mut self) -> Result<PlanStructure> {
        self.ensure_building()?;
        if self.nodes.is_empty() {
            return Err(StructureError::EmptyPlan);
        }

        let plan = PlanStructure {
            version: SCHEMA_VERSION.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            activity: self.activity.clone(),
            estimated_duration_seconds: self.estimated_duration_seconds,
            estimated_training_stress: self.estimated_training_stress,
            nodes: self.nodes.clone(),
        };
        self.state = BuilderState::Finalized;
        debug!(
            "Finalized plan '{}' with {} top-level nodes",
            plan.name,
            plan.nodes.len()
        );
        Ok(plan)
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    pub fn is_finalized(&self) -> bool {
        self.state == BuilderState::Finalized
    }

    /// Number of top-level nodes appended so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn ensure_building(&self) -> Result<()> {
        match self.state {
            BuilderState::Building => Ok(()),
            BuilderState::Finalized => Err(StructureError::BuilderAlreadyFinalized),
        }
    }
}

impl PlanStructure {
    /// Starts a new builder seeded with this plan; the plan itself is left
    /// untouched.
    pub fn to_builder(&self) -> PlanBuilder {
        PlanBuilder::from_plan(self)
    }
}
