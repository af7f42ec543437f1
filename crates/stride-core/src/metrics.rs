//! Duration estimate derived from a plan's structure.
//!
//! Only time-based steps count. Distance and repetition steps contribute zero
//! seconds: turning them into wall-clock time needs a pace model this crate
//! does not have, and a guess would be misleading. A plan made only of such
//! steps therefore estimates to `0.0` seconds.
//!
//! Author-supplied estimates on the plan are reported next to the computed
//! value but never validated, overwritten or reconciled with it.

use serde::Serialize;

use crate::models::{Node, PlanStructure, Repetition, Step};

/// Seconds a step contributes to the estimate.
pub fn step_seconds(step: &Step) -> f64 {
    step.duration().as_seconds().unwrap_or(0.0)
}

/// Seconds a repetition contributes: one pass times the repeat count.
pub fn repetition_seconds(repetition: &Repetition) -> f64 {
    let per_iteration: f64 = repetition.steps().iter().map(step_seconds).sum();
    per_iteration * f64::from(repetition.repeat_count())
}

pub fn node_seconds(node: &Node) -> f64 {
    match node {
        Node::Step(step) => step_seconds(step),
        Node::Repetition(repetition) => repetition_seconds(repetition),
    }
}

/// Total estimated duration of a plan in seconds.
pub fn estimated_duration_seconds(plan: &PlanStructure) -> f64 {
    plan.nodes().iter().map(node_seconds).sum()
}

/// Computed figures for a plan, side by side with what its author declared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMetrics {
    /// Estimate from time-based steps only
    pub computed_duration_seconds: f64,
    /// `estimatedDurationSeconds` as supplied by the author
    pub declared_duration_seconds: Option<f64>,
    /// `estimatedTrainingStress` as supplied by the author
    pub declared_training_stress: Option<f64>,
    /// Number of top-level nodes
    pub node_count: usize,
    /// Number of leaf steps once repetitions are expanded
    pub leaf_step_count: usize,
    /// Expanded leaf steps whose duration is distance or repetitions
    pub untimed_step_count: usize,
}

impl PlanMetrics {
    pub fn from_plan(plan: &PlanStructure) -> Self {
        let (leaf_step_count, untimed_step_count) =
            plan.flatten().fold((0, 0), |(leaves, untimed), step| {
                let untimed = if step.duration().is_timed() {
                    untimed
                } else {
                    untimed + 1
                };
                (leaves + 1, untimed)
            });

        Self {
            computed_duration_seconds: estimated_duration_seconds(plan),
            declared_duration_seconds: plan.estimated_duration_seconds(),
            declared_training_stress: plan.estimated_training_stress(),
            node_count: plan.nodes().len(),
            leaf_step_count,
            untimed_step_count,
        }
    }

    /// Declared minus computed duration, when a duration was declared.
    pub fn declared_duration_delta(&self) -> Option<f64> {
        self.declared_duration_seconds
            .map(|declared| declared - self.computed_duration_seconds)
    }

    /// Whether every leaf step has a time-based duration, i.e. the computed
    /// estimate covers the whole session.
    pub fn is_fully_timed(&self) -> bool {
        self.untimed_step_count == 0
    }
}

impl From<&PlanStructure> for PlanMetrics {
    fn from(plan: &PlanStructure) -> Self {
        Self::from_plan(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityClassification, Duration};

    fn step(duration: Duration) -> Step {
        Step::new("step", duration)
    }

    #[test]
    fn test_time_units_convert_to_seconds() {
        assert_eq!(step_seconds(&step(Duration::seconds(45.0).unwrap())), 45.0);
        assert_eq!(step_seconds(&step(Duration::minutes(2.5).unwrap())), 150.0);
        assert_eq!(step_seconds(&step(Duration::hours(1.0).unwrap())), 3600.0);
    }

    #[test]
    fn test_untimed_steps_contribute_zero() {
        assert_eq!(step_seconds(&step(Duration::meters(400.0).unwrap())), 0.0);
        assert_eq!(step_seconds(&step(Duration::kilometers(5.0).unwrap())), 0.0);
        assert_eq!(step_seconds(&step(Duration::reps(12.0).unwrap())), 0.0);
    }

    #[test]
    fn test_repetition_multiplies_one_pass() {
        let repetition = Repetition::new(
            4,
            vec![
                step(Duration::minutes(3.0).unwrap()),
                step(Duration::meters(200.0).unwrap()),
                step(Duration::seconds(30.0).unwrap()),
            ],
        )
        .unwrap();

        assert_eq!(repetition_seconds(&repetition), 4.0 * 210.0);
    }

    #[test]
    fn test_metrics_keep_declared_values_separate() {
        let plan = PlanStructure::new(
            "Track session",
            ActivityClassification::new("run").with_location("track"),
            vec![
                Node::Step(step(Duration::kilometers(2.0).unwrap())),
                Node::Repetition(
                    Repetition::new(6, vec![step(Duration::meters(800.0).unwrap())]).unwrap(),
                ),
            ],
        )
        .unwrap()
        .with_estimated_duration_seconds(3600.0)
        .with_estimated_training_stress(85.0);

        let metrics = PlanMetrics::from_plan(&plan);

        assert_eq!(metrics.computed_duration_seconds, 0.0);
        assert_eq!(metrics.declared_duration_seconds, Some(3600.0));
        assert_eq!(metrics.declared_training_stress, Some(85.0));
        assert_eq!(metrics.declared_duration_delta(), Some(3600.0));
        assert_eq!(metrics.node_count, 2);
        assert_eq!(metrics.leaf_step_count, 7);
        assert_eq!(metrics.untimed_step_count, 7);
        assert!(!metrics.is_fully_timed());
    }

    #[test]
    fn test_delta_absent_without_declaration() {
        let plan = PlanStructure::new(
            "Short",
            ActivityClassification::new("bike"),
            vec![Node::Step(step(Duration::minutes(20.0).unwrap()))],
        )
        .unwrap();

        let metrics = PlanMetrics::from(&plan);
        assert_eq!(metrics.computed_duration_seconds, 1200.0);
        assert_eq!(metrics.declared_duration_delta(), None);
        assert!(metrics.is_fully_timed());
    }
}
