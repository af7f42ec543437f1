//! Built-in sample workouts.
//!
//! Each sample is authored through [`PlanBuilder`] and is a realistic session
//! for one sport. They double as documentation of the builder API and as
//! fixtures for the CLI.

use crate::{
    builder::{IntervalSpec, PlanBuilder},
    error::Result,
    models::{ActivityClassification, Duration, PlanStructure, Step, Target, TargetMetric},
};

/// A named sample and the function that builds it.
pub struct Sample {
    /// Identifier used on the command line
    pub slug: &'static str,
    pub build: fn() -> Result<PlanStructure>,
}

pub static SAMPLES: [Sample; 4] = [
    Sample {
        slug: "sweet-spot-intervals",
        build: sweet_spot_intervals,
    },
    Sample {
        slug: "track-repeats",
        build: track_repeats,
    },
    Sample {
        slug: "strength-circuit",
        build: strength_circuit,
    },
    Sample {
        slug: "easy-run",
        build: easy_run,
    },
];

/// Looks a sample up by slug.
pub fn find(slug: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.slug == slug)
}

/// Builds every sample in declaration order.
pub fn all() -> Result<Vec<PlanStructure>> {
    SAMPLES.iter().map(|sample| (sample.build)()).collect()
}

/// Indoor ride: 10 min warm-up, 5 min build, 3 x (10 min sweet spot, 5 min
/// recovery), 10 min cool-down. Seventy minutes in total.
pub fn sweet_spot_intervals() -> Result<PlanStructure> {
    let mut builder = PlanBuilder::new("Sweet Spot Intervals")
        .with_description("Three long sweet spot efforts to build sustainable power.")
        .with_activity(ActivityClassification::new("bike").with_location("indoor"))
        .with_estimated_duration_seconds(4200.0)
        .with_estimated_training_stress(72.0);

    builder
        .append_warmup(
            Step::new("Warm up", Duration::minutes(10.0)?)
                .with_target(Target::range(TargetMetric::RelativeToFtp, 50.0, 65.0, None)?),
        )?
        .append_step(
            Step::new("Build", Duration::minutes(5.0)?)
                .with_target(Target::single(TargetMetric::RelativeToFtp, 75.0)?),
        )?
        .append_interval(
            IntervalSpec::new(
                3,
                vec![
                    Step::new("Sweet spot", Duration::minutes(10.0)?)
                        .with_target(Target::range(
                            TargetMetric::RelativeToFtp,
                            88.0,
                            94.0,
                            Some(90.0),
                        )?)
                        .with_target(Target::single(TargetMetric::Cadence, 90.0)?),
                    Step::new("Recovery", Duration::minutes(5.0)?)
                        .with_target(Target::single(TargetMetric::RelativeToFtp, 55.0)?),
                ],
            )
            .with_segment_label("main set"),
        )?
        .append_cooldown(
            Step::new("Cool down", Duration::minutes(10.0)?)
                .with_target(Target::single(TargetMetric::RelativeToFtp, 50.0)?),
        )?;

    builder.finalize()
}

/// Track session measured in distance only; its time estimate is zero.
pub fn track_repeats() -> Result<PlanStructure> {
    let mut builder = PlanBuilder::new("Track Repeats")
        .with_description("Six 800 m repeats at threshold with jog recoveries.")
        .with_activity(ActivityClassification::new("run").with_location("track"))
        .with_estimated_duration_seconds(3600.0)
        .with_estimated_training_stress(80.0);

    builder
        .append_warmup(
            Step::new("Easy jog", Duration::kilometers(2.0)?)
                .with_target(Target::single(TargetMetric::PerceivedEffort, 3.0)?),
        )?
        .append_interval(IntervalSpec::new(
            6,
            vec![
                Step::new("800 m repeat", Duration::meters(800.0)?)
                    .with_target(Target::range(
                        TargetMetric::RelativeToThresholdHr,
                        95.0,
                        100.0,
                        None,
                    )?)
                    .with_notes("Even splits; the last repeat should feel like the first."),
                Step::new("Recovery jog", Duration::meters(400.0)?)
                    .with_target(Target::single(TargetMetric::PerceivedEffort, 2.0)?),
            ],
        ))?
        .append_cooldown(Step::new("Jog home", Duration::kilometers(1.5)?))?;

    builder.finalize()
}

/// Gym circuit mixing repetition counts with one timed hold.
pub fn strength_circuit() -> Result<PlanStructure> {
    let mut builder = PlanBuilder::new("Strength Circuit")
        .with_description("Full-body circuit, minimal rest between exercises.")
        .with_activity(ActivityClassification::new("strength").with_location("gym"));

    builder
        .append_warmup(
            Step::new("Easy row", Duration::minutes(5.0)?)
                .with_target(Target::single(TargetMetric::RelativeToMaxHr, 60.0)?),
        )?
        .append_interval(IntervalSpec::new(
            3,
            vec![
                Step::new("Goblet squat", Duration::reps(12.0)?)
                    .with_target(Target::single(TargetMetric::PerceivedEffort, 7.0)?),
                Step::new("Push-up", Duration::reps(15.0)?),
                Step::new("Plank", Duration::seconds(45.0)?),
            ],
        ))?;

    builder.finalize()
}

/// Single aerobic step capped by heart rate.
pub fn easy_run() -> Result<PlanStructure> {
    let mut builder = PlanBuilder::new("Easy Run")
        .with_activity(ActivityClassification::new("run").with_location("outdoor"))
        .with_estimated_training_stress(40.0);

    builder.append_step(
        Step::new("Aerobic run", Duration::minutes(45.0)?)
            .with_target(Target::range(TargetMetric::AbsoluteHeartRate, 130.0, 145.0, None)?)
            .with_notes("Conversational pace throughout."),
    )?;

    builder.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{estimated_duration_seconds, PlanMetrics};

    #[test]
    fn test_every_sample_builds() {
        let plans = all().unwrap();
        assert_eq!(plans.len(), SAMPLES.len());
    }

    #[test]
    fn test_find_by_slug() {
        let sample = find("easy-run").expect("easy-run sample");
        assert_eq!((sample.build)().unwrap().name(), "Easy Run");
        assert!(find("marathon").is_none());
    }

    #[test]
    fn test_sample_duration_estimates() {
        assert_eq!(estimated_duration_seconds(&sweet_spot_intervals().unwrap()), 4200.0);
        assert_eq!(estimated_duration_seconds(&track_repeats().unwrap()), 0.0);
        // 5 min row + 3 x 45 s plank; squats and push-ups count for nothing
        assert_eq!(estimated_duration_seconds(&strength_circuit().unwrap()), 435.0);
        assert_eq!(estimated_duration_seconds(&easy_run().unwrap()), 2700.0);
    }

    #[test]
    fn test_track_repeats_declared_duration_is_kept() {
        let metrics = PlanMetrics::from_plan(&track_repeats().unwrap());
        assert_eq!(metrics.computed_duration_seconds, 0.0);
        assert_eq!(metrics.declared_duration_seconds, Some(3600.0));
        assert_eq!(metrics.leaf_step_count, 14);
    }
}
