use stride_core::{
    ActivityClassification, Duration, IntervalSpec, PlanBuilder, PlanStructure, Step, Target,
    TargetMetric,
};

/// Timed step with a single %FTP target.
pub fn ftp_step(name: &str, minutes: f64, percent: f64) -> Step {
    Step::new(name, Duration::minutes(minutes).expect("valid duration"))
        .with_target(Target::single(TargetMetric::RelativeToFtp, percent).expect("valid target"))
}

/// Warm-up 10, build 5, 3 x (10 + 5), cool-down 10 minutes.
pub fn build_interval_plan() -> PlanStructure {
    let mut builder = PlanBuilder::new("Integration Intervals")
        .with_activity(ActivityClassification::new("bike").with_location("indoor"));
    builder
        .append_warmup(ftp_step("Warm up", 10.0, 55.0))
        .expect("warmup")
        .append_step(ftp_step("Build", 5.0, 75.0))
        .expect("build")
        .append_interval(IntervalSpec::new(
            3,
            vec![ftp_step("Interval", 10.0, 95.0), ftp_step("Recovery", 5.0, 50.0)],
        ))
        .expect("interval")
        .append_cooldown(ftp_step("Cool down", 10.0, 50.0))
        .expect("cooldown");
    builder.finalize().expect("Failed to finalize plan")
}
