mod common;

use std::sync::Arc;
use std::thread;

use serde_json::json;
use stride_core::{
    metrics::{estimated_duration_seconds, PlanMetrics},
    normalize::{normalize, normalize_json, normalize_value},
    ActivityClassification, Duration, IntervalSpec, Node, PlanBuilder, PlanDocument, Step,
    StructureError, Target, TargetMetric,
};

use common::{build_interval_plan, ftp_step};

#[test]
fn test_interval_plan_estimates_seventy_minutes() {
    let plan = build_interval_plan();

    assert_eq!(estimated_duration_seconds(&plan), 4200.0);
    assert_eq!(plan.flatten().count(), 3 + 3 * 2);
}

#[test]
fn test_untimed_plan_estimates_zero_by_policy() {
    let mut builder = PlanBuilder::new("Distance and reps only")
        .with_activity(ActivityClassification::new("run"))
        .with_estimated_duration_seconds(2400.0);
    builder
        .append_step(Step::new("Run", Duration::kilometers(5.0).unwrap()))
        .unwrap()
        .append_interval(IntervalSpec::new(
            3,
            vec![
                Step::new("Strides", Duration::meters(100.0).unwrap()),
                Step::new("Lunges", Duration::reps(20.0).unwrap()),
            ],
        ))
        .unwrap();
    let plan = builder.finalize().unwrap();

    // Distance and repetition steps are never converted to time.
    assert_eq!(estimated_duration_seconds(&plan), 0.0);

    let metrics = PlanMetrics::from_plan(&plan);
    assert_eq!(metrics.computed_duration_seconds, 0.0);
    assert_eq!(metrics.declared_duration_seconds, Some(2400.0));
    assert_eq!(metrics.untimed_step_count, 7);
}

#[test]
fn test_repetition_flatten_matches_duration_product() {
    for count in 1..=5u32 {
        let steps = vec![ftp_step("On", 4.0, 105.0), ftp_step("Off", 2.0, 55.0)];
        let mut builder = PlanBuilder::new("Product");
        builder
            .append_interval(IntervalSpec::new(count, steps))
            .unwrap();
        let plan = builder.finalize().unwrap();

        let Node::Repetition(repetition) = &plan.nodes()[0] else {
            panic!("expected a repetition");
        };
        assert_eq!(repetition.flatten().count(), count as usize * 2);

        let flattened: f64 = repetition
            .flatten()
            .filter_map(|step| step.duration().as_seconds())
            .sum();
        assert_eq!(flattened, f64::from(count) * 360.0);
        assert_eq!(estimated_duration_seconds(&plan), flattened);
    }
}

#[test]
fn test_builder_plan_round_trips_through_wire_format() {
    let plan = build_interval_plan();

    let document = PlanDocument::from(&plan);
    let json = document.to_json_pretty().unwrap();
    let reparsed = PlanDocument::from_json(&json).unwrap();

    assert_eq!(reparsed, document);
    assert_eq!(normalize(&reparsed).unwrap(), plan);
}

#[test]
fn test_canonical_wire_shape() {
    let plan = build_interval_plan();
    let value = serde_json::to_value(PlanDocument::from(&plan)).unwrap();

    assert_eq!(value["version"], "2.0");
    assert_eq!(
        value["activityClassification"],
        json!({ "category": "bike", "location": "indoor" })
    );
    assert!(value.get("estimatedDurationSeconds").is_none());

    let steps = &value["structure"]["steps"];
    assert_eq!(steps[0]["type"], "step");
    assert_eq!(steps[0]["segmentLabel"], "warmup");
    assert_eq!(
        steps[0]["duration"],
        json!({ "type": "time", "value": 10.0, "unit": "minutes" })
    );
    assert_eq!(
        steps[0]["targets"],
        json!([{ "type": "relative_to_ftp", "intensity": 55.0 }])
    );
    assert_eq!(steps[2]["type"], "repetition");
    assert_eq!(steps[2]["repeat"], 3);
    assert_eq!(steps[2]["steps"].as_array().map(Vec::len), Some(2));
    assert!(steps[2].get("targets").is_none());
}

#[test]
fn test_legacy_batch_error_applies_nothing() {
    let result = normalize_value(json!({
        "name": "Mixed legacy",
        "activityClassification": "outdoor_bike",
        "structure": { "steps": [
            {
                "type": "step",
                "name": "Fine",
                "duration": { "type": "time", "value": 10, "unit": "minutes" },
                "targets": [{ "type": "RelativeToFTP", "intensity": 60 }]
            },
            {
                "type": "repetition",
                "repeat": 0,
                "steps": [{
                    "type": "step",
                    "name": "Work",
                    "duration": { "type": "time", "value": 1, "unit": "minutes" },
                    "targets": []
                }]
            },
            {
                "type": "step",
                "name": "Broken",
                "duration": { "type": "time", "value": 5, "unit": "minutes" },
                "targets": [{ "type": "bogus", "intensity": 1 }]
            }
        ] }
    }));

    let entries = match result {
        Err(StructureError::MalformedLegacyNode(entries)) => entries,
        other => panic!("expected a batch error, got {other:?}"),
    };
    assert_eq!(entries.len(), 2);
    assert!(matches!(
        entries[0].error,
        StructureError::InvalidRepeatCount { count: 0 }
    ));
    assert!(matches!(
        entries[1].error,
        StructureError::UnknownTargetType { .. }
    ));
}

#[test]
fn test_legacy_and_builder_encodings_normalize_to_same_plan() {
    let legacy = normalize_json(
        r#"{
            "version": "1.0",
            "name": "Threshold",
            "activityClassification": "indoor_bike",
            "structure": { "steps": [
                { "type": "step", "name": "Warm up",
                  "duration": { "type": "Time", "value": 10, "unit": "min" },
                  "targets": [{ "type": "%FTP", "intensity": 55 }],
                  "segmentLabel": "warmup" },
                { "type": "repetition", "repeat": 2, "steps": [
                    { "type": "step", "name": "Threshold",
                      "duration": { "type": "time", "value": 8, "unit": "minutes" },
                      "targets": [
                          { "type": "RelativeToFTP", "min": 95, "max": 105 },
                          { "type": "Cadence", "intensity": 90 }
                      ] }
                ] }
            ] }
        }"#,
    )
    .unwrap();

    let mut builder = PlanBuilder::new("Threshold")
        .with_activity(ActivityClassification::new("bike").with_location("indoor"));
    builder
        .append_warmup(ftp_step("Warm up", 10.0, 55.0))
        .unwrap()
        .append_interval(IntervalSpec::new(
            2,
            vec![Step::new("Threshold", Duration::minutes(8.0).unwrap())
                .with_target(
                    Target::range(TargetMetric::RelativeToFtp, 95.0, 105.0, None).unwrap(),
                )
                .with_target(Target::single(TargetMetric::Cadence, 90.0).unwrap())],
        ))
        .unwrap();

    assert_eq!(legacy, builder.finalize().unwrap());
}

#[test]
fn test_finalized_plan_shared_across_threads() {
    let plan = Arc::new(build_interval_plan());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let plan = Arc::clone(&plan);
            thread::spawn(move || estimated_duration_seconds(&plan))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 4200.0);
    }
}
