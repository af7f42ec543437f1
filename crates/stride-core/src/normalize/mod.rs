//! Normalization of plan documents into canonical plans.
//!
//! This is the single ingestion point for external plan data. It accepts both
//! historical encodings:
//!
//! - **Legacy/flat**: discriminator-tagged nodes, activity classification as a
//!   bare label such as `"indoor_bike"`, loosely spelled tags (`"Time"`,
//!   `"min"`, `"%FTP"`, `"RelativeToFTP"`), any or no version.
//! - **Canonical**: documents produced from a [`PlanStructure`] through
//!   [`PlanDocument::from`].
//!
//! Both map onto the same typed values, with node order, nesting and numbers
//! preserved exactly. The output always carries [`SCHEMA_VERSION`].
//!
//! Validation is batched: every problem in the document is collected with its
//! path, and the whole set is returned as one
//! [`StructureError::MalformedLegacyNode`]. No partial plan is ever returned.
//!
//! ```rust
//! use stride_core::normalize::normalize_json;
//!
//! let plan = normalize_json(
//!     r#"{
//!         "name": "Legacy steady",
//!         "activityClassification": "outdoor_run",
//!         "structure": { "steps": [
//!             { "type": "step", "name": "Steady",
//!               "duration": { "type": "time", "value": 40, "unit": "min" },
//!               "targets": [{ "type": "%MaxHR", "intensity": 75 }] }
//!         ] }
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(plan.activity().category, "run");
//! assert_eq!(plan.activity().location.as_deref(), Some("outdoor"));
//! ```

use std::str::FromStr;

use log::{debug, warn};

use crate::{
    error::{MalformedNode, Result, StructureError},
    models::{
        ActivityClassification, Duration, DurationKind, DurationUnit, Node, PlanStructure,
        Repetition, Step, Target, TargetMetric, SCHEMA_VERSION,
    },
    wire::{
        ActivityDocument, DurationDocument, NodeDocument, PlanDocument, TargetDocument,
        REPETITION_TAG, STEP_TAG,
    },
};


/// Locations recognized as a prefix of legacy activity labels.
const LEGACY_LOCATIONS: [&str; 2] = ["indoor", "outdoor"];

/// Converts a parsed document into a canonical plan.
///
/// # Errors
///
/// Returns `StructureError::MalformedLegacyNode` listing every problem found
/// in the document.
pub fn normalize(document: &PlanDocument) -> Result<PlanStructure> {
    debug!(
        "Normalizing plan document (version {})",
        document.version.as_deref().unwrap_or("unversioned")
    );

    let mut issues = Issues::default();

    let name = issues.require("name", document.name.clone());
    let activity = issues
        .require("activityClassification", document.activity_classification.as_ref())
        .map(activity_from_document);

    let nodes = match &document.structure {
        Some(structure) if structure.steps.is_empty() => {
            issues.push("structure.steps", StructureError::EmptyPlan);
            Vec::new()
        }
        Some(structure) => structure
            .steps
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                normalize_node(node, &format!("structure.steps[{index}]"), &mut issues)
            })
            .collect(),
        None => {
            issues.push("structure", StructureError::missing_field("structure"));
            Vec::new()
        }
    };

    match (name, activity) {
        (Some(name), Some(activity)) if issues.is_empty() => Ok(PlanStructure {
            version: SCHEMA_VERSION.to_string(),
            name,
            description: document.description.clone(),
            activity,
            estimated_duration_seconds: document.estimated_duration_seconds,
            estimated_training_stress: document.estimated_training_stress,
            nodes,
        }),
        _ => {
            warn!(
                "Plan document has {} malformed node(s); nothing applied",
                issues.len()
            );
            Err(issues.into_error())
        }
    }
}

/// Parses JSON text and normalizes it.
///
/// # Errors
///
/// Returns `StructureError::Serialization` for text that is not a plan
/// document, otherwise as [`normalize`].
pub fn normalize_json(json: &str) -> Result<PlanStructure> {
    normalize(&PlanDocument::from_json(json)?)
}

/// Normalizes an already parsed JSON value.
///
/// # Errors
///
/// As [`normalize_json`].
pub fn normalize_value(value: serde_json::Value) -> Result<PlanStructure> {
    let document: PlanDocument = serde_json::from_value(value)?;
    normalize(&document)
}

/// Problems collected while walking one document.
#[derive(Default)]
struct Issues {
    entries: Vec<MalformedNode>,
}

impl Issues {
    fn push(&mut self, path: impl Into<String>, error: StructureError) {
        self.entries.push(MalformedNode::new(path, error));
    }

    /// Keeps the value on success, records the error on failure.
    fn check<T>(&mut self, path: &str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(path, error);
                None
            }
        }
    }

    fn require<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(field, StructureError::missing_field(field));
        }
        value
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn into_error(self) -> StructureError {
        StructureError::MalformedLegacyNode(self.entries)
    }
}

/// Node discriminators as typed variants.
enum NodeTag {
    Step,
    Repetition,
}

fn node_tag(tag: Option<&str>) -> Result<NodeTag> {
    let Some(tag) = tag else {
        return Err(StructureError::missing_field("type"));
    };
    match tag.trim().to_lowercase().as_str() {
        STEP_TAG => Ok(NodeTag::Step),
        REPETITION_TAG | "repeat" => Ok(NodeTag::Repetition),
        _ => Err(StructureError::UnknownNodeType {
            tag: tag.to_string(),
        }),
    }
}

fn normalize_node(document: &NodeDocument, path: &str, issues: &mut Issues) -> Option<Node> {
    match issues.check(path, node_tag(document.node_type.as_deref()))? {
        NodeTag::Step => normalize_step(document, path, issues).map(Node::Step),
        NodeTag::Repetition => normalize_repetition(document, path, issues).map(Node::Repetition),
    }
}

fn normalize_step(document: &NodeDocument, path: &str, issues: &mut Issues) -> Option<Step> {
    let before = issues.len();

    reject_field(issues, path, "repeat", STEP_TAG, document.repeat.is_some());
    reject_field(issues, path, "steps", STEP_TAG, document.steps.is_some());

    let name = document.name.clone();
    if name.is_none() {
        issues.push(format!("{path}.name"), StructureError::missing_field("name"));
    }

    let duration_path = format!("{path}.duration");
    let duration = match &document.duration {
        Some(duration) => issues.check(&duration_path, duration_from_document(duration)),
        None => {
            issues.push(duration_path, StructureError::missing_field("duration"));
            None
        }
    };

    let targets: Vec<Target> = document
        .targets
        .iter()
        .flatten()
        .enumerate()
        .filter_map(|(index, target)| {
            issues.check(
                &format!("{path}.targets[{index}]"),
                target_from_document(target),
            )
        })
        .collect();

    if issues.len() > before {
        return None;
    }
    let (name, duration) = (name?, duration?);

    let mut step = Step::new(name, duration).with_targets(targets);
    if let Some(notes) = &document.notes {
        step = step.with_notes(notes.clone());
    }
    if let Some(label) = &document.segment_label {
        step = step.with_segment_label(label.clone());
    }
    Some(step)
}

fn normalize_repetition(
    document: &NodeDocument,
    path: &str,
    issues: &mut Issues,
) -> Option<Repetition> {
    let before = issues.len();

    reject_field(issues, path, "duration", REPETITION_TAG, document.duration.is_some());
    reject_field(issues, path, "targets", REPETITION_TAG, document.targets.is_some());

    let repeat_path = format!("{path}.repeat");
    let repeat_count = match document.repeat {
        Some(count) => issues.check(
            &repeat_path,
            u32::try_from(count)
                .ok()
                .filter(|count| *count >= 1)
                .ok_or(StructureError::InvalidRepeatCount { count }),
        ),
        None => {
            issues.push(repeat_path, StructureError::missing_field("repeat"));
            None
        }
    };

    let children = document.steps.as_deref().unwrap_or_default();
    if children.is_empty() {
        issues.push(format!("{path}.steps"), StructureError::EmptyRepetitionSteps);
    }

    let mut steps = Vec::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        let child_path = format!("{path}.steps[{index}]");
        match issues.check(&child_path, node_tag(child.node_type.as_deref())) {
            Some(NodeTag::Step) => steps.extend(normalize_step(child, &child_path, issues)),
            Some(NodeTag::Repetition) => issues.push(child_path, StructureError::NestedRepetition),
            None => {}
        }
    }

    if issues.len() > before {
        return None;
    }

    let mut repetition = issues.check(path, Repetition::new(repeat_count?, steps))?;
    if let Some(label) = &document.segment_label {
        repetition = repetition.with_segment_label(label.clone());
    }
    Some(repetition)
}

/// Records a field that only the other node type may carry.
fn reject_field(issues: &mut Issues, path: &str, field: &str, node: &str, present: bool) {
    if present {
        issues.push(
            format!("{path}.{field}"),
            StructureError::UnexpectedField {
                field: field.to_string(),
                node: node.to_string(),
            },
        );
    }
}

fn required<'a, T: ?Sized>(value: Option<&'a T>, field: &str) -> Result<&'a T> {
    value.ok_or_else(|| StructureError::missing_field(field))
}

fn duration_from_document(document: &DurationDocument) -> Result<Duration> {
    let kind = DurationKind::from_str(required(document.duration_type.as_deref(), "type")?)?;
    let tag = required(document.unit.as_deref(), "unit")?;
    let value = *required(document.value.as_ref(), "value")?;

    let unit = DurationUnit::from_str(tag)?;
    if unit.kind() != kind {
        return Err(StructureError::UnknownDurationUnit {
            tag: format!("{tag} (for a {} duration)", kind.as_str()),
        });
    }
    Duration::new(value, unit)
}

fn target_from_document(document: &TargetDocument) -> Result<Target> {
    let metric = TargetMetric::from_str(required(document.target_type.as_deref(), "type")?)?;
    match (document.intensity, document.min, document.max, document.target) {
        (Some(value), None, None, None) => Target::single(metric, value),
        (Some(_), ..) => Err(StructureError::invalid_intensity(metric.as_str())
            .with_reason("both a single intensity and range values were given")),
        (None, Some(min), Some(max), target) => Target::range(metric, min, max, target),
        (None, None, None, Some(value)) => Target::single(metric, value),
        (None, None, None, None) => Err(StructureError::invalid_intensity(metric.as_str())
            .with_reason("no intensity given")),
        (None, ..) => Err(StructureError::invalid_intensity(metric.as_str())
            .with_reason("a range needs both min and max")),
    }
}

fn activity_from_document(document: &ActivityDocument) -> ActivityClassification {
    match document {
        ActivityDocument::Structured { category, location } => ActivityClassification {
            category: category.clone(),
            location: location.clone(),
        },
        ActivityDocument::Label(label) => {
            let split = label.split_once('_').filter(|(location, category)| {
                LEGACY_LOCATIONS.contains(location) && !category.is_empty()
            });
            match split {
                Some((location, category)) => {
                    ActivityClassification::new(category).with_location(location)
                }
                None => ActivityClassification::new(label.clone()),
            }
        }
    }
}
