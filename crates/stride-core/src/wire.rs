//! Wire representation of plan documents.
//!
//! These structures mirror the JSON shape exchanged with storage, rendering
//! and compliance collaborators. They are lenient: discriminators are plain
//! strings and every field is optional, so a node with a missing or unknown
//! field is still read and reported alongside the others. Only values of the
//! wrong JSON type (a string where a number belongs) fail the whole document.
//! The [`crate::normalize`] module is the only place that turns them into the
//! validated [`crate::models`] types.
//!
//! ```text
//! ┌─────────────────┐  normalize   ┌─────────────────┐
//! │  PlanDocument   │─────────────▶│  PlanStructure  │
//! │ (legacy or      │◀─────────────│   (canonical)   │
//! │  canonical)     │   From<&_>   │                 │
//! └─────────────────┘              └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Duration, Intensity, Node, PlanStructure, Repetition, Step, Target},
};

/// Node discriminator for steps.
pub const STEP_TAG: &str = "step";
/// Node discriminator for repetitions.
pub const REPETITION_TAG: &str = "repetition";

/// A plan document as stored or exchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    /// Schema version; absent in the oldest documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Display name of the plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Longer description of the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sport classification, as an object or a legacy label
    #[serde(
        default,
        alias = "activityType",
        skip_serializing_if = "Option::is_none"
    )]
    pub activity_classification: Option<ActivityDocument>,
    /// Author-supplied duration estimate in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration_seconds: Option<f64>,
    /// Author-supplied training stress estimate
    #[serde(
        default,
        alias = "estimatedTss",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_training_stress: Option<f64>,
    /// Ordered workout nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<StructureDocument>,
}

/// The two historical encodings of an activity classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum ActivityDocument {
    /// `{ "category": "bike", "location": "indoor" }`
    Structured {
        category: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<String>,
    },
    /// `"indoor_bike"`
    Label(String),
}

/// Container for the top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StructureDocument {
    #[serde(default)]
    pub steps: Vec<NodeDocument>,
}

/// A step or repetition node, told apart by `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct NodeDocument {
    /// `"step"` or `"repetition"`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<TargetDocument>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Repeat count of a repetition node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<i64>,
    /// Children of a repetition node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<NodeDocument>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_label: Option<String>,
}

/// `{ "type": "time", "value": 10, "unit": "minutes" }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DurationDocument {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub duration_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// `{ "type": "relative_to_ftp", "intensity": 90 }` or the range form with
/// `min`, `max` and optionally `target`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TargetDocument {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
}

impl PlanDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::Serialization` if the text is not a JSON plan
    /// document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&PlanStructure> for PlanDocument {
    fn from(plan: &PlanStructure) -> Self {
        let activity = plan.activity();
        Self {
            version: Some(plan.version().to_string()),
            name: Some(plan.name().to_string()),
            description: plan.description().map(str::to_string),
            activity_classification: Some(ActivityDocument::Structured {
                category: activity.category.clone(),
                location: activity.location.clone(),
            }),
            estimated_duration_seconds: plan.estimated_duration_seconds(),
            estimated_training_stress: plan.estimated_training_stress(),
            structure: Some(StructureDocument {
                steps: plan.nodes().iter().map(NodeDocument::from).collect(),
            }),
        }
    }
}

impl From<&Node> for NodeDocument {
    fn from(node: &Node) -> Self {
        match node {
            Node::Step(step) => step.into(),
            Node::Repetition(repetition) => repetition.into(),
        }
    }
}

impl From<&Step> for NodeDocument {
    fn from(step: &Step) -> Self {
        Self {
            node_type: Some(STEP_TAG.to_string()),
            name: Some(step.name().to_string()),
            duration: Some(step.duration().into()),
            targets: Some(step.targets().iter().map(TargetDocument::from).collect()),
            notes: step.notes().map(str::to_string),
            segment_label: step.segment_label().map(str::to_string),
            ..Default::default()
        }
    }
}

impl From<&Repetition> for NodeDocument {
    fn from(repetition: &Repetition) -> Self {
        Self {
            node_type: Some(REPETITION_TAG.to_string()),
            repeat: Some(i64::from(repetition.repeat_count())),
            steps: Some(repetition.steps().iter().map(NodeDocument::from).collect()),
            segment_label: repetition.segment_label().map(str::to_string),
            ..Default::default()
        }
    }
}

impl From<&Duration> for DurationDocument {
    fn from(duration: &Duration) -> Self {
        Self {
            duration_type: Some(duration.kind().as_str().to_string()),
            value: Some(duration.value()),
            unit: Some(duration.unit().as_str().to_string()),
        }
    }
}

impl From<&Target> for TargetDocument {
    fn from(target: &Target) -> Self {
        let target_type = Some(target.metric().as_str().to_string());
        match target.intensity() {
            Intensity::Single(value) => Self {
                target_type,
                intensity: Some(value),
                ..Default::default()
            },
            Intensity::Range { min, max, target } => Self {
                target_type,
                intensity: None,
                min: Some(min),
                max: Some(max),
                target,
            },
        }
    }
}
