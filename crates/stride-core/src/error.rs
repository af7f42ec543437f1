//! Error types for building and normalizing workout structures.

use std::fmt;

use thiserror::Error;

/// Comprehensive error type for all structure operations.
#[derive(Error, Debug)]
pub enum StructureError {
    /// Duration magnitude is zero, negative or not finite
    #[error("Invalid duration {value}: must be a positive, finite number")]
    InvalidDuration { value: f64 },
    /// Target intensity outside the plausible range of its metric
    #[error("Invalid intensity for '{metric}': {reason}")]
    InvalidIntensity { metric: String, reason: String },
    /// Repetition count below one
    #[error("Invalid repeat count {count}: must be at least 1")]
    InvalidRepeatCount { count: i64 },
    /// Repetition without any steps
    #[error("Repetition must contain at least one step")]
    EmptyRepetitionSteps,
    /// Plan without any top-level nodes
    #[error("Plan must contain at least one step or repetition")]
    EmptyPlan,
    /// Repetition placed inside another repetition
    #[error("Repetitions may only contain steps, not other repetitions")]
    NestedRepetition,
    /// Duration type tag or unit that is not recognized
    #[error("Unknown duration unit '{tag}'")]
    UnknownDurationUnit { tag: String },
    /// Target type tag that is not recognized
    #[error("Unknown target type '{tag}'")]
    UnknownTargetType { tag: String },
    /// Node discriminator other than step or repetition
    #[error("Unknown node type '{tag}'")]
    UnknownNodeType { tag: String },
    /// Required field absent from a document node
    #[error("Missing required field '{field}'")]
    MissingField { field: String },
    /// Field that only the other node type carries, e.g. `repeat` on a step
    #[error("Field '{field}' does not belong to a {node} node")]
    UnexpectedField { field: String, node: String },
    /// Every problem found while normalizing one document
    #[error("{} malformed node(s) in plan document", .0.len())]
    MalformedLegacyNode(Vec<MalformedNode>),
    /// Append or finalize called on a builder that already produced its plan
    #[error("Builder has already been finalized")]
    BuilderAlreadyFinalized,
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// One entry of a batch normalization report: where the problem is and what
/// it is.
#[derive(Debug)]
pub struct MalformedNode {
    /// Location inside the document, e.g. `structure.steps[2].targets[0]`
    pub path: String,
    /// The problem found at that location
    pub error: StructureError,
}

impl MalformedNode {
    /// Create a report entry for the given document path.
    pub fn new(path: impl Into<String>, error: StructureError) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }
}

impl fmt::Display for MalformedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}

/// Builder for creating intensity validation errors.
pub struct InvalidIntensityBuilder {
    metric: String,
}

impl InvalidIntensityBuilder {
    /// Create a new intensity error builder for a metric.
    pub fn new(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StructureError {
        StructureError::InvalidIntensity {
            metric: self.metric,
            reason: reason.into(),
        }
    }
}

impl StructureError {
    /// Creates a builder for intensity validation errors.
    pub fn invalid_intensity(metric: impl Into<String>) -> InvalidIntensityBuilder {
        InvalidIntensityBuilder::new(metric)
    }

    /// Creates a missing-field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Entries of a batch report, empty for every other kind of error.
    pub fn malformed_nodes(&self) -> &[MalformedNode] {
        match self {
            Self::MalformedLegacyNode(nodes) => nodes,
            _ => &[],
        }
    }
}

/// Result type alias for structure operations
pub type Result<T> = std::result::Result<T, StructureError>;
