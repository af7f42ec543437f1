//! Batch normalization reports.
//!
//! Migration tooling renders a failed normalization as a list of
//! `path: reason` pairs, one per malformed node, optionally headed by the
//! document the problems came from.

use std::fmt;

use crate::error::MalformedNode;

/// Wrapper type for displaying the entries of a
/// [`crate::StructureError::MalformedLegacyNode`] report.
///
/// # Examples
///
/// ```rust
/// use stride_core::{display::MalformedNodes, normalize::normalize_json};
///
/// let error = normalize_json(r#"{ "name": "x", "activityClassification": "run",
///     "structure": { "steps": [{ "type": "warmup" }] } }"#)
///     .unwrap_err();
///
/// let report = MalformedNodes::new(error.malformed_nodes()).with_source("plans/x.json");
/// let output = report.to_string();
/// assert!(output.contains("## plans/x.json: 1 malformed node(s)"));
/// assert!(output.contains("- structure.steps[0]: Unknown node type 'warmup'"));
/// ```
pub struct MalformedNodes<'a> {
    entries: &'a [MalformedNode],
    source: Option<String>,
}

impl<'a> MalformedNodes<'a> {
    pub fn new(entries: &'a [MalformedNode]) -> Self {
        Self {
            entries,
            source: None,
        }
    }

    /// Name the document the entries belong to.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for MalformedNodes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => writeln!(f, "## {source}: {} malformed node(s)", self.entries.len())?,
            None => writeln!(f, "## {} malformed node(s)", self.entries.len())?,
        }
        writeln!(f)?;
        for entry in self.entries {
            writeln!(f, "- {entry}")?;
        }
        Ok(())
    }
}

/// Outcome of normalizing a batch of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.processed - self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            writeln!(f, "Success: normalized {} document(s)", self.processed)
        } else {
            writeln!(
                f,
                "Error: {} of {} document(s) failed to normalize",
                self.failed, self.processed
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StructureError;

    #[test]
    fn test_report_lists_every_entry() {
        let entries = vec![
            MalformedNode::new(
                "structure.steps[1].repeat",
                StructureError::InvalidRepeatCount { count: 0 },
            ),
            MalformedNode::new(
                "structure.steps[2].targets[0]",
                StructureError::UnknownTargetType {
                    tag: "bogus".to_string(),
                },
            ),
        ];

        let output = MalformedNodes::new(&entries).to_string();
        assert!(output.starts_with("## 2 malformed node(s)"));
        assert!(output.contains("- structure.steps[1].repeat: Invalid repeat count 0"));
        assert!(output.contains("- structure.steps[2].targets[0]: Unknown target type 'bogus'"));
    }

    #[test]
    fn test_batch_summary_display() {
        let ok = BatchSummary {
            processed: 3,
            failed: 0,
        };
        assert!(ok.to_string().contains("Success: normalized 3 document(s)"));

        let failed = BatchSummary {
            processed: 3,
            failed: 1,
        };
        assert_eq!(failed.succeeded(), 2);
        assert!(failed.to_string().contains("Error: 1 of 3 document(s) failed"));
    }
}
