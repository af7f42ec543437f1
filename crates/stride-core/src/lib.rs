//! Core library for Stride structured workouts.
//!
//! This crate models a workout as a tree of steps and repetition blocks with
//! physiological intensity targets, and provides the pieces around it:
//!
//! - [`models`]: validated value and node types ([`Duration`], [`Target`],
//!   [`Step`], [`Repetition`], [`PlanStructure`])
//! - [`builder`]: fluent [`PlanBuilder`] with fail-fast appends
//! - [`wire`]: serde documents for the JSON exchange format
//! - [`normalize`]: the single ingestion point turning legacy or canonical
//!   documents into a [`PlanStructure`], with batch error reporting
//! - [`metrics`]: duration estimate from time-based steps
//! - [`display`]: markdown rendering of plans, metrics and reports
//! - [`samples`]: built-in sample workouts
//!
//! # Quick Start
//!
//! ```rust
//! use stride_core::{
//!     metrics::estimated_duration_seconds,
//!     normalize::normalize,
//!     wire::PlanDocument,
//!     ActivityClassification, Duration, IntervalSpec, PlanBuilder, Step, Target, TargetMetric,
//! };
//!
//! # fn example() -> stride_core::Result<()> {
//! let mut builder = PlanBuilder::new("Threshold Ladder")
//!     .with_activity(ActivityClassification::new("bike").with_location("outdoor"));
//!
//! builder
//!     .append_warmup(Step::new("Spin", Duration::minutes(15.0)?))?
//!     .append_interval(IntervalSpec::new(
//!         2,
//!         vec![
//!             Step::new("Threshold", Duration::minutes(12.0)?)
//!                 .with_target(Target::single(TargetMetric::RelativeToFtp, 100.0)?),
//!             Step::new("Easy", Duration::minutes(6.0)?),
//!         ],
//!     ))?;
//! let plan = builder.finalize()?;
//! assert_eq!(estimated_duration_seconds(&plan), 51.0 * 60.0);
//!
//! // Serialize to the wire shape and read it back.
//! let json = PlanDocument::from(&plan).to_json_pretty()?;
//! assert_eq!(normalize(&PlanDocument::from_json(&json)?)?, plan);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod builder;
pub mod display;
pub mod error;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod samples;
pub mod wire;

// Re-export commonly used types
pub use builder::{BuilderState, IntervalSpec, PlanBuilder};
pub use error::{MalformedNode, Result, StructureError};
pub use metrics::PlanMetrics;
pub use models::{
    ActivityClassification, Duration, DurationKind, DurationUnit, Intensity, Node,
    PlanStructure, Repetition, SegmentRole, Step, Target, TargetMetric,
};
pub use wire::PlanDocument;
