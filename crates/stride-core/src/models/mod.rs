//! Data models for structured workouts.
//!
//! This module contains the core domain values that describe a workout:
//!
//! - [`Duration`]: how long a step lasts (time, distance or repetitions)
//! - [`Target`]: an intensity tied to one physiological metric
//! - [`Step`]: a leaf with one duration and any number of targets
//! - [`Repetition`]: a block repeating a group of steps
//! - [`PlanStructure`]: the ordered top-level nodes plus plan metadata
//!
//! Every constructor validates its input, so holding a value means holding a
//! valid value. Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use stride_core::models::{Duration, Repetition, Step, Target, TargetMetric};
//!
//! # fn example() -> stride_core::Result<()> {
//! let work = Step::new("Threshold", Duration::minutes(8.0)?)
//!     .with_target(Target::single(TargetMetric::RelativeToFtp, 100.0)?);
//! let rest = Step::new("Recover", Duration::minutes(2.0)?);
//!
//! let block = Repetition::new(4, vec![work, rest])?;
//! assert_eq!(block.flatten().count(), 8);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod duration;
pub mod plan;
pub mod repetition;
pub mod step;
pub mod target;


pub use duration::{Duration, DurationKind, DurationUnit};
pub use plan::{ActivityClassification, Node, PlanStructure, SCHEMA_VERSION};
pub use repetition::Repetition;
pub use step::{SegmentRole, Step, COOLDOWN_LABEL, WARMUP_LABEL};
pub use target::{Intensity, MetricBounds, Target, TargetMetric};
