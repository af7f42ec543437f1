//! Display formatting for plans, metrics and normalization reports.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown that the CLI renders in the terminal. Wrapper types
//! cover the outputs that are not a single model.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (PlanStructure, │───▶│ (Clock, Batch-  │───▶│    Output       │
//! │  PlanMetrics)   │    │  Summary, ...)  │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`clock`]: second counts as `1h 10m`
//! - [`models`]: Display implementations for domain models and metrics
//! - [`report`]: batch normalization reports
//!
//! ## Usage Examples
//!
//! ```rust
//! use stride_core::samples;
//!
//! let plan = samples::sweet_spot_intervals().unwrap();
//! let output = plan.to_string();
//!
//! assert!(output.contains("# Sweet Spot Intervals"));
//! assert!(output.contains("- Estimated duration: 1h 10m"));
//! assert!(output.contains("- 3x [main set]"));
//! ```

pub mod clock;
pub mod models;
pub mod report;

// Re-export commonly used types for convenience
pub use clock::Clock;
pub use report::{BatchSummary, MalformedNodes};
