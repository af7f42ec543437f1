//! Command-line interface definitions using clap.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Normalize, inspect and export structured workout plans
///
/// Stride reads workout plan documents in either the legacy tagged encoding
/// or the canonical encoding, validates every node, and prints the canonical
/// plan as markdown or JSON together with its computed duration estimate.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format for plans and metrics
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Stride CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Normalize plan documents into the canonical encoding
    #[command(alias = "n")]
    Normalize(NormalizeArgs),
    /// Show a plan with its metrics
    #[command(alias = "s")]
    Show(PlanFileArgs),
    /// Print computed and declared metrics of a plan
    #[command(alias = "m")]
    Metrics(PlanFileArgs),
    /// List the built-in sample plans, or print one of them
    Sample(SampleArgs),
    /// Print the JSON schema of plan documents
    Schema,
}

/// How plans and metrics are written to stdout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown rendered for the terminal
    Markdown,
    /// Canonical JSON
    Json,
}

/// Normalize one or more plan documents
///
/// Every file is processed even when earlier ones fail. Malformed documents
/// are reported with the path and reason of every bad node, and the command
/// exits with an error if any document failed.
#[derive(ClapArgs)]
pub struct NormalizeArgs {
    /// Plan documents to normalize
    #[arg(required = true, help = "Paths of JSON plan documents")]
    pub files: Vec<PathBuf>,
}

/// A single plan document
#[derive(ClapArgs)]
pub struct PlanFileArgs {
    #[arg(help = "Path of a JSON plan document")]
    pub file: PathBuf,
}

/// Sample plans bundled with the library
#[derive(ClapArgs)]
pub struct SampleArgs {
    /// Slug of the sample to print; lists all samples when omitted
    pub slug: Option<String>,
}
