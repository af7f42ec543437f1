//! Command handlers for the Stride CLI.
//!
//! Each handler reads its input, delegates to `stride-core` and writes either
//! markdown through the [`TerminalRenderer`] or canonical JSON to stdout.
//!
//! ```text
//! Files → PlanDocument (serde) → normalize → PlanStructure → Display / JSON
//! ```

use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, warn};
use stride_core::{
    display::{BatchSummary, MalformedNodes},
    normalize::normalize_json,
    samples, PlanDocument, PlanMetrics, PlanStructure, StructureError,
};

use crate::{
    args::{NormalizeArgs, OutputFormat, PlanFileArgs, SampleArgs},
    renderer::TerminalRenderer,
};

/// Outcome of loading one document.
enum Loaded {
    Plan(PlanStructure),
    /// Markdown report for a document that failed batch validation
    Malformed(String),
}

pub struct Cli {
    renderer: TerminalRenderer,
    format: OutputFormat,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, format: OutputFormat) -> Self {
        Self { renderer, format }
    }

    /// Normalize every file, then report failures together.
    pub fn normalize(&self, args: &NormalizeArgs) -> Result<()> {
        let mut plans = Vec::with_capacity(args.files.len());
        let mut reports = Vec::new();

        for path in &args.files {
            match load(path) {
                Ok(Loaded::Plan(plan)) => plans.push(plan),
                Ok(Loaded::Malformed(report)) => reports.push(report),
                Err(error) => {
                    warn!("{error:#}");
                    reports.push(format!(
                        "## {}: unreadable\n\n- {error:#}\n",
                        path.display()
                    ));
                }
            }
        }

        match self.format {
            OutputFormat::Json => {
                let documents: Vec<PlanDocument> = plans.iter().map(PlanDocument::from).collect();
                let json = if let [document] = documents.as_slice() {
                    serde_json::to_string_pretty(document)?
                } else {
                    serde_json::to_string_pretty(&documents)?
                };
                println!("{json}");
            }
            OutputFormat::Markdown => {
                for plan in &plans {
                    self.renderer.render(&plan.to_string())?;
                }
            }
        }

        let summary = BatchSummary {
            processed: args.files.len(),
            failed: reports.len(),
        };
        for report in &reports {
            self.renderer.render(report)?;
        }

        if summary.is_success() {
            debug!("{summary}");
            Ok(())
        } else {
            self.renderer.render(&summary.to_string())?;
            bail!(
                "{} of {} document(s) failed to normalize",
                summary.failed,
                summary.processed
            )
        }
    }

    /// Show a plan followed by its metrics.
    pub fn show(&self, args: &PlanFileArgs) -> Result<()> {
        let plan = load_valid(&args.file, &self.renderer)?;
        match self.format {
            OutputFormat::Json => print_json(&PlanDocument::from(&plan)),
            OutputFormat::Markdown => {
                let metrics = PlanMetrics::from_plan(&plan);
                self.renderer.render(&format!("{plan}\n{metrics}"))
            }
        }
    }

    pub fn metrics(&self, args: &PlanFileArgs) -> Result<()> {
        let plan = load_valid(&args.file, &self.renderer)?;
        let metrics = PlanMetrics::from_plan(&plan);
        match self.format {
            OutputFormat::Json => print_json(&metrics),
            OutputFormat::Markdown => self.renderer.render(&metrics.to_string()),
        }
    }

    pub fn sample(&self, args: &SampleArgs) -> Result<()> {
        let Some(slug) = &args.slug else {
            let mut listing = String::from("# Sample Plans\n\n");
            for sample in &samples::SAMPLES {
                let plan = (sample.build)()?;
                listing.push_str(&format!("- {}: {}\n", sample.slug, plan.name()));
            }
            return self.renderer.render(&listing);
        };

        let sample =
            samples::find(slug).ok_or_else(|| anyhow!("No sample plan named '{slug}'"))?;
        let plan = (sample.build)().context("Failed to build sample plan")?;
        match self.format {
            OutputFormat::Json => print_json(&PlanDocument::from(&plan)),
            OutputFormat::Markdown => self.renderer.render(&plan.to_string()),
        }
    }

    pub fn schema(&self) -> Result<()> {
        print_json(&schemars::schema_for!(PlanDocument))
    }
}

/// Read and normalize one document. Batch validation failures become a
/// report; unreadable files and invalid JSON are errors.
fn load(path: &Path) -> Result<Loaded> {
    debug!("Normalizing {}", path.display());
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match normalize_json(&json) {
        Ok(plan) => Ok(Loaded::Plan(plan)),
        Err(StructureError::MalformedLegacyNode(entries)) => {
            warn!("{}: {} malformed node(s)", path.display(), entries.len());
            let report = MalformedNodes::new(&entries).with_source(path.display().to_string());
            Ok(Loaded::Malformed(report.to_string()))
        }
        Err(error) => {
            Err(error).with_context(|| format!("Failed to parse {}", path.display()))
        }
    }
}

/// Load a document that must normalize, rendering its report otherwise.
fn load_valid(path: &Path, renderer: &TerminalRenderer) -> Result<PlanStructure> {
    match load(path)? {
        Loaded::Plan(plan) => Ok(plan),
        Loaded::Malformed(report) => {
            renderer.render(&report)?;
            bail!("{} is not a valid plan document", path.display())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
