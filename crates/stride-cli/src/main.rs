//! Stride CLI Application
//!
//! Command-line interface for normalizing and inspecting structured workout
//! plans.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        format,
        command,
    } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color), format);

    info!("Stride started");

    match command {
        Normalize(args) => cli.normalize(&args),
        Show(args) => cli.show(&args),
        Metrics(args) => cli.metrics(&args),
        Sample(args) => cli.sample(&args),
        Schema => cli.schema(),
    }
}
