//! College records CLI
//!
//! Command-line interface for provisioning and inspecting the college
//! records database.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use college_core::ConfigBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        database,
        no_color,
        command,
    } = Args::parse();

    let config = ConfigBuilder::new()
        .with_data_dir(data_dir)
        .with_database(Some(database))
        .build()
        .context("Invalid connection settings")?;

    info!(
        "Using database '{}' in {}",
        config.database,
        config.data_dir.display()
    );

    let cli = Cli::new(config, TerminalRenderer::new(!no_color));

    match command {
        Setup => cli.setup(),
        Diagnose => cli.diagnose(),
        Student { command } => cli.handle_student_command(command),
        Teacher { command } => cli.handle_teacher_command(command),
        Schedule { command } => cli.handle_schedule_command(command),
        Query(args) => cli.query(args.into()),
        Exec(args) => cli.exec(args.into()),
    }
}
