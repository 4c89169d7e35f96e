use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ScheduleCommands, StatementArgs, StudentCommands, TeacherCommands};

/// Command-line front end for the college records database
///
/// Provisions the schema, reports on its health, and reads and writes
/// student, teacher and schedule records.
#[derive(Parser)]
#[command(version, about, name = "college")]
pub struct Args {
    /// Directory holding the database files. Defaults to
    /// $XDG_DATA_HOME/college/databases
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Name of the database to use
    #[arg(long, global = true, default_value = college_core::DEFAULT_DATABASE)]
    pub database: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the college CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and any missing tables
    Setup,
    /// Report on the server, database and tables without changing anything
    #[command(alias = "doctor")]
    Diagnose,
    /// Manage students
    Student {
        #[command(subcommand)]
        command: StudentCommands,
    },
    /// Show teachers
    Teacher {
        #[command(subcommand)]
        command: TeacherCommands,
    },
    /// Show class schedules
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Run a parametrized query and print the rows as JSON
    Query(StatementArgs),
    /// Run a parametrized write statement and print the affected row count
    Exec(StatementArgs),
}
