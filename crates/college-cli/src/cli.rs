//! Subcommand arguments and their handlers.
//!
//! Argument structs carry clap derives and convert into the plain core
//! parameter types with `From`, so the core never depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use college_core::{
    diagnose,
    display::{CreateResult, OperationStatus, Schedules, Students, Teachers},
    params::{AddStudent, RawStatement},
    provision, ConnectionConfig, Session,
};

use crate::renderer::TerminalRenderer;

#[derive(Subcommand)]
pub enum StudentCommands {
    /// Add a student
    Add(AddStudentArgs),
    /// List students by name
    List,
}

#[derive(Subcommand)]
pub enum TeacherCommands {
    /// List teachers by name
    List,
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// List class meetings by day and start time
    List,
}

/// Add a student
///
/// Every field is required; `year` must be a positive integer. Values are
/// taken as text and validated before anything is written.
#[derive(Args)]
pub struct AddStudentArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub department: String,
    /// Year of study, starting at 1
    #[arg(long)]
    pub year: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
}

impl From<AddStudentArgs> for AddStudent {
    fn from(val: AddStudentArgs) -> Self {
        AddStudent {
            name: val.name,
            department: val.department,
            year: val.year,
            email: val.email,
            phone: val.phone,
        }
    }
}

/// A SQL statement with `?`/`?N` placeholders and the values to bind.
#[derive(Args)]
pub struct StatementArgs {
    /// SQL text
    pub sql: String,
    /// Value bound to the next placeholder, in order
    #[arg(short = 'p', long = "param")]
    pub params: Vec<String>,
}

impl From<StatementArgs> for RawStatement {
    fn from(val: StatementArgs) -> Self {
        RawStatement {
            sql: val.sql,
            params: val.params,
        }
    }
}

/// Runs commands against one configured database.
pub struct Cli {
    config: ConnectionConfig,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: ConnectionConfig, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    fn session(&self) -> Result<Session> {
        Session::open(&self.config).with_context(|| {
            format!(
                "Failed to open database '{}' in {}",
                self.config.database,
                self.config.data_dir.display()
            )
        })
    }

    pub fn setup(&self) -> Result<()> {
        let report = provision(&self.config).context("Database setup failed")?;
        self.renderer.render(&report.to_string())?;

        if !report.is_complete() {
            bail!("{} setup step(s) failed", report.failures().count());
        }
        Ok(())
    }

    pub fn diagnose(&self) -> Result<()> {
        let report = diagnose(&self.config);
        self.renderer.render(&report.to_string())
    }

    pub fn handle_student_command(&self, command: StudentCommands) -> Result<()> {
        match command {
            StudentCommands::Add(args) => {
                let student = self.session()?.add_student(&args.into())?;
                self.renderer
                    .render(&CreateResult::new(student).to_string())
            }
            StudentCommands::List => {
                let students = Students(self.session()?.list_students()?);
                self.renderer.render(&students.to_string())
            }
        }
    }

    pub fn handle_teacher_command(&self, command: TeacherCommands) -> Result<()> {
        match command {
            TeacherCommands::List => {
                let teachers = Teachers(self.session()?.list_teachers()?);
                self.renderer.render(&teachers.to_string())
            }
        }
    }

    pub fn handle_schedule_command(&self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::List => {
                let schedules = Schedules(self.session()?.list_schedules()?);
                self.renderer.render(&schedules.to_string())
            }
        }
    }

    /// Prints the result rows as a pretty JSON array.
    pub fn query(&self, statement: RawStatement) -> Result<()> {
        let rows = self
            .session()?
            .select(&statement.sql, &statement.param_refs())?;
        println!("{}", serde_json::to_string_pretty(&rows)?);
        Ok(())
    }

    pub fn exec(&self, statement: RawStatement) -> Result<()> {
        let affected = self
            .session()?
            .execute(&statement.sql, &statement.param_refs())?;
        self.renderer
            .render(&OperationStatus::affected_rows(affected).to_string())
    }
}
