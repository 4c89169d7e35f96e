//! Idempotent schema provisioning.
//!
//! A run creates the database if the catalog does not list it, then walks
//! the manifest in order. Each table is handled in its own IMMEDIATE
//! transaction: check existence, create, insert seed rows, commit. A table
//! that already exists is left alone and its seed rows are not inserted
//! again, so repeated runs converge on the same schema and a single admin
//! row.
//!
//! The write lock is taken before the existence check. Two concurrent first
//! runs therefore serialize on each table; the second one finds the table
//! already there. Only one of them creates the database file, and the other
//! reports it as existing.

use std::fmt;

use jiff::Timestamp;
use log::{error, info, warn};
use serde::Serialize;

use super::{college_manifest, validate_order, TableSpec};
use crate::{
    config::ConnectionConfig,
    db::{catalog::table_exists_on, executor::execute_on, Server, Session},
    error::{DatabaseResultExt, Result},
};

/// What a provisioning step acted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Target {
    Database(String),
    Table(&'static str),
    Seed(&'static str),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Database(name) => write!(f, "Database '{name}'"),
            Target::Table(name) => write!(f, "Table '{name}'"),
            Target::Seed(name) => write!(f, "Default rows for '{name}'"),
        }
    }
}

/// Result of one provisioning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Created,
    AlreadyExists,
    Seeded { rows: usize },
    Failed { message: String },
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionStep {
    pub target: Target,
    pub outcome: StepOutcome,
}

/// Everything a provisioning run did, in order.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReport {
    pub database: String,
    pub started_at: Timestamp,
    pub steps: Vec<ProvisionStep>,
}

impl ProvisionReport {
    fn new(database: &str) -> Self {
        Self {
            database: database.to_string(),
            started_at: Timestamp::now(),
            steps: Vec::new(),
        }
    }

    fn push(&mut self, target: Target, outcome: StepOutcome) {
        match &outcome {
            StepOutcome::Failed { message } => warn!("{target}: {message}"),
            StepOutcome::AlreadyExists => info!("{target} already exists"),
            StepOutcome::Created => info!("{target} created"),
            StepOutcome::Seeded { rows } => info!("{target}: inserted {rows} row(s)"),
        }
        self.steps.push(ProvisionStep { target, outcome });
    }

    /// True when no step failed.
    pub fn is_complete(&self) -> bool {
        !self.steps.iter().any(|s| s.outcome.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ProvisionStep> {
        self.steps.iter().filter(|s| s.outcome.is_failure())
    }

    /// Tables this run created.
    pub fn created_tables(&self) -> Vec<&'static str> {
        self.steps
            .iter()
            .filter_map(|s| match (&s.target, &s.outcome) {
                (Target::Table(name), StepOutcome::Created) => Some(*name),
                _ => None,
            })
            .collect()
    }
}

enum TableOutcome {
    Existing,
    Created { seeded: usize },
}

/// Applies a manifest to the configured database.
pub struct Provisioner<'a> {
    config: &'a ConnectionConfig,
    manifest: Vec<TableSpec>,
}

impl<'a> Provisioner<'a> {
    /// Provisioner for the college manifest.
    pub fn new(config: &'a ConnectionConfig) -> Self {
        Self {
            config,
            manifest: college_manifest(),
        }
    }

    /// Replaces the manifest.
    pub fn with_manifest(mut self, manifest: Vec<TableSpec>) -> Self {
        self.manifest = manifest;
        self
    }

    /// Runs provisioning.
    ///
    /// Per-step failures are recorded in the report, not returned. If the
    /// database cannot be created the report ends there.
    ///
    /// # Errors
    ///
    /// Returns `CollegeError::Configuration` for an invalid manifest and
    /// `CollegeError::Connection` when the server or database cannot be
    /// reached.
    pub fn run(&self) -> Result<ProvisionReport> {
        validate_order(&self.manifest)?;

        let server = Server::connect(self.config)?;
        let name = &self.config.database;
        let mut report = ProvisionReport::new(name);
        let target = Target::Database(name.clone());

        let created = match server.database_exists(name) {
            Ok(true) => Ok(false),
            Ok(false) => match server.create_database(name) {
                Ok(()) => Ok(true),
                // another run claimed the file between the lookup and the create
                Err(_) if server.database_exists(name).unwrap_or(false) => Ok(false),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };
        match created {
            Ok(true) => report.push(target, StepOutcome::Created),
            Ok(false) => report.push(target, StepOutcome::AlreadyExists),
            Err(e) => {
                error!("Error creating database '{name}': {e}");
                report.push(
                    target,
                    StepOutcome::Failed {
                        message: e.to_string(),
                    },
                );
                return Ok(report);
            }
        }

        let mut session = server.select_database(name)?;
        for table in &self.manifest {
            match apply_table(&mut session, table) {
                Ok(TableOutcome::Existing) => {
                    report.push(Target::Table(table.name), StepOutcome::AlreadyExists)
                }
                Ok(TableOutcome::Created { seeded }) => {
                    report.push(Target::Table(table.name), StepOutcome::Created);
                    if seeded > 0 {
                        report.push(Target::Seed(table.name), StepOutcome::Seeded { rows: seeded });
                    }
                }
                Err(e) => report.push(
                    Target::Table(table.name),
                    StepOutcome::Failed {
                        message: e.to_string(),
                    },
                ),
            }
        }

        Ok(report)
    }
}

/// Creates one table and its seed rows atomically, unless it exists.
fn apply_table(session: &mut Session, table: &TableSpec) -> Result<TableOutcome> {
    let tx = session.begin_immediate()?;

    if table_exists_on(&tx, table.name)? {
        return Ok(TableOutcome::Existing);
    }

    execute_on(&tx, &table.create_sql(), &[])?;

    let mut seeded = 0;
    for row in &table.seed {
        let (sql, params) = row.insert_sql(table.name);
        seeded += execute_on(&tx, &sql, &params)?;
    }

    tx.commit().db_context("Failed to commit transaction")?;
    Ok(TableOutcome::Created { seeded })
}

/// Provisions the college manifest into the configured database.
pub fn provision(config: &ConnectionConfig) -> Result<ProvisionReport> {
    Provisioner::new(config).run()
}
