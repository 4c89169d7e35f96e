//! Read-only health check of the server, database and schema.
//!
//! A run never writes and never fails: every problem it meets becomes part
//! of the [`DiagnosticReport`]. Row counts and the admin lookup only happen
//! once every manifest table exists, so an absent table is never queried.

use log::{debug, warn};
use serde::Serialize;

use crate::{
    config::ConnectionConfig,
    db::{Server, Session},
    schema::{college_manifest, TableSpec, ADMIN_USERNAME},
};

/// Whether the server answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ServerStatus {
    Reachable { version: String },
    Unreachable { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStatus {
    pub name: String,
    pub exists: bool,
}

/// What the operator should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Fix the connection settings or the data directory
    CheckServer,
    /// Run the provisioner
    RunSetup,
    /// Everything is in place
    Ready,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub database: String,
    pub server: ServerStatus,
    /// `None` when the server was unreachable
    pub database_exists: Option<bool>,
    /// One entry per manifest table, empty when the database is absent
    pub tables: Vec<TableStatus>,
    /// Filled only when every table exists
    pub row_counts: Vec<(String, i64)>,
    /// `None` unless every table exists
    pub admin_present: Option<bool>,
    pub errors: Vec<String>,
}

impl DiagnosticReport {
    fn new(database: &str, server: ServerStatus) -> Self {
        Self {
            database: database.to_string(),
            server,
            database_exists: None,
            tables: Vec::new(),
            row_counts: Vec::new(),
            admin_present: None,
            errors: Vec::new(),
        }
    }

    /// Names of manifest tables that do not exist.
    pub fn missing_tables(&self) -> Vec<&str> {
        self.tables
            .iter()
            .filter(|t| !t.exists)
            .map(|t| t.name.as_str())
            .collect()
    }

    /// True when the database exists and holds every manifest table.
    pub fn schema_complete(&self) -> bool {
        self.database_exists == Some(true)
            && !self.tables.is_empty()
            && self.tables.iter().all(|t| t.exists)
    }

    pub fn recommendation(&self) -> Recommendation {
        match (&self.server, self.schema_complete()) {
            (ServerStatus::Unreachable { .. }, _) => Recommendation::CheckServer,
            (_, false) => Recommendation::RunSetup,
            (_, true) => Recommendation::Ready,
        }
    }

    fn record_error(&mut self, message: String) {
        warn!("{message}");
        self.errors.push(message);
    }
}

/// Inspects the configured database against a manifest.
pub struct Diagnostics<'a> {
    config: &'a ConnectionConfig,
    manifest: Vec<TableSpec>,
}

impl<'a> Diagnostics<'a> {
    /// Diagnostics against the college manifest.
    pub fn new(config: &'a ConnectionConfig) -> Self {
        Self {
            config,
            manifest: college_manifest(),
        }
    }

    /// Replaces the manifest the schema is checked against.
    pub fn with_manifest(mut self, manifest: Vec<TableSpec>) -> Self {
        self.manifest = manifest;
        self
    }

    pub fn run(&self) -> DiagnosticReport {
        let name = &self.config.database;

        let server = match Server::connect(self.config) {
            Ok(server) => server,
            Err(e) => {
                return DiagnosticReport::new(
                    name,
                    ServerStatus::Unreachable {
                        error: e.to_string(),
                    },
                )
            }
        };

        let status = match server.version() {
            Ok(version) => ServerStatus::Reachable { version },
            Err(e) => ServerStatus::Unreachable {
                error: e.to_string(),
            },
        };
        let mut report = DiagnosticReport::new(name, status);
        if matches!(report.server, ServerStatus::Unreachable { .. }) {
            return report;
        }

        match server.database_exists(name) {
            Ok(exists) => report.database_exists = Some(exists),
            Err(e) => {
                report.record_error(format!("Cannot look up database '{name}': {e}"));
                return report;
            }
        }
        if report.database_exists != Some(true) {
            return report;
        }

        let session = match server.select_database_read_only(name) {
            Ok(session) => session,
            Err(e) => {
                report.record_error(format!("Cannot open database '{name}': {e}"));
                return report;
            }
        };

        for table in &self.manifest {
            let exists = match session.table_exists(table.name) {
                Ok(exists) => exists,
                Err(e) => {
                    report.record_error(format!("Cannot check table '{}': {e}", table.name));
                    false
                }
            };
            report.tables.push(TableStatus {
                name: table.name.to_string(),
                exists,
            });
        }

        if report.schema_complete() {
            self.count_rows(&session, &mut report);
            self.check_admin(&session, &mut report);
        } else {
            debug!("Skipping row counts, missing: {:?}", report.missing_tables());
        }

        report
    }

    fn count_rows(&self, session: &Session, report: &mut DiagnosticReport) {
        for table in &self.manifest {
            // Table names come from the manifest, never from input.
            let sql = format!("SELECT COUNT(*) AS count FROM \"{}\"", table.name);
            match session
                .select(&sql, &[])
                .and_then(|rows| match rows.first() {
                    Some(row) => row.integer("count"),
                    None => Ok(0),
                }) {
                Ok(count) => report.row_counts.push((table.name.to_string(), count)),
                Err(e) => report.record_error(format!("Cannot count rows in '{}': {e}", table.name)),
            }
        }
    }

    fn check_admin(&self, session: &Session, report: &mut DiagnosticReport) {
        if !self.manifest.iter().any(|t| t.name == "users") {
            return;
        }
        match session.select("SELECT id FROM users WHERE username = ?1", &[ADMIN_USERNAME]) {
            Ok(rows) => report.admin_present = Some(!rows.is_empty()),
            Err(e) => report.record_error(format!("Cannot look up the admin user: {e}")),
        }
    }
}

/// Diagnoses the configured database against the college manifest.
pub fn diagnose(config: &ConnectionConfig) -> DiagnosticReport {
    Diagnostics::new(config).run()
}
