//! Display implementations for provisioning and diagnostic reports.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    diagnostics::{DiagnosticReport, Recommendation, ServerStatus},
    schema::provision::{ProvisionReport, StepOutcome},
};

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Created => write!(f, "created"),
            StepOutcome::AlreadyExists => write!(f, "already exists"),
            StepOutcome::Seeded { rows } => write!(f, "inserted {rows} row(s)"),
            StepOutcome::Failed { message } => write!(f, "failed: {message}"),
        }
    }
}

fn icon(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

impl fmt::Display for ProvisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Setup: {}", self.database)?;
        writeln!(f)?;
        writeln!(f, "Started: {}", LocalDateTime(&self.started_at))?;
        writeln!(f)?;

        for step in &self.steps {
            let marker = match step.outcome {
                StepOutcome::AlreadyExists => "•",
                ref outcome => icon(!outcome.is_failure()),
            };
            writeln!(f, "- {marker} {} {}", step.target, step.outcome)?;
        }
        writeln!(f)?;

        let failures = self.failures().count();
        if failures == 0 {
            writeln!(f, "Database setup completed successfully.")
        } else {
            writeln!(f, "Database setup finished with {failures} failed step(s).")
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::CheckServer => write!(
                f,
                "Check that the data directory exists and is readable, then diagnose again."
            ),
            Recommendation::RunSetup => {
                write!(f, "Run setup to create the missing database and tables.")
            }
            Recommendation::Ready => write!(f, "The database is ready to use."),
        }
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Diagnostics: {}", self.database)?;
        writeln!(f)?;

        writeln!(f, "## Connection")?;
        writeln!(f)?;
        match &self.server {
            ServerStatus::Reachable { version } => {
                writeln!(f, "- {} Server reachable (SQLite {version})", icon(true))?
            }
            ServerStatus::Unreachable { error } => {
                writeln!(f, "- {} Server unreachable: {error}", icon(false))?
            }
        }
        writeln!(f)?;

        if let Some(exists) = self.database_exists {
            writeln!(f, "## Database")?;
            writeln!(f)?;
            let state = if exists { "exists" } else { "does not exist" };
            writeln!(f, "- {} Database '{}' {state}", icon(exists), self.database)?;
            writeln!(f)?;
        }

        if !self.tables.is_empty() {
            writeln!(f, "## Tables")?;
            writeln!(f)?;
            for table in &self.tables {
                let suffix = if table.exists { "" } else { " (missing)" };
                writeln!(f, "- {} {}{suffix}", icon(table.exists), table.name)?;
            }
            writeln!(f)?;
        }

        if !self.row_counts.is_empty() {
            writeln!(f, "## Record Counts")?;
            writeln!(f)?;
            for (table, count) in &self.row_counts {
                writeln!(f, "- {table}: {count}")?;
            }
            writeln!(f)?;
        }

        if let Some(present) = self.admin_present {
            writeln!(f, "## Default Admin User")?;
            writeln!(f)?;
            let state = if present { "present" } else { "missing" };
            writeln!(f, "- {} Admin user {state}", icon(present))?;
            writeln!(f)?;
        }

        if !self.errors.is_empty() {
            writeln!(f, "## Errors")?;
            writeln!(f)?;
            for error in &self.errors {
                writeln!(f, "- {error}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "## Next Steps")?;
        writeln!(f)?;
        writeln!(f, "{}", self.recommendation())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::{config::ConnectionConfig, diagnostics::diagnose, schema::provision};

    #[test]
    fn test_provision_report_display() {
        let dir = TempDir::new().unwrap();
        let config = ConnectionConfig::new(dir.path(), "display_test").unwrap();

        let output = provision(&config).unwrap().to_string();
        assert!(output.starts_with("# Setup: display_test\n"));
        assert!(output.contains("- ✓ Database 'display_test' created"));
        assert!(output.contains("- ✓ Default rows for 'users' inserted 1 row(s)"));
        assert!(output.ends_with("Database setup completed successfully.\n"));

        let output = provision(&config).unwrap().to_string();
        assert!(output.contains("- • Table 'class_enrollments' already exists"));
    }

    #[test]
    fn test_diagnostic_report_sections() {
        let dir = TempDir::new().unwrap();
        let config = ConnectionConfig::new(dir.path(), "display_test").unwrap();

        let output = diagnose(&config).to_string();
        assert!(output.contains("## Connection"));
        assert!(output.contains("Database 'display_test' does not exist"));
        assert!(!output.contains("## Tables"));
        assert!(output.contains("Run setup"));

        provision(&config).unwrap();
        let output = diagnose(&config).to_string();
        for section in ["## Tables", "## Record Counts", "## Default Admin User", "## Next Steps"] {
            assert!(output.contains(section), "missing {section}");
        }
        assert!(output.contains("- users: 1"));
        assert!(output.contains("ready to use"));
    }
}
