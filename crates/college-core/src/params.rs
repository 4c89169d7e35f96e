//! Parameter structures for college records operations
//!
//! These structures carry input from an interface (the CLI today) into the
//! core without framework-specific derives. Interface layers define their own
//! argument types and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Session      │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Fields arrive as text, the way a form submits them. Validation happens
//! here, before any statement reaches the database.

use serde::{Deserialize, Serialize};

use crate::error::{CollegeError, Result};

/// Parameters for adding a student.
///
/// All five fields are required. `year` must be a positive integer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddStudent {
    pub name: String,
    pub department: String,
    pub year: String,
    pub email: String,
    pub phone: String,
}

impl AddStudent {
    /// Values in column order, trimmed, after checking that none is empty
    /// and that `year` parses as a positive integer.
    ///
    /// # Errors
    ///
    /// Returns `CollegeError::InvalidInput` naming the first bad field.
    pub fn validated(&self) -> Result<[&str; 5]> {
        let fields = [
            ("name", self.name.trim()),
            ("department", self.department.trim()),
            ("year", self.year.trim()),
            ("email", self.email.trim()),
            ("phone", self.phone.trim()),
        ];

        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(CollegeError::invalid_input(*field).with_reason("All fields are required"));
        }

        match fields[2].1.parse::<u32>() {
            Ok(year) if year > 0 => {}
            _ => {
                return Err(CollegeError::invalid_input("year")
                    .with_reason(format!("'{}' is not a positive integer", fields[2].1)))
            }
        }

        Ok(fields.map(|(_, value)| value))
    }
}

/// Parameters for an ad-hoc statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStatement {
    /// SQL text with `?` or `?N` placeholders
    pub sql: String,
    /// Values bound in order, as text
    #[serde(default)]
    pub params: Vec<String>,
}

impl RawStatement {
    /// Borrowed parameter list in the shape the executor takes.
    pub fn param_refs(&self) -> Vec<&str> {
        self.params.iter().map(String::as_str).collect()
    }
}
