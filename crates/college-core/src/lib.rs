//! Core library for the college records database.
//!
//! This crate is the data-access layer of the college records system:
//!
//! - **Connection provider** ([`db`]): [`Server`] and [`Session`] over an
//!   embedded SQLite engine, one database file per database name
//! - **Query executor** ([`db::executor`]): parametrized statements only,
//!   failures returned as typed errors
//! - **Schema provisioning** ([`schema`]): an ordered table manifest applied
//!   idempotently
//! - **Diagnostics** ([`diagnostics`]): a read-only report on server, database
//!   and schema state
//! - **Records**: student, teacher and schedule queries as [`Session`] methods
//!
//! Output formatting lives in [`display`]; every model and report implements
//! [`std::fmt::Display`] as markdown.
//!
//! # Quick Start
//!
//! ```rust
//! use college_core::{params::AddStudent, provision, ConnectionConfig, Session};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let config = ConnectionConfig::new(dir.path(), "college_management")?;
//!
//! // Create the database and its tables
//! let report = provision(&config)?;
//! assert!(report.is_complete());
//!
//! let session = Session::open(&config)?;
//! let student = session.add_student(&AddStudent {
//!     name: "Ada Lovelace".to_string(),
//!     department: "CS".to_string(),
//!     year: "2".to_string(),
//!     email: "ada@example.edu".to_string(),
//!     phone: "555-0100".to_string(),
//! })?;
//! println!("{student}");
//!
//! let rows = session.select("SELECT name FROM students WHERE email = ?1", &["ada@example.edu"])?;
//! assert_eq!(rows.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod db;
pub mod diagnostics;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schema;

// Re-export commonly used types
pub use config::{ConfigBuilder, ConnectionConfig, DEFAULT_DATABASE};
pub use db::{Row, Server, Session};
pub use diagnostics::{diagnose, DiagnosticReport, Diagnostics, Recommendation};
pub use display::{CreateResult, OperationStatus, Schedules, Students, Teachers};
pub use error::{CollegeError, ErrorKind, Result};
pub use models::{ScheduleEntry, Student, Teacher};
pub use params::{AddStudent, RawStatement};
pub use schema::{provision, ProvisionReport, Provisioner, StepOutcome};
