//! Markdown rendering for records, operation results and reports.
//!
//! Domain models implement `Display` directly; collections and operation
//! outcomes go through small wrapper types so empty lists and success
//! messages read the same everywhere.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers and    │    │    Markdown     │
//! │ Student, Report │───▶│ Display impls   │───▶│  (terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Values read from the database are written as-is.
//!
//! ```rust
//! use college_core::{display::{CreateResult, Students}, models::Student};
//!
//! let ada = Student {
//!     id: 1,
//!     name: "Ada Lovelace".to_string(),
//!     department: "CS".to_string(),
//!     year: 2,
//!     email: "ada@example.edu".to_string(),
//!     phone: "555-0100".to_string(),
//!     user_id: None,
//! };
//!
//! let created = format!("{}", CreateResult::new(ada.clone()));
//! assert!(created.starts_with("Student added successfully!"));
//!
//! assert_eq!(format!("{}", Students(vec![])), "No students found.\n");
//! assert!(format!("{}", Students(vec![ada])).contains("## Ada Lovelace (ID: 1)"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod reports;
pub mod results;
pub mod status;

pub use collections::{Schedules, Students, Teachers};
pub use datetime::{ClockTime, LocalDateTime};
pub use results::CreateResult;
pub use status::OperationStatus;
