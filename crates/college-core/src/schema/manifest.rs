//! The college records schema.

use sha2::{Digest, Sha256};

use super::{Column, ColumnType::*, OnDelete, SeedRow, TableSpec};
use crate::error::{CollegeError, Result};

/// Only a stored integer of at least 1. INT affinity keeps non-numeric text
/// as TEXT, which would otherwise compare greater than any number.
const POSITIVE_YEAR: &str = "typeof(year) = 'integer' AND year > 0";

/// Only canonical `HH:MM:SS` text. `time()` yields NULL for input it cannot
/// parse, and `IS` turns that into false.
const CANONICAL_START: &str = "time(start_time) IS start_time";
const CANONICAL_END: &str = "time(end_time) IS end_time";

/// Username of the account seeded into a freshly created `users` table.
pub const ADMIN_USERNAME: &str = "admin";

/// Literal the seeded password digest is computed from.
const PLACEHOLDER_PASSWORD: &str = "admin123";

/// Hex SHA-256 of a fixed literal, stored as the seeded admin's password.
///
/// This is a fixture value. It is unsalted, single-round and public, and
/// nothing in this workspace verifies it. Do not treat it as a credential.
pub fn placeholder_password_digest() -> String {
    format!("{:x}", Sha256::digest(PLACEHOLDER_PASSWORD.as_bytes()))
}

fn admin_seed() -> SeedRow {
    SeedRow {
        values: vec![
            ("username", ADMIN_USERNAME.to_string()),
            ("password", placeholder_password_digest()),
            ("role", "admin".to_string()),
        ],
    }
}

/// The six college tables in foreign-key dependency order.
pub fn college_manifest() -> Vec<TableSpec> {
    vec![
        TableSpec::new("users")
            .column(Column::required("username", Varchar(50)).unique())
            .column(Column::required("password", Varchar(256)))
            .column(Column::required("role", Varchar(20)))
            .seed(admin_seed()),
        TableSpec::new("students")
            .column(Column::required("name", Varchar(100)))
            .column(Column::required("department", Varchar(100)))
            .column(Column::required("year", Int).check(POSITIVE_YEAR))
            .column(Column::required("email", Varchar(100)))
            .column(Column::required("phone", Varchar(20)))
            .column(Column::optional("user_id", Int))
            .foreign_key("user_id", "users", OnDelete::SetNull),
        TableSpec::new("teachers")
            .column(Column::required("name", Varchar(100)))
            .column(Column::required("department", Varchar(100)))
            .column(Column::required("subjects", Varchar(200)))
            .column(Column::required("email", Varchar(100)))
            .column(Column::required("phone", Varchar(20)))
            .column(Column::optional("user_id", Int))
            .foreign_key("user_id", "users", OnDelete::SetNull),
        TableSpec::new("courses")
            .column(Column::required("course_code", Varchar(20)).unique())
            .column(Column::required("title", Varchar(100)))
            .column(Column::optional("description", Varchar(500)))
            .column(Column::required("department", Varchar(100)))
            .column(Column::required("credit_hours", Int)),
        TableSpec::new("class_schedules")
            .column(Column::required("course_id", Int))
            .column(Column::required("teacher_id", Int))
            .column(Column::required("day_of_week", Varchar(10)))
            .column(Column::required("start_time", Time).check(CANONICAL_START))
            .column(Column::required("end_time", Time).check(CANONICAL_END))
            .column(Column::required("room_number", Varchar(20)))
            .column(Column::required("semester", Varchar(20)))
            .foreign_key("course_id", "courses", OnDelete::Cascade)
            .foreign_key("teacher_id", "teachers", OnDelete::Cascade),
        TableSpec::new("class_enrollments")
            .column(Column::required("student_id", Int))
            .column(Column::required("class_schedule_id", Int))
            .column(Column::required("enrollment_date", Date))
            .foreign_key("student_id", "students", OnDelete::Cascade)
            .foreign_key("class_schedule_id", "class_schedules", OnDelete::Cascade),
    ]
}

/// Checks that every table is declared after the tables it references and
/// that no name appears twice.
pub fn validate_order(manifest: &[TableSpec]) -> Result<()> {
    for (idx, table) in manifest.iter().enumerate() {
        let earlier = &manifest[..idx];
        if earlier.iter().any(|t| t.name == table.name) {
            return Err(CollegeError::Configuration {
                message: format!("table '{}' is declared twice", table.name),
            });
        }
        for dependency in table.dependencies() {
            if dependency != table.name && !earlier.iter().any(|t| t.name == dependency) {
                return Err(CollegeError::Configuration {
                    message: format!(
                        "table '{}' references '{dependency}', which is not declared before it",
                        table.name
                    ),
                });
            }
        }
    }
    Ok(())
}
