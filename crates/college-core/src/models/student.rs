//! Student model definition.

use serde::{Deserialize, Serialize};

use super::{optional_id, positive_u32};
use crate::{db::Row, error::CollegeError};

/// A student record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    /// Unique identifier for the student
    pub id: u64,

    /// Full name
    pub name: String,

    /// Department the student belongs to
    pub department: String,

    /// Year of study, starting at 1
    pub year: u32,

    pub email: String,

    pub phone: String,

    /// Linked login account, cleared when that user is removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl TryFrom<&Row> for Student {
    type Error = CollegeError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Student {
            id: row.integer("id")? as u64,
            name: row.text("name")?,
            department: row.text("department")?,
            year: positive_u32(row, "year")?,
            email: row.text("email")?,
            phone: row.text("phone")?,
            user_id: optional_id(row, "user_id")?,
        })
    }
}
