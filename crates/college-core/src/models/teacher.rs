//! Teacher model definition.

use serde::{Deserialize, Serialize};

use super::optional_id;
use crate::{db::Row, error::CollegeError};

/// A teacher record. Teachers are read-only from this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Teacher {
    pub id: u64,
    pub name: String,
    pub department: String,
    /// Free-text list of subjects taught
    pub subjects: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl TryFrom<&Row> for Teacher {
    type Error = CollegeError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Teacher {
            id: row.integer("id")? as u64,
            name: row.text("name")?,
            department: row.text("department")?,
            subjects: row.text("subjects")?,
            email: row.text("email")?,
            phone: row.text("phone")?,
            user_id: optional_id(row, "user_id")?,
        })
    }
}
