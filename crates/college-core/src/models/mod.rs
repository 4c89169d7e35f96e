//! Data models for college records.
//!
//! Models are decoded from generic query [`Row`]s with `TryFrom<&Row>`.
//! Display implementations live in [`crate::display`].

pub mod schedule;
pub mod student;
pub mod teacher;


pub use schedule::ScheduleEntry;
pub use student::Student;
pub use teacher::Teacher;

use crate::{
    db::Row,
    error::{CollegeError, Result},
};

/// Reads a nullable foreign key column.
pub(crate) fn optional_id(row: &Row, column: &str) -> Result<Option<u64>> {
    Ok(row.optional_integer(column)?.map(|id| id as u64))
}

/// Reads an integer column that must be at least 1.
pub(crate) fn positive_u32(row: &Row, column: &str) -> Result<u32> {
    let value = row.integer(column)?;
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| CollegeError::decode(column, format!("{value} is not a positive integer")))
}
