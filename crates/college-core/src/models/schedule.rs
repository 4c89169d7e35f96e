//! Class schedule listing model.

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use crate::{db::Row, error::CollegeError};

/// One class meeting joined with its course and teacher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Identifier of the class schedule row
    pub id: u64,

    /// Day name as stored, e.g. `Monday`
    pub day_of_week: String,

    pub start_time: Time,

    pub end_time: Time,

    pub room_number: String,

    pub semester: String,

    pub course_code: String,

    pub course_title: String,

    pub teacher_name: String,
}

fn time_column(row: &Row, column: &str) -> Result<Time, CollegeError> {
    let raw = row.text(column)?;
    raw.parse::<Time>()
        .map_err(|e| CollegeError::decode(column, format!("'{raw}' is not a time of day: {e}")))
}

impl TryFrom<&Row> for ScheduleEntry {
    type Error = CollegeError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(ScheduleEntry {
            id: row.integer("id")? as u64,
            day_of_week: row.text("day_of_week")?,
            start_time: time_column(row, "start_time")?,
            end_time: time_column(row, "end_time")?,
            room_number: row.text("room_number")?,
            semester: row.text("semester")?,
            course_code: row.text("course_code")?,
            course_title: row.text("course_title")?,
            teacher_name: row.text("teacher_name")?,
        })
    }
}
