//! Class schedule queries.

use super::Session;
use crate::{error::Result, models::ScheduleEntry};

impl Session {
    /// Lists every class meeting with its course and teacher, ordered by day
    /// and start time.
    pub fn list_schedules(&self) -> Result<Vec<ScheduleEntry>> {
        self.select(
            "SELECT cs.id, cs.day_of_week, cs.start_time, cs.end_time, cs.room_number, cs.semester,
                    c.course_code, c.title AS course_title, t.name AS teacher_name
             FROM class_schedules cs
             JOIN courses c ON cs.course_id = c.id
             JOIN teachers t ON cs.teacher_id = t.id
             ORDER BY cs.day_of_week, cs.start_time",
            &[],
        )?
        .iter()
        .map(ScheduleEntry::try_from)
        .collect()
    }
}
