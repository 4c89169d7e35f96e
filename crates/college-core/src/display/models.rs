//! Display implementations for records.

use std::fmt;

use super::datetime::ClockTime;
use crate::models::{ScheduleEntry, Student, Teacher};

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Department**: {}", self.department)?;
        writeln!(f, "- **Year**: {}", self.year)?;
        writeln!(f, "- **Email**: {}", self.email)?;
        writeln!(f, "- **Phone**: {}", self.phone)?;
        writeln!(f)
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Department**: {}", self.department)?;
        writeln!(f, "- **Subjects**: {}", self.subjects)?;
        writeln!(f, "- **Email**: {}", self.email)?;
        writeln!(f, "- **Phone**: {}", self.phone)?;
        writeln!(f)
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} {}", self.course_code, self.course_title)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **When**: {} {}-{}",
            self.day_of_week,
            ClockTime(&self.start_time),
            ClockTime(&self.end_time)
        )?;
        writeln!(f, "- **Room**: {}", self.room_number)?;
        writeln!(f, "- **Teacher**: {}", self.teacher_name)?;
        writeln!(f, "- **Semester**: {}", self.semester)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn test_schedule_entry_display() {
        let entry = ScheduleEntry {
            id: 1,
            day_of_week: "Monday".to_string(),
            start_time: time(9, 0, 0, 0),
            end_time: time(10, 30, 0, 0),
            room_number: "B-101".to_string(),
            semester: "Fall 2024".to_string(),
            course_code: "CS101".to_string(),
            course_title: "Intro to Computing".to_string(),
            teacher_name: "Grace Hopper".to_string(),
        };
        let output = entry.to_string();
        assert!(output.starts_with("## CS101 Intro to Computing\n"));
        assert!(output.contains("- **When**: Monday 09:00-10:30"));
        assert!(output.contains("- **Teacher**: Grace Hopper"));
    }

    #[test]
    fn test_teacher_display_lists_subjects() {
        let teacher = Teacher {
            id: 3,
            name: "Grace Hopper".to_string(),
            department: "CS".to_string(),
            subjects: "Compilers".to_string(),
            email: "grace@example.edu".to_string(),
            phone: "555-0199".to_string(),
            user_id: Some(2),
        };
        let output = teacher.to_string();
        assert!(output.contains("## Grace Hopper (ID: 3)"));
        assert!(output.contains("- **Subjects**: Compilers"));
    }
}
