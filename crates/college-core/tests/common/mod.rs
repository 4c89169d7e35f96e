#![allow(dead_code)]

use college_core::{params::AddStudent, provision, ConnectionConfig, Session};
use tempfile::TempDir;

pub const TEST_DATABASE: &str = "college_test";

/// Scratch data directory and a config pointing into it.
pub fn test_config() -> (TempDir, ConnectionConfig) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config =
        ConnectionConfig::new(temp_dir.path(), TEST_DATABASE).expect("Failed to build config");
    (temp_dir, config)
}

/// A fully provisioned database and an open session on it.
pub fn provisioned_session() -> (TempDir, ConnectionConfig, Session) {
    let (temp_dir, config) = test_config();
    let report = provision(&config).expect("Failed to provision");
    assert!(report.is_complete(), "provisioning failed: {report:?}");
    let session = Session::open(&config).expect("Failed to open session");
    (temp_dir, config, session)
}

pub fn ada() -> AddStudent {
    AddStudent {
        name: "Ada Lovelace".to_string(),
        department: "CS".to_string(),
        year: "2".to_string(),
        email: "ada@example.edu".to_string(),
        phone: "555-0100".to_string(),
    }
}

/// Inserts a course and a teacher, returning their ids.
pub fn course_and_teacher(session: &Session) -> (String, String) {
    session
        .execute(
            "INSERT INTO courses (course_code, title, description, department, credit_hours)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            &["CS101", "Intro to Computing", "Basics", "CS", "3"],
        )
        .expect("Failed to insert course");
    let course_id = session.last_insert_id().to_string();

    session
        .execute(
            "INSERT INTO teachers (name, department, subjects, email, phone)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            &["Grace Hopper", "CS", "Compilers", "grace@example.edu", "555-0199"],
        )
        .expect("Failed to insert teacher");
    let teacher_id = session.last_insert_id().to_string();

    (course_id, teacher_id)
}

/// Inserts a class meeting for the given course and teacher.
pub fn schedule(session: &Session, course_id: &str, teacher_id: &str, day: &str, start: &str) {
    session
        .execute(
            "INSERT INTO class_schedules
                 (course_id, teacher_id, day_of_week, start_time, end_time, room_number, semester)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            &[course_id, teacher_id, day, start, "23:00:00", "B-101", "Fall 2024"],
        )
        .expect("Failed to insert schedule");
}

pub fn count(session: &Session, sql: &str, params: &[&str]) -> i64 {
    let rows = session.select(sql, params).expect("count query failed");
    rows[0].integer("count").expect("count column")
}
