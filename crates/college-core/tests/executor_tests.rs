mod common;

use college_core::ErrorKind;
use common::{count, provisioned_session};

#[test]
fn test_student_round_trip() {
    let (_dir, _config, session) = provisioned_session();

    let affected = session
        .execute(
            "INSERT INTO students (name, department, year, email, phone) VALUES (?1, ?2, ?3, ?4, ?5)",
            &["Ada Lovelace", "CS", "2", "ada@example.edu", "555-0100"],
        )
        .unwrap();
    assert_eq!(affected, 1);

    let rows = session
        .select("SELECT * FROM students WHERE email = ?1", &["ada@example.edu"])
        .unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.text("name").unwrap(), "Ada Lovelace");
    assert_eq!(row.text("department").unwrap(), "CS");
    assert_eq!(row.integer("year").unwrap(), 2);
    assert_eq!(row.text("email").unwrap(), "ada@example.edu");
    assert_eq!(row.text("phone").unwrap(), "555-0100");
    assert_eq!(row.optional_integer("user_id").unwrap(), None);
}

#[test]
fn test_metacharacters_are_bound_as_data() {
    let (_dir, _config, session) = provisioned_session();
    let hostile = "' OR '1'='1";

    let rows = session
        .select("SELECT * FROM users WHERE username = ?1", &[hostile])
        .unwrap();
    assert!(rows.is_empty());

    session
        .execute(
            "INSERT INTO students (name, department, year, email, phone) VALUES (?1, ?2, ?3, ?4, ?5)",
            &[hostile, "x'); DROP TABLE students; --", "1", "e@example.edu", "1"],
        )
        .unwrap();

    let rows = session
        .select("SELECT name, department FROM students WHERE name = ?1", &[hostile])
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text("name").unwrap(), hostile);
    assert_eq!(rows[0].text("department").unwrap(), "x'); DROP TABLE students; --");
    assert!(session.table_exists("students").unwrap());
}

#[test]
fn test_no_rows_is_not_an_error() {
    let (_dir, _config, session) = provisioned_session();

    let rows = session
        .select("SELECT * FROM students WHERE email = ?1", &["nobody@example.edu"])
        .unwrap();
    assert!(rows.is_empty());

    let err = session.select("SELECT * FROM no_such_table", &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Prepare);

    let err = session.select("SELEC 1", &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Prepare);
}

#[test]
fn test_constraint_violation_is_execute_error() {
    let (_dir, _config, session) = provisioned_session();

    let err = session
        .execute(
            "INSERT INTO users (username, password, role) VALUES (?1, ?2, ?3)",
            &["admin", "x", "admin"],
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Execute);
    assert_eq!(count(&session, "SELECT COUNT(*) AS count FROM users", &[]), 1);
}
