use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary data directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a data directory
fn college_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("college").expect("Failed to find college binary");
    cmd.arg("--no-color")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--database")
        .arg("cli_test");
    cmd
}

fn setup(dir: &TempDir) {
    college_cmd(dir).arg("setup").assert().success();
}

fn add_ada(dir: &TempDir) -> assert_cmd::assert::Assert {
    college_cmd(dir)
        .args([
            "student",
            "add",
            "--name",
            "Ada Lovelace",
            "--department",
            "CS",
            "--year",
            "2",
            "--email",
            "ada@example.edu",
            "--phone",
            "555-0100",
        ])
        .assert()
}

#[test]
fn test_cli_setup_creates_schema() {
    let temp_dir = create_cli_test_environment();

    college_cmd(&temp_dir)
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database 'cli_test' created"))
        .stdout(predicate::str::contains("Table 'class_enrollments' created"))
        .stdout(predicate::str::contains("Database setup completed successfully."));

    assert!(temp_dir.path().join("cli_test.db").is_file());
}

#[test]
fn test_cli_setup_twice() {
    let temp_dir = create_cli_test_environment();
    setup(&temp_dir);

    college_cmd(&temp_dir)
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Table 'users' already exists"))
        .stdout(predicate::str::contains("Default rows").not());
}

#[test]
fn test_cli_diagnose_before_and_after_setup() {
    let temp_dir = create_cli_test_environment();

    college_cmd(&temp_dir)
        .arg("diagnose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database 'cli_test' does not exist"))
        .stdout(predicate::str::contains("Run setup"));
    assert!(!temp_dir.path().join("cli_test.db").exists());

    setup(&temp_dir);

    college_cmd(&temp_dir)
        .arg("diagnose")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Record Counts"))
        .stdout(predicate::str::contains("- users: 1"))
        .stdout(predicate::str::contains("Admin user present"))
        .stdout(predicate::str::contains("The database is ready to use."));
}

#[test]
fn test_cli_missing_data_dir_fails() {
    let temp_dir = create_cli_test_environment();

    Command::cargo_bin("college")
        .expect("Failed to find college binary")
        .arg("--no-color")
        .arg("--data-dir")
        .arg(temp_dir.path().join("absent"))
        .args(["student", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot reach data directory"));
}

#[test]
fn test_cli_unknown_database_fails() {
    let temp_dir = create_cli_test_environment();

    college_cmd(&temp_dir)
        .args(["student", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown database 'cli_test'"));
}

#[test]
fn test_cli_add_and_list_students() {
    let temp_dir = create_cli_test_environment();
    setup(&temp_dir);

    college_cmd(&temp_dir)
        .args(["student", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));

    add_ada(&temp_dir)
        .success()
        .stdout(predicate::str::contains("Student added successfully!"))
        .stdout(predicate::str::contains("## Ada Lovelace (ID: 1)"));

    college_cmd(&temp_dir)
        .args(["student", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("- **Email**: ada@example.edu"));
}

#[test]
fn test_cli_add_student_requires_all_fields() {
    let temp_dir = create_cli_test_environment();
    setup(&temp_dir);

    college_cmd(&temp_dir)
        .args([
            "student",
            "add",
            "--name",
            "  ",
            "--department",
            "CS",
            "--year",
            "2",
            "--email",
            "ada@example.edu",
            "--phone",
            "555-0100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("All fields are required"));
}

#[test]
fn test_cli_add_student_rejects_bad_year() {
    let temp_dir = create_cli_test_environment();
    setup(&temp_dir);

    college_cmd(&temp_dir)
        .args([
            "student",
            "add",
            "--name",
            "Ada Lovelace",
            "--department",
            "CS",
            "--year",
            "second",
            "--email",
            "ada@example.edu",
            "--phone",
            "555-0100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("field 'year'"));
}

#[test]
fn test_cli_empty_teacher_and_schedule_lists() {
    let temp_dir = create_cli_test_environment();
    setup(&temp_dir);

    college_cmd(&temp_dir)
        .args(["teacher", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No teachers found."));

    college_cmd(&temp_dir)
        .args(["schedule", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No class schedules found."));
}

#[test]
fn test_cli_exec_and_schedule_list() {
    let temp_dir = create_cli_test_environment();
    setup(&temp_dir);

    college_cmd(&temp_dir)
        .args([
            "exec",
            "INSERT INTO courses (course_code, title, department, credit_hours) VALUES (?1, ?2, ?3, ?4)",
            "-p",
            "CS101",
            "-p",
            "Intro to Computing",
            "-p",
            "CS",
            "-p",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: 1 row affected"));

    college_cmd(&temp_dir)
        .args([
            "exec",
            "INSERT INTO teachers (name, department, subjects, email, phone) VALUES (?1, ?2, ?3, ?4, ?5)",
            "-p",
            "Grace Hopper",
            "-p",
            "CS",
            "-p",
            "Compilers",
            "-p",
            "grace@example.edu",
            "-p",
            "555-0199",
        ])
        .assert()
        .success();

    college_cmd(&temp_dir)
        .args([
            "exec",
            "INSERT INTO class_schedules (course_id, teacher_id, day_of_week, start_time, end_time, room_number, semester) \
             VALUES (1, 1, ?1, ?2, ?3, ?4, ?5)",
            "-p",
            "Monday",
            "-p",
            "09:00:00",
            "-p",
            "10:30:00",
            "-p",
            "B-101",
            "-p",
            "Fall 2024",
        ])
        .assert()
        .success();

    college_cmd(&temp_dir)
        .args(["schedule", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## CS101 Intro to Computing"))
        .stdout(predicate::str::contains("- **When**: Monday 09:00-10:30"))
        .stdout(predicate::str::contains("- **Teacher**: Grace Hopper"));
}

#[test]
fn test_cli_query_prints_json() {
    let temp_dir = create_cli_test_environment();
    setup(&temp_dir);
    add_ada(&temp_dir).success();

    college_cmd(&temp_dir)
        .args([
            "query",
            "SELECT name, year FROM students WHERE email = ?1",
            "-p",
            "ada@example.edu",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Ada Lovelace\""))
        .stdout(predicate::str::contains("\"year\": 2"));

    college_cmd(&temp_dir)
        .args([
            "query",
            "SELECT * FROM users WHERE username = ?1",
            "-p",
            "' OR '1'='1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_cli_query_malformed_sql() {
    let temp_dir = create_cli_test_environment();
    setup(&temp_dir);

    college_cmd(&temp_dir)
        .args(["query", "SELEC * FROM students"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Query preparation failed"));
}

#[test]
fn test_cli_invalid_database_name() {
    let temp_dir = create_cli_test_environment();

    Command::cargo_bin("college")
        .expect("Failed to find college binary")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--database", "../escape", "diagnose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid connection settings"));
}
