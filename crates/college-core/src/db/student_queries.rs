//! Student queries.

use log::info;

use super::Session;
use crate::{
    error::{CollegeError, Result},
    models::Student,
    params::AddStudent,
};

impl Session {
    /// Validates and inserts a student, returning the stored row.
    ///
    /// Validation runs before any statement is prepared, so an invalid
    /// request never touches the database.
    pub fn add_student(&self, params: &AddStudent) -> Result<Student> {
        let values = params.validated()?;

        self.execute(
            "INSERT INTO students (name, department, year, email, phone) VALUES (?1, ?2, ?3, ?4, ?5)",
            &values,
        )?;
        let id = self.last_insert_id();
        info!("Added student {id}");

        self.get_student(id)?
            .ok_or_else(|| CollegeError::decode("id", format!("student {id} vanished after insert")))
    }

    /// Retrieves a student by id.
    pub fn get_student(&self, id: u64) -> Result<Option<Student>> {
        let id = id.to_string();
        let rows = self.select("SELECT * FROM students WHERE id = ?1", &[id.as_str()])?;
        rows.first().map(Student::try_from).transpose()
    }

    /// Lists all students by name.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        self.select("SELECT * FROM students ORDER BY name", &[])?
            .iter()
            .map(Student::try_from)
            .collect()
    }
}
