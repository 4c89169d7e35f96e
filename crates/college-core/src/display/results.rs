//! Result wrappers for create operations.

use std::fmt;

use crate::models::Student;

/// Wrapper type for displaying the result of create operations.
///
/// The record is shown in full under a confirmation line.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Student> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student added successfully!")?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
