//! Teacher queries.

use super::Session;
use crate::{error::Result, models::Teacher};

impl Session {
    /// Lists all teachers by name.
    pub fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.select("SELECT * FROM teachers ORDER BY name", &[])?
            .iter()
            .map(Teacher::try_from)
            .collect()
    }
}
