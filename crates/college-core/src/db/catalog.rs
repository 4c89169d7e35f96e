//! Catalog lookups: which databases and tables exist.

use std::fs;

use rusqlite::Connection;

use super::{executor::select_on, Server, Session};
use crate::{
    config::{database_file, validate_database_name},
    error::{CollegeError, Result},
};

/// Whether a table with this exact name exists on `conn`.
pub fn table_exists_on(conn: &Connection, name: &str) -> Result<bool> {
    let rows = select_on(
        conn,
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
        &[name],
    )?;
    Ok(!rows.is_empty())
}

impl Server {
    /// Names of all databases in the data directory, sorted.
    pub fn databases(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.data_dir).map_err(|e| CollegeError::FileSystem {
            path: self.data_dir.clone(),
            source: e,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension()? != "db" {
                    return None;
                }
                let stem = path.file_stem()?.to_str()?.to_string();
                validate_database_name(&stem).ok().map(|_| stem)
            })
            .collect();
        names.sort();
        Ok(names)
    }

    /// Whether a database with this name exists.
    pub fn database_exists(&self, name: &str) -> Result<bool> {
        validate_database_name(name)?;
        Ok(database_file(&self.data_dir, name).is_file())
    }
}

impl Session {
    /// Whether a table with this name exists in the selected database.
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        table_exists_on(&self.connection, name)
    }

    /// Names of all user tables in the selected database, sorted.
    pub fn tables(&self) -> Result<Vec<String>> {
        self.select(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
            &[],
        )?
        .iter()
        .map(|row| row.text("name"))
        .collect()
    }
}
