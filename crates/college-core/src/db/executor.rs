//! Parametrized query execution.
//!
//! Every statement goes through [`select_on`] or [`execute_on`]. Both prepare
//! the SQL, bind each parameter as text in order, and run the prepared
//! statement. Values supplied by callers never become part of the SQL text.
//!
//! A failure is returned as [`CollegeError::Prepare`] or
//! [`CollegeError::Execute`] and logged once at error level. An empty result
//! is `Ok(vec![])`, so "no rows" and "the query failed" never look alike.

use log::{error, trace};
use rusqlite::{params_from_iter, types::Value, Connection};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{CollegeError, Result};

/// One result row: column names paired with their values, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<(String, Value)>,
}

impl Row {
    /// Builds a row from `(column, value)` pairs.
    pub fn new(values: Vec<(String, Value)>) -> Self {
        Self { values }
    }

    /// Value of the first column with this name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in result order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, column: &str) -> Result<&Value> {
        self.get(column)
            .ok_or_else(|| CollegeError::decode(column, "column not present in result"))
    }

    /// Reads a non-null column as text. Numbers are rendered in decimal.
    pub fn text(&self, column: &str) -> Result<String> {
        self.optional_text(column)?
            .ok_or_else(|| CollegeError::decode(column, "unexpected NULL"))
    }

    /// Reads a nullable column as text.
    pub fn optional_text(&self, column: &str) -> Result<Option<String>> {
        match self.require(column)? {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s.clone())),
            Value::Integer(i) => Ok(Some(i.to_string())),
            Value::Real(r) => Ok(Some(r.to_string())),
            Value::Blob(_) => Err(CollegeError::decode(column, "expected text, found blob")),
        }
    }

    /// Reads a non-null integer column. Text holding a decimal integer is
    /// accepted.
    pub fn integer(&self, column: &str) -> Result<i64> {
        self.optional_integer(column)?
            .ok_or_else(|| CollegeError::decode(column, "unexpected NULL"))
    }

    /// Reads a nullable integer column.
    pub fn optional_integer(&self, column: &str) -> Result<Option<i64>> {
        match self.require(column)? {
            Value::Null => Ok(None),
            Value::Integer(i) => Ok(Some(*i)),
            Value::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|e| CollegeError::decode(column, format!("'{s}' is not an integer: {e}"))),
            Value::Real(_) => Err(CollegeError::decode(column, "expected integer, found real")),
            Value::Blob(_) => Err(CollegeError::decode(column, "expected integer, found blob")),
        }
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            match value {
                Value::Null => map.serialize_entry(name, &())?,
                Value::Integer(i) => map.serialize_entry(name, i)?,
                Value::Real(r) => map.serialize_entry(name, r)?,
                Value::Text(s) => map.serialize_entry(name, s)?,
                Value::Blob(b) => map.serialize_entry(name, b)?,
            }
        }
        map.end()
    }
}

fn prepare_failure(sql: &str, source: rusqlite::Error) -> CollegeError {
    error!("Query preparation failed: {source}");
    CollegeError::Prepare {
        sql: sql.to_string(),
        source,
    }
}

fn execute_failure(sql: &str, source: rusqlite::Error) -> CollegeError {
    error!("Query execution failed: {source}");
    CollegeError::Execute {
        sql: sql.to_string(),
        source,
    }
}

/// Runs a query and materializes every row.
pub fn select_on(conn: &Connection, sql: &str, params: &[&str]) -> Result<Vec<Row>> {
    let mut stmt = conn.prepare(sql).map_err(|e| prepare_failure(sql, e))?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let mut rows = stmt
        .query(params_from_iter(params.iter()))
        .map_err(|e| execute_failure(sql, e))?;

    let mut data = Vec::new();
    while let Some(row) = rows.next().map_err(|e| execute_failure(sql, e))? {
        let mut values = Vec::with_capacity(columns.len());
        for (idx, name) in columns.iter().enumerate() {
            let value: Value = row.get(idx).map_err(|e| execute_failure(sql, e))?;
            values.push((name.clone(), value));
        }
        data.push(Row::new(values));
    }

    trace!("{} row(s) from: {sql}", data.len());
    Ok(data)
}

/// Runs an INSERT, UPDATE, DELETE or DDL statement and returns the number of
/// affected rows.
pub fn execute_on(conn: &Connection, sql: &str, params: &[&str]) -> Result<usize> {
    let mut stmt = conn.prepare(sql).map_err(|e| prepare_failure(sql, e))?;
    let affected = stmt
        .execute(params_from_iter(params.iter()))
        .map_err(|e| execute_failure(sql, e))?;

    trace!("{affected} row(s) affected by: {sql}");
    Ok(affected)
}

impl super::Session {
    /// Runs a parametrized query against the selected database.
    ///
    /// Parameters bind to `?`/`?N` placeholders in order, as text.
    ///
    /// # Errors
    ///
    /// Returns `CollegeError::Prepare` if the statement cannot be compiled and
    /// `CollegeError::Execute` if binding or stepping fails.
    pub fn select(&self, sql: &str, params: &[&str]) -> Result<Vec<Row>> {
        select_on(&self.connection, sql, params)
    }

    /// Runs a parametrized write statement and returns the affected row count.
    ///
    /// # Errors
    ///
    /// Same as [`select`](Self::select). A statement that yields rows is an
    /// execution error.
    pub fn execute(&self, sql: &str, params: &[&str]) -> Result<usize> {
        execute_on(&self.connection, sql, params)
    }
}
