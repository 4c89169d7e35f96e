//! Error types for the college records library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all data-access operations.
#[derive(Error, Debug)]
pub enum CollegeError {
    /// The server could not be reached or the database could not be selected
    #[error("Database connection failed: {message}")]
    Connection { message: String },
    /// A statement could not be prepared (malformed SQL, unknown table, ...)
    #[error("Query preparation failed: {source}")]
    Prepare {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A prepared statement failed while binding or executing
    #[error("Query execution failed: {source}")]
    Execute {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Session-level database errors (pragmas, transactions)
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A row did not have the shape a model expects
    #[error("Cannot decode column '{column}': {reason}")]
    Decode { column: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of a [`CollegeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Prepare,
    Execute,
    Validation,
    Decode,
    Io,
    Configuration,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CollegeError {
        CollegeError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CollegeError {
        CollegeError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CollegeError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a connection error from any displayable cause.
    pub fn connection(message: impl Into<String>) -> Self {
        CollegeError::Connection {
            message: message.into(),
        }
    }

    /// Creates a decode error for the given column.
    pub fn decode(column: impl Into<String>, reason: impl Into<String>) -> Self {
        CollegeError::Decode {
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Returns the class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollegeError::Connection { .. } => ErrorKind::Connection,
            CollegeError::Prepare { .. } => ErrorKind::Prepare,
            CollegeError::Execute { .. } | CollegeError::Database { .. } => ErrorKind::Execute,
            CollegeError::Decode { .. } | CollegeError::Serialization { .. } => ErrorKind::Decode,
            CollegeError::InvalidInput { .. } => ErrorKind::Validation,
            CollegeError::FileSystem { .. } | CollegeError::XdgDirectory(_) => ErrorKind::Io,
            CollegeError::Configuration { .. } => ErrorKind::Configuration,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CollegeError::database(message).with_source(e))
    }
}

/// Result type alias for college records operations
pub type Result<T> = std::result::Result<T, CollegeError>;
