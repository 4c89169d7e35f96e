//! Connection provider and database access.
//!
//! The relational server is an embedded SQLite engine. A [`Server`] stands
//! for a data directory holding one `<name>.db` file per database; a
//! [`Session`] is an open handle on one of those databases.
//!
//! Sessions are scoped: the handle is released when the session is dropped,
//! which happens exactly once on every exit path.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use rusqlite::{Connection, OpenFlags, Transaction, TransactionBehavior};

use crate::{
    config::{database_file, validate_database_name, ConnectionConfig},
    error::{CollegeError, DatabaseResultExt, Result},
};

pub mod catalog;
pub mod executor;
pub mod schedule_queries;
pub mod student_queries;
pub mod teacher_queries;

pub use executor::Row;

/// Written into the header of every database this crate creates.
const APPLICATION_ID: i64 = 0x434F_4C47;

/// A connection to the server without a selected database.
pub struct Server {
    data_dir: PathBuf,
    catalog: Connection,
}

impl Server {
    /// Connects to the server described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `CollegeError::Connection` if the data directory is missing or
    /// not a directory, or the engine cannot be initialized.
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        let data_dir = config.data_dir.clone();
        match fs::metadata(&data_dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(CollegeError::connection(format!(
                    "data directory '{}' is not a directory",
                    data_dir.display()
                )))
            }
            Err(e) => {
                return Err(CollegeError::connection(format!(
                    "cannot reach data directory '{}': {e}",
                    data_dir.display()
                )))
            }
        }

        let catalog = Connection::open_in_memory()
            .map_err(|e| CollegeError::connection(format!("cannot start engine: {e}")))?;

        debug!("Connected to server at {}", data_dir.display());
        Ok(Self { data_dir, catalog })
    }

    /// Engine version string, e.g. `3.50.2`.
    pub fn version(&self) -> Result<String> {
        let rows = executor::select_on(&self.catalog, "SELECT sqlite_version() AS version", &[])?;
        match rows.first() {
            Some(row) => row.text("version"),
            None => Err(CollegeError::decode("version", "engine returned no version")),
        }
    }

    /// Data directory this server reads.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Creates a database. Fails if it already exists.
    ///
    /// The file is claimed with `create_new`, so of two concurrent callers
    /// exactly one succeeds. If the header cannot be written the file is
    /// removed again.
    pub fn create_database(&self, name: &str) -> Result<()> {
        self.create_database_with(
            name,
            &format!("PRAGMA encoding = 'UTF-8'; PRAGMA application_id = {APPLICATION_ID};"),
        )
    }

    fn create_database_with(&self, name: &str, header_sql: &str) -> Result<()> {
        validate_database_name(name)?;

        let path = database_file(&self.data_dir, name);
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => CollegeError::Configuration {
                    message: format!("database '{name}' already exists"),
                },
                _ => CollegeError::FileSystem {
                    path: path.clone(),
                    source: e,
                },
            })?;

        // Encoding is fixed once the header is written, so it goes first.
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let initialized = Connection::open_with_flags(&path, flags)
            .db_context("Failed to create database file")
            .and_then(|conn| {
                conn.execute_batch(header_sql)
                    .db_context("Failed to initialize database header")
            });

        if let Err(e) = initialized {
            if let Err(remove) = fs::remove_file(&path) {
                warn!("Could not remove partial database {}: {remove}", path.display());
            }
            return Err(e);
        }

        debug!("Created database '{name}' at {}", path.display());
        Ok(())
    }

    /// Selects a database for reading and writing.
    ///
    /// # Errors
    ///
    /// Returns `CollegeError::Connection` if the database does not exist.
    pub fn select_database(&self, name: &str) -> Result<Session> {
        self.open_session(name, false)
    }

    /// Selects a database without write access.
    pub fn select_database_read_only(&self, name: &str) -> Result<Session> {
        self.open_session(name, true)
    }

    fn open_session(&self, name: &str, read_only: bool) -> Result<Session> {
        validate_database_name(name)?;
        if !self.database_exists(name)? {
            return Err(CollegeError::connection(format!("Unknown database '{name}'")));
        }

        let path = database_file(&self.data_dir, name);
        let flags = if read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };
        let connection = Connection::open_with_flags(&path, flags).map_err(|e| {
            CollegeError::connection(format!("cannot open database '{name}': {e}"))
        })?;

        Session::init(connection, name, read_only)
    }
}

/// An open handle on one database.
pub struct Session {
    connection: Connection,
    database: String,
    read_only: bool,
}

impl Session {
    /// Connects to the configured server and selects the configured database.
    ///
    /// SQLite fixes the text encoding when a database is created, so the
    /// session cannot set it; it reads it back and warns unless it is UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `CollegeError::Connection` when the server is unreachable or
    /// the database does not exist. There is no retry.
    pub fn open(config: &ConnectionConfig) -> Result<Self> {
        Server::connect(config)?.select_database(&config.database)
    }

    fn init(connection: Connection, database: &str, read_only: bool) -> Result<Self> {
        connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let encoding: String = connection
            .query_row("PRAGMA encoding", [], |row| row.get(0))
            .db_context("Failed to read database encoding")?;
        if encoding != "UTF-8" {
            warn!("Database '{database}' uses {encoding} text encoding");
        }

        debug!(
            "Opened session for database '{database}'{}",
            if read_only { " (read-only)" } else { "" }
        );
        Ok(Self {
            connection,
            database: database.to_string(),
            read_only,
        })
    }

    /// Name of the selected database.
    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Row id of the most recent successful INSERT on this session.
    pub fn last_insert_id(&self) -> u64 {
        self.connection.last_insert_rowid() as u64
    }

    /// Begins a transaction that takes the write lock immediately.
    pub(crate) fn begin_immediate(&mut self) -> Result<Transaction<'_>> {
        self.connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!("Releasing session for database '{}'", self.database);
    }
}
