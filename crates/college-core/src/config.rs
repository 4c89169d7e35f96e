//! Connection configuration and its builder.

use std::path::{Path, PathBuf};

use crate::error::{CollegeError, Result};

/// Database name used when none is configured.
pub const DEFAULT_DATABASE: &str = "college_management";

/// Where the server keeps its databases and which one to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Directory holding one `<name>.db` file per database.
    pub data_dir: PathBuf,
    /// Name of the database a session selects.
    pub database: String,
}

impl ConnectionConfig {
    /// Creates a configuration for an explicit data directory and database.
    ///
    /// The database name is validated the same way [`ConfigBuilder::build`]
    /// validates it.
    pub fn new<P: AsRef<Path>>(data_dir: P, database: &str) -> Result<Self> {
        validate_database_name(database)?;
        Ok(Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            database: database.to_string(),
        })
    }

    /// Starts a builder with default settings.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Path of the file backing the configured database.
    pub fn database_path(&self) -> PathBuf {
        database_file(&self.data_dir, &self.database)
    }
}

pub(crate) fn database_file(data_dir: &Path, name: &str) -> PathBuf {
    data_dir.join(format!("{name}.db"))
}

/// Database names become file names, so only `[A-Za-z0-9_]` is accepted.
pub fn validate_database_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CollegeError::invalid_input("database").with_reason("must not be empty"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(CollegeError::invalid_input("database")
            .with_reason(format!("character '{c}' is not allowed in a database name")));
    }
    Ok(())
}

/// Builder for creating [`ConnectionConfig`] instances.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    database: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom data directory.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/college/databases` or
    /// `~/.local/share/college/databases`. An explicit directory is used as
    /// given and never created.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the database name. Defaults to [`DEFAULT_DATABASE`].
    pub fn with_database<S: Into<String>>(mut self, name: Option<S>) -> Self {
        if let Some(name) = name {
            self.database = Some(name.into());
        }
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `CollegeError::InvalidInput` for an unusable database name.
    /// Returns `CollegeError::XdgDirectory` if the default data directory
    /// cannot be created.
    pub fn build(self) -> Result<ConnectionConfig> {
        let database = self
            .database
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        validate_database_name(&database)?;

        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => Self::default_data_dir()?,
        };

        Ok(ConnectionConfig { data_dir, database })
    }

    /// Returns the default data directory following XDG Base Directory
    /// specification, creating it if needed.
    fn default_data_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("college")
            .create_data_directory("databases")
            .map_err(|e| CollegeError::XdgDirectory(e.to_string()))
    }
}
