//! Error types for litetab

use thiserror::Error;

/// Result type alias for litetab operations
pub type OrmResult<T> = Result<T, OrmError>;

/// Error types for database operations
#[derive(Debug, Error)]
pub enum OrmError {
    /// No table with the requested name exists in the database
    #[error("Table {0} was not found")]
    TableNotFound(String),

    /// Error reported by the SQLite engine, passed through unmodified
    #[error("Engine error: {0}")]
    Engine(#[from] rusqlite::Error),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Caller input rejected before reaching the engine
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl OrmError {
    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a table not found error
    pub fn table_not_found(name: impl Into<String>) -> Self {
        Self::TableNotFound(name.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a table not found error
    pub fn is_table_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound(_))
    }

    /// The table name carried by a [`OrmError::TableNotFound`].
    pub fn table_not_found_name(&self) -> Option<&str> {
        match self {
            Self::TableNotFound(name) => Some(name),
            _ => None,
        }
    }

    /// Check if this error came from the engine
    pub fn is_engine(&self) -> bool {
        matches!(self, Self::Engine(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<toml::de::Error> for OrmError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
