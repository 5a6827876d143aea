//! Error types for the schema generator.

use thiserror::Error;

/// Exit code for configuration errors (bad YAML, missing settings, missing directories).
pub const EXIT_CONFIG_ERROR: u8 = 1;

/// Exit code for database connection or query failures.
pub const EXIT_CONNECTION_ERROR: u8 = 2;

/// Exit code for a column type missing from the type table.
pub const EXIT_TYPE_MAPPING_ERROR: u8 = 3;

/// Exit code for a table that violates the single primary key rule.
pub const EXIT_DATA_INTEGRITY_ERROR: u8 = 4;

/// Exit code for file system and serialization failures.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for schema generation.
#[derive(Error, Debug)]
pub enum SchemaGenError {
    /// Configuration error (invalid YAML, missing settings, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database connection or metadata query error
    #[error("Source database error: {0}")]
    Connection(#[from] tiberius::error::Error),

    /// A column type has no entry in the type table
    #[error("Cannot map {table}.{column}'s data type of {ddl_type}")]
    TypeMapping {
        table: String,
        column: String,
        ddl_type: String,
    },

    /// More than one column is flagged as primary key
    #[error("{0} has more than one primary key")]
    MultiplePrimaryKeys(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaGenError {
    /// Create a TypeMapping error
    pub fn type_mapping(
        table: impl Into<String>,
        column: impl Into<String>,
        ddl_type: impl Into<String>,
    ) -> Self {
        SchemaGenError::TypeMapping {
            table: table.into(),
            column: column.into(),
            ddl_type: ddl_type.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            SchemaGenError::Config(_) | SchemaGenError::Yaml(_) => EXIT_CONFIG_ERROR,
            SchemaGenError::Connection(_) => EXIT_CONNECTION_ERROR,
            SchemaGenError::TypeMapping { .. } => EXIT_TYPE_MAPPING_ERROR,
            SchemaGenError::MultiplePrimaryKeys(_) => EXIT_DATA_INTEGRITY_ERROR,
            SchemaGenError::Io(_) | SchemaGenError::Json(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for schema generation.
pub type Result<T> = std::result::Result<T, SchemaGenError>;
