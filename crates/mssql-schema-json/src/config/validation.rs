//! Configuration validation.

use super::{Config, DATABASE_PLACEHOLDER, SCHEMA_FILE_PLACEHOLDER};
use crate::error::{Result, SchemaGenError};
use std::path::Path;

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.connection_string.trim().is_empty() {
        return Err(SchemaGenError::Config("connectionString is required".into()));
    }
    if !config.connection_string.contains(DATABASE_PLACEHOLDER) {
        return Err(SchemaGenError::Config(format!(
            "connectionString must contain the {} placeholder",
            DATABASE_PLACEHOLDER
        )));
    }
    if config.ps1_filename.trim().is_empty() {
        return Err(SchemaGenError::Config("ps1Filename is required".into()));
    }
    if config.ps1_command_mask.trim().is_empty() {
        return Err(SchemaGenError::Config("ps1CommandMask is required".into()));
    }
    if !config.ps1_command_mask.contains(SCHEMA_FILE_PLACEHOLDER) {
        return Err(SchemaGenError::Config(format!(
            "ps1CommandMask must contain the {} placeholder",
            SCHEMA_FILE_PLACEHOLDER
        )));
    }

    require_directory("schemaPath", &config.schema_path)?;
    require_directory("ps1Path", &config.ps1_path)?;

    Ok(())
}

fn require_directory(key: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(SchemaGenError::Config(format!("{} is required", key)));
    }
    if !path.is_dir() {
        return Err(SchemaGenError::Config(format!(
            "{} does not exist or is not a directory: {}",
            key,
            path.display()
        )));
    }
    Ok(())
}
