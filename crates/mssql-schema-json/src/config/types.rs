//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// ADO connection string template with a `{Database}` placeholder.
    pub connection_string: String,

    /// Directory receiving one JSON schema file per table.
    pub schema_path: PathBuf,

    /// Directory receiving the batch command file.
    pub ps1_path: PathBuf,

    /// Batch command filename, may contain `{databaseName}`.
    pub ps1_filename: String,

    /// Command line template, must contain `{jsonSchemaFile}`.
    pub ps1_command_mask: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("connection_string", &redact_password(&self.connection_string))
            .field("schema_path", &self.schema_path)
            .field("ps1_path", &self.ps1_path)
            .field("ps1_filename", &self.ps1_filename)
            .field("ps1_command_mask", &self.ps1_command_mask)
            .finish()
    }
}

/// Replace the value of any `Password`/`Pwd` key in an ADO connection string.
pub(crate) fn redact_password(connection_string: &str) -> String {
    connection_string
        .split(';')
        .map(|part| match part.split_once('=') {
            Some((key, _))
                if matches!(key.trim().to_lowercase().as_str(), "password" | "pwd") =>
            {
                format!("{}=[REDACTED]", key)
            }
            _ => part.to_string(),
        })
        .collect::<Vec<_>>()
        .join(";")
}
