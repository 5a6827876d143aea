//! Schema and batch file writers.

use crate::config::Config;
use crate::error::Result;
use crate::schema::TableSchema;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write one schema record as pretty-printed JSON into `dir`.
///
/// Returns the path of the written file.
pub fn write_schema_file(dir: &Path, schema: &TableSchema) -> Result<PathBuf> {
    let path = dir.join(schema.file_name());
    let json = serde_json::to_string_pretty(schema)?;
    std::fs::write(&path, json)?;
    info!("Schema file written to {}", path.display());
    Ok(path)
}

/// Render the batch command file: one command line per schema file.
pub fn batch_contents(config: &Config, schema_files: &[PathBuf]) -> String {
    schema_files
        .iter()
        .map(|file| format!("{}\n", config.command_line(file)))
        .collect()
}

/// Write the batch command file for a database.
///
/// Returns the path of the written file.
pub fn write_batch_file(config: &Config, database: &str, schema_files: &[PathBuf]) -> Result<PathBuf> {
    let path = config.batch_filename(database);
    std::fs::write(&path, batch_contents(config, schema_files))?;
    info!(
        "Batch file with {} commands written to {}",
        schema_files.len(),
        path.display()
    );
    Ok(path)
}
