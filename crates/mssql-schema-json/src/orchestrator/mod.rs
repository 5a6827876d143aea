//! Generation orchestrator - main workflow coordinator.

use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::schema::assemble;
use crate::source::{MetadataSource, MssqlSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Generation orchestrator.
pub struct Orchestrator {
    config: Config,
    source: Box<dyn MetadataSource>,
}

/// Result of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Database that was introspected.
    pub database: String,

    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// When the run completed.
    pub completed_at: DateTime<Utc>,

    /// Total duration in seconds.
    pub duration_seconds: f64,

    /// Tables and views processed.
    pub tables_total: usize,

    /// Schema files written, in processing order.
    pub schema_files: Vec<PathBuf>,

    /// Batch command file, if one was requested.
    pub batch_file: Option<PathBuf>,
}

impl GenerationResult {
    /// Convert to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Orchestrator {
    /// Create an orchestrator reading from SQL Server.
    pub fn new(config: Config) -> Self {
        let source = MssqlSource::new(config.clone());
        Self::with_source(config, Box::new(source))
    }

    /// Create an orchestrator over any metadata source.
    pub fn with_source(config: Config, source: Box<dyn MetadataSource>) -> Self {
        Self { config, source }
    }

    /// Generate schema files for every table and view of `database`.
    ///
    /// Tables are processed one at a time. The first error aborts the run;
    /// files already written stay on disk.
    pub async fn run(&self, database: &str, create_batch_file: bool) -> Result<GenerationResult> {
        let started_at = Utc::now();

        info!("Listing tables and views in {}", database);
        let tables = self.source.list_tables_and_views(database).await?;
        info!("Found {} tables and views", tables.len());

        let mut schema_files = Vec::with_capacity(tables.len());
        for table_ref in &tables {
            info!("{}:{}", table_ref.database, table_ref.name);

            let table = self.source.load_table(table_ref).await?;
            let schema = assemble(&table)?;
            let path = output::write_schema_file(&self.config.schema_path, &schema)?;
            schema_files.push(path);
        }

        let batch_file = if create_batch_file {
            Some(output::write_batch_file(
                &self.config,
                database,
                &schema_files,
            )?)
        } else {
            None
        };

        let completed_at = Utc::now();
        let duration = (completed_at - started_at).num_milliseconds() as f64 / 1000.0;

        info!(
            "Wrote {} schema files in {:.2}s",
            schema_files.len(),
            duration
        );

        Ok(GenerationResult {
            database: database.to_string(),
            started_at,
            completed_at,
            duration_seconds: duration,
            tables_total: tables.len(),
            schema_files,
            batch_file,
        })
    }
}
