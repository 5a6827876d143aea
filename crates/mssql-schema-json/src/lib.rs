//! # mssql-schema-json
//!
//! SQL Server table introspection for template-driven code generation.
//!
//! For every table and view of a database this library writes one JSON
//! schema record holding:
//!
//! - **Column metadata** with SQL, DDL and C# types
//! - **Rendered fragments** such as key declarations, SQL parameter lists
//!   and model field lists, ready to paste into templates
//!
//! It can also write a batch command file that runs an external generator
//! once per schema file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mssql_schema_json::{Config, Orchestrator};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> mssql_schema_json::Result<()> {
//!     let config = Config::load("config.yaml")?;
//!     let orchestrator = Orchestrator::new(config);
//!     let result = orchestrator.run("Sugarfoot", true).await?;
//!     println!("Wrote {} schema files", result.schema_files.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod render;
pub mod schema;
pub mod source;
pub mod typemap;

// Re-exports for convenient access
pub use config::Config;
pub use error::{Result, SchemaGenError};
pub use orchestrator::{GenerationResult, Orchestrator};
pub use render::{render, FragmentKind};
pub use schema::{Column, TableDescriptor, TableKind, TableRef, TableSchema};
pub use source::{MetadataSource, MssqlSource};
