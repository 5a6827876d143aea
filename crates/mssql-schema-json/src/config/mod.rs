//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Placeholder for the database name in the connection string template.
pub const DATABASE_PLACEHOLDER: &str = "{Database}";

/// Placeholder for the database name in the batch filename template.
pub const DATABASE_NAME_PLACEHOLDER: &str = "{databaseName}";

/// Placeholder for the schema file path in the batch command template.
pub const SCHEMA_FILE_PLACEHOLDER: &str = "{jsonSchemaFile}";

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Build the ADO connection string for a database.
    pub fn connection_string(&self, database: &str) -> String {
        self.connection_string
            .replace(DATABASE_PLACEHOLDER, database)
    }

    /// Full path of the batch command file for a database.
    pub fn batch_filename(&self, database: &str) -> PathBuf {
        self.ps1_path
            .join(self.ps1_filename.replace(DATABASE_NAME_PLACEHOLDER, database))
    }

    /// One batch command line for a written schema file.
    pub fn command_line(&self, schema_file: &Path) -> String {
        self.ps1_command_mask
            .replace(SCHEMA_FILE_PLACEHOLDER, &schema_file.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            connection_string: "Server=tcp:db,1433;Database={Database};User Id=sa;Password=pw"
                .to_string(),
            schema_path: PathBuf::from("schemas"),
            ps1_path: PathBuf::from("scripts"),
            ps1_filename: "gen-table-models-{databaseName}.ps1".to_string(),
            ps1_command_mask: "python librettox.py -s {jsonSchemaFile} -o dapper".to_string(),
        }
    }

    #[test]
    fn test_connection_string_substitutes_database() {
        assert_eq!(
            config().connection_string("Sugarfoot"),
            "Server=tcp:db,1433;Database=Sugarfoot;User Id=sa;Password=pw"
        );
    }

    #[test]
    fn test_batch_filename() {
        assert_eq!(
            config().batch_filename("Sugarfoot"),
            PathBuf::from("scripts").join("gen-table-models-Sugarfoot.ps1")
        );
    }

    #[test]
    fn test_command_line() {
        let file = PathBuf::from("Sugarfoot-Customer.json");
        assert_eq!(
            config().command_line(&file),
            "python librettox.py -s Sugarfoot-Customer.json -o dapper"
        );
    }

    #[test]
    fn test_from_yaml_rejects_missing_keys() {
        let err = Config::from_yaml("schemaPath: /tmp\n").unwrap_err();
        assert!(matches!(err, crate::error::SchemaGenError::Yaml(_)));
    }

    #[test]
    fn test_from_yaml_with_existing_directories() {
        let schemas = tempfile::tempdir().unwrap();
        let scripts = tempfile::tempdir().unwrap();
        let yaml = format!(
            "connectionString: \"Server=tcp:db,1433;Database={{Database}};User Id=sa;Password=pw\"\n\
             schemaPath: {}\n\
             ps1Path: {}\n\
             ps1Filename: \"gen-{{databaseName}}.ps1\"\n\
             ps1CommandMask: \"gen -s {{jsonSchemaFile}}\"\n",
            schemas.path().display(),
            scripts.path().display()
        );

        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.schema_path, schemas.path());
        assert_eq!(
            config.batch_filename("Shop"),
            scripts.path().join("gen-Shop.ps1")
        );
    }
}
