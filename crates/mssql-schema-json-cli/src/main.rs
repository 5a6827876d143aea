//! mssql-schema-json CLI - JSON table schemas for template-driven code generation.

use clap::Parser;
use mssql_schema_json::{Config, Orchestrator, SchemaGenError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "mssql-schema-json")]
#[command(about = "Generate JSON table schemas from a SQL Server database")]
#[command(version)]
struct Cli {
    /// SQL Server database name
    #[arg(short = 'd', long = "database-name", visible_alias = "databasename")]
    database_name: String,

    /// Generate the PS1 batch command file
    #[arg(short = 'p', long = "create-ps1", visible_alias = "createPS1")]
    create_ps1: bool,

    /// Path to YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), SchemaGenError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let config = Config::load(&cli.config)?;
    info!("Loaded configuration from {:?}", cli.config);

    let orchestrator = Orchestrator::new(config);
    let result = orchestrator.run(&cli.database_name, cli.create_ps1).await?;

    if cli.output_json {
        println!("{}", result.to_json()?);
    } else {
        println!("\nSchema generation completed!");
        println!("  Database: {}", result.database);
        println!("  Duration: {:.2}s", result.duration_seconds);
        println!("  Tables: {}", result.tables_total);
        println!("  Schema files: {}", result.schema_files.len());
        if let Some(ref batch) = result.batch_file {
            println!("  Batch file: {}", batch.display());
        }
    }

    Ok(())
}

fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
