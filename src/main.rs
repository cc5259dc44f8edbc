//! CLI entry point for pdm-codegen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pdm_codegen::config::{defaults, CodegenConfig};

#[derive(Parser)]
#[command(name = "pdm-codegen")]
#[command(about = "Generate class source files from a PowerDesigner physical data model")]
#[command(version)]
struct Cli {
    /// Path to the PDM model file (auto-discovered when exactly one .pdm
    /// file exists in the working directory)
    model: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Class template file (overrides config)
    #[arg(long)]
    class_template: Option<PathBuf>,

    /// Property template file (overrides config)
    #[arg(long)]
    property_template: Option<PathBuf>,

    /// Type mapping file (overrides config)
    #[arg(long)]
    type_mapping: Option<PathBuf>,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate class files for every table
    Generate,
    /// Inspect the model (show parsed tables for debugging)
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = if let Some(config_path) = &cli.config {
        CodegenConfig::from_file(config_path)?
    } else {
        CodegenConfig::default()
    };

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    // Apply CLI overrides
    if let Some(model) = cli.model {
        config.model_file = model;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if let Some(path) = cli.class_template {
        config.class_template = Some(path);
    }
    if let Some(path) = cli.property_template {
        config.property_template = Some(path);
    }
    if let Some(path) = cli.type_mapping {
        config.type_mapping = Some(path);
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    // Neither the CLI nor the config named a model file: discover one
    if config.model_file.as_os_str().is_empty() {
        config.model_file = discover_model_file()?;
        info!("Discovered model file: {:?}", config.model_file);
    }

    // Validate configuration
    config.validate()?;

    if let Some(Commands::Inspect) = &cli.command {
        return inspect_model(&config);
    }

    // Generate code
    info!("Generating classes from model: {:?}", config.model_file);

    pdm_codegen::generate(&config)?;

    info!("Code generation completed successfully");
    Ok(())
}

/// Find the single model file in the working directory.
///
/// Zero candidates or more than one is a usage error; the caller cannot
/// guess which model was meant.
fn discover_model_file() -> Result<PathBuf> {
    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(".")? {
        let path = entry?.path();
        let is_model = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(defaults::MODEL_EXTENSION));
        if path.is_file() && is_model {
            candidates.push(path);
        }
    }

    match candidates.len() {
        1 => Ok(candidates.remove(0)),
        0 => anyhow::bail!(
            "No model file given and no .{} file found in the working directory",
            defaults::MODEL_EXTENSION
        ),
        n => anyhow::bail!(
            "No model file given and {} .{} candidates found in the working directory",
            n,
            defaults::MODEL_EXTENSION
        ),
    }
}

fn inspect_model(config: &CodegenConfig) -> Result<()> {
    let model_xml = std::fs::read_to_string(&config.model_file)?;
    let tables = pdm_codegen::parser::parse_model(&model_xml)?;

    println!("Parsed {} tables:\n", tables.len());
    for table in &tables {
        println!("Table: {}", table.code);
        if let Some(name) = &table.name {
            println!("  Name: {}", name);
        }
        if let Some(comment) = &table.comment {
            println!("  Comment: {}", comment);
        }
        println!("  Columns:");
        for col in &table.columns {
            let nullable = if col.mandatory { "NOT NULL" } else { "NULL" };
            let key = if col.is_key { " KEY" } else { "" };
            println!(
                "    - {} {} {}{}",
                col.code,
                col.data_type.as_deref().unwrap_or("-"),
                nullable,
                key
            );
        }
        println!();
    }

    Ok(())
}
