//! Configuration settings for pdm-codegen

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults;
use crate::error::{CodegenError, Result};

/// Main configuration struct for code generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Path to the PDM model file
    #[serde(default)]
    pub model_file: PathBuf,

    /// Output directory for generated class files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Override path for the class template (defaults to the well-known
    /// file beside the executable, then the embedded template)
    #[serde(default)]
    pub class_template: Option<PathBuf>,

    /// Override path for the property template
    #[serde(default)]
    pub property_template: Option<PathBuf>,

    /// Override path for the type mapping file
    #[serde(default)]
    pub type_mapping: Option<PathBuf>,

    /// Tables to include by code (comma-separated, or "*" for all)
    #[serde(default = "default_include_tables")]
    pub include_tables: String,

    /// Tables to exclude by code (comma-separated)
    #[serde(default = "default_exclude_tables")]
    pub exclude_tables: String,

    /// Dry run mode - preview without writing files
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

// Default value functions for serde
fn default_output_dir() -> PathBuf {
    PathBuf::from(defaults::OUTPUT_DIR)
}
fn default_include_tables() -> String {
    defaults::INCLUDE_TABLES.to_string()
}
fn default_exclude_tables() -> String {
    defaults::EXCLUDE_TABLES.to_string()
}
fn default_dry_run() -> bool {
    defaults::DRY_RUN
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            model_file: PathBuf::new(),
            output_dir: default_output_dir(),
            class_template: None,
            property_template: None,
            type_mapping: None,
            include_tables: default_include_tables(),
            exclude_tables: default_exclude_tables(),
            dry_run: default_dry_run(),
            log_level: None,
        }
    }
}

impl CodegenConfig {
    /// Create a default config with the given model file
    pub fn default_with_model(model_file: PathBuf) -> Self {
        Self {
            model_file,
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CodegenConfig = toml::from_str(&content).map_err(|e| {
            CodegenError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from config file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            // Try default locations
            builder = builder.add_source(File::with_name("pdm-codegen").required(false));
        }

        // Override with environment variables (PDM_CODEGEN_*)
        builder = builder.add_source(Environment::with_prefix("PDM_CODEGEN").separator("_"));

        let config: CodegenConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model_file.as_os_str().is_empty() {
            return Err(CodegenError::ValidationError(
                "model_file is required".into(),
            ));
        }

        if !self.model_file.exists() {
            return Err(CodegenError::ValidationError(format!(
                "Model file not found: {}",
                self.model_file.display()
            )));
        }

        Ok(())
    }
}
