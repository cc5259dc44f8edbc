//! pdm-codegen: Generate class source files from PowerDesigner PDM files
//!
//! This crate provides both a CLI tool and a library for turning a physical
//! data model (PDM) document into one class source file per table. It parses
//! the PDM XML with `roxmltree`, maps database column types to target types
//! through a user-editable mapping file, and renders each table through a
//! pair of plain-text templates with literal placeholder substitution.
//!
//! # CLI Usage
//!
//! ```bash
//! pdm-codegen model.pdm
//! # or, with a single .pdm file in the working directory:
//! pdm-codegen
//! ```
//!
//! Generated files land in `Code/<TableCode>.cs` by default. Templates and
//! the type mapping can be overridden per run (`--class-template`,
//! `--property-template`, `--type-mapping`) or dropped next to the
//! executable under their well-known names (`ClassTemplate.cs`,
//! `PropertyTemplate.cs`, `TypeMapping.txt`).
//!
//! # Programmatic Configuration
//!
//! ```rust,ignore
//! pdm_codegen::CodegenBuilder::new("model.pdm")
//!     .output_dir("src/Generated")
//!     .exclude_tables(&["T_MIGRATION"])
//!     .generate()
//!     .expect("Failed to generate classes");
//! ```
//!
//! # Configuration file
//!
//! ```toml
//! model_file = "model.pdm"
//! output_dir = "Code"
//! type_mapping = "MyMapping.txt"
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod parser;
pub mod resources;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

pub use config::CodegenConfig;
pub use error::{CodegenError, Result};

/// Main entry point for code generation
pub fn generate(config: &CodegenConfig) -> Result<()> {
    info!("Parsing model: {:?}", config.model_file);
    let model_xml = std::fs::read_to_string(&config.model_file)?;
    let tables = parser::parse_model(&model_xml)?;
    info!("Found {} tables", tables.len());

    let tables = filter_tables(tables, &config.include_tables, &config.exclude_tables);
    debug!(
        "After filtering: {} tables (include={}, exclude={})",
        tables.len(),
        config.include_tables,
        config.exclude_tables
    );

    let resources = resources::load(config)?;
    let mapping = codegen::TypeMapping::parse(&resources.type_mapping);
    debug!("Loaded {} type mapping entries", mapping.len());

    info!("Generating classes in {:?}", config.output_dir);
    codegen::generate_classes(&tables, &resources.templates, &mapping, config)?;

    info!("Code generation complete");
    Ok(())
}

/// Filter tables based on include/exclude patterns (matched on table code)
fn filter_tables(
    tables: Vec<parser::PdmTable>,
    include: &str,
    exclude: &str,
) -> Vec<parser::PdmTable> {
    let include_all = include.trim() == "*" || include.trim().is_empty();
    let include_set: HashSet<String> = if include_all {
        HashSet::new()
    } else {
        include.split(',').map(|s| s.trim().to_string()).collect()
    };
    let exclude_set: HashSet<String> = exclude
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    tables
        .into_iter()
        .filter(|t| {
            let code = &t.code;
            let included = include_all || include_set.contains(code);
            let excluded = exclude_set.contains(code);
            included && !excluded
        })
        .collect()
}

/// Builder pattern for easy programmatic configuration
pub struct CodegenBuilder {
    config: CodegenConfig,
}

impl CodegenBuilder {
    /// Create a new builder with the given model file
    pub fn new(model_file: impl AsRef<Path>) -> Self {
        Self {
            config: CodegenConfig::default_with_model(model_file.as_ref().to_path_buf()),
        }
    }

    /// Set the output directory for generated classes
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the class template file
    pub fn class_template(mut self, path: impl AsRef<Path>) -> Self {
        self.config.class_template = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the property template file
    pub fn property_template(mut self, path: impl AsRef<Path>) -> Self {
        self.config.property_template = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the type mapping file
    pub fn type_mapping(mut self, path: impl AsRef<Path>) -> Self {
        self.config.type_mapping = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set tables to include by code
    pub fn include_tables(mut self, tables: &[&str]) -> Self {
        self.config.include_tables = tables.join(",");
        self
    }

    /// Set tables to exclude by code
    pub fn exclude_tables(mut self, tables: &[&str]) -> Self {
        self.config.exclude_tables = tables.join(",");
        self
    }

    /// Enable dry run mode (preview without writing files)
    pub fn dry_run(mut self) -> Self {
        self.config.dry_run = true;
        self
    }

    /// Generate the class files
    pub fn generate(self) -> Result<()> {
        generate(&self.config)
    }
}
