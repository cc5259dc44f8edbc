//! Class file generator - writes one rendered class file per table

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{defaults, CodegenConfig};
use crate::error::Result;
use crate::parser::PdmTable;

use super::template::TemplateSet;
use super::type_mapper::TypeMapping;

/// Render and write a class file for every table.
///
/// The output directory is created if absent. Files are named after the
/// table code; an existing file with the same name is overwritten without
/// warning (last table wins if two tables share a code).
pub fn generate_classes(
    tables: &[PdmTable],
    templates: &TemplateSet,
    mapping: &TypeMapping,
    config: &CodegenConfig,
) -> Result<()> {
    if config.dry_run {
        for table in tables {
            info!("Dry run - would generate {:?}", output_file(config, table));
        }
        return Ok(());
    }

    fs::create_dir_all(&config.output_dir)?;

    for table in tables {
        let content = templates.render_class(table, mapping);
        let path = output_file(config, table);
        debug!("Generating class {} -> {:?}", table.code, path);
        fs::write(&path, content)?;
    }

    Ok(())
}

/// Output path for a table: `<output_dir>/<Code>.<ext>`
pub fn output_file(config: &CodegenConfig, table: &PdmTable) -> PathBuf {
    config
        .output_dir
        .join(format!("{}.{}", table.code, defaults::OUTPUT_EXTENSION))
}
