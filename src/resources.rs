//! Template and mapping resource loading
//!
//! Each resource resolves in order: explicit config override path, the
//! well-known file name beside the running executable, then the embedded
//! default shipped with the crate.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codegen::TemplateSet;
use crate::config::{defaults, CodegenConfig};
use crate::error::Result;

const EMBEDDED_CLASS_TEMPLATE: &str = include_str!("../resources/ClassTemplate.cs");
const EMBEDDED_PROPERTY_TEMPLATE: &str = include_str!("../resources/PropertyTemplate.cs");
const EMBEDDED_TYPE_MAPPING: &str = include_str!("../resources/TypeMapping.txt");

/// The external text inputs consumed by one generation run
#[derive(Debug, Clone)]
pub struct Resources {
    pub templates: TemplateSet,
    pub type_mapping: String,
}

/// Load all resources for a run according to the configuration
pub fn load(config: &CodegenConfig) -> Result<Resources> {
    let class_template = load_resource(
        config.class_template.as_deref(),
        defaults::CLASS_TEMPLATE_FILE,
        EMBEDDED_CLASS_TEMPLATE,
    )?;
    let property_template = load_resource(
        config.property_template.as_deref(),
        defaults::PROPERTY_TEMPLATE_FILE,
        EMBEDDED_PROPERTY_TEMPLATE,
    )?;
    let type_mapping = load_resource(
        config.type_mapping.as_deref(),
        defaults::TYPE_MAPPING_FILE,
        EMBEDDED_TYPE_MAPPING,
    )?;

    Ok(Resources {
        templates: TemplateSet {
            class_template,
            property_template,
        },
        type_mapping,
    })
}

/// Resolve one resource.
///
/// An explicit override path must exist; a read failure there is an error,
/// not a fallback.
fn load_resource(
    override_path: Option<&Path>,
    well_known_name: &str,
    embedded: &str,
) -> Result<String> {
    if let Some(path) = override_path {
        debug!("Loading resource from override path {:?}", path);
        return Ok(fs::read_to_string(path)?);
    }

    if let Some(path) = exe_sibling(well_known_name) {
        if path.exists() {
            debug!("Loading resource from {:?}", path);
            return Ok(fs::read_to_string(&path)?);
        }
    }

    debug!("Using embedded default for {}", well_known_name);
    Ok(embedded.to_string())
}

/// Path of a file with the given name in the executable's directory
fn exe_sibling(name: &str) -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(name))
}
