//! Default configuration values - single source of truth

/// Default include tables pattern (all tables)
pub const INCLUDE_TABLES: &str = "*";

/// Default exclude tables pattern (none)
pub const EXCLUDE_TABLES: &str = "";

/// Default output directory for generated classes
pub const OUTPUT_DIR: &str = "./Code";

/// File extension of generated class files
pub const OUTPUT_EXTENSION: &str = "cs";

/// File extension recognized when auto-discovering a model file
pub const MODEL_EXTENSION: &str = "pdm";

/// Well-known class template file name (looked up beside the executable)
pub const CLASS_TEMPLATE_FILE: &str = "ClassTemplate.cs";

/// Well-known property template file name (looked up beside the executable)
pub const PROPERTY_TEMPLATE_FILE: &str = "PropertyTemplate.cs";

/// Well-known type mapping file name (looked up beside the executable)
pub const TYPE_MAPPING_FILE: &str = "TypeMapping.txt";

/// Whether to run in dry-run mode by default
pub const DRY_RUN: bool = false;
