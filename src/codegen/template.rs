//! Literal placeholder substitution for class and property templates

use crate::parser::{PdmColumn, PdmTable};

use super::type_mapper::TypeMapping;

/// Class-level placeholder: table display name
pub const TABLE_NAME: &str = "{TableName}";
/// Class-level placeholder: table code
pub const TABLE_CODE: &str = "{TableCode}";
/// Class-level placeholder: table comment
pub const TABLE_COMMENT: &str = "{TableComment}";
/// Class-level placeholder: concatenated rendered properties
pub const COLS: &str = "{Cols}";

/// Property placeholder: column display name
pub const COL_NAME: &str = "{ColName}";
/// Property placeholder: column code
pub const COL_CODE: &str = "{ColCode}";
/// Property placeholder: column comment
pub const COL_COMMENT: &str = "{ColComment}";
/// Property placeholder: mapped target type
pub const COL_DATA_TYPE: &str = "{ColDataType}";

/// The class and property template pair used for one generation run
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub class_template: String,
    pub property_template: String,
}

impl TemplateSet {
    /// Render the full class source text for a table.
    ///
    /// Substitution is plain find-and-replace of the fixed tokens; absent
    /// source values substitute as empty strings.
    pub fn render_class(&self, table: &PdmTable, mapping: &TypeMapping) -> String {
        let mut properties = String::new();
        for column in &table.columns {
            properties.push_str(&self.render_property(column, mapping));
            properties.push('\n');
        }

        self.class_template
            .replace(TABLE_NAME, table.name.as_deref().unwrap_or_default())
            .replace(TABLE_CODE, &table.code)
            .replace(TABLE_COMMENT, table.comment.as_deref().unwrap_or_default())
            .replace(COLS, &properties)
    }

    /// Render one property block for a column
    fn render_property(&self, column: &PdmColumn, mapping: &TypeMapping) -> String {
        let data_type = column.data_type.as_deref().unwrap_or_default();
        let mapped = mapping.resolve(data_type, column.nullable());

        self.property_template
            .replace(COL_NAME, column.name.as_deref().unwrap_or_default())
            .replace(COL_CODE, &column.code)
            .replace(COL_COMMENT, column.comment.as_deref().unwrap_or_default())
            .replace(COL_DATA_TYPE, &mapped)
    }
}
