//! Metadata structures for parsed PDM documents

use serde::{Deserialize, Serialize};

/// Metadata for a table extracted from the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdmTable {
    /// Internal object id, unique within the document
    pub id: String,

    /// Table code, used as the class name and output file stem
    pub code: String,

    /// Display name (if any)
    pub name: Option<String>,

    /// Table comment (if any)
    pub comment: Option<String>,

    /// Columns in the table, in document order
    pub columns: Vec<PdmColumn>,
}

/// Metadata for a column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdmColumn {
    /// Internal object id, used only to resolve key references
    pub id: String,

    /// Column code, becomes the property name
    pub code: String,

    /// Display name (if any)
    pub name: Option<String>,

    /// Column comment (if any)
    pub comment: Option<String>,

    /// Raw data type string (e.g., "VARCHAR(50)")
    pub data_type: Option<String>,

    /// Whether the column carries an explicit Mandatory marker of "1"
    pub mandatory: bool,

    /// Whether any key constraint on the owning table references this column
    pub is_key: bool,
}

impl PdmTable {
    /// Get a column by its internal object id
    pub fn column_by_id(&self, id: &str) -> Option<&PdmColumn> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Columns flagged as key members, in column order
    pub fn key_columns(&self) -> Vec<&PdmColumn> {
        self.columns.iter().filter(|c| c.is_key).collect()
    }
}

impl PdmColumn {
    /// A column is nullable unless explicitly marked mandatory
    pub fn nullable(&self) -> bool {
        !self.mandatory
    }
}
