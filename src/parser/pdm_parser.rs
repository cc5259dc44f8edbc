//! PDM document parser using roxmltree

use roxmltree::{Document, Node};

use super::metadata::*;
use crate::error::{CodegenError, Result};

/// Namespace qualifying structural elements (Table, Column, Key)
const NS_OBJECT: &str = "object";

/// Namespace qualifying leaf attribute elements (Code, Name, Comment, ...)
const NS_ATTRIBUTE: &str = "attribute";

/// Parse a PDM document string into table metadata.
///
/// Tables are returned in document order, each with its columns in document
/// order and key membership already resolved.
pub fn parse_model(xml: &str) -> Result<Vec<PdmTable>> {
    let doc = Document::parse(xml)?;

    let mut tables = Vec::new();

    for node in doc
        .descendants()
        .filter(|n| n.has_tag_name((NS_OBJECT, "Table")))
    {
        if let Some(table) = extract_table(node)? {
            tables.push(table);
        }
    }

    Ok(tables)
}

/// Extract one table from a Table element.
///
/// Returns `Ok(None)` for elements that share the Table tag but are not real
/// tables (shortcut/reference nodes carry no Code leaf).
fn extract_table(node: Node) -> Result<Option<PdmTable>> {
    let Some(code) = leaf_value(node, "Code") else {
        return Ok(None);
    };

    let name = leaf_value(node, "Name");
    let comment = leaf_value(node, "Comment");
    let id = node
        .attribute("Id")
        .ok_or(CodegenError::MissingId { element: "Table" })?
        .to_string();

    let mut columns = Vec::new();
    for col_node in node
        .descendants()
        .filter(|n| n.has_tag_name((NS_OBJECT, "Column")))
    {
        if let Some(column) = extract_column(col_node)? {
            columns.push(column);
        }
    }

    let mut table = PdmTable {
        id,
        code,
        name,
        comment,
        columns,
    };

    // Keys may reference columns declared in any order, so resolution is a
    // second pass over the already-extracted column list.
    resolve_keys(node, &mut table)?;

    Ok(Some(table))
}

/// Extract one column from a Column element.
///
/// Column elements without a Code leaf are not real columns (the same tag is
/// used for key column references) and yield `Ok(None)`.
fn extract_column(node: Node) -> Result<Option<PdmColumn>> {
    let Some(code) = leaf_value(node, "Code") else {
        return Ok(None);
    };

    let name = leaf_value(node, "Name");
    let comment = leaf_value(node, "Comment");
    let data_type = leaf_value(node, "DataType");

    // Mandatory columns carry <a:Mandatory>1</a:Mandatory>; anything else,
    // including an absent leaf, means nullable.
    let mandatory = leaf_value(node, "Mandatory").as_deref() == Some("1");

    let id = node
        .attribute("Id")
        .ok_or(CodegenError::MissingId { element: "Column" })?
        .to_string();

    Ok(Some(PdmColumn {
        id,
        code,
        name,
        comment,
        data_type,
        mandatory,
        is_key: false,
    }))
}

/// Flag key membership on the table's columns.
///
/// Every Column reference under a Key element must resolve to a column of the
/// same table; anything else is a reference-integrity violation and aborts
/// the run.
fn resolve_keys(table_node: Node, table: &mut PdmTable) -> Result<()> {
    for key_node in table_node
        .descendants()
        .filter(|n| n.has_tag_name((NS_OBJECT, "Key")))
    {
        for ref_node in key_node
            .descendants()
            .filter(|n| n.has_tag_name((NS_OBJECT, "Column")))
        {
            let Some(ref_id) = ref_node.attribute("Ref") else {
                return Err(CodegenError::MissingKeyRef {
                    table: table.code.clone(),
                });
            };

            match table.columns.iter_mut().find(|c| c.id == ref_id) {
                Some(column) => column.is_key = true,
                None => {
                    return Err(CodegenError::UnresolvedKeyReference {
                        table: table.code.clone(),
                        reference: ref_id.to_string(),
                    })
                }
            }
        }
    }

    Ok(())
}

/// Value of the first attribute-namespace leaf with the given local name,
/// searched among all descendants rather than only direct children.
///
/// A present-but-empty element yields `Some("")`; only a missing element
/// yields `None`.
fn leaf_value(node: Node, local_name: &str) -> Option<String> {
    node.descendants()
        .find(|n| n.has_tag_name((NS_ATTRIBUTE, local_name)))
        .map(|n| n.text().unwrap_or_default().to_string())
}
