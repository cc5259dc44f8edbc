//! Column type mapping with prefix-match fallback

use indexmap::IndexMap;

/// Ordered source-type to target-type mapping.
///
/// Iteration order equals insertion order, which decides the winner when
/// several mapping keys are prefixes of the same source type.
#[derive(Debug, Clone, Default)]
pub struct TypeMapping {
    map: IndexMap<String, String>,
}

impl TypeMapping {
    /// Parse a mapping file.
    ///
    /// Line format: `<source-type> <target-type>`, whitespace separated
    /// (tabs count as spaces). Lines starting with `#` are comments; blank
    /// lines and lines with fewer than two tokens are skipped. Duplicate
    /// keys keep the first occurrence.
    pub fn parse(content: &str) -> Self {
        let mut map = IndexMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }

            let normalized = line.replace('\t', " ");
            let mut parts = normalized.split_whitespace();
            let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                continue;
            };

            if !map.contains_key(key) {
                map.insert(key.to_string(), value.to_string());
            }
        }

        Self { map }
    }

    /// Resolve a source type to its target type.
    ///
    /// An exact match is looked up first, then the keys are scanned in
    /// insertion order and the first key that is a literal prefix of the
    /// source type wins, even over the exact match. Without any match the
    /// source type passes through unchanged.
    ///
    /// For non-nullable columns every `?` nullability marker is stripped
    /// from the result.
    pub fn resolve(&self, source_type: &str, nullable: bool) -> String {
        let mut mapped = self
            .map
            .get(source_type)
            .cloned()
            .unwrap_or_else(|| source_type.to_string());

        for (key, value) in &self.map {
            if source_type.starts_with(key.as_str()) {
                mapped = value.clone();
                break;
            }
        }

        if !nullable {
            mapped = mapped.replace('?', "");
        }

        mapped
    }

    /// Number of mapping entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
