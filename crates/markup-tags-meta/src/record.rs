//! Per-element metadata records.

use serde::{Deserialize, Serialize};

/// Metadata describing one HTML element.
///
/// Optional fields in the data file are defaulted at load: a record with no
/// category reads `"general"`, and missing example or attribute lists read
/// as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDetails {
    /// The element name. Matches the core tag table exactly (case-sensitive).
    pub tag: String,
    /// Human-readable description of the element.
    pub description: String,
    /// Example usage snippets.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Free-text grouping label, e.g. "forms" or "headings".
    #[serde(default = "default_category")]
    pub category: String,
    /// Attribute names the element commonly supports.
    #[serde(default)]
    pub attributes: Vec<String>,
}

fn default_category() -> String {
    "general".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_record_deserializes_with_defaults() {
        let record: TagDetails =
            serde_json::from_str(r#"{"tag": "wbr", "description": "Word-break opportunity."}"#)
                .unwrap();
        assert_eq!(record.tag, "wbr");
        assert!(record.examples.is_empty());
        assert_eq!(record.category, "general");
        assert!(record.attributes.is_empty());
    }

    #[test]
    fn test_full_record_deserializes_verbatim() {
        let record: TagDetails = serde_json::from_str(
            r#"{
                "tag": "a",
                "description": "Hyperlink.",
                "examples": ["<a href=\"/\">home</a>"],
                "category": "text",
                "attributes": ["href", "target"]
            }"#,
        )
        .unwrap();
        assert_eq!(record.category, "text");
        assert_eq!(record.attributes, ["href", "target"]);
        assert_eq!(record.examples.len(), 1);
    }
}
