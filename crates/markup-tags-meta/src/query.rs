//! Pure queries over the detailed-tag table.

use crate::registry::detailed_tags;

/// Tag names whose record carries exactly this category label, in table
/// order. Case-sensitive; a label no record uses yields an empty vector.
pub fn tags_by_category(category: &str) -> Vec<&'static str> {
    detailed_tags()
        .iter()
        .filter(|record| record.category == category)
        .map(|record| record.tag.as_str())
        .collect()
}

/// Tag names whose record lists `attribute`, in table order. No match
/// yields an empty vector.
pub fn tags_by_attribute(attribute: &str) -> Vec<&'static str> {
    detailed_tags()
        .iter()
        .filter(|record| record.attributes.iter().any(|a| a == attribute))
        .map(|record| record.tag.as_str())
        .collect()
}

/// Distinct category labels in order of first appearance.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for record in detailed_tags() {
        let category = record.category.as_str();
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_tags_by_category() {
        let forms = tags_by_category("forms");
        assert!(forms.contains(&"input"));
        assert!(forms.contains(&"select"));
        assert!(!forms.contains(&"div"));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(tags_by_category("no-such-category").is_empty());
        assert!(tags_by_category("Forms").is_empty()); // case-sensitive
    }

    #[test]
    fn test_tags_by_attribute() {
        let href = tags_by_attribute("href");
        assert_eq!(href, ["a", "area", "base", "link"]);
    }

    #[test]
    fn test_unknown_attribute_is_empty() {
        assert!(tags_by_attribute("no-such-attribute").is_empty());
    }

    #[test]
    fn test_results_preserve_table_order() {
        let headings = tags_by_category("headings");
        assert_eq!(headings, ["h1", "h2", "h3", "h4", "h5", "h6", "hgroup"]);
    }

    #[test]
    fn test_categories_are_distinct() {
        let labels = categories();
        assert!(labels.contains(&"forms"));
        assert!(labels.contains(&"general"));
        let unique: HashSet<&str> = labels.iter().copied().collect();
        assert_eq!(unique.len(), labels.len());
    }
}
