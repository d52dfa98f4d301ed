//! The embedded detailed-tag table.
//!
//! The table ships inside the crate as a versioned JSON file and is parsed
//! exactly once, on first access. It is partial by design: not every known
//! tag has a record.

use std::sync::OnceLock;

use crate::TagDetails;

const DETAILED_TAGS_JSON: &str = include_str!("../data/html-tags-detailed.json");

static DETAILED_TAGS: OnceLock<Vec<TagDetails>> = OnceLock::new();

/// All detailed records in table order.
pub fn detailed_tags() -> &'static [TagDetails] {
    DETAILED_TAGS.get_or_init(|| {
        let records: Vec<TagDetails> = serde_json::from_str(DETAILED_TAGS_JSON)
            .expect("html-tags-detailed.json is not a valid detail table");
        log::debug!("loaded {} detailed tag records", records.len());
        records
    })
}

/// Exact-match lookup by tag name. Case-sensitive.
///
/// A miss is an expected outcome (the table does not cover every tag) and
/// yields `None` rather than an error.
pub fn details_of(tag: &str) -> Option<&'static TagDetails> {
    detailed_tags().iter().find(|record| record.tag == tag)
}
