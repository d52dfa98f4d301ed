//! The embedded tag tables.
//!
//! Both tables ship inside the crate as versioned JSON files and are parsed
//! exactly once, on first access. Every accessor hands out shared references
//! into process-lifetime storage; there is no mutation surface.

use std::str::FromStr;
use std::sync::OnceLock;

use crate::Tag;

const ALL_TAGS_JSON: &str = include_str!("../data/html-tags.json");
const VOID_TAGS_JSON: &str = include_str!("../data/html-tags-void.json");

static ALL_TAGS: OnceLock<Vec<&'static str>> = OnceLock::new();
static VOID_TAGS: OnceLock<Vec<&'static str>> = OnceLock::new();

/// All known tag names in canonical table order.
pub fn all_tags() -> &'static [&'static str] {
    ALL_TAGS.get_or_init(|| load_table(ALL_TAGS_JSON, "html-tags.json"))
}

/// The void tag names (elements that never contain children and have no
/// closing form), in table order. A subset of [`all_tags`].
pub fn void_tags() -> &'static [&'static str] {
    VOID_TAGS.get_or_init(|| load_table(VOID_TAGS_JSON, "html-tags-void.json"))
}

/// Exact membership test against the full tag table. Case-sensitive.
pub fn is_tag(tag: &str) -> bool {
    Tag::from_str(tag).is_ok()
}

/// Exact membership test against the void table. Case-sensitive.
pub fn is_void_tag(tag: &str) -> bool {
    void_tags().contains(&tag)
}

/// Parse a JSON name table, resolving each entry through the closed [`Tag`]
/// domain. A name in the data file with no corresponding variant is a defect
/// in the shipped table and fails fast here.
fn load_table(json: &str, file: &str) -> Vec<&'static str> {
    let names: Vec<String> = serde_json::from_str(json)
        .unwrap_or_else(|err| panic!("{file} is not a JSON string array: {err}"));
    let table: Vec<&'static str> = names
        .iter()
        .map(|name| {
            Tag::from_str(name)
                .unwrap_or_else(|_| panic!("{file} lists `{name}`, which is not a known tag"))
                .as_str()
        })
        .collect();
    log::debug!("loaded {} tag names from {file}", table.len());
    table
}
