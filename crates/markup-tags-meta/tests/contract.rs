//! Cross-table consistency between the detailed records and the core tables.
//!
//! The detailed table is keyed by plain names, so nothing at load time ties
//! it to the core registry. These tests are where a stray or misspelled
//! record surfaces.

use std::collections::HashSet;

use markup_tags::{all_tags, is_tag};
use markup_tags_meta::{detailed_tags, details_of, tags_by_attribute, tags_by_category};

#[test]
fn every_record_names_a_known_tag() {
    for record in detailed_tags() {
        assert!(
            is_tag(&record.tag),
            "detailed record `{}` is not a known tag",
            record.tag
        );
    }
}

#[test]
fn records_are_unique_per_tag() {
    let unique: HashSet<&str> = detailed_tags().iter().map(|r| r.tag.as_str()).collect();
    assert_eq!(unique.len(), detailed_tags().len());
}

#[test]
fn records_follow_core_table_order() {
    let expected: Vec<&str> = all_tags()
        .iter()
        .copied()
        .filter(|tag| details_of(tag).is_some())
        .collect();
    let actual: Vec<&str> = detailed_tags().iter().map(|r| r.tag.as_str()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn every_record_has_a_description() {
    for record in detailed_tags() {
        assert!(
            !record.description.is_empty(),
            "record `{}` has an empty description",
            record.tag
        );
    }
}

#[test]
fn category_and_attribute_queries_return_known_tags() {
    for tag in tags_by_category("forms") {
        assert!(is_tag(tag));
    }
    for tag in tags_by_attribute("src") {
        assert!(is_tag(tag));
    }
}

#[test]
fn queries_are_idempotent() {
    assert_eq!(tags_by_category("media"), tags_by_category("media"));
    assert_eq!(tags_by_attribute("href"), tags_by_attribute("href"));
    assert_eq!(details_of("table"), details_of("table"));
}
