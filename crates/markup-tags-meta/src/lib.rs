//! Per-element metadata for the standard HTML tags.
//!
//! This crate layers descriptions, usage examples, category labels, and
//! common attribute lists over the tag names provided by `markup-tags`.
//! Records are keyed by plain names so the two crates stay decoupled;
//! lookups must match the core table exactly (case-sensitive).
//!
//! ```
//! use markup_tags_meta::{details_of, tags_by_attribute, tags_by_category};
//!
//! let input = details_of("input").unwrap();
//! assert_eq!(input.category, "forms");
//!
//! // Records without a category in the data file read as "general".
//! assert_eq!(details_of("span").unwrap().category, "general");
//!
//! // A tag without a record is an expected miss, not an error.
//! assert!(details_of("rtc").is_none());
//!
//! assert!(tags_by_category("headings").contains(&"h1"));
//! assert!(tags_by_attribute("href").contains(&"a"));
//! ```

mod query;
mod record;
mod registry;

pub use query::{categories, tags_by_attribute, tags_by_category};
pub use record::TagDetails;
pub use registry::{detailed_tags, details_of};
