//! Static registry of the standard HTML element names.
//!
//! The full tag table and its void-element subset ship inside the crate as
//! versioned JSON files, parsed once on first access and immutable for the
//! life of the process. On top of them sit a handful of pure queries.
//!
//! ```
//! use markup_tags::{filter_by_prefix, is_tag, is_void_tag};
//!
//! assert!(is_tag("div"));
//! assert!(is_void_tag("br"));
//!
//! // Lookups are case-sensitive: tag names are lowercase by convention.
//! assert!(!is_tag("DIV"));
//!
//! let d_tags = filter_by_prefix("d");
//! assert!(d_tags.contains(&"div"));
//! ```
//!
//! For statically typed use the closed [`Tag`] enum covers the same domain;
//! its `FromStr` impl validates names arriving from untyped boundaries such
//! as parsed markup.
//!
//! Per-element metadata (descriptions, categories, attributes) lives in the
//! companion `markup-tags-meta` crate.

mod query;
mod registry;
mod tag;

pub use query::{Order, filter_by_prefix, group_by_length, sort_alphabetically};
pub use registry::{all_tags, is_tag, is_void_tag, void_tags};
pub use tag::{Tag, UnknownTagError};
