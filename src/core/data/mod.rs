//! Core data types used across the crate.
//!
//! ## Module Structure
//!
//! - `entry`: Translation entries and their locations (TranslationEntry, EntryContext)
//! - `catalog`: A parsed catalog file and language code helpers

pub mod catalog;
pub mod entry;

pub use catalog::{Catalog, language_from_file_name, normalize_language};
pub use entry::{
    CatalogLocation, EntryContext, Origin, TranslationEntry, TranslationKey, TranslationStatus,
};
