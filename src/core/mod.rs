//! Core catalog engine.
//!
//! ## Module Structure
//!
//! - `data`: Entry and catalog types
//! - `parsers`: Qt Linguist `.ts` reader and catalog discovery
//! - `placeholder`: `%1`-style placeholder extraction, comparison and substitution
//! - `table`: Immutable lookup tables (`StringTable`, `Translations`)
//! - `bundled`: The catalog shipped with the crate
//! - `rewrite`: Streaming rewrite that drops stale messages from a catalog
//! - `context`: `CheckContext`, the loaded project state shared by rules

pub mod bundled;
pub mod context;
pub mod data;
pub mod parsers;
pub mod placeholder;
pub mod rewrite;
pub mod table;

pub use context::CheckContext;
pub use data::{
    Catalog, CatalogLocation, EntryContext, Origin, TranslationEntry, TranslationKey,
    TranslationStatus, language_from_file_name, normalize_language,
};
pub use table::{StringTable, Translations};
