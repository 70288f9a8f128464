//! Catalog file parsers.
//!
//! - `ts`: Qt Linguist `.ts` reader and translations directory scanner

pub mod ts;
