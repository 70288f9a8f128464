//! Untranslated text detection rule.
//!
//! Detects translations identical to their source text, which usually means
//! the translator copied the string without translating it.
//!
//! Skipped:
//! - catalogs in the source language itself (e.g. `en_GB` for `en` sources)
//! - texts without letters once placeholders are removed ("%1: %2", "--")
//! - texts listed in `ignoreTexts`
//! - empty, obsolete and vanished entries (other rules cover them)

use std::collections::HashSet;

use crate::{
    core::{Catalog, CheckContext, placeholder::strip_placeholders},
    issues::UntranslatedIssue,
    utils::contains_alphabetic,
};

pub fn check_untranslated_issues(ctx: &CheckContext) -> Vec<UntranslatedIssue> {
    let source_language = ctx.source_language();
    ctx.catalogs()
        .iter()
        .flat_map(|catalog| check_untranslated(catalog, &source_language, &ctx.ignore_texts))
        .collect()
}

/// Check one catalog for translations identical to their source.
///
/// # Arguments
/// * `catalog` - The parsed catalog
/// * `source_language` - Normalized language of the source texts (e.g., "en")
/// * `ignore_texts` - Source texts that may stay identical
pub fn check_untranslated(
    catalog: &Catalog,
    source_language: &str,
    ignore_texts: &HashSet<String>,
) -> Vec<UntranslatedIssue> {
    if base_language(&catalog.language) == base_language(source_language) {
        return Vec::new();
    }

    catalog
        .entries()
        .iter()
        .filter(|entry| entry.status.is_live() && !entry.has_empty_translation())
        .filter(|entry| entry.translations().contains(&entry.source()))
        .filter(|entry| contains_alphabetic(&strip_placeholders(entry.source())))
        .filter(|entry| !ignore_texts.contains(entry.source()))
        .map(|entry| UntranslatedIssue {
            context: entry.to_context(),
            language: catalog.language.clone(),
        })
        .collect()
}

fn base_language(language: &str) -> &str {
    language.split('_').next().unwrap_or(language)
}
