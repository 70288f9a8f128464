//! Placeholder mismatch detection rule.
//!
//! A translation that drops, adds or renumbers a `%1`-style token breaks the
//! string once arguments are substituted, so this is an error.
//!
//! Only live entries with translated text are checked. Empty translations are
//! reported by the unfinished rule instead; lookups fall back to the source
//! for them anyway.

use crate::{
    core::{Catalog, CheckContext, placeholder::compare_placeholders},
    issues::PlaceholderMismatchIssue,
};

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    ctx.catalogs()
        .iter()
        .flat_map(check_placeholders)
        .collect()
}

/// Check every translated form of every live entry against its source.
///
/// Plural entries are checked form by form; the entry is reported once, with
/// the first mismatching form.
pub fn check_placeholders(catalog: &Catalog) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for entry in catalog.entries() {
        if !entry.status.is_live() {
            continue;
        }

        let mismatch = entry
            .translations()
            .into_iter()
            .filter(|t| !t.is_empty())
            .find_map(|t| compare_placeholders(entry.source(), t));

        if let Some(mismatch) = mismatch {
            issues.push(PlaceholderMismatchIssue {
                context: entry.to_context(),
                language: catalog.language.clone(),
                mismatch,
            });
        }
    }

    issues
}
