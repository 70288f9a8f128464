//! Unfinished translation detection rule.
//!
//! Reports live messages whose translation is empty or still carries
//! `type="unfinished"`. Lookups fall back to the source text for empty
//! translations, so the UI shows English where the translation is missing.

use crate::{
    core::{Catalog, CheckContext, TranslationStatus},
    issues::UnfinishedIssue,
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    ctx.catalogs()
        .iter()
        .flat_map(check_unfinished)
        .collect()
}

pub fn check_unfinished(catalog: &Catalog) -> Vec<UnfinishedIssue> {
    catalog
        .entries()
        .iter()
        .filter(|entry| entry.status.is_live())
        .filter_map(|entry| {
            let empty = entry.has_empty_translation();
            if !empty && entry.status != TranslationStatus::Unfinished {
                return None;
            }
            Some(UnfinishedIssue {
                context: entry.to_context(),
                language: catalog.language.clone(),
                empty,
            })
        })
        .collect()
}
