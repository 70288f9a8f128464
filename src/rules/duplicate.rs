//! Duplicate message detection rule.
//!
//! Two `<message>` elements with the same source text inside one context
//! share a lookup key. Only the first one is ever served; every later copy is
//! reported, pointing back at the first.

use std::collections::HashMap;

use crate::{
    core::{Catalog, CheckContext, TranslationKey},
    issues::DuplicateEntryIssue,
};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateEntryIssue> {
    ctx.catalogs()
        .iter()
        .flat_map(check_duplicates)
        .collect()
}

pub fn check_duplicates(catalog: &Catalog) -> Vec<DuplicateEntryIssue> {
    let mut first_lines: HashMap<&TranslationKey, usize> = HashMap::new();
    let mut issues = Vec::new();

    for entry in catalog.entries() {
        match first_lines.get(&entry.key) {
            Some(&first_line) => issues.push(DuplicateEntryIssue {
                context: entry.to_context(),
                first_line,
            }),
            None => {
                first_lines.insert(&entry.key, entry.position.line);
            }
        }
    }

    issues
}
