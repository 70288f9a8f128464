//! Obsolete message detection rule.
//!
//! `lupdate` keeps messages whose source string left the code, marked
//! `type="obsolete"` or `type="vanished"`. They are never served by lookups.
//! `tsctl clean --apply` removes them.

use crate::{
    core::{Catalog, CheckContext},
    issues::ObsoleteIssue,
};

pub fn check_obsolete_issues(ctx: &CheckContext) -> Vec<ObsoleteIssue> {
    ctx.catalogs().iter().flat_map(check_obsolete).collect()
}

pub fn check_obsolete(catalog: &Catalog) -> Vec<ObsoleteIssue> {
    catalog
        .entries()
        .iter()
        .filter(|entry| !entry.status.is_live())
        .map(|entry| ObsoleteIssue {
            context: entry.to_context(),
            status: entry.status,
        })
        .collect()
}
