//! Clean command - remove obsolete and vanished messages.
//!
//! Without `--apply` the stale messages are only listed. With `--apply` each
//! affected catalog is rewritten in place; everything outside the removed
//! `<message>` blocks is kept byte-for-byte.

use std::{collections::BTreeSet, fs};

use anyhow::{Context, Result};

use super::super::args::CleanCommand;
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{
    core::{CheckContext, rewrite::remove_stale_messages},
    issues::{Issue, ObsoleteIssue},
    rules::obsolete::check_obsolete_issues,
};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let stale_issues = check_obsolete_issues(&ctx);
    let files = stale_files(&stale_issues);
    let file_count = files.len();

    let mut removed_count = 0;
    if apply {
        for file_path in files {
            removed_count += clean_file(file_path)?;
            if ctx.verbose {
                eprintln!("Rewrote {}", file_path);
            }
        }
    }

    let parse_errors = ctx.parse_errors().iter().cloned().map(Issue::ParseError);

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            stale_count: stale_issues.len(),
            file_count,
            is_apply: apply,
            removed_count,
            stale_issues,
        }),
        parse_errors.collect(),
        ctx.catalogs().len(),
        ctx.entry_count(),
        false,
    ))
}

/// Catalog files holding at least one stale message, sorted.
fn stale_files(issues: &[ObsoleteIssue]) -> BTreeSet<&str> {
    issues.iter().map(|i| i.context.file_path()).collect()
}

/// Remove the stale messages of one catalog file. Returns the removed count.
pub fn clean_file(file_path: &str) -> Result<usize> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read catalog file: {:?}", file_path))?;
    let (cleaned, removed) = remove_stale_messages(&content)
        .with_context(|| format!("Failed to rewrite catalog file: {:?}", file_path))?;
    if removed > 0 {
        fs::write(file_path, cleaned)
            .with_context(|| format!("Failed to write catalog file: {:?}", file_path))?;
    }
    Ok(removed)
}
