use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        duplicate::check_duplicate_issues, obsolete::check_obsolete_issues,
        placeholder::check_placeholder_issues, unfinished::check_unfinished_issues,
        untranslated::check_untranslated_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Placeholder,
    Duplicate,
    Unfinished,
    Untranslated,
    Obsolete,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Placeholder,
            CheckRule::Duplicate,
            CheckRule::Unfinished,
            CheckRule::Untranslated,
            CheckRule::Obsolete,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks
    };

    Ok(run_checks(&ctx, &checks))
}

/// Run the selected rules over a loaded context.
pub fn run_checks(ctx: &CheckContext, checks: &[CheckRule]) -> CommandResult {
    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        let before = all_issues.len();
        match check {
            CheckRule::Placeholder => {
                let issues = check_placeholder_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateEntry));
            }
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Untranslated => {
                let issues = check_untranslated_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
            CheckRule::Obsolete => {
                let issues = check_obsolete_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Obsolete));
            }
        }
        if ctx.verbose {
            eprintln!(
                "Rule {:?}: {} issue(s)",
                check,
                all_issues.len() - before
            );
        }
    }

    all_issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));

    finish(
        CommandSummary::Check,
        all_issues,
        ctx.catalogs().len(),
        ctx.entry_count(),
        true,
    )
}
