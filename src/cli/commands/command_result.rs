use crate::issues::{Issue, ObsoleteIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Lookup(LookupSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct LookupSummary {
    /// Translated text with arguments substituted (or the source on fallback).
    pub text: String,
    /// Locale the text was looked up in.
    pub locale: String,
    /// False when no translation was found and the source was returned.
    pub translated: bool,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub stale_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    /// Messages actually removed (only with `--apply`).
    pub removed_count: usize,
    pub stale_issues: Vec<ObsoleteIssue>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running tsctl commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found during the check.
    pub issues: Vec<Issue>,
    /// Number of catalog files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalog files that were parsed.
    pub catalogs_checked: usize,
    /// Number of messages over all parsed catalogs.
    pub entries_checked: usize,
}
