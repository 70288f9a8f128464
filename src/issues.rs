//! Issue types for catalog checks.
//!
//! Each issue is self-contained with everything needed by:
//! - Reporter: to display the issue to users (CLI, MCP)
//! - Clean: to locate the catalog file to rewrite

use enum_dispatch::enum_dispatch;

use crate::core::{EntryContext, TranslationStatus, placeholder::PlaceholderMismatch};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    PlaceholderMismatch,
    DuplicateEntry,
    Unfinished,
    Untranslated,
    Obsolete,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::PlaceholderMismatch => write!(f, "placeholder"),
            Rule::DuplicateEntry => write!(f, "duplicate"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::Obsolete => write!(f, "obsolete"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Catalog Entries (EntryContext)
// ============================================================

/// Translation whose placeholder tokens differ from its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: EntryContext,
    /// Catalog language (e.g., "pt_BR").
    pub language: String,
    pub mismatch: PlaceholderMismatch,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Second (or later) message with the same source text in one context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntryIssue {
    pub context: EntryContext,
    /// Line of the first occurrence, which lookups use.
    pub first_line: usize,
}

impl DuplicateEntryIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateEntry
    }
}

/// Translation that is empty or still marked `unfinished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: EntryContext,
    pub language: String,
    /// True when there is no translated text at all.
    pub empty: bool,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Translation identical to its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: EntryContext,
    pub language: String,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Message kept only as translator memory (`obsolete` or `vanished`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteIssue {
    pub context: EntryContext,
    pub status: TranslationStatus,
}

impl ObsoleteIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Obsolete
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// Catalog file could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during a check.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    PlaceholderMismatch(PlaceholderMismatchIssue),
    DuplicateEntry(DuplicateEntryIssue),
    Unfinished(UnfinishedIssue),
    Untranslated(UntranslatedIssue),
    Obsolete(ObsoleteIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
            Issue::DuplicateEntry(_) => DuplicateEntryIssue::severity(),
            Issue::Unfinished(_) => UnfinishedIssue::severity(),
            Issue::Untranslated(_) => UntranslatedIssue::severity(),
            Issue::Obsolete(_) => ObsoleteIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
            Issue::DuplicateEntry(_) => DuplicateEntryIssue::rule(),
            Issue::Unfinished(_) => UnfinishedIssue::rule(),
            Issue::Untranslated(_) => UntranslatedIssue::rule(),
            Issue::Obsolete(_) => ObsoleteIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Catalog entry (has the catalog line for context display).
    Entry(&'a EntryContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the calls from
/// the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text or error).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source().to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} in {} (\"{}\")",
            self.mismatch,
            self.context.context_name(),
            self.context.translation
        ))
    }
}

impl Report for DuplicateEntryIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source().to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "already defined in {} at line {}",
            self.context.context_name(),
            self.first_line
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("lookups use the first occurrence; remove or merge this message")
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source().to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.empty {
            Some(format!(
                "no {} translation in {}",
                self.language,
                self.context.context_name()
            ))
        } else {
            Some(format!(
                "{} translation in {} not confirmed (\"{}\")",
                self.language,
                self.context.context_name(),
                self.context.translation
            ))
        }
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source().to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "identical in: {} ({})",
            self.language,
            self.context.context_name()
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("add the text to 'ignoreTexts' if it needs no translation")
    }
}

impl Report for ObsoleteIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.context)
    }

    fn message(&self) -> String {
        self.context.source().to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "marked {} in {}",
            self.status,
            self.context.context_name()
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("run `tsctl clean --apply` to remove stale messages")
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Entry(ctx) => &ctx.location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Entry(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Entry(ctx) => ctx.location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
