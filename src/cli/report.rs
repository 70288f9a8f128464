//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tsctl to be used as a library.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::commands::{CleanSummary, CommandResult, CommandSummary, InitSummary, LookupSummary};
use crate::{
    config::CONFIG_FILE_NAME,
    issues::{Issue, ObsoleteIssue, Report, ReportLocation, Severity},
    utils::plural,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
///
/// Issues are displayed with severity, location, the catalog line and a
/// caret, then note and hint lines, then a summary.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalogs: usize, entries: usize) {
    print_success_to(catalogs, entries, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalogs: usize, entries: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} ({}) - no issues found",
        plural(catalogs, "catalog file", "catalog files"),
        plural(entries, "message", "messages")
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_command_output(result);

    let show_success = match &result.summary {
        CommandSummary::Check => result.issues.is_empty(),
        CommandSummary::Clean(summary) => summary.stale_count == 0 && result.issues.is_empty(),
        CommandSummary::Lookup(_) | CommandSummary::Init(_) => false,
    };
    if show_success {
        print_success(result.catalogs_checked, result.entries_checked);
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_command_output(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check => report(&result.issues),
        CommandSummary::Lookup(summary) => print_lookup_to(summary, &mut io::stdout().lock()),
        CommandSummary::Clean(summary) => print_clean_to(summary, &mut io::stdout().lock()),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// Command Output
// ============================================================

pub fn print_lookup_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.text);
}

pub fn print_clean_to<W: Write>(summary: &CleanSummary, writer: &mut W) {
    if summary.stale_count == 0 {
        return;
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} in {}.",
            "Removed".green().bold(),
            plural(summary.removed_count, "message", "messages"),
            plural(summary.file_count, "file", "files")
        );
    } else {
        preview_stale_to(&summary.stale_issues, writer);
        let _ = writeln!(
            writer,
            "{} {} in {}.",
            "Would remove".yellow().bold(),
            plural(summary.stale_count, "message", "messages"),
            plural(summary.file_count, "file", "files")
        );
        let _ = writeln!(
            writer,
            "Run with {} to remove these messages.",
            "--apply".cyan()
        );
    }
}

/// List the messages `clean --apply` would remove.
fn preview_stale_to<W: Write>(issues: &[ObsoleteIssue], writer: &mut W) {
    let width = issues
        .iter()
        .map(|i| i.context.line().to_string().len())
        .max()
        .unwrap_or(1);

    for issue in issues {
        let ctx = &issue.context;
        let _ = writeln!(
            writer,
            "  {} {}:{}:{}  {}",
            "-->".blue(),
            ctx.file_path(),
            ctx.line(),
            ctx.col(),
            format!("[{}]", issue.status).dimmed().cyan()
        );
        print_snippet(
            writer,
            ctx.line(),
            ctx.col(),
            &ctx.source_line,
            width,
            "^".yellow(),
        );
        let _ = writeln!(writer);
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
    if let Some(error) = &summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Entry(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
            let caret = match severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };
            print_snippet(
                writer,
                ctx.line(),
                ctx.col(),
                &ctx.source_line,
                max_line_width,
                caret,
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

/// Gutter, catalog line and a caret under column `col` (1-based).
fn print_snippet<W: Write>(
    writer: &mut W,
    line: usize,
    col: usize,
    source_line: &str,
    width: usize,
    caret: ColoredString,
) {
    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = width
    );

    let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret,
        width = width,
        padding = caret_padding
    );
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            plural(total_problems, "problem", "problems"),
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Entry(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Tests
// ============================================================
