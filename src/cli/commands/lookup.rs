//! Lookup command - print the translation of one source text.
//!
//! Lookups never fail on a missing entry: the source text is printed instead.
//! Errors are limited to loading problems (no catalogs, ambiguous locale).

use std::path::Path;

use anyhow::{Result, bail};

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};
use crate::{
    core::{
        CheckContext, StringTable, Translations, bundled::sql_export_pt_br, normalize_language,
        placeholder::substitute,
    },
    issues::Issue,
};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let args: Vec<&str> = cmd.args.iter().map(String::as_str).collect();

    if cmd.bundled {
        let table = sql_export_pt_br();
        let summary = lookup_in(
            Some(table),
            table.language(),
            &cmd.context,
            &cmd.source,
            &args,
        );
        return Ok(finish(
            CommandSummary::Lookup(summary),
            Vec::new(),
            1,
            table.len(),
            false,
        ));
    }

    let ctx = CheckContext::new(&cmd.common)?;
    let translations = ctx.translations();

    let locale = resolve_locale(translations, cmd.locale.as_deref(), &ctx.translations_dir)?;

    let summary = lookup_in(
        translations.table(&locale),
        &locale,
        &cmd.context,
        &cmd.source,
        &args,
    );

    let parse_errors = ctx.parse_errors().iter().cloned().map(Issue::ParseError);

    Ok(finish(
        CommandSummary::Lookup(summary),
        parse_errors.collect(),
        ctx.catalogs().len(),
        ctx.entry_count(),
        false,
    ))
}

/// Pick the locale to look up in.
///
/// An explicit locale is used as given. Otherwise the only loaded locale is
/// used; zero or several loaded locales are an error.
pub fn resolve_locale(
    translations: &Translations,
    requested: Option<&str>,
    translations_dir: &Path,
) -> Result<String> {
    if let Some(locale) = requested {
        return Ok(locale.to_string());
    }

    match translations.locales().as_slice() {
        [] => bail!("No catalogs found in {}", translations_dir.display()),
        [only] => Ok(only.to_string()),
        many => bail!(
            "Several locales loaded ({}); choose one with --locale",
            many.join(", ")
        ),
    }
}

/// Translate `source` through `table` (source fallback), then substitute
/// `args`.
pub fn lookup_in(
    table: Option<&StringTable>,
    locale: &str,
    context: &str,
    source: &str,
    args: &[&str],
) -> LookupSummary {
    let translation = table.and_then(|t| t.get(context, source));
    let locale = table
        .map(|t| t.language().to_string())
        .unwrap_or_else(|| normalize_language(locale));

    LookupSummary {
        text: substitute(translation.unwrap_or(source), args),
        locale,
        translated: translation.is_some(),
    }
}
