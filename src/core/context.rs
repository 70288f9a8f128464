use std::{
    cell::OnceCell,
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        data::{Catalog, normalize_language},
        parsers::ts::scan_catalog_files,
        table::Translations,
    },
    issues::ParseErrorIssue,
};

/// Loaded project state shared by the rules and commands.
///
/// Catalogs are parsed eagerly so configuration and directory errors surface
/// before any rule runs. The multi-locale lookup table is built on first use.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g., `--translations-root ./i18n`)
/// 2. `.tsctlrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Resolved translations directory.
    pub translations_dir: PathBuf,

    /// Source strings allowed to stay identical (from config `ignoreTexts`).
    pub ignore_texts: HashSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    catalogs: Vec<Catalog>,

    /// Catalog files that could not be read or parsed.
    parse_errors: Vec<ParseErrorIssue>,

    translations: OnceCell<Translations>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Translations directory doesn't exist
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        if let Some(ref source_language) = common_args.source_language {
            config.source_language = source_language.clone();
        }

        if let Some(ref translations_root) = common_args.translations_root {
            config.translations_root = translations_root.to_string_lossy().to_string();
        }

        Self::with_config(config, root_dir, verbose)
    }

    /// Create a context for a project directory with no CLI overrides.
    pub fn from_path(path: impl AsRef<Path>, verbose: bool) -> Result<Self> {
        Self::new(&CommonArgs {
            path: Some(path.as_ref().to_path_buf()),
            translations_root: None,
            source_language: None,
            verbose,
        })
    }

    fn with_config(config: Config, root_dir: PathBuf, verbose: bool) -> Result<Self> {
        let translations_dir = resolve_dir(&root_dir, &config.translations_root);

        let scan = scan_catalog_files(&translations_dir, &config.ignores, verbose)?;

        if scan.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let parse_errors = scan
            .warnings
            .into_iter()
            .map(|warning| {
                if verbose {
                    eprintln!(
                        "{} {} - {}",
                        "warning:".bold().yellow(),
                        warning.file_path,
                        warning.error
                    );
                }
                ParseErrorIssue {
                    file_path: warning.file_path,
                    error: warning.error,
                }
            })
            .collect();

        if verbose {
            eprintln!(
                "Loaded {} catalog(s) from {}",
                scan.catalogs.len(),
                translations_dir.display()
            );
        }

        let ignore_texts = config.ignore_texts.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir,
            translations_dir,
            ignore_texts,
            verbose,
            catalogs: scan.catalogs,
            parse_errors,
            translations: OnceCell::new(),
        })
    }

    /// Parsed catalogs, sorted by file path.
    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parse_errors
    }

    /// Lookup tables for every loaded locale (lazy initialization).
    pub fn translations(&self) -> &Translations {
        self.translations
            .get_or_init(|| Translations::from_catalogs(&self.catalogs))
    }

    /// Normalized source language of the catalogs.
    pub fn source_language(&self) -> String {
        normalize_language(&self.config.source_language)
    }

    /// Total number of messages over all catalogs.
    pub fn entry_count(&self) -> usize {
        self.catalogs.iter().map(Catalog::len).sum()
    }
}

/// Resolve a configured directory relative to the project root.
///
/// When the root is the current directory the configured path is kept as-is
/// (e.g. "./translations") so reported paths stay short.
fn resolve_dir(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
