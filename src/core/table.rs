//! Immutable lookup tables built from parsed catalogs.
//!
//! `StringTable` holds one locale; `Translations` holds several, keyed by
//! normalized language code. Both are read-only after construction and can be
//! shared between threads without locking.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::data::{Catalog, normalize_language};

/// Localized strings of one locale, keyed by context then source text.
///
/// Each key resolves through its first occurrence in a catalog. It is stored
/// only when servable: live status (finished or unfinished) and a non-empty
/// translation. Everything else falls back to the source, even when a later
/// duplicate holds a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    language: String,
    contexts: HashMap<String, HashMap<String, String>>,
}

impl StringTable {
    pub fn new(language: impl AsRef<str>) -> Self {
        Self {
            language: normalize_language(language.as_ref()),
            contexts: HashMap::new(),
        }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut table = Self::new(&catalog.language);
        table.merge(catalog);
        table
    }

    /// Add the servable entries of `catalog`.
    ///
    /// Keys already in the table are kept, so the first catalog wins. Inside
    /// a catalog only the first occurrence of a key is considered.
    pub fn merge(&mut self, catalog: &Catalog) {
        let mut seen = HashSet::new();
        for entry in catalog.entries() {
            if !seen.insert(&entry.key)
                || !entry.status.is_live()
                || entry.translation.is_empty()
            {
                continue;
            }
            self.contexts
                .entry(entry.context().to_string())
                .or_default()
                .entry(entry.source().to_string())
                .or_insert_with(|| entry.translation.clone());
        }
    }

    /// Translation of `source` in `context`, without fallback.
    pub fn get(&self, context: &str, source: &str) -> Option<&str> {
        self.contexts
            .get(context)?
            .get(source)
            .map(String::as_str)
    }

    /// Translation of `source` in `context`, or `source` itself when none is
    /// available.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.get(context, source).unwrap_or(source)
    }

    pub fn contains(&self, context: &str, source: &str) -> bool {
        self.get(context, source).is_some()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of servable strings over all contexts.
    pub fn len(&self) -> usize {
        self.contexts.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// String tables for several locales.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    tables: BTreeMap<String, StringTable>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from catalogs; catalogs sharing a language are merged in order.
    pub fn from_catalogs<'a>(catalogs: impl IntoIterator<Item = &'a Catalog>) -> Self {
        let mut translations = Self::new();
        for catalog in catalogs {
            translations.insert(catalog);
        }
        translations
    }

    pub fn insert(&mut self, catalog: &Catalog) {
        self.tables
            .entry(catalog.language.clone())
            .or_insert_with(|| StringTable::new(&catalog.language))
            .merge(catalog);
    }

    /// Loaded language codes, sorted.
    pub fn locales(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Table for `locale`.
    ///
    /// Resolution order: exact match (after normalization), then the bare
    /// language (`pt_BR` -> `pt`), then the first regional variant of that
    /// language (`pt` -> `pt_BR`).
    pub fn table(&self, locale: &str) -> Option<&StringTable> {
        let locale = normalize_language(locale);
        if let Some(table) = self.tables.get(&locale) {
            return Some(table);
        }

        let language = locale.split('_').next().unwrap_or(&locale);
        if let Some(table) = self.tables.get(language) {
            return Some(table);
        }

        let prefix = format!("{}_", language);
        self.tables
            .iter()
            .find(|(code, _)| code.starts_with(&prefix))
            .map(|(_, table)| table)
    }

    /// Translation for `locale`, falling back to `source`.
    pub fn translate<'a>(&'a self, locale: &str, context: &str, source: &'a str) -> &'a str {
        match self.table(locale) {
            Some(table) => table.translate(context, source),
            None => source,
        }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
