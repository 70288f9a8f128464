use std::{collections::HashMap, path::Path};

use super::entry::{TranslationEntry, TranslationKey};

/// A parsed catalog file.
///
/// Entries are kept in document order. Duplicate keys are kept as well (so the
/// duplicate rule can report them); the key index points at the first
/// occurrence, which is the one lookups use.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Path of the catalog file.
    pub file_path: String,
    /// Normalized language code (e.g., "pt_BR").
    pub language: String,
    /// `sourcelanguage` attribute of the `<TS>` root, if present.
    pub source_language: Option<String>,
    /// `version` attribute of the `<TS>` root, if present.
    pub version: Option<String>,
    entries: Vec<TranslationEntry>,
    index: HashMap<TranslationKey, usize>,
}

impl Catalog {
    pub fn new(file_path: impl Into<String>, language: impl AsRef<str>) -> Self {
        Self {
            file_path: file_path.into(),
            language: normalize_language(language.as_ref()),
            ..Default::default()
        }
    }

    /// Append an entry. The first entry for a key wins in the index.
    pub fn push(&mut self, entry: TranslationEntry) {
        let position = self.entries.len();
        self.index.entry(entry.key.clone()).or_insert(position);
        self.entries.push(entry);
    }

    pub fn get(&self, context: &str, source: &str) -> Option<&TranslationEntry> {
        self.index
            .get(&TranslationKey::new(context, source))
            .map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Context names in document order, without repeats.
    pub fn contexts(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.context()) {
                seen.push(entry.context());
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize a language code to the underscore form.
///
/// ```
/// use tsctl::core::normalize_language;
///
/// assert_eq!(normalize_language("pt-BR"), "pt_BR");
/// assert_eq!(normalize_language("pt_BR"), "pt_BR");
/// assert_eq!(normalize_language(" de "), "de");
/// ```
pub fn normalize_language(code: &str) -> String {
    code.trim().replace('-', "_")
}

/// ISO 639-1 language codes, sorted.
const LANGUAGE_CODES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh",
    "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", "da",
    "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj",
    "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb",
    "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi",
    "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti",
    "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo",
    "wa", "wo", "xh", "yi", "yo", "za", "zh", "zu",
];

/// Derive the language from a catalog file name.
///
/// Follows the `<name>_<lang>[_<COUNTRY>].ts` naming convention, where
/// `<lang>` must be a known ISO 639-1 code and `<COUNTRY>` two uppercase
/// letters:
/// - "SqlExport_pt_BR.ts" -> Some("pt_BR")
/// - "app_de.ts" -> Some("de")
/// - "my_app.ts", "strings.ts" -> None
pub fn language_from_file_name(path: impl AsRef<Path>) -> Option<String> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    let segments: Vec<&str> = stem.split('_').collect();

    let is_lang = |s: &str| LANGUAGE_CODES.binary_search(&s).is_ok();
    let is_country = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_uppercase());

    match segments.as_slice() {
        [.., lang, country] if is_lang(*lang) && is_country(*country) => {
            Some(format!("{}_{}", lang, country))
        }
        [.., lang] if is_lang(*lang) => Some(lang.to_string()),
        _ => None,
    }
}
