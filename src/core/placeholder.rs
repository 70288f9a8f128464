//! Placeholder tokens in translatable strings.
//!
//! Recognized tokens:
//! - `%1` .. `%99`: positional arguments
//! - `%L1` .. `%L99`: locale-aware positional arguments
//! - `%n` / `%Ln`: plural count
//!
//! A translation must carry the same tokens as its source: same count of
//! each token, order free. Substitution is left to the code displaying the
//! string; `substitute` is provided for tools and tests.

use std::{borrow::Cow, collections::BTreeMap, sync::LazyLock};

use regex::{Captures, Regex};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(L?)([1-9][0-9]?|n)").unwrap());

/// Placeholder tokens of `text`, in order of appearance.
///
/// ```
/// use tsctl::core::placeholder::extract_placeholders;
///
/// assert_eq!(
///     extract_placeholders("-- File generated with SQLiteStudio v%1 on %2"),
///     vec!["%1", "%2"]
/// );
/// assert!(extract_placeholders("100% done").is_empty());
/// ```
pub fn extract_placeholders(text: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// `text` with every placeholder token removed.
pub fn strip_placeholders(text: &str) -> Cow<'_, str> {
    PLACEHOLDER_REGEX.replace_all(text, "")
}

/// Difference between the tokens of a source and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceholderMismatch {
    /// Tokens present in the source but missing (or fewer) in the translation.
    pub missing: Vec<String>,
    /// Tokens present in the translation but not (or fewer) in the source.
    pub unexpected: Vec<String>,
}

impl PlaceholderMismatch {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

impl std::fmt::Display for PlaceholderMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(", ")));
        }
        write!(f, "{}", parts.join("; "))
    }
}

/// Compare the tokens of `source` and `translation`.
///
/// Returns `None` when both carry the same multiset of tokens.
pub fn compare_placeholders(source: &str, translation: &str) -> Option<PlaceholderMismatch> {
    let mut balance: BTreeMap<&str, isize> = BTreeMap::new();
    for token in extract_placeholders(source) {
        *balance.entry(token).or_default() += 1;
    }
    for token in extract_placeholders(translation) {
        *balance.entry(token).or_default() -= 1;
    }

    let mut mismatch = PlaceholderMismatch::default();
    for (token, count) in balance {
        if count > 0 {
            mismatch
                .missing
                .extend(std::iter::repeat_n(token.to_string(), count as usize));
        } else if count < 0 {
            mismatch
                .unexpected
                .extend(std::iter::repeat_n(token.to_string(), count.unsigned_abs()));
        }
    }

    if mismatch.is_empty() {
        None
    } else {
        Some(mismatch)
    }
}

/// Replace `%N` / `%LN` with `args[N - 1]`.
///
/// Tokens without a matching argument and plural tokens (`%n`) are left
/// untouched.
///
/// ```
/// use tsctl::core::placeholder::substitute;
///
/// assert_eq!(substitute("-- Tabela: %1", &["users"]), "-- Tabela: users");
/// assert_eq!(substitute("v%1 em %2", &["3.4"]), "v3.4 em %2");
/// ```
pub fn substitute(text: &str, args: &[&str]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = caps[0].to_string();
            match caps[2].parse::<usize>() {
                Ok(index) => args.get(index - 1).map(|a| a.to_string()).unwrap_or(whole),
                Err(_) => whole,
            }
        })
        .into_owned()
}
