//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Strings made only of punctuation, digits and placeholders need no
/// translation, so identical source and translation is expected for them.
///
/// # Examples
///
/// ```
/// use tsctl::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("-- Trigger: %1"));
/// assert!(contains_alphabetic("Índice"));
/// assert!(!contains_alphabetic("%1 / %2"));
/// assert!(!contains_alphabetic("--"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Pluralize an English noun for summary lines ("1 file", "2 files").
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
