use std::fmt;

/// Position inside a catalog file.
///
/// Used for diagnostics: points at the `<translation>` element of a message
/// (or the `<message>` element when the translation is absent).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CatalogLocation {
    /// Path to the catalog file (e.g., "./translations/SqlExport_pt_BR.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl CatalogLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// A `<location filename="..." line="..."/>` reference.
///
/// Points back at the code or form that displays the string. Kept for
/// traceability only; it has no effect on lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub filename: String,
    pub line: Option<usize>,
}

impl Origin {
    pub fn new(filename: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.filename, line),
            None => write!(f, "{}", self.filename),
        }
    }
}

/// Translation state, taken from the `type` attribute of `<translation>`.
///
/// - no attribute: `Finished`
/// - `type="unfinished"`: the translator has not confirmed the text yet
/// - `type="obsolete"` / `type="vanished"`: the source string no longer
///   exists in the code; the entry is kept only as translator memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TranslationStatus {
    #[default]
    Finished,
    Unfinished,
    Obsolete,
    Vanished,
}

impl TranslationStatus {
    /// Parse the `type` attribute value. Returns `None` for unknown values.
    pub fn from_type_attr(value: Option<&str>) -> Option<Self> {
        match value {
            None => Some(Self::Finished),
            Some("unfinished") => Some(Self::Unfinished),
            Some("obsolete") => Some(Self::Obsolete),
            Some("vanished") => Some(Self::Vanished),
            Some(_) => None,
        }
    }

    /// Whether the entry is still referenced by the code and served by lookups.
    pub fn is_live(self) -> bool {
        matches!(self, Self::Finished | Self::Unfinished)
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "finished"),
            Self::Unfinished => write!(f, "unfinished"),
            Self::Obsolete => write!(f, "obsolete"),
            Self::Vanished => write!(f, "vanished"),
        }
    }
}

/// Composite key of a translation entry: `(context, source)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TranslationKey {
    /// Context name (e.g., "SqlExport").
    pub context: String,
    /// Untranslated source text, entities decoded.
    pub source: String,
}

impl TranslationKey {
    pub fn new(context: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\"", self.context, self.source)
    }
}

/// One `<message>` of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub key: TranslationKey,
    /// Translated text. For plural messages this is the first numerus form.
    pub translation: String,
    /// `<numerusform>` texts when the message has `numerus="yes"`.
    pub numerus_forms: Vec<String>,
    pub status: TranslationStatus,
    /// Disambiguation comment (`<comment>`).
    pub comment: Option<String>,
    /// Developer note (`<extracomment>`).
    pub extra_comment: Option<String>,
    /// Translator note (`<translatorcomment>`).
    pub translator_comment: Option<String>,
    pub origins: Vec<Origin>,
    /// Where the translation sits in the catalog file.
    pub position: CatalogLocation,
    /// The catalog line at `position`, for report output.
    pub source_line: String,
}

impl TranslationEntry {
    pub fn context(&self) -> &str {
        &self.key.context
    }

    pub fn source(&self) -> &str {
        &self.key.source
    }

    pub fn is_numerus(&self) -> bool {
        !self.numerus_forms.is_empty()
    }

    /// All translated texts: every numerus form, or the single translation.
    pub fn translations(&self) -> Vec<&str> {
        if self.is_numerus() {
            self.numerus_forms.iter().map(String::as_str).collect()
        } else {
            vec![self.translation.as_str()]
        }
    }

    /// True when no translated text is present at all.
    pub fn has_empty_translation(&self) -> bool {
        self.translations().iter().all(|t| t.is_empty())
    }

    /// Snapshot of this entry for issue reports.
    pub fn to_context(&self) -> EntryContext {
        EntryContext {
            location: self.position.clone(),
            key: self.key.clone(),
            translation: self.translation.clone(),
            source_line: self.source_line.clone(),
        }
    }
}

/// Entry information attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    pub location: CatalogLocation,
    pub key: TranslationKey,
    pub translation: String,
    /// The catalog line at `location` (shown with a caret in reports).
    pub source_line: String,
}

impl EntryContext {
    pub fn new(
        location: CatalogLocation,
        key: TranslationKey,
        translation: impl Into<String>,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key,
            translation: translation.into(),
            source_line: source_line.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }

    pub fn context_name(&self) -> &str {
        &self.key.context
    }

    pub fn source(&self) -> &str {
        &self.key.source
    }
}
