use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use colored::Colorize;
use glob::Pattern;
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::core::data::{
    Catalog, CatalogLocation, Origin, TranslationEntry, TranslationKey, TranslationStatus,
    language_from_file_name, normalize_language,
};

/// A warning from scanning catalog files.
#[derive(Debug, Clone)]
pub struct CatalogScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanCatalogsResult {
    /// Parsed catalogs, sorted by file path.
    pub catalogs: Vec<Catalog>,
    /// Files that could not be read or parsed.
    pub warnings: Vec<CatalogScanWarning>,
    /// Paths that could not be accessed while walking the directory.
    pub skipped_count: usize,
}

pub fn parse_ts_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
    let file_path = path.to_string_lossy().to_string();
    parse_ts_str(&content, &file_path)
        .with_context(|| format!("Failed to parse catalog file: {:?}", path))
}

/// Parse the content of a `.ts` file.
///
/// `file_path` is recorded on the catalog and on every entry position; it is
/// also used to derive the language when the `<TS>` root has no `language`
/// attribute.
pub fn parse_ts_str(content: &str, file_path: &str) -> Result<Catalog> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let lines = LineIndex::new(content);
    let mut reader = Reader::from_str(content);

    let mut catalog: Option<Catalog> = None;
    let mut context_name: Option<String> = None;
    let mut message: Option<PendingMessage> = None;
    let mut text = FieldText::default();

    loop {
        let offset = lines.tag_start(reader.buffer_position() as usize);
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                let (line, col) = lines.location(reader.error_position() as usize);
                bail!("XML error at {}:{}: {}", line, col, e);
            }
        };

        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"TS" => catalog = Some(open_catalog(&e, file_path)?),
                b"context" => context_name = Some(String::new()),
                b"name" if message.is_none() && context_name.is_some() => {
                    text.start(Field::ContextName);
                }
                b"message" => {
                    let context = context_name.clone().ok_or_else(|| {
                        anyhow!(
                            "<message> outside of <context> at line {}",
                            lines.location(offset).0
                        )
                    })?;
                    let numerus = attr(&e, b"numerus")?.as_deref() == Some("yes");
                    message = Some(PendingMessage::new(context, numerus, offset));
                }
                b"location" => {
                    if let Some(m) = message.as_mut() {
                        m.origins.push(read_origin(&e)?);
                    }
                }
                b"translation" => {
                    if let Some(m) = message.as_mut() {
                        m.status = read_status(&e)?;
                        m.translation_offset = Some(offset);
                        if !m.numerus {
                            text.start(Field::Translation);
                        }
                    }
                }
                b"numerusform" => {
                    if message.as_ref().is_some_and(|m| m.numerus) {
                        text.start(Field::NumerusForm);
                    }
                }
                b"lengthvariant" => text.start_variant(),
                b"byte" => text.push(read_byte(&e)?),
                name => {
                    if message.is_some()
                        && let Some(f) = Field::for_message_child(name)
                    {
                        text.start(f);
                    }
                }
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"TS" => catalog = Some(open_catalog(&e, file_path)?),
                b"location" => {
                    if let Some(m) = message.as_mut() {
                        m.origins.push(read_origin(&e)?);
                    }
                }
                b"translation" => {
                    if let Some(m) = message.as_mut() {
                        m.status = read_status(&e)?;
                        m.translation_offset = Some(offset);
                    }
                }
                b"source" => {
                    if let Some(m) = message.as_mut() {
                        m.source = Some(String::new());
                    }
                }
                b"numerusform" => {
                    if let Some(m) = message.as_mut().filter(|m| m.numerus) {
                        m.numerus_forms.push(String::new());
                    }
                }
                b"lengthvariant" => {
                    text.start_variant();
                    text.end_variant();
                }
                b"byte" => text.push(read_byte(&e)?),
                _ => {}
            },
            Event::Text(t) => text.push(&t.unescape()?),
            Event::CData(c) => text.push(std::str::from_utf8(&c)?),
            Event::End(e) => match e.name().as_ref() {
                b"context" => context_name = None,
                b"message" => {
                    if let Some(m) = message.take() {
                        let catalog = catalog
                            .as_mut()
                            .ok_or_else(|| anyhow!("<message> outside of <TS> root element"))?;
                        catalog.push(m.finish(file_path, &lines)?);
                    }
                }
                b"lengthvariant" => text.end_variant(),
                name => {
                    if let Some((current, value)) = text.finish(name) {
                        match (current, message.as_mut()) {
                            (Field::ContextName, _) => context_name = Some(value),
                            (Field::Source, Some(m)) => m.source = Some(value),
                            (Field::Comment, Some(m)) => m.comment = Some(value),
                            (Field::ExtraComment, Some(m)) => m.extra_comment = Some(value),
                            (Field::TranslatorComment, Some(m)) => {
                                m.translator_comment = Some(value)
                            }
                            (Field::Translation, Some(m)) => m.translation = value,
                            (Field::NumerusForm, Some(m)) => m.numerus_forms.push(value),
                            (_, None) => {}
                        }
                    }
                }
            },
            Event::Eof => break,
            _ => {}
        }
    }

    catalog.ok_or_else(|| anyhow!("Not a Qt Linguist catalog: missing <TS> root element"))
}

/// Element whose text content is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ContextName,
    Source,
    Comment,
    ExtraComment,
    TranslatorComment,
    Translation,
    NumerusForm,
}

impl Field {
    fn for_message_child(name: &[u8]) -> Option<Self> {
        match name {
            b"source" => Some(Self::Source),
            b"comment" => Some(Self::Comment),
            b"extracomment" => Some(Self::ExtraComment),
            b"translatorcomment" => Some(Self::TranslatorComment),
            _ => None,
        }
    }

    fn tag(self) -> &'static [u8] {
        match self {
            Self::ContextName => b"name",
            Self::Source => b"source",
            Self::Comment => b"comment",
            Self::ExtraComment => b"extracomment",
            Self::TranslatorComment => b"translatorcomment",
            Self::Translation => b"translation",
            Self::NumerusForm => b"numerusform",
        }
    }
}

/// Text content of the element being read.
///
/// Child elements are transparent except `<lengthvariant>`: of a
/// `variants="yes"` translation only the first variant is kept, the longest
/// form the translator wrote.
#[derive(Debug, Default)]
struct FieldText {
    field: Option<Field>,
    text: String,
    variants_seen: usize,
    in_variant: bool,
}

impl FieldText {
    fn start(&mut self, field: Field) {
        self.field = Some(field);
        self.text.clear();
        self.variants_seen = 0;
        self.in_variant = false;
    }

    fn is_collecting(&self) -> bool {
        self.field.is_some()
            && (self.variants_seen == 0 || (self.in_variant && self.variants_seen == 1))
    }

    fn push(&mut self, s: impl AsRef<str>) {
        if self.is_collecting() {
            self.text.push_str(s.as_ref());
        }
    }

    fn start_variant(&mut self) {
        if self.field.is_none() {
            return;
        }
        self.variants_seen += 1;
        if self.variants_seen == 1 {
            // Drop the indentation before the first variant
            self.text.clear();
        }
        self.in_variant = true;
    }

    fn end_variant(&mut self) {
        self.in_variant = false;
    }

    /// Collected text, if `name` closes the current field.
    fn finish(&mut self, name: &[u8]) -> Option<(Field, String)> {
        let field = self.field.filter(|f| f.tag() == name)?;
        self.field = None;
        Some((field, std::mem::take(&mut self.text)))
    }
}

/// A `<message>` being read.
struct PendingMessage {
    context: String,
    numerus: bool,
    source: Option<String>,
    translation: String,
    numerus_forms: Vec<String>,
    status: TranslationStatus,
    comment: Option<String>,
    extra_comment: Option<String>,
    translator_comment: Option<String>,
    origins: Vec<Origin>,
    message_offset: usize,
    translation_offset: Option<usize>,
}

impl PendingMessage {
    fn new(context: String, numerus: bool, message_offset: usize) -> Self {
        Self {
            context,
            numerus,
            source: None,
            translation: String::new(),
            numerus_forms: Vec::new(),
            status: TranslationStatus::default(),
            comment: None,
            extra_comment: None,
            translator_comment: None,
            origins: Vec::new(),
            message_offset,
            translation_offset: None,
        }
    }

    fn finish(self, file_path: &str, lines: &LineIndex<'_>) -> Result<TranslationEntry> {
        let source = self.source.ok_or_else(|| {
            anyhow!(
                "<message> at line {} has no <source>",
                lines.location(self.message_offset).0
            )
        })?;

        let (line, col) = lines.location(self.translation_offset.unwrap_or(self.message_offset));
        let translation = if self.numerus {
            self.numerus_forms.first().cloned().unwrap_or_default()
        } else {
            self.translation
        };

        Ok(TranslationEntry {
            key: TranslationKey::new(self.context, source),
            translation,
            numerus_forms: self.numerus_forms,
            status: self.status,
            comment: self.comment,
            extra_comment: self.extra_comment,
            translator_comment: self.translator_comment,
            origins: self.origins,
            position: CatalogLocation::new(file_path, line, col),
            source_line: lines.line_text(line).to_string(),
        })
    }
}

fn open_catalog(e: &BytesStart<'_>, file_path: &str) -> Result<Catalog> {
    let language = attr(e, b"language")?
        .filter(|l| !l.trim().is_empty())
        .or_else(|| language_from_file_name(file_path))
        .or_else(|| {
            Path::new(file_path)
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
        })
        .unwrap_or_default();

    let mut catalog = Catalog::new(file_path, language);
    catalog.source_language = attr(e, b"sourcelanguage")?.map(|l| normalize_language(&l));
    catalog.version = attr(e, b"version")?;
    Ok(catalog)
}

fn read_status(e: &BytesStart<'_>) -> Result<TranslationStatus> {
    let value = attr(e, b"type")?;
    TranslationStatus::from_type_attr(value.as_deref())
        .ok_or_else(|| anyhow!("Unknown translation type \"{}\"", value.unwrap_or_default()))
}

/// Decode `<byte value="x9"/>`, used for characters XML 1.0 cannot carry.
///
/// The value is hexadecimal with an `x` prefix, decimal otherwise.
fn read_byte(e: &BytesStart<'_>) -> Result<String> {
    let value = attr(e, b"value")?.unwrap_or_default();
    let code = match value.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    };
    code.and_then(char::from_u32)
        .map(String::from)
        .ok_or_else(|| anyhow!("Invalid <byte> value \"{}\"", value))
}

fn read_origin(e: &BytesStart<'_>) -> Result<Origin> {
    let filename = attr(e, b"filename")?.unwrap_or_default();
    let line = attr(e, b"line")?.and_then(|l| l.parse().ok());
    Ok(Origin::new(filename, line))
}

fn attr(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    match e.try_get_attribute(name)? {
        Some(a) => Ok(Some(a.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

/// Byte offset to line/column mapping for one file.
struct LineIndex<'a> {
    content: &'a str,
    /// Byte offsets where each line starts. Line 1 starts at offset 0.
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(content: &'a str) -> Self {
        let mut starts = vec![0];
        for (i, c) in content.char_indices() {
            if c == '\n' {
                starts.push(i + 1);
            }
        }
        Self { content, starts }
    }

    /// 1-based line and column (in characters) of a byte offset.
    fn location(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = match self.starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        };
        let start = self.starts[line - 1];
        let col = self
            .content
            .get(start..offset)
            .map(|s| s.chars().count())
            .unwrap_or(0)
            + 1;
        (line, col)
    }

    fn line_text(&self, line: usize) -> &'a str {
        let start = self.starts[line - 1];
        let end = self
            .starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(self.content.len());
        self.content[start..end].trim_end_matches('\r')
    }

    fn tag_start(&self, offset: usize) -> usize {
        markup_start(self.content, offset)
    }
}

/// Offset of the `<` that opens the markup at (or just before) `offset`.
///
/// The reader position may already be past the opening `<` when the next
/// event is read, depending on how the preceding text was consumed.
pub(crate) fn markup_start(content: &str, offset: usize) -> usize {
    let offset = offset.min(content.len());
    if content.as_bytes().get(offset) == Some(&b'<') {
        return offset;
    }
    match content.get(..offset).and_then(|s| s.rfind('<')) {
        Some(pos) if !content[pos..offset].contains('>') => pos,
        _ => offset,
    }
}

/// Find and parse every `.ts` file under `dir`.
///
/// Files matching one of `ignores` (glob patterns, matched against the path
/// relative to `dir` and against the full path) are skipped. Files that fail
/// to parse are reported as warnings; they do not abort the scan.
pub fn scan_catalog_files(
    dir: impl AsRef<Path>,
    ignores: &[String],
    verbose: bool,
) -> Result<ScanCatalogsResult> {
    let dir = dir.as_ref();

    if !dir.exists() {
        bail!(
            "Translations directory '{}' does not exist.\n\
             Hint: Check your .tsctlrc.json 'translationsRoot' setting.",
            dir.display()
        );
    }

    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let patterns: Vec<Pattern> = ignores
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let mut paths: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("ts")
        {
            continue;
        }

        let relative = path.strip_prefix(dir).unwrap_or(path);
        if patterns
            .iter()
            .any(|p| p.matches_path(relative) || p.matches_path(path))
        {
            if verbose {
                eprintln!("Ignoring {}", path.display());
            }
            continue;
        }

        paths.push(path.to_path_buf());
    }

    let parsed: Vec<(PathBuf, Result<Catalog>)> = paths
        .into_par_iter()
        .map(|path| {
            let catalog = parse_ts_file(&path);
            (path, catalog)
        })
        .collect();

    let mut result = ScanCatalogsResult {
        skipped_count,
        ..Default::default()
    };

    for (path, catalog) in parsed {
        match catalog {
            Ok(catalog) => result.catalogs.push(catalog),
            Err(e) => result.warnings.push(CatalogScanWarning {
                file_path: path.to_string_lossy().to_string(),
                error: format!("{:#}", e),
            }),
        }
    }

    Ok(result)
}
