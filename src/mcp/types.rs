use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

/// Parameters of tools that only need the project root.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectParams {
    /// Absolute path of the project root (where .tsctlrc.json lives)
    pub project_root_path: String,
}

pub type GetConfigParams = ProjectParams;
pub type GetCatalogsParams = ProjectParams;
pub type ScanOverviewParams = ProjectParams;

/// Parameters of paginated scan tools.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanParams {
    /// Absolute path of the project root (where .tsctlrc.json lives)
    pub project_root_path: String,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

pub type ScanPlaceholdersParams = ScanParams;
pub type ScanUntranslatedParams = ScanParams;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    /// Absolute path of the project root (not needed when `bundled` is true)
    #[serde(default)]
    pub project_root_path: String,
    /// Context name (e.g. "SqlExport")
    pub context: String,
    /// Untranslated source text (e.g. "-- Table: %1")
    pub source: String,
    /// Target locale; required when several locales are loaded
    pub locale: Option<String>,
    /// Values for %1, %2, ... in order
    #[serde(default)]
    pub args: Vec<String>,
    /// Use the bundled SqlExport pt_BR catalog
    #[serde(default)]
    pub bundled: bool,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translations_root: String,
    pub ignores: Vec<String>,
    pub source_language: String,
    pub ignore_texts: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            translations_root: c.translations_root,
            ignores: c.ignores,
            source_language: c.source_language,
            ignore_texts: c.ignore_texts,
        }
    }
}

// ============================================================
// Catalog Types (get_catalogs)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub translations_dir: String,
    pub source_language: String,
    pub catalogs: Vec<CatalogInfo>,
    /// Catalog files that could not be parsed
    pub parse_errors: Vec<ParseErrorItem>,
}

/// Information about a single catalog file
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub file_path: String,
    pub language: String,
    pub contexts: Vec<String>,
    pub message_count: usize,
    pub finished_count: usize,
    pub unfinished_count: usize,
    /// Obsolete and vanished messages
    pub stale_count: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Scan Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub catalog_count: usize,
    pub message_count: usize,
    pub placeholder: RuleStats,
    pub duplicate: RuleStats,
    pub unfinished: RuleStats,
    pub untranslated: RuleStats,
    pub obsolete: RuleStats,
    pub parse_error_count: usize,
}

/// Issue statistics of one rule
#[derive(Debug, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub total_count: usize,
    pub file_count: usize,
}

// ============================================================
// Placeholder Scan Types (scan_placeholders)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderScanResult {
    pub total_count: usize,
    pub items: Vec<PlaceholderItem>,
    pub pagination: Pagination,
}

/// A translation whose placeholder tokens differ from its source
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderItem {
    pub file_path: String,
    pub line: usize,
    pub language: String,
    pub context: String,
    pub source: String,
    pub translation: String,
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
}

// ============================================================
// Untranslated Scan Types (scan_untranslated)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UntranslatedScanResult {
    pub total_count: usize,
    pub items: Vec<UntranslatedItem>,
    pub pagination: Pagination,
}

/// A translation identical to its source text
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UntranslatedItem {
    pub file_path: String,
    pub line: usize,
    pub language: String,
    pub context: String,
    pub source: String,
}

// ============================================================
// Lookup Types (lookup)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub text: String,
    pub locale: String,
    /// False when the source text was returned as fallback
    pub translated: bool,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
