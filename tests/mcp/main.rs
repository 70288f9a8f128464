use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a translations/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join(".git"))?;
        fs::create_dir_all(project_root.join("translations"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with catalog files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_catalogs(vec![
    ///     ("SqlExport_pt_BR.ts", &catalog("pt_BR", &[("-- Table: %1", "-- Tabela: %1", None)])),
    /// ])?;
    /// ```
    pub fn with_catalogs(catalogs: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (name, content) in catalogs {
            fixture.write_catalog(name, content)?;
        }
        Ok(fixture)
    }

    /// Write a catalog file to translations/<name>
    pub fn write_catalog(&self, name: &str, content: &str) -> Result<()> {
        let path = self.project_root.join("translations").join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write catalog file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .tsctlrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".tsctlrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Build a one-context catalog.
///
/// Each message is `(source, translation, type attribute)`.
pub fn catalog(language: &str, messages: &[(&str, &str, Option<&str>)]) -> String {
    let mut out = format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"{}\">\n<context>\n    <name>SqlExport</name>\n",
        language
    );
    for (source, translation, kind) in messages {
        let type_attr = kind
            .map(|k| format!(" type=\"{}\"", k))
            .unwrap_or_default();
        out.push_str(&format!(
            "    <message>\n        <source>{}</source>\n        <translation{}>{}</translation>\n    </message>\n",
            source, type_attr, translation
        ));
    }
    out.push_str("</context>\n</TS>\n");
    out
}

/// Create a fixture with one pt_BR catalog showing every kind of issue
pub fn fixture_with_issues() -> Result<McpTestFixture> {
    McpTestFixture::with_catalogs(vec![(
        "SqlExport_pt_BR.ts",
        &catalog(
            "pt_BR",
            &[
                ("-- Table: %1", "-- Tabela: %1", None),
                ("-- Index: %1", "-- Índice:", None),
                ("-- Trigger: %1", "-- Trigger: %1", None),
                ("-- View: %1", "", Some("unfinished")),
                ("-- View: %1", "-- Vista: %1", None),
                ("-- Old comment", "-- Comentário antigo", Some("obsolete")),
            ],
        ),
    )])
}

/// Create a fixture with two locales
pub fn fixture_multi_locale() -> Result<McpTestFixture> {
    McpTestFixture::with_catalogs(vec![
        (
            "SqlExport_pt_BR.ts",
            &catalog("pt_BR", &[("-- Table: %1", "-- Tabela: %1", None)]),
        ),
        (
            "SqlExport_de.ts",
            &catalog(
                "de",
                &[
                    ("-- Table: %1", "-- Tabelle: %1", None),
                    ("-- View: %1", "-- View: %1", None),
                ],
            ),
        ),
    ])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
