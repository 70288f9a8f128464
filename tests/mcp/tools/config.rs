use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tsctl::mcp::{
    TsctlMcpServer,
    types::{GetCatalogsParams, GetConfigParams},
};

use crate::{McpTestFixture, extract_tool_result_json, fixture_multi_locale, fixture_with_issues};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TsctlMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["translationsRoot"], "./translations");
    assert_eq!(json_result["config"]["sourceLanguage"], "en");
    assert!(json_result["config"]["ignores"].is_array());
    assert!(json_result["config"]["ignoreTexts"].is_array());
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "translationsRoot": "./i18n",
            "sourceLanguage": "en_US",
            "ignoreTexts": ["SQLiteStudio"]
        }))
        .unwrap();
    let server = TsctlMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["translationsRoot"], "./i18n");
    assert_eq!(json_result["config"]["sourceLanguage"], "en_US");
    assert_eq!(json_result["config"]["ignoreTexts"][0], "SQLiteStudio");
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::write(fixture.root_path().join(".tsctlrc.json"), "{ not json").unwrap();
    let server = TsctlMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}

// ============================================================================
// get_catalogs tests
// ============================================================================

#[tokio::test]
async fn test_get_catalogs_counts_by_status() {
    let fixture = fixture_with_issues().unwrap();
    let server = TsctlMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["sourceLanguage"], "en");
    assert!(
        json_result["translationsDir"]
            .as_str()
            .unwrap()
            .ends_with("translations")
    );

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 1);

    let catalog = &catalogs[0];
    assert_eq!(catalog["language"], "pt_BR");
    assert_eq!(catalog["contexts"], json!(["SqlExport"]));
    assert_eq!(catalog["messageCount"], 6);
    assert_eq!(catalog["finishedCount"], 4);
    assert_eq!(catalog["unfinishedCount"], 1);
    assert_eq!(catalog["staleCount"], 1);
    assert!(json_result["parseErrors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_catalogs_multi_locale_and_parse_error() {
    let fixture = fixture_multi_locale().unwrap();
    fixture
        .write_catalog("SqlExport_fr.ts", "<TS><context></TS>")
        .unwrap();
    let server = TsctlMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let languages: Vec<&str> = json_result["catalogs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["language"].as_str().unwrap())
        .collect();
    assert_eq!(languages, vec!["de", "pt_BR"]);

    let parse_errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(parse_errors.len(), 1);
    assert!(
        parse_errors[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("SqlExport_fr.ts")
    );
}

#[tokio::test]
async fn test_get_catalogs_missing_translations_dir() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "translationsRoot": "./missing" }))
        .unwrap();
    let server = TsctlMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_catalogs(params).await.unwrap_err();
    assert!(err.message.contains("does not exist"));
}
