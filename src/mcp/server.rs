use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use std::path::Path;

use crate::{
    cli::commands::lookup::{lookup_in, resolve_locale},
    config::load_config,
    core::{TranslationStatus, bundled::sql_export_pt_br},
    rules::{
        duplicate::check_duplicate_issues, obsolete::check_obsolete_issues,
        placeholder::check_placeholder_issues, unfinished::check_unfinished_issues,
        untranslated::check_untranslated_issues,
    },
};

use super::helpers::{json_result, load_context, paginate, rule_stats};
use super::types::{
    CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, GetCatalogsParams, GetConfigParams,
    LookupParams, LookupResult, ParseErrorItem, PlaceholderItem, PlaceholderScanResult,
    ScanOverviewParams, ScanOverviewResult, ScanPlaceholdersParams, ScanUntranslatedParams,
    UntranslatedItem, UntranslatedScanResult,
};

#[derive(Clone)]
pub struct TsctlMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TsctlMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TsctlMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tsctl configuration
    #[tool(description = "Get the current tsctl configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List catalog files with their language and message counts
    #[tool(
        description = "List Qt Linguist catalog files with language, contexts and message counts by status."
    )]
    pub async fn get_catalogs(
        &self,
        params: Parameters<GetCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let catalogs = ctx
            .catalogs()
            .iter()
            .map(|catalog| {
                let count = |status: TranslationStatus| {
                    catalog
                        .entries()
                        .iter()
                        .filter(|e| e.status == status)
                        .count()
                };
                let finished_count = count(TranslationStatus::Finished);
                let unfinished_count = count(TranslationStatus::Unfinished);
                CatalogInfo {
                    file_path: catalog.file_path.clone(),
                    language: catalog.language.clone(),
                    contexts: catalog.contexts().into_iter().map(String::from).collect(),
                    message_count: catalog.len(),
                    finished_count,
                    unfinished_count,
                    stale_count: catalog.len() - finished_count - unfinished_count,
                }
            })
            .collect();

        let parse_errors = ctx
            .parse_errors()
            .iter()
            .map(|e| ParseErrorItem {
                file_path: e.file_path.clone(),
                error: e.error.clone(),
            })
            .collect();

        json_result(&CatalogsResult {
            translations_dir: ctx.translations_dir.to_string_lossy().to_string(),
            source_language: ctx.source_language(),
            catalogs,
            parse_errors,
        })
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get statistics of all catalog issues (placeholder, duplicate, unfinished, untranslated, obsolete) without detailed items. Use this first to understand the overall state."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let placeholder = check_placeholder_issues(&ctx);
        let duplicate = check_duplicate_issues(&ctx);
        let unfinished = check_unfinished_issues(&ctx);
        let untranslated = check_untranslated_issues(&ctx);
        let obsolete = check_obsolete_issues(&ctx);

        json_result(&ScanOverviewResult {
            catalog_count: ctx.catalogs().len(),
            message_count: ctx.entry_count(),
            placeholder: rule_stats(placeholder.iter().map(|i| &i.context)),
            duplicate: rule_stats(duplicate.iter().map(|i| &i.context)),
            unfinished: rule_stats(unfinished.iter().map(|i| &i.context)),
            untranslated: rule_stats(untranslated.iter().map(|i| &i.context)),
            obsolete: rule_stats(obsolete.iter().map(|i| &i.context)),
            parse_error_count: ctx.parse_errors().len(),
        })
    }

    /// Scan for translations with mismatched placeholders
    #[tool(
        description = "Scan for translations whose %1/%L1/%n placeholders differ from the source text. Returns paginated list."
    )]
    pub async fn scan_placeholders(
        &self,
        params: Parameters<ScanPlaceholdersParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let all_items: Vec<PlaceholderItem> = check_placeholder_issues(&ctx)
            .into_iter()
            .map(|issue| PlaceholderItem {
                file_path: issue.context.file_path().to_string(),
                line: issue.context.line(),
                language: issue.language,
                context: issue.context.key.context,
                source: issue.context.key.source,
                translation: issue.context.translation,
                missing: issue.mismatch.missing,
                unexpected: issue.mismatch.unexpected,
            })
            .collect();

        let total_count = all_items.len();
        let (items, pagination) = paginate(all_items, params.0.offset, params.0.limit);

        json_result(&PlaceholderScanResult {
            total_count,
            items,
            pagination,
        })
    }

    /// Scan for translations identical to their source text
    #[tool(
        description = "Scan for translations identical to their source text (likely not translated). Returns paginated list."
    )]
    pub async fn scan_untranslated(
        &self,
        params: Parameters<ScanUntranslatedParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let all_items: Vec<UntranslatedItem> = check_untranslated_issues(&ctx)
            .into_iter()
            .map(|issue| UntranslatedItem {
                file_path: issue.context.file_path().to_string(),
                line: issue.context.line(),
                language: issue.language,
                context: issue.context.key.context,
                source: issue.context.key.source,
            })
            .collect();

        let total_count = all_items.len();
        let (items, pagination) = paginate(all_items, params.0.offset, params.0.limit);

        json_result(&UntranslatedScanResult {
            total_count,
            items,
            pagination,
        })
    }

    /// Translate one source text
    #[tool(
        description = "Translate a source text of a context. Falls back to the source text when no translation exists. Optional args replace %1, %2, ..."
    )]
    pub async fn lookup(&self, params: Parameters<LookupParams>) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let args: Vec<&str> = params.args.iter().map(String::as_str).collect();

        let summary = if params.bundled {
            let table = sql_export_pt_br();
            lookup_in(
                Some(table),
                table.language(),
                &params.context,
                &params.source,
                &args,
            )
        } else {
            if params.project_root_path.is_empty() {
                return Err(McpError::invalid_params(
                    "projectRootPath is required unless bundled is true",
                    None,
                ));
            }
            let ctx = load_context(&params.project_root_path)?;
            let translations = ctx.translations();
            let locale = resolve_locale(
                translations,
                params.locale.as_deref(),
                &ctx.translations_dir,
            )
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            lookup_in(
                translations.table(&locale),
                &locale,
                &params.context,
                &params.source,
                &args,
            )
        };

        json_result(&LookupResult {
            text: summary.text,
            locale: summary.locale,
            translated: summary.translated,
        })
    }
}

#[tool_handler]
impl ServerHandler for TsctlMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tsctl MCP helps AI agents maintain Qt Linguist (.ts) translation catalogs.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_catalogs - List catalog files with language and message counts\n\
                 3. scan_overview - Get statistics of all catalog issues\n\
                 4. scan_placeholders - Get translations with mismatched %1 placeholders (paginated)\n\
                 5. scan_untranslated - Get translations identical to their source (paginated)\n\
                 6. lookup - Translate one source text, with source fallback\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix placeholder mismatches first (they break strings at runtime)\n\
                 3. Then translate the untranslated strings\n\
                 4. Use lookup to verify what the application will display"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TsctlMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
