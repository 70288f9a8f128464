//! Helper functions for MCP server operations.

use std::{collections::HashSet, path::Path};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::core::{CheckContext, EntryContext};

use super::types::{Pagination, RuleStats};

pub const DEFAULT_PAGE_LIMIT: usize = 50;
pub const MAX_PAGE_LIMIT: usize = 100;

/// Load the project at `path` without verbose output.
pub fn load_context(path: &str) -> Result<CheckContext, McpError> {
    CheckContext::from_path(Path::new(path), false)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

/// Serialize `value` as the pretty-printed text content of a tool result.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Apply `offset` / `limit` (defaulted and capped) to `items`.
pub fn paginate<T>(items: Vec<T>, offset: Option<u32>, limit: Option<u32>) -> (Vec<T>, Pagination) {
    let limit = limit
        .map(|v| v as usize)
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .min(MAX_PAGE_LIMIT);
    let offset = offset.map(|v| v as usize).unwrap_or(0);
    let total = items.len();

    let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < total;

    (
        page,
        Pagination {
            offset,
            limit,
            has_more,
        },
    )
}

/// Issue count and number of distinct catalog files.
pub fn rule_stats<'a>(contexts: impl IntoIterator<Item = &'a EntryContext>) -> RuleStats {
    let mut files: HashSet<&str> = HashSet::new();
    let mut total_count = 0;
    for ctx in contexts {
        files.insert(ctx.file_path());
        total_count += 1;
    }
    RuleStats {
        total_count,
        file_count: files.len(),
    }
}
