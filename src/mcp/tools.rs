// src/mcp/tools.rs
// Tool dispatch: validate, build the argument vector, invoke es.exe,
// and shape every outcome into a CallToolResult. Nothing escapes this layer.

use crate::error::EsError;
use crate::es::args::{self, GetFileInfoRequest, SearchRequest};
use crate::es::EsClient;
use rmcp::model::{CallToolResult, Content};

/// Placeholder body when a search succeeds with empty output.
pub const NO_RESULTS: &str = "No results found";
/// Placeholder body when a file lookup succeeds with empty output.
pub const FILE_NOT_FOUND: &str = "File not found";

/// Success response carrying es.exe stdout, or the placeholder when the
/// tool printed nothing. Callers always get a non-empty, readable body.
fn text_response(stdout: String, empty_msg: &str) -> CallToolResult {
    if stdout.is_empty() {
        CallToolResult::success(vec![Content::text(empty_msg)])
    } else {
        CallToolResult::success(vec![Content::text(stdout)])
    }
}

/// Error-flagged response. Every failure funnels through here.
fn error_response(message: impl std::fmt::Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", message))])
}

pub async fn search(es: &EsClient, req: SearchRequest) -> CallToolResult {
    if req.query.trim().is_empty() {
        return error_response(EsError::InvalidInput(
            "search query must be a non-empty string".to_string(),
        ));
    }

    let argv = args::search_args(&req);
    match es.run(&argv).await {
        Ok(out) => text_response(out.stdout, NO_RESULTS),
        Err(e) => error_response(e),
    }
}

pub async fn get_file_info(es: &EsClient, req: GetFileInfoRequest) -> CallToolResult {
    if req.filename.trim().is_empty() {
        return error_response(EsError::InvalidInput(
            "filename must be a non-empty string".to_string(),
        ));
    }

    let argv = args::file_info_args(&req);
    match es.run(&argv).await {
        Ok(out) => text_response(out.stdout, FILE_NOT_FOUND),
        Err(e) => error_response(e),
    }
}
