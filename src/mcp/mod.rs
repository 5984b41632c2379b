// src/mcp/mod.rs
// MCP Server implementation

pub mod tools;

use crate::es::args::{GetFileInfoRequest, SearchRequest};
use crate::es::EsClient;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use std::sync::Arc;

/// MCP server state. The invoker is immutable and shared; each in-flight
/// tool call owns its own child process.
#[derive(Clone)]
pub struct EverythingServer {
    pub es: Arc<EsClient>,
    tool_router: ToolRouter<Self>,
}

impl EverythingServer {
    pub fn new(es: Arc<EsClient>) -> Self {
        Self {
            es,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl EverythingServer {
    #[tool(
        description = "Search for files and folders using Everything search engine. Supports powerful search syntax including wildcards, operators, and filters."
    )]
    async fn search(
        &self,
        Parameters(req): Parameters<SearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tools::search(self.es.as_ref(), req).await)
    }

    #[tool(
        description = "Get detailed information about a specific file including size, dates, and attributes"
    )]
    async fn get_file_info(
        &self,
        Parameters(req): Parameters<GetFileInfoRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tools::get_file_info(self.es.as_ref(), req).await)
    }
}

#[tool_handler]
impl ServerHandler for EverythingServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "everything-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Exposes the Everything file search engine (es.exe). Use `search` for \
                 filename/path queries with Everything syntax and `get_file_info` for \
                 size, dates, and attributes of a single file."
                    .to_string(),
            ),
        }
    }
}
