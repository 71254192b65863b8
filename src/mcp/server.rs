// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use serde_json::json;
use std::sync::Arc;
use tokio::io::{stdin, stdout, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::desk::CourierDesk;
use crate::mcp::tools::DeskToolProvider;
use crate::mcp::types::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpError, METHOD_NOT_FOUND, PARSE_ERROR,
};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP server exposing the courier desk tools over stdio
pub struct McpServer {
    tools: DeskToolProvider,
}

impl McpServer {
    pub fn new(desk: Arc<CourierDesk>) -> Self {
        Self {
            tools: DeskToolProvider::new(desk),
        }
    }

    /// Run the MCP server on stdio
    pub async fn run(&self) -> Result<()> {
        let stdin = stdin();
        let mut stdout = stdout();
        let mut reader = BufReader::new(stdin);
        let mut line = String::new();

        info!("MCP server started on stdio");

        loop {
            line.clear();
            let bytes_read = reader.read_line(&mut line).await?;

            if bytes_read == 0 {
                debug!("EOF received, shutting down");
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            debug!("Received request: {}", trimmed);

            let Some(response) = self.handle_line(trimmed).await else {
                continue;
            };

            let response_json = serde_json::to_string(&response)?;
            stdout.write_all(response_json.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }

        Ok(())
    }

    /// Handle one raw JSON-RPC line; notifications produce no response
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "Unparseable JSON-RPC request");
                return Some(JsonRpcResponse::failure(
                    None,
                    JsonRpcError {
                        code: PARSE_ERROR,
                        message: format!("Parse error: {}", e),
                        data: None,
                    },
                ));
            }
        };

        if request.method.starts_with("notifications/") {
            debug!(method = %request.method, "Notification received");
            return None;
        }

        Some(self.handle_request(request).await)
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": {
                        "tools": {}
                    },
                    "serverInfo": {
                        "name": "courierdesk",
                        "version": env!("CARGO_PKG_VERSION")
                    }
                }),
            ),

            "ping" => JsonRpcResponse::success(id, json!({})),

            "tools/list" => {
                let tools = DeskToolProvider::get_tool_definitions();
                JsonRpcResponse::success(id, json!({ "tools": tools }))
            }

            "tools/call" => {
                let params = request.params.unwrap_or(json!({}));
                let tool_name = params["name"].as_str().unwrap_or("");
                let arguments = &params["arguments"];

                let result = match tool_name {
                    "knowledge_query" => self.tools.execute_knowledge_query(arguments),
                    "create_ticket" => self.tools.execute_create_ticket(arguments),
                    "track_package" => self.tools.execute_track_package(arguments),
                    _ => Err(McpError::method_not_found(
                        format!("Unknown tool: {}", tool_name),
                        "tools/call",
                    )),
                };

                match result {
                    Ok(content) => JsonRpcResponse::success(
                        id,
                        json!({
                            "content": [{
                                "type": "text",
                                "text": content
                            }]
                        }),
                    ),
                    Err(e) => {
                        warn!(operation = %e.operation, error = %e.message, "Tool call failed");
                        JsonRpcResponse::failure(id, e.into_jsonrpc())
                    }
                }
            }

            _ => JsonRpcResponse::failure(
                id,
                JsonRpcError {
                    code: METHOD_NOT_FOUND,
                    message: format!("Method not found: {}", request.method),
                    data: None,
                },
            ),
        }
    }
}
