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

use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::desk::{parse_arguments, CourierDesk, KnowledgeQueryRequest, TrackRequest};
use crate::mcp::types::{McpError, McpTool};
use crate::ticket::TicketRequest;

/// Courier desk tools provider
#[derive(Clone)]
pub struct DeskToolProvider {
    desk: Arc<CourierDesk>,
}

impl DeskToolProvider {
    pub fn new(desk: Arc<CourierDesk>) -> Self {
        Self { desk }
    }

    /// Get all tool definitions
    pub fn get_tool_definitions() -> Vec<McpTool> {
        vec![
            McpTool {
                name: "knowledge_query".to_string(),
                description: "Answer a customer question from the courier company's policy knowledge base. Covers damaged and lost packages, delivery times, international shipping, shipping costs, tracking, pickups, insurance claims, returns, prohibited items, support contacts and holiday delivery. Returns the matched category and the canned policy answer, or a 'general' category with support contact details when nothing matches.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "The customer's question in plain language (e.g., 'my package got damaged', 'how long does delivery take')",
                            "minLength": 1
                        }
                    },
                    "required": ["query"],
                    "additionalProperties": false
                }),
            },
            McpTool {
                name: "create_ticket".to_string(),
                description: "Open a customer support ticket for a package issue. All fields are required and the email must be well-formed. Returns the created ticket with its generated ID.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "email": { "type": "string", "description": "Customer email address" },
                        "phoneNo": { "type": ["string", "number"], "description": "Customer phone number" },
                        "issueDescription": { "type": "string", "description": "What went wrong" },
                        "packageId": { "type": ["string", "number"], "description": "Tracking number of the affected package" }
                    },
                    "required": ["email", "phoneNo", "issueDescription", "packageId"],
                    "additionalProperties": false
                }),
            },
            McpTool {
                name: "track_package".to_string(),
                description: "Look up the current status and last reached location of a package by its tracking number.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "packageId": { "type": "string", "description": "Tracking number" }
                    },
                    "required": ["packageId"],
                    "additionalProperties": false
                }),
            },
        ]
    }

    pub fn execute_knowledge_query(&self, arguments: &Value) -> Result<String, McpError> {
        const OPERATION: &str = "knowledge_query";
        let request: KnowledgeQueryRequest =
            parse_arguments(arguments).map_err(|e| McpError::from_desk(e, OPERATION))?;
        let answer = self
            .desk
            .query_knowledge(request)
            .map_err(|e| McpError::from_desk(e, OPERATION))?;
        render(&answer, OPERATION)
    }

    pub fn execute_create_ticket(&self, arguments: &Value) -> Result<String, McpError> {
        const OPERATION: &str = "create_ticket";
        let request: TicketRequest =
            parse_arguments(arguments).map_err(|e| McpError::from_desk(e, OPERATION))?;
        let receipt = self
            .desk
            .open_ticket(request)
            .map_err(|e| McpError::from_desk(e, OPERATION))?;
        render(&receipt, OPERATION)
    }

    pub fn execute_track_package(&self, arguments: &Value) -> Result<String, McpError> {
        const OPERATION: &str = "track_package";
        let request: TrackRequest =
            parse_arguments(arguments).map_err(|e| McpError::from_desk(e, OPERATION))?;
        let status = self
            .desk
            .track(request)
            .map_err(|e| McpError::from_desk(e, OPERATION))?;
        render(&status, OPERATION)
    }
}

fn render<T: Serialize>(value: &T, operation: &str) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("Failed to serialize result: {}", e), operation)
    })
}
