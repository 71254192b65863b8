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

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::DeskError;

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Tool definition advertised through tools/list
#[derive(Debug, Clone, Serialize)]
pub struct McpTool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Tool execution failure with the operation it came from
#[derive(Debug, Clone)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    pub operation: String,
    pub details: Option<Value>,
}

impl McpError {
    fn new(code: i32, message: impl Into<String>, operation: &str) -> Self {
        Self {
            code,
            message: message.into(),
            operation: operation.to_string(),
            details: None,
        }
    }

    pub fn invalid_params(message: impl Into<String>, operation: &str) -> Self {
        Self::new(INVALID_PARAMS, message, operation)
    }

    pub fn internal_error(message: impl Into<String>, operation: &str) -> Self {
        Self::new(INTERNAL_ERROR, message, operation)
    }

    pub fn method_not_found(message: impl Into<String>, operation: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, message, operation)
    }

    /// Map a desk rejection onto the JSON-RPC error space
    pub fn from_desk(error: DeskError, operation: &str) -> Self {
        let code = if error.is_client_error() {
            INVALID_PARAMS
        } else {
            INTERNAL_ERROR
        };
        Self {
            code,
            message: error.to_string(),
            operation: operation.to_string(),
            details: Some(error.to_body()),
        }
    }

    pub fn into_jsonrpc(self) -> JsonRpcError {
        let mut data = json!({ "operation": self.operation });
        if let Some(details) = self.details {
            data["details"] = details;
        }
        JsonRpcError {
            code: self.code,
            message: self.message,
            data: Some(data),
        }
    }
}
