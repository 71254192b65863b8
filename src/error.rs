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

use serde_json::{json, Value};
use thiserror::Error;

use crate::constants::TICKET_REQUIRED_FIELDS;
use crate::ticket::FieldPresence;

/// Request rejections raised by the desk before or around the handlers
///
/// The answer resolver itself never fails; everything here is about the
/// payload a caller handed in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeskError {
    #[error("Missing query parameter")]
    MissingQuery,

    #[error("Missing request body")]
    MissingBody,

    /// Body could not be parsed into the expected request shape
    #[error("Invalid JSON in request body")]
    MalformedPayload(String),

    #[error("Missing required fields")]
    MissingFields(FieldPresence),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Missing package ID")]
    MissingPackageId,

    #[error("Package '{0}' not found")]
    UnknownPackage(String),

    /// Anything unexpected; the message is kept for diagnostics
    #[error("Internal Server Error")]
    Internal(String),
}

impl DeskError {
    /// HTTP status this rejection maps to
    pub fn status_code(&self) -> u16 {
        match self {
            DeskError::UnknownPackage(_) => 404,
            DeskError::Internal(_) => 500,
            _ => 400,
        }
    }

    /// Whether the caller is at fault (as opposed to the service)
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    /// JSON error body returned to callers
    pub fn to_body(&self) -> Value {
        match self {
            DeskError::MissingFields(provided) => json!({
                "error": self.to_string(),
                "required": TICKET_REQUIRED_FIELDS,
                "provided": provided,
            }),
            DeskError::MalformedPayload(detail) | DeskError::Internal(detail) => json!({
                "error": self.to_string(),
                "message": detail,
            }),
            _ => json!({ "error": self.to_string() }),
        }
    }
}
