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
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::ANSWER_SOURCE;
use crate::error::DeskError;
use crate::knowledge::{AnswerResolver, KnowledgeBase, QueryResult};
use crate::ticket::{TicketIssuer, TicketReceipt, TicketRequest};
use crate::tracking::{self, TrackingStatus};

/// Knowledge-base query payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KnowledgeQueryRequest {
    pub query: Option<String>,
}

/// Knowledge-base response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeAnswer {
    pub query: String,
    pub relevant_docs: Vec<String>,
    pub category: String,
    pub source: String,
}

impl From<QueryResult> for KnowledgeAnswer {
    fn from(result: QueryResult) -> Self {
        Self {
            query: result.query,
            relevant_docs: vec![result.answer],
            category: result.category,
            source: ANSWER_SOURCE.to_string(),
        }
    }
}

/// Tracking request payload used by tool transports
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    pub package_id: Option<String>,
}

/// Request boundary shared by every transport
///
/// Parses raw payloads, rejects incomplete requests and shapes responses.
/// Holds only read-only state, so one instance is shared across all
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct CourierDesk {
    resolver: AnswerResolver,
    tickets: TicketIssuer,
}

impl CourierDesk {
    pub fn new(knowledge_base: Arc<KnowledgeBase>, tickets: TicketIssuer) -> Self {
        Self {
            resolver: AnswerResolver::new(knowledge_base),
            tickets,
        }
    }

    /// Build the desk with the shipped corpus
    pub fn from_config(config: &Config) -> Result<Self> {
        let knowledge_base = KnowledgeBase::builtin()?;
        info!(
            categories = knowledge_base.category_count(),
            "Knowledge base loaded"
        );
        Ok(Self::new(
            Arc::new(knowledge_base),
            TicketIssuer::new(&config.tickets),
        ))
    }

    pub fn resolver(&self) -> &AnswerResolver {
        &self.resolver
    }

    /// Answer a customer question
    pub fn ask(&self, query: &str) -> Result<KnowledgeAnswer, DeskError> {
        if query.trim().is_empty() {
            return Err(DeskError::MissingQuery);
        }

        let result = self.resolver.resolve(query);
        if result.is_fallback() {
            info!("Knowledge base query unmatched, answering with fallback");
        } else {
            info!(
                category = %result.category,
                match_kind = %result.match_kind,
                "Knowledge base query resolved"
            );
        }
        Ok(result.into())
    }

    pub fn query_knowledge(
        &self,
        request: KnowledgeQueryRequest,
    ) -> Result<KnowledgeAnswer, DeskError> {
        let query = request.query.ok_or(DeskError::MissingQuery)?;
        self.ask(&query)
    }

    /// Raw-body variant; an empty body counts as an empty object
    pub fn query_knowledge_body(&self, body: &[u8]) -> Result<KnowledgeAnswer, DeskError> {
        let request = if is_blank(body) {
            KnowledgeQueryRequest::default()
        } else {
            parse_body(body)?
        };
        self.query_knowledge(request)
    }

    pub fn open_ticket(&self, request: TicketRequest) -> Result<TicketReceipt, DeskError> {
        let ticket = self.tickets.issue(request)?;
        Ok(TicketReceipt {
            message: "Support ticket created successfully".to_string(),
            ticket,
        })
    }

    /// Raw-body variant; an empty body is rejected outright, a
    /// whitespace-only one fails to parse
    pub fn create_ticket_body(&self, body: &[u8]) -> Result<TicketReceipt, DeskError> {
        if body.is_empty() {
            return Err(DeskError::MissingBody);
        }
        self.open_ticket(parse_body(body)?)
    }

    pub fn track_package(&self, package_id: &str) -> Result<TrackingStatus, DeskError> {
        if package_id.trim().is_empty() {
            return Err(DeskError::MissingPackageId);
        }

        let status = tracking::lookup(package_id)
            .ok_or_else(|| DeskError::UnknownPackage(package_id.trim().to_string()))?;
        debug!(package_id = %status.id, status = %status.status, "Package tracked");
        Ok(status)
    }

    pub fn track(&self, request: TrackRequest) -> Result<TrackingStatus, DeskError> {
        let package_id = request.package_id.ok_or(DeskError::MissingPackageId)?;
        self.track_package(&package_id)
    }
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Deserialize a raw JSON body into a request type
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, DeskError> {
    serde_json::from_slice(body).map_err(|e| DeskError::MalformedPayload(e.to_string()))
}

/// Deserialize already-parsed JSON arguments into a request type
pub fn parse_arguments<T: DeserializeOwned>(arguments: &Value) -> Result<T, DeskError> {
    if arguments.is_null() {
        return serde_json::from_value(Value::Object(Default::default()))
            .map_err(|e| DeskError::MalformedPayload(e.to_string()));
    }
    serde_json::from_value(arguments.clone())
        .map_err(|e| DeskError::MalformedPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn desk() -> CourierDesk {
        CourierDesk::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_query_response_shape() {
        let answer = desk()
            .query_knowledge_body(br#"{"query": "What are your delivery times?"}"#)
            .unwrap();

        assert_eq!(answer.query, "What are your delivery times?");
        assert_eq!(answer.category, "delivery times");
        assert_eq!(answer.source, "company_policies");
        assert_eq!(answer.relevant_docs.len(), 1);
        assert!(answer.relevant_docs[0].starts_with("Standard delivery"));
    }

    #[test]
    fn test_empty_query_rejected() {
        let desk = desk();
        assert_eq!(desk.ask(""), Err(DeskError::MissingQuery));
        assert_eq!(desk.ask("   "), Err(DeskError::MissingQuery));
        assert_eq!(
            desk.query_knowledge_body(br#"{"query": ""}"#),
            Err(DeskError::MissingQuery)
        );
    }

    #[test]
    fn test_missing_query_rejected() {
        let desk = desk();
        assert_eq!(desk.query_knowledge_body(b""), Err(DeskError::MissingQuery));
        assert_eq!(desk.query_knowledge_body(b"{}"), Err(DeskError::MissingQuery));
        assert_eq!(
            desk.query_knowledge_body(br#"{"query": null}"#),
            Err(DeskError::MissingQuery)
        );
    }

    #[test]
    fn test_malformed_query_payload() {
        let desk = desk();
        assert!(matches!(
            desk.query_knowledge_body(b"{not json"),
            Err(DeskError::MalformedPayload(_))
        ));
        assert!(matches!(
            desk.query_knowledge_body(br#"{"query": 42}"#),
            Err(DeskError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_fallback_is_a_normal_answer() {
        let answer = desk().ask("xyz unrelated gibberish").unwrap();
        assert_eq!(answer.category, "general");
        assert!(answer.relevant_docs[0].contains("1800-268-7437"));
    }

    #[test]
    fn test_create_ticket_body() {
        let receipt = desk()
            .create_ticket_body(
                br#"{"email":"ravi@example.com","phoneNo":"9876543210","issueDescription":"Late","packageId":"12345"}"#,
            )
            .unwrap();
        assert_eq!(receipt.message, "Support ticket created successfully");
        assert_eq!(receipt.ticket.phone_no, "9876543210");
    }

    #[test]
    fn test_create_ticket_numeric_fields() {
        let receipt = desk()
            .create_ticket_body(
                br#"{"email":"ravi@example.com","phoneNo":9876543210,"issueDescription":"Late","packageId":12345}"#,
            )
            .unwrap();
        assert_eq!(receipt.ticket.phone_no, "9876543210");
        assert_eq!(receipt.ticket.package_id, "12345");
    }

    #[test]
    fn test_create_ticket_rejections() {
        let desk = desk();
        assert_eq!(desk.create_ticket_body(b""), Err(DeskError::MissingBody));
        assert!(matches!(
            desk.create_ticket_body(b"   "),
            Err(DeskError::MalformedPayload(_))
        ));
        assert!(matches!(
            desk.create_ticket_body(b"[1, 2"),
            Err(DeskError::MalformedPayload(_))
        ));
        assert!(matches!(
            desk.create_ticket_body(br#"{"email":"ravi@example.com"}"#),
            Err(DeskError::MissingFields(_))
        ));
    }

    #[test]
    fn test_track_package() {
        let desk = desk();
        assert_eq!(desk.track_package("12345").unwrap().dest, "Mumbai");
        assert_eq!(
            desk.track_package("00000"),
            Err(DeskError::UnknownPackage("00000".to_string()))
        );
        assert_eq!(desk.track_package(" "), Err(DeskError::MissingPackageId));
        assert_eq!(
            desk.track(TrackRequest::default()),
            Err(DeskError::MissingPackageId)
        );
    }

    #[test]
    fn test_parse_arguments() {
        let request: KnowledgeQueryRequest =
            parse_arguments(&json!({"query": "lost"})).unwrap();
        assert_eq!(request.query.as_deref(), Some("lost"));

        let request: KnowledgeQueryRequest = parse_arguments(&Value::Null).unwrap();
        assert!(request.query.is_none());

        let result: Result<TicketRequest, _> = parse_arguments(&json!({"email": 7}));
        assert!(matches!(result, Err(DeskError::MalformedPayload(_))));
    }
}
