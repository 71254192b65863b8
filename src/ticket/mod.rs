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

//! Support ticket validation and creation

pub mod types;

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;
use tracing::info;
use uuid::Uuid;

use crate::config::TicketConfig;
use crate::constants::{TICKET_OPEN_STATUS, TICKET_SUFFIX_LEN};
use crate::error::DeskError;

pub use types::{FieldPresence, SupportTicket, TicketReceipt, TicketRequest};

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Loose shape check: something@something.something, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .get_or_init(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
        })
        .is_match(email)
}

/// Build a ticket ID of the form `<prefix>-<unix millis>-<6 upper-case chars>`
pub fn generate_ticket_id(prefix: &str, now: DateTime<Utc>) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .to_uppercase()
        .chars()
        .take(TICKET_SUFFIX_LEN)
        .collect();
    format!("{}-{}-{}", prefix, now.timestamp_millis(), suffix)
}

/// Validates ticket requests and mints tickets
///
/// Tickets are not persisted; the created ticket is handed back to the
/// caller as-is.
#[derive(Debug, Clone)]
pub struct TicketIssuer {
    id_prefix: String,
    default_priority: String,
}

impl TicketIssuer {
    pub fn new(config: &TicketConfig) -> Self {
        Self {
            id_prefix: config.id_prefix.clone(),
            default_priority: config.default_priority.clone(),
        }
    }

    pub fn issue(&self, request: TicketRequest) -> Result<SupportTicket, DeskError> {
        let presence = request.presence();
        if !presence.all() {
            return Err(DeskError::MissingFields(presence));
        }

        let TicketRequest {
            email: Some(email),
            phone_no: Some(phone_no),
            issue_description: Some(issue_description),
            package_id: Some(package_id),
        } = request
        else {
            return Err(DeskError::MissingFields(presence));
        };

        if !is_valid_email(&email) {
            return Err(DeskError::InvalidEmail);
        }

        let now = Utc::now();
        let ticket = SupportTicket {
            ticket_id: generate_ticket_id(&self.id_prefix, now),
            email,
            phone_no,
            issue_description,
            package_id,
            status: TICKET_OPEN_STATUS.to_string(),
            priority: self.default_priority.clone(),
            created_at: now,
            updated_at: now,
        };

        info!(
            ticket_id = %ticket.ticket_id,
            package_id = %ticket.package_id,
            "Support ticket created"
        );

        Ok(ticket)
    }
}
