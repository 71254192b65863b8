use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Incoming support ticket request; every field is required
///
/// Fields accept JSON strings or numbers, so `"packageId": 12345` and
/// `"packageId": "12345"` are the same request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub phone_no: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub issue_description: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub package_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    }))
}

impl TicketRequest {
    /// Which fields carry a non-blank value
    pub fn presence(&self) -> FieldPresence {
        fn present(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|v| !v.trim().is_empty())
        }

        FieldPresence {
            email: present(&self.email),
            phone_no: present(&self.phone_no),
            issue_description: present(&self.issue_description),
            package_id: present(&self.package_id),
        }
    }
}

/// Per-field presence report returned with a missing-fields rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPresence {
    pub email: bool,
    pub phone_no: bool,
    pub issue_description: bool,
    pub package_id: bool,
}

impl FieldPresence {
    pub fn all(&self) -> bool {
        self.email && self.phone_no && self.issue_description && self.package_id
    }
}

/// A created support ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub ticket_id: String,
    pub email: String,
    pub phone_no: String,
    pub issue_description: String,
    pub package_id: String,
    pub status: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response body for a successful ticket creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketReceipt {
    pub message: String,
    pub ticket: SupportTicket,
}
