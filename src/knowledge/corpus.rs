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

use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::HashSet;

use crate::constants::{SUPPORT_EMAIL, SUPPORT_PHONE};

/// One policy topic: its category key, the canned answer and the
/// keywords that also resolve to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    pub category: String,
    pub answer: String,
    pub keywords: Vec<String>,
}

impl KnowledgeEntry {
    pub fn new(category: impl Into<String>, answer: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            category: category.into(),
            answer: answer.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

// Table order is the resolution priority: earlier rows win ambiguous queries.
const BUILTIN_ENTRIES: &[(&str, &str, &[&str])] = &[
    (
        "damaged packages",
        "If your package arrives damaged, we offer full replacement within 48 hours. Photo evidence required for claims over $100. Contact customer service with your tracking number and photos of the damage.",
        &["damage", "broken", "destroyed", "crushed"],
    ),
    (
        "delivery times",
        "Standard delivery: 3-5 business days within India. Express delivery: 1-2 business days. Same-day delivery available in major cities (Mumbai, Delhi, Bangalore, Chennai, Hyderabad). International deliveries take 7-14 business days.",
        &["how long", "delivery time", "when will", "how fast", "speed"],
    ),
    (
        "international shipping",
        "International deliveries take 7-14 business days. Additional customs fees may apply. Prohibited items include batteries, liquids, perishables, and hazardous materials. Maximum package weight is 30kg for international shipments.",
        &["international", "overseas", "abroad", "foreign"],
    ),
    (
        "lost packages",
        "Lost packages are investigated within 24 hours. Full refund or replacement provided after 7-day investigation period. Track your claim through our customer portal or contact support with your tracking number.",
        &["lost", "missing", "can't find", "disappeared"],
    ),
    (
        "shipping costs",
        "Shipping costs depend on weight, distance, and delivery speed. Standard rates start at ₹50 for local delivery, ₹120 for interstate delivery. Express delivery adds 50% to standard rates. Same-day delivery available for ₹200 extra.",
        &["cost", "price", "charges", "fees", "rates", "how much"],
    ),
    (
        "package tracking",
        "You can track your package 24/7 using your tracking number on our website or mobile app. Real-time updates are provided at each checkpoint. SMS notifications are sent for major status changes.",
        &["track", "status", "where is", "location"],
    ),
    (
        "pickup services",
        "Free pickup available for packages over ₹500 value. Schedule pickup online or call customer service. Pickup available Monday-Saturday, 9 AM to 6 PM. Same-day pickup available in major cities.",
        &["pickup", "collection", "collect"],
    ),
    (
        "insurance claims",
        "Package insurance covers up to declared value (maximum ₹50,000). Claims must be filed within 30 days of delivery. Required documents: tracking number, photos of damage, purchase receipts, and insurance claim form.",
        &["insurance", "claim", "compensation"],
    ),
    (
        "return policy",
        "Packages can be returned to sender if undelivered after 3 attempts. Return-to-sender charges apply. Customer can also request package hold at nearest hub for 7 days before return.",
        &["return", "send back"],
    ),
    (
        "prohibited items",
        "Prohibited items include: hazardous materials, flammable liquids, batteries (certain types), perishable food items, live animals, illegal substances, and items over 50kg. Contact support for specific item queries.",
        &["prohibited", "restricted", "not allowed", "banned"],
    ),
    (
        "customer support",
        "Customer support available 24/7. Phone: 1800-COURIER (1800-268-7437). Email: support@courier.com. Live chat available on website and mobile app. Average response time: 2 hours.",
        &["support", "help", "contact", "phone", "email"],
    ),
    (
        "holiday delivery",
        "Limited delivery services during national holidays. Express and same-day services may not be available. Standard delivery may be delayed by 1-2 days during festival seasons. Check holiday schedule on our website.",
        &["holiday", "festival", "christmas", "diwali"],
    ),
];

/// Answer returned when no category matches
pub fn default_fallback_answer() -> String {
    format!(
        "I don't have specific information about that topic. Please contact our customer support at {} or email {} for detailed assistance.",
        SUPPORT_PHONE, SUPPORT_EMAIL
    )
}

/// Ordered, validated policy corpus
///
/// Built once at startup and shared read-only. Entry order is significant:
/// both lookup passes scan it front to back and stop at the first hit.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    fallback_answer: String,
}

impl KnowledgeBase {
    /// Validate and wrap a corpus table
    ///
    /// Queries are lower-cased before matching while keys are compared as
    /// authored, so categories and keywords must already be lower-case.
    pub fn new(entries: Vec<KnowledgeEntry>, fallback_answer: impl Into<String>) -> Result<Self> {
        validate_entries(&entries)?;

        let fallback_answer = fallback_answer.into();
        if fallback_answer.trim().is_empty() {
            bail!("Fallback answer must not be empty");
        }

        Ok(Self {
            entries,
            fallback_answer,
        })
    }

    /// The courier policy corpus shipped with the service
    pub fn builtin() -> Result<Self> {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|(category, answer, keywords)| KnowledgeEntry::new(*category, *answer, keywords))
            .collect();
        Self::new(entries, default_fallback_answer())
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn fallback_answer(&self) -> &str {
        &self.fallback_answer
    }

    pub fn category_count(&self) -> usize {
        self.entries.len()
    }
}

fn validate_entries(entries: &[KnowledgeEntry]) -> Result<()> {
    if entries.is_empty() {
        bail!("Knowledge base must contain at least one entry");
    }

    let mut seen = HashSet::new();
    for entry in entries {
        if entry.category.trim().is_empty() {
            bail!("Knowledge base category must not be empty");
        }
        if entry.category != entry.category.to_lowercase() {
            bail!(
                "Knowledge base category '{}' must be lower-case",
                entry.category
            );
        }
        if !seen.insert(entry.category.as_str()) {
            bail!("Duplicate knowledge base category '{}'", entry.category);
        }
        if entry.answer.trim().is_empty() {
            bail!("Category '{}' has an empty answer", entry.category);
        }
        for keyword in &entry.keywords {
            if keyword.is_empty() {
                bail!("Category '{}' has an empty keyword", entry.category);
            }
            if *keyword != keyword.to_lowercase() {
                bail!(
                    "Keyword '{}' of category '{}' must be lower-case",
                    keyword,
                    entry.category
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_corpus_is_valid() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert_eq!(kb.category_count(), 12);
        assert_eq!(kb.entries()[0].category, "damaged packages");
        assert_eq!(kb.entries()[11].category, "holiday delivery");
    }

    #[test]
    fn test_builtin_order_is_preserved() {
        let kb = KnowledgeBase::builtin().unwrap();
        let categories: Vec<&str> = kb.entries().iter().map(|e| e.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "damaged packages",
                "delivery times",
                "international shipping",
                "lost packages",
                "shipping costs",
                "package tracking",
                "pickup services",
                "insurance claims",
                "return policy",
                "prohibited items",
                "customer support",
                "holiday delivery",
            ]
        );
    }

    #[test]
    fn test_fallback_mentions_support_channels() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert!(kb.fallback_answer().contains(SUPPORT_PHONE));
        assert!(kb.fallback_answer().contains(SUPPORT_EMAIL));
    }

    #[test]
    fn test_builtin_keywords() {
        let kb = KnowledgeBase::builtin().unwrap();
        let entry = &kb.entries()[8];
        assert_eq!(entry.category, "return policy");
        assert_eq!(entry.keywords, vec!["return", "send back"]);
    }

    #[test]
    fn test_rejects_empty_corpus() {
        assert!(KnowledgeBase::new(Vec::new(), "fallback").is_err());
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let entries = vec![
            KnowledgeEntry::new("lost packages", "a", &["lost"]),
            KnowledgeEntry::new("lost packages", "b", &["missing"]),
        ];
        let err = KnowledgeBase::new(entries, "fallback").unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_rejects_upper_case_category_and_keyword() {
        let entries = vec![KnowledgeEntry::new("Lost Packages", "a", &[])];
        assert!(KnowledgeBase::new(entries, "fallback").is_err());

        let entries = vec![KnowledgeEntry::new("lost packages", "a", &["Lost"])];
        assert!(KnowledgeBase::new(entries, "fallback").is_err());
    }

    #[test]
    fn test_rejects_blank_fields() {
        let entries = vec![KnowledgeEntry::new("  ", "a", &[])];
        assert!(KnowledgeBase::new(entries, "fallback").is_err());

        let entries = vec![KnowledgeEntry::new("lost packages", "", &[])];
        assert!(KnowledgeBase::new(entries, "fallback").is_err());

        let entries = vec![KnowledgeEntry::new("lost packages", "a", &[""])];
        assert!(KnowledgeBase::new(entries, "fallback").is_err());

        let entries = vec![KnowledgeEntry::new("lost packages", "a", &[])];
        assert!(KnowledgeBase::new(entries, " ").is_err());
    }
}
