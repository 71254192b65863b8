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

use std::sync::Arc;
use tracing::debug;

use super::corpus::{KnowledgeBase, KnowledgeEntry};
use super::types::{MatchKind, QueryResult};
use crate::constants::FALLBACK_CATEGORY;

/// Maps a free-text question to one canned policy answer
///
/// Resolution runs two passes over the corpus in table order:
/// 1. direct: the lowered query contains the category key, or the key
///    contains the lowered query
/// 2. fuzzy: any keyword of the category occurs in the lowered query
///
/// The first hit wins. With no hit the fallback category is returned.
#[derive(Debug, Clone)]
pub struct AnswerResolver {
    knowledge_base: Arc<KnowledgeBase>,
}

impl AnswerResolver {
    pub fn new(knowledge_base: Arc<KnowledgeBase>) -> Self {
        Self { knowledge_base }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Resolve a query; callers must reject blank queries beforehand
    pub fn resolve(&self, query: &str) -> QueryResult {
        let lowered = query.to_lowercase();

        if let Some(entry) = self.direct_match(&lowered) {
            debug!(category = %entry.category, "Direct knowledge base match");
            return Self::matched(query, entry, MatchKind::Direct, None);
        }

        if let Some((entry, keyword)) = self.fuzzy_match(&lowered) {
            debug!(category = %entry.category, keyword, "Fuzzy knowledge base match");
            return Self::matched(query, entry, MatchKind::Fuzzy, Some(keyword));
        }

        debug!("No knowledge base match, using fallback");
        QueryResult {
            query: query.to_string(),
            category: FALLBACK_CATEGORY.to_string(),
            answer: self.knowledge_base.fallback_answer().to_string(),
            match_kind: MatchKind::Fallback,
            matched_keyword: None,
        }
    }

    fn direct_match(&self, lowered: &str) -> Option<&KnowledgeEntry> {
        self.knowledge_base.entries().iter().find(|entry| {
            lowered.contains(entry.category.as_str()) || entry.category.contains(lowered)
        })
    }

    fn fuzzy_match(&self, lowered: &str) -> Option<(&KnowledgeEntry, &str)> {
        self.knowledge_base.entries().iter().find_map(|entry| {
            entry
                .keywords
                .iter()
                .find(|keyword| lowered.contains(keyword.as_str()))
                .map(|keyword| (entry, keyword.as_str()))
        })
    }

    fn matched(
        query: &str,
        entry: &KnowledgeEntry,
        match_kind: MatchKind,
        keyword: Option<&str>,
    ) -> QueryResult {
        QueryResult {
            query: query.to_string(),
            category: entry.category.clone(),
            answer: entry.answer.clone(),
            match_kind,
            matched_keyword: keyword.map(str::to_string),
        }
    }
}
