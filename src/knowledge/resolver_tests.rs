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

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::corpus::{KnowledgeBase, KnowledgeEntry};
    use super::super::resolver::AnswerResolver;
    use super::super::types::MatchKind;
    use crate::constants::{FALLBACK_CATEGORY, SUPPORT_PHONE};

    fn resolver() -> AnswerResolver {
        AnswerResolver::new(Arc::new(KnowledgeBase::builtin().unwrap()))
    }

    #[test]
    fn test_delivery_times_question() {
        let result = resolver().resolve("What are your delivery times?");
        assert_eq!(result.category, "delivery times");
        assert_eq!(result.match_kind, MatchKind::Direct);
        assert_eq!(result.query, "What are your delivery times?");
    }

    #[test]
    fn test_damaged_package_via_keyword() {
        let result = resolver().resolve("my package got damaged");
        assert_eq!(result.category, "damaged packages");
        assert_eq!(result.match_kind, MatchKind::Fuzzy);
        assert_eq!(result.matched_keyword.as_deref(), Some("damage"));
    }

    #[test]
    fn test_gibberish_falls_back() {
        let resolver = resolver();
        let result = resolver.resolve("xyz unrelated gibberish");
        assert_eq!(result.category, FALLBACK_CATEGORY);
        assert_eq!(result.answer, resolver.knowledge_base().fallback_answer());
        assert!(result.answer.contains(SUPPORT_PHONE));
        assert!(result.is_fallback());
    }

    #[test]
    fn test_track_resolves_to_package_tracking() {
        let result = resolver().resolve("track");
        assert_eq!(result.category, "package tracking");
    }

    #[test]
    fn test_every_category_key_resolves_to_itself() {
        let resolver = resolver();
        for entry in resolver.knowledge_base().entries() {
            let result = resolver.resolve(&entry.category);
            assert_eq!(result.category, entry.category);
            assert_eq!(result.answer, entry.answer);
            assert_eq!(result.match_kind, MatchKind::Direct);

            let shouted = resolver.resolve(&entry.category.to_uppercase());
            assert_eq!(shouted.category, entry.category, "case-insensitive");
            assert_eq!(shouted.query, entry.category.to_uppercase());
        }
    }

    #[test]
    fn test_every_keyword_resolves_to_its_category() {
        let resolver = resolver();
        for entry in resolver.knowledge_base().entries() {
            for keyword in &entry.keywords {
                let query = format!("hi, {} please", keyword);
                let result = resolver.resolve(&query);
                assert_eq!(
                    result.category, entry.category,
                    "keyword '{}' should resolve to '{}'",
                    keyword, entry.category
                );
            }
        }
    }

    #[test]
    fn test_direct_match_prefers_earlier_category() {
        let resolver = resolver();

        // Both "lost packages" and "shipping costs" are contained
        let result = resolver.resolve("lost packages and shipping costs");
        assert_eq!(result.category, "lost packages");

        // Both "international shipping" and "shipping costs" are contained
        let result = resolver.resolve("International shipping costs");
        assert_eq!(result.category, "international shipping");
    }

    #[test]
    fn test_query_contained_in_key_matches_first_key() {
        let resolver = resolver();

        let result = resolver.resolve("packages");
        assert_eq!(result.category, "damaged packages");
        assert_eq!(result.match_kind, MatchKind::Direct);

        let result = resolver.resolve("shipping");
        assert_eq!(result.category, "international shipping");
    }

    #[test]
    fn test_fuzzy_match_prefers_earlier_category() {
        // "lost" (lost packages) and "cost" / "how much" (shipping costs)
        let result = resolver().resolve("how much does a lost item cost");
        assert_eq!(result.category, "lost packages");
        assert_eq!(result.match_kind, MatchKind::Fuzzy);
    }

    #[test]
    fn test_direct_pass_runs_before_fuzzy_pass() {
        // "damage" would match fuzzily, but the direct key wins first
        let result = resolver().resolve("Insurance claims for damage");
        assert_eq!(result.category, "insurance claims");
        assert_eq!(result.match_kind, MatchKind::Direct);
    }

    #[test]
    fn test_multi_word_keyword() {
        let result = resolver().resolve("Where is my parcel right now?");
        assert_eq!(result.category, "package tracking");
        assert_eq!(result.matched_keyword.as_deref(), Some("where is"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let resolver = resolver();
        for query in ["my package got damaged", "xyz", "Diwali schedule", "packages"] {
            assert_eq!(resolver.resolve(query), resolver.resolve(query));
        }
    }

    #[test]
    fn test_whitespace_is_not_stripped() {
        // Padding keeps "lost packages" contained in the query
        let result = resolver().resolve("  lost packages  ");
        assert_eq!(result.category, "lost packages");
        assert_eq!(result.query, "  lost packages  ");
    }

    #[test]
    fn test_custom_corpus_order_decides() {
        let entries = vec![
            KnowledgeEntry::new("parcel", "first", &["box"]),
            KnowledgeEntry::new("parcel locker", "second", &["box"]),
        ];
        let kb = KnowledgeBase::new(entries, "nothing").unwrap();
        let resolver = AnswerResolver::new(Arc::new(kb));

        assert_eq!(resolver.resolve("parcel locker").answer, "first");
        assert_eq!(resolver.resolve("a big box").answer, "first");
        assert_eq!(resolver.resolve("locker").answer, "second");
        assert_eq!(resolver.resolve("envelope").answer, "nothing");
    }
}
