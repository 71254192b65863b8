use colored::Colorize;

use crate::knowledge::corpus::KnowledgeBase;
use crate::knowledge::types::{MatchKind, QueryResult};

pub fn format_query_result(result: &QueryResult) -> String {
    let mut output = String::new();

    output.push_str(&"━".repeat(60));
    output.push('\n');

    // Category
    let category = match result.match_kind {
        MatchKind::Fallback => result.category.yellow().bold().to_string(),
        _ => result.category.blue().bold().to_string(),
    };
    output.push_str(&category);
    output.push('\n');

    // How it matched
    let how = match &result.matched_keyword {
        Some(keyword) => format!("{} match on \"{}\"", result.match_kind, keyword),
        None => format!("{} match", result.match_kind),
    };
    output.push_str(&how.bright_black().to_string());
    output.push('\n');

    output.push_str(&result.answer);
    output.push('\n');

    output
}

pub fn format_categories(knowledge_base: &KnowledgeBase) -> String {
    let mut output = String::new();

    output.push_str(
        &format!("{:<4} {:<26} {}\n", "#", "Category", "Keywords")
            .bold()
            .to_string(),
    );
    output.push_str(&"─".repeat(80));
    output.push('\n');

    for (index, entry) in knowledge_base.entries().iter().enumerate() {
        output.push_str(&format!(
            "{:<4} {:<26} {}\n",
            index + 1,
            entry.category,
            entry.keywords.join(", ")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::AnswerResolver;
    use std::sync::Arc;

    #[test]
    fn test_format_fuzzy_result_mentions_keyword() {
        colored::control::set_override(false);
        let resolver = AnswerResolver::new(Arc::new(KnowledgeBase::builtin().unwrap()));
        let output = format_query_result(&resolver.resolve("my parcel is broken"));

        assert!(output.contains("damaged packages"));
        assert!(output.contains("fuzzy match on \"broken\""));
    }

    #[test]
    fn test_format_categories_lists_all_entries() {
        colored::control::set_override(false);
        let kb = KnowledgeBase::builtin().unwrap();
        let output = format_categories(&kb);

        for entry in kb.entries() {
            assert!(output.contains(&entry.category));
        }
        assert!(output.contains("pickup, collection, collect"));
    }
}
