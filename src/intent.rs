// file: src/intent.rs
// description: question intent classification with compiled regex patterns
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Natural-language pattern asking for a keyword's occurrence count.
    static ref KEYWORD_COUNT: Regex =
        Regex::new(r"(\w+)这一关键词出现的次数是多少").expect("KEYWORD_COUNT regex is valid");
}

/// What kind of question the pipeline is answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIntent {
    /// Deterministic occurrence counting of a named keyword.
    KeywordCount { keyword: String },
    /// Everything else: semantic retrieval plus answer synthesis.
    Semantic,
}

/// Classifies a question into a `QueryIntent`. Pluggable so alternative
/// matchers can replace the regex heuristic without touching the pipeline.
pub trait IntentMatcher: Send + Sync {
    fn classify(&self, question: &str) -> QueryIntent;
}

pub struct RegexIntentMatcher;

impl RegexIntentMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RegexIntentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentMatcher for RegexIntentMatcher {
    fn classify(&self, question: &str) -> QueryIntent {
        match KEYWORD_COUNT.captures(question) {
            Some(captures) => QueryIntent::KeywordCount {
                keyword: captures[1].to_string(),
            },
            None => QueryIntent::Semantic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_count_question() {
        let matcher = RegexIntentMatcher::new();

        assert_eq!(
            matcher.classify("猫这一关键词出现的次数是多少"),
            QueryIntent::KeywordCount {
                keyword: "猫".to_string()
            }
        );
    }

    #[test]
    fn test_ascii_keyword() {
        let matcher = RegexIntentMatcher::new();

        assert_eq!(
            matcher.classify("Rust这一关键词出现的次数是多少"),
            QueryIntent::KeywordCount {
                keyword: "Rust".to_string()
            }
        );
    }

    #[test]
    fn test_semantic_question() {
        let matcher = RegexIntentMatcher::new();

        assert_eq!(matcher.classify("猫是什么动物？"), QueryIntent::Semantic);
        assert_eq!(
            matcher.classify("What do cats hunt?"),
            QueryIntent::Semantic
        );
    }

    #[test]
    fn test_trailing_punctuation_is_tolerated() {
        let matcher = RegexIntentMatcher::new();

        assert_eq!(
            matcher.classify("mammals这一关键词出现的次数是多少？"),
            QueryIntent::KeywordCount {
                keyword: "mammals".to_string()
            }
        );
    }
}
