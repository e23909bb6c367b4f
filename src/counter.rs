// file: src/counter.rs
// description: whole-word keyword occurrence counting across loaded documents
// reference: https://docs.rs/regex

use crate::error::{QaError, Result};
use crate::models::Document;
use regex::RegexBuilder;

/// Per-invocation tally of keyword occurrences.
#[derive(Debug, Clone)]
pub struct KeywordTally {
    pub total: usize,
    /// (source, count) per document, in load order.
    pub per_document: Vec<(String, usize)>,
}

impl KeywordTally {
    /// Sources of the documents that actually contained the keyword.
    pub fn matching_sources(&self) -> Vec<String> {
        self.per_document
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(source, _)| source.clone())
            .collect()
    }
}

/// Deterministic short-circuit for keyword-count questions. Bypasses the
/// embeddings API and the completion service entirely.
pub struct KeywordCounter;

impl KeywordCounter {
    pub fn new() -> Self {
        Self
    }

    /// Count case-insensitive, whole-word occurrences of `keyword` in every
    /// document. The keyword is escaped, so regex metacharacters in the
    /// question cannot change the match semantics.
    pub fn count(&self, documents: &[Document], keyword: &str) -> Result<KeywordTally> {
        let pattern = format!(r"\b{}\b", regex::escape(keyword));
        let matcher = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| QaError::Validation(format!("Invalid keyword pattern: {e}")))?;

        let per_document: Vec<(String, usize)> = documents
            .iter()
            .map(|doc| (doc.source.clone(), matcher.find_iter(&doc.content).count()))
            .collect();

        let total = per_document.iter().map(|(_, count)| count).sum();

        Ok(KeywordTally {
            total,
            per_document,
        })
    }

    /// Fixed answer template for the counting path.
    pub fn format_answer(keyword: &str, total: usize) -> String {
        format!("关键词 '{keyword}' 在所有文档中共出现了 {total} 次。")
    }
}

impl Default for KeywordCounter {
    fn default() -> Self {
        Self::new()
    }
}
