// file: src/retrieval/splitter.rs
// description: blank-line passage splitting with a minimum-length filter

use crate::models::{Document, Passage};

/// Partitions document text into paragraph-sized candidate passages.
/// Fragments at or below the length threshold (trimmed character count) are
/// dropped.
pub struct PassageSplitter {
    min_chars: usize,
}

impl PassageSplitter {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Flat ordered passage sequence across all documents: document order
    /// preserved, intra-document paragraph order preserved.
    pub fn split(&self, documents: &[Document]) -> Vec<Passage> {
        let mut passages = Vec::new();

        for doc in documents {
            for paragraph in doc.content.split("\n\n") {
                if paragraph.trim().chars().count() > self.min_chars {
                    passages.push(Passage::new(paragraph.to_string(), doc.source.clone()));
                }
            }
        }

        passages
    }
}
