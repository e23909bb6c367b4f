// file: src/models/passage.rs
// description: paragraph-sized retrieval unit derived from a document

use serde::{Deserialize, Serialize};

/// A paragraph-length fragment of a document, the unit of semantic
/// retrieval. Carries the source filename of the document it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub content: String,
    pub source: String,
}

impl Passage {
    pub fn new(content: String, source: String) -> Self {
        Self { content, source }
    }
}
