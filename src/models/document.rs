// file: src/models/document.rs
// description: in-memory document model produced by the loader
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// A successfully loaded document. `source` is the bare filename within the
/// queried folder; it is the identifier surfaced in answer references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub source: String,
}

impl Document {
    pub fn new(content: String, source: String) -> Self {
        Self { content, source }
    }
}
