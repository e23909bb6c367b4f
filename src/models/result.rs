// file: src/models/result.rs
// description: final result object emitted on stdout
// reference: newline-delimited JSON output protocol

use serde::{Deserialize, Serialize};

pub const NO_DOCUMENTS_ANSWER: &str =
    "未找到任何可读取的文档。请确保文件夹中包含 .txt, .md 或 .pdf 文件。";
pub const NO_RELEVANT_CONTENT_ANSWER: &str = "未找到相关内容。";

/// The sole externally visible output of one invocation. Serialized
/// untagged so the JSON carries either `answer` + `references` or
/// `error` + `references`, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QaResult {
    Answered {
        answer: String,
        references: Vec<String>,
    },
    Failed {
        error: String,
        references: Vec<String>,
    },
}

impl QaResult {
    pub fn answered(answer: String, references: Vec<String>) -> Self {
        Self::Answered { answer, references }
    }

    pub fn failed(error: String) -> Self {
        Self::Failed {
            error,
            references: Vec::new(),
        }
    }

    /// Fixed advisory result for a folder with no readable documents.
    pub fn no_documents() -> Self {
        Self::Answered {
            answer: NO_DOCUMENTS_ANSWER.to_string(),
            references: Vec::new(),
        }
    }

    /// Fixed advisory result when no passage clears the length threshold.
    pub fn no_relevant_content() -> Self {
        Self::Answered {
            answer: NO_RELEVANT_CONTENT_ANSWER.to_string(),
            references: Vec::new(),
        }
    }

    pub fn references(&self) -> &[String] {
        match self {
            Self::Answered { references, .. } | Self::Failed { references, .. } => references,
        }
    }
}
