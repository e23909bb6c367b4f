// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod counter;
pub mod embedding;
pub mod error;
pub mod intent;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod protocol;
pub mod retrieval;
pub mod synthesis;
pub mod utils;

pub use config::{CompletionConfig, Config, EmbeddingConfig, RetrievalConfig};
pub use counter::{KeywordCounter, KeywordTally};
pub use embedding::EmbeddingClient;
pub use error::{QaError, Result};
pub use intent::{IntentMatcher, QueryIntent, RegexIntentMatcher};
pub use loader::DocumentLoader;
pub use models::{Document, Passage, QaResult};
pub use pipeline::QaPipeline;
pub use retrieval::{PassageRanker, PassageSplitter};
pub use synthesis::{AnswerSynthesizer, ChatMessage, CompletionClient};
pub use utils::Validator;
