// file: src/synthesis/mod.rs
// description: answer synthesis via an external completion service

pub mod answerer;
pub mod completion;

pub use answerer::AnswerSynthesizer;
pub use completion::{ChatMessage, CompletionClient};
