// file: src/synthesis/answerer.rs
// description: builds the QA prompt from ranked passages and formats the answer

use crate::error::Result;
use crate::models::{Passage, QaResult};
use crate::synthesis::completion::{ChatMessage, CompletionClient};
use tracing::info;

const SYSTEM_PROMPT: &str = "你是一个专业的问答助手，请基于给定的上下文信息回答问题。";

/// Turns the top-ranked passages plus the question into a completion
/// request and formats the service's answer with source references.
pub struct AnswerSynthesizer {
    client: CompletionClient,
}

impl AnswerSynthesizer {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    pub async fn synthesize(&self, question: &str, passages: &[Passage]) -> Result<QaResult> {
        info!("Synthesizing answer from {} passages", passages.len());

        let prompt = build_prompt(question, passages);
        let messages = vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)];

        let completion = self.client.complete(messages).await?;

        let references = passages
            .iter()
            .map(|p| format!("来源: {}", p.source))
            .collect();

        Ok(QaResult::answered(
            completion.trim().to_string(),
            references,
        ))
    }
}

/// Fixed prompt template embedding the newline-joined passage contents and
/// the question.
fn build_prompt(question: &str, passages: &[Passage]) -> String {
    let context = passages
        .iter()
        .map(|p| p.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    format!("基于以下内容回答问题：\n\n{context}\n\n问题：{question}\n\n回答：")
}
