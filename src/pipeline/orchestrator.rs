// file: src/pipeline/orchestrator.rs
// description: coordinates loading, intent branching, ranking, and synthesis
// reference: single linear QA sequence per invocation

use crate::config::Config;
use crate::counter::KeywordCounter;
use crate::embedding::EmbeddingClient;
use crate::error::Result;
use crate::intent::{IntentMatcher, QueryIntent, RegexIntentMatcher};
use crate::loader::DocumentLoader;
use crate::models::QaResult;
use crate::protocol;
use crate::retrieval::{PassageRanker, PassageSplitter};
use crate::synthesis::{AnswerSynthesizer, CompletionClient};
use crate::utils::Validator;
use std::path::Path;
use tracing::{error, info};

/// One QA request end to end: Load → (branch: Count | Split → Rank →
/// Synthesize) → result. All collaborators are owned handles constructed
/// once per process.
pub struct QaPipeline {
    loader: DocumentLoader,
    matcher: Box<dyn IntentMatcher>,
    splitter: PassageSplitter,
    counter: KeywordCounter,
    ranker: PassageRanker,
    synthesizer: AnswerSynthesizer,
}

impl QaPipeline {
    pub fn new(config: &Config) -> Self {
        let embeddings = EmbeddingClient::new(&config.embedding, config.api_key.clone());
        let completions =
            CompletionClient::new(config.completion.clone(), config.api_key.clone());

        Self {
            loader: DocumentLoader::new(),
            matcher: Box::new(RegexIntentMatcher::new()),
            splitter: PassageSplitter::new(config.retrieval.min_passage_chars),
            counter: KeywordCounter::new(),
            ranker: PassageRanker::new(embeddings, config.retrieval.top_k),
            synthesizer: AnswerSynthesizer::new(completions),
        }
    }

    /// Replace the intent matcher (the default is the regex heuristic).
    pub fn with_matcher(mut self, matcher: Box<dyn IntentMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Answer one question against one folder. Stage failures are converted
    /// to the `error` variant of `QaResult` here; this never panics and
    /// never propagates an error past the boundary.
    pub async fn answer_question(&self, folder: &Path, question: &str) -> QaResult {
        match self.run(folder, question).await {
            Ok(result) => result,
            Err(e) => {
                error!("Question answering failed: {e}");
                protocol::log(&format!("处理问题时出错: {e}"));
                QaResult::failed(e.to_string())
            }
        }
    }

    async fn run(&self, folder: &Path, question: &str) -> Result<QaResult> {
        Validator::validate_question_not_empty(question)?;

        let documents = self.loader.load_folder(folder)?;
        if documents.is_empty() {
            info!("No readable documents in {}", folder.display());
            return Ok(QaResult::no_documents());
        }

        match self.matcher.classify(question) {
            QueryIntent::KeywordCount { keyword } => {
                info!("Keyword-count intent: '{}'", keyword);
                let tally = self.counter.count(&documents, &keyword)?;
                Ok(QaResult::answered(
                    KeywordCounter::format_answer(&keyword, tally.total),
                    tally.matching_sources(),
                ))
            }
            QueryIntent::Semantic => {
                let passages = self.splitter.split(&documents);
                let relevant = self.ranker.find_relevant(question, passages).await?;
                if relevant.is_empty() {
                    info!("No passage cleared the length threshold");
                    return Ok(QaResult::no_relevant_content());
                }
                self.synthesizer.synthesize(question, &relevant).await
            }
        }
    }
}
