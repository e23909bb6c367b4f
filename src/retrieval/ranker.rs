// file: src/retrieval/ranker.rs
// description: cosine-similarity ranking of passages against a question
// reference: vector similarity search over API embeddings

use crate::embedding::EmbeddingClient;
use crate::error::{QaError, Result};
use crate::models::Passage;
use std::cmp::Ordering;
use tracing::{debug, info};

/// Cosine similarity between two vectors. Zero-norm or empty vectors score
/// 0.0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Indices of the `k` highest scores, descending. The sort is stable, so
/// ties keep their original passage order.
pub fn top_k_indices(scores: &[f32], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });
    indices.truncate(k);
    indices
}

/// Embeds the question and all candidate passages, then selects the top-K
/// passages by cosine similarity.
pub struct PassageRanker {
    embeddings: EmbeddingClient,
    top_k: usize,
}

impl PassageRanker {
    pub fn new(embeddings: EmbeddingClient, top_k: usize) -> Self {
        Self { embeddings, top_k }
    }

    /// Returns the top-K passages in rank order. An empty candidate set
    /// returns empty without invoking the embeddings API at all.
    pub async fn find_relevant(
        &self,
        question: &str,
        passages: Vec<Passage>,
    ) -> Result<Vec<Passage>> {
        if passages.is_empty() {
            debug!("No candidate passages; skipping embedding");
            return Ok(Vec::new());
        }

        info!("Ranking {} candidate passages", passages.len());

        let question_embedding = self.embeddings.embed(question).await?;

        let texts: Vec<String> = passages.iter().map(|p| p.content.clone()).collect();
        let passage_embeddings = self.embeddings.embed_batch(&texts).await?;

        if passage_embeddings.len() != passages.len() {
            return Err(QaError::Embedding(format!(
                "Expected {} embeddings, got {}",
                passages.len(),
                passage_embeddings.len()
            )));
        }

        let scores: Vec<f32> = passage_embeddings
            .iter()
            .map(|embedding| cosine_similarity(&question_embedding, embedding))
            .collect();

        let selected = top_k_indices(&scores, self.top_k);
        debug!("Selected passage indices: {:?}", selected);

        Ok(selected.into_iter().map(|i| passages[i].clone()).collect())
    }
}
