//! Answer synthesis: retrieve, prompt, generate, attribute.

use std::sync::Arc;

use crate::domain::errors::{RagError, RagResult};
use crate::domain::models::{Answer, Source};
use crate::domain::ports::GenerationClient;
use crate::services::retrieval::{RetrievalEngine, DEFAULT_SEARCH_LIMIT};

/// Answer returned when retrieval finds nothing relevant. This is a
/// normal terminal outcome, not an error, and the generation model is
/// never consulted for it.
pub const NO_CONTEXT_ANSWER: &str = "Sorry, I could not find any relevant information.";

/// Grounds generative answers in retrieved context.
pub struct AnswerSynthesizer {
    retrieval: Arc<RetrievalEngine>,
    generator: Arc<dyn GenerationClient>,
}

impl AnswerSynthesizer {
    pub fn new(retrieval: Arc<RetrievalEngine>, generator: Arc<dyn GenerationClient>) -> Self {
        Self { retrieval, generator }
    }

    /// Answer `question` using only retrieved context.
    ///
    /// Retrieves the top matches, short-circuits with a fixed fallback
    /// when nothing is found, otherwise prompts the generation model
    /// with the retrieved texts and attributes each of them as a source.
    /// `sources` always pairs with the retrieved documents one-to-one,
    /// in retrieval order.
    pub async fn ask(&self, question: &str) -> RagResult<Answer> {
        if question.trim().is_empty() {
            return Err(RagError::Validation("question must not be empty".to_string()));
        }

        let results = self
            .retrieval
            .search(question, DEFAULT_SEARCH_LIMIT, None)
            .await?;

        if results.is_empty() {
            tracing::info!(question, "no documents retrieved, returning fallback answer");
            return Ok(Answer {
                answer: NO_CONTEXT_ANSWER.to_string(),
                sources: Vec::new(),
            });
        }

        let prompt = build_prompt(
            question,
            results.iter().map(|result| result.text.as_str()),
        );

        let answer = self.generator.generate(&prompt).await?;

        let sources = results
            .into_iter()
            .map(|result| Source {
                content: result.text,
                metadata: result.metadata,
            })
            .collect();

        Ok(Answer { answer, sources })
    }
}

/// Assemble the instruction prompt: retrieved texts joined by blank
/// lines, followed by the question, with an explicit directive to stay
/// within the supplied context.
fn build_prompt<'a>(question: &str, texts: impl Iterator<Item = &'a str>) -> String {
    let context = texts.collect::<Vec<_>>().join("\n\n");

    format!(
        "Here is information retrieved from the knowledge base:\n\n\
         {context}\n\n\
         Based on the above information, please answer the following question:\n\
         {question}\n\n\
         Please use only the provided information to answer. \
         If the information is insufficient, please say so."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_context_and_question() {
        let prompt = build_prompt("who is the shark?", ["doc one", "doc two"].into_iter());

        assert!(prompt.contains("doc one\n\ndoc two"));
        assert!(prompt.contains("who is the shark?"));
        assert!(prompt.contains("only the provided information"));
    }
}
