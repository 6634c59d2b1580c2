//! Rewrite Fan-out — requests alternative phrasings of a highlight from the
//! text-generation provider and reattaches them in original order.

use async_trait::async_trait;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::prompts::REWRITE_PROMPT;
use crate::llm_client::CompletionClient;
use crate::models::position::Position;

/// The rewrite seam. Implement this to swap providers without touching the
/// handlers or the pipeline.
///
/// Carried in `AppState` as `Arc<dyn HighlightRewriter>`.
#[async_trait]
pub trait HighlightRewriter: Send + Sync {
    /// Returns up to `n` rewritten phrasings of `highlight`, in provider order.
    /// Exactly one outbound call per invocation; no caching, no retry.
    async fn rewrite(&self, highlight: &str, n: u32) -> Result<Vec<String>, AppError>;
}

#[async_trait]
impl HighlightRewriter for CompletionClient {
    async fn rewrite(&self, highlight: &str, n: u32) -> Result<Vec<String>, AppError> {
        let prompt = format!("{REWRITE_PROMPT}{highlight}");
        Ok(self.complete(prompt, n).await?)
    }
}

/// Rewrites every highlight across the extracted positions, in place.
///
/// Highlights are processed sequentially in document order. A single
/// highlight's failed rewrite degrades to an empty choice list rather than
/// failing the whole request.
pub async fn attach_improvements(
    positions: &mut [Position],
    rewriter: &dyn HighlightRewriter,
    n: u32,
) {
    for position in positions.iter_mut() {
        for highlight in position.highlights.iter_mut() {
            match rewriter.rewrite(&highlight.text, n).await {
                Ok(choices) => highlight.improvement_choices = choices,
                Err(e) => {
                    warn!("Rewrite failed for one highlight, continuing without it: {e}");
                    highlight.improvement_choices = Vec::new();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::position::Highlight;

    /// Deterministic provider stand-in: transforms the input and can be told
    /// to fail on highlights containing a marker substring.
    struct StubRewriter {
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl HighlightRewriter for StubRewriter {
        async fn rewrite(&self, highlight: &str, n: u32) -> Result<Vec<String>, AppError> {
            if let Some(marker) = self.fail_on {
                if highlight.contains(marker) {
                    return Err(AppError::Provider {
                        status: 500,
                        message: "stub failure".to_string(),
                    });
                }
            }
            Ok((1..=n)
                .map(|i| format!("Spearheaded ({i}): {highlight}"))
                .collect())
        }
    }

    fn position_with(highlights: &[&str]) -> Position {
        Position {
            title: "Software Engineer".to_string(),
            employer_name: "Acme Corp".to_string(),
            start_date: "June 2019".to_string(),
            end_date: "Current".to_string(),
            highlights: highlights
                .iter()
                .map(|h| Highlight::new(h.to_string()))
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_rewrite_returns_at_most_n_transformed_choices() {
        let stub = StubRewriter { fail_on: None };
        let input = "Improved system performance by 20%";
        let choices = stub.rewrite(input, 3).await.unwrap();

        assert!(choices.len() <= 3);
        assert!(!choices.is_empty());
        for choice in &choices {
            assert!(!choice.is_empty());
            assert_ne!(choice, input);
        }
    }

    #[tokio::test]
    async fn test_attaches_choices_to_every_highlight_in_order() {
        let mut positions = vec![
            position_with(&["Built the ingestion service", "Migrated the billing stack"]),
            position_with(&["Mentored 4 junior engineers"]),
        ];
        let stub = StubRewriter { fail_on: None };

        attach_improvements(&mut positions, &stub, 2).await;

        for position in &positions {
            for highlight in &position.highlights {
                assert_eq!(highlight.improvement_choices.len(), 2);
                assert!(highlight.improvement_choices[0].contains(&highlight.text));
            }
        }
    }

    #[tokio::test]
    async fn test_one_failed_rewrite_does_not_abort_the_rest() {
        let mut positions = vec![position_with(&[
            "Built the ingestion service",
            "POISON: this one fails",
            "Mentored 4 junior engineers",
        ])];
        let stub = StubRewriter {
            fail_on: Some("POISON"),
        };

        attach_improvements(&mut positions, &stub, 2).await;

        let highlights = &positions[0].highlights;
        assert_eq!(highlights[0].improvement_choices.len(), 2);
        assert!(highlights[1].improvement_choices.is_empty());
        assert_eq!(highlights[2].improvement_choices.len(), 2);
    }
}
