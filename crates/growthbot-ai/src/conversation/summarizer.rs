//! Progressive summarization of conversation history.

use std::sync::Arc;

use tracing::debug;

use crate::prompts;
use crate::{InferenceError, ModelGateway, TokenUsage, Turn};

/// Result of one compaction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Compaction {
    pub summary: String,
    /// `None` when no model call was needed.
    pub usage: Option<TokenUsage>,
}

/// Folds pending turns into the running summary with one model call.
#[derive(Clone)]
pub struct Summarizer {
    gateway: Arc<dyn ModelGateway>,
}

impl Summarizer {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Provider name of the backing gateway, for usage accounting.
    pub fn provider(&self) -> &str {
        self.gateway.provider()
    }

    /// Produce the summary covering `previous_summary` plus `new_turns`.
    ///
    /// With no new turns the previous summary is returned as-is and the
    /// model is not called.
    pub async fn compact(
        &self,
        previous_summary: &str,
        new_turns: &[Turn],
    ) -> Result<Compaction, InferenceError> {
        if new_turns.is_empty() {
            return Ok(Compaction {
                summary: previous_summary.to_string(),
                usage: None,
            });
        }

        let transcript = render_transcript(new_turns);
        let request = Turn::user(prompts::summary_request(previous_summary, &transcript));

        debug!(
            turns = new_turns.len(),
            extending = !previous_summary.is_empty(),
            "Summarizing conversation"
        );
        let output = self
            .gateway
            .respond("", std::slice::from_ref(&request), &[])
            .await?;
        Ok(Compaction {
            summary: output.content,
            usage: Some(output.usage),
        })
    }
}

/// One `role: content` line per turn, in order.
pub fn render_transcript(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|t| format!("{}: {}", t.role, t.content))
        .collect::<Vec<_>>()
        .join("\n")
}
