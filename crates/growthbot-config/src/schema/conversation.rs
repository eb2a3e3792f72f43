//! Conversation flow settings: compaction threshold and tool loop guard.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    /// Pending turns that trigger a summarization pass (valid range: 1-100).
    pub summarization_threshold: u32,
    /// Tool round-trips allowed per user message (valid range: 1-50).
    pub max_tool_rounds: u32,
    /// Replaces the built-in assistant preamble when set.
    pub system_prompt: Option<String>,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            summarization_threshold: 6,
            max_tool_rounds: 10,
            system_prompt: None,
        }
    }
}
