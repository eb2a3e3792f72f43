//! Conversation engine for GrowthBot.
//!
//! Provides:
//! - The `ModelGateway` seam and a Gemini implementation of it
//! - A static tool registry with the service-catalog tools
//! - The turn router, the running-summary compactor, and the
//!   conversation state machine that ties them together
//! - Token usage tracking

pub mod conversation;
pub mod gemini;
pub mod prompts;
pub mod token_tracker;
pub mod tools;

use std::fmt;

use async_trait::async_trait;

pub use conversation::{
    route, Compaction, ConversationSettings, ConversationState, Orchestrator, OrchestratorState,
    RoutingDecision, Summarizer,
};
pub use gemini::{GeminiClient, GeminiConfig};
pub use token_tracker::TokenTracker;
pub use tools::{catalog_registry, CatalogTool, ToolHandler, ToolRegistry};

/// A single blocking model call: preamble plus ordered turns in, one
/// assistant output out. Implementations must not retain or alter the turns.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Provider name used for token accounting.
    fn provider(&self) -> &str;

    async fn respond(
        &self,
        system_preamble: &str,
        turns: &[Turn],
        tools: &[ToolDefinition],
    ) -> Result<AssistantOutput, InferenceError>;
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    /// Calls requested by the model. Empty for every non-assistant turn.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
    /// Set only on tool results; names the call being answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self::plain(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            tool_calls,
            tool_call_id: None,
        }
    }

    pub fn tool_result(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: Some(call_id.into()),
        }
    }

    fn plain(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
            Self::Tool => "tool",
        };
        f.write_str(s)
    }
}

/// Schema advertised to the model for one tool.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// A tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

/// What the model returned for one call.
#[derive(Debug, Clone, Default)]
pub struct AssistantOutput {
    pub content: String,
    pub tool_calls: Vec<ToolCall>,
    pub usage: TokenUsage,
}

impl AssistantOutput {
    #[cfg(test)]
    pub(crate) fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn into_turn(self) -> Turn {
        Turn::assistant(self.content, self.tool_calls)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// The model backend could not produce a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// A tool could not be resolved or did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    NotFound(String),
    #[error("invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },
    #[error("{tool} failed: {message}")]
    Execution { tool: String, message: String },
}
