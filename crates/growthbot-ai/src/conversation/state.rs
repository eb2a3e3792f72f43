//! Per-session conversation state.

use std::collections::HashSet;

use growthbot_common::SessionId;

use crate::token_tracker::TokenTracker;
use crate::{Role, TokenUsage, ToolCall, Turn};

/// Everything one session remembers. Turns are append-only and their order
/// is the literal model input; `summary` covers `turns[..summarized_upto]`.
///
/// Only the orchestrator mutates a state; callers read it between turns.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    session_id: SessionId,
    turns: Vec<Turn>,
    summary: String,
    summarized_upto: usize,
    tracker: TokenTracker,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Running summary; empty until the first compaction succeeds.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn summarized_upto(&self) -> usize {
        self.summarized_upto
    }

    /// Turns not yet folded into the summary.
    pub fn pending_turns(&self) -> &[Turn] {
        &self.turns[self.summarized_upto..]
    }

    pub fn pending_count(&self) -> usize {
        self.turns.len() - self.summarized_upto
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Calls in the latest assistant turn that have no tool result after it.
    pub fn unanswered_tool_calls(&self) -> Vec<&ToolCall> {
        let Some(pos) = self.turns.iter().rposition(|t| t.role == Role::Assistant) else {
            return Vec::new();
        };
        let answered: HashSet<&str> = self.turns[pos + 1..]
            .iter()
            .filter_map(|t| t.tool_call_id.as_deref())
            .collect();
        self.turns[pos]
            .tool_calls
            .iter()
            .filter(|c| !answered.contains(c.id.as_str()))
            .collect()
    }

    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Install a new summary covering the first `upto` turns.
    pub(crate) fn apply_summary(&mut self, summary: String, upto: usize) {
        debug_assert!(upto >= self.summarized_upto && upto <= self.turns.len());
        self.summary = summary;
        self.summarized_upto = upto.min(self.turns.len());
    }

    pub(crate) fn record_usage(&mut self, provider: &str, usage: &TokenUsage) {
        self.tracker.record(provider, usage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(id: &str) -> ToolCall {
        ToolCall {
            id: id.into(),
            name: "get_general_process".into(),
            arguments: serde_json::json!({}),
        }
    }

    #[test]
    fn new_state_is_empty() {
        let state = ConversationState::new();
        assert!(state.turns().is_empty());
        assert_eq!(state.summary(), "");
        assert_eq!(state.summarized_upto(), 0);
        assert_eq!(state.pending_count(), 0);
    }

    #[test]
    fn pending_turns_start_after_summary() {
        let mut state = ConversationState::new();
        state.push(Turn::user("a"));
        state.push(Turn::assistant("b", vec![]));
        state.apply_summary("a and b".into(), 2);
        state.push(Turn::user("c"));

        assert_eq!(state.pending_count(), 1);
        assert_eq!(state.pending_turns()[0].content, "c");
        assert_eq!(state.summary(), "a and b");
    }

    #[test]
    fn unanswered_calls_track_latest_assistant_turn() {
        let mut state = ConversationState::new();
        state.push(Turn::user("q"));
        state.push(Turn::assistant("", vec![call("x"), call("y")]));
        state.push(Turn::tool_result("x", "done"));

        let open: Vec<_> = state.unanswered_tool_calls().iter().map(|c| c.id.clone()).collect();
        assert_eq!(open, vec!["y"]);

        state.push(Turn::tool_result("y", "done"));
        assert!(state.unanswered_tool_calls().is_empty());
    }
}
