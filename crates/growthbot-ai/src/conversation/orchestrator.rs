//! The conversation state machine.
//!
//! ```text
//! Responding     → Routing | Halted (model failure, apology appended)
//! Routing        → ExecutingTools | Summarizing | Halted
//! ExecutingTools → Responding | Halted (tool round limit reached)
//! Summarizing    → Halted
//! ```
//!
//! Summarization only happens once a reply carries no tool calls, so a tool
//! round-trip is never split by a compaction pass.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info_span, warn, Instrument};

use crate::prompts;
use crate::tools::ToolRegistry;
use crate::{ModelGateway, Turn};

use super::router::{route, RoutingDecision};
use super::state::ConversationState;
use super::summarizer::Summarizer;

/// Node the state machine is currently executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrchestratorState {
    Responding,
    Routing,
    ExecutingTools,
    Summarizing,
    /// Control returns to the caller; the session itself continues.
    Halted,
}

impl OrchestratorState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Halted)
    }
}

impl fmt::Display for OrchestratorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Responding => "Responding",
            Self::Routing => "Routing",
            Self::ExecutingTools => "ExecutingTools",
            Self::Summarizing => "Summarizing",
            Self::Halted => "Halted",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct ConversationSettings {
    pub system_preamble: String,
    /// Pending turns (all roles) at which a tool-free reply triggers compaction.
    pub summarization_threshold: usize,
    /// Tool round-trips allowed within one `advance`.
    pub max_tool_rounds: u32,
}

impl ConversationSettings {
    pub fn new(system_preamble: impl Into<String>) -> Self {
        Self {
            system_preamble: system_preamble.into(),
            summarization_threshold: 6,
            max_tool_rounds: 10,
        }
    }

    pub fn with_summarization_threshold(mut self, threshold: usize) -> Self {
        self.summarization_threshold = threshold.max(1);
        self
    }

    pub fn with_max_tool_rounds(mut self, max: u32) -> Self {
        self.max_tool_rounds = max.max(1);
        self
    }
}

/// Drives sessions through the state machine. Holds only shared, read-only
/// collaborators, so one orchestrator can serve many sessions concurrently.
pub struct Orchestrator {
    gateway: Arc<dyn ModelGateway>,
    registry: Arc<ToolRegistry>,
    summarizer: Summarizer,
    settings: ConversationSettings,
}

impl Orchestrator {
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        registry: Arc<ToolRegistry>,
        settings: ConversationSettings,
    ) -> Self {
        Self {
            summarizer: Summarizer::new(Arc::clone(&gateway)),
            gateway,
            registry,
            settings,
        }
    }

    /// Use a separate summarizer, e.g. one backed by a cheaper model.
    pub fn with_summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Append `user_input` and run the state machine until it halts.
    ///
    /// Never fails: model and tool errors become turns in the returned state.
    pub async fn advance(
        &self,
        mut state: ConversationState,
        user_input: Turn,
    ) -> ConversationState {
        let span = info_span!("advance", session = %state.session_id().short());
        async move {
            state.push(user_input);

            let mut current = OrchestratorState::Responding;
            let mut tool_rounds = 0u32;

            while !current.is_terminal() {
                let next = match current {
                    OrchestratorState::Responding => self.respond(&mut state).await,
                    OrchestratorState::Routing => self.route_last(&state),
                    OrchestratorState::ExecutingTools => {
                        tool_rounds += 1;
                        if tool_rounds > self.settings.max_tool_rounds {
                            self.refuse_tools(&mut state);
                            OrchestratorState::Halted
                        } else {
                            self.execute_tools(&mut state);
                            OrchestratorState::Responding
                        }
                    }
                    OrchestratorState::Summarizing => {
                        self.summarize(&mut state).await;
                        OrchestratorState::Halted
                    }
                    OrchestratorState::Halted => break,
                };
                debug!(from = %current, to = %next, turns = state.turns().len(), "transition");
                current = next;
            }

            state
        }
        .instrument(span)
        .await
    }

    /// Prompt is the preamble (plus summary framing) and the pending tail.
    async fn respond(&self, state: &mut ConversationState) -> OrchestratorState {
        debug_assert!(state.unanswered_tool_calls().is_empty());

        let preamble = if state.summary().is_empty() {
            self.settings.system_preamble.clone()
        } else {
            prompts::with_summary(&self.settings.system_preamble, state.summary())
        };

        let result = self
            .gateway
            .respond(&preamble, state.pending_turns(), self.registry.list_schemas())
            .await;

        match result {
            Ok(output) => {
                state.record_usage(self.gateway.provider(), &output.usage);
                state.push(output.into_turn());
                OrchestratorState::Routing
            }
            Err(e) => {
                warn!(error = %e, "model call failed, replying with apology");
                state.push(Turn::assistant(prompts::apology(&e), Vec::new()));
                OrchestratorState::Halted
            }
        }
    }

    fn route_last(&self, state: &ConversationState) -> OrchestratorState {
        let Some(last) = state.last_turn() else {
            return OrchestratorState::Halted;
        };
        let decision = route(
            last,
            state.pending_count(),
            self.settings.summarization_threshold,
        );
        debug!(
            ?decision,
            pending = state.pending_count(),
            threshold = self.settings.summarization_threshold,
            "routed"
        );
        match decision {
            RoutingDecision::CallTools => OrchestratorState::ExecutingTools,
            RoutingDecision::Summarize => OrchestratorState::Summarizing,
            RoutingDecision::Halt => OrchestratorState::Halted,
        }
    }

    /// One tool-result turn per call, in emission order. Failures become
    /// error results; the rest of the batch still runs.
    fn execute_tools(&self, state: &mut ConversationState) {
        let calls = match state.last_turn() {
            Some(turn) => turn.tool_calls.clone(),
            None => return,
        };

        for call in calls {
            let content = match self.registry.dispatch(&call) {
                Ok(output) => output,
                Err(e) => {
                    warn!(tool = %call.name, error = %e, "tool call failed");
                    format!("Error: {e}")
                }
            };
            state.push(Turn::tool_result(call.id, content));
        }
    }

    /// Answer the outstanding calls without running them, then apologise.
    fn refuse_tools(&self, state: &mut ConversationState) {
        warn!(
            max_tool_rounds = self.settings.max_tool_rounds,
            "tool round limit reached"
        );
        let ids: Vec<String> = state
            .unanswered_tool_calls()
            .into_iter()
            .map(|c| c.id.clone())
            .collect();
        for id in ids {
            state.push(Turn::tool_result(
                id,
                format!(
                    "Error: tool call limit of {} rounds reached for this message",
                    self.settings.max_tool_rounds
                ),
            ));
        }
        state.push(Turn::assistant(prompts::tool_limit_reached(), Vec::new()));
    }

    /// Best effort: on failure the previous summary and index are kept.
    async fn summarize(&self, state: &mut ConversationState) {
        let upto = state.turns().len();
        let result = self
            .summarizer
            .compact(state.summary(), state.pending_turns())
            .await;
        match result {
            Ok(compaction) => {
                if let Some(usage) = &compaction.usage {
                    state.record_usage(self.summarizer.provider(), usage);
                }
                debug!(summarized_upto = upto, "summary updated");
                state.apply_summary(compaction.summary, upto);
            }
            Err(e) => {
                warn!(error = %e, "summarization failed, keeping previous summary");
            }
        }
    }
}
