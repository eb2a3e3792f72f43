//! Conversation state machine.
//!
//! A session's [`ConversationState`] is advanced one user turn at a time by
//! the [`Orchestrator`]: it asks the model for a reply, runs any requested
//! tools, and compacts the history into a running summary once enough turns
//! are pending.

mod orchestrator;
mod router;
mod state;
mod summarizer;

#[cfg(test)]
pub(crate) mod testing;

pub use orchestrator::{ConversationSettings, Orchestrator, OrchestratorState};
pub use router::{route, RoutingDecision};
pub use state::ConversationState;
pub use summarizer::{Compaction, Summarizer};
