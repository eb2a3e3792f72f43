//! Scripted model gateway for exercising the state machine without a backend.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{AssistantOutput, InferenceError, ModelGateway, ToolCall, ToolDefinition, Turn};

/// What the gateway was asked, captured per call.
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub system_preamble: String,
    pub turns: Vec<Turn>,
    pub tool_count: usize,
}

/// Replays queued responses in order; an exhausted script is an API error.
pub(crate) struct ScriptedGateway {
    provider: &'static str,
    script: Mutex<VecDeque<Result<AssistantOutput, InferenceError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGateway {
    pub fn new(script: Vec<Result<AssistantOutput, InferenceError>>) -> Self {
        Self::named("scripted", script)
    }

    pub fn named(
        provider: &'static str,
        script: Vec<Result<AssistantOutput, InferenceError>>,
    ) -> Self {
        Self {
            provider,
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    fn provider(&self) -> &str {
        self.provider
    }

    async fn respond(
        &self,
        system_preamble: &str,
        turns: &[Turn],
        tools: &[ToolDefinition],
    ) -> Result<AssistantOutput, InferenceError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_preamble: system_preamble.to_string(),
            turns: turns.to_vec(),
            tool_count: tools.len(),
        });
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(InferenceError::ApiError("script exhausted".into())))
    }
}

pub(crate) fn reply(text: &str) -> Result<AssistantOutput, InferenceError> {
    Ok(AssistantOutput::text(text))
}

pub(crate) fn tool_request(calls: &[(&str, &str, serde_json::Value)]) -> Result<AssistantOutput, InferenceError> {
    Ok(AssistantOutput {
        content: String::new(),
        tool_calls: calls
            .iter()
            .map(|(id, name, args)| ToolCall {
                id: id.to_string(),
                name: name.to_string(),
                arguments: args.clone(),
            })
            .collect(),
        usage: crate::TokenUsage {
            input_tokens: 10,
            output_tokens: 2,
        },
    })
}
