//! Gemini API client struct, request building, and response parsing.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::tools::to_gemini_tool;
use crate::{AssistantOutput, InferenceError, Role, TokenUsage, ToolCall, ToolDefinition, Turn};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, InferenceError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| InferenceError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    ///
    /// Consecutive tool results are grouped into one `user` content so that
    /// parallel function calls are answered together.
    pub(crate) fn build_request_body(
        &self,
        system_preamble: &str,
        turns: &[Turn],
        tools: &[ToolDefinition],
    ) -> Value {
        let call_names: HashMap<&str, &str> = turns
            .iter()
            .flat_map(|t| t.tool_calls.iter())
            .map(|c| (c.id.as_str(), c.name.as_str()))
            .collect();

        let mut system_parts: Vec<&str> = Vec::new();
        if !system_preamble.trim().is_empty() {
            system_parts.push(system_preamble);
        }

        let mut contents: Vec<Value> = Vec::new();
        let mut last_was_tool = false;

        for turn in turns {
            match turn.role {
                Role::System => {
                    system_parts.push(&turn.content);
                    continue;
                }
                Role::User => {
                    contents.push(json!({
                        "role": "user",
                        "parts": [{ "text": turn.content }]
                    }));
                }
                Role::Assistant => {
                    let mut parts = Vec::new();
                    if !turn.content.is_empty() {
                        parts.push(json!({ "text": turn.content }));
                    }
                    for call in &turn.tool_calls {
                        let args = if call.arguments.is_null() {
                            json!({})
                        } else {
                            call.arguments.clone()
                        };
                        parts.push(json!({
                            "functionCall": { "name": call.name, "args": args }
                        }));
                    }
                    if parts.is_empty() {
                        parts.push(json!({ "text": "" }));
                    }
                    contents.push(json!({ "role": "model", "parts": parts }));
                }
                Role::Tool => {
                    let name = turn
                        .tool_call_id
                        .as_deref()
                        .and_then(|id| call_names.get(id).copied())
                        .unwrap_or("unknown_tool");
                    let part = json!({
                        "functionResponse": {
                            "name": name,
                            "response": { "content": turn.content }
                        }
                    });
                    match contents.last_mut() {
                        Some(prev) if last_was_tool => {
                            if let Some(parts) = prev["parts"].as_array_mut() {
                                parts.push(part);
                            }
                        }
                        _ => contents.push(json!({ "role": "user", "parts": [part] })),
                    }
                    last_was_tool = true;
                    continue;
                }
            }
            last_was_tool = false;
        }

        let mut body = json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if !system_parts.is_empty() {
            let system_text = system_parts.join("\n\n");
            if contents.is_empty() {
                // Gemini rejects empty contents; a preamble-only prompt is sent as the user turn.
                body["contents"] = json!([{ "role": "user", "parts": [{ "text": system_text }] }]);
            } else {
                body["systemInstruction"] = json!({ "parts": [{ "text": system_text }] });
            }
        }

        if !tools.is_empty() {
            let tool_defs: Vec<_> = tools.iter().map(to_gemini_tool).collect();
            body["tools"] = json!([{ "functionDeclarations": tool_defs }]);
        }

        body
    }

    /// Parse a Gemini response.
    pub(crate) fn parse_response(&self, json: Value) -> Result<AssistantOutput, InferenceError> {
        let Some(candidates) = json["candidates"].as_array() else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                return Err(InferenceError::ApiError(format!("prompt blocked: {reason}")));
            }
            return Err(InferenceError::ParseError(
                "no candidates in response".to_string(),
            ));
        };

        let first = candidates
            .first()
            .ok_or_else(|| InferenceError::ParseError("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut content = String::new();
        let mut tool_calls = Vec::new();

        for part in &parts {
            if let Some(text) = part["text"].as_str() {
                content.push_str(text);
            }
            if let Some(fc) = part.get("functionCall") {
                let name = fc["name"].as_str().unwrap_or("").to_string();
                if name.is_empty() {
                    return Err(InferenceError::ParseError(
                        "function call without a name".to_string(),
                    ));
                }
                tool_calls.push(ToolCall {
                    id: uuid::Uuid::new_v4().to_string(),
                    name,
                    arguments: fc["args"].clone(),
                });
            }
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AssistantOutput {
            content,
            tool_calls,
            usage,
        })
    }
}
