//! ModelGateway implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AssistantOutput, InferenceError, ModelGateway, ToolDefinition, Turn};

use super::client::GeminiClient;

#[async_trait]
impl ModelGateway for GeminiClient {
    fn provider(&self) -> &str {
        "gemini"
    }

    async fn respond(
        &self,
        system_preamble: &str,
        turns: &[Turn],
        tools: &[ToolDefinition],
    ) -> Result<AssistantOutput, InferenceError> {
        if turns.is_empty() && system_preamble.trim().is_empty() {
            return Err(InferenceError::InvalidRequest(
                "a prompt needs at least one turn or a system preamble".to_string(),
            ));
        }

        let body = self.build_request_body(system_preamble, turns, tools);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = turns.len(), tools = tools.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceError::Timeout
                } else {
                    InferenceError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(InferenceError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(InferenceError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| InferenceError::ParseError(e.to_string()))?;

        let output = self.parse_response(json)?;
        debug!(
            tool_calls = output.tool_calls.len(),
            input_tokens = output.usage.input_tokens,
            output_tokens = output.usage.output_tokens,
            "Gemini API response"
        );
        Ok(output)
    }
}
