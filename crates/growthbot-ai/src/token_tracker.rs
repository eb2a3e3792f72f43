//! Token usage tracking across model calls.

use std::collections::HashMap;

use crate::TokenUsage;

/// Tracks cumulative token usage per provider for one session.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    by_provider: HashMap<String, TokenUsage>,
    call_count: u64,
}

impl TokenTracker {
    /// Record token usage from a model call.
    pub fn record(&mut self, provider: &str, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;

        let entry = self.by_provider.entry(provider.to_string()).or_default();
        entry.input_tokens = entry.input_tokens.saturating_add(usage.input_tokens);
        entry.output_tokens = entry.output_tokens.saturating_add(usage.output_tokens);
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    /// Per-provider usage, sorted by provider name.
    pub fn providers(&self) -> Vec<(&str, TokenUsage)> {
        let mut providers: Vec<_> = self
            .by_provider
            .iter()
            .map(|(name, usage)| (name.as_str(), *usage))
            .collect();
        providers.sort_by(|a, b| a.0.cmp(b.0));
        providers
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_per_provider_and_total() {
        let mut tracker = TokenTracker::default();
        tracker.record("gemini", &TokenUsage { input_tokens: 10, output_tokens: 5 });
        tracker.record("gemini", &TokenUsage { input_tokens: 1, output_tokens: 1 });
        tracker.record("other", &TokenUsage { input_tokens: 2, output_tokens: 0 });

        assert_eq!(tracker.call_count(), 3);
        assert_eq!(tracker.total_tokens(), 19);

        let providers = tracker.providers();
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].0, "gemini");
        assert_eq!(providers[0].1.input_tokens, 11);
        assert_eq!(providers[1], ("other", TokenUsage { input_tokens: 2, output_tokens: 0 }));
    }

    #[test]
    fn new_tracker_is_empty() {
        let tracker = TokenTracker::default();
        assert_eq!(tracker.call_count(), 0);
        assert_eq!(tracker.total_tokens(), 0);
        assert!(tracker.providers().is_empty());
    }
}
