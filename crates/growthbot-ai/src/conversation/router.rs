//! Decides where control goes after each model response.

use crate::Turn;

/// Next edge out of the routing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingDecision {
    CallTools,
    Summarize,
    Halt,
}

/// Tool calls always win; otherwise compact once `pending` reaches
/// `threshold`, else stop.
pub fn route(last_output: &Turn, pending: usize, threshold: usize) -> RoutingDecision {
    if last_output.has_tool_calls() {
        RoutingDecision::CallTools
    } else if pending >= threshold {
        RoutingDecision::Summarize
    } else {
        RoutingDecision::Halt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolCall;

    fn with_call() -> Turn {
        Turn::assistant(
            "",
            vec![ToolCall {
                id: "c1".into(),
                name: "get_pricing_overview".into(),
                arguments: serde_json::json!({}),
            }],
        )
    }

    #[test]
    fn tool_calls_take_priority_at_any_pending_count() {
        for pending in [0, 1, 5, 6, 7, 100] {
            assert_eq!(route(&with_call(), pending, 6), RoutingDecision::CallTools);
        }
    }

    #[test]
    fn below_threshold_halts() {
        let reply = Turn::assistant("hello", vec![]);
        for pending in 0..6 {
            assert_eq!(route(&reply, pending, 6), RoutingDecision::Halt);
        }
    }

    #[test]
    fn at_or_above_threshold_summarizes() {
        let reply = Turn::assistant("hello", vec![]);
        assert_eq!(route(&reply, 6, 6), RoutingDecision::Summarize);
        assert_eq!(route(&reply, 7, 6), RoutingDecision::Summarize);
    }

    #[test]
    fn same_inputs_same_decision() {
        let reply = Turn::assistant("hello", vec![]);
        assert_eq!(route(&reply, 3, 4), route(&reply, 3, 4));
    }
}
