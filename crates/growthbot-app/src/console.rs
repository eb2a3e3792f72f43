//! Line-oriented console front end.

use std::io::{self, Write};

use growthbot_ai::{ConversationState, Orchestrator, Role, Turn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

const HELP: &str = "Commands: /quit, /reset, /summary, /usage";

/// Slash commands understood by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    Summary,
    Usage,
    Help,
}

impl Command {
    /// `None` means the line is a message for the assistant.
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim().strip_prefix('/')?;
        Some(match word.to_ascii_lowercase().as_str() {
            "quit" | "exit" => Self::Quit,
            "reset" => Self::Reset,
            "summary" => Self::Summary,
            "usage" => Self::Usage,
            _ => Self::Help,
        })
    }
}

/// Run the read-eval loop until `/quit` or end of input.
pub async fn run(orchestrator: &Orchestrator, model: &str) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = io::stdout();
    let mut state = ConversationState::new();

    writeln!(out, "GrowthBot ({model}). {HELP}")?;
    info!(session = %state.session_id(), "conversation started");

    loop {
        write!(out, "you> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match Command::parse(input) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => {
                state = ConversationState::new();
                info!(session = %state.session_id(), "conversation reset");
                writeln!(out, "(started a new conversation)")?;
            }
            Some(Command::Summary) => writeln!(out, "{}", summary_text(&state))?,
            Some(Command::Usage) => writeln!(out, "{}", usage_text(&state))?,
            Some(Command::Help) => writeln!(out, "{HELP}")?,
            None => {
                let seen = state.turns().len();
                state = orchestrator.advance(state, Turn::user(input)).await;
                // Skip the user turn that was just echoed by the terminal.
                render_turns(&state.turns()[seen + 1..], &mut out)?;
            }
        }
    }
    Ok(())
}

/// Print the assistant side of one exchange. Tool results stay in the log.
pub fn render_turns(turns: &[Turn], out: &mut impl Write) -> io::Result<()> {
    for turn in turns {
        match turn.role {
            Role::Assistant => {
                for call in &turn.tool_calls {
                    writeln!(out, "  [using {}]", call.name)?;
                }
                if !turn.content.trim().is_empty() {
                    writeln!(out, "growthbot> {}", turn.content.trim())?;
                }
            }
            Role::Tool => {
                tracing::debug!(call_id = ?turn.tool_call_id, "tool result: {}", turn.content);
            }
            Role::User | Role::System => {}
        }
    }
    Ok(())
}

fn summary_text(state: &ConversationState) -> String {
    if state.summary().is_empty() {
        "(no summary yet)".to_string()
    } else {
        format!(
            "Summary of the first {} turns:\n{}",
            state.summarized_upto(),
            state.summary()
        )
    }
}

fn usage_text(state: &ConversationState) -> String {
    let tracker = state.tracker();
    let total = tracker.total();
    let mut text = format!(
        "{} model calls, {} tokens ({} in / {} out), {} turns ({} pending)",
        tracker.call_count(),
        tracker.total_tokens(),
        total.input_tokens,
        total.output_tokens,
        state.turns().len(),
        state.pending_count()
    );
    for (provider, usage) in tracker.providers() {
        text.push_str(&format!("\n  {provider}: {} tokens", usage.total_tokens()));
    }
    text
}
