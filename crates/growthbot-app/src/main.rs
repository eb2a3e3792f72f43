mod cli;
mod console;
mod startup;

use std::process::ExitCode;

use growthbot_config::GrowthbotConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// `KEY=VALUE` pairs from `.env` contents. Blank lines and `#` comments are
/// skipped; surrounding quotes are stripped from values.
fn dotenv_pairs(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim(), value)
        })
        .collect()
}

/// Load `.env` from the working directory. Variables already set win.
/// Must run before any other thread exists.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for (key, value) in dotenv_pairs(&contents) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
        }
    }
}

/// Logs go to stderr so stdout carries only the conversation.
fn init_logging(directive: &str) {
    let directive: Directive = directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() -> ExitCode {
    // Environment first, while the process is still single-threaded.
    load_dotenv();

    let args = cli::parse();

    let config = match startup::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("growthbot: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_directive());
    init_logging(log_directive);

    tracing::info!("GrowthBot v{} starting...", env!("CARGO_PKG_VERSION"));

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(&args, &config)) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("growthbot: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &cli::Args, config: &GrowthbotConfig) -> growthbot_common::Result<()> {
    let app = startup::build(args, config)?;
    console::run(&app.orchestrator, &app.model).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotenv_skips_comments_and_strips_quotes() {
        let contents = "# credentials\n\nGEMINI_API_KEY=\"abc123\"\n  MODE = 'demo'  \nnot a pair\n";
        assert_eq!(
            dotenv_pairs(contents),
            vec![("GEMINI_API_KEY", "abc123"), ("MODE", "demo")]
        );
    }

    #[test]
    fn dotenv_keeps_equals_in_values() {
        assert_eq!(dotenv_pairs("URL=a=b"), vec![("URL", "a=b")]);
    }
}
