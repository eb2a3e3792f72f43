use std::path::PathBuf;

use clap::Parser;

/// GrowthBot, a lead-generation chat assistant for the console.
#[derive(Parser, Debug)]
#[command(name = "growthbot", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Service catalog (JSON) path override.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
