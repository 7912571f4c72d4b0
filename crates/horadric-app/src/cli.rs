use std::path::PathBuf;

use clap::Parser;

/// Horadric — a Project Diablo 2 chat assistant backed by Gemini.
#[derive(Parser, Debug)]
#[command(name = "horadric", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error, or a full filter directive).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
