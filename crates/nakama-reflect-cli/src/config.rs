//! Command-line configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable that turns on strict conversion
pub const STRICT_ENV: &str = "NAKAMA_REFLECT_STRICT";

/// Inspect reflected Nakama records
#[derive(Debug, Parser)]
#[command(name = "nakama-reflect")]
#[command(about = "Inspect reflection schemas and render captured native events", long_about = None)]
#[command(version)]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Stop at the first malformed input line instead of skipping it
    #[arg(long, global = true, env = STRICT_ENV)]
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every reflection schema as JSON, or only TYPE
    Schema {
        #[arg(value_name = "TYPE")]
        type_name: Option<String>,
    },
    /// Render native events (JSON lines) from FILE, or stdin
    Convert {
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}
