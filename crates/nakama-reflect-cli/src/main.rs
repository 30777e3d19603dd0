//! nakama-reflect: inspect reflected Nakama records
//!
//! - `schema` prints the reflection schema of every presentation record
//! - `convert` renders captured native callback events (JSON lines) into
//!   presentation records, one JSON object per line

mod config;
mod convert;

use anyhow::{Context, Result};
use clap::Parser;
use config::{CliConfig, Command};
use tokio::fs::File;
use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn print_schemas(type_name: Option<&str>) -> Result<()> {
    let json = match type_name {
        Some(name) => {
            let schema = nakama_reflect::schema_by_name(name)
                .with_context(|| format!("No reflected record named {name}"))?;
            serde_json::to_string_pretty(&schema)?
        }
        None => serde_json::to_string_pretty(&nakama_reflect::all_schemas())?,
    };
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = CliConfig::parse();

    match config.command {
        Command::Schema { type_name } => print_schemas(type_name.as_deref())?,
        Command::Convert { input } => {
            let mut stdout = io::stdout();
            let stats = match &input {
                Some(path) => {
                    let file = File::open(path)
                        .await
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    convert::convert_lines(BufReader::new(file), &mut stdout, config.strict).await?
                }
                None => {
                    convert::convert_lines(BufReader::new(io::stdin()), &mut stdout, config.strict)
                        .await?
                }
            };
            info!("Rendered {} events ({} skipped)", stats.rendered, stats.skipped);
        }
    }

    Ok(())
}
