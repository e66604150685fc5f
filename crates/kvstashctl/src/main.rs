//! kvstashctl: Command-line interface for kvstash stores.
//!
//! Reads and inserts JSON values in a store file from the terminal.
//!
//! # Usage
//!
//! ```bash
//! kvstashctl --db results.db put run-1 '{"score": 0.93}'
//! kvstashctl --db results.db get run-1 run-2
//! ```
//!
//! Environment variables can also be used:
//! - `KVSTASH_DB`: Path to the store file
//! - `KVSTASH_TIMEOUT_SECS`: Seconds to wait for a locked store
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)

mod commands;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kvstash::observability::tracing::init_tracing;
use kvstash::{Store, StoreConfig};

/// Command-line interface for kvstash stores.
#[derive(Parser)]
#[command(name = "kvstashctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the store file
    #[arg(short, long, env = "KVSTASH_DB", default_value = "./kvstash.db")]
    db: PathBuf,

    /// Seconds to wait for a store locked by another process
    #[arg(short, long, env = "KVSTASH_TIMEOUT_SECS", default_value_t = 7200)]
    timeout: u64,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the values stored under one or more keys
    Get {
        /// Keys to look up, printed in this order
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Store a JSON value under a new key
    Put {
        /// Key to insert (must not exist yet)
        key: String,
        /// JSON value (or use --file, or pipe it on stdin)
        value: Option<String>,
        /// Read the JSON value from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing("kvstashctl", "warn")?;

    let cli = Cli::parse();

    let config = StoreConfig::new(&cli.db).with_timeout(Duration::from_secs(cli.timeout));
    tracing::debug!(path = %config.path.display(), timeout = ?config.timeout, "Opening store");
    let store = Store::with_config(config);

    match cli.command {
        Commands::Get { keys } => commands::get::run(&store, &keys, cli.output)?,
        Commands::Put { key, value, file } => {
            commands::put::run(&store, &key, value, file, cli.output)?;
        }
    }

    Ok(())
}
