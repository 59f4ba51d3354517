//! gls-server: completion server over stdin/stdout.
//!
//! See `gls::server` for the request protocol.
//!
//! Usage:
//! ```bash
//! gls-server --config gls.json < requests.jsonl
//! ```

use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gls::config::ServerConfig;
use gls::server::{Server, run};
use gls::tracing_config::init_tracing;

/// CLI arguments for the gls-server binary.
#[derive(Parser, Debug)]
#[command(name = "gls-server", version, about = "Groovy completion server")]
struct Args {
    /// Path to a JSON configuration file.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = ServerConfig::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;
    tracing::info!(?config, "gls-server ready");

    let mut server = Server::new(config);
    let stdin = BufReader::new(std::io::stdin());
    let stdout = std::io::stdout();
    run(&mut server, stdin, stdout.lock())
}
