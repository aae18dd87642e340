//! GED: a raster editor driven by one-line text commands.
//!
//! Reads commands from stdin (or `--script FILE`), keeps a single canvas
//! in memory, and prints rendered rows and messages to stdout. Logs go to
//! stderr through `env_logger`.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use ged_editor::{Session, SessionConfig};
use std::fs::File;
use std::io::{self, BufReader};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let config = SessionConfig {
        banners: !args.no_banner,
        echo: args.echo,
    };
    let stdout = io::stdout().lock();
    let mut session = Session::new(stdout, config);

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            log::debug!("reading commands from {}", path.display());
            session
                .run(BufReader::new(file))
                .context("session aborted")?;
        }
        None => {
            session
                .run(io::stdin().lock())
                .context("session aborted")?;
        }
    }

    Ok(())
}
