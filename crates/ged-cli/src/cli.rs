use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ged")]
#[command(version)]
#[command(about = "Text-command raster editor: allocate a canvas, draw, fill, and show it", long_about = None)]
pub struct Args {
    /// Read commands from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Do not print the start and end banners
    #[arg(long)]
    pub no_banner: bool,

    /// Echo every command before its output
    #[arg(short, long)]
    pub echo: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
