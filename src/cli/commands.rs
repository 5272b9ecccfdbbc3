use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo", about = concat!("[X] todo v", env!("CARGO_PKG_VERSION"), " - a to-do list in one window"), version)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/todo/config.toml)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides [log] file)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "todo=trace" (overrides [log] level)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,

    /// Start with an empty list instead of the configured initial tasks
    #[arg(long)]
    pub empty: bool,
}
