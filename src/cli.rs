use clap::Parser;
use std::path::PathBuf;

use crate::navigation::Destination;

/// Mapler - drawer-navigated job inquiry app, driven from the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "mapler", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "MAPLER_CONFIG", default_value = "mapler.toml")]
    pub config: PathBuf,

    /// Screen shown at start-up (home, form, profile, settings)
    #[arg(long, env = "MAPLER_INITIAL_ROUTE")]
    pub initial_route: Option<Destination>,

    /// Read commands from this file instead of stdin
    #[arg(short, long, env = "MAPLER_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MAPLER_LOG_LEVEL")]
    pub log_level: Option<String>,
}
