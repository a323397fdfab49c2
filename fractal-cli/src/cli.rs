use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "frcli",
    about = "Fractal input replay and inspection",
    version
)]
pub struct Cli {
    /// Config file to use instead of searching for fractal.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a TOML input script and print per-frame button phases
    Replay {
        /// Path to the script
        script: PathBuf,
        /// Keys to report, comma separated (defaults to watch_keys from config)
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
    },
    /// Live terminal view of keyboard state
    Watch {
        /// Frame updates per second
        #[arg(long, default_value_t = 30)]
        fps: u32,
    },
    /// List known key names and codes
    Keys,
}
