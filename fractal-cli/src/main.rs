mod cli;
mod commands;
mod keymap;
mod project;
mod script;
mod state;
mod ui;

use clap::Parser;
use fractal_input::key;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let ctx = match &cli.config {
        Some(path) => project::load_config(path)?,
        None => project::detect_project_context()?,
    };
    if let Some(path) = &ctx.config_path {
        log::info!("Using config {}", path.display());
    }

    match cli.command {
        Command::Replay { script, keys } => commands::replay_cmd::run(&script, keys, ctx),
        Command::Watch { fps } => commands::watch_cmd::run(fps, ctx).await,
        Command::Keys => {
            for (name, code) in key::all() {
                println!("{code:>4}  {name}");
            }
            Ok(())
        }
    }
}
