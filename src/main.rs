mod calculator;
mod config;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::calculator::InputController;
use crate::config::Config;

/// A small four-function desk calculator for the terminal.
#[derive(Debug, Parser)]
#[command(name = "deskcalc", version)]
struct Cli {
    /// Replay a string of key characters (e.g. "12+5=") and print the final
    /// display lines instead of starting the interactive screen.
    #[arg(short, long)]
    keys: Option<String>,

    /// Use this config file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let mut controller = InputController::new(config.error_label.clone());

    if let Some(keys) = cli.keys {
        for action in ui::keymap::actions_from_keys(&keys) {
            controller.apply(action);
        }
        let display = controller.display();
        println!("{}", display.expression);
        println!("{}", display.result);
        return Ok(());
    }

    info!("starting interactive session");
    ui::run(&mut controller, &config)
}
