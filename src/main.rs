//! # advisor-chat
//!
//! Financial advisor chat: forwards questions to a hosted chat-completion API
//! and shows the conversation in a terminal UI.
//!
//! ## Modes
//! - Interactive TUI (default)
//! - Single prompt with `-p` / `--prompt`
//! - `config` and `completions` subcommands

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands, ConfigAction};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);
    log::debug!("{} {} starting", core::app::NAME, core::app::VERSION);

    match &args.command {
        Some(Commands::Config { action: None }) => {
            core::cli::run_config();
            return Ok(());
        }
        Some(Commands::Config {
            action: Some(ConfigAction::SetApiKey { key }),
        }) => {
            core::cli::run_config_set_api_key(key.clone());
            return Ok(());
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(*shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
            return Ok(());
        }
        None => {}
    }

    // Settings errors use Display, not Debug, for a user-friendly message.
    let settings = core::config::load_settings().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let settings = run::apply_overrides(settings, &args);

    // The credential is read once here and held for the process lifetime.
    let api_key = core::config::resolve_api_key().map(|(key, source)| {
        log::info!("Using API key from {:?}", source);
        key
    });

    if let Some(ref prompt) = args.prompt {
        if let Err(e) = run::run_single_prompt(prompt, &settings, api_key).await {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    run::launch_tui(settings, api_key).await
}
