//! CLI-only commands: config info and API key storage.
//!
//! These run without opening the TUI and produce plain text output.

use std::io::{self, Read};

use crate::core::api_key;
use crate::core::config::{self, KeySource};
use crate::core::llm;
use crate::core::paths;

/// Run the `config` command: display paths, endpoint, model, and API key status.
pub fn run_config() {
    let config_dir = paths::config_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let log_file = paths::log_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());

    let settings = match config::load_settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let api_key_status = match config::resolve_api_key() {
        Some((_, KeySource::Environment)) => format!("set ✓ (from {})", config::API_KEY_VAR),
        Some((_, KeySource::Stored)) => "set ✓ (stored)".to_string(),
        None => "not set".to_string(),
    };

    println!("Config:      {}", config_dir);
    println!("Log file:    {}", log_file);
    println!("Endpoint:    {}", settings.base_url);
    println!("Model:       {}", settings.model_id);
    println!(
        "Sampling:    temperature {}, max {} tokens",
        llm::TEMPERATURE,
        llm::MAX_TOKENS
    );
    println!("Timeout:     {}s", settings.timeout.as_secs());
    println!("API key:     {}", api_key_status);
}

/// Run the `config set-api-key` command: store API key in config directory.
pub fn run_config_set_api_key(api_key: Option<String>) {
    let key = match api_key {
        Some(k) if !k.trim().is_empty() => k.trim().to_string(),
        _ => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            buf.trim().to_string()
        }
    };

    match api_key::store_api_key(&key) {
        Ok(path) => println!("API key saved to {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
