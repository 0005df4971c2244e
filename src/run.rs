//! Application run modes: logger init, single prompt, TUI launch.

use std::io;

use crate::cli::Args;
use crate::core;
use crate::core::config::{Config, ConfigError, Settings};
use crate::core::llm::ApiCompletion;
use crate::core::session::{SessionSlot, ValidationError};

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_interactive()
        && let Some(path) = core::paths::log_file()
    {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Apply the `-m` override on top of environment settings.
pub fn apply_overrides(mut settings: Settings, args: &Args) -> Settings {
    if let Some(model) = args.model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        settings.model_id = model.to_string();
    }
    settings
}

/// Run single prompt mode: one user turn, reply (or fallback) printed to stdout.
pub async fn run_single_prompt(
    prompt_arg: &str,
    settings: &Settings,
    api_key: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = api_key.ok_or(ConfigError::MissingApiKey)?;
    let prompt = if prompt_arg == "-" {
        io::read_to_string(io::stdin())?
    } else {
        prompt_arg.to_string()
    };
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(ValidationError::EmptyInput.into());
    }

    let config = Config::new(settings, &key);
    let client = ApiCompletion::new(&config);
    let mut slot = SessionSlot::new();
    let session = slot.initialize();
    session.append_user(prompt)?;
    let reply = session.request_completion(&client, &config.model_id).await;
    println!("{}", reply.content);
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(
    settings: Settings,
    api_key: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(settings, api_key)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn model_override_replaces_env_model() {
        let settings = core::config::settings_from(|_| None).unwrap();
        let args = Args::parse_from(["advisor-chat", "-m", "mistral-small-latest"]);
        assert_eq!(
            apply_overrides(settings.clone(), &args).model_id,
            "mistral-small-latest"
        );
        let args = Args::parse_from(["advisor-chat"]);
        assert_eq!(apply_overrides(settings, &args).model_id, "mistral-large-latest");
    }

    #[tokio::test]
    async fn blank_prompt_is_an_error() {
        let settings = core::config::settings_from(|_| None).unwrap();
        let err = run_single_prompt("  \n ", &settings, Some("sk-test".to_string()))
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::EmptyInput)
        );
    }

    #[tokio::test]
    async fn missing_key_is_an_error() {
        let settings = core::config::settings_from(|_| None).unwrap();
        let err = run_single_prompt("hello", &settings, None).await.unwrap_err();
        assert!(err.to_string().contains("MISTRAL_API_KEY"));
    }
}
