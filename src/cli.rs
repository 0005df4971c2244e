//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  advisor-chat                          Launch the interactive chat
  advisor-chat -p \"how do I budget?\"    Ask one question, print the reply
  advisor-chat -p -                     Read the question from stdin
  advisor-chat config                   Show config paths and status
  advisor-chat config set-api-key KEY   Store the API key
  advisor-chat completions bash         Generate bash completions

ENVIRONMENT:
  MISTRAL_API_KEY        API key (required unless stored)
  ADVISOR_BASE_URL       API base URL (default https://api.mistral.ai/v1)
  ADVISOR_MODEL          Model ID (default mistral-large-latest)
  ADVISOR_TIMEOUT_SECS   Completion timeout in seconds (default 60)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    name = "advisor-chat",
    author,
    version,
    about = "Financial advisor chat powered by a hosted language model",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single prompt then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Ask one question and print the reply (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Override model for this run
    #[arg(short = 'm', long, help = "Model ID (e.g. mistral-small-latest)")]
    pub model: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show config paths, endpoint, model, and API key status
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Store the API key in the config directory (reads stdin when KEY is omitted)
    SetApiKey { key: Option<String> },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when the interactive TUI will own the terminal.
    pub fn is_interactive(&self) -> bool {
        self.command.is_none() && self.prompt.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_from_flags() {
        let args = Args::parse_from(["advisor-chat"]);
        assert_eq!(args.log_level(), "warn");
        let args = Args::parse_from(["advisor-chat", "-vv"]);
        assert_eq!(args.log_level(), "debug");
        let args = Args::parse_from(["advisor-chat", "-q", "-v"]);
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn prompt_mode_is_not_interactive() {
        let args = Args::parse_from(["advisor-chat", "-p", "hi", "-m", "mistral-small-latest"]);
        assert!(!args.is_interactive());
        assert_eq!(args.prompt.as_deref(), Some("hi"));
        assert_eq!(args.model.as_deref(), Some("mistral-small-latest"));
        assert!(Args::parse_from(["advisor-chat"]).is_interactive());
    }

    #[test]
    fn config_set_api_key_parses() {
        let args = Args::parse_from(["advisor-chat", "config", "set-api-key", "sk-1"]);
        match args.command {
            Some(Commands::Config {
                action: Some(ConfigAction::SetApiKey { key }),
            }) => assert_eq!(key.as_deref(), Some("sk-1")),
            _ => panic!("expected config set-api-key"),
        }
    }
}
