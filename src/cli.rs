use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::global_constants::{ENV_API_KEY, ENV_API_KEY_FALLBACK};

/// Point your camera at a scene, get professional camera settings back.
#[derive(Parser, Debug)]
#[command(name = "prolens")]
#[command(about = "📸 Camera setting recommendations from a photo, powered by Gemini")]
pub struct Cli {
    /// Gemini API key (falls back to the API_KEY variable, then the config file)
    #[arg(long, global = true, env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for the analysis
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze a single photo and print the recommended settings
    Analyze {
        /// Image file path, or a data:image/...;base64, URL
        image: String,

        /// Print the settings as JSON instead of the settings card
        #[arg(long)]
        json: bool,
    },
    /// Interactive session: analyze photos one after another
    Session,
    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective settings with the API key masked
    Show,
}

impl Cli {
    /// Command-line flag or `GEMINI_API_KEY` first, then `API_KEY`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(ENV_API_KEY_FALLBACK)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_with_json_flag() {
        let cli = Cli::try_parse_from(["prolens", "analyze", "scene.jpg", "--json"]).unwrap();

        match cli.command {
            CliCommand::Analyze { image, json } => {
                assert_eq!(image, "scene.jpg");
                assert!(json);
            }
            other => panic!("Expected analyze command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "prolens",
            "session",
            "--model",
            "gemini-2.5-flash",
            "--config",
            "/tmp/prolens.json",
        ])
        .unwrap();

        assert!(matches!(cli.command, CliCommand::Session));
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/prolens.json")));
    }

    #[test]
    fn test_parse_config_init_force() {
        let cli = Cli::try_parse_from(["prolens", "config", "init", "--force"]).unwrap();

        assert!(matches!(
            cli.command,
            CliCommand::Config {
                action: ConfigAction::Init { force: true }
            }
        ));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["prolens"]).is_err());
    }

    #[test]
    fn test_resolve_api_key_prefers_flag() {
        let cli =
            Cli::try_parse_from(["prolens", "--api-key", "flag-key", "session"]).unwrap();

        assert_eq!(cli.resolve_api_key().as_deref(), Some("flag-key"));
    }
}
