mod adapters;
mod app;
mod cli;
mod core;
mod global_constants;
mod infrastructure;
mod ports;
mod presentation;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, CliCommand, ConfigAction};
use crate::core::models::UserSettings;
use crate::global_constants::LOG_TAG_APP;

fn load_effective_settings(cli: &Cli) -> Result<UserSettings> {
    let mut settings = UserSettings::load(cli.config.as_deref())
        .context("Failed to load settings")?;
    settings.apply_overrides(cli.resolve_api_key(), cli.model.clone());
    Ok(settings)
}

fn run_config_action(cli: &Cli, action: &ConfigAction) -> Result<ExitCode> {
    match action {
        ConfigAction::Init { force } => {
            let settings_path = match cli.config.clone() {
                Some(path) => path,
                None => UserSettings::get_settings_file_path()?,
            };

            if settings_path.exists() && !force {
                anyhow::bail!(
                    "{} already exists, pass --force to overwrite it",
                    settings_path.display()
                );
            }

            let saved_path = UserSettings::default().save(Some(settings_path.as_path()))?;
            println!("Wrote default settings to {}", saved_path.display());
        }
        ConfigAction::Show => {
            let settings = load_effective_settings(cli)?;
            let mut shown = serde_json::to_value(&settings)?;
            shown["api_key"] = serde_json::Value::String(settings.masked_api_key());
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("{} Starting {}", LOG_TAG_APP, global_constants::APPLICATION_NAME);

    match &cli.command {
        CliCommand::Config { action } => run_config_action(&cli, action),
        CliCommand::Analyze { image, json } => {
            let settings = load_effective_settings(&cli)?;
            let mut app = app::ProLensApp::build(&settings)?;

            let succeeded = app
                .run_single_analysis(
                    image,
                    *json,
                    &mut std::io::stdout(),
                    &mut std::io::stderr(),
                )
                .await?;

            Ok(if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        CliCommand::Session => {
            let settings = load_effective_settings(&cli)?;
            let mut app = app::ProLensApp::build(&settings)?;

            println!("{}", global_constants::STARTUP_BANNER);

            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            app.run_session(stdin, &mut std::io::stdout()).await?;

            Ok(ExitCode::SUCCESS)
        }
    }
}
