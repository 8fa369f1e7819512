//! Command line interface for the engage lead/engagement backend.
//!
//! Subcommands map one-to-one onto the dashboard's screens: `leads` and
//! `engagements` drive a [`engage_store::ListController`] the way the list
//! pages do, `settings` and `prompt` call the settings endpoints directly.

mod engagements;
mod leads;
mod settings;

use clap::{Parser, Subcommand};
use engage_api::ApiClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "engage-cli")]
#[command(about = "Lead and engagement management from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Lead operations
    #[command(subcommand)]
    Leads(leads::LeadCommands),
    /// Engagement operations
    #[command(subcommand)]
    Engagements(engagements::EngagementCommands),
    /// Category, status, and profile settings
    #[command(subcommand)]
    Settings(settings::SettingsCommands),
    /// Chatbot system prompt
    #[command(subcommand)]
    Prompt(settings::PromptCommands),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = engage_core::load_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let client = ApiClient::new(
        &config.api_url,
        &config.auth_token,
        config.request_timeout_secs,
    )?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Leads(command) => leads::run(command, client, config.page_size).await,
        Commands::Engagements(command) => {
            engagements::run(command, client, config.page_size).await
        }
        Commands::Settings(command) => settings::run_settings(command, &client).await,
        Commands::Prompt(command) => settings::run_prompt(command, &client).await,
    }
}

/// Renders an optional field as `—` when absent.
pub(crate) fn fmt_opt(value: Option<&str>) -> &str {
    value.unwrap_or("\u{2014}")
}

/// Renders an optional timestamp as `YYYY-MM-DD`.
pub(crate) fn fmt_date(value: Option<chrono::DateTime<chrono::Utc>>) -> String {
    value.map_or_else(|| "\u{2014}".to_owned(), |d| d.format("%Y-%m-%d").to_string())
}
