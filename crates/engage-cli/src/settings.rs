//! Settings and chatbot-prompt subcommands.

use clap::{Subcommand, ValueEnum};
use engage_api::ApiClient;
use engage_core::types::{BusinessProfile, SettingKind};

/// Which metadata list a settings mutation targets.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum KindArg {
    Category,
    Status,
}

impl From<KindArg> for SettingKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Category => SettingKind::Category,
            KindArg::Status => SettingKind::Status,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum SettingsCommands {
    /// Print categories, statuses, and the business profile
    Show,
    /// Add a category or status
    Add { kind: KindArg, name: String },
    /// Rename a category or status
    Rename {
        kind: KindArg,
        name: String,
        new_name: String,
    },
    /// Delete a category or status
    Remove { kind: KindArg, name: String },
    /// Update the business profile
    SetProfile {
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum PromptCommands {
    /// Print the current chatbot system prompt
    Show,
    /// Replace the chatbot system prompt
    Set { prompt: String },
}

pub(crate) async fn run_settings(
    command: SettingsCommands,
    client: &ApiClient,
) -> anyhow::Result<()> {
    match command {
        SettingsCommands::Show => {
            let settings = client.get_settings().await?;
            println!("categories: {}", settings.categories.join(", "));
            println!("statuses:   {}", settings.statuses.join(", "));
            let profile = &settings.business_profile;
            println!(
                "profile:    {} / {}",
                crate::fmt_opt(profile.company_name.as_deref()),
                crate::fmt_opt(profile.phone_number.as_deref()),
            );
        }
        SettingsCommands::Add { kind, name } => {
            client.add_setting(kind.into(), &name).await?;
            println!("added {kind:?} {name:?}");
        }
        SettingsCommands::Rename {
            kind,
            name,
            new_name,
        } => {
            client.rename_setting(kind.into(), &name, &new_name).await?;
            println!("renamed {kind:?} {name:?} to {new_name:?}");
        }
        SettingsCommands::Remove { kind, name } => {
            client.delete_setting(kind.into(), &name).await?;
            println!("removed {kind:?} {name:?}");
        }
        SettingsCommands::SetProfile {
            company_name,
            phone_number,
        } => {
            let profile = BusinessProfile {
                company_name,
                company_logo: None,
                phone_number,
            };
            client.update_profile(&profile).await?;
            println!("profile updated");
        }
    }
    Ok(())
}

pub(crate) async fn run_prompt(command: PromptCommands, client: &ApiClient) -> anyhow::Result<()> {
    match command {
        PromptCommands::Show => {
            let prompt = client.chatbot_prompt().await?;
            println!("{prompt}");
        }
        PromptCommands::Set { prompt } => {
            client.set_chatbot_prompt(&prompt).await?;
            println!("prompt updated");
        }
    }
    Ok(())
}
