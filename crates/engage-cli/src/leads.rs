//! Lead subcommands.

use clap::Subcommand;
use engage_api::ApiClient;
use engage_core::types::{BulkField, Lead, NewLead};
use engage_store::{LeadBackend, ListController};

#[derive(Debug, Subcommand)]
pub(crate) enum LeadCommands {
    /// List leads, optionally narrowed by search text, status, or category
    List {
        /// Substring matched against name, email, phone, and note
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        status: String,
        #[arg(long, default_value = "")]
        category: String,
        /// Keep fetching pages until the backend runs out
        #[arg(long)]
        all: bool,
    },
    /// Create a lead
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Set the status of one or more leads
    SetStatus {
        #[arg(long)]
        value: String,
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
    },
    /// Set the category of one or more leads
    SetCategory {
        #[arg(long)]
        value: String,
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
    },
    /// Delete one or more leads
    Delete {
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
    },
    /// Upload a spreadsheet of leads
    Import {
        /// Path to a .csv or .xlsx file
        file: std::path::PathBuf,
        /// Category assigned to every imported lead
        #[arg(long)]
        category: String,
    },
}

pub(crate) async fn run(
    command: LeadCommands,
    client: ApiClient,
    page_size: u32,
) -> anyhow::Result<()> {
    let mut ctl = ListController::new(LeadBackend::new(client.clone()), page_size);
    match command {
        LeadCommands::List {
            search,
            status,
            category,
            all,
        } => {
            ctl.set_search(search);
            ctl.set_status_filter(status);
            ctl.set_category_filter(category);
            ctl.refresh().await?;
            if all {
                while ctl.load_more().await? {}
            }
            print_leads(&ctl.filtered());
        }
        LeadCommands::Add {
            name,
            email,
            phone,
            status,
            category,
            note,
        } => {
            let payload = NewLead {
                name,
                email,
                phone,
                status,
                category,
                note,
            };
            ctl.create(&payload).await?;
            println!("lead created ({} loaded)", ctl.store().items().len());
        }
        LeadCommands::SetStatus { value, ids } => {
            select_ids(&mut ctl, &ids).await?;
            let count = ctl.selected_count();
            ctl.bulk_update(BulkField::Status, &value).await?;
            println!("status set to {value:?} on {count} lead(s)");
        }
        LeadCommands::SetCategory { value, ids } => {
            select_ids(&mut ctl, &ids).await?;
            let count = ctl.selected_count();
            ctl.bulk_update(BulkField::Category, &value).await?;
            println!("category set to {value:?} on {count} lead(s)");
        }
        LeadCommands::Delete { ids } => {
            select_ids(&mut ctl, &ids).await?;
            let count = ctl.selected_count();
            ctl.bulk_delete().await?;
            println!("deleted {count} lead(s)");
        }
        LeadCommands::Import { file, category } => {
            let contents = tokio::fs::read(&file).await?;
            let file_name = file
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| anyhow::anyhow!("file name is not valid UTF-8"))?;
            client.import_leads(file_name, contents, &category).await?;
            println!("import submitted for {}", file.display());
        }
    }
    Ok(())
}

/// Loads the full collection, then selects the requested ids. Unknown ids are
/// skipped with a warning rather than failing the whole batch.
async fn select_ids(
    ctl: &mut ListController<Lead, LeadBackend>,
    ids: &[String],
) -> anyhow::Result<()> {
    ctl.refresh().await?;
    while ctl.load_more().await? {}
    for id in ids {
        if ctl.store().ids().any(|existing| existing == id.as_str()) {
            ctl.toggle(id);
        } else {
            tracing::warn!(%id, "lead not found; skipping");
        }
    }
    Ok(())
}

fn print_leads(leads: &[&Lead]) {
    if leads.is_empty() {
        println!("no leads match");
        return;
    }
    println!(
        "{:<26} {:<12} {:<14} {:>6} {:<12} NAME",
        "ID", "STATUS", "CATEGORY", "SCORE", "LAST ACTIVE"
    );
    for lead in leads {
        let score = lead
            .score
            .map_or_else(|| "\u{2014}".to_owned(), |s| format!("{s:.0}"));
        println!(
            "{:<26} {:<12} {:<14} {:>6} {:<12} {}",
            lead.id,
            crate::fmt_opt(lead.status.as_deref()),
            crate::fmt_opt(lead.category.as_deref()),
            score,
            crate::fmt_date(lead.last_active),
            lead.name,
        );
    }
    println!("({} lead(s))", leads.len());
}
