//! Engagement subcommands.

use clap::Subcommand;
use engage_api::{ApiClient, ApiError};
use engage_core::types::{BulkField, Engagement, NewEngagement};
use engage_store::{EngagementBackend, ListController, MetadataApi, MetadataCache};

#[derive(Debug, Subcommand)]
pub(crate) enum EngagementCommands {
    /// List engagements, optionally narrowed by search text, status, or
    /// category
    List {
        /// Substring matched against name and notes
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        status: String,
        #[arg(long, default_value = "")]
        category: String,
    },
    /// Create an engagement
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show one engagement in full
    Show { id: String },
    /// Print the message history of one engagement
    Replies { id: String },
    /// Reassign the category of one engagement
    SetCategory {
        id: String,
        #[arg(long)]
        value: String,
    },
    /// Delete one engagement
    Remove { id: String },
    /// Set the status of several engagements at once
    BulkStatus {
        #[arg(long)]
        value: String,
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
    },
    /// Set the category of several engagements at once
    BulkCategory {
        #[arg(long)]
        value: String,
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
    },
    /// Delete several engagements at once
    BulkDelete {
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
    },
    /// Print the configured categories and statuses plus the total message
    /// count
    Stats,
}

pub(crate) async fn run(
    command: EngagementCommands,
    client: ApiClient,
    page_size: u32,
) -> anyhow::Result<()> {
    match command {
        EngagementCommands::List {
            search,
            status,
            category,
        } => {
            let mut ctl = ListController::new(EngagementBackend::new(client), page_size);
            ctl.set_search(search);
            ctl.set_status_filter(status);
            ctl.set_category_filter(category);
            ctl.refresh().await?;
            print_engagements(&ctl.filtered());
        }
        EngagementCommands::Add {
            name,
            status,
            category,
            notes,
        } => {
            let payload = NewEngagement {
                name,
                status,
                category,
                notes,
            };
            client.create_engagement(&payload).await?;
            println!("engagement created");
        }
        EngagementCommands::Show { id } => match client.get_engagement(&id).await {
            Ok(engagement) => print_detail(&engagement),
            Err(ApiError::NotFound { id }) => println!("engagement {id} not found"),
            Err(error) => return Err(error.into()),
        },
        EngagementCommands::Replies { id } => {
            let replies = client.list_replies(&id).await?;
            if replies.is_empty() {
                println!("no messages");
            }
            for reply in &replies {
                println!(
                    "[{}] {} ({}): {}",
                    crate::fmt_opt(reply.time.as_deref()),
                    crate::fmt_opt(reply.sender.as_deref()),
                    crate::fmt_opt(reply.channel.as_deref()),
                    crate::fmt_opt(reply.text.as_deref()),
                );
            }
        }
        EngagementCommands::SetCategory { id, value } => {
            client.update_engagement_category(&id, &value).await?;
            println!("category set to {value:?} on {id}");
        }
        EngagementCommands::Remove { id } => {
            client.delete_engagement(&id).await?;
            println!("deleted {id}");
        }
        EngagementCommands::BulkStatus { value, ids } => {
            bulk_update(client, page_size, BulkField::Status, &value, &ids).await?;
        }
        EngagementCommands::BulkCategory { value, ids } => {
            bulk_update(client, page_size, BulkField::Category, &value, &ids).await?;
        }
        EngagementCommands::BulkDelete { ids } => {
            let mut ctl = ListController::new(EngagementBackend::new(client), page_size);
            select_ids(&mut ctl, &ids).await?;
            let count = ctl.selected_count();
            ctl.bulk_delete().await?;
            println!("deleted {count} engagement(s)");
        }
        EngagementCommands::Stats => {
            let mut cache = MetadataCache::new(MetadataApi::new(client));
            cache.load().await?;
            println!("categories: {}", cache.categories().join(", "));
            println!("statuses:   {}", cache.statuses().join(", "));
            println!("messages:   {}", cache.message_count());
        }
    }
    Ok(())
}

async fn bulk_update(
    client: ApiClient,
    page_size: u32,
    field: BulkField,
    value: &str,
    ids: &[String],
) -> anyhow::Result<()> {
    let mut ctl = ListController::new(EngagementBackend::new(client), page_size);
    select_ids(&mut ctl, ids).await?;
    let count = ctl.selected_count();
    ctl.bulk_update(field, value).await?;
    println!("{field} set to {value:?} on {count} engagement(s)");
    Ok(())
}

/// Loads the collection, then selects the requested ids. Unknown ids are
/// skipped with a warning rather than failing the whole batch.
async fn select_ids(
    ctl: &mut ListController<Engagement, EngagementBackend>,
    ids: &[String],
) -> anyhow::Result<()> {
    ctl.refresh().await?;
    for id in ids {
        if ctl.store().ids().any(|existing| existing == id.as_str()) {
            ctl.toggle(id);
        } else {
            tracing::warn!(%id, "engagement not found; skipping");
        }
    }
    Ok(())
}

fn print_engagements(engagements: &[&Engagement]) {
    if engagements.is_empty() {
        println!("no engagements match");
        return;
    }
    println!(
        "{:<26} {:<12} {:<14} {:>6} {:>6} {:<12} NAME",
        "ID", "STATUS", "CATEGORY", "MSGS", "RESP%", "LAST CONTACT"
    );
    for engagement in engagements {
        let response_rate = engagement
            .response_rate
            .map_or_else(|| "\u{2014}".to_owned(), |r| format!("{r:.0}"));
        println!(
            "{:<26} {:<12} {:<14} {:>6} {:>6} {:<12} {}",
            engagement.id,
            crate::fmt_opt(engagement.status.as_deref()),
            crate::fmt_opt(engagement.category.as_deref()),
            engagement.total_messages,
            response_rate,
            crate::fmt_date(engagement.last_contact_date),
            engagement.name,
        );
    }
    println!("({} engagement(s))", engagements.len());
}

fn print_detail(engagement: &Engagement) {
    println!("id:           {}", engagement.id);
    println!("name:         {}", engagement.name);
    println!(
        "status:       {}",
        crate::fmt_opt(engagement.status.as_deref())
    );
    println!(
        "category:     {}",
        crate::fmt_opt(engagement.category.as_deref())
    );
    println!("messages:     {}", engagement.total_messages);
    if let Some(rate) = engagement.response_rate {
        println!("response:     {rate:.1}%");
    }
    if let Some(hours) = engagement.avg_response_time_hours {
        println!("avg response: {hours:.1}h");
    }
    println!(
        "last contact: {}",
        crate::fmt_date(engagement.last_contact_date)
    );
    println!(
        "assignee:     {}",
        crate::fmt_opt(engagement.assignee.as_deref())
    );
    println!(
        "client:       {}",
        crate::fmt_opt(engagement.client.as_deref())
    );
    if let Some(notes) = &engagement.notes {
        println!("notes:        {notes}");
    }
}
