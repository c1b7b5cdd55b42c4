//! eventcal CLI entry point.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use eventcal_core::calendar::{ImportRow, SearchRangeRequest, SearchTitleRequest, User};

use eventcal::cli::{Cli, Commands, OutputFormat};
use eventcal::config::Config;
use eventcal::handlers::{calendar, import, search};
use eventcal::mock_data;
use eventcal::output::{json, pretty};
use eventcal::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs on stderr, command output on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventcal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let state = AppState::new(&config);
    let user = state
        .register_user(User::new(&cli.user, format!("{}@localhost", cli.user)))
        .await?;

    let now = Local::now().naive_local();

    if cli.demo {
        let count = mock_data::seed_demo_data(&state, &user, now.date()).await?;
        tracing::info!(events = count, "Loaded demo data");
    }

    if let Some(path) = &cli.import {
        let rows = read_import_rows(path)?;
        let report = import::import_events(&state, user.id, rows).await?;
        if cli.format == OutputFormat::Pretty {
            println!("{}\n", pretty::format_import_report(&report));
        }
    }

    run(&state, user.id, cli.command, cli.format).await
}

/// Read import rows from a JSON array file.
fn read_import_rows(path: &Path) -> Result<Vec<ImportRow>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file {}", path.display()))?;
    let rows = serde_json::from_str(&contents)
        .with_context(|| format!("Malformed import file {}", path.display()))?;
    Ok(rows)
}

async fn run(state: &AppState, user_id: Uuid, command: Commands, format: OutputFormat) -> Result<()> {
    let now = Local::now().naive_local();

    match command {
        Commands::Month { month } => {
            let view = calendar::month_view(state, user_id, month.as_deref(), now.date()).await?;
            match format {
                OutputFormat::Json => println!("{}", json::format_json(&view)?),
                OutputFormat::Pretty => println!("{}", pretty::format_month_view(&view)),
            }
        }
        Commands::List { status } => {
            let events = calendar::list_events(state, user_id, status.map(Into::into), now).await?;
            match format {
                OutputFormat::Json => println!("{}", json::format_json(&events)?),
                OutputFormat::Pretty => println!("{}", pretty::format_events(&events)),
            }
        }
        Commands::Feed => {
            let feed = calendar::calendar_feed(state, user_id).await?;
            match format {
                OutputFormat::Json => println!("{}", json::format_json(&feed)?),
                OutputFormat::Pretty => println!("{}", pretty::format_feed(&feed)),
            }
        }
        Commands::SearchRange { from, to } => {
            let events =
                search::search_by_range(state, user_id, SearchRangeRequest::new(from, to)).await?;
            match format {
                OutputFormat::Json => println!("{}", json::format_json(&events)?),
                OutputFormat::Pretty => println!("{}", pretty::format_events(&events)),
            }
        }
        Commands::SearchTitle { title } => {
            let events = search::search_by_title(state, SearchTitleRequest::new(title)).await?;
            match format {
                OutputFormat::Json => println!("{}", json::format_json(&events)?),
                OutputFormat::Pretty => println!("{}", pretty::format_events(&events)),
            }
        }
    }

    Ok(())
}
