//! CLI for the viewtrack view tracker.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use viewtrack_core::aggregator::ViewAggregator;
use viewtrack_core::config;
use viewtrack_core::recorder::ViewRecorder;
use viewtrack_core::store::ViewStore;

use commands::{run_add_item, run_completions, run_items, run_record, run_report};

/// Top-level CLI for the viewtrack view tracker.
#[derive(Debug, Parser)]
#[command(name = "viewtrack")]
#[command(about = "viewtrack: unique view recording and windowed view reports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Record a view of a content item by a visitor.
    Record {
        /// Content item id.
        item_id: i64,
        /// Visitor key, e.g. the client network address.
        visitor: String,
    },

    /// Show per-item view counts over a lookback window.
    Report {
        /// Window name: 1day, 7days, 1month, 1year. Unrecognized names
        /// fall back to 1day.
        #[arg(long)]
        window: Option<String>,
        /// Emit the rows as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Add a content item to the catalog.
    AddItem {
        /// Human-readable title shown on reports.
        title: String,
    },

    /// List catalog items.
    Items,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Completions need neither config nor the store.
        if let CliCommand::Completions { shell } = &cli.command {
            run_completions(*shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let store = ViewStore::open_default(cfg.max_db_connections).await?;

        match cli.command {
            CliCommand::Record { item_id, visitor } => {
                let recorder = ViewRecorder::new(store);
                run_record(&recorder, item_id, &visitor).await?;
            }
            CliCommand::Report { window, json } => {
                let aggregator = ViewAggregator::new(store.clone());
                run_report(&store, &aggregator, &cfg, window.as_deref(), json).await?;
            }
            CliCommand::AddItem { title } => run_add_item(&store, &title).await?,
            CliCommand::Items => run_items(&store).await?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
