//! CLI for the ir_datasets explorer core.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use irx_core::config;
use irx_core::url_state::QueryFilters;
use std::path::PathBuf;

use commands::{run_get, run_state, run_topics, run_update};

/// Top-level CLI for the explorer.
#[derive(Debug, Parser)]
#[command(name = "irx")]
#[command(about = "IRX: ir_datasets explorer with range-cached JSONL access", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/irx/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Query-string filters shared by `update` and `topics`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Topic ids (comma-separated).
    #[arg(long)]
    pub topic: Option<String>,
    /// Dataset ids (comma-separated).
    #[arg(long)]
    pub dataset: Option<String>,
    /// Free-text query.
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch one record of a remote JSONL resource by inclusive byte range.
    Get {
        /// Resource path; paths not starting with "http" are resolved against the deployment.
        path: String,
        /// First byte (inclusive).
        start: u64,
        /// Last byte (inclusive).
        end: u64,
    },

    /// Decode the navigation state carried by a URL.
    State {
        /// Full URL or path with query string.
        href: String,
    },

    /// Rewrite a URL's query string with new filters (unset filters are dropped).
    Update {
        /// Current URL.
        href: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Document ids (comma-separated).
        #[arg(long)]
        doc_ids: Option<String>,
    },

    /// Filter a local topics JSONL file.
    Topics {
        /// Path to the topics file.
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print the distinct values of this field instead of topics.
        #[arg(long, value_name = "KEY")]
        unique: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get { path, start, end } => run_get(&cfg, &path, start, end).await?,
            CliCommand::State { href } => run_state(&href)?,
            CliCommand::Update {
                href,
                filters,
                doc_ids,
            } => {
                let filters = QueryFilters {
                    topic: filters.topic,
                    dataset: filters.dataset,
                    query: filters.query,
                    doc_ids,
                };
                run_update(&href, &filters)?;
            }
            CliCommand::Topics {
                file,
                filters,
                unique,
            } => run_topics(&file, &filters, unique.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
