//! CLI for the urlkit URL manipulation toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlkit_core::config;

use commands::{
    run_download, run_final_url, run_normalize, run_parse, run_query_get, run_query_remove,
    run_query_set, run_resolve,
};

/// Top-level CLI for the urlkit URL manipulation toolkit.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: decompose, rewrite, and resolve URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decompose a URL and print its components.
    Parse {
        /// URL to decompose.
        url: String,
    },

    /// Canonicalize a URL (dot segments, redundant slashes, encoding).
    Normalize {
        /// URL to normalize.
        url: String,
    },

    /// Resolve a relative reference against a base URL.
    Resolve {
        /// Base URL.
        base: String,
        /// Relative reference (may itself be absolute).
        relative: String,
    },

    /// Print the value of one query parameter.
    QueryGet {
        /// URL to inspect.
        url: String,
        /// Parameter name.
        name: String,
    },

    /// Add or replace a query parameter and print the rewritten URL.
    QuerySet {
        /// URL to rewrite.
        url: String,
        /// Parameter name.
        name: String,
        /// Parameter value; omitted means empty.
        value: Option<String>,
    },

    /// Remove a query parameter and print the rewritten URL.
    QueryRemove {
        /// URL to rewrite.
        url: String,
        /// Parameter name.
        name: String,
    },

    /// Follow redirects and print the terminal URL.
    FinalUrl {
        /// URL to probe.
        url: String,
        /// Also print every hop in the chain.
        #[arg(long)]
        details: bool,
    },

    /// GET a URL (status must be 200) and write the body to a file.
    Download {
        /// URL to download.
        url: String,
        /// Output path; defaults to the URL's last path segment.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Parse { url } => run_parse(&url)?,
            CliCommand::Normalize { url } => run_normalize(&url)?,
            CliCommand::Resolve { base, relative } => run_resolve(&base, &relative)?,
            CliCommand::QueryGet { url, name } => run_query_get(&url, &name)?,
            CliCommand::QuerySet { url, name, value } => {
                run_query_set(&url, &name, value.as_deref())?;
            }
            CliCommand::QueryRemove { url, name } => run_query_remove(&url, &name)?,
            CliCommand::FinalUrl { url, details } => {
                // Config is only needed (and created on first run) for the
                // commands that touch the network.
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_final_url(&cfg, &url, details)?;
            }
            CliCommand::Download { url, output } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_download(&cfg, &url, output.as_deref())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
