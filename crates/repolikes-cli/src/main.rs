// SPDX-License-Identifier: Apache-2.0

//! repolikes - browse repositories and like them.
//!
//! A terminal front-end for the repositories API: one card per repository,
//! a like control per card, and blocking alerts when the API fails.

mod cli;
mod commands;
mod dialog;
mod errors;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use repolikes_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);
    logging::init_logging(output_ctx.is_interactive());

    // The base URL is read once, here, and fixed for the rest of the run
    let mut config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    if let Some(base_url) = &cli.base_url {
        config.api.base_url.clone_from(base_url);
        debug!("Overriding API base URL to: {base_url}");
    }

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match commands::run(cli.command, output_ctx, &config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            std::process::exit(1);
        }
    }
}
