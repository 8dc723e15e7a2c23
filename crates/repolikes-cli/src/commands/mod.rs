// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the repolikes CLI.

pub mod completion;
pub mod screen;
pub mod types;

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use repolikes_core::{AppConfig, HttpRepositoryApi, ListScreen};
use tracing::debug;

use crate::cli::{Commands, CompletionCommand, OutputContext};
use crate::output;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    let new_screen = || {
        debug!(base_url = %config.api.base_url, "Opening list screen");
        ListScreen::new(HttpRepositoryApi::new(&config.api.base_url))
    };

    match command {
        Commands::List => {
            let result = screen::run_list(new_screen(), &ctx).await?;
            output::render(&result, &ctx)
        }

        Commands::Like { ids } => {
            let result = screen::run_like(new_screen(), &ids, &ctx).await?;
            output::render(&result, &ctx)
        }

        Commands::Browse => screen::run_browse(new_screen(), &ctx).await,

        Commands::Completion(completion_cmd) => match completion_cmd {
            CompletionCommand::Generate { shell } => completion::run_generate(shell),
        },
    }
}
