// SPDX-License-Identifier: Apache-2.0

//! Blocking alert dialogs.
//!
//! In an interactive terminal the alert waits for its single action to be
//! picked; otherwise it is written to stderr and the command carries on.

use anyhow::{Context, Result};
use console::style;
use dialoguer::Select;
use repolikes_core::Alert;

use crate::cli::{OutputContext, OutputFormat};

/// Shows `alert` and waits for it to be dismissed when a user is present.
///
/// Structured formats skip the dialog; the alert is part of their payload.
pub fn show_alert(alert: &Alert, ctx: &OutputContext) -> Result<()> {
    if !matches!(ctx.format, OutputFormat::Text) {
        return Ok(());
    }

    eprintln!();
    eprintln!("{}", style(alert.title).red().bold());
    eprintln!("{}", alert.message);

    if ctx.is_interactive() {
        Select::new()
            .items(&[alert.action])
            .default(0)
            .interact()
            .context("Failed to read alert acknowledgement")?;
    }
    Ok(())
}
