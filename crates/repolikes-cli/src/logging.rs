// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the repolikes CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging on stderr.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only (failed loads and likes)
//! cargo run -- list
//!
//! # Request-level detail
//! RUST_LOG=repolikes=debug cargo run -- list
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "repolikes=warn,repolikes_core=warn,reqwest=error";

/// Initialize the logging subsystem.
///
/// In an interactive session warnings would tear through the dialogs, so the
/// default filter is raised to `error` there; `RUST_LOG` always wins.
pub fn init_logging(interactive: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if interactive {
        "repolikes=error,repolikes_core=error,reqwest=error"
    } else {
        DEFAULT_FILTER
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
