// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! These types allow command handlers to return data instead of printing
//! directly, improving testability and separation of concerns.

use repolikes_core::{Alert, ListScreen, RepositoryApi, RepositoryCard, ScreenPhase};
use serde::Serialize;

/// Snapshot of the list screen after a command ran.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScreenResult {
    /// Whether the list was loaded.
    pub phase: ScreenPhase,
    /// Cards in display order.
    pub repositories: Vec<RepositoryCard>,
    /// Alerts raised while the command ran, in order.
    pub alerts: Vec<Alert>,
}

impl ScreenResult {
    /// Captures the current screen together with the alerts it raised.
    pub fn capture<A: RepositoryApi>(screen: &ListScreen<A>, alerts: Vec<Alert>) -> Self {
        Self {
            phase: screen.state().phase(),
            repositories: screen.cards(),
            alerts,
        }
    }
}
