// SPDX-License-Identifier: Apache-2.0

//! The repository list screen.
//!
//! [`ListScreen`] owns the ordered sequence of records and drives the two
//! transitions a user can trigger: loading the list on mount and liking a
//! record. Network failures never escape a transition; they become an
//! [`Alert`] the front-end must show before the user continues.
//!
//! State changes are pure functions on [`ScreenState`], keyed by record id,
//! so the local counter only moves after the server has accepted the like.

use serde::Serialize;
use tracing::{debug, warn};

use crate::client::RepositoryApi;
use crate::repository::{Repository, RepositoryId};
use crate::view::{self, RepositoryCard};

/// A blocking dialog with fixed text and a single dismissal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub message: &'static str,
    /// Label of the only action, which dismisses the dialog.
    pub action: &'static str,
}

/// Shown when the list cannot be fetched.
pub const LOAD_FAILED: Alert = Alert {
    title: "Erro de conexão",
    message: "Não foi possível buscar os repositórios",
    action: "Ok",
};

/// Shown when a like is not accepted.
pub const LIKE_FAILED: Alert = Alert {
    title: "Erro de conexão",
    message: "Não foi possível processar o like",
    action: "Ok",
};

/// Whether a load has succeeded yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenPhase {
    /// Nothing loaded (initial state, or the load failed).
    #[default]
    Empty,
    /// The server list has been received; it may still be empty.
    Loaded,
}

/// The records shown on screen, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    phase: ScreenPhase,
    repositories: Vec<Repository>,
}

impl ScreenState {
    /// State after a successful load: the server list, as given.
    #[must_use]
    pub fn loaded(repositories: Vec<Repository>) -> Self {
        Self {
            phase: ScreenPhase::Loaded,
            repositories,
        }
    }

    /// State after the server accepted a like for `id`.
    ///
    /// The matching record gets exactly one more like; every other record
    /// and the order are left alone. An unknown id yields an equal state.
    #[must_use]
    pub fn apply_like(&self, id: &RepositoryId) -> Self {
        Self {
            phase: self.phase,
            repositories: self
                .repositories
                .iter()
                .map(|repo| {
                    if repo.id == *id {
                        repo.liked()
                    } else {
                        repo.clone()
                    }
                })
                .collect(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    /// Records in display order.
    #[must_use]
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Looks up a record by raw, user-supplied id.
    #[must_use]
    pub fn find(&self, raw_id: &str) -> Option<&Repository> {
        self.repositories.iter().find(|repo| repo.id.matches(raw_id))
    }
}

/// The list screen bound to an API.
pub struct ListScreen<A> {
    api: A,
    state: ScreenState,
}

impl<A: RepositoryApi> ListScreen<A> {
    /// Creates an empty screen; call [`ListScreen::mount`] to load it.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ScreenState::default(),
        }
    }

    /// Loads the list, replacing whatever is on screen.
    ///
    /// On failure the list is left empty and [`LOAD_FAILED`] is returned.
    #[must_use = "a returned alert has to be shown to the user"]
    pub async fn mount(&mut self) -> Option<Alert> {
        match self.api.fetch_list().await {
            Ok(repositories) => {
                debug!(count = repositories.len(), "Screen loaded");
                self.state = ScreenState::loaded(repositories);
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to load repositories");
                self.state = ScreenState::default();
                Some(LOAD_FAILED)
            }
        }
    }

    /// Likes the record `id`, mirroring the increment once the server accepts it.
    ///
    /// On failure nothing changes and [`LIKE_FAILED`] is returned.
    #[must_use = "a returned alert has to be shown to the user"]
    pub async fn like(&mut self, id: &RepositoryId) -> Option<Alert> {
        match self.api.like_repository(id).await {
            Ok(_) => {
                self.state = self.state.apply_like(id);
                debug!(%id, "Like mirrored locally");
                None
            }
            Err(e) => {
                warn!(%id, error = %e, "Failed to like repository");
                Some(LIKE_FAILED)
            }
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Cards for every record, in display order.
    #[must_use]
    pub fn cards(&self) -> Vec<RepositoryCard> {
        view::cards(self.state.repositories())
    }
}
