// SPDX-License-Identifier: Apache-2.0

//! View model for repository cards.
//!
//! Front-ends render [`RepositoryCard`]s instead of raw records so every
//! platform shows the same labels and exposes the same test identifiers.

use serde::Serialize;

use crate::repository::{Repository, RepositoryId};

/// Label of the like control.
pub const LIKE_BUTTON_LABEL: &str = "Curtir";

/// A repository as displayed on the list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryCard {
    /// Record identifier; the like control acts on it.
    pub id: RepositoryId,
    /// Display title.
    pub title: String,
    /// Technology tags, in display order.
    pub techs: Vec<String>,
    /// Raw like counter.
    pub likes: u64,
    /// Localized like count, e.g. "3 curtidas".
    pub likes_label: String,
    /// Identifier of the like count element.
    pub likes_test_id: String,
    /// Identifier of the like control.
    pub like_button_test_id: String,
    /// Label of the like control.
    pub like_button_label: &'static str,
}

impl From<&Repository> for RepositoryCard {
    fn from(repo: &Repository) -> Self {
        Self {
            id: repo.id.clone(),
            title: repo.title.clone(),
            techs: repo.techs.clone(),
            likes: repo.likes,
            likes_label: likes_label(repo.likes),
            likes_test_id: likes_test_id(&repo.id),
            like_button_test_id: like_button_test_id(&repo.id),
            like_button_label: LIKE_BUTTON_LABEL,
        }
    }
}

/// Formats a like count in Portuguese.
#[must_use]
pub fn likes_label(likes: u64) -> String {
    if likes == 1 {
        "1 curtida".to_string()
    } else {
        format!("{likes} curtidas")
    }
}

/// Identifier of the like count element for `id`.
#[must_use]
pub fn likes_test_id(id: &RepositoryId) -> String {
    format!("repository-likes-{id}")
}

/// Identifier of the like control for `id`.
#[must_use]
pub fn like_button_test_id(id: &RepositoryId) -> String {
    format!("like-button-{id}")
}

/// Builds cards for `repositories`, keeping their order.
#[must_use]
pub fn cards(repositories: &[Repository]) -> Vec<RepositoryCard> {
    repositories.iter().map(RepositoryCard::from).collect()
}
