// SPDX-License-Identifier: Apache-2.0

//! Repository records as served by the repositories API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a repository record.
///
/// The API may hand out integer or string identifiers; both are accepted
/// and displayed as their bare value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryId {
    /// Numeric identifier.
    Number(i64),
    /// Textual identifier (e.g. a UUID).
    Text(String),
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RepositoryId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RepositoryId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl RepositoryId {
    /// Parses a user-supplied identifier.
    ///
    /// Integer input becomes [`RepositoryId::Number`], anything else is kept as text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse::<i64>()
            .map_or_else(|_| Self::Text(raw.to_string()), Self::Number)
    }

    /// Returns true if `raw` names this identifier, whichever form it has.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Self::Number(n) => raw.parse::<i64>().is_ok_and(|r| r == *n),
            Self::Text(s) => s == raw,
        }
    }
}

/// A repository record with its like counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct Repository {
    /// Stable unique identifier.
    #[builder(into)]
    pub id: RepositoryId,
    /// Display title.
    #[builder(into)]
    pub title: String,
    /// Technology tags, in display order.
    #[builder(default)]
    pub techs: Vec<String>,
    /// Like counter.
    #[builder(default)]
    pub likes: u64,
}

impl Repository {
    /// Returns a copy of this record with one more like.
    #[must_use]
    pub fn liked(&self) -> Self {
        Self {
            likes: self.likes.saturating_add(1),
            ..self.clone()
        }
    }
}
