// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # repolikes Core
//!
//! Core library for repolikes - browse repositories served by a remote API
//! and like them.
//!
//! This crate provides reusable components for:
//! - The repositories HTTP API (list and like)
//! - The list screen: state, transitions and alerts
//! - Card view models shared by every front-end
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use repolikes_core::{HttpRepositoryApi, ListScreen, RepositoryId, load_config};
//! use anyhow::Result;
//!
//! # async fn example() -> Result<()> {
//! let config = load_config()?;
//! let mut screen = ListScreen::new(HttpRepositoryApi::new(&config.api.base_url));
//!
//! if let Some(alert) = screen.mount().await {
//!     eprintln!("{}: {}", alert.title, alert.message);
//! }
//! if let Some(alert) = screen.like(&RepositoryId::Number(1)).await {
//!     eprintln!("{}: {}", alert.title, alert.message);
//! }
//! for card in screen.cards() {
//!     println!("{} - {}", card.title, card.likes_label);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - HTTP client and the `RepositoryApi` seam
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`repository`] - Repository records
//! - [`screen`] - List screen state and transitions
//! - [`view`] - Card view models

// ============================================================================
// Error Handling
// ============================================================================

pub use error::RepoLikesError;

/// Convenience Result type for repolikes operations.
///
/// This is equivalent to `std::result::Result<T, RepoLikesError>`.
pub type Result<T> = std::result::Result<T, RepoLikesError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{ApiConfig, AppConfig, UiConfig, config_dir, config_file_path, load_config};

// ============================================================================
// API Client
// ============================================================================

pub use client::{ApiClient, HttpRepositoryApi, RepositoryApi};

// ============================================================================
// Data Model
// ============================================================================

pub use repository::{Repository, RepositoryId};

// ============================================================================
// List Screen
// ============================================================================

pub use screen::{Alert, LIKE_FAILED, LOAD_FAILED, ListScreen, ScreenPhase, ScreenState};
pub use view::{RepositoryCard, likes_label};

// ============================================================================
// Modules
// ============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod repository;
pub mod screen;
pub mod view;
