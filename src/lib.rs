//! grooved - music player daemon built on mpv.
//!
//! The daemon keeps an mpv instance running, drives it through the player
//! control core and exposes the core on the D-Bus session bus, where
//! `groovectl` and other clients control it.
//!
//! - Player control core with a status state machine that follows the
//!   backend's events
//! - Random track selection from a beets library
//! - Desktop notifications on track changes
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use grooved::services::{
//!     FreedesktopNotifier, MpvIpc, MpvOptions, Player, PlayerOptions, SqliteCatalog,
//! };
//!
//! # async fn run() -> grooved::Result<()> {
//! let connection = zbus::Connection::session().await?;
//! let backend = MpvIpc::spawn(&MpvOptions::baseline()).await?;
//!
//! let player = Player::start(
//!     Arc::new(backend),
//!     Arc::new(SqliteCatalog::new()),
//!     Arc::new(FreedesktopNotifier::new(connection)),
//!     PlayerOptions::default(),
//! )
//! .await?;
//!
//! player.add_track("/music/song.flac", true).await?;
//! # Ok(())
//! # }
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command implementations for `groovectl`.
pub mod cli;

/// Player, backend and transport services.
pub mod services;

/// Logging initialisation.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{GroovedError, Result};
