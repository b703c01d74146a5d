//! Player control core.
//!
//! Turns caller intents into backend calls, follows the backend's events to
//! keep the playback status in step with what the engine is actually doing,
//! and publishes every change as a [`Notification`].

/// Caller operations
mod control;
/// Player construction and lifecycle
mod core;
/// Player error types
pub mod error;
/// Backend event handling
mod events;
/// Change notifications
pub mod notifications;
/// Read-side queries
mod queries;
/// Status transition table
pub mod state;
/// Player value types
pub mod types;

pub use self::core::Player;
pub use error::PlayerError;
pub use notifications::Notification;
pub use types::{LoopMode, PlaybackStatus, PlayerOptions, TrackPosition};
