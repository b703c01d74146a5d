//! Adapter around the mpv media engine.
//!
//! The player core only sees the [`Backend`] trait; [`MpvIpc`] implements it
//! by running mpv as a child process and talking JSON over its IPC socket.

/// Backend trait consumed by the player core
pub mod backend;
/// Adapter error types
pub mod error;
/// Engine events
pub mod event;
/// JSON IPC client
pub mod ipc;
/// Typed property values
pub mod node;
/// Startup options
pub mod options;

pub use backend::Backend;
pub use error::BackendError;
pub use event::MpvEvent;
pub use ipc::MpvIpc;
pub use node::Node;
pub use options::MpvOptions;
