//! Common building blocks shared by the services

/// Watchable values with change streams
pub mod property;
// Bus getter fallbacks
#[macro_use]
mod macros;

pub use property::Property;
