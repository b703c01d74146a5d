//! Random track selection from the music library.

/// Catalog error types
pub mod error;
/// SQLite library implementation
pub mod sqlite;

use async_trait::async_trait;

pub use error::CatalogError;
pub use sqlite::SqliteCatalog;

/// Picks tracks from a persisted library.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Returns one track path chosen uniformly at random from `library`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Unreachable` if the library cannot be read and
    /// `CatalogError::Empty` if it holds no tracks.
    async fn random_track(&self, library: &str) -> Result<String, CatalogError>;
}
