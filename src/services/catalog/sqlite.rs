use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, instrument};

use super::{Catalog, CatalogError};

const RANDOM_TRACK_QUERY: &str = "SELECT CAST(path AS TEXT) FROM items ORDER BY RANDOM() LIMIT 1";

/// Catalog backed by a beets-style SQLite library (`items.path`).
///
/// A connection is opened read-only for each lookup, so the library can be
/// rewritten by its owner while the daemon runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteCatalog;

impl SqliteCatalog {
    /// Creates the catalog.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Catalog for SqliteCatalog {
    #[instrument(skip(self))]
    async fn random_track(&self, library: &str) -> Result<String, CatalogError> {
        if library.is_empty() {
            return Err(CatalogError::Unreachable("no library configured".to_string()));
        }

        let options = SqliteConnectOptions::new()
            .filename(Path::new(library))
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| CatalogError::Unreachable(e.to_string()))?;

        let path: Option<Option<String>> = sqlx::query_scalar(RANDOM_TRACK_QUERY)
            .fetch_optional(&pool)
            .await
            .map_err(|e| CatalogError::Unreachable(e.to_string()))?;

        pool.close().await;

        match path.flatten() {
            Some(path) if !path.is_empty() => {
                debug!(%path, "Picked random track");
                Ok(path)
            }
            _ => Err(CatalogError::Empty),
        }
    }
}
