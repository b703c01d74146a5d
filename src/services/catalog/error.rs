/// Errors that can occur while picking a track from the catalog
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The library database could not be opened or queried
    #[error("catalog unreachable: {0}")]
    Unreachable(String),

    /// The library has no tracks to choose from
    #[error("catalog is empty")]
    Empty,
}
