use thiserror::Error;

/// Errors raised by a recipe catalog provider.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Network-level failure reaching the provider
    #[error("Failed to reach catalog: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success HTTP status
    #[error("Catalog returned HTTP {0}")]
    Status(u16),

    /// Provider answered with a payload we could not decode
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),
}

/// Errors raised by a favorites store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend rejected or failed the operation
    #[error("Favorites store failed: {0}")]
    Backend(String),
}

/// Errors surfaced by engine operations.
///
/// An empty result set is not represented here: searches that match nothing
/// resolve to [`SearchOutcome::NoMatches`](crate::SearchOutcome::NoMatches).
#[derive(Error, Debug)]
pub enum EngineError {
    /// A catalog fetch failed during search or favorites resolution
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(#[from] CatalogError),

    /// Reading favorite membership failed
    #[error("Favorites lookup failed: {0}")]
    StoreRead(StoreError),

    /// Mutating favorite membership failed; membership is unchanged
    #[error("Favorites update failed: {0}")]
    StoreWrite(StoreError),

    /// A mutation was attempted without a signed-in viewer
    #[error("A signed-in viewer is required for this operation")]
    AuthenticationRequired,

    /// A blank recipe identifier was supplied
    #[error("Recipe identifier must not be blank")]
    InvalidRecipeId,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
