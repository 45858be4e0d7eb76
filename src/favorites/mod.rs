mod memory;

pub use memory::InMemoryFavorites;

use async_trait::async_trait;
use std::collections::HashSet;

use crate::error::StoreError;

/// External favorite-membership association.
///
/// Membership is keyed by the `(viewer, recipe)` pair with at most one
/// record per pair: presence is idempotent, never a counter. Any conforming
/// key-value or document store can implement this; the engine has no
/// knowledge of the backing vendor.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Whether the pair is currently a favorite.
    async fn is_favorite(&self, viewer_id: &str, recipe_id: &str) -> Result<bool, StoreError>;

    /// All recipe ids the viewer has marked favorite.
    async fn list_favorite_ids(&self, viewer_id: &str) -> Result<HashSet<String>, StoreError>;

    /// Record the pair. Adding an existing pair is a no-op.
    async fn add_favorite(&self, viewer_id: &str, recipe_id: &str) -> Result<(), StoreError>;

    /// Delete the pair. Removing an absent pair is a no-op.
    async fn remove_favorite(&self, viewer_id: &str, recipe_id: &str) -> Result<(), StoreError>;
}
