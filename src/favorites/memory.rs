use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::favorites::FavoritesStore;

/// In-process [`FavoritesStore`].
///
/// Keeps the composite `(viewer, recipe)` associations in a `HashSet`,
/// mirroring the one-document-per-pair scheme of the document-store
/// backends it stands in for. Useful for tests and single-user tools.
#[derive(Default)]
pub struct InMemoryFavorites {
    pairs: RwLock<HashSet<(String, String)>>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoritesStore for InMemoryFavorites {
    async fn is_favorite(&self, viewer_id: &str, recipe_id: &str) -> Result<bool, StoreError> {
        let pairs = self.pairs.read().await;
        Ok(pairs.contains(&(viewer_id.to_string(), recipe_id.to_string())))
    }

    async fn list_favorite_ids(&self, viewer_id: &str) -> Result<HashSet<String>, StoreError> {
        let pairs = self.pairs.read().await;
        Ok(pairs
            .iter()
            .filter(|(viewer, _)| viewer == viewer_id)
            .map(|(_, recipe)| recipe.clone())
            .collect())
    }

    async fn add_favorite(&self, viewer_id: &str, recipe_id: &str) -> Result<(), StoreError> {
        let mut pairs = self.pairs.write().await;
        pairs.insert((viewer_id.to_string(), recipe_id.to_string()));
        Ok(())
    }

    async fn remove_favorite(&self, viewer_id: &str, recipe_id: &str) -> Result<(), StoreError> {
        let mut pairs = self.pairs.write().await;
        pairs.remove(&(viewer_id.to_string(), recipe_id.to_string()));
        Ok(())
    }
}
