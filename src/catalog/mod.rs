mod mealdb;

pub use mealdb::MealDbCatalog;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::model::RecipeRecord;

/// Letters used to enumerate the full catalog when the provider exposes no
/// native listing endpoint.
pub const PARTITION_LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A remote recipe catalog.
///
/// Providers are black boxes: they may be slow, may fail, and may return
/// zero results. Zero results is an empty `Vec` (or `None` for a lookup),
/// never an error. Implementations perform no retries; retry policy belongs
/// to the caller.
#[async_trait]
pub trait RecipeCatalogSource: Send + Sync {
    /// Recipes whose title matches a name substring, in source order.
    async fn fetch_by_name(&self, query: &str) -> Result<Vec<RecipeRecord>, CatalogError>;

    /// Recipes whose title starts with `letter`, in source order.
    async fn fetch_by_first_letter(&self, letter: char)
        -> Result<Vec<RecipeRecord>, CatalogError>;

    /// A single recipe by id, or `None` when the catalog no longer knows it.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<RecipeRecord>, CatalogError>;
}
