pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod model;
pub mod session;

pub use catalog::{MealDbCatalog, RecipeCatalogSource, PARTITION_LETTERS};
pub use config::CatalogConfig;
pub use engine::RecipeSearchEngine;
pub use error::{CatalogError, EngineError, StoreError};
pub use favorites::{FavoritesStore, InMemoryFavorites};
pub use model::{FavoriteState, FilterCriteria, RecipeRecord, SearchHit, SearchOutcome};
pub use session::RequestSequence;

/// Search TheMealDB by name with no filters and no viewer.
///
/// Convenience wrapper for one-off lookups; longer-lived callers should
/// build a [`RecipeSearchEngine`] once and reuse it.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_search::EngineError> {
/// let outcome = recipe_search::search_by_name("arrabiata").await?;
/// for hit in outcome.hits() {
///     println!("{}", hit.recipe.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_by_name(name_query: &str) -> Result<SearchOutcome, EngineError> {
    let config = CatalogConfig::load()?;
    let catalog = MealDbCatalog::new(&config)?;
    let engine = RecipeSearchEngine::new(catalog, InMemoryFavorites::new());

    engine
        .search(name_query, &FilterCriteria::new(), None)
        .await
}
