use futures::future::try_join_all;
use log::{debug, info};
use std::collections::HashSet;

use crate::catalog::{RecipeCatalogSource, PARTITION_LETTERS};
use crate::error::EngineError;
use crate::favorites::FavoritesStore;
use crate::filter;
use crate::model::{FavoriteState, FilterCriteria, RecipeRecord, SearchHit, SearchOutcome};

/// Search, filter and favorite-reconciliation over a remote recipe catalog.
///
/// The engine owns no viewer state: identity is an explicit parameter on
/// every operation, supplied by whatever auth collaborator the caller uses.
/// It performs no retries and no cancellation; see
/// [`RequestSequence`](crate::RequestSequence) for discarding stale results.
pub struct RecipeSearchEngine<C, F> {
    catalog: C,
    favorites: F,
}

impl<C, F> RecipeSearchEngine<C, F>
where
    C: RecipeCatalogSource,
    F: FavoritesStore,
{
    pub fn new(catalog: C, favorites: F) -> Self {
        RecipeSearchEngine { catalog, favorites }
    }

    /// The catalog collaborator.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The favorites collaborator.
    pub fn favorites(&self) -> &F {
        &self.favorites
    }

    /// Search the catalog and annotate results with favorite status.
    ///
    /// - Non-empty `name_query`: one name fetch, then client-side filters.
    /// - Empty `name_query` with at least one active criterion: full-catalog
    ///   enumeration across all 26 letter partitions, then filters.
    /// - Empty `name_query` and inactive criteria: `NoMatches` without any
    ///   fetch; an idle search bar must not trigger a 26-way fan-out.
    ///
    /// Results keep the concatenation order of the underlying fetches
    /// (partitions in letter order, source order within each); they are
    /// never re-sorted by relevance.
    pub async fn search(
        &self,
        name_query: &str,
        criteria: &FilterCriteria,
        viewer_id: Option<&str>,
    ) -> Result<SearchOutcome, EngineError> {
        let name_query = name_query.trim();

        let candidates = if !name_query.is_empty() {
            debug!("searching catalog by name: {:?}", name_query);
            self.catalog.fetch_by_name(name_query).await?
        } else if criteria.is_active() {
            self.fetch_full_catalog().await?
        } else {
            debug!("no name query and no active criteria, skipping fetch");
            return Ok(SearchOutcome::NoMatches);
        };

        self.filter_and_annotate(candidates, criteria, viewer_id)
            .await
    }

    /// List the whole catalog, filtered and annotated.
    ///
    /// The explicit "view all" entry point: always enumerates every letter
    /// partition, even when `criteria` is entirely empty.
    pub async fn browse_catalog(
        &self,
        criteria: &FilterCriteria,
        viewer_id: Option<&str>,
    ) -> Result<SearchOutcome, EngineError> {
        let candidates = self.fetch_full_catalog().await?;
        self.filter_and_annotate(candidates, criteria, viewer_id)
            .await
    }

    /// Flip favorite membership for one `(viewer, recipe)` pair.
    ///
    /// Returns the state the pair is in after the toggle. A missing viewer
    /// fails with [`EngineError::AuthenticationRequired`] before any store
    /// access; a failed mutation leaves membership unchanged. This is the
    /// sole mutator of the favorites store in this crate.
    pub async fn toggle_favorite(
        &self,
        viewer_id: Option<&str>,
        recipe_id: &str,
    ) -> Result<FavoriteState, EngineError> {
        let viewer = present_viewer(viewer_id).ok_or(EngineError::AuthenticationRequired)?;
        let recipe_id = recipe_id.trim();
        if recipe_id.is_empty() {
            return Err(EngineError::InvalidRecipeId);
        }

        let currently_favorite = self
            .favorites
            .is_favorite(viewer, recipe_id)
            .await
            .map_err(EngineError::StoreRead)?;

        if currently_favorite {
            self.favorites
                .remove_favorite(viewer, recipe_id)
                .await
                .map_err(EngineError::StoreWrite)?;
            info!("viewer {} unfavorited recipe {}", viewer, recipe_id);
            Ok(FavoriteState::NotFavorite)
        } else {
            self.favorites
                .add_favorite(viewer, recipe_id)
                .await
                .map_err(EngineError::StoreWrite)?;
            info!("viewer {} favorited recipe {}", viewer, recipe_id);
            Ok(FavoriteState::Favorite)
        }
    }

    /// Resolve the viewer's favorites back into full records.
    ///
    /// Ids the catalog no longer knows are skipped; a fetch failure on any
    /// id fails the whole call. Output is ordered by recipe id so repeated
    /// calls are reproducible. The ordering is lexicographic, not numeric:
    /// catalogs with numeric string ids will see "10" before "9"; callers
    /// wanting numeric or display order must re-sort.
    pub async fn favorite_recipes(
        &self,
        viewer_id: Option<&str>,
    ) -> Result<Vec<RecipeRecord>, EngineError> {
        let viewer = present_viewer(viewer_id).ok_or(EngineError::AuthenticationRequired)?;

        let mut ids: Vec<String> = self
            .favorites
            .list_favorite_ids(viewer)
            .await
            .map_err(EngineError::StoreRead)?
            .into_iter()
            .collect();
        ids.sort();

        let lookups = ids.iter().map(|id| self.catalog.fetch_by_id(id));
        let resolved = try_join_all(lookups).await?;

        Ok(resolved.into_iter().flatten().collect())
    }

    /// Enumerate every letter partition concurrently, all-or-nothing.
    ///
    /// A failure on any partition aborts the aggregate; no partial listing
    /// is ever returned.
    async fn fetch_full_catalog(&self) -> Result<Vec<RecipeRecord>, EngineError> {
        debug!("enumerating all {} letter partitions", PARTITION_LETTERS.len());
        let fetches = PARTITION_LETTERS
            .iter()
            .map(|&letter| self.catalog.fetch_by_first_letter(letter));
        let partitions = try_join_all(fetches).await?;

        Ok(partitions.into_iter().flatten().collect())
    }

    async fn filter_and_annotate(
        &self,
        candidates: Vec<RecipeRecord>,
        criteria: &FilterCriteria,
        viewer_id: Option<&str>,
    ) -> Result<SearchOutcome, EngineError> {
        let fetched = candidates.len();
        let kept = filter::apply(candidates, criteria);
        debug!("{} of {} candidates survived the filters", kept.len(), fetched);

        if kept.is_empty() {
            return Ok(SearchOutcome::NoMatches);
        }

        // One batched membership lookup per search, never one per recipe.
        let favorite_ids = match present_viewer(viewer_id) {
            Some(viewer) => self
                .favorites
                .list_favorite_ids(viewer)
                .await
                .map_err(EngineError::StoreRead)?,
            None => HashSet::new(),
        };

        let hits = kept
            .into_iter()
            .map(|recipe| SearchHit {
                is_favorite: favorite_ids.contains(&recipe.id),
                recipe,
            })
            .collect();

        Ok(SearchOutcome::Matches(hits))
    }
}

/// A viewer id that actually identifies someone: present and non-blank.
fn present_viewer(viewer_id: Option<&str>) -> Option<&str> {
    viewer_id.map(str::trim).filter(|viewer| !viewer.is_empty())
}
