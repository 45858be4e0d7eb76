use serde::{Deserialize, Serialize};

/// One recipe as returned by the catalog source.
///
/// Records carry no identity beyond `id`; every fetch constructs them fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Opaque identifier, unique within the catalog.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Pointer to a raster image resource.
    pub image_url: String,
    /// Free-text region/area label (country or culinary area); may be empty.
    pub origin: String,
    /// Free-text classification label; may be empty.
    pub category: String,
    /// Free-text preparation steps.
    pub instructions: String,
    /// Ingredient names in source order, blank entries excluded.
    pub ingredients: Vec<String>,
}

/// Filter criteria for one search invocation.
///
/// Every field is a substring needle matched case-insensitively against the
/// corresponding record field. A field that is empty (or whitespace-only)
/// applies no constraint at all - absence of a filter, not "match empty".
///
/// # Example
/// ```
/// use recipe_search::FilterCriteria;
///
/// let criteria = FilterCriteria::new()
///     .with_origin("italy")
///     .with_include_ingredient("onion")
///     .with_exclude_ingredient("beef");
/// assert!(criteria.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Substring to match against `title`.
    pub name: String,
    /// Substring to match against `origin`.
    pub origin: String,
    /// Substring to match against `category`.
    pub category: String,
    /// At least one ingredient must contain this substring.
    pub include_ingredient: String,
    /// No ingredient may contain this substring.
    pub exclude_ingredient: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the recipe title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Constrain the region/area label.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Constrain the classification label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Require at least one matching ingredient.
    pub fn with_include_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.include_ingredient = ingredient.into();
        self
    }

    /// Reject recipes containing a matching ingredient.
    pub fn with_exclude_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.exclude_ingredient = ingredient.into();
        self
    }

    /// True when at least one field would apply a constraint after trimming.
    pub fn is_active(&self) -> bool {
        [
            &self.name,
            &self.origin,
            &self.category,
            &self.include_ingredient,
            &self.exclude_ingredient,
        ]
        .iter()
        .any(|field| !field.trim().is_empty())
    }
}

/// A surviving record annotated with favorite status for the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub recipe: RecipeRecord,
    pub is_favorite: bool,
}

/// Terminal outcome of a search.
///
/// An empty result set is a valid outcome, distinct from an error, so
/// callers can react (empty-state UI, log line) without treating it as a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one recipe survived the filters, in fetch order.
    Matches(Vec<SearchHit>),
    /// Nothing matched, or nothing was fetched because no query was given.
    NoMatches,
}

impl SearchOutcome {
    /// Matched hits, or an empty slice for `NoMatches`.
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchOutcome::Matches(hits) => hits,
            SearchOutcome::NoMatches => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::NoMatches)
    }
}

/// Membership state of one `(viewer, recipe)` pair after a toggle.
///
/// Two states, no terminal state: a pair toggles between them indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteState {
    Favorite,
    NotFavorite,
}
