use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::catalog::RecipeCatalogSource;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::RecipeRecord;

/// The API spreads ingredients over numbered fields strIngredient1..20.
const INGREDIENT_SLOTS: usize = 20;

/// TheMealDB implementation of [`RecipeCatalogSource`].
///
/// Endpoints:
/// - by name:   `GET {base}/api/json/v1/{key}/search.php?s={query}`
/// - by letter: `GET {base}/api/json/v1/{key}/search.php?f={letter}`
/// - by id:     `GET {base}/api/json/v1/{key}/lookup.php?i={id}`
///
/// All three answer `{"meals": [...]}` where `meals` is JSON `null` when
/// nothing matched.
pub struct MealDbCatalog {
    client: Client,
    base_url: String,
    api_key: String,
}

impl MealDbCatalog {
    /// Create a catalog client from configuration.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(MealDbCatalog {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        MealDbCatalog {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: "1".to_string(),
        }
    }

    async fn fetch_meals(
        &self,
        endpoint: &str,
        param: &str,
        value: &str,
    ) -> Result<Vec<RecipeRecord>, CatalogError> {
        let url = format!("{}/api/json/v1/{}/{}", self.base_url, self.api_key, endpoint);
        debug!("GET {} ?{}={}", url, param, value);

        let response = self
            .client
            .get(&url)
            .query(&[(param, value)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        // The envelope must carry a "meals" key; a 200 body of any other
        // shape is a decode failure, not an empty result.
        let meals = body
            .as_object()
            .and_then(|envelope| envelope.get("meals"))
            .ok_or_else(|| CatalogError::Decode("response has no \"meals\" key".to_string()))?;

        match meals {
            Value::Null => Ok(Vec::new()),
            Value::Array(meals) => meals.iter().map(record_from_meal).collect(),
            other => Err(CatalogError::Decode(format!(
                "expected \"meals\" to be an array or null, got {}",
                other
            ))),
        }
    }
}

/// Map one raw meal object onto a [`RecipeRecord`].
fn record_from_meal(meal: &Value) -> Result<RecipeRecord, CatalogError> {
    let id = meal["idMeal"]
        .as_str()
        .ok_or_else(|| CatalogError::Decode("meal is missing \"idMeal\"".to_string()))?
        .to_string();
    let title = meal["strMeal"]
        .as_str()
        .ok_or_else(|| CatalogError::Decode("meal is missing \"strMeal\"".to_string()))?
        .to_string();

    let text = |field: &str| {
        meal[field]
            .as_str()
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };

    // Blank and null slots are dropped; slot order is preserved.
    let ingredients = (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| meal[format!("strIngredient{}", slot)].as_str())
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(str::to_string)
        .collect();

    Ok(RecipeRecord {
        id,
        title,
        image_url: text("strMealThumb"),
        origin: text("strArea"),
        category: text("strCategory"),
        instructions: text("strInstructions"),
        ingredients,
    })
}

#[async_trait]
impl RecipeCatalogSource for MealDbCatalog {
    async fn fetch_by_name(&self, query: &str) -> Result<Vec<RecipeRecord>, CatalogError> {
        self.fetch_meals("search.php", "s", query).await
    }

    async fn fetch_by_first_letter(
        &self,
        letter: char,
    ) -> Result<Vec<RecipeRecord>, CatalogError> {
        self.fetch_meals("search.php", "f", &letter.to_string())
            .await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<RecipeRecord>, CatalogError> {
        let mut records = self.fetch_meals("lookup.php", "i", id).await?;
        if records.is_empty() {
            Ok(None)
        } else {
            Ok(Some(records.remove(0)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_from_meal_drops_blank_ingredient_slots() {
        let meal = json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://example.com/teriyaki.jpg",
            "strArea": "Japanese",
            "strCategory": "Chicken",
            "strInstructions": "Preheat oven.",
            "strIngredient1": "soy sauce",
            "strIngredient2": " ",
            "strIngredient3": "water",
            "strIngredient4": null
        });

        let record = record_from_meal(&meal).unwrap();
        assert_eq!(record.id, "52772");
        assert_eq!(record.title, "Teriyaki Chicken Casserole");
        assert_eq!(record.origin, "Japanese");
        assert_eq!(record.category, "Chicken");
        assert_eq!(record.ingredients, vec!["soy sauce", "water"]);
    }

    #[test]
    fn record_from_meal_requires_an_id() {
        let meal = json!({ "strMeal": "Nameless" });
        let result = record_from_meal(&meal);
        assert!(matches!(result, Err(CatalogError::Decode(_))));
    }

    #[test]
    fn record_from_meal_tolerates_missing_optional_fields() {
        let meal = json!({ "idMeal": "1", "strMeal": "Plain" });
        let record = record_from_meal(&meal).unwrap();
        assert!(record.origin.is_empty());
        assert!(record.category.is_empty());
        assert!(record.ingredients.is_empty());
    }
}
