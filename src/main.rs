use std::env;

use recipe_search::{
    CatalogConfig, FilterCriteria, InMemoryFavorites, MealDbCatalog, RecipeSearchEngine,
    SearchOutcome,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // recipe-search <name-query> [origin] [include-ingredient] [exclude-ingredient]
    let args: Vec<String> = env::args().collect();
    let name_query = args
        .get(1)
        .ok_or("Usage: recipe-search <name-query> [origin] [include-ingredient] [exclude-ingredient]")?;

    let mut criteria = FilterCriteria::new();
    if let Some(origin) = args.get(2) {
        criteria = criteria.with_origin(origin);
    }
    if let Some(include) = args.get(3) {
        criteria = criteria.with_include_ingredient(include);
    }
    if let Some(exclude) = args.get(4) {
        criteria = criteria.with_exclude_ingredient(exclude);
    }

    let config = CatalogConfig::load()?;
    let catalog = MealDbCatalog::new(&config)?;
    let engine = RecipeSearchEngine::new(catalog, InMemoryFavorites::new());

    match engine.search(name_query, &criteria, None).await? {
        SearchOutcome::Matches(hits) => {
            for hit in hits {
                if hit.recipe.origin.is_empty() {
                    println!("{}", hit.recipe.title);
                } else {
                    println!("{} ({})", hit.recipe.title, hit.recipe.origin);
                }
            }
        }
        SearchOutcome::NoMatches => println!("no recipes matched"),
    }

    Ok(())
}
