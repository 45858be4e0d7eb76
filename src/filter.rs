//! Criterion normalization and predicate matching.
//!
//! All matching is case-insensitive substring containment. Criterion fields
//! are trimmed first; a field that trims to nothing applies no constraint.

use crate::model::{FilterCriteria, RecipeRecord};

/// A trimmed, lowercased needle, or `None` when the raw field was blank.
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn any_ingredient_contains(record: &RecipeRecord, needle: &str) -> bool {
    record
        .ingredients
        .iter()
        .any(|ingredient| contains(ingredient, needle))
}

/// True when `record` satisfies every active criterion (logical AND).
pub fn matches(record: &RecipeRecord, criteria: &FilterCriteria) -> bool {
    if let Some(needle) = normalize(&criteria.name) {
        if !contains(&record.title, &needle) {
            return false;
        }
    }
    if let Some(needle) = normalize(&criteria.origin) {
        if !contains(&record.origin, &needle) {
            return false;
        }
    }
    if let Some(needle) = normalize(&criteria.category) {
        if !contains(&record.category, &needle) {
            return false;
        }
    }
    if let Some(needle) = normalize(&criteria.include_ingredient) {
        if !any_ingredient_contains(record, &needle) {
            return false;
        }
    }
    if let Some(needle) = normalize(&criteria.exclude_ingredient) {
        if any_ingredient_contains(record, &needle) {
            return false;
        }
    }
    true
}

/// Retain the records satisfying `criteria`, preserving input order.
pub fn apply(records: Vec<RecipeRecord>, criteria: &FilterCriteria) -> Vec<RecipeRecord> {
    records
        .into_iter()
        .filter(|record| matches(record, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, origin: &str, ingredients: &[&str]) -> RecipeRecord {
        RecipeRecord {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            image_url: String::new(),
            origin: origin.to_string(),
            category: String::new(),
            instructions: String::new(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    #[test]
    fn empty_criteria_match_everything() {
        let records = vec![
            record("Veg Soup", "Italy", &["carrot", "onion"]),
            record("Beef Stew", "Italy", &["beef", "onion"]),
        ];
        let kept = apply(records.clone(), &FilterCriteria::new());
        assert_eq!(kept, records);
    }

    #[test]
    fn include_and_exclude_are_conjunctive() {
        let records = vec![
            record("Veg Soup", "Italy", &["carrot", "onion"]),
            record("Beef Stew", "Italy", &["beef", "onion"]),
        ];
        let criteria = FilterCriteria::new()
            .with_include_ingredient("onion")
            .with_exclude_ingredient("beef");

        let kept = apply(records, &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Veg Soup");
    }

    #[test]
    fn origin_match_is_case_insensitive() {
        let records = vec![record("Veg Soup", "Italy", &["carrot"])];
        let kept = apply(records, &FilterCriteria::new().with_origin("ITALY"));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn title_match_is_substring() {
        let records = vec![
            record("Chicken Alfredo", "Italy", &[]),
            record("Beef Stew", "Ireland", &[]),
        ];
        let kept = apply(records, &FilterCriteria::new().with_name("chick"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Chicken Alfredo");
    }

    #[test]
    fn whitespace_criterion_is_not_a_constraint() {
        let records = vec![record("Veg Soup", "", &[])];
        let kept = apply(records, &FilterCriteria::new().with_origin("  "));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn needles_are_trimmed_before_matching() {
        let records = vec![record("Veg Soup", "Italy", &["onion"])];
        let kept = apply(
            records,
            &FilterCriteria::new().with_include_ingredient(" Onion "),
        );
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn exclude_rejects_when_any_ingredient_matches() {
        let records = vec![record("Beef Stew", "Italy", &["beef", "onion"])];
        let kept = apply(records, &FilterCriteria::new().with_exclude_ingredient("BEEF"));
        assert!(kept.is_empty());
    }

    #[test]
    fn category_filter_applies() {
        let mut soup = record("Veg Soup", "Italy", &[]);
        soup.category = "Starter".to_string();
        let stew = record("Beef Stew", "Italy", &[]);

        let kept = apply(vec![soup, stew], &FilterCriteria::new().with_category("start"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Veg Soup");
    }
}
