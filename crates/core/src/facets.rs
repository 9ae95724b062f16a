//! Facets derived from a raw restaurant list
//!
//! Both functions are pure: they keep no state between calls and return the
//! same output for the same input.

use serde::Serialize;
use std::collections::HashSet;

use crate::restaurant::{MetaData, Restaurant};

/// Cuisine category option for the cuisine filter
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CuisineOption {
    /// Cuisine `uniqueName`, the value stored in the filter criteria
    pub value: String,
    /// `"{name} ({count})"`
    pub label: String,
}

/// Autocomplete suggestions for the name/cuisine search box
///
/// Every restaurant name first, then every cuisine name, deduplicated by
/// exact string equality while keeping first-occurrence order.
pub fn autocomplete_suggestions(restaurants: Option<&[Restaurant]>) -> Vec<String> {
    let Some(restaurants) = restaurants else {
        return Vec::new();
    };

    let names = restaurants.iter().map(|r| r.name.as_str());
    let cuisines = restaurants
        .iter()
        .flat_map(|r| r.cuisines().iter().map(|c| c.name.as_str()))
        .filter(|name| !name.is_empty());

    let mut seen = HashSet::new();
    names
        .chain(cuisines)
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Cuisine options built from the server metadata, one per entry
pub fn cuisine_options(meta_data: Option<&MetaData>) -> Vec<CuisineOption> {
    let Some(meta_data) = meta_data else {
        return Vec::new();
    };

    meta_data
        .cuisine_details
        .iter()
        .map(|cuisine| CuisineOption {
            value: cuisine.unique_name.clone(),
            label: format!("{} ({})", cuisine.name, cuisine.count),
        })
        .collect()
}

/// Suggestions containing `query`, ignoring case
pub fn filter_suggestions<'a>(suggestions: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    suggestions
        .iter()
        .filter(|s| s.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}
