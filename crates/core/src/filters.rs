//! Filter and sort pipeline
//!
//! [`derive_results`] turns a raw restaurant list and a [`FilterCriteria`]
//! value into the ordered list shown to the user. It is a pure function and
//! must be called again whenever either input changes.
//!
//! Filters are conjunctive and independent. They run in this order:
//!
//! 1. open now
//! 2. new
//! 3. free delivery
//! 4. selected cuisines
//! 5. free-text search over the name and cuisine names
//!
//! Sorting happens last and is stable. A missing sort key sorts after every
//! present key; entries that tie keep their filtered order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::restaurant::Restaurant;

/// On/off filters
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterToggles {
    pub open_now: bool,
    pub new: bool,
    pub free_delivery: bool,
}

/// Sort order applied after filtering
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    /// Server-provided order, untouched
    #[default]
    BestMatch,
    DeliveryCost,
    MinOrder,
    Distance,
}

impl SortOption {
    /// Numeric key this option sorts by; best match has none
    fn key(&self, restaurant: &Restaurant) -> Option<f64> {
        match self {
            SortOption::BestMatch => None,
            SortOption::DeliveryCost => restaurant.delivery_cost,
            SortOption::MinOrder => restaurant.minimum_delivery_value,
            SortOption::Distance => restaurant.drive_distance_meters,
        }
    }
}

/// User-selected filter and sort state for one session
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search_text: String,
    pub selected_cuisines: BTreeSet<String>,
    pub toggles: FilterToggles,
    pub sort_option: SortOption,
}

impl FilterCriteria {
    /// Whether `restaurant` passes every active filter
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.matches_toggles(restaurant)
            && self.matches_cuisines(restaurant)
            && self.matches_search(restaurant, &self.search_text.to_lowercase())
    }

    fn matches_toggles(&self, restaurant: &Restaurant) -> bool {
        (!self.toggles.open_now || restaurant.is_open_now())
            && (!self.toggles.new || restaurant.is_new())
            && (!self.toggles.free_delivery || restaurant.has_free_delivery())
    }

    fn matches_cuisines(&self, restaurant: &Restaurant) -> bool {
        self.selected_cuisines.is_empty()
            || restaurant
                .cuisines()
                .iter()
                .any(|c| self.selected_cuisines.contains(&c.unique_name))
    }

    /// `needle` is the already case-folded search text; whitespace is kept
    fn matches_search(&self, restaurant: &Restaurant, needle: &str) -> bool {
        needle.is_empty()
            || restaurant.name.to_lowercase().contains(needle)
            || restaurant
                .cuisines()
                .iter()
                .any(|c| c.name.to_lowercase().contains(needle))
    }
}

/// Compare two optional sort keys, placing `None` after every value
fn compare_keys(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort in place by `option`; stable, best match leaves the order alone
pub fn sort_restaurants(restaurants: &mut [&Restaurant], option: SortOption) {
    if option == SortOption::BestMatch {
        return;
    }
    restaurants.sort_by(|a, b| compare_keys(option.key(a), option.key(b)));
}

/// Filter and sort a raw restaurant list
///
/// An absent list yields an empty result. The returned references point into
/// `raw`, so the result is always a subset of the input.
pub fn derive_results<'a>(
    raw: Option<&'a [Restaurant]>,
    criteria: &FilterCriteria,
) -> Vec<&'a Restaurant> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let mut restaurants: Vec<&Restaurant> = raw.iter().filter(|r| criteria.matches(r)).collect();

    sort_restaurants(&mut restaurants, criteria.sort_option);
    restaurants
}
