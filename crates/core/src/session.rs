//! Explicit session context
//!
//! [`ResultsSession`] owns everything the results screen needs: the raw
//! restaurant list, the server metadata, the user's [`FilterCriteria`] and
//! the active page. Every setter resets the active page to 1 when it changes
//! anything the filtered list depends on. Derived values are recomputed on
//! every read from the current inputs.
//!
//! [`DiscoverySession`] pairs a [`SearchSelection`] with the results session
//! of the current location and drops the results when the user goes back to
//! the idle search state.

use std::collections::BTreeSet;

use crate::facets::{self, CuisineOption};
use crate::filters::{derive_results, FilterCriteria, FilterToggles, SortOption};
use crate::pagination::{self, PageInfo, PAGE_SIZE};
use crate::restaurant::{MetaData, Restaurant, RestaurantCollection};
use crate::search::{SearchError, SearchSelection};

#[derive(Debug, Clone)]
pub struct ResultsSession {
    restaurants: Option<Vec<Restaurant>>,
    meta_data: Option<MetaData>,
    criteria: FilterCriteria,
    active_page: usize,
}

impl ResultsSession {
    /// Session with no data yet, default criteria, page 1
    pub fn new() -> Self {
        Self {
            restaurants: None,
            meta_data: None,
            criteria: FilterCriteria::default(),
            active_page: 1,
        }
    }

    /// Session seeded with a fetched collection
    pub fn with_collection(collection: RestaurantCollection) -> Self {
        let mut session = Self::new();
        session.set_collection(collection);
        session
    }

    /// Replace the raw data; always resets to page 1
    pub fn set_collection(&mut self, collection: RestaurantCollection) {
        let (restaurants, meta_data) = collection.into_parts();
        self.restaurants = Some(restaurants);
        self.meta_data = meta_data;
        self.active_page = 1;
    }

    pub fn restaurants(&self) -> Option<&[Restaurant]> {
        self.restaurants.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.restaurants.is_some()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace every criterion at once
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if self.criteria != criteria {
            self.criteria = criteria;
            self.active_page = 1;
        }
    }

    pub fn search_value(&self) -> &str {
        &self.criteria.search_text
    }

    pub fn set_search_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.criteria.search_text != value {
            self.criteria.search_text = value;
            self.active_page = 1;
        }
    }

    pub fn selected_cuisines(&self) -> &BTreeSet<String> {
        &self.criteria.selected_cuisines
    }

    pub fn set_selected_cuisines<I, S>(&mut self, cuisines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cuisines: BTreeSet<String> = cuisines.into_iter().map(Into::into).collect();
        if self.criteria.selected_cuisines != cuisines {
            self.criteria.selected_cuisines = cuisines;
            self.active_page = 1;
        }
    }

    pub fn filter_toggles(&self) -> FilterToggles {
        self.criteria.toggles
    }

    pub fn set_filter_toggles(&mut self, toggles: FilterToggles) {
        if self.criteria.toggles != toggles {
            self.criteria.toggles = toggles;
            self.active_page = 1;
        }
    }

    pub fn sort_option(&self) -> SortOption {
        self.criteria.sort_option
    }

    pub fn set_sort_option(&mut self, option: SortOption) {
        if self.criteria.sort_option != option {
            self.criteria.sort_option = option;
            self.active_page = 1;
        }
    }

    pub fn active_page(&self) -> usize {
        self.active_page
    }

    /// Move to another page; the caller keeps it within `1..=total_pages`
    pub fn set_active_page(&mut self, page: usize) {
        self.active_page = page;
    }

    /// Filtered and sorted restaurants
    pub fn processed_restaurants(&self) -> Vec<&Restaurant> {
        derive_results(self.restaurants(), &self.criteria)
    }

    /// Restaurants on the active page
    pub fn current_page(&self) -> Vec<&Restaurant> {
        let processed = self.processed_restaurants();
        pagination::paginate(&processed, self.active_page, PAGE_SIZE).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.processed_restaurants().len(), PAGE_SIZE)
    }

    /// Page metadata for the active page, with hints built on `command`
    pub fn page_info(&self, command: &str) -> PageInfo {
        pagination::page_info(
            self.processed_restaurants().len(),
            self.active_page,
            PAGE_SIZE,
            command,
        )
    }

    pub fn autocomplete_suggestions(&self) -> Vec<String> {
        facets::autocomplete_suggestions(self.restaurants())
    }

    pub fn cuisine_options(&self) -> Vec<CuisineOption> {
        facets::cuisine_options(self.meta_data.as_ref())
    }
}

impl Default for ResultsSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Search selection plus the results of the selected location
#[derive(Debug, Clone, Default)]
pub struct DiscoverySession {
    selection: SearchSelection,
    results: Option<ResultsSession>,
}

impl DiscoverySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SearchSelection {
        &self.selection
    }

    /// Submit a raw location input; starts a fresh results session
    pub fn submit(&mut self, input: &str) -> Result<(), SearchError> {
        self.selection.submit_input(input)?;
        self.results = Some(ResultsSession::new());
        Ok(())
    }

    /// Go back to the idle search state, discarding filters and page
    pub fn change_location(&mut self) {
        self.selection.reset();
        self.results = None;
    }

    /// Postcode that still needs fetching, if any
    ///
    /// `None` while idle or once the collection for the selection is loaded.
    pub fn pending_fetch(&self) -> Option<&str> {
        match &self.results {
            Some(results) if !results.is_loaded() => self.selection.postcode(),
            _ => None,
        }
    }

    /// Store a fetched collection for the current selection
    ///
    /// Ignored while idle.
    pub fn receive(&mut self, collection: RestaurantCollection) {
        if let Some(results) = self.results.as_mut() {
            results.set_collection(collection);
        }
    }

    pub fn results(&self) -> Option<&ResultsSession> {
        self.results.as_ref()
    }

    pub fn results_mut(&mut self) -> Option<&mut ResultsSession> {
        self.results.as_mut()
    }
}
