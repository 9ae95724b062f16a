use serde::Serialize;

use crate::card::{build_card, results_summary, RestaurantCard};
use crate::facets::CuisineOption;
use crate::filters::FilterCriteria;
use crate::pagination::PageInfo;
use crate::search::SearchSelection;
use crate::session::ResultsSession;

/// One rendered page of results
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResultsOutput {
    pub postcode: String,
    pub area: String,
    pub heading: String,
    pub criteria: FilterCriteria,
    pub summary: String,
    pub matching: usize,
    pub total: usize,
    pub items: Vec<RestaurantCard>,
    pub pagination: PageInfo,
}

/// Facets for one location
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FacetsOutput {
    pub postcode: String,
    pub area: String,
    pub cuisine_options: Vec<CuisineOption>,
    pub autocomplete_suggestions: Vec<String>,
}

/// Build the output for the session's active page
///
/// `command` reproduces the current search and seeds the navigation hints.
pub fn build_results_output(
    session: &ResultsSession,
    selection: &SearchSelection,
    command: &str,
    expand_cuisines: bool,
) -> ResultsOutput {
    let matching = session.processed_restaurants().len();
    let total = session.restaurants().map_or(0, <[_]>::len);

    ResultsOutput {
        postcode: selection.postcode().unwrap_or_default().to_string(),
        area: selection.area().unwrap_or_default().to_string(),
        heading: selection.heading().unwrap_or_default().to_string(),
        criteria: session.criteria().clone(),
        summary: results_summary(matching, total),
        matching,
        total,
        items: session
            .current_page()
            .into_iter()
            .map(|r| build_card(r, expand_cuisines))
            .collect(),
        pagination: session.page_info(command),
    }
}

pub fn build_facets_output(session: &ResultsSession, selection: &SearchSelection) -> FacetsOutput {
    FacetsOutput {
        postcode: selection.postcode().unwrap_or_default().to_string(),
        area: selection.area().unwrap_or_default().to_string(),
        cuisine_options: session.cuisine_options(),
        autocomplete_suggestions: session.autocomplete_suggestions(),
    }
}
