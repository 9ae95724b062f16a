use serde::Serialize;

use crate::locations::{self, Location};

/// Error type for search selection transitions
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Postcode and area must both be non-empty")]
    EmptyLocation,

    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    #[default]
    Idle,
    Searched,
}

/// Currently active search target
///
/// Starts idle. `submit` moves it to searched, `reset` moves it back; there
/// are no other transitions. A searched selection always carries a postcode.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct SearchSelection {
    postcode: Option<String>,
    area: Option<String>,
    status: SearchStatus,
}

impl SearchSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn postcode(&self) -> Option<&str> {
        self.postcode.as_deref()
    }

    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_searched(&self) -> bool {
        self.status == SearchStatus::Searched
    }

    /// Submit a search for the given postcode and area
    pub fn submit(&mut self, postcode: &str, area: &str) -> Result<(), SearchError> {
        if postcode.is_empty() || area.is_empty() {
            return Err(SearchError::EmptyLocation);
        }

        self.postcode = Some(postcode.to_string());
        self.area = Some(area.to_string());
        self.status = SearchStatus::Searched;
        Ok(())
    }

    /// Submit a search from a raw `"<area> - <postcode>"` input
    ///
    /// The input must match a known location exactly.
    pub fn submit_input(&mut self, input: &str) -> Result<&'static Location, SearchError> {
        let location = locations::find_by_display(input)
            .ok_or_else(|| SearchError::UnknownLocation(input.to_string()))?;
        self.submit(location.postcode, location.area)?;
        Ok(location)
    }

    /// Return to the idle state, clearing the location
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Title shown above the results, preferring the area over the postcode
    pub fn heading(&self) -> Option<&str> {
        self.area().or(self.postcode())
    }
}
