//! Core library for grubfind
//!
//! This crate implements the **Functional Core** of the grubfind application:
//! everything that turns a raw restaurant list and the user's choices into
//! what ends up on screen. It performs no I/O.
//!
//! # Architecture Overview
//!
//! - **`grubfind_core`** (this crate): pure transformation functions
//! - **`grubfind`**: HTTP fetching, configuration and terminal output (the
//!   Imperative Shell)
//!
//! Every function here returns the same output for the same input and can be
//! tested with plain fixture data.
//!
//! # Module Organization
//!
//! - [`restaurant`]: discovery API data model
//! - [`locations`]: the known postcode table and search-input validation
//! - [`search`]: idle/searched selection state
//! - [`facets`]: autocomplete suggestions and cuisine options
//! - [`filters`]: the filter and sort pipeline
//! - [`pagination`]: fixed-size pages and navigation hints
//! - [`session`]: explicit session context tying the above together
//! - [`query`]: failure taxonomy for restaurant queries
//! - [`card`] and [`results`]: display-ready output structures
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use grubfind_core::restaurant::RestaurantCollection;
//! use grubfind_core::session::ResultsSession;
//! use grubfind_core::filters::SortOption;
//!
//! let mut session = ResultsSession::with_collection(RestaurantCollection::Bare(restaurants));
//! session.set_search_value("pizza");
//! session.set_sort_option(SortOption::Distance);
//!
//! let page = session.current_page();
//! assert_eq!(session.active_page(), 1);
//! ```

pub mod card;
pub mod facets;
pub mod filters;
pub mod locations;
pub mod pagination;
pub mod query;
pub mod restaurant;
pub mod results;
pub mod search;
pub mod session;

#[cfg(test)]
mod fixtures;
