//! HTTP clients for the keyword data sources.
//!
//! Two independent clients cover the three endpoints the pipeline reads:
//! [`search::SearchClient`] speaks to the authenticated blog and news search
//! API, and [`autocomplete::AutocompleteClient`] to the public search-box
//! suggestion endpoint. [`response`] holds the typed payloads both produce.

pub mod autocomplete;
pub mod response;
pub mod search;

pub use autocomplete::{AutocompleteClient, DEFAULT_SUGGESTION_COUNT};
pub use response::{BlogPost, NewsCounts};
pub use search::SearchClient;
