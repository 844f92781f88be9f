//! URL state codec.
//!
//! Navigation state (selected component and focus types, search query, and
//! topic/dataset/query/doc-id filters) lives only in the page URL. Readers
//! are pure functions over an explicit href; the writer rebuilds the query
//! string and hands the result to a [`History`].

mod decode;
mod history;
mod path;
mod query;

pub use history::{History, HistoryEntry, HistoryState, MemoryHistory, PAGE_TITLE};
pub use path::{extract_component_types, extract_focus_types, extract_search_query};
pub use query::{build_url, extract_query_param, update_url, QueryFilters};

use serde::Serialize;

/// Everything the explorer derives from one URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub component_types: Vec<String>,
    pub focus_types: Vec<String>,
    pub search_query: String,
    #[serde(flatten)]
    pub filters: QueryFilters,
}

impl NavigationState {
    pub fn from_href(href: &str) -> Self {
        Self {
            component_types: extract_component_types(href),
            focus_types: extract_focus_types(href),
            search_query: extract_search_query(href),
            filters: QueryFilters::from_href(href),
        }
    }
}
