//! Query-string state: `topic=`, `dataset=`, `query=`, `doc_ids=`.

use super::decode::decode_uri;
use super::history::{History, HistoryState, PAGE_TITLE};
use serde::Serialize;

/// Reads `name=` from `href`, up to the next `&`, percent-decoded.
///
/// Returns `default` when `name=` does not occur. The first occurrence wins.
pub fn extract_query_param(href: &str, name: &str, default: Option<&str>) -> Option<String> {
    let href = format!("{}&", href);
    let needle = format!("{}=", name);
    match href.find(&needle) {
        Some(at) => {
            let rest = &href[at + needle.len()..];
            let end = rest.find('&').unwrap_or(rest.len());
            Some(decode_uri(&rest[..end]))
        }
        None => default.map(str::to_string),
    }
}

/// Topic/dataset/query/doc-id filters carried in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryFilters {
    pub topic: Option<String>,
    pub dataset: Option<String>,
    pub query: Option<String>,
    pub doc_ids: Option<String>,
}

impl QueryFilters {
    pub fn from_href(href: &str) -> Self {
        Self {
            topic: extract_query_param(href, "topic", None),
            dataset: extract_query_param(href, "dataset", None),
            query: extract_query_param(href, "query", None),
            doc_ids: extract_query_param(href, "doc_ids", None),
        }
    }

    /// Non-empty filters as `(key, value)` in URL order: topic, dataset, query, doc_ids.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("topic", &self.topic),
            ("dataset", &self.dataset),
            ("query", &self.query),
            ("doc_ids", &self.doc_ids),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value.as_deref() {
            Some(v) if !v.is_empty() => Some((key, v)),
            _ => None,
        })
    }
}

/// `href` without its query string, followed by the non-empty `filters`.
///
/// Always a full replace: parameters not in `filters` are dropped.
pub fn build_url(href: &str, filters: &QueryFilters) -> String {
    let base = href.split('?').next().unwrap_or(href);
    let params: Vec<String> = filters
        .pairs()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    if params.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, params.join("&"))
    }
}

/// Builds the new URL and applies it to `history` as a no-reload replacement.
pub fn update_url(href: &str, filters: &QueryFilters, history: &mut impl History) -> String {
    let url = build_url(href, filters);
    history.replace_state(HistoryState { url: url.clone() }, PAGE_TITLE, &url);
    tracing::debug!(url = %url, "navigation state replaced");
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_state::MemoryHistory;

    fn filters(topic: Option<&str>, dataset: Option<&str>, query: Option<&str>) -> QueryFilters {
        QueryFilters {
            topic: topic.map(str::to_string),
            dataset: dataset.map(str::to_string),
            query: query.map(str::to_string),
            doc_ids: None,
        }
    }

    #[test]
    fn default_returned_when_param_missing() {
        assert_eq!(
            extract_query_param("", "not_found", Some("default")).as_deref(),
            Some("default")
        );
        assert_eq!(
            extract_query_param("?x=1", "hello", Some("default")).as_deref(),
            Some("default")
        );
        assert_eq!(extract_query_param("?x=1", "hello", None), None);
    }

    #[test]
    fn first_param_extracted() {
        assert_eq!(
            extract_query_param("?hello=foo&sd", "hello", None).as_deref(),
            Some("foo")
        );
    }

    #[test]
    fn last_param_extracted() {
        assert_eq!(
            extract_query_param("?hello=foo&sd=1", "sd", None).as_deref(),
            Some("1")
        );
    }

    #[test]
    fn empty_and_decoded_values() {
        assert_eq!(extract_query_param("?topic=&x=1", "topic", None).as_deref(), Some(""));
        assert_eq!(
            extract_query_param("?query=high%20frequency", "query", None).as_deref(),
            Some("high frequency")
        );
    }

    #[test]
    fn update_url_removes_unused_parameters() {
        let mut h = MemoryHistory::new();
        assert_eq!(
            update_url("my-url?will-be-removed=dsa", &QueryFilters::default(), &mut h),
            "my-url"
        );
        assert_eq!(h.current(), Some("my-url"));
    }

    #[test]
    fn update_url_sets_topic() {
        let mut h = MemoryHistory::new();
        assert_eq!(
            update_url(
                "my-url?will-be-removed=dsa&topic=foo",
                &filters(Some("hello"), None, None),
                &mut h
            ),
            "my-url?topic=hello"
        );
    }

    #[test]
    fn update_url_sets_dataset_only() {
        let mut h = MemoryHistory::new();
        assert_eq!(
            update_url(
                "my-url?topic=foo&dataset=foo",
                &filters(None, Some("ds"), None),
                &mut h
            ),
            "my-url?dataset=ds"
        );
    }

    #[test]
    fn update_url_sets_query_only() {
        let mut h = MemoryHistory::new();
        let url = update_url(
            "my-url?will-be-removed=dsa&topic=foo&dataset=foo&query=qs",
            &filters(None, None, Some("q")),
            &mut h,
        );
        assert_eq!(url, "my-url?query=q");
        assert_eq!(h.entries()[0].state.url, "my-url?query=q");
    }

    #[test]
    fn empty_values_dropped_and_order_fixed() {
        let f = QueryFilters {
            topic: Some(String::new()),
            dataset: Some("vaswani".into()),
            query: None,
            doc_ids: Some("d1,d2".into()),
        };
        assert_eq!(
            build_url("https://example.org/components/dataset/?dataset=x", &f),
            "https://example.org/components/dataset/?dataset=vaswani&doc_ids=d1,d2"
        );
    }

    #[test]
    fn update_then_read_round_trips() {
        let mut h = MemoryHistory::new();
        let f = QueryFilters {
            topic: Some("93".into()),
            dataset: Some("vaswani".into()),
            query: Some("high frequency".into()),
            doc_ids: Some("1,2,3".into()),
        };
        let url = update_url("https://example.org/?dataset=old", &f, &mut h);
        assert_eq!(QueryFilters::from_href(&url), f);
    }
}
