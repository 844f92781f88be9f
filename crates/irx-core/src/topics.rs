//! Topic records and the filters the explorer applies to them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One topic line of a topics JSONL resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(alias = "qid")]
    pub query_id: String,
    pub dataset: String,
    #[serde(default)]
    pub default_text: String,
}

/// True if `filter` is unset/empty, or one of its comma-separated items equals `value`.
fn matches_list(filter: Option<&str>, value: &str) -> bool {
    match filter {
        None | Some("") => true,
        Some(list) => list.split(',').any(|item| !item.is_empty() && item == value),
    }
}

/// Topics matching all three filters.
///
/// `topic_ids` and `datasets` are comma-separated lists of exact values;
/// `query` is a case-insensitive substring of `default_text`.
pub fn filter_topics<'a>(
    topics: &'a [Topic],
    topic_ids: Option<&str>,
    datasets: Option<&str>,
    query: Option<&str>,
) -> Vec<&'a Topic> {
    let query = query.filter(|q| !q.is_empty()).map(str::to_lowercase);
    topics
        .iter()
        .filter(|t| matches_list(topic_ids, &t.query_id))
        .filter(|t| matches_list(datasets, &t.dataset))
        .filter(|t| {
            query
                .as_deref()
                .map_or(true, |q| t.default_text.to_lowercase().contains(q))
        })
        .collect()
}

/// Distinct values of field `key`, in first-seen order. Records without the field are skipped.
pub fn unique_values<'a>(records: &'a [Value], key: &str) -> Vec<&'a Value> {
    let mut out: Vec<&Value> = Vec::new();
    for value in records.iter().filter_map(|r| r.get(key)) {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Reads a line-delimited JSON file into records. Blank lines are skipped.
pub fn read_jsonl(path: &Path) -> Result<Vec<Value>> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    data.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<Value>(line)
                .with_context(|| format!("{}:{}: invalid JSON", path.display(), i + 1))
        })
        .collect()
}

/// Reads a topics JSONL file.
pub fn read_topics_jsonl(path: &Path) -> Result<Vec<Topic>> {
    read_jsonl(path)?
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            serde_json::from_value::<Topic>(record)
                .with_context(|| format!("{}: record {} is not a topic", path.display(), i + 1))
        })
        .collect()
}
