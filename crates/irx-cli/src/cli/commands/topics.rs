//! `irx topics` – filter a local topics file.

use anyhow::Result;
use irx_core::topics::{filter_topics, read_jsonl, read_topics_jsonl, unique_values};
use std::path::Path;

use crate::cli::FilterArgs;

pub fn run_topics(file: &Path, filters: &FilterArgs, unique: Option<&str>) -> Result<()> {
    if let Some(key) = unique {
        let records = read_jsonl(file)?;
        for value in unique_values(&records, key) {
            match value.as_str() {
                Some(s) => println!("{}", s),
                None => println!("{}", value),
            }
        }
        return Ok(());
    }

    let topics = read_topics_jsonl(file)?;
    let matched = filter_topics(
        &topics,
        filters.topic.as_deref(),
        filters.dataset.as_deref(),
        filters.query.as_deref(),
    );
    tracing::debug!("{} of {} topics matched", matched.len(), topics.len());
    for topic in matched {
        println!("{}", serde_json::to_string(topic)?);
    }
    Ok(())
}
