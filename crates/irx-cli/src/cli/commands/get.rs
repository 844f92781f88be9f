//! `irx get` – fetch a record through the range cache.

use anyhow::{Context, Result};
use irx_core::config::ExplorerConfig;
use irx_core::range_cache::RangeCache;

pub async fn run_get(cfg: &ExplorerConfig, path: &str, start: u64, end: u64) -> Result<()> {
    if start > end {
        anyhow::bail!("invalid range {}-{}: start is after end", start, end);
    }
    let cache = RangeCache::from_config(cfg);
    let record = cache
        .get(path, start, end)
        .await
        .with_context(|| format!("get {} bytes {}-{}", path, start, end))?;
    println!("{}", serde_json::to_string_pretty(record.as_ref())?);
    Ok(())
}
