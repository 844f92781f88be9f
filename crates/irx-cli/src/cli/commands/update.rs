//! `irx update` – rewrite a URL's filters.

use anyhow::Result;
use irx_core::url_state::{update_url, MemoryHistory, QueryFilters};

pub fn run_update(href: &str, filters: &QueryFilters) -> Result<()> {
    let mut history = MemoryHistory::new();
    let url = update_url(href, filters, &mut history);
    println!("{}", url);
    Ok(())
}
