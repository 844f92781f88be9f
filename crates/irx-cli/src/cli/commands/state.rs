//! `irx state` – print the navigation state decoded from a URL.

use anyhow::Result;
use irx_core::url_state::NavigationState;

pub fn run_state(href: &str) -> Result<()> {
    let state = NavigationState::from_href(href);
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
