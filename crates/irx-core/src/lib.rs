pub mod config;
pub mod logging;

pub mod fetch;
pub mod range;
pub mod range_cache;
pub mod resolve;
pub mod topics;
pub mod url_state;
