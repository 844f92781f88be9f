//! CLI command handlers. Each command is in its own file.

mod get;
mod state;
mod topics;
mod update;

pub use get::run_get;
pub use state::run_state;
pub use topics::run_topics;
pub use update::run_update;
