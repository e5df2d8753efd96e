//! CLI command handlers. Each command is in its own file for clarity.

mod download;
mod final_url;
mod normalize;
mod parse;
mod query;
mod resolve;

pub use download::run_download;
pub use final_url::run_final_url;
pub use normalize::run_normalize;
pub use parse::run_parse;
pub use query::{run_query_get, run_query_remove, run_query_set};
pub use resolve::run_resolve;
