//! CLI command handlers, one per file.

mod completions;
mod host;
mod links;
mod man;
mod normalize;

pub use completions::run_completions;
pub use host::run_host;
pub use links::run_links;
pub use man::run_man;
pub use normalize::run_normalize;
