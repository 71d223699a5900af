//! CLI command handlers. Each command is in its own file.

mod completions;
mod lang;
mod open;
mod panel;
mod search;

pub use completions::run_completions;
pub use lang::run_lang;
pub use open::run_open;
pub use panel::run_panel;
pub use search::run_search;
