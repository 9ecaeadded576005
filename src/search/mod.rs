mod orchestrator;
mod query;

pub use orchestrator::SearchOrchestrator;
pub use query::SearchQuery;
pub(crate) use query::{SEARCH_TERM_REQUIRED, validate_term};
