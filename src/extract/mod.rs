mod grid;
mod shopping;

pub use grid::{extract_name_url_pairs, formatted_values};
pub use shopping::extract_source_link_pairs;

#[cfg(test)]
pub(crate) use grid::test_helpers;
