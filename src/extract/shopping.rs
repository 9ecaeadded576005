use crate::models::NameUrlPair;
use crate::serpapi::types::{ShoppingResult, ShoppingResults};

/// Collect `source`/`link` pairs from categorized, inline and plain
/// shopping results, in that order. Entries missing either field are skipped.
pub fn extract_source_link_pairs(results: &ShoppingResults) -> Vec<NameUrlPair> {
    [
        &results.categorized_shopping_results,
        &results.inline_shopping_results,
        &results.shopping_results,
    ]
    .into_iter()
    .flatten()
    .flatten()
    .filter_map(source_link_pair)
    .collect()
}

fn source_link_pair(result: &ShoppingResult) -> Option<NameUrlPair> {
    let source = result.source.as_deref().filter(|s| !s.is_empty())?;
    let link = result.link.as_deref().filter(|l| !l.is_empty())?;
    Some(NameUrlPair::new(source, link))
}
