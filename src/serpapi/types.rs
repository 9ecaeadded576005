use serde::Deserialize;

// https://serpapi.com/google-shopping-api
#[derive(Debug, Default, Deserialize)]
pub struct ShoppingResults {
    #[serde(default)]
    pub categorized_shopping_results: Option<Vec<ShoppingResult>>,
    #[serde(default)]
    pub inline_shopping_results: Option<Vec<ShoppingResult>>,
    #[serde(default)]
    pub shopping_results: Option<Vec<ShoppingResult>>,
    #[serde(default)]
    pub serpapi_pagination: Option<SerpApiPagination>,
    /// Set by SerpApi instead of results when the search itself failed
    #[serde(default)]
    pub error: Option<String>,
}

impl ShoppingResults {
    /// Continuation link for the next page of results, if any
    pub fn next_link(&self) -> Option<&str> {
        self.serpapi_pagination
            .as_ref()
            .and_then(|p| p.next.as_deref())
            .filter(|link| !link.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ShoppingResult {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SerpApiPagination {
    #[serde(default)]
    pub next: Option<String>,
}
