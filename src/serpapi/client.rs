use super::ShoppingOperations;
use super::types::ShoppingResults;
use crate::config::SerpApiConfig;
use crate::error::{AppError, Result};
use crate::models::Location;
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, instrument};
use url::Url;

const SERPAPI_BASE_URL: &str = "https://serpapi.com";
const SHOPPING_ENGINE: &str = "google_shopping";

pub struct SerpApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    pub fn new(config: &SerpApiConfig) -> Self {
        Self::with_base_url(config.api_key.clone(), SERPAPI_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Continuation links omit the API key; add it back when missing
    fn authenticated_link(&self, next_link: &str) -> Result<Url> {
        let mut url = Url::parse(next_link).map_err(|e| {
            AppError::Shopping(format!("Invalid pagination link '{}': {}", next_link, e))
        })?;

        if !url.query_pairs().any(|(key, _)| key == "api_key") {
            url.query_pairs_mut().append_pair("api_key", &self.api_key);
        }

        Ok(url)
    }

    async fn parse_response(response: Response) -> Result<ShoppingResults> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Shopping(format!(
                "Search failed: {} - {}",
                status, body
            )));
        }

        let results: ShoppingResults = response.json().await?;

        if let Some(error) = &results.error {
            return Err(AppError::Shopping(error.clone()));
        }

        debug!(has_next = results.next_link().is_some(), "Received shopping results");

        Ok(results)
    }
}

#[async_trait]
impl ShoppingOperations for SerpApiClient {
    #[instrument(name = "Searching shopping results", skip(self))]
    async fn search(&self, term: &str, location: Location) -> Result<ShoppingResults> {
        let url = format!("{}/search.json", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("engine", SHOPPING_ENGINE),
                ("q", term),
                ("google_domain", location.google_domain()),
                ("gl", location.country_code()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    #[instrument(name = "Fetching next page of shopping results", skip_all)]
    async fn follow(&self, next_link: &str) -> Result<ShoppingResults> {
        let url = self.authenticated_link(next_link)?;

        let response = self.client.get(url).send().await?;

        Self::parse_response(response).await
    }
}
