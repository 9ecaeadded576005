mod client;
pub mod types;

pub use client::SerpApiClient;

use crate::error::Result;
use crate::models::Location;
use async_trait::async_trait;
use types::ShoppingResults;

#[async_trait]
pub trait ShoppingOperations {
    /// Run a fresh shopping search scoped to `location`
    async fn search(&self, term: &str, location: Location) -> Result<ShoppingResults>;

    /// Fetch the page behind a continuation link from an earlier response
    async fn follow(&self, next_link: &str) -> Result<ShoppingResults>;
}
