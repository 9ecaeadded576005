mod client;
mod identity;

pub use client::GoogleClient;

use crate::error::Result;
use crate::models::{ProfileInfo, SpreadsheetFile};
use async_trait::async_trait;
use google_sheets4::api::Spreadsheet;

#[async_trait]
pub trait GoogleOperations {
    async fn fetch_profile(&self) -> Result<ProfileInfo>;

    /// Spreadsheets visible to the user, newest first
    async fn list_spreadsheets(&self) -> Result<Vec<SpreadsheetFile>>;

    /// Full grid data of a spreadsheet's leading name/URL columns
    async fn fetch_grid(&self, spreadsheet_id: &str) -> Result<Spreadsheet>;
}
