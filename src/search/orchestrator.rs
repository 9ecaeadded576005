use super::SearchQuery;
use crate::error::Result;
use crate::extract::{extract_name_url_pairs, extract_source_link_pairs};
use crate::format::OutputFormat;
use crate::google::GoogleOperations;
use crate::serpapi::ShoppingOperations;
use crate::serpapi::types::ShoppingResults;
use indicatif::ProgressStyle;
use tracing::{Span, debug, error, info, instrument, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

pub(crate) const SPREADSHEET_ERROR: &str = "Error fetching spreadsheet content";
pub(crate) const SHOPPING_ERROR: &str = "Error fetching shopping results";
pub(crate) const SIGN_IN_REQUIRED: &str = "Sign in to search spreadsheets";

/// Dispatches a search to the spreadsheet or shopping backend and keeps
/// the rendered output plus the shopping continuation link.
///
/// Failures never escape: they are logged and replace the output with a
/// short message.
pub struct SearchOrchestrator<GC, SC> {
    google_client: Option<GC>,
    shopping_client: SC,
    format: OutputFormat,
    output: String,
    next_link: Option<String>,
    loading: bool,
}

impl<GC, SC> SearchOrchestrator<GC, SC>
where
    GC: GoogleOperations + Sync,
    SC: ShoppingOperations + Sync,
{
    pub fn new(google_client: Option<GC>, shopping_client: SC, format: OutputFormat) -> Self {
        Self {
            google_client,
            shopping_client,
            format,
            output: String::new(),
            next_link: None,
            loading: false,
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A further page can be requested once the current search has settled
    pub fn has_next_page(&self) -> bool {
        !self.is_loading() && self.next_link().is_some()
    }

    /// Spreadsheet searches read the chosen sheet; everything else goes to
    /// the shopping search.
    #[instrument(name = "Searching", skip_all, fields(term = %query.term, location = %query.location))]
    pub async fn submit(&mut self, query: &SearchQuery) -> &str {
        self.start_loading();

        match &query.spreadsheet_id {
            Some(spreadsheet_id) => self.search_spreadsheet(spreadsheet_id).await,
            None => {
                let result = self
                    .shopping_client
                    .search(&query.term, query.location)
                    .await;
                self.publish_shopping(result);
            }
        }

        self.loading = false;
        &self.output
    }

    /// Re-issue the last shopping search through its continuation link.
    /// Does nothing when there is no further page.
    #[instrument(name = "Loading next page", skip_all)]
    pub async fn next_page(&mut self) -> &str {
        let Some(next_link) = self.next_link.clone() else {
            debug!("No next page to load");
            return &self.output;
        };

        self.start_loading();
        let result = self.shopping_client.follow(&next_link).await;
        self.publish_shopping(result);
        self.loading = false;

        &self.output
    }

    fn start_loading(&mut self) {
        self.loading = true;

        let span = Span::current();
        span.pb_set_style(&ProgressStyle::default_spinner());
        span.pb_set_message("Loading...");
    }

    async fn search_spreadsheet(&mut self, spreadsheet_id: &str) {
        self.next_link = None;

        let Some(google_client) = &self.google_client else {
            warn!("Spreadsheet search requested without a session");
            self.output = SIGN_IN_REQUIRED.to_string();
            return;
        };

        let result = google_client.fetch_grid(spreadsheet_id).await;
        match result {
            Ok(grid) => {
                let pairs = extract_name_url_pairs(&grid);
                info!(count = pairs.len(), "Extracted spreadsheet entries");
                self.output = self.format.render(&pairs);
            }
            Err(e) => {
                error!(error = %e, "{}", SPREADSHEET_ERROR);
                self.output = SPREADSHEET_ERROR.to_string();
            }
        }
    }

    fn publish_shopping(&mut self, result: Result<ShoppingResults>) {
        match result {
            Ok(results) => {
                let pairs = extract_source_link_pairs(&results);
                info!(count = pairs.len(), "Extracted shopping results");
                self.next_link = results.next_link().map(str::to_string);
                self.output = self.format.render(&pairs);
            }
            Err(e) => {
                error!(error = %e, "{}", SHOPPING_ERROR);
                self.next_link = None;
                self.output = SHOPPING_ERROR.to_string();
            }
        }
    }
}

#[cfg(test)]
mod mocks {
    use crate::error::{AppError, Result};
    use crate::google::GoogleOperations;
    use crate::models::profile::test_helpers::{mock_profile, mock_spreadsheet};
    use crate::models::{Location, ProfileInfo, SpreadsheetFile};
    use crate::serpapi::ShoppingOperations;
    use crate::serpapi::types::ShoppingResults;
    use async_trait::async_trait;
    use google_sheets4::api::Spreadsheet;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    pub(crate) struct MockGoogleClient {
        /// `None` makes every grid fetch fail
        pub grid: Option<Spreadsheet>,
        pub fetched_ids: Arc<Mutex<Vec<String>>>,
    }

    impl MockGoogleClient {
        pub(crate) fn new(grid: Option<Spreadsheet>) -> Self {
            Self {
                grid,
                fetched_ids: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl GoogleOperations for MockGoogleClient {
        async fn fetch_profile(&self) -> Result<ProfileInfo> {
            Ok(mock_profile())
        }

        async fn list_spreadsheets(&self) -> Result<Vec<SpreadsheetFile>> {
            Ok(vec![mock_spreadsheet("sheet_1")])
        }

        async fn fetch_grid(&self, spreadsheet_id: &str) -> Result<Spreadsheet> {
            self.fetched_ids
                .lock()
                .unwrap()
                .push(spreadsheet_id.to_string());
            self.grid
                .clone()
                .ok_or_else(|| AppError::Sheets("mock failure".to_string()))
        }
    }

    /// Serves canned JSON payloads; `None` makes the call fail
    #[derive(Clone)]
    pub(crate) struct MockShoppingClient {
        pub search_response: Option<serde_json::Value>,
        pub follow_response: Option<serde_json::Value>,
        pub searches: Arc<Mutex<Vec<(String, Location)>>>,
        pub followed: Arc<Mutex<Vec<String>>>,
    }

    impl MockShoppingClient {
        pub(crate) fn new(
            search_response: Option<serde_json::Value>,
            follow_response: Option<serde_json::Value>,
        ) -> Self {
            Self {
                search_response,
                follow_response,
                searches: Arc::new(Mutex::new(Vec::new())),
                followed: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn respond(payload: &Option<serde_json::Value>) -> Result<ShoppingResults> {
            match payload {
                Some(json) => Ok(serde_json::from_value(json.clone())?),
                None => Err(AppError::Shopping("mock failure".to_string())),
            }
        }
    }

    #[async_trait]
    impl ShoppingOperations for MockShoppingClient {
        async fn search(&self, term: &str, location: Location) -> Result<ShoppingResults> {
            self.searches
                .lock()
                .unwrap()
                .push((term.to_string(), location));
            Self::respond(&self.search_response)
        }

        async fn follow(&self, next_link: &str) -> Result<ShoppingResults> {
            self.followed.lock().unwrap().push(next_link.to_string());
            Self::respond(&self.follow_response)
        }
    }
}
