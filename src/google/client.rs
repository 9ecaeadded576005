use super::GoogleOperations;
use super::identity::{USERINFO_URL, fetch_userinfo};
use crate::error::{AppError, Result};
use crate::models::{ProfileInfo, SpreadsheetFile};
use crate::session::Session;
use async_trait::async_trait;
use google_drive3::api::DriveHub;
use google_sheets4::api::{Sheets, Spreadsheet};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use tracing::{debug, instrument};

const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive.readonly";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

const SPREADSHEET_QUERY: &str = "mimeType='application/vnd.google-apps.spreadsheet'";

// Name and URL columns
const GRID_RANGE: &str = "A1:B31155";

pub struct GoogleClient {
    http: reqwest::Client,
    access_token: String,
    sheets: Sheets<HttpsConnector<HttpConnector>>,
    drive: DriveHub<HttpsConnector<HttpConnector>>,
}

impl GoogleClient {
    /// Create a client that authenticates every call with the session's token
    pub fn new(session: &Session) -> Result<Self> {
        let access_token = session
            .access_token()
            .ok_or_else(|| {
                AppError::Auth("Not signed in, run `product-finder auth login`".to_string())
            })?
            .to_string();

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .map_err(|e| AppError::Auth(format!("Failed to load root certificates: {}", e)))?
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector);

        let sheets = Sheets::new(client.clone(), access_token.clone());
        let drive = DriveHub::new(client, access_token.clone());

        Ok(Self {
            http: reqwest::Client::new(),
            access_token,
            sheets,
            drive,
        })
    }
}

#[async_trait]
impl GoogleOperations for GoogleClient {
    async fn fetch_profile(&self) -> Result<ProfileInfo> {
        fetch_userinfo(&self.http, USERINFO_URL, &self.access_token).await
    }

    #[instrument(name = "Listing spreadsheets", skip(self))]
    async fn list_spreadsheets(&self) -> Result<Vec<SpreadsheetFile>> {
        let (_, file_list) = self
            .drive
            .files()
            .list()
            .q(SPREADSHEET_QUERY)
            .order_by("createdTime desc")
            .supports_all_drives(true)
            .include_items_from_all_drives(true)
            .param("fields", "files(id, name)")
            .add_scope(DRIVE_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Drive(format!("Failed to list spreadsheets: {}", e)))?;

        let spreadsheets: Vec<SpreadsheetFile> = file_list
            .files
            .unwrap_or_default()
            .into_iter()
            .filter_map(SpreadsheetFile::from_drive_file)
            .collect();
        debug!(count = spreadsheets.len(), "Listed spreadsheets");

        Ok(spreadsheets)
    }

    #[instrument(name = "Fetching spreadsheet content", skip(self))]
    async fn fetch_grid(&self, spreadsheet_id: &str) -> Result<Spreadsheet> {
        let (_, spreadsheet) = self
            .sheets
            .spreadsheets()
            .get(spreadsheet_id)
            .include_grid_data(true)
            .add_ranges(GRID_RANGE)
            .add_scope(SHEETS_SCOPE)
            .doit()
            .await
            .map_err(|e| {
                AppError::Sheets(format!(
                    "Failed to fetch spreadsheet '{}': {}",
                    spreadsheet_id, e
                ))
            })?;

        Ok(spreadsheet)
    }
}
