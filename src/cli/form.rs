use crate::error::Result;
use crate::google::GoogleOperations;
use crate::models::{Location, SpreadsheetFile};
use crate::search::{SEARCH_TERM_REQUIRED, SearchQuery, validate_term};
use dialoguer::{Confirm, Input, Select};
use tracing::warn;

const NO_SPREADSHEET: &str = "None (shopping search)";

/// Ask for the search term, location and optional spreadsheet
pub(super) async fn prompt_query<GC>(
    google_client: Option<&GC>,
    default_location: Location,
) -> Result<SearchQuery>
where
    GC: GoogleOperations + Sync,
{
    let term: String = Input::new()
        .with_prompt("Search term")
        .validate_with(|input: &String| validate_term(input).map_err(|_| SEARCH_TERM_REQUIRED))
        .interact_text()?;

    let location = prompt_location(default_location)?;

    let spreadsheet_id = match google_client {
        Some(client) => prompt_spreadsheet(client).await?,
        None => None,
    };

    SearchQuery::new(&term, location, spreadsheet_id)
}

pub(super) fn confirm_next_page() -> Result<bool> {
    let next = Confirm::new()
        .with_prompt("Load the next page?")
        .default(true)
        .interact()?;
    Ok(next)
}

fn prompt_location(default_location: Location) -> Result<Location> {
    let labels: Vec<String> = Location::ALL.iter().map(ToString::to_string).collect();
    let default = Location::ALL
        .iter()
        .position(|location| *location == default_location)
        .unwrap_or_default();

    let selection = Select::new()
        .with_prompt("Location")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(Location::ALL[selection])
}

async fn prompt_spreadsheet<GC>(client: &GC) -> Result<Option<String>>
where
    GC: GoogleOperations + Sync,
{
    let spreadsheets = available_spreadsheets(client).await;
    let labels = spreadsheet_labels(&spreadsheets);

    let selection = Select::new()
        .with_prompt(format!("Spreadsheet ({})", spreadsheets.len()))
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(selected_spreadsheet(&spreadsheets, selection))
}

/// A failed listing leaves only the shopping search to choose
async fn available_spreadsheets<GC>(client: &GC) -> Vec<SpreadsheetFile>
where
    GC: GoogleOperations + Sync,
{
    match client.list_spreadsheets().await {
        Ok(spreadsheets) => spreadsheets,
        Err(e) => {
            warn!(error = %e, "Failed to list spreadsheets");
            Vec::new()
        }
    }
}

fn spreadsheet_labels(spreadsheets: &[SpreadsheetFile]) -> Vec<String> {
    std::iter::once(NO_SPREADSHEET.to_string())
        .chain(spreadsheets.iter().map(|s| s.name.clone()))
        .collect()
}

// Index 0 is the "no spreadsheet" entry
fn selected_spreadsheet(spreadsheets: &[SpreadsheetFile], selection: usize) -> Option<String> {
    selection
        .checked_sub(1)
        .and_then(|index| spreadsheets.get(index))
        .map(|spreadsheet| spreadsheet.id.clone())
}
