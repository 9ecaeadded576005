use crate::models::NameUrlPair;
use google_sheets4::api::Spreadsheet;

/// Every present, non-empty `formattedValue` in document order
/// (sheets, then grid ranges, then rows, then cells).
pub fn formatted_values(spreadsheet: &Spreadsheet) -> Vec<&str> {
    spreadsheet
        .sheets
        .iter()
        .flatten()
        .flat_map(|sheet| sheet.data.iter().flatten())
        .flat_map(|grid| grid.row_data.iter().flatten())
        .flat_map(|row| row.values.iter().flatten())
        .filter_map(|cell| cell.formatted_value.as_deref())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Pair up collected cell values positionally: value 2i is the name and
/// value 2i+1 the URL. A trailing unpaired value is dropped.
pub fn extract_name_url_pairs(spreadsheet: &Spreadsheet) -> Vec<NameUrlPair> {
    formatted_values(spreadsheet)
        .chunks_exact(2)
        .map(|chunk| NameUrlPair::new(chunk[0], chunk[1]))
        .collect()
}
