use crate::error::{AppError, Result};
use crate::extract::{extract_name_url_pairs, extract_source_link_pairs, formatted_values};
use crate::format::OutputFormat;
use crate::models::NameUrlPair;
use crate::serpapi::types::ShoppingResults;
use clap::{Args, ValueEnum};
use google_sheets4::api::Spreadsheet;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

const PARSE_ERROR: &str = "Error parsing output";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    /// Google Sheets response fetched with grid data
    Grid,
    /// SerpApi Google Shopping response
    Shopping,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    #[arg(value_enum)]
    kind: PayloadKind,

    /// Saved JSON response
    file: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Print every non-empty grid cell, one per line, instead of pairs
    #[arg(long)]
    values: bool,
}

impl ExtractArgs {
    pub fn execute(&self) -> Result<()> {
        if self.values && self.kind != PayloadKind::Grid {
            return Err(AppError::Validation(
                "--values only applies to grid payloads".to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.file)?;
        let rendered = match self.values {
            true => render_values(&contents),
            false => render_payload(self.kind, &contents, self.format),
        };
        println!("{}", rendered);
        Ok(())
    }
}

fn render_values(contents: &str) -> String {
    match serde_json::from_str::<Spreadsheet>(contents) {
        Ok(grid) => {
            let values = formatted_values(&grid);
            info!(count = values.len(), "Extracted cell values");
            values.join("\n")
        }
        Err(e) => {
            error!(error = %e, "{}", PARSE_ERROR);
            PARSE_ERROR.to_string()
        }
    }
}

/// Parse failures are logged and reported as a message, never returned
fn render_payload(kind: PayloadKind, contents: &str, format: OutputFormat) -> String {
    match extract_pairs(kind, contents) {
        Ok(pairs) => {
            info!(count = pairs.len(), "Extracted entries");
            format.render(&pairs)
        }
        Err(e) => {
            error!(error = %e, "{}", PARSE_ERROR);
            PARSE_ERROR.to_string()
        }
    }
}

fn extract_pairs(kind: PayloadKind, contents: &str) -> Result<Vec<NameUrlPair>> {
    let pairs = match kind {
        PayloadKind::Grid => {
            let grid: Spreadsheet = serde_json::from_str(contents)?;
            extract_name_url_pairs(&grid)
        }
        PayloadKind::Shopping => {
            let results: ShoppingResults = serde_json::from_str(contents)?;
            extract_source_link_pairs(&results)
        }
    };
    Ok(pairs)
}
