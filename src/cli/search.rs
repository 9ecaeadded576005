use super::form;
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormat;
use crate::google::GoogleClient;
use crate::models::Location;
use crate::search::{SearchOrchestrator, SearchQuery};
use crate::serpapi::SerpApiClient;
use crate::session::{Session, SessionStore};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term; prompts for the whole form when omitted
    #[arg(long)]
    term: Option<String>,

    #[arg(long, value_enum, default_value_t = Location::Australia)]
    location: Location,

    /// Spreadsheet ID to read instead of running a shopping search
    #[arg(long, requires = "term")]
    spreadsheet: Option<String>,

    /// Maximum number of result pages to load
    #[arg(long, default_value_t = 1)]
    pages: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Write results to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl SearchArgs {
    pub async fn execute(&self) -> Result<()> {
        let config = Config::load()?;
        let session = Session::restore(SessionStore::default_location()?);

        let google_client = match session.is_established() {
            true => Some(GoogleClient::new(&session)?),
            false => None,
        };
        let shopping_client = SerpApiClient::new(&config.serpapi);

        let (query, interactive) = match &self.term {
            Some(term) => (
                SearchQuery::new(term, self.location, self.spreadsheet.clone())?,
                false,
            ),
            None => (
                form::prompt_query(google_client.as_ref(), self.location).await?,
                true,
            ),
        };

        let mut orchestrator = SearchOrchestrator::new(google_client, shopping_client, self.format);
        let mut rendered = String::new();

        orchestrator.submit(&query).await;
        self.publish(orchestrator.output(), &mut rendered);

        let mut loaded = 1;
        while orchestrator.has_next_page() {
            let wants_more = match interactive {
                true => form::confirm_next_page()?,
                false => loaded < self.pages,
            };
            if !wants_more {
                break;
            }

            orchestrator.next_page().await;
            self.publish(orchestrator.output(), &mut rendered);
            loaded += 1;
        }

        if let Some(path) = &self.output {
            fs::write(path, rendered)?;
            info!(path = ?path, pages = loaded, "Wrote results");
        }

        Ok(())
    }

    fn publish(&self, output: &str, rendered: &mut String) {
        if output.is_empty() {
            info!("No results found");
            return;
        }

        let line_end = if output.ends_with('\n') { "" } else { "\n" };
        match self.output {
            Some(_) => {
                rendered.push_str(output);
                rendered.push_str(line_end);
            }
            None => print!("{}{}", output, line_end),
        }
    }
}
