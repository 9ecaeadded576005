use crate::config::Config;
use crate::error::Result;
use crate::google::{GoogleClient, GoogleOperations};
use crate::session::{Session, SessionStore};
use clap::Subcommand;
use tracing::{error, info};

#[derive(Subcommand, Debug)]
pub enum ShowResource {
    /// Show configuration and cache paths
    Paths,
    /// Show the signed-in Google profile
    Profile,
    /// List spreadsheets available to search, newest first
    Spreadsheets,
}

impl ShowResource {
    pub async fn execute(&self) -> Result<()> {
        match self {
            ShowResource::Paths => show_paths(),
            ShowResource::Profile => show_profile().await,
            ShowResource::Spreadsheets => show_spreadsheets().await,
        }
    }
}

fn show_paths() -> Result<()> {
    let config_path = Config::config_file()?;
    let cache_dir = Config::cache_dir()?;

    info!(path = ?config_path, "Config path");
    info!(path = ?cache_dir, "Cache path");

    Ok(())
}

fn signed_in_client() -> Result<GoogleClient> {
    let session = Session::restore(SessionStore::default_location()?);
    GoogleClient::new(&session)
}

async fn show_profile() -> Result<()> {
    let client = signed_in_client()?;

    match client.fetch_profile().await {
        Ok(profile) => {
            info!(name = %profile.name, email = %profile.email, picture = %profile.picture, "Profile");
        }
        Err(e) => error!(error = %e, "Failed to fetch profile"),
    }

    Ok(())
}

async fn show_spreadsheets() -> Result<()> {
    let client = signed_in_client()?;

    match client.list_spreadsheets().await {
        Ok(spreadsheets) => {
            info!(count = spreadsheets.len(), "Spreadsheets");
            for spreadsheet in spreadsheets {
                println!("{}\t{}", spreadsheet.id, spreadsheet.name);
            }
        }
        Err(e) => error!(error = %e, "Failed to list spreadsheets"),
    }

    Ok(())
}
