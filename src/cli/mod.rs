mod auth;
mod extract;
mod form;
mod search;
mod show;

use crate::error::Result;
use clap::{Parser, Subcommand};

pub use auth::AuthAction;
pub use extract::ExtractArgs;
pub use search::SearchArgs;
pub use show::ShowResource;

#[derive(Parser, Debug)]
#[command(name = "product-finder")]
#[command(about = "Search shopping results and supplier spreadsheets for products", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Auth { action } => action.execute().await,
            Commands::Show { resource } => resource.execute().await,
            Commands::Search(args) => args.execute().await,
            Commands::Extract(args) => args.execute(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to or out of Google
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
    /// Search shopping results, or a spreadsheet's name/URL columns
    Search(SearchArgs),
    /// Render a saved API response without touching the network
    Extract(ExtractArgs),
}
