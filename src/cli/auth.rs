use crate::config::Config;
use crate::error::Result;
use crate::google::{GoogleClient, GoogleOperations};
use crate::session::{self, Phase, Session, SessionStore};
use clap::Subcommand;
use tracing::{info, warn};

#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Sign in with Google
    Login {
        /// Discard any existing session first
        #[arg(long)]
        reset: bool,
    },
    /// Forget the stored session
    Logout,
}

impl AuthAction {
    pub async fn execute(&self) -> Result<()> {
        let mut session = Session::restore(SessionStore::default_location()?);

        match self {
            AuthAction::Login { reset } => login(&mut session, *reset).await,
            AuthAction::Logout => session.clear(),
        }
    }
}

async fn login(session: &mut Session, reset: bool) -> Result<()> {
    if reset {
        session.clear()?;
    }

    if session.phase() == Phase::Authenticated {
        info!("Already signed in, use --reset to sign in again");
    } else {
        let config = Config::load()?;
        session::login(&config.google, session).await?;
    }

    let client = GoogleClient::new(session)?;
    match client.fetch_profile().await {
        Ok(profile) => info!(name = %profile.name, email = %profile.email, "Signed in"),
        Err(e) => warn!(error = %e, "Signed in, but failed to fetch profile"),
    }

    Ok(())
}
