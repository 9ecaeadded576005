use super::Session;
use crate::config::GoogleConfig;
use crate::error::{AppError, Result};
use hyper_util::client::legacy::connect::HttpConnector;
use tracing::instrument;
use yup_oauth2::{
    ApplicationSecret, InstalledFlowAuthenticator, InstalledFlowReturnMethod,
    authenticator::Authenticator, hyper_rustls::HttpsConnector,
};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_CERT_URL: &str = "https://www.googleapis.com/oauth2/v1/certs";
const GOOGLE_REDIRECT_URI: &str = "http://127.0.0.1";

// Read-only Drive and Sheets access, plus the identity endpoint
const LOGIN_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/drive.readonly",
    "https://www.googleapis.com/auth/spreadsheets.readonly",
    "https://www.googleapis.com/auth/userinfo.profile",
    "https://www.googleapis.com/auth/userinfo.email",
];

type AuthType = Authenticator<HttpsConnector<HttpConnector>>;

/// Run the Google consent flow and establish `session` with the granted token
#[instrument(name = "Signing in to Google", skip_all)]
pub async fn login(config: &GoogleConfig, session: &mut Session) -> Result<()> {
    session.begin_login();

    let access_token = match request_access_token(config).await {
        Ok(token) => token,
        Err(e) => {
            session.abort_login();
            return Err(e);
        }
    };

    session.establish(access_token)
}

async fn request_access_token(config: &GoogleConfig) -> Result<String> {
    let auth = from_installed_flow(config.client_id.clone(), config.client_secret.clone()).await?;

    let token = auth
        .token(LOGIN_SCOPES)
        .await
        .map_err(|e| AppError::Auth(format!("Failed to get token: {}", e)))?;

    token
        .token()
        .map(str::to_string)
        .ok_or_else(|| AppError::Auth("Token response had no access token".to_string()))
}

async fn from_installed_flow(client_id: String, client_secret: String) -> Result<AuthType> {
    let secret = ApplicationSecret {
        client_id,
        client_secret,
        auth_uri: GOOGLE_AUTH_URL.to_string(),
        token_uri: GOOGLE_TOKEN_URL.to_string(),
        auth_provider_x509_cert_url: Some(GOOGLE_CERT_URL.to_string()),
        redirect_uris: vec![GOOGLE_REDIRECT_URI.to_string()],
        project_id: None,
        client_email: None,
        client_x509_cert_url: None,
    };

    // Tokens are kept in memory only; the session owns persistence.
    // The browser redirects back to a loopback listener started by the flow.
    let auth = InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::HTTPRedirect)
        .build()
        .await
        .map_err(|e| AppError::Auth(format!("Failed to build authenticator: {}", e)))?;

    Ok(auth)
}
