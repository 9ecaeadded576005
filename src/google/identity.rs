use crate::error::{AppError, Result};
use crate::models::ProfileInfo;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::instrument;

pub(super) const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v1/userinfo";

#[instrument(name = "Fetching profile", skip_all)]
pub(super) async fn fetch_userinfo(
    client: &Client,
    userinfo_url: &str,
    access_token: &str,
) -> Result<ProfileInfo> {
    let response = client
        .get(userinfo_url)
        .bearer_auth(access_token)
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Auth(format!(
            "Failed to fetch profile: {} - {}",
            status, body
        )));
    }

    let profile: ProfileInfo = response.json().await?;

    Ok(profile)
}
