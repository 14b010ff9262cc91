//! HTTP client for the remote users directory.
//!
//! The endpoint is configured through the `USERS_API_URL` environment
//! variable (read via `dotenvy`) and defaults to the public JSONPlaceholder
//! instance. The [`reqwest::Client`] is a lazy, process-wide singleton
//! backed by a [`tokio::sync::OnceCell`], so every server function shares
//! one connection pool.

use reqwest::{Client, StatusCode};
use roster::User;
use thiserror::Error;
use tokio::sync::OnceCell;

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

static CLIENT: OnceCell<Client> = OnceCell::const_new();

/// Failure talking to the upstream directory.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("user {0} not found")]
    NotFound(u32),
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}

async fn client() -> &'static Client {
    CLIENT.get_or_init(|| async { Client::new() }).await
}

/// Base URL of the upstream API, without a trailing slash.
fn base_url() -> String {
    dotenvy::dotenv().ok();

    std::env::var("USERS_API_URL")
        .map(|url| normalized(&url))
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

fn normalized(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Fetch the full directory from `GET /users`.
pub async fn fetch_users() -> Result<Vec<User>, UpstreamError> {
    let url = format!("{}/users", base_url());
    let users = client()
        .await
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(users)
}

/// Fetch one record from `GET /users/{id}`.
pub async fn fetch_user(id: u32) -> Result<User, UpstreamError> {
    let url = format!("{}/users/{id}", base_url());
    let response = client().await.get(&url).send().await?;
    if response.status() == StatusCode::NOT_FOUND {
        return Err(UpstreamError::NotFound(id));
    }
    let user = response.error_for_status()?.json().await?;
    Ok(user)
}
