//! # API crate — fullstack server functions for Rolodex
//!
//! Defines the Dioxus server functions the web frontend calls, plus the
//! server-only [`upstream`] module that talks to the remote users API over
//! HTTP.
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` and compiled twice: once with the full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that simply forwards the call over HTTP.
//!
//! - `get_users` — the full directory, fetched once per list-view activation
//! - `get_user` — a single record, resolved for the detail view

use dioxus::prelude::*;

#[cfg(feature = "server")]
pub mod upstream;

pub use roster::User;

/// Fetch every user from the upstream directory.
#[cfg(feature = "server")]
#[get("/api/users")]
pub async fn get_users() -> Result<Vec<User>, ServerFnError> {
    upstream::fetch_users()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/users")]
pub async fn get_users() -> Result<Vec<User>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a single user by id.
#[cfg(feature = "server")]
#[get("/api/users/:id")]
pub async fn get_user(id: u32) -> Result<User, ServerFnError> {
    upstream::fetch_user(id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/users/:id")]
pub async fn get_user(id: u32) -> Result<User, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
