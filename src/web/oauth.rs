// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! TikTok login
//!
//! Implements the first leg of the TikTok OAuth2 authorization code flow:
//! the user is redirected to TikTok, which sends them back to the configured
//! "Redirect URI". The callback is only recorded, no token exchange happens.

use log::{debug, error, info};
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::response::Redirect;
use rocket::{get, post, State};
use url::Url;
use uuid::Uuid;

use super::request_guard::RawQueryString;
use crate::config::TikTokConfig;

/// TikTok authorization endpoint
pub const TIKTOK_AUTHORIZE_URL: &str = "https://www.tiktok.com/v2/auth/authorize/";

/// Random `state` value of an authorization request
///
/// Taken from the first 32 bits of a version 4 UUID.
pub fn generate_state() -> u32 {
    Uuid::new_v4().as_fields().0
}

/// Parameters of a TikTok authorization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub client_key: String,
    pub redirect_uri: String,
    pub scope: String,
    pub state: u32,
}

impl AuthorizationRequest {
    /// Request for the configured application, with a fresh `state`
    pub fn from_config(config: &TikTokConfig) -> Self {
        Self {
            client_key: config.resolved_client_key(),
            redirect_uri: config.redirect_uri.clone(),
            scope: config.scope.clone(),
            state: generate_state(),
        }
    }

    /// Authorization URL on `endpoint` with the request as query parameters
    pub fn url_for(&self, endpoint: &str) -> Result<Url, url::ParseError> {
        let state = self.state.to_string();
        Url::parse_with_params(
            endpoint,
            &[
                ("client_key", self.client_key.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", self.scope.as_str()),
                ("state", state.as_str()),
            ],
        )
    }

    /// Authorization URL on the TikTok endpoint
    pub fn url(&self) -> Result<Url, url::ParseError> {
        self.url_for(TIKTOK_AUTHORIZE_URL)
    }
}

/// Redirect the user to the TikTok authorization page
///
/// Answers `422 Unprocessable Entity` when no valid URL can be built.
#[get("/oauth/tiktok")]
pub fn tiktok_login(config: &State<TikTokConfig>) -> Result<Redirect, Custom<()>> {
    let request = AuthorizationRequest::from_config(config);
    if request.client_key.is_empty() {
        debug!("No TikTok client key configured");
    }

    match request.url() {
        Ok(url) => {
            debug!("Redirecting to TikTok with state {}", request.state);
            Ok(Redirect::temporary(url.to_string()))
        }
        Err(err) => {
            error!("Cannot build the TikTok authorization URL: {}", err);
            Err(Custom(Status::UnprocessableEntity, ()))
        }
    }
}

/// TikTok redirect target, the query is logged and discarded
#[get("/oauth/tiktok/validate")]
pub fn tiktok_validate(query: RawQueryString) {
    info!(
        "TikTok callback query: {}",
        query.as_deref().unwrap_or_default()
    );
}

/// Form post variant of the TikTok redirect target, the body is logged and discarded
#[post("/oauth/tiktok/validate", data = "<body>")]
pub fn tiktok_validate_post(body: Vec<u8>) {
    info!("TikTok callback body: {}", String::from_utf8_lossy(&body));
}
