// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! TikTok login configuration

use serde::{Deserialize, Serialize};

/// Environment variable read when `client_key` is left empty
pub const CLIENT_KEY_ENV: &str = "TT_CK";

/// Settings of the TikTok OAuth2 authorization request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TikTokConfig {
    /// Client key of the TikTok application.
    ///
    /// Empty by default, in which case the `TT_CK` environment variable is used.
    #[serde(default)]
    pub client_key: String,

    /// The "Redirect URI" registered for the TikTok integration.
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,

    /// Comma separated scopes requested from the user.
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_redirect_uri() -> String {
    "http://localhost:8180/oauth/tiktok/validate".to_string()
}

fn default_scope() -> String {
    "user.info.basic,video.publish,video.upload".to_string()
}

impl TikTokConfig {
    /// Client key from the configuration, or from `TT_CK` when not configured
    pub fn resolved_client_key(&self) -> String {
        if self.client_key.is_empty() {
            std::env::var(CLIENT_KEY_ENV).unwrap_or_default()
        } else {
            self.client_key.clone()
        }
    }
}

impl Default for TikTokConfig {
    fn default() -> Self {
        Self {
            client_key: String::new(),
            redirect_uri: default_redirect_uri(),
            scope: default_scope(),
        }
    }
}
