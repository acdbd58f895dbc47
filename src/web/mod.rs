// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Web server
//!
//! Serves the composed [`Site`](crate::site::Site) pages, the static assets
//! and the TikTok login endpoints.
//!
//! ## Routes
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Home page |
//! | GET | `/privacy` | Privacy policy |
//! | GET | `/tos` | Terms of service |
//! | GET | `/static/<path..>` | Files of the static directory |
//! | GET | `/oauth/tiktok` | Redirect to the TikTok authorization page |
//! | GET, POST | `/oauth/tiktok/validate` | TikTok redirect target, logged only |

pub mod builder;
pub mod handlers;
pub mod oauth;
pub mod request_guard;

pub use builder::{build_rocket, rocket_figment};
pub use oauth::{generate_state, AuthorizationRequest, TIKTOK_AUTHORIZE_URL};
pub use request_guard::RawQueryString;
