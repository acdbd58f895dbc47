// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Rocket server builder and configuration

use log::{info, warn};
use rocket::config::LogLevel;
use rocket::figment::Figment;
use rocket::fs::{FileServer, Options};
use rocket::{routes, Build, Rocket};

use super::handlers::{home, privacy, tos};
use super::oauth::{tiktok_login, tiktok_validate, tiktok_validate_post};
use crate::config::Config;
use crate::site::Site;

/// Rocket configuration for the server section of `config`
pub fn rocket_figment(config: &Config) -> Figment {
    rocket::Config::figment()
        .merge(("ident", config.server.name.clone()))
        .merge(("address", config.server.address.clone()))
        .merge(("port", config.server.port))
        .merge(("log_level", LogLevel::Normal))
}

/// Build a configured Rocket server instance
///
/// ### Parameters
///
/// * `figment` - The Rocket configuration figment containing server settings
/// * `config` - The application configuration, for the static directory and TikTok settings
/// * `site` - The composed pages
///
/// ### Example
///
/// ```no_run
/// use ttfn::config::Config;
/// use ttfn::site::Site;
/// use ttfn::web::{build_rocket, rocket_figment};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::default();
/// let site = Site::compose(&config.site)?;
/// let _rocket = build_rocket(rocket_figment(&config), &config, site).launch().await?;
/// # Ok(())
/// # }
/// ```
pub fn build_rocket(figment: Figment, config: &Config, site: Site) -> Rocket<Build> {
    let static_dir = &config.site.static_dir;
    if !static_dir.is_dir() {
        warn!("Static directory {:?} not found, /static will answer 404", static_dir);
    }
    info!("Serving static files from {:?}", static_dir);

    rocket::custom(figment)
        .mount("/", routes![home, privacy, tos])
        .mount(
            "/",
            routes![tiktok_login, tiktok_validate, tiktok_validate_post],
        )
        .mount(
            "/static",
            FileServer::new(static_dir, Options::default() | Options::Missing),
        )
        .manage(site)
        .manage(config.tiktok.clone())
}
