// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Page route handlers

use log::error;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::status::Custom;
use rocket::{get, State};

use crate::page::Page;
use crate::site::Site;

/// A rendered page, or `500 Internal Server Error` without a body
pub type PageResponse = Result<RawHtml<String>, Custom<()>>;

/// Render `page` into a buffer before answering
///
/// Nothing is sent when rendering fails half way.
pub fn render_page(name: &str, page: &Page) -> PageResponse {
    let mut buffer = Vec::new();
    if let Err(err) = page.render(&mut buffer) {
        error!("Failed to render the {} page: {}", name, err);
        return Err(Custom(Status::InternalServerError, ()));
    }

    String::from_utf8(buffer).map(RawHtml).map_err(|err| {
        error!("The {} page is not valid UTF-8: {}", name, err);
        Custom(Status::InternalServerError, ())
    })
}

#[get("/")]
pub fn home(site: &State<Site>) -> PageResponse {
    render_page("home", &site.home)
}

#[get("/privacy")]
pub fn privacy(site: &State<Site>) -> PageResponse {
    render_page("privacy policy", &site.privacy)
}

#[get("/tos")]
pub fn tos(site: &State<Site>) -> PageResponse {
    render_page("terms of service", &site.tos)
}
