// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! ttfn library
//!
//! A small web front end for a TikTok application: server-side composed
//! HTML pages, their static assets and the TikTok login redirect.
//!
//! ## Modules
//!
//! - [`fragments`]: HTML fragments (`button`, `header`) and the document model
//! - [`page`]: the page composition engine built on Handlebars
//! - [`site`]: the home, privacy policy and terms of service pages
//! - [`web`]: the Rocket server
//! - [`config`]: YAML configuration

pub mod config;
pub mod fragments;
pub mod page;
pub mod site;
pub mod web;
