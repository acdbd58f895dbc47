// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Site content configuration
//!
//! Where page templates and static assets live, and the document values
//! shared by every page.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base title of the pages, the privacy and terms pages append their name to it.
    #[serde(default = "default_title")]
    pub title: String,

    /// Content of the viewport `<meta>` element.
    #[serde(default = "default_viewport")]
    pub viewport: String,

    /// Directory holding `base.hbs`, `head.hbs` and the `pages/` bodies.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Class of the home page `<header>` element.
    #[serde(default = "default_header_class")]
    pub header_class: String,
}

fn default_title() -> String {
    "ttfn".to_string()
}

fn default_viewport() -> String {
    "width=device-width, initial-scale=1".to_string()
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_header_class() -> String {
    "top-bar".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            viewport: default_viewport(),
            templates_dir: default_templates_dir(),
            static_dir: default_static_dir(),
            header_class: default_header_class(),
        }
    }
}
