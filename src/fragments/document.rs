// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Document model bound to a page template at render time
//!
//! A [`Document`] is built once per page when the site is composed and is
//! never mutated afterwards. A page that needs different data renders with
//! a new document instead of changing the shared one.

use serde::{Deserialize, Serialize};

use super::Header;

/// Charset used when none is configured
pub const DEFAULT_CHARSET: &str = "utf-8";

fn default_charset() -> String {
    DEFAULT_CHARSET.to_string()
}

/// `<meta>` values of the document head
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default = "default_charset")]
    pub charset: String,
    #[serde(default)]
    pub viewport: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            charset: default_charset(),
            viewport: String::new(),
        }
    }
}

/// Content of the document `<head>`
///
/// Stylesheets are linked in the order they appear in `stylesheet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Head {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub stylesheet: Vec<String>,
}

impl Head {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_viewport(mut self, viewport: impl Into<String>) -> Self {
        self.meta.viewport = viewport.into();
        self
    }

    /// Append a stylesheet link after the existing ones
    pub fn with_stylesheet(mut self, url: impl Into<String>) -> Self {
        self.stylesheet.push(url.into());
        self
    }
}

/// Data passed to the `base` template of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub head: Head,
    #[serde(default)]
    pub header: Header,
}

impl Document {
    pub fn new(head: Head) -> Self {
        Self {
            head,
            header: Header::default(),
        }
    }

    pub fn with_header(mut self, header: Header) -> Self {
        self.header = header;
        self
    }
}
