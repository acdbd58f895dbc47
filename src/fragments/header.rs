// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! `<header>` fragment
//!
//! Used from a page template as `{{header header}}`. The fixed template below
//! is compiled against the [`Header`] data on every call. Any failure is
//! logged and the fragment degrades to an empty string, so the page keeps
//! rendering without its header.

use handlebars::Handlebars;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FragmentError;

const HEADER_TEMPLATE: &str = "
<header class=\"{{class_name}}\">{{#if logo_image_url}}<a href=\"{{logo_image_link}}\"><img src=\"{{logo_image_url}}\" alt=\"logo\"></a>{{/if}}</header>
";

/// Header configuration of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    /// Value of the `class` attribute
    pub class_name: String,
    /// Logo image source, no logo is rendered when empty
    pub logo_image_url: String,
    /// Target of the logo link
    pub logo_image_link: String,
}

impl Header {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Default::default()
        }
    }

    pub fn with_logo(mut self, image_url: impl Into<String>, link: impl Into<String>) -> Self {
        self.logo_image_url = image_url.into();
        self.logo_image_link = link.into();
        self
    }
}

/// Render the header fragment, propagating failures
pub fn try_render_header(header: &Header) -> Result<String, FragmentError> {
    let html = Handlebars::new().render_template(HEADER_TEMPLATE, header)?;
    debug!("header rendered for class '{}'", header.class_name);
    Ok(html)
}

/// Render the header fragment
///
/// Never fails: errors are logged and an empty string is returned.
pub fn render_header(header: &Header) -> String {
    try_render_header(header).unwrap_or_else(|err| {
        info!("Error rendering header: {}", err);
        String::new()
    })
}

/// Render the header fragment from an untyped directive argument
///
/// A value that does not deserialize into a [`Header`] yields an empty string.
pub fn render_header_value(value: &Value) -> String {
    match Header::deserialize(value) {
        Ok(header) => render_header(&header),
        Err(err) => {
            let err = FragmentError::InvalidArgument {
                directive: "header".to_string(),
                reason: err.to_string(),
            };
            info!("Error rendering header: {}", err);
            String::new()
        }
    }
}
