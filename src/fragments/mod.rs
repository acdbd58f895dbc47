// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Reusable HTML fragments and the document model
//!
//! Fragments are the HTML producing functions exposed to page templates as
//! directives (`button`, `header`). The document model is the data every
//! page template is rendered against.

pub mod button;
pub mod document;
pub mod header;

use thiserror::Error;

pub use button::{render_button, ButtonSpec, MAX_BUTTON_ARGS};
pub use document::{Document, Head, Meta, DEFAULT_CHARSET};
pub use header::{render_header, render_header_value, try_render_header, Header};

/// Errors raised while producing a fragment
#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("Invalid argument for directive '{directive}': {reason}")]
    InvalidArgument { directive: String, reason: String },

    #[error("Fragment template failed: {0}")]
    Template(#[from] handlebars::RenderError),
}
