// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use thiserror::Error;

/// Errors raised while composing a page from its template sources
///
/// All of them are fatal at startup: pages are composed before the server
/// accepts connections.
#[derive(Error, Debug)]
pub enum TemplateCompilationError {
    #[error("Unable to load template source '{source_id}' for '{name}': {source}")]
    SourceUnavailable {
        name: String,
        source_id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Template '{name}' does not compile: {source}")]
    Syntax {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("Template '{name}' references unregistered directive '{directive}'")]
    UnknownDirective { name: String, directive: String },
}

/// Error raised while rendering a composed page
///
/// Surfaced to the request that triggered the render, other requests are
/// not affected.
#[derive(Error, Debug)]
#[error("Page render failed: {0}")]
pub struct TemplateEvaluationError(#[from] pub handlebars::RenderError);
