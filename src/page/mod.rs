// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Page composition engine
//!
//! A [`Page`] is a compiled template unit bound to the [`Document`] it is
//! rendered against. Pages are composed once at startup with
//! [`compose_page`] and then shared read-only between requests: rendering
//! never mutates the compiled templates, so concurrent renders need no
//! locking.
//!
//! ## Example
//!
//! ```
//! use ttfn::fragments::{Document, Head, Header};
//! use ttfn::page::{compose_page, ComponentRegistry, MemorySource, PageSources};
//!
//! let source = MemorySource::new()
//!     .with("base.hbs", "<html>{{> head}}{{> body}}</html>")
//!     .with("head.hbs", "<title>{{head.title}}</title>")
//!     .with("body.hbs", "{{header header}}{{button \"Login\" \"login\"}}");
//!
//! let document = Document::new(Head::new("ttfn")).with_header(Header::new("top-bar"));
//! let page = compose_page(
//!     &source,
//!     &PageSources::new("base.hbs", "head.hbs", "body.hbs"),
//!     document,
//!     ComponentRegistry::builder(),
//! )
//! .unwrap();
//!
//! let html = page.render_to_string().unwrap();
//! assert!(html.contains("<button id=\"login\">Login</button>"));
//! ```

pub mod composer;
pub mod error;
pub mod registry;
pub mod source;

use std::io::Write;
use std::sync::Arc;

use handlebars::Handlebars;

use crate::fragments::Document;

pub use composer::{
    check_directives, compile_templates, compose_page, PageSources, BASE_TEMPLATE, BODY_TEMPLATE,
    HEAD_TEMPLATE,
};
pub use error::{TemplateCompilationError, TemplateEvaluationError};
pub use registry::{Component, ComponentRegistry, ComponentRegistryBuilder};
pub use source::{DirectorySource, MemorySource, TemplateSource};

/// A composed, render-ready page
#[derive(Clone)]
pub struct Page {
    document: Document,
    templates: Arc<Handlebars<'static>>,
}

impl Page {
    pub(crate) fn new(document: Document, templates: Arc<Handlebars<'static>>) -> Self {
        Self {
            document,
            templates,
        }
    }

    /// Data the page is rendered against
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Same compiled templates, bound to another document
    pub fn with_document(&self, document: Document) -> Page {
        Page {
            document,
            templates: Arc::clone(&self.templates),
        }
    }

    /// Render the `base` entry point against the page document
    pub fn render<W: Write>(&self, writer: W) -> Result<(), TemplateEvaluationError> {
        self.render_document(&self.document, writer)
    }

    /// Render the `base` entry point against `document`
    pub fn render_document<W: Write>(
        &self,
        document: &Document,
        writer: W,
    ) -> Result<(), TemplateEvaluationError> {
        self.templates
            .render_to_write(BASE_TEMPLATE, document, writer)?;
        Ok(())
    }

    pub fn render_to_string(&self) -> Result<String, TemplateEvaluationError> {
        Ok(self.templates.render(BASE_TEMPLATE, &self.document)?)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}
