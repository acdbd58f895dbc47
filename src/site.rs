// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! The pages served by ttfn
//!
//! Every page shares `base.hbs` and `head.hbs` and brings its own body from
//! `pages/`. All pages are composed once at startup from the configured
//! templates directory; a page that fails to compose stops the startup.

use log::info;

use crate::config::SiteConfig;
use crate::fragments::{Document, Head, Header};
use crate::page::{
    compose_page, ComponentRegistry, DirectorySource, Page, PageSources,
    TemplateCompilationError, TemplateSource,
};

/// Shared page skeleton
pub const BASE_SOURCE: &str = "base.hbs";
/// Shared document head
pub const HEAD_SOURCE: &str = "head.hbs";

pub const HOME_BODY_SOURCE: &str = "pages/home.hbs";
pub const PRIVACY_BODY_SOURCE: &str = "pages/privacy.hbs";
pub const TOS_BODY_SOURCE: &str = "pages/tos.hbs";

/// Stylesheet linked by every page
pub const MAIN_STYLESHEET: &str = "/static/stylesheets/main.css";
/// Stylesheet of the home page only
pub const HOME_STYLESHEET: &str = "/static/home/pagestyle.css";

/// The composed pages, shared read-only by the request handlers
#[derive(Debug, Clone)]
pub struct Site {
    pub home: Page,
    pub privacy: Page,
    pub tos: Page,
}

impl Site {
    /// Compose every page from the templates directory of `config`
    pub fn compose(config: &SiteConfig) -> Result<Site, TemplateCompilationError> {
        let source = DirectorySource::new(&config.templates_dir);
        info!("Composing site pages from {:?}", source.root());
        Self::compose_from(&source, config)
    }

    /// Compose every page from an arbitrary template source
    pub fn compose_from<S: TemplateSource>(
        source: &S,
        config: &SiteConfig,
    ) -> Result<Site, TemplateCompilationError> {
        Ok(Site {
            home: create_homepage(source, config)?,
            privacy: create_privacy_policy_page(source, config)?,
            tos: create_terms_of_service_page(source, config)?,
        })
    }
}

/// `<p>v<version></p>`, the `print_version` directive of the home page
pub fn print_version(_args: &[String]) -> String {
    format!("<p>v{}</p>", env!("CARGO_PKG_VERSION"))
}

fn page_sources(body: &str) -> PageSources {
    PageSources::new(BASE_SOURCE, HEAD_SOURCE, body)
}

fn base_head(config: &SiteConfig, title: impl Into<String>) -> Head {
    Head::new(title)
        .with_viewport(config.viewport.clone())
        .with_stylesheet(MAIN_STYLESHEET)
}

/// Home page: site header, login button and version
pub fn create_homepage<S: TemplateSource>(
    source: &S,
    config: &SiteConfig,
) -> Result<Page, TemplateCompilationError> {
    let head = base_head(config, config.title.clone()).with_stylesheet(HOME_STYLESHEET);
    let document = Document::new(head).with_header(Header::new(config.header_class.clone()));

    compose_page(
        source,
        &page_sources(HOME_BODY_SOURCE),
        document,
        ComponentRegistry::builder().register("print_version", print_version),
    )
}

pub fn create_privacy_policy_page<S: TemplateSource>(
    source: &S,
    config: &SiteConfig,
) -> Result<Page, TemplateCompilationError> {
    let document = Document::new(base_head(
        config,
        format!("{} - Privacy Policy", config.title),
    ));

    compose_page(
        source,
        &page_sources(PRIVACY_BODY_SOURCE),
        document,
        ComponentRegistry::builder(),
    )
}

pub fn create_terms_of_service_page<S: TemplateSource>(
    source: &S,
    config: &SiteConfig,
) -> Result<Page, TemplateCompilationError> {
    let document = Document::new(base_head(
        config,
        format!("{} - Terms of Service", config.title),
    ));

    compose_page(
        source,
        &page_sources(TOS_BODY_SOURCE),
        document,
        ComponentRegistry::builder(),
    )
}
