// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use std::fs;
use std::path::Path;
use std::thread;

use anyhow::Result;
use tempfile::tempdir;
use ttfn::fragments::{Document, Head, Header};
use ttfn::page::{
    compose_page, ComponentRegistry, DirectorySource, PageSources, TemplateCompilationError,
};

const BASE: &str = "<html><head>{{> head}}</head><body>{{> body}}</body></html>";
const HEAD: &str = "<meta charset=\"{{head.meta.charset}}\"><title>{{head.title}}</title>\
{{#each head.stylesheet}}<link rel=\"stylesheet\" href=\"{{this}}\">{{/each}}";

fn write_templates(root: &Path, body: &str) -> Result<()> {
    fs::create_dir_all(root.join("pages"))?;
    fs::write(root.join("base.hbs"), BASE)?;
    fs::write(root.join("head.hbs"), HEAD)?;
    fs::write(root.join("pages/body.hbs"), body)?;
    Ok(())
}

fn sources() -> PageSources {
    PageSources::new("base.hbs", "head.hbs", "pages/body.hbs")
}

fn document(title: &str) -> Document {
    Document::new(
        Head::new(title)
            .with_stylesheet("/static/stylesheets/main.css")
            .with_stylesheet("/static/home/pagestyle.css"),
    )
    .with_header(Header::new("top-bar"))
}

#[test]
fn test_home_like_page_renders() -> Result<()> {
    let temp_dir = tempdir()?;
    write_templates(
        temp_dir.path(),
        "{{header header}}{{button \"Login\" \"login\"}}{{print_version}}",
    )?;

    let page = compose_page(
        &DirectorySource::new(temp_dir.path()),
        &sources(),
        document("ttfn"),
        ComponentRegistry::builder().register("print_version", |_: &[String]| {
            "<p>v0.1</p>".to_string()
        }),
    )?;

    let html = page.render_to_string()?;
    assert!(html.starts_with("<html><head><meta charset=\"utf-8\"><title>ttfn</title>"));
    assert!(html.contains(
        "<link rel=\"stylesheet\" href=\"/static/stylesheets/main.css\">\
<link rel=\"stylesheet\" href=\"/static/home/pagestyle.css\">"
    ));
    assert!(html.contains("<header class=\"top-bar\"></header>"));
    assert!(html.contains("<button id=\"login\">Login</button>"));
    assert!(html.contains("<p>v0.1</p>"));
    assert!(html.ends_with("</body></html>"));
    Ok(())
}

#[test]
fn test_render_to_writer_matches_string() -> Result<()> {
    let temp_dir = tempdir()?;
    write_templates(temp_dir.path(), "<p>{{head.title}}</p>")?;

    let page = compose_page(
        &DirectorySource::new(temp_dir.path()),
        &sources(),
        document("ttfn"),
        ComponentRegistry::builder(),
    )?;

    let mut buffer = Vec::new();
    page.render(&mut buffer)?;
    assert_eq!(String::from_utf8(buffer)?, page.render_to_string()?);
    Ok(())
}

#[test]
fn test_missing_body_fails_composition() -> Result<()> {
    let temp_dir = tempdir()?;
    write_templates(temp_dir.path(), "body")?;
    fs::remove_file(temp_dir.path().join("pages/body.hbs"))?;

    let err = compose_page(
        &DirectorySource::new(temp_dir.path()),
        &sources(),
        document("ttfn"),
        ComponentRegistry::builder(),
    )
    .unwrap_err();

    match err {
        TemplateCompilationError::SourceUnavailable { source_id, .. } => {
            assert_eq!(source_id, "pages/body.hbs")
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn test_unregistered_directive_fails_composition() -> Result<()> {
    let temp_dir = tempdir()?;
    write_templates(temp_dir.path(), "{{print_version}}{{footer \"x\"}}")?;

    let err = compose_page(
        &DirectorySource::new(temp_dir.path()),
        &sources(),
        document("ttfn"),
        ComponentRegistry::builder().register("print_version", |_: &[String]| String::new()),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        TemplateCompilationError::UnknownDirective { ref directive, .. } if directive == "footer"
    ));
    Ok(())
}

#[test]
fn test_pages_keep_their_own_documents() -> Result<()> {
    let temp_dir = tempdir()?;
    write_templates(temp_dir.path(), "<h1>{{head.title}}</h1>")?;
    let source = DirectorySource::new(temp_dir.path());

    let home = compose_page(&source, &sources(), document("ttfn"), ComponentRegistry::builder())?;
    let privacy = compose_page(
        &source,
        &sources(),
        document("ttfn - Privacy Policy"),
        ComponentRegistry::builder(),
    )?;

    assert!(home.render_to_string()?.contains("<h1>ttfn</h1>"));
    assert!(privacy
        .render_to_string()?
        .contains("<h1>ttfn - Privacy Policy</h1>"));

    // Rebinding shares the templates without touching the original page
    let other = home.with_document(document("other"));
    assert!(other.render_to_string()?.contains("<h1>other</h1>"));
    assert!(home.render_to_string()?.contains("<h1>ttfn</h1>"));
    assert_eq!(home.document().head.title, "ttfn");
    Ok(())
}

#[test]
fn test_stylesheet_change_stays_in_its_page() -> Result<()> {
    let temp_dir = tempdir()?;
    write_templates(temp_dir.path(), "<h1>{{head.title}}</h1>")?;
    let source = DirectorySource::new(temp_dir.path());
    let shared = document("ttfn");

    let plain = compose_page(&source, &sources(), shared.clone(), ComponentRegistry::builder())?;
    let styled = compose_page(&source, &sources(), shared.clone(), ComponentRegistry::builder())?;

    let mut extended = styled.document().clone();
    extended.head.stylesheet.push("/static/extra.css".to_string());
    let styled = styled.with_document(extended);

    let link = "<link rel=\"stylesheet\" href=\"/static/extra.css\">";
    assert!(styled.render_to_string()?.contains(link));
    assert!(!plain.render_to_string()?.contains(link));
    assert_eq!(plain.document(), &shared);
    Ok(())
}

#[test]
fn test_concurrent_renders_keep_their_documents() -> Result<()> {
    let temp_dir = tempdir()?;
    write_templates(
        temp_dir.path(),
        "{{header header}}{{button \"Go\" \"go\" \"disabled\"}}",
    )?;

    let page = compose_page(
        &DirectorySource::new(temp_dir.path()),
        &sources(),
        document("ttfn"),
        ComponentRegistry::builder(),
    )?;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let page = page.clone();
            thread::spawn(move || {
                let doc = Document::new(
                    Head::new(format!("page-{i}")).with_stylesheet(format!("/static/t{i}.css")),
                )
                .with_header(Header::new(format!("bar-{i}")));
                let rebound = page.with_document(doc.clone());
                (0..25)
                    .map(|n| {
                        if n % 2 == 0 {
                            let mut buffer = Vec::new();
                            page.render_document(&doc, &mut buffer)
                                .map_err(|err| err.to_string())?;
                            String::from_utf8(buffer).map_err(|err| err.to_string())
                        } else {
                            rebound.render_to_string().map_err(|err| err.to_string())
                        }
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        for html in handle.join().expect("render thread panicked") {
            let html = html.map_err(anyhow::Error::msg)?;
            assert!(html.contains(&format!("<title>page-{i}</title>")));
            assert!(html.contains(&format!("href=\"/static/t{i}.css\"")));
            assert!(html.contains(&format!("<header class=\"bar-{i}\"></header>")));
            assert!(html.contains("<button id=\"go\" disabled>Go</button>"));
            for other in (0..8).filter(|&other| other != i) {
                assert!(!html.contains(&format!("page-{other}<")));
                assert!(!html.contains(&format!("/static/t{other}.css")));
            }
        }
    }

    // The shared page still renders its own document
    assert!(page.render_to_string()?.contains("<title>ttfn</title>"));
    Ok(())
}
