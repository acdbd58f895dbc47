// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Page composition
//!
//! A page is compiled from three sources registered under fixed names:
//!
//! - `base`: the entry point, pulls in the fragments with `{{> head}}` and `{{> body}}`
//! - `head`: content of the `<head>` element
//! - `body`: the page specific content
//!
//! The directive registry is frozen before any source is compiled. Each
//! source is then checked for helper invocations that name neither a
//! built-in helper nor a registered directive, so a typo in a template
//! stops the application at startup instead of failing the first request.

use std::sync::Arc;

use handlebars::template::{HelperTemplate, Parameter, Template, TemplateElement};
use handlebars::Handlebars;
use log::debug;

use super::error::TemplateCompilationError;
use super::registry::{ComponentRegistry, ComponentRegistryBuilder};
use super::source::TemplateSource;
use super::Page;
use crate::fragments::Document;

/// Name of the entry point template
pub const BASE_TEMPLATE: &str = "base";
/// Name of the head fragment template
pub const HEAD_TEMPLATE: &str = "head";
/// Name of the body fragment template
pub const BODY_TEMPLATE: &str = "body";

/// Helpers provided by the template engine itself
const BUILTIN_HELPERS: &[&str] = &[
    "if", "unless", "each", "with", "lookup", "log", "raw", "eq", "ne", "gt", "gte", "lt", "lte",
    "and", "or", "not", "len",
];

/// Identifiers of the three sources of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSources {
    pub base: String,
    pub head: String,
    pub body: String,
}

impl PageSources {
    pub fn new(base: impl Into<String>, head: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            head: head.into(),
            body: body.into(),
        }
    }

    fn entries(&self) -> [(&'static str, &str); 3] {
        [
            (BASE_TEMPLATE, self.base.as_str()),
            (HEAD_TEMPLATE, self.head.as_str()),
            (BODY_TEMPLATE, self.body.as_str()),
        ]
    }
}

/// Compose a page
///
/// The directive registry is the `button` and `header` fragments plus
/// `extras`, which win on name clashes. No page is returned if any source
/// is missing, does not compile or uses an unknown directive.
pub fn compose_page<S: TemplateSource>(
    source: &S,
    sources: &PageSources,
    document: Document,
    extras: ComponentRegistryBuilder,
) -> Result<Page, TemplateCompilationError> {
    let registry = ComponentRegistry::with_fragments().extend(extras).build();
    debug!("Composing page from {:?} with directives {:?}", sources, registry);
    let templates = compile_templates(source, sources, &registry)?;
    Ok(Page::new(document, Arc::new(templates)))
}

/// Load and compile the three sources of a page into one template registry
pub fn compile_templates<S: TemplateSource>(
    source: &S,
    sources: &PageSources,
    registry: &ComponentRegistry,
) -> Result<Handlebars<'static>, TemplateCompilationError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    registry.install(&mut handlebars);

    for (name, id) in sources.entries() {
        let text = source
            .load(id)
            .map_err(|err| TemplateCompilationError::SourceUnavailable {
                name: name.to_string(),
                source_id: id.to_string(),
                source: err,
            })?;

        handlebars
            .register_template_string(name, &text)
            .map_err(|err| TemplateCompilationError::Syntax {
                name: name.to_string(),
                source: Box::new(err),
            })?;

        if let Some(template) = handlebars.get_template(name) {
            check_directives(name, template, registry)?;
        }
        debug!("Template '{}' compiled from '{}'", name, id);
    }

    Ok(handlebars)
}

/// Fail on the first helper invocation in `template` that cannot be resolved
pub fn check_directives(
    name: &str,
    template: &Template,
    registry: &ComponentRegistry,
) -> Result<(), TemplateCompilationError> {
    let mut invoked = Vec::new();
    collect_directives(template, &mut invoked);

    match invoked
        .into_iter()
        .find(|directive| !is_known(directive, registry))
    {
        Some(directive) => Err(TemplateCompilationError::UnknownDirective {
            name: name.to_string(),
            directive: directive.to_string(),
        }),
        None => Ok(()),
    }
}

fn is_known(directive: &str, registry: &ComponentRegistry) -> bool {
    BUILTIN_HELPERS.contains(&directive) || registry.contains(directive)
}

/// Names used as helpers in `template`, in order of appearance
///
/// A name is a helper when it opens a block (`{{#name}}`, or a chained
/// `{{else name}}`) or is followed by arguments, in a mustache
/// (`{{name arg}}`) or a sub-expression (`(name arg)`). Plain field
/// references such as `{{head.title}}` are not helpers. Comments, escaped
/// mustaches and raw block contents are text for the engine and are skipped.
fn collect_directives<'a>(template: &'a Template, names: &mut Vec<&'a str>) {
    for element in &template.elements {
        match element {
            TemplateElement::Expression(helper) | TemplateElement::HtmlExpression(helper) => {
                collect_helper(helper, false, names);
            }
            TemplateElement::HelperBlock(helper) => {
                collect_helper(helper, true, names);
                for nested in [&helper.template, &helper.inverse].into_iter().flatten() {
                    collect_directives(nested, names);
                }
            }
            TemplateElement::DecoratorBlock(decorator) | TemplateElement::PartialBlock(decorator) => {
                if let Some(nested) = &decorator.template {
                    collect_directives(nested, names);
                }
            }
            _ => {}
        }
    }
}

fn collect_helper<'a>(helper: &'a HelperTemplate, block: bool, names: &mut Vec<&'a str>) {
    if block || !helper.params.is_empty() || !helper.hash.is_empty() {
        names.extend(helper.name.as_name());
    }

    for parameter in helper.params.iter().chain(helper.hash.values()) {
        if let Parameter::Subexpression(sub) = parameter {
            if let TemplateElement::Expression(inner) = sub.as_element() {
                collect_helper(inner, false, names);
            }
        }
    }
}
