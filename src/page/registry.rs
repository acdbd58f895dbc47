// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Component function registry
//!
//! Maps directive names to the components that produce their HTML. A
//! registry is assembled with [`ComponentRegistryBuilder`], frozen with
//! [`ComponentRegistryBuilder::build`] and only then handed to the template
//! compiler, which resolves every directive a template uses against it.
//!
//! ```
//! use ttfn::page::ComponentRegistry;
//!
//! let registry = ComponentRegistry::with_fragments()
//!     .register("shout", |args: &[String]| format!("<b>{}</b>", args.join(" ")))
//!     .build();
//!
//! assert!(registry.contains("button"));
//! assert!(registry.contains("shout"));
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
    RenderErrorReason,
};
use serde_json::Value;

use crate::fragments::{render_button, render_header_value, FragmentError};

/// An HTML producing directive
///
/// Arguments are the evaluated directive parameters in call order. The
/// returned string is inserted in the page as is, without escaping.
pub trait Component: Send + Sync {
    fn render(&self, args: &[&Value]) -> Result<String, FragmentError>;
}

/// Adapter exposing a variadic string function as a [`Component`]
struct StringComponent<F>(F);

impl<F> Component for StringComponent<F>
where
    F: Fn(&[String]) -> String + Send + Sync,
{
    fn render(&self, args: &[&Value]) -> Result<String, FragmentError> {
        let args: Vec<String> = args.iter().map(|value| value_to_string(value)).collect();
        Ok((self.0)(&args))
    }
}

/// The `button` directive
struct ButtonComponent;

impl Component for ButtonComponent {
    fn render(&self, args: &[&Value]) -> Result<String, FragmentError> {
        let args: Vec<String> = args.iter().map(|value| value_to_string(value)).collect();
        Ok(render_button(&args))
    }
}

/// The `header` directive
///
/// Degrades to an empty string instead of failing the page.
struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, args: &[&Value]) -> Result<String, FragmentError> {
        Ok(render_header_value(
            args.first().copied().unwrap_or(&Value::Null),
        ))
    }
}

/// Stringify a directive argument
///
/// Strings are taken as is, `null` becomes empty and any other value is
/// written as JSON text.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Mutable registry used while assembling the directives of a page
#[derive(Default, Clone)]
pub struct ComponentRegistryBuilder {
    components: BTreeMap<String, Arc<dyn Component>>,
}

impl ComponentRegistryBuilder {
    /// Register a variadic string directive, replacing any previous one
    pub fn register<F>(mut self, name: impl Into<String>, component: F) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        self.components
            .insert(name.into(), Arc::new(StringComponent(component)));
        self
    }

    /// Register an arbitrary component, replacing any previous one
    pub fn register_component(
        mut self,
        name: impl Into<String>,
        component: impl Component + 'static,
    ) -> Self {
        self.components.insert(name.into(), Arc::new(component));
        self
    }

    /// Add every directive of `other`, overwriting on name clashes
    pub fn extend(mut self, other: ComponentRegistryBuilder) -> Self {
        self.components.extend(other.components);
        self
    }

    /// Freeze the registry
    pub fn build(self) -> ComponentRegistry {
        ComponentRegistry {
            components: self.components,
        }
    }
}

/// Frozen directive registry
///
/// There is no way to add or remove a directive once built.
#[derive(Clone)]
pub struct ComponentRegistry {
    components: BTreeMap<String, Arc<dyn Component>>,
}

impl ComponentRegistry {
    /// Empty builder
    pub fn builder() -> ComponentRegistryBuilder {
        ComponentRegistryBuilder::default()
    }

    /// Builder pre-seeded with the `button` and `header` fragments
    pub fn with_fragments() -> ComponentRegistryBuilder {
        Self::builder()
            .register_component("button", ButtonComponent)
            .register_component("header", HeaderComponent)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered directive names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Expose every directive to `handlebars` as a helper
    pub fn install(&self, handlebars: &mut Handlebars<'_>) {
        for (name, component) in &self.components {
            handlebars.register_helper(
                name,
                Box::new(ComponentHelper {
                    name: name.clone(),
                    component: Arc::clone(component),
                }),
            );
        }
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.components.keys()).finish()
    }
}

/// Handlebars helper backed by a registered component
struct ComponentHelper {
    name: String,
    component: Arc<dyn Component>,
}

impl HelperDef for ComponentHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        let args: Vec<&Value> = h.params().iter().map(|param| param.value()).collect();
        let html = self.component.render(&args).map_err(|err| {
            RenderErrorReason::Other(format!("directive '{}' failed: {}", self.name, err))
        })?;
        out.write(&html)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(registry: &ComponentRegistry, template: &str, data: &Value) -> String {
        let mut handlebars = Handlebars::new();
        registry.install(&mut handlebars);
        handlebars.render_template(template, data).unwrap()
    }

    #[test]
    fn test_with_fragments_seeds_button_and_header() {
        let registry = ComponentRegistry::with_fragments().build();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["button", "header"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_overwrites() {
        let registry = ComponentRegistry::with_fragments()
            .register("button", |_: &[String]| "custom".to_string())
            .build();
        assert_eq!(registry.len(), 2);
        assert_eq!(render(&registry, "{{button \"x\"}}", &json!({})), "custom");
    }

    #[test]
    fn test_extend_applies_later_entries() {
        let extras = ComponentRegistry::builder().register("v", |_: &[String]| "2".to_string());
        let registry = ComponentRegistry::builder()
            .register("v", |_: &[String]| "1".to_string())
            .extend(extras)
            .build();
        assert_eq!(render(&registry, "{{v 0}}", &json!({})), "2");
    }

    #[test]
    fn test_button_directive_output_is_not_escaped() {
        let registry = ComponentRegistry::with_fragments().build();
        let html = render(&registry, "{{button \"<Go>\" \"btn2\" \"disabled\"}}", &json!({}));
        assert_eq!(html, "<button id=\"btn2\" disabled>&lt;Go&gt;</button>");
    }

    #[test]
    fn test_non_string_arguments_are_stringified() {
        let registry = ComponentRegistry::builder()
            .register("join", |args: &[String]| args.join("|"))
            .build();
        let html = render(&registry, "{{join 1 true n s}}", &json!({ "n": null, "s": "x" }));
        assert_eq!(html, "1|true||x");
    }

    #[test]
    fn test_header_directive_takes_context_object() {
        let registry = ComponentRegistry::with_fragments().build();
        let html = render(
            &registry,
            "{{header header}}",
            &json!({ "header": { "class_name": "top-bar" } }),
        );
        assert_eq!(html.trim(), "<header class=\"top-bar\"></header>");
    }

    #[test]
    fn test_header_directive_degrades_on_bad_input() {
        let registry = ComponentRegistry::with_fragments().build();
        assert_eq!(render(&registry, "[{{header 42}}]", &json!({})), "[]");
        assert_eq!(render(&registry, "[{{header}}]", &json!({})), "[]");
    }
}
