// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the ttfn project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! `<button>` fragment
//!
//! The `button` directive takes positional string arguments:
//!
//! ```text
//! {{button "button text content" "id for button" "customAttributeKey=\"value\"" ...}}
//! ```
//!
//! Arguments are interpreted by position: the first is the inner text, the
//! second the element id and everything after that is inserted verbatim as
//! raw attribute text. At most [`MAX_BUTTON_ARGS`] arguments are considered,
//! the rest are dropped silently.
//!
//! Raw attributes are **not** escaped. Callers must only pass template
//! literals, never user supplied input.

use handlebars::html_escape;

/// Maximum number of positional arguments read by the button directive
pub const MAX_BUTTON_ARGS: usize = 20;

/// Literal returned, escaped, when the directive is called without arguments
const EMPTY_BUTTON: &str = "<button></button>";

/// Structured form of the button directive arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    /// Inner text of the element
    pub text: String,
    /// Value of the `id` attribute
    pub id: Option<String>,
    /// Raw `key="value"` attribute strings, in call order
    pub attributes: Vec<String>,
}

impl ButtonSpec {
    /// Create a button with only inner text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: None,
            attributes: Vec::new(),
        }
    }

    /// Set the element id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a raw attribute string
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Interpret positional directive arguments
    ///
    /// Returns `None` when `args` is empty. Arguments past [`MAX_BUTTON_ARGS`]
    /// are ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Option<Self> {
        let args = &args[..args.len().min(MAX_BUTTON_ARGS)];
        let (text, rest) = args.split_first()?;
        let mut spec = ButtonSpec::new(text.as_ref());

        if let Some((id, attributes)) = rest.split_first() {
            spec.id = Some(id.as_ref().to_string());
            spec.attributes = attributes.iter().map(|a| a.as_ref().to_string()).collect();
        }

        Some(spec)
    }

    /// Render the `<button>` element
    pub fn render(&self) -> String {
        let text = html_escape(&self.text);
        let Some(id) = &self.id else {
            return format!("<button>{}</button>", text);
        };

        let mut open = format!("<button id=\"{}\"", html_escape(id));
        if !self.attributes.is_empty() {
            open.push(' ');
            open.push_str(&self.attributes.join(" "));
        }

        format!("{}>{}</button>", open.trim_end(), text)
    }
}

/// Render a button from positional directive arguments
///
/// With no arguments the escaped literal `<button></button>` is returned.
pub fn render_button<S: AsRef<str>>(args: &[S]) -> String {
    match ButtonSpec::from_args(args) {
        Some(spec) => spec.render(),
        None => html_escape(EMPTY_BUTTON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(n: usize) -> Vec<String> {
        let mut out = vec!["Text".to_string(), "id0".to_string()];
        out.extend((2..n).map(|i| format!("data-a{}=\"{}\"", i, i)));
        out.truncate(n);
        out
    }

    #[test]
    fn test_no_arguments_returns_escaped_fallback() {
        let empty: [&str; 0] = [];
        assert_eq!(render_button(&empty), "&lt;button&gt;&lt;/button&gt;");
        assert!(ButtonSpec::from_args(&empty).is_none());
    }

    #[test]
    fn test_text_only() {
        assert_eq!(render_button(&["Click"]), "<button>Click</button>");
    }

    #[test]
    fn test_text_and_id() {
        assert_eq!(
            render_button(&["Click", "btn1"]),
            "<button id=\"btn1\">Click</button>"
        );
    }

    #[test]
    fn test_single_raw_attribute() {
        assert_eq!(
            render_button(&["Go", "btn2", "type=\"button\""]),
            "<button id=\"btn2\" type=\"button\">Go</button>"
        );
    }

    #[test]
    fn test_attributes_are_space_joined_and_trimmed() {
        assert_eq!(
            render_button(&["Go", "b", "type=\"submit\"", "disabled", "form=\"f\" "]),
            "<button id=\"b\" type=\"submit\" disabled form=\"f\">Go</button>"
        );
    }

    #[test]
    fn test_truncates_after_twenty_arguments() {
        let exactly = render_button(&args(MAX_BUTTON_ARGS));
        let over = render_button(&args(MAX_BUTTON_ARGS + 5));
        assert_eq!(exactly, over);
        assert!(exactly.contains("data-a19=\"19\""));
        assert!(!over.contains("data-a20"));

        let spec = ButtonSpec::from_args(&args(30)).unwrap();
        assert_eq!(spec.attributes.len(), MAX_BUTTON_ARGS - 2);
    }

    #[test]
    fn test_every_argument_count_follows_positional_rules() {
        for n in 1..=MAX_BUTTON_ARGS + 1 {
            let html = render_button(&args(n));
            assert!(html.starts_with("<button"), "count {}: {}", n, html);
            assert!(html.ends_with(">Text</button>"), "count {}: {}", n, html);
            assert_eq!(html.contains("id=\"id0\""), n >= 2, "count {}", n);
            let attrs = html.matches("data-a").count();
            assert_eq!(attrs, n.min(MAX_BUTTON_ARGS).saturating_sub(2), "count {}", n);
        }
    }

    #[test]
    fn test_text_and_id_are_escaped_attributes_are_not() {
        let html = render_button(&["<b>", "a\"b", "onclick=\"x()\""]);
        assert_eq!(
            html,
            "<button id=\"a&quot;b\" onclick=\"x()\">&lt;b&gt;</button>"
        );
    }

    #[test]
    fn test_builder_matches_positional_form() {
        let spec = ButtonSpec::new("Go")
            .with_id("btn2")
            .with_attribute("type=\"button\"");
        assert_eq!(
            Some(spec.clone()),
            ButtonSpec::from_args(&["Go", "btn2", "type=\"button\""])
        );
        assert_eq!(spec.render(), "<button id=\"btn2\" type=\"button\">Go</button>");
    }
}
