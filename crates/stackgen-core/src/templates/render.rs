//! Text template rendering
//!
//! Templates use `[[[ name ]]]` placeholders so that JSX (`{{ }}` in style props)
//! and Vue interpolation pass through untouched. Templates only substitute; any
//! conditional text is assembled in Rust and passed in as a value.

use crate::error::{Result, ScaffoldError};
use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

/// Render `source` with `context`. Every placeholder must be defined.
pub fn render<S: Serialize>(name: &str, source: &str, context: S) -> Result<String> {
    let template_error = |source: minijinja::Error| ScaffoldError::Template {
        name: name.to_string(),
        source,
    };

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    let syntax = SyntaxConfig::builder()
        .block_delimiters("[%", "%]")
        .variable_delimiters("[[[", "]]]")
        .comment_delimiters("[#", "#]")
        .build()
        .map_err(template_error)?;
    env.set_syntax(syntax);

    env.add_template(name, source).map_err(template_error)?;
    env.get_template(name)
        .and_then(|template| template.render(context))
        .map_err(template_error)
}

/// Join lines, each terminated by a newline; empty input renders as nothing
pub fn lines<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|line| format!("{}\n", line.as_ref()))
        .collect()
}

/// Indent every non-empty line of `text` by `width` spaces
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("{}{}\n", pad, line)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_substitutes_custom_delimiters() {
        let out = render("t.tsx", "<p style={{ a: 1 }}>[[[ name ]]]</p>\n", context! { name => "x" }).unwrap();
        assert_eq!(out, "<p style={{ a: 1 }}>x</p>\n");
    }

    #[test]
    fn test_vue_interpolation_passes_through() {
        let out = render("t.vue", "<p>{{ count }}</p>", context! {}).unwrap();
        assert_eq!(out, "<p>{{ count }}</p>");
    }

    #[test]
    fn test_no_html_escaping() {
        let out = render("index.html", "[[[ tag ]]]", context! { tag => "<script>" }).unwrap();
        assert_eq!(out, "<script>");
    }

    #[test]
    fn test_undefined_placeholder_fails() {
        let err = render("t.txt", "[[[ missing ]]]", context! {}).unwrap_err();
        assert!(matches!(err, ScaffoldError::Template { ref name, .. } if name == "t.txt"));
    }

    #[test]
    fn test_lines_and_indent() {
        assert_eq!(lines(["a", "b"]), "a\nb\n");
        assert_eq!(lines(Vec::<&str>::new()), "");
        assert_eq!(indent("a\n\nb", 2), "  a\n\n  b\n");
    }
}
