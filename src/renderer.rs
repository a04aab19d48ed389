//! Template rendering for create-halo-plugin.
//! Templates use `{{variable}}` placeholders and the `{{#if (eq a b)}}` block
//! helper. Helper blocks are rewritten into MiniJinja tags before rendering;
//! all other text is passed through literally.
use crate::error::{Error, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// A helper argument: a quoted string literal or a (dotted) variable name.
const HELPER_ARG: &str = r#"("[^"]*"|'[^']*'|[\w.]+)"#;

/// Any supported helper tag: `#if (eq a b)`, `#if x`, `#unless x`, `else`, `/if`, `/unless`.
static HELPER_TAG: LazyLock<String> = LazyLock::new(|| {
    format!(
        r"\{{\{{\s*(?:#if\s+\(\s*eq\s+{HELPER_ARG}\s+{HELPER_ARG}\s*\)|#(?:if|unless)\s+[\w.]+|else|/(?:if|unless))\s*\}}\}}"
    )
});

/// A helper alone on its line (indentation and line break included), an
/// inline helper, or a `{{ ... }}` expression.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    let tag = HELPER_TAG.as_str();
    Regex::new(&format!(
        r"(?m)^[ \t]*(?P<line_tag>{tag})[ \t]*(?:\r?\n|\z)|(?P<inline_tag>{tag})|(?P<expression>\{{\{{[^{{}}]*\}}\}})"
    ))
    .expect("token pattern is a valid regex")
});

static IF_EQ_HELPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\{{\{{\s*#if\s+\(\s*eq\s+{HELPER_ARG}\s+{HELPER_ARG}\s*\)\s*\}}\}}$"))
        .expect("if-eq pattern is a valid regex")
});
static IF_HELPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{\{\s*#(if|unless)\s+([\w.]+)\s*\}\}$").expect("if pattern is a valid regex")
});

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Name of the template, used in error messages
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Errors
    /// * `Error::RenderError` on syntax errors or references to unknown variables
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that rejects undefined variables and never escapes output.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        let source = translate_block_helpers(template);
        self.env.render_named_str(name, &source, context).map_err(|e| Error::RenderError {
            path: name.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Rewrites a template into MiniJinja source.
///
/// Helpers become `{% if %}` / `{% else %}` / `{% endif %}` tags. A helper
/// standing alone on its line removes that whole line from the output,
/// inline helpers leave the surrounding text untouched. `{{ ... }}`
/// expressions are kept as they are, and any other `{` that MiniJinja would
/// read as a delimiter is emitted as a string literal.
pub fn translate_block_helpers(template: &str) -> Cow<'_, str> {
    if !template.contains('{') {
        return Cow::Borrowed(template);
    }

    let mut source = String::with_capacity(template.len());
    let mut last = 0;
    for caps in TOKEN.captures_iter(template) {
        let Some(token) = caps.get(0) else { continue };
        push_literal(&mut source, &template[last..token.start()]);
        match caps.name("line_tag").or_else(|| caps.name("inline_tag")) {
            Some(helper) => source.push_str(&jinja_tag(helper.as_str())),
            None => source.push_str(token.as_str()),
        }
        last = token.end();
    }
    push_literal(&mut source, &template[last..]);
    Cow::Owned(source)
}

/// Converts a single helper tag into its MiniJinja statement.
fn jinja_tag(helper: &str) -> String {
    if let Some(caps) = IF_EQ_HELPER.captures(helper) {
        return format!("{{% if {} == {} %}}", &caps[1], &caps[2]);
    }
    if let Some(caps) = IF_HELPER.captures(helper) {
        let negation = if &caps[1] == "unless" { "not " } else { "" };
        return format!("{{% if {}{} %}}", negation, &caps[2]);
    }
    let keyword = helper.trim_matches(|c: char| c == '{' || c == '}' || c.is_whitespace());
    if keyword == "else" {
        "{% else %}".to_string()
    } else {
        "{% endif %}".to_string()
    }
}

/// Appends text that must come out verbatim.
fn push_literal(source: &mut String, text: &str) {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        // The next token always starts with `{`, so a trailing brace is escaped too.
        if c == '{' && matches!(chars.peek(), None | Some('{' | '%' | '#')) {
            source.push_str(r#"{{ "{" }}"#);
        } else {
            source.push(c);
        }
    }
}
