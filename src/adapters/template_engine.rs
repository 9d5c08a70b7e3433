use std::fmt::Write as _;

use minijinja::{
    AutoEscape, Environment, Error, ErrorKind, Output, State, UndefinedBehavior, Value,
    escape_formatter,
};

use crate::domain::AppError;
use crate::ports::TemplateSource;

const XML_ESCAPE: &str = "xml";

/// Profile templates produce XML and get markup escaping.
fn auto_escape_for(name: &str) -> AutoEscape {
    if name.ends_with(".xml.j2") { AutoEscape::Custom(XML_ESCAPE) } else { AutoEscape::None }
}

/// Escape the XML special characters, leaving everything else as written.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn xml_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), Error> {
    if !matches!(state.auto_escape(), AutoEscape::Custom(XML_ESCAPE)) {
        return escape_formatter(out, state, value);
    }
    let text = match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    };
    let rendered = if value.is_safe() { text } else { escape_xml(&text) };
    out.write_str(&rendered)
        .map_err(|_| Error::new(ErrorKind::WriteFailure, "failed to write rendered value"))
}

/// Build a rendering environment holding the named templates.
///
/// Every template is loaded up front, so a missing or malformed template
/// fails here rather than halfway through writing output.
pub fn build_template_environment<S: TemplateSource>(
    source: &S,
    names: &[&str],
) -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(auto_escape_for);
    env.set_formatter(xml_formatter);

    for name in names {
        let content = source.template(name)?;
        env.add_template_owned(name.to_string(), content).map_err(|e| {
            AppError::TemplateRender {
                name: name.to_string(),
                details: format!("failed to register template: {}", e),
            }
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|e| AppError::TemplateRender {
        name: template_name.to_string(),
        details: format!("failed to load template: {}", e),
    })?;

    template.render(ctx).map_err(|e| AppError::TemplateRender {
        name: template_name.to_string(),
        details: e.to_string(),
    })
}
