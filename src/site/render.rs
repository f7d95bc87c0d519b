use minijinja::value::Value;
use minijinja::{AutoEscape, Environment, ErrorKind, Output, State, escape_formatter};
use serde::Serialize;
use std::fmt::Write;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("template rendering failed: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Static 404 page, usable without a renderer.
pub const NOT_FOUND_PAGE: &str = include_str!("../../templates/not_found.html");

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("about.html", include_str!("../../templates/about.html")),
    ("work.html", include_str!("../../templates/work.html")),
    ("project.html", include_str!("../../templates/project.html")),
    ("not_found.html", NOT_FOUND_PAGE),
    (
        "partials/carousel.html",
        include_str!("../../templates/partials/carousel.html"),
    ),
    (
        "partials/project_card.html",
        include_str!("../../templates/partials/project_card.html"),
    ),
    (
        "partials/captioned_slide.html",
        include_str!("../../templates/partials/captioned_slide.html"),
    ),
    (
        "partials/highlight_slide.html",
        include_str!("../../templates/partials/highlight_slide.html"),
    ),
];

/// Template environment with every page and partial compiled in.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_formatter(html_formatter);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render template `name`. HTML templates escape their values automatically.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, RenderError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}

/// Output formatter for all templates.
///
/// minijinja's `escape_formatter` also escapes `/` as `&#x2f;`, which turns
/// every href and src into entity soup. Unsafe strings in HTML templates are
/// escaped here for markup characters only; everything else goes through
/// `escape_formatter`. Missing and `none` values render as nothing.
fn html_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), minijinja::Error> {
    if value.is_undefined() || value.is_none() {
        return Ok(());
    }

    let text = match value.as_str() {
        Some(text) if !value.is_safe() && matches!(state.auto_escape(), AutoEscape::Html) => text,
        _ => return escape_formatter(out, state, value),
    };

    text.chars()
        .try_for_each(|ch| match ch {
            '<' => out.write_str("&lt;"),
            '>' => out.write_str("&gt;"),
            '&' => out.write_str("&amp;"),
            '"' => out.write_str("&quot;"),
            '\'' => out.write_str("&#x27;"),
            _ => out.write_char(ch),
        })
        .map_err(|_| minijinja::Error::new(ErrorKind::WriteFailure, "failed to write output"))
}
