//! Embedded HTML templates and static assets.

use anyhow::{anyhow, Context, Result};
use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::common::html::escape;

// Embedded at compile time from packages/server/templates
#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct PageTemplates;

// Embedded at compile time from packages/server/static
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct StaticAssets;

pub const INDEX_PAGE: &str = "index.html";
pub const PORTFOLIO_PAGE: &str = "portfolio.html";

/// Render an embedded template, substituting `{{ key }}` placeholders.
///
/// All values are HTML-escaped.
pub fn render(name: &str, vars: &[(&str, &str)]) -> Result<Html<String>> {
    let file = PageTemplates::get(name).ok_or_else(|| anyhow!("Template not found: {}", name))?;
    let template = std::str::from_utf8(&file.data)
        .with_context(|| format!("Template is not UTF-8: {}", name))?;

    Ok(Html(substitute(template, vars)))
}

/// Single pass over the template; substituted text is never rescanned.
/// Unknown placeholders are left as they are.
fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let key = after[..end].trim();
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(&escape(value)),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Serve a file from the embedded static folder.
pub async fn serve_static(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
