//! Templates embedded at compile time.

use handlebars::{handlebars_helper, Handlebars};
use include_dir::{include_dir, Dir};
use serde::Serialize;

use crate::error::{EnvSyncError, Result};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// HTML report page.
pub const REPORT_HTML: &str = "report.html.hbs";

/// Live dashboard page.
pub const DASHBOARD_HTML: &str = "dashboard.html.hbs";

/// Generated Dockerfile.
pub const DOCKERFILE: &str = "Dockerfile.hbs";

/// Source of an embedded template.
pub fn source(name: &str) -> Result<&'static str> {
    TEMPLATES_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| EnvSyncError::Template(format!("missing embedded template {}", name)))
}

/// Handlebars registry with the helpers our templates use. HTML escaping is on.
pub fn handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars_helper!(capitalize: |s: String| {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        }
    });
    handlebars.register_helper("capitalize", Box::new(capitalize));

    handlebars
}

/// Render an embedded template with HTML escaping.
pub fn render_html<T: Serialize>(name: &str, data: &T) -> Result<String> {
    handlebars()
        .render_template(source(name)?, data)
        .map_err(|e| EnvSyncError::Template(format!("{}: {}", name, e)))
}

/// Render an embedded template verbatim (no escaping).
pub fn render_text<T: Serialize>(name: &str, data: &T) -> Result<String> {
    let mut handlebars = handlebars();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .render_template(source(name)?, data)
        .map_err(|e| EnvSyncError::Template(format!("{}: {}", name, e)))
}
