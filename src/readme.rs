//! README rendering.
//!
//! The README is a Handlebars template compiled into the binary
//! (`templates/README.md.hbs`) and rendered against the populated catalog.
//!
//! ## Template input
//!
//! A single variable, `folders`, in catalog order:
//!
//! ```text
//! folders: [
//!   { key: "gophers", display_name: "Gophers", files: ["gopher-front.png", ...] },
//!   ...
//! ]
//! ```
//!
//! ## Helpers
//!
//! - `mod i j` → `true` when `i` is evenly divisible by `j` (`false` for
//!   `j == 0`). The bundled template uses it to start a new table row every
//!   four thumbnails: `{{#if (mod @index 4)}}`.
//!
//! Output is Markdown, so nothing is HTML-escaped. Strict mode is on: a
//! reference to a variable the data does not have is a render error.
//!
//! The document is fully rendered in memory before `README.md` is touched, so
//! a template failure leaves any existing README as it was.

use crate::catalog::{Catalog, Folder};
use crate::fsutil;
use handlebars::{Handlebars, RenderError, TemplateError, handlebars_helper};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the rendered README at the repository root.
pub const README_FILE: &str = "README.md";

const README_TEMPLATE: &str = include_str!("../templates/README.md.hbs");
const TEMPLATE_NAME: &str = "readme";

#[derive(Error, Debug)]
pub enum ReadmeError {
    #[error("Failed to parse README template: {0}")]
    Parse(#[source] TemplateError),
    #[error("Failed to render README: {0}")]
    Render(#[source] RenderError),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whether `i` is evenly divisible by `j`. Zero divides nothing.
pub fn is_divisible(i: i64, j: i64) -> bool {
    j != 0 && i % j == 0
}

handlebars_helper!(mod_helper: |i: i64, j: i64| is_divisible(i, j));

#[derive(Serialize)]
struct ReadmeData<'a> {
    folders: &'a [Folder],
}

fn registry(template: &str) -> Result<Handlebars<'static>, ReadmeError> {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(true);
    hb.register_escape_fn(handlebars::no_escape);
    hb.register_helper("mod", Box::new(mod_helper));
    hb.register_template_string(TEMPLATE_NAME, template)
        .map_err(ReadmeError::Parse)?;
    Ok(hb)
}

/// Render `template` against the folders of `catalog`.
pub fn render_template(template: &str, catalog: &Catalog) -> Result<String, ReadmeError> {
    let hb = registry(template)?;
    let data = ReadmeData {
        folders: catalog.folders(),
    };
    hb.render(TEMPLATE_NAME, &data).map_err(ReadmeError::Render)
}

/// Render the bundled README template.
pub fn render(catalog: &Catalog) -> Result<String, ReadmeError> {
    render_template(README_TEMPLATE, catalog)
}

/// Render the bundled template and write it to `<root>/README.md`.
///
/// Returns the path written.
pub fn write(root: &Path, catalog: &Catalog) -> Result<PathBuf, ReadmeError> {
    let document = render(catalog)?;
    let path = root.join(README_FILE);

    let write_err = |source| ReadmeError::Write {
        path: path.clone(),
        source,
    };
    let mut file = fsutil::create_truncated(&path).map_err(write_err)?;
    file.write_all(document.as_bytes()).map_err(write_err)?;

    tracing::info!(path = %path.display(), bytes = document.len(), "wrote README");
    Ok(path)
}
