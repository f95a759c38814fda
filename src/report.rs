//! JSON and HTML report emission.

use std::fs;
use std::path::Path;

use log::info;
use minijinja::{AutoEscape, Environment};
use serde_json::Value;

use crate::error::{Result, ZoomrError};
use crate::model::Project;

/// Pretty-printed JSON document for a project.
pub fn to_json(project: &Project) -> Result<String> {
    Ok(serde_json::to_string_pretty(project)?)
}

/// JSON value for a project, as handed to template renderers.
pub fn to_value(project: &Project) -> Result<Value> {
    Ok(serde_json::to_value(project)?)
}

/// Write text to a file, mapping failures to [`ZoomrError::FileWriteError`].
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| ZoomrError::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("Wrote {} ({} bytes)", path.display(), text.len());
    Ok(())
}

/// Write the project's JSON document to `path`.
pub fn write_json(project: &Project, path: &Path) -> Result<()> {
    write_text(path, &to_json(project)?)
}

/// Turns a template plus project data into text.
pub trait TemplateRenderer {
    fn render(&self, template: &str, data: &Value) -> Result<String>;
}

/// Jinja2-compatible renderer.
///
/// The project's JSON document is the template context, so templates
/// address fields directly (`{{ project_name }}`) and can loop over
/// `track_info` or `extra_audio_files`. Output is always HTML-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct JinjaTemplate;

impl TemplateRenderer for JinjaTemplate {
    fn render(&self, template: &str, data: &Value) -> Result<String> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.render_str(template, data).map_err(|e| ZoomrError::Template {
            reason: e.to_string(),
        })
    }
}

/// Render a project through a template file.
pub fn render_html(
    project: &Project,
    template_path: &Path,
    renderer: &dyn TemplateRenderer,
) -> Result<String> {
    let template = fs::read_to_string(template_path).map_err(|e| ZoomrError::FileReadError {
        path: template_path.to_path_buf(),
        source: e,
    })?;
    renderer.render(&template, &to_value(project)?)
}
