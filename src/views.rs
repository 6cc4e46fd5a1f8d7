//! Handlebars views served by the HTML routes.
//!
//! Every `*.hbs` file in the views directory is registered under its file
//! stem, so `views/index.hbs` renders as `"index"`.

use std::{ffi::OsStr, fmt, fs, path::Path};

use handlebars::{Handlebars, RenderError, TemplateError};
use serde_json::json;

#[derive(Debug)]
pub enum ViewError {
    Io(std::io::Error),
    Template(TemplateError),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Io(e) => write!(f, "cannot read views: {}", e),
            ViewError::Template(e) => write!(f, "invalid template: {}", e),
        }
    }
}

impl std::error::Error for ViewError {}

impl From<std::io::Error> for ViewError {
    fn from(err: std::io::Error) -> Self {
        ViewError::Io(err)
    }
}

impl From<TemplateError> for ViewError {
    fn from(err: TemplateError) -> Self {
        ViewError::Template(err)
    }
}

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    /// A registry without templates. Every render fails.
    pub fn empty() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        Views { registry }
    }

    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ViewError> {
        let mut views = Self::empty();

        for entry in fs::read_dir(dir.as_ref())? {
            let file_path = entry?.path();

            if file_path.is_file() && file_path.extension() == Some(OsStr::new("hbs")) {
                if let Some(name) = file_path.file_stem().and_then(|stem| stem.to_str()) {
                    let content = fs::read_to_string(&file_path)?;
                    views.registry.register_template_string(name, content)?;
                }
            }
        }

        Ok(views)
    }

    pub fn from_templates<'a>(
        templates: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ViewError> {
        let mut views = Self::empty();
        for (name, content) in templates {
            views.registry.register_template_string(name, content)?;
        }
        Ok(views)
    }

    pub fn has(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }

    /// Renders a template that takes no data.
    pub fn render(&self, name: &str) -> Result<String, RenderError> {
        self.registry.render(name, &json!({}))
    }
}

impl fmt::Debug for Views {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.registry.get_templates().keys().collect();
        names.sort();
        f.debug_struct("Views").field("templates", &names).finish()
    }
}
