use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::TemplateSource;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateSource;

impl EmbeddedTemplateSource {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplateSource {
    fn label(&self) -> String {
        "built-in templates".to_string()
    }

    fn template(&self, name: &str) -> Result<String, AppError> {
        let file = TEMPLATES_DIR.get_file(name).ok_or_else(|| AppError::TemplateNotFound {
            name: name.to_string(),
            source_label: self.label(),
        })?;
        file.contents_utf8().map(str::to_string).ok_or_else(|| AppError::TemplateRender {
            name: name.to_string(),
            details: "template is not UTF-8".to_string(),
        })
    }
}
