use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::TemplateSource;

/// Templates read from a directory on disk, looked up by file name.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateSource {
    dir: PathBuf,
}

impl DirectoryTemplateSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateSource for DirectoryTemplateSource {
    fn label(&self) -> String {
        format!("template directory '{}'", self.dir.display())
    }

    fn template(&self, name: &str) -> Result<String, AppError> {
        match fs::read_to_string(self.dir.join(name)) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(AppError::TemplateNotFound { name: name.to_string(), source_label: self.label() })
            }
            Err(err) => Err(AppError::TemplateRender {
                name: name.to_string(),
                details: format!("failed to read template: {}", err),
            }),
        }
    }
}
