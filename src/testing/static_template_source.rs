use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::TemplateSource;

/// In-memory template source for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplateSource {
    templates: HashMap<String, String>,
}

impl StaticTemplateSource {
    pub fn new<'a>(templates: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let templates = templates
            .into_iter()
            .map(|(name, content)| (name.to_string(), content.to_string()))
            .collect();
        Self { templates }
    }
}

impl TemplateSource for StaticTemplateSource {
    fn label(&self) -> String {
        "test templates".to_string()
    }

    fn template(&self, name: &str) -> Result<String, AppError> {
        self.templates.get(name).cloned().ok_or_else(|| AppError::TemplateNotFound {
            name: name.to_string(),
            source_label: self.label(),
        })
    }
}
