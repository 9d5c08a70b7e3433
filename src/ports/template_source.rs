use crate::domain::AppError;

/// Port for looking up template text by file name.
pub trait TemplateSource {
    /// Human-readable origin of the templates, used in error messages.
    fn label(&self) -> String;

    /// Read a template by name.
    ///
    /// Returns `AppError::TemplateNotFound` when the source has no such template.
    fn template(&self, name: &str) -> Result<String, AppError>;
}
