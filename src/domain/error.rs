use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::validation::ValidationError;

/// Library-wide error type for syncgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Configuration file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file is not valid TOML.
    #[error("Failed to parse config file {}: {details}", path.display())]
    ConfigParse { path: PathBuf, details: String },

    /// Configuration failed schema or value validation.
    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),

    /// Target directory exists and overwriting was not requested.
    #[error("Directory '{}' already exists (use --force to overwrite)", .0.display())]
    DirectoryExists(PathBuf),

    /// Target directory path has no usable final component.
    #[error("Output directory '{}' must end in a directory name", .0.display())]
    InvalidOutputDir(PathBuf),

    /// Template is not part of the template source.
    #[error("Template '{name}' not found in {source_label}")]
    TemplateNotFound { name: String, source_label: String },

    /// Template failed to load or render.
    #[error("Failed to render template '{name}': {details}")]
    TemplateRender { name: String, details: String },

    /// Writing to the target directory failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// Process exit status for this error.
    ///
    /// Usage errors (status 2) are reported by the argument parser before an
    /// `AppError` can exist.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ConfigNotFound(_)
            | AppError::ConfigRead { .. }
            | AppError::ConfigParse { .. }
            | AppError::Validation(_) => 3,
            AppError::DirectoryExists(_) => 4,
            AppError::InvalidOutputDir(_)
            | AppError::TemplateNotFound { .. }
            | AppError::TemplateRender { .. }
            | AppError::Write { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_exit_with_config_status() {
        let err = AppError::from(ValidationError::UnknownType("widget".into()));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn directory_conflict_has_dedicated_status() {
        let err = AppError::DirectoryExists(PathBuf::from("out"));
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("'out' already exists"));
    }

    #[test]
    fn write_failure_names_the_path() {
        let err = AppError::Write {
            path: PathBuf::from("out/Foo.h"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("out/Foo.h"));
    }
}
