//! Plugin description loading from disk.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, PluginConfig, RawConfig, validate};

/// Read and parse a plugin description without validating it.
pub fn load_config(path: &Path) -> Result<RawConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)
        .map_err(|source| AppError::ConfigRead { path: path.to_path_buf(), source })?;

    RawConfig::parse(&content).map_err(|e| AppError::ConfigParse {
        path: path.to_path_buf(),
        details: e.to_string().trim_end().to_string(),
    })
}

/// Read, parse and validate a plugin description.
pub fn load_validated_config(path: &Path) -> Result<PluginConfig, AppError> {
    let raw = load_config(path)?;
    Ok(validate(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PluginKind, ValidationError};
    use crate::testing::fixtures;
    use tempfile::TempDir;

    #[test]
    fn loads_valid_description() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plugin.toml");
        fs::write(&path, fixtures::minimal_config(PluginKind::Server)).unwrap();

        let config = load_validated_config(&path).unwrap();
        assert_eq!(config.kind, PluginKind::Server);
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, AppError::ConfigNotFound(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plugin.toml");
        fs::write(&path, "[config\ntype = ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn validation_failure_is_wrapped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plugin.toml");
        fs::write(&path, "[config]\ntype = \"widget\"\n").unwrap();

        let err = load_validated_config(&path).unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::UnknownType(_))));
    }
}
