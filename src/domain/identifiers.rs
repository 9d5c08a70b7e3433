use std::fmt;

use super::validation::ValidationError;

/// A validated C++ class name.
///
/// Guarantees:
/// - Non-empty
/// - Starts with an ASCII letter or `_`
/// - Contains only ASCII alphanumerics or `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(field: &str, value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        let mut chars = value.chars();
        let valid_start = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::InvalidIdentifier {
                field: field.to_string(),
                value: value.to_string(),
                reason: "must be a C++ identifier".to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A name that is used verbatim as a file stem inside the output tree.
///
/// Guarantees:
/// - Non-empty
/// - No path separators or NUL
/// - Not `.` or `..`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileStem(String);

impl FileStem {
    pub fn new(field: &str, value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        let reason = if value.is_empty() {
            Some("must not be empty")
        } else if value == "." || value == ".." {
            Some("must not be a relative directory reference")
        } else if value.contains(['/', '\\', '\0']) {
            Some("must not contain path separators")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ValidationError::InvalidIdentifier {
                field: field.to_string(),
                value: value.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(Self(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
