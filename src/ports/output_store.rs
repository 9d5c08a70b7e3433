use std::path::Path;

use crate::domain::AppError;

/// Port for the directory tree that receives generated files.
///
/// Paths passed to the write methods are relative to `root`.
pub trait OutputStore {
    /// Output root.
    fn root(&self) -> &Path;

    /// Whether the output root already exists.
    fn exists(&self) -> bool;

    /// Create a directory (and any missing parents).
    fn create_dir(&self, relative: &str) -> Result<(), AppError>;

    /// Write a file, replacing any existing file of the same name.
    fn write_file(&self, relative: &str, content: &str) -> Result<(), AppError>;
}
