use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::OutputStore;

/// Output tree on the local filesystem.
#[derive(Debug, Clone)]
pub struct FilesystemOutputStore {
    root: PathBuf,
}

impl FilesystemOutputStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl OutputStore for FilesystemOutputStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self) -> bool {
        self.root.exists()
    }

    fn create_dir(&self, relative: &str) -> Result<(), AppError> {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).map_err(|source| AppError::Write { path, source })
    }

    fn write_file(&self, relative: &str, content: &str) -> Result<(), AppError> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| AppError::Write { path: parent.to_path_buf(), source })?;
        }
        fs::write(&path, content).map_err(|source| AppError::Write { path, source })
    }
}
