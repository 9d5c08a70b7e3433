use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::OutputStore;

/// Mock output store recording directories and files in memory.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct MemoryOutputStore {
    root: PathBuf,
    exists: RefCell<bool>,
    directories: RefCell<Vec<String>>,
    files: RefCell<BTreeMap<String, String>>,
}

#[allow(dead_code)]
impl MemoryOutputStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    /// Pretend the output root was present before the run.
    pub fn mark_existing(&self) {
        *self.exists.borrow_mut() = true;
    }

    pub fn directories(&self) -> Vec<String> {
        self.directories.borrow().clone()
    }

    pub fn files(&self) -> BTreeMap<String, String> {
        self.files.borrow().clone()
    }

    pub fn file(&self, relative: &str) -> Option<String> {
        self.files.borrow().get(relative).cloned()
    }
}

impl OutputStore for MemoryOutputStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self) -> bool {
        *self.exists.borrow()
    }

    fn create_dir(&self, relative: &str) -> Result<(), AppError> {
        *self.exists.borrow_mut() = true;
        self.directories.borrow_mut().push(relative.to_string());
        Ok(())
    }

    fn write_file(&self, relative: &str, content: &str) -> Result<(), AppError> {
        *self.exists.borrow_mut() = true;
        self.files.borrow_mut().insert(relative.to_string(), content.to_string());
        Ok(())
    }
}
