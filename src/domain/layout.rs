use std::path::{Path, PathBuf};

use super::error::AppError;
use super::plugin_kind::{PluginKind, ProfileRole};

/// Directory holding every generated profile document.
pub const XML_DIR: &str = "xml";

/// Output tree for one generation run.
///
/// All paths handed out are relative to [`TargetLayout::root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLayout {
    root: PathBuf,
    dir_name: String,
}

impl TargetLayout {
    /// Create a layout rooted at `root`.
    ///
    /// The final path component names the project, so it must be a normal
    /// UTF-8 directory name.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        let dir_name = root
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidOutputDir(root.clone()))?;
        Ok(Self { root, dir_name })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Final component of the output directory.
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    /// Project name used inside the project file.
    pub fn project_name(&self, kind: PluginKind) -> String {
        format!("{}-{}", self.dir_name, kind.as_str())
    }

    /// Directories to create, parents first.
    pub fn directories(&self, kind: PluginKind) -> Vec<String> {
        let mut dirs = vec![XML_DIR.to_string()];
        dirs.extend(kind.profile_dirs().into_iter().map(str::to_string));
        dirs
    }

    pub fn header_file(&self, class_name: &str) -> String {
        format!("{}.h", class_name)
    }

    pub fn implementation_file(&self, class_name: &str) -> String {
        format!("{}.cpp", class_name)
    }

    pub fn profile_file(&self, role: ProfileRole, profile_name: &str) -> String {
        format!("{}/{}.xml", role.dir(), profile_name)
    }

    pub fn project_file(&self) -> String {
        format!("{}.pro", self.dir_name)
    }
}
