/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output root.
    pub path: String,
    /// Rendered file content.
    pub content: String,
}

/// Everything one run will create, computed before the first write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Directories relative to the output root, parents first.
    pub directories: Vec<String>,
    /// Files in write order: class files, profiles, project file.
    pub files: Vec<GeneratedFile>,
}

impl GenerationPlan {
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.path == path)
    }

    pub fn file_paths(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.path.as_str()).collect()
    }
}
