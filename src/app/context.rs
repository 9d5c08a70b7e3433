use crate::ports::{OutputStore, TemplateSource};

/// Where a generation run reads templates from and writes scaffolding to.
///
/// The CLI pairs the embedded or `--templates` directory source with the
/// filesystem store rooted at `--outdir`; unit tests swap in in-memory doubles.
pub struct AppContext<T: TemplateSource, O: OutputStore> {
    templates: T,
    output: O,
}

impl<T: TemplateSource, O: OutputStore> AppContext<T, O> {
    pub fn new(templates: T, output: O) -> Self {
        Self { templates, output }
    }

    /// Source of the class, profile and project templates.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Output tree rooted at the target directory.
    pub fn output(&self) -> &O {
        &self.output
    }
}
