//! syncgen: Generate Buteo sync plugin scaffolding from a TOML plugin description.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use adapters::{DirectoryTemplateSource, EmbeddedTemplateSource, FilesystemOutputStore};
use app::{AppContext, commands::generate, config};
use ports::TemplateSource;

pub use app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use domain::{AppError, PluginConfig, PluginKind, ValidationError};

/// Inputs of one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Plugin description file.
    pub config_path: PathBuf,
    /// Output root; its final component names the project.
    pub outdir: PathBuf,
    /// Reuse an existing output root.
    pub force: bool,
    /// Render and report without writing.
    pub dry_run: bool,
    /// Directory to read templates from instead of the built-in set.
    pub template_dir: Option<PathBuf>,
}

/// Load and validate a plugin description.
pub fn validate_config(path: &Path) -> Result<PluginConfig, AppError> {
    config::load_validated_config(path)
}

/// Validate a plugin description and generate its scaffolding.
///
/// The description is fully validated and every template rendered before
/// anything is written under `outdir`.
pub fn generate(request: &GenerateRequest) -> Result<GenerateOutcome, AppError> {
    let plugin = validate_config(&request.config_path)?;
    let options = GenerateOptions { force: request.force, dry_run: request.dry_run };

    match &request.template_dir {
        Some(dir) => generate_with(DirectoryTemplateSource::new(dir), request, &plugin, options),
        None => generate_with(EmbeddedTemplateSource::new(), request, &plugin, options),
    }
}

fn generate_with<T: TemplateSource>(
    templates: T,
    request: &GenerateRequest,
    plugin: &PluginConfig,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let output = FilesystemOutputStore::new(&request.outdir);
    let ctx = AppContext::new(templates, output);
    generate::execute(&ctx, plugin, options)
}
