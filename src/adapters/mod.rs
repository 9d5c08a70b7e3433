mod directory_template_source;
mod embedded_template_source;
mod filesystem_output_store;
pub mod template_engine;

pub use directory_template_source::DirectoryTemplateSource;
pub use embedded_template_source::EmbeddedTemplateSource;
pub use filesystem_output_store::FilesystemOutputStore;
