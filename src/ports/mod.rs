mod output_store;
mod template_source;

pub use output_store::OutputStore;
pub use template_source::TemplateSource;
