pub mod fixtures;
mod memory_output_store;
mod static_template_source;

pub use memory_output_store::MemoryOutputStore;
pub use static_template_source::StaticTemplateSource;
