pub mod error;
pub mod identifiers;
pub mod layout;
pub mod plan;
pub mod plugin_config;
pub mod plugin_kind;
pub mod validation;

pub use error::AppError;
pub use identifiers::{ClassName, FileStem};
pub use layout::{TargetLayout, XML_DIR};
pub use plan::{GeneratedFile, GenerationPlan};
pub use plugin_config::{Agent, PluginConfig, Properties, RawConfig};
pub use plugin_kind::{PROJECT_TEMPLATE, PluginKind, ProfileRole, ProfileTemplate, TemplateSet};
pub use validation::{ValidationError, validate};
