//! Raw and validated plugin configuration.
//!
//! The input file is TOML with a single `[config]` table. Scalar entries of
//! that table are plugin fields; the nested `agent`, `storages` and
//! `ext-config` tables carry structured data for the profile templates.

use std::collections::BTreeMap;

use toml::{Table, Value};

use super::identifiers::{ClassName, FileStem};
use super::plugin_kind::PluginKind;

/// Name of the top-level table describing the plugin.
pub const CONFIG_SECTION: &str = "config";
/// Nested table describing the sync agent of a client plugin.
pub const AGENT_SECTION: &str = "agent";
/// Nested table of storage descriptors keyed by storage name.
pub const STORAGES_SECTION: &str = "storages";
/// Nested table of extra key/value pairs passed through to profiles.
pub const EXT_CONFIG_SECTION: &str = "ext-config";

/// Ordered key/value properties as they are handed to templates.
pub type Properties = BTreeMap<String, String>;

/// Parsed but unvalidated configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct RawConfig {
    document: Table,
}

impl RawConfig {
    /// Parse a TOML document.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let document: Table = toml::from_str(content)?;
        Ok(Self { document })
    }

    pub fn from_table(document: Table) -> Self {
        Self { document }
    }

    /// The `[config]` table, if present and a table.
    pub fn config_table(&self) -> Option<&Table> {
        self.document.get(CONFIG_SECTION).and_then(Value::as_table)
    }
}

/// Sync agent referenced by a client profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub name: FileStem,
    pub props: Properties,
}

/// Configuration that passed validation for its declared plugin kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    pub kind: PluginKind,
    pub class_name: ClassName,
    pub name: FileStem,
    /// Every scalar field of `[config]`, rendered as a string.
    pub fields: Properties,
    /// Present for client plugins.
    pub agent: Option<Agent>,
    pub storages: BTreeMap<String, Properties>,
    pub ext_config: Properties,
}

/// Render a scalar TOML value the way it is substituted into templates.
///
/// Strings are trimmed, so the text checked by validation is the text that
/// is rendered. Arrays of scalars are joined with `,`. Tables and nested
/// arrays have no scalar rendering.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(dt) => Some(dt.to_string()),
        Value::Array(items) => {
            let parts: Option<Vec<String>> = items
                .iter()
                .map(|item| match item {
                    Value::Array(_) | Value::Table(_) => None,
                    other => scalar_text(other),
                })
                .collect();
            parts.map(|parts| parts.join(","))
        }
        Value::Table(_) => None,
    }
}

/// Whether a value counts as empty for a mandatory field.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Table(table) => table.is_empty(),
        Value::Integer(_) | Value::Float(_) | Value::Boolean(_) | Value::Datetime(_) => false,
    }
}
