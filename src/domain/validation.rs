//! Schema and value validation of a plugin configuration.

use std::collections::BTreeMap;

use thiserror::Error;
use toml::{Table, Value};

use super::identifiers::{ClassName, FileStem};
use super::plugin_config::{
    AGENT_SECTION, Agent, CONFIG_SECTION, EXT_CONFIG_SECTION, PluginConfig, Properties,
    RawConfig, STORAGES_SECTION, is_blank, scalar_text,
};
use super::plugin_kind::PluginKind;

const TYPE_FIELD: &str = "type";

/// Reasons a configuration is rejected before generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required table is absent.
    #[error("'{0}' section not available")]
    MissingSection(String),

    /// `config.type` is absent.
    #[error("'type' of the plugin not provided. Possible values: client/server/storage")]
    MissingType,

    /// `config.type` names no known plugin kind.
    #[error("Invalid plug-in type '{0}'. Should be one of client/server/storage")]
    UnknownType(String),

    /// Mandatory fields are absent. Lists every absent field.
    #[error("Missing mandatory fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Mandatory fields are present with an empty value.
    #[error("Value cannot be empty for: {}", .0.join(", "))]
    EmptyFields(Vec<String>),

    /// Some mandatory fields are absent and others are empty.
    #[error(
        "Missing mandatory fields: {}; value cannot be empty for: {}",
        .missing.join(", "),
        .empty.join(", ")
    )]
    IncompleteFields { missing: Vec<String>, empty: Vec<String> },

    /// Field value is outside its allow-list.
    #[error("Wrong value '{value}' for '{field}'. Possible values: {}", .allowed.join("/"))]
    InvalidEnumValue { field: String, value: String, allowed: Vec<String> },

    /// Nested table has the wrong shape.
    #[error("Section '{section}' {reason}")]
    InvalidSection { section: String, reason: String },

    /// Field cannot be used as a class or file name.
    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidIdentifier { field: String, value: String, reason: String },
}

/// Validate a raw configuration and project it into a [`PluginConfig`].
///
/// Checks run in a fixed order: the `config` table, the plugin type, missing
/// mandatory fields, empty mandatory fields, enumerated values, then the
/// shape of nested tables and the names used for output files.
pub fn validate(raw: &RawConfig) -> Result<PluginConfig, ValidationError> {
    let config = raw
        .config_table()
        .ok_or_else(|| ValidationError::MissingSection(CONFIG_SECTION.to_string()))?;

    let kind = plugin_kind(config)?;
    check_mandatory_fields(kind, config)?;
    check_enum_values(kind, config)?;

    let class_name = ClassName::new("classname", &required_text(config, "classname")?)?;
    let name = FileStem::new("name", &required_text(config, "name")?)?;

    let mut fields = Properties::new();
    for (key, value) in config {
        if let Some(text) = scalar_text(value) {
            fields.insert(key.clone(), text);
        } else if !is_known_section(key) {
            return Err(invalid_section(key, "is not a supported nested table"));
        }
    }

    let agent = match config.get(AGENT_SECTION) {
        Some(value) => Some(parse_agent(value)?),
        None => None,
    };
    let storages = match config.get(STORAGES_SECTION) {
        Some(value) => parse_storages(value)?,
        None => BTreeMap::new(),
    };
    let ext_config = match config.get(EXT_CONFIG_SECTION) {
        Some(value) => parse_properties(EXT_CONFIG_SECTION, value)?,
        None => Properties::new(),
    };

    Ok(PluginConfig { kind, class_name, name, fields, agent, storages, ext_config })
}

fn plugin_kind(config: &Table) -> Result<PluginKind, ValidationError> {
    let value = config.get(TYPE_FIELD).ok_or(ValidationError::MissingType)?;
    let supplied = scalar_text(value).unwrap_or_else(|| value.to_string());
    PluginKind::parse(&supplied).ok_or(ValidationError::UnknownType(supplied))
}

fn check_mandatory_fields(kind: PluginKind, config: &Table) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    let mut empty = Vec::new();
    for field in kind.mandatory_fields() {
        match config.get(*field) {
            None => missing.push(field.to_string()),
            Some(value) if is_blank(value) => empty.push(field.to_string()),
            Some(_) => {}
        }
    }
    missing.sort();
    empty.sort();

    match (missing.is_empty(), empty.is_empty()) {
        (true, true) => Ok(()),
        (false, true) => Err(ValidationError::MissingFields(missing)),
        (true, false) => Err(ValidationError::EmptyFields(empty)),
        (false, false) => Err(ValidationError::IncompleteFields { missing, empty }),
    }
}

fn check_enum_values(kind: PluginKind, config: &Table) -> Result<(), ValidationError> {
    for (field, allowed) in kind.enum_constraints() {
        let Some(value) = config.get(*field) else {
            continue;
        };
        let supplied = scalar_text(value).unwrap_or_else(|| value.to_string());
        if !allowed.contains(&supplied.as_str()) {
            return Err(ValidationError::InvalidEnumValue {
                field: field.to_string(),
                value: supplied,
                allowed: allowed.iter().map(|v| v.to_string()).collect(),
            });
        }
    }
    Ok(())
}

fn required_text(config: &Table, field: &str) -> Result<String, ValidationError> {
    let value =
        config.get(field).ok_or_else(|| ValidationError::MissingFields(vec![field.to_string()]))?;
    scalar_text(value).ok_or_else(|| ValidationError::InvalidIdentifier {
        field: field.to_string(),
        value: value.to_string(),
        reason: "must be a plain value".to_string(),
    })
}

fn is_known_section(key: &str) -> bool {
    matches!(key, AGENT_SECTION | STORAGES_SECTION | EXT_CONFIG_SECTION)
}

fn section_path(section: &str) -> String {
    format!("{}.{}", CONFIG_SECTION, section)
}

fn invalid_section(section: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidSection { section: section_path(section), reason: reason.to_string() }
}

fn parse_agent(value: &Value) -> Result<Agent, ValidationError> {
    let table = value
        .as_table()
        .ok_or_else(|| invalid_section(AGENT_SECTION, "must be a table with 'name' and 'props'"))?;

    let name_value = table
        .get("name")
        .ok_or_else(|| ValidationError::MissingSection(section_path("agent.name")))?;
    let name_text = scalar_text(name_value)
        .ok_or_else(|| invalid_section("agent.name", "must be a plain value"))?;
    let name = FileStem::new("agent.name", &name_text)?;

    let props = match table.get("props") {
        Some(props) => parse_properties("agent.props", props)?,
        None => Properties::new(),
    };

    Ok(Agent { name, props })
}

fn parse_storages(value: &Value) -> Result<BTreeMap<String, Properties>, ValidationError> {
    let table = value
        .as_table()
        .ok_or_else(|| invalid_section(STORAGES_SECTION, "must be a table of storage tables"))?;

    table
        .iter()
        .map(|(storage, props)| {
            let section = format!("{}.{}", STORAGES_SECTION, storage);
            parse_properties(&section, props).map(|props| (storage.clone(), props))
        })
        .collect()
}

fn parse_properties(section: &str, value: &Value) -> Result<Properties, ValidationError> {
    let table =
        value.as_table().ok_or_else(|| invalid_section(section, "must be a key/value table"))?;

    table
        .iter()
        .map(|(key, value)| {
            scalar_text(value).map(|text| (key.clone(), text)).ok_or_else(|| {
                invalid_section(section, &format!("has a nested value for '{}'", key))
            })
        })
        .collect()
}
