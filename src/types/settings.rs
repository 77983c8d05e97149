//! MCP server settings model.
//!
//! Settings are resolved once at host startup, either from the process
//! environment or from an explicit override map, and treated as read-only
//! afterwards. Unknown keys in the source are ignored. A value that cannot
//! be coerced to its field's type fails construction with a diagnostic
//! naming the field, the offending value, and the expected shape.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{Error, Result};

/// External alias keys recognized by [`McpSettings`].
///
/// These are the environment-variable names the host documents; an override
/// map uses the same keys.
pub mod alias {
    pub const NAME: &str = "OPENBB_MCP_NAME";
    pub const DESCRIPTION: &str = "OPENBB_MCP_DESCRIPTION";
    pub const DEFAULT_TOOL_CATEGORIES: &str = "OPENBB_MCP_DEFAULT_TOOL_CATEGORIES";
    pub const ALLOWED_TOOL_CATEGORIES: &str = "OPENBB_MCP_ALLOWED_TOOL_CATEGORIES";
    pub const ENABLE_TOOL_DISCOVERY: &str = "OPENBB_MCP_ENABLE_TOOL_DISCOVERY";
    pub const DESCRIBE_RESPONSES: &str = "OPENBB_MCP_DESCRIBE_RESPONSES";

    /// All recognized alias keys, in field order.
    pub const ALL: [&str; 6] = [
        NAME,
        DESCRIPTION,
        DEFAULT_TOOL_CATEGORIES,
        ALLOWED_TOOL_CATEGORIES,
        ENABLE_TOOL_DISCOVERY,
        DESCRIBE_RESPONSES,
    ];
}

const DEFAULT_DESCRIPTION: &str = "All OpenBB REST endpoints exposed as MCP tools. Enables LLM agents
to query financial data, run screeners, and build workflows using
the exact same operations available to REST clients.";

/// MCP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpSettings {
    /// Server display name.
    pub name: String,

    /// Server description advertised to MCP clients.
    pub description: String,

    /// Tool categories active on startup.
    pub default_tool_categories: Vec<String>,

    /// If set, restricts available tool categories to this list.
    /// Unset means unrestricted.
    pub allowed_tool_categories: Option<Vec<String>>,

    /// Tool discovery stays disabled in curated mode: only the fixed
    /// allow-list is served. The field remains settable so the value shows
    /// up in startup dumps; nothing in this crate acts on it.
    pub enable_tool_discovery: bool,

    /// Include response types in tool descriptions.
    pub describe_responses: bool,
}

impl Default for McpSettings {
    fn default() -> Self {
        Self {
            name: "OpenBB MCP".to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            default_tool_categories: vec!["all".to_string()],
            allowed_tool_categories: None,
            enable_tool_discovery: false,
            describe_responses: false,
        }
    }
}

impl McpSettings {
    /// Resolve settings from the process environment.
    ///
    /// Reads the `OPENBB_MCP_*` alias variables; anything unset falls back
    /// to its declared default. This is the one-shot startup path.
    pub fn from_env() -> Result<Self> {
        let mut overrides = Map::new();
        for key in alias::ALL {
            if let Ok(raw) = std::env::var(key) {
                overrides.insert(key.to_string(), Value::String(raw));
            }
        }
        tracing::debug!(
            overrides = overrides.len(),
            "resolving MCP settings from environment"
        );
        Self::from_overrides(&overrides)
    }

    /// Resolve settings from an explicit override map keyed by alias names.
    ///
    /// Keys outside the recognized alias set are ignored. List-valued fields
    /// accept either a comma-delimited string (split, trimmed, empty
    /// segments dropped) or a ready-made array of strings (used verbatim).
    pub fn from_overrides(source: &Map<String, Value>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(v) = source.get(alias::NAME) {
            settings.name = string_field("name", v)?;
        }
        if let Some(v) = source.get(alias::DESCRIPTION) {
            settings.description = string_field("description", v)?;
        }
        if let Some(v) = source.get(alias::DEFAULT_TOOL_CATEGORIES) {
            settings.default_tool_categories = list_field("default_tool_categories", v)?;
        }
        if let Some(v) = source.get(alias::ALLOWED_TOOL_CATEGORIES) {
            settings.allowed_tool_categories = Some(list_field("allowed_tool_categories", v)?);
        }
        if let Some(v) = source.get(alias::ENABLE_TOOL_DISCOVERY) {
            settings.enable_tool_discovery = bool_field("enable_tool_discovery", v)?;
        }
        if let Some(v) = source.get(alias::DESCRIBE_RESPONSES) {
            settings.describe_responses = bool_field("describe_responses", v)?;
        }

        Ok(settings)
    }

    /// Check whether a tool category survives the
    /// `allowed_tool_categories` restriction.
    pub fn category_allowed(&self, category: &str) -> bool {
        self.allowed_tool_categories
            .as_ref()
            .map_or(true, |allowed| allowed.iter().any(|c| c == category))
    }
}

/// Diagnostic dump for startup logging: type name, then one
/// `field: value` pair per line. Not a parseable format.
impl fmt::Display for McpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "McpSettings")?;
        writeln!(f)?;
        writeln!(f, "name: {}", self.name)?;
        writeln!(f, "description: {}", self.description)?;
        writeln!(
            f,
            "default_tool_categories: {:?}",
            self.default_tool_categories
        )?;
        match &self.allowed_tool_categories {
            Some(allowed) => writeln!(f, "allowed_tool_categories: {allowed:?}")?,
            None => writeln!(f, "allowed_tool_categories: None")?,
        }
        writeln!(f, "enable_tool_discovery: {}", self.enable_tool_discovery)?;
        write!(f, "describe_responses: {}", self.describe_responses)
    }
}

// =============================================================================
// Field coercion
// =============================================================================

fn string_field(field: &'static str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(Error::validation(field, "a string", other.to_string())),
    }
}

fn bool_field(field: &'static str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => parse_bool(s).ok_or_else(|| {
            Error::validation(field, "a boolean (true/false/1/0/yes/no/on/off)", s.clone())
        }),
        other => Err(Error::validation(field, "a boolean", other.to_string())),
    }
}

fn list_field(field: &'static str, value: &Value) -> Result<Vec<String>> {
    match value {
        // Comma-delimited environment form.
        Value::String(s) => Ok(split_csv(s)),
        // Already-structured form is used verbatim, no re-splitting.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(Error::validation(
                    field,
                    "a list of strings",
                    other.to_string(),
                )),
            })
            .collect(),
        other => Err(Error::validation(
            field,
            "a comma-delimited string or list of strings",
            other.to_string(),
        )),
    }
}

/// Environment-style boolean lexicon, case-insensitive.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
