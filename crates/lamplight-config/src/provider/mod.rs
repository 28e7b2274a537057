//! Provider definitions and the sources their configuration comes from.
//!
//! A [`ProviderDefinition`] declares everything the engine needs to decide
//! whether and how to activate a provider: the configuration source, an
//! optional executable used for availability probing, and the category tags
//! the provider should activate for. Definitions are usually read from a
//! user-supplied mapping via [`definitions_from_value`], which skips
//! malformed entries instead of rejecting the whole mapping.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Concrete configuration table type used throughout the workspace.
pub type ConfigTable = serde_json::Map<String, Value>;

/// Source from which a provider's effective configuration is derived.
///
/// The variants mirror the shapes a user may declare: a full table, a
/// zero-argument producer invoked at resolution time, a boolean flag
/// (`true` accepts defaults, `false` disables the provider), or nothing at
/// all, in which case availability falls back to the executable probe.
pub enum ConfigSource {
    /// Fully specified configuration table, used as-is.
    Table(ConfigTable),
    /// Zero-argument producer invoked once per resolution attempt.
    Producer(Box<dyn Fn() -> ConfigTable>),
    /// `true` accepts the defaults; `false` marks the provider unavailable.
    Flag(bool),
    /// Nothing declared; the declared executable decides availability.
    Absent,
}

impl fmt::Debug for ConfigSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(table) => formatter.debug_tuple("Table").field(table).finish(),
            Self::Producer(_) => formatter.write_str("Producer(..)"),
            Self::Flag(flag) => formatter.debug_tuple("Flag").field(flag).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl Default for ConfigSource {
    fn default() -> Self {
        Self::Absent
    }
}

impl<'de> Deserialize<'de> for ConfigSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(table) => Ok(Self::Table(table)),
            Value::Bool(flag) => Ok(Self::Flag(flag)),
            Value::Null => Ok(Self::Absent),
            other => Err(de::Error::custom(format!(
                "expected a table, boolean, or null, found {}",
                value_kind(&other)
            ))),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}

/// Declaration of a single provider.
///
/// # Example
///
/// ```
/// use lamplight_config::ProviderDefinition;
///
/// let definition = ProviderDefinition::new()
///     .with_executable("gopls")
///     .with_tags(["go", "gomod"]);
/// assert_eq!(definition.executable(), Some("gopls"));
/// assert_eq!(definition.tags(), ["go", "gomod"]);
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProviderDefinition {
    config: ConfigSource,
    executable: Option<String>,
    tags: Vec<String>,
}

impl ProviderDefinition {
    /// Creates an empty definition (no config, no executable, no tags).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a static configuration table.
    #[must_use]
    pub fn with_table(mut self, table: ConfigTable) -> Self {
        self.config = ConfigSource::Table(table);
        self
    }

    /// Sets a zero-argument configuration producer.
    #[must_use]
    pub fn with_producer(mut self, producer: impl Fn() -> ConfigTable + 'static) -> Self {
        self.config = ConfigSource::Producer(Box::new(producer));
        self
    }

    /// Sets a boolean configuration flag.
    #[must_use]
    pub fn with_flag(mut self, enabled: bool) -> Self {
        self.config = ConfigSource::Flag(enabled);
        self
    }

    /// Declares the executable used for availability probing.
    #[must_use]
    pub fn with_executable(mut self, command: impl Into<String>) -> Self {
        self.executable = Some(command.into());
        self
    }

    /// Declares the category tags this provider activates for.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the configuration source.
    #[must_use]
    pub fn config(&self) -> &ConfigSource {
        &self.config
    }

    /// Returns the declared executable, when any.
    #[must_use]
    pub fn executable(&self) -> Option<&str> {
        self.executable.as_deref()
    }

    /// Returns the declared category tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Extracts provider definitions from an arbitrary JSON value.
///
/// The top-level value is expected to be a mapping of provider name to
/// definition record; anything else yields the empty list. Entries that are
/// not structured records, or whose fields fail to deserialise, are skipped
/// silently. First-seen ordering of the mapping is preserved.
#[must_use]
pub fn definitions_from_value(value: Value) -> Vec<(String, ProviderDefinition)> {
    let Value::Object(entries) = value else {
        return Vec::new();
    };
    entries
        .into_iter()
        .filter_map(|(name, entry)| {
            serde_json::from_value::<ProviderDefinition>(entry)
                .ok()
                .map(|definition| (name, definition))
        })
        .collect()
}
