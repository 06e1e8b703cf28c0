use std::fmt;
use std::str::FromStr;

use chainrelay_core::{RelayError, TryFromValue, Value};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ReasoningFilter};

pub const MODE_ENV: &str = "CHAINRELAY_FORWARD_MODE";
pub const EXTRA_PATTERNS_ENV: &str = "CHAINRELAY_EXTRA_PATTERNS";

/// What the chain-end hook does with step text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ForwardMode {
    /// Never forward. The final answer reaches the chat through the
    /// response path, so anything sent from here would duplicate it.
    #[default]
    Suppress,
    /// Forward step text unless it carries a reasoning marker.
    Filter,
}

impl fmt::Display for ForwardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardMode::Suppress => f.write_str("suppress"),
            ForwardMode::Filter => f.write_str("filter"),
        }
    }
}

impl FromStr for ForwardMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "suppress" | "disabled" | "off" => Ok(ForwardMode::Suppress),
            "filter" => Ok(ForwardMode::Filter),
            _ => Err(ConfigError::UnknownMode(value.to_string())),
        }
    }
}

impl TryFrom<String> for ForwardMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub mode: ForwardMode,
    /// Markers checked after the built-in set in filter mode.
    pub extra_patterns: Vec<String>,
}

impl RelayConfig {
    pub fn new(mode: ForwardMode) -> Self {
        Self {
            mode,
            extra_patterns: Vec::new(),
        }
    }

    pub fn filtering() -> Self {
        Self::new(ForwardMode::Filter)
    }

    pub fn with_extra_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_value(value: Value) -> Result<Self, RelayError> {
        let config = RelayConfig::try_from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `CHAINRELAY_*` keys resolved by `lookup`.
    ///
    /// Missing keys fall back to defaults. Extra patterns are `|` separated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup(MODE_ENV) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => ForwardMode::default(),
        };
        let extra_patterns = lookup(EXTRA_PATTERNS_ENV)
            .map(|raw| {
                raw.split('|')
                    .map(str::trim)
                    .filter(|pattern| !pattern.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self {
            mode,
            extra_patterns,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extra_patterns.iter().any(|pattern| pattern.trim().is_empty()) {
            return Err(ConfigError::EmptyPattern);
        }
        Ok(())
    }

    pub fn reasoning_filter(&self) -> ReasoningFilter {
        ReasoningFilter::with_patterns(self.extra_patterns.iter().cloned())
    }
}
