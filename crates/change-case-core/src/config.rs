//! Configuration.
//!
//! Options are read through a [`ConfigProvider`] once per command and resolved into a
//! [`ChangeCaseConfig`], which is then passed explicitly into the core.

use serde::Deserialize;
use serde_json::Value;

/// Configuration section holding all change-case options.
pub const CONFIG_SECTION: &str = "changeCase";

/// Key of the "treat dots as word characters" option.
pub const INCLUDE_DOT_IN_CURRENT_WORD: &str = "includeDotInCurrentWord";

/// Source of host configuration values.
pub trait ConfigProvider {
    /// Read a boolean option, falling back to `default` when it is missing or not a boolean.
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool;
}

/// Resolved change-case options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeCaseConfig {
    /// When `true`, `.` counts as a word character while expanding a caret to the current word.
    pub include_dot_in_current_word: bool,
}

impl ChangeCaseConfig {
    /// Resolve options from a provider.
    pub fn resolve<P: ConfigProvider + ?Sized>(provider: &P) -> Self {
        Self {
            include_dot_in_current_word: provider.get_bool(
                CONFIG_SECTION,
                INCLUDE_DOT_IN_CURRENT_WORD,
                false,
            ),
        }
    }
}

impl ConfigProvider for ChangeCaseConfig {
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        match (section, key) {
            (CONFIG_SECTION, INCLUDE_DOT_IN_CURRENT_WORD) => self.include_dot_in_current_word,
            _ => default,
        }
    }
}

/// A JSON settings object, shaped like an editor `settings.json`.
///
/// Both nested (`{"changeCase": {"includeDotInCurrentWord": true}}`) and flat dotted
/// (`{"changeCase.includeDotInCurrentWord": true}`) keys are accepted; nested wins.
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    settings: Value,
}

impl JsonConfig {
    /// Wrap an already parsed settings value.
    pub fn new(settings: Value) -> Self {
        Self { settings }
    }

    /// Parse settings from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self::new)
    }

    /// Deserialize the whole `changeCase` section.
    ///
    /// A missing section yields the defaults.
    pub fn section(&self) -> Result<ChangeCaseConfig, serde_json::Error> {
        match self.settings.get(CONFIG_SECTION) {
            Some(section) => ChangeCaseConfig::deserialize(section),
            None => Ok(ChangeCaseConfig::default()),
        }
    }
}

impl ConfigProvider for JsonConfig {
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        let nested = self.settings.get(section).and_then(|s| s.get(key));
        let flat = || self.settings.get(format!("{section}.{key}"));
        nested
            .or_else(flat)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }
}
