//! User settings store.
//!
//! Holds the default value and allow-list for every recognized preference,
//! plus a sparse overlay of the values the user actually customized. The
//! effective view merges the two.
//!
//! The recognized preferences are instance-scoped configuration: fixed when
//! the store is built, never mutated afterwards, never shared between
//! instances.

use std::collections::HashMap;
use std::fmt;

/// Definition of a single recognized preference.
#[derive(Debug, Clone)]
pub struct Preference {
    /// Preference key
    pub key: String,

    /// Value applied while the user has not customized this preference
    pub default: String,

    /// Values the user may pick, in the order the UI should offer them
    pub allowed: Vec<String>,
}

impl Preference {
    pub fn new(key: &str, default: &str, allowed: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            default: default.to_string(),
            allowed: allowed.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// User settings store.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Default value per recognized preference
    defaults: HashMap<String, String>,

    /// Allowed values per recognized preference, in authored order
    allowed: HashMap<String, Vec<String>>,

    /// Values the user explicitly customized
    user: HashMap<String, String>,
}

impl Settings {
    /// Create the standard game settings.
    pub fn new() -> Self {
        Self::from_preferences(vec![
            Preference::new("theme", "dark", &["dark", "light", "gray", "high-contrast"]),
            Preference::new("music", "trance", &["trance", "pop", "rock", "chillout", "off"]),
            Preference::new("difficulty", "easy", &["easy", "normal", "hard", "nightmare"]),
        ])
        .expect("standard preferences are well-formed")
    }

    /// Create a store from caller-supplied preference definitions.
    ///
    /// Each default must appear in its own allow-list. A key listed twice
    /// replaces its earlier definition; repeated allowed values collapse
    /// into one.
    pub fn from_preferences(
        preferences: impl IntoIterator<Item = Preference>,
    ) -> Result<Self, SettingsError> {
        let mut defaults = HashMap::new();
        let mut allowed = HashMap::new();

        for pref in preferences {
            let mut values: Vec<String> = Vec::new();
            for value in pref.allowed {
                if !values.contains(&value) {
                    values.push(value);
                }
            }

            if !values.contains(&pref.default) {
                return Err(SettingsError::DefaultNotAllowed { key: pref.key });
            }

            defaults.insert(pref.key.clone(), pref.default);
            allowed.insert(pref.key, values);
        }

        Ok(Self {
            defaults,
            allowed,
            user: HashMap::new(),
        })
    }

    /// Store a user override for a recognized preference.
    ///
    /// Overwrites any earlier override for the same key and touches nothing
    /// else. Re-setting the current value is not an error.
    pub fn set_user_pref(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let values = self
            .allowed
            .get(key)
            .ok_or_else(|| SettingsError::UnknownPreference {
                key: key.to_string(),
            })?;

        if !values.iter().any(|v| v == value) {
            return Err(SettingsError::UnsupportedValue {
                key: key.to_string(),
                value: value.to_string(),
            });
        }

        self.user.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Merged view of the settings: the user override where one exists,
    /// the default otherwise.
    ///
    /// Returns an independent snapshot holding exactly the recognized keys.
    /// Mutating the snapshot never touches the store, and the sparse user
    /// overlay stays sparse no matter how often this is called.
    pub fn effective(&self) -> HashMap<String, String> {
        let mut merged = self.defaults.clone();
        for (key, value) in &self.user {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Get the default value for a key.
    pub fn default_value(&self, key: &str) -> Option<&str> {
        self.defaults.get(key).map(String::as_str)
    }

    /// Get the user override for a key, if any.
    pub fn user_value(&self, key: &str) -> Option<&str> {
        self.user.get(key).map(String::as_str)
    }

    /// Get the allowed values for a key, in the order the UI offers them.
    pub fn allowed_values(&self, key: &str) -> Option<&[String]> {
        self.allowed.get(key).map(Vec::as_slice)
    }

    /// Check if a value is allowed for a key.
    pub fn is_allowed(&self, key: &str, value: &str) -> bool {
        self.allowed
            .get(key)
            .map_or(false, |values| values.iter().any(|v| v == value))
    }

    /// Check if a key is a recognized preference.
    pub fn has_preference(&self, key: &str) -> bool {
        self.defaults.contains_key(key)
    }

    /// Get all recognized preference keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.defaults.keys()
    }

    /// Count recognized preferences.
    pub fn preference_count(&self) -> usize {
        self.defaults.len()
    }

    /// Count user overrides.
    pub fn override_count(&self) -> usize {
        self.user.len()
    }

    /// Convert to JSON for sending to clients.
    ///
    /// One object per preference: current value, default, allowed values.
    pub fn to_json(&self) -> serde_json::Value {
        let mut prefs = serde_json::Map::new();

        for (key, default) in &self.defaults {
            let current = self.user.get(key).unwrap_or(default);
            let values = self.allowed.get(key).map(Vec::as_slice).unwrap_or(&[]);
            prefs.insert(
                key.clone(),
                serde_json::json!({
                    "value": current,
                    "default": default,
                    "allowed": values,
                }),
            );
        }

        serde_json::Value::Object(prefs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings store failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Key is not a recognized preference
    UnknownPreference { key: String },

    /// Value is not allowed for the preference
    UnsupportedValue { key: String, value: String },

    /// A definition's default value is missing from its own allow-list
    DefaultNotAllowed { key: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreference { key } => write!(f, "Unknown preference: {}", key),
            Self::UnsupportedValue { key, value } => {
                write!(f, "Value '{}' is not allowed for preference '{}'", value, key)
            }
            Self::DefaultNotAllowed { key } => {
                write!(f, "Default for preference '{}' is not in its allow-list", key)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
