//! Character data as seen by the client state.
//!
//! The character system (stats, abilities, combat resolution) lives on the
//! game side and owns everything else about a character. The client state
//! only needs identity, equality, and display data for the team picker.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Playable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Bowman,
    Swordsman,
    Wizard,
    Daemon,
    Undead,
    Zombie,
}

impl CharacterClass {
    /// Stable string form used in client payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bowman => "bowman",
            Self::Swordsman => "swordsman",
            Self::Wizard => "wizard",
            Self::Daemon => "daemon",
            Self::Undead => "undead",
            Self::Zombie => "zombie",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A selectable character.
///
/// Two characters are equal when their name and class match; the team
/// roster relies on this equality to reject duplicate picks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Display name
    pub name: String,

    /// Playable class
    pub class: CharacterClass,
}

impl Character {
    pub fn new(name: String, class: CharacterClass) -> Self {
        Self { name, class }
    }

    /// Convert to JSON for sending to clients.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "class": self.class.as_str(),
        })
    }
}
