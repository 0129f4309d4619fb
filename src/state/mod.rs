//! State management module for the Emberfall client.
//!
//! This module provides the core state types:
//!
//! - `catalog` - Error code to message translation for the UI
//! - `settings` - User preferences with validated values
//! - `team` - Character roster for a round
//! - `character` - Character data the roster references
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       ClientState                          │
//! │                                                            │
//! │  ┌──────────────┐  ┌────────────────┐  ┌───────────────┐  │
//! │  │ ErrorCatalog │  │    Settings    │  │     Team      │  │
//! │  │              │  │                │  │               │  │
//! │  │ code →       │  │ key → default  │  │ [Character]   │  │
//! │  │   message    │  │ key → allowed  │  │  in pick      │  │
//! │  │              │  │ key → user     │  │  order, no    │  │
//! │  │              │  │    (sparse)    │  │  repeats      │  │
//! │  └──────────────┘  └────────────────┘  └───────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The three components are independent; nothing flows between them. The
//! host UI reads translated errors, the effective settings, and the roster,
//! and is responsible for everything beyond that (rendering, persistence,
//! the game loop itself).
//!
//! # Usage
//!
//! ```rust
//! use emberfall_state::state::{Character, CharacterClass, ClientState, Selection};
//!
//! let mut client = ClientState::new();
//!
//! client.settings.set_user_pref("theme", "high-contrast").unwrap();
//!
//! let archer = Character::new("Wren".to_string(), CharacterClass::Bowman);
//! client.team.add(Selection::Character(archer)).unwrap();
//!
//! let message = client.catalog.translate(600.0).unwrap();
//! assert!(message.starts_with("Network Error"));
//! ```

pub mod catalog;
pub mod character;
pub mod settings;
pub mod team;

// Re-export commonly used types
pub use catalog::{CatalogError, ErrorCatalog, CODE_NETWORK_ERROR, CODE_SERVER_ERROR};
pub use character::{Character, CharacterClass};
pub use settings::{Preference, Settings, SettingsError};
pub use team::{Selection, Team, TeamError};

/// Combined client state.
///
/// This is an optional convenience struct that combines all components.
/// You can also use the individual components directly.
#[derive(Debug, Default)]
pub struct ClientState {
    pub catalog: ErrorCatalog,
    pub settings: Settings,
    pub team: Team,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything the host UI renders.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "settings": self.settings.to_json(),
            "team": self.team.to_json(),
        })
    }
}
