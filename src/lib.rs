//! Emberfall State Library
//!
//! This crate provides client-side state management for the Emberfall
//! game UI.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Error Catalog** - Translates machine-readable error codes into the
//!   human-readable messages the UI shows, with runtime registration of
//!   new codes.
//!
//! - **Settings Store** - User preferences with per-key allow-lists and
//!   defaults; only explicitly customized values are stored, and the
//!   effective view merges them over the defaults.
//!
//! - **Team Roster** - The unique line-up of characters picked for a
//!   round, enumerated in pick order.
//!
//! # Design Principles
//!
//! 1. **Validation at the boundary** - Bad inputs are rejected with clear
//!    errors before any state changes.
//!
//! 2. **No hidden coupling** - The three components share nothing; each is
//!    usable on its own.
//!
//! 3. **No I/O** - This crate is pure state; rendering, persistence, and
//!    the game loop belong to the host.
//!
//! 4. **Serialization-ready** - All types can be converted to JSON for
//!    clients.
//!
//! # Example
//!
//! ```rust
//! use emberfall_state::state::{Character, CharacterClass, ClientState, Selection};
//!
//! let mut client = ClientState::new();
//!
//! // Register a game-specific error code and translate one
//! client.catalog.register(700, "Save Error: Could not store progress".to_string());
//! assert!(client.catalog.translate(700.0).unwrap().starts_with("Save Error"));
//!
//! // Customize a preference; untouched keys keep their defaults
//! client.settings.set_user_pref("difficulty", "nightmare").unwrap();
//! let effective = client.settings.effective();
//! assert_eq!(effective["difficulty"], "nightmare");
//! assert_eq!(effective["theme"], "dark");
//!
//! // Pick a team
//! let wizard = Character::new("Jill".to_string(), CharacterClass::Wizard);
//! let archer = Character::new("Jane".to_string(), CharacterClass::Bowman);
//! client.team.add_all([wizard.into(), archer.into()]);
//! assert_eq!(client.team.member_count(), 2);
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
