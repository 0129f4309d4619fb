//! Team roster.
//!
//! Lets a user pick a unique line-up of characters for a round. Membership
//! is decided by the characters' own equality; the picker and the
//! game-start logic enumerate members in pick order.

use std::fmt;

use crate::state::character::Character;

/// What a picker slot hands over when the user confirms it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A selectable character
    Character(Character),

    /// Slot with nothing selectable in it
    Empty,
}

impl From<Character> for Selection {
    fn from(character: Character) -> Self {
        Self::Character(character)
    }
}

/// Unique set of characters chosen for a round, in pick order.
#[derive(Debug, Clone)]
pub struct Team {
    /// Members in pick order
    members: Vec<Character>,

    /// When this roster was started
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Team {
    /// Create an empty team.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    /// Add a selection to the team.
    ///
    /// Fails if the selected character is already a member. A selection
    /// that carries no character is a silent no-op.
    pub fn add(&mut self, selection: Selection) -> Result<(), TeamError> {
        let character = match selection {
            Selection::Character(character) => character,
            Selection::Empty => return Ok(()),
        };

        if self.members.contains(&character) {
            return Err(TeamError::DuplicateMember {
                name: character.name,
            });
        }

        self.members.push(character);
        Ok(())
    }

    /// Add every selection in sequence, skipping the ones that fail.
    ///
    /// A duplicate or empty selection never aborts the rest of the batch.
    /// Returns how many characters were actually added.
    pub fn add_all(&mut self, selections: impl IntoIterator<Item = Selection>) -> usize {
        let before = self.members.len();
        for selection in selections {
            let _ = self.add(selection);
        }
        self.members.len() - before
    }

    /// Snapshot of the members in pick order.
    pub fn to_vec(&self) -> Vec<Character> {
        self.members.clone()
    }

    /// Check if a character is on the team.
    pub fn contains(&self, character: &Character) -> bool {
        self.members.contains(character)
    }

    /// Get all members in pick order.
    pub fn members(&self) -> impl Iterator<Item = &Character> {
        self.members.iter()
    }

    /// Count members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Check if the team is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Convert to JSON for sending to clients.
    pub fn to_json(&self) -> serde_json::Value {
        let members: Vec<serde_json::Value> =
            self.members.iter().map(Character::to_json).collect();

        serde_json::json!({
            "members": members,
            "size": self.members.len(),
            "created_at": self.created_at.to_rfc3339(),
        })
    }
}

impl Default for Team {
    fn default() -> Self {
        Self::new()
    }
}

/// Team roster failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    /// Character is already on the team
    DuplicateMember { name: String },
}

impl fmt::Display for TeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateMember { name } => {
                write!(f, "{} is already a part of the team", name)
            }
        }
    }
}

impl std::error::Error for TeamError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::character::CharacterClass;

    fn bowman() -> Character {
        Character::new("Jane".to_string(), CharacterClass::Bowman)
    }

    fn bowperson() -> Character {
        Character::new("Xane".to_string(), CharacterClass::Bowman)
    }

    fn wizard() -> Character {
        Character::new("Jill".to_string(), CharacterClass::Wizard)
    }

    fn zombie() -> Character {
        Character::new("Jack".to_string(), CharacterClass::Zombie)
    }

    #[test]
    fn test_add() {
        let mut team = Team::new();
        assert!(team.is_empty());

        team.add(wizard().into()).unwrap();

        assert_eq!(team.member_count(), 1);
        assert!(team.contains(&wizard()));
    }

    #[test]
    fn test_add_duplicate() {
        let mut team = Team::new();

        team.add(wizard().into()).unwrap();
        let result = team.add(wizard().into());

        assert_eq!(
            result,
            Err(TeamError::DuplicateMember {
                name: "Jill".to_string()
            })
        );
        assert_eq!(team.member_count(), 1);
    }

    #[test]
    fn test_add_same_class_different_name() {
        let mut team = Team::new();

        team.add(bowman().into()).unwrap();
        team.add(bowperson().into()).unwrap();

        assert_eq!(team.member_count(), 2);
    }

    #[test]
    fn test_add_empty_selection() {
        let mut team = Team::new();

        team.add(Selection::Empty).unwrap();

        assert!(team.is_empty());
    }

    #[test]
    fn test_add_all() {
        let mut team = Team::new();

        let added = team.add_all([wizard().into(), bowman().into(), zombie().into()]);

        assert_eq!(added, 3);
        assert_eq!(team.member_count(), 3);
    }

    #[test]
    fn test_add_all_skips_empty_slots() {
        let mut team = Team::new();

        let added = team.add_all([wizard().into(), Selection::Empty, bowman().into()]);

        assert_eq!(added, 2);
        assert_eq!(team.to_vec(), vec![wizard(), bowman()]);
    }

    #[test]
    fn test_add_all_absorbs_duplicates() {
        let mut team = Team::new();
        team.add(wizard().into()).unwrap();

        let added = team.add_all([bowman().into(), wizard().into(), zombie().into()]);

        assert_eq!(added, 2);
        assert_eq!(team.member_count(), 3);
    }

    #[test]
    fn test_to_vec_preserves_pick_order() {
        let mut team = Team::new();

        team.add_all([
            wizard().into(),
            bowman().into(),
            bowperson().into(),
            zombie().into(),
        ]);

        assert_eq!(
            team.to_vec(),
            vec![wizard(), bowman(), bowperson(), zombie()]
        );

        // Repeated calls reflect current membership, nothing cached
        assert_eq!(team.to_vec(), team.to_vec());
    }

    #[test]
    fn test_to_json() {
        let mut team = Team::new();
        team.add(wizard().into()).unwrap();

        let json = team.to_json();

        assert_eq!(json["size"], 1);
        assert_eq!(json["members"][0]["name"], "Jill");
        assert_eq!(json["members"][0]["class"], "wizard");
    }
}
