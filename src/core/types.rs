//! Strongly-typed wrappers for session concepts
//!
//! Newtypes to prevent type confusion: a player id is not an index into
//! the roster, and a player name is not an arbitrary string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Simple integer ID for players
///
/// IDs are assigned from a monotonically increasing counter owned by the
/// session and are never reused, so an id stays valid for the player's
/// lifetime even as the roster shifts around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        PlayerId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player display name (distinct from other string types)
///
/// Names may be duplicated across players; there is no uniqueness
/// constraint. The non-empty-after-trim rule is enforced at the rename
/// boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(s: impl Into<String>) -> Self {
        PlayerName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerName {
    fn from(s: String) -> Self {
        PlayerName(s)
    }
}

impl From<&str> for PlayerName {
    fn from(s: &str) -> Self {
        PlayerName(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id() {
        let id = PlayerId::new(7);
        assert_eq!(id.as_u32(), 7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(id, PlayerId::new(7));
        assert_ne!(id, PlayerId::new(8));
    }

    #[test]
    fn test_player_name() {
        let name = PlayerName::new("Alice");
        assert_eq!(name.as_str(), "Alice");
        assert_eq!(name.to_string(), "Alice");

        let from_string: PlayerName = String::from("Bob").into();
        assert_eq!(from_string.as_str(), "Bob");
    }
}
