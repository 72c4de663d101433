//! Player representation

use crate::core::{PlayerId, PlayerName};
use serde::{Deserialize, Serialize};

/// A player in the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique ID for this player, stable for the player's lifetime
    pub id: PlayerId,

    /// Display name
    pub name: PlayerName,

    /// Current score (unsigned: the zero floor is structural)
    pub score: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<PlayerName>) -> Self {
        Player {
            id,
            name: name.into(),
            score: 0,
        }
    }

    /// Apply a signed score delta, clamping at the zero floor.
    ///
    /// The clamp applies regardless of magnitude: a -10 delta on a score
    /// of 3 lands on 0, not an error.
    pub fn adjust_score(&mut self, delta: i32) {
        if delta >= 0 {
            self.score = self.score.saturating_add(delta as u32);
        } else {
            self.score = self.score.saturating_sub(delta.unsigned_abs());
        }
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    pub fn rename(&mut self, name: impl Into<PlayerName>) {
        self.name = name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let id = PlayerId::new(1);
        let player = Player::new(id, "Alice");

        assert_eq!(player.id, id);
        assert_eq!(player.name.as_str(), "Alice");
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_score_adjustment() {
        let mut player = Player::new(PlayerId::new(1), "Bob");

        player.adjust_score(1);
        player.adjust_score(1);
        assert_eq!(player.score, 2);

        player.adjust_score(-1);
        assert_eq!(player.score, 1);

        // Floor clamp: large negative delta lands on zero
        player.adjust_score(-10);
        assert_eq!(player.score, 0);

        player.adjust_score(-1);
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_rename() {
        let mut player = Player::new(PlayerId::new(1), "Charlie");
        player.rename("Chuck");
        assert_eq!(player.name.as_str(), "Chuck");
    }

    #[test]
    fn test_reset_score() {
        let mut player = Player::new(PlayerId::new(1), "Dana");
        player.adjust_score(5);
        player.reset_score();
        assert_eq!(player.score, 0);
    }
}
