//! Commands the presentation layer forwards into the session
//!
//! The presentation layer translates user gestures into these values and
//! applies them through [`SessionState::apply`]. All validation lives in
//! the session; an invalid command is inert.

use crate::core::PlayerId;
use crate::session::SessionState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single state-transforming intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Append a player with a default name
    AddPlayer,

    /// Remove a player by id
    RemovePlayer(PlayerId),

    /// Move the turn pointer to the next player, wrapping circularly
    AdvanceTurn,

    /// Adjust a player's score (clamped at the zero floor)
    AdjustScore { id: PlayerId, delta: i32 },

    /// Start renaming a player
    BeginRename(PlayerId),

    /// Replace the in-progress draft name
    UpdateDraft(String),

    /// Apply the in-progress rename
    CommitRename,

    /// Discard the in-progress rename
    CancelRename,

    /// Zero every player's score
    ResetScores,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddPlayer => write!(f, "add player"),
            Command::RemovePlayer(id) => write!(f, "remove player {}", id),
            Command::AdvanceTurn => write!(f, "advance turn"),
            Command::AdjustScore { id, delta } => {
                write!(f, "adjust score of {} by {:+}", id, delta)
            }
            Command::BeginRename(id) => write!(f, "begin rename of {}", id),
            Command::UpdateDraft(text) => write!(f, "update draft to {:?}", text),
            Command::CommitRename => write!(f, "commit rename"),
            Command::CancelRename => write!(f, "cancel rename"),
            Command::ResetScores => write!(f, "reset scores"),
        }
    }
}

impl SessionState {
    /// Apply a command, returning whether it changed the state
    ///
    /// Rejections are all-or-nothing: a `false` return means the state is
    /// exactly as it was.
    pub fn apply(&mut self, command: &Command) -> bool {
        match command {
            Command::AddPlayer => self.add_player(),
            Command::RemovePlayer(id) => self.remove_player(*id),
            Command::AdvanceTurn => self.advance_turn(),
            Command::AdjustScore { id, delta } => self.adjust_score(*id, *delta),
            Command::BeginRename(id) => self.begin_rename(*id),
            Command::UpdateDraft(text) => self.update_draft(text.as_str()),
            Command::CommitRename => self.commit_rename(),
            Command::CancelRename => self.cancel_rename(),
            Command::ResetScores => self.reset_scores(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dispatch() {
        let mut state = SessionState::new();
        let id = state.players[0].id;

        assert!(state.apply(&Command::AddPlayer));
        assert!(state.apply(&Command::AdjustScore { id, delta: 2 }));
        assert!(state.apply(&Command::AdvanceTurn));
        assert!(state.apply(&Command::BeginRename(id)));
        assert!(state.apply(&Command::UpdateDraft("Alice".to_string())));
        assert!(state.apply(&Command::CommitRename));

        assert_eq!(state.players.len(), 3);
        assert_eq!(state.players[0].score, 2);
        assert_eq!(state.players[0].name.as_str(), "Alice");
        assert_eq!(state.current_turn, 1);
    }

    #[test]
    fn test_rejected_apply_is_inert() {
        let mut state = SessionState::new();
        let before = state.players.len();

        assert!(!state.apply(&Command::RemovePlayer(state.players[0].id)));
        assert_eq!(state.players.len(), before);

        assert!(!state.apply(&Command::CommitRename));
        assert!(state.rename.is_none());
    }

    #[test]
    fn test_command_display() {
        let cmd = Command::AdjustScore {
            id: PlayerId::new(3),
            delta: -1,
        };
        assert_eq!(cmd.to_string(), "adjust score of 3 by -1");
    }
}
