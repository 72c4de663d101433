//! Read-only projection of the session state
//!
//! This is the only surface the presentation layer reads from. Derived
//! statistics are recomputed on every call from the underlying state,
//! never cached, so they cannot drift out of sync.

use crate::core::{Player, PlayerId};
use crate::session::SessionState;

/// Read-only view of the session for rendering
pub struct SessionView<'a> {
    state: &'a SessionState,
}

impl<'a> SessionView<'a> {
    pub fn new(state: &'a SessionState) -> Self {
        SessionView { state }
    }

    /// The roster, in display (= turn) order
    pub fn roster(&self) -> &[Player] {
        &self.state.players
    }

    /// Index of the player whose turn it is
    pub fn current_turn_index(&self) -> usize {
        self.state.current_turn
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> &Player {
        &self.state.players[self.state.current_turn]
    }

    /// The in-progress rename, if any: (target id, draft text)
    pub fn edit_state(&self) -> Option<(PlayerId, &str)> {
        self.state
            .rename
            .as_ref()
            .map(|buffer| (buffer.target, buffer.draft.as_str()))
    }

    /// Number of players in the roster
    pub fn player_count(&self) -> usize {
        self.state.players.len()
    }

    /// Highest score across the roster
    pub fn max_score(&self) -> u32 {
        self.state
            .players
            .iter()
            .map(|p| p.score)
            .max()
            .unwrap_or(0)
    }

    /// Sum of all scores
    pub fn total_score(&self) -> u32 {
        self.state.players.iter().map(|p| p.score).sum()
    }
}

impl SessionState {
    /// Create a read-only view of this session
    pub fn view(&self) -> SessionView<'_> {
        SessionView::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_stats() {
        let mut state = SessionState::with_names(&["Alice", "Bob", "Carol"]);
        let a = state.players[0].id;
        let b = state.players[1].id;
        state.adjust_score(a, 4);
        state.adjust_score(b, 2);

        let view = state.view();
        assert_eq!(view.player_count(), 3);
        assert_eq!(view.max_score(), 4);
        assert_eq!(view.total_score(), 6);
        assert_eq!(view.current_player().name.as_str(), "Alice");
    }

    #[test]
    fn test_stats_track_state() {
        // Stats are pure reads: each call reflects the state at that
        // moment, with nothing to invalidate.
        let mut state = SessionState::new();
        let a = state.players[0].id;

        assert_eq!(state.view().max_score(), 0);
        state.adjust_score(a, 7);
        assert_eq!(state.view().max_score(), 7);
        state.reset_scores();
        assert_eq!(state.view().max_score(), 0);
        assert_eq!(state.view().total_score(), 0);
    }

    #[test]
    fn test_current_player_follows_turn() {
        let mut state = SessionState::with_names(&["Alice", "Bob"]);
        assert_eq!(state.view().current_player().name.as_str(), "Alice");
        state.advance_turn();
        assert_eq!(state.view().current_player().name.as_str(), "Bob");
        state.advance_turn();
        assert_eq!(state.view().current_player().name.as_str(), "Alice");
    }

    #[test]
    fn test_edit_state_projection() {
        let mut state = SessionState::new();
        let id = state.players[1].id;

        assert!(state.view().edit_state().is_none());
        state.begin_rename(id);
        state.update_draft("Bobby");
        assert_eq!(state.view().edit_state(), Some((id, "Bobby")));
        state.cancel_rename();
        assert!(state.view().edit_state().is_none());
    }
}
