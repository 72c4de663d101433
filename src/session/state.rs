//! Main session state structure
//!
//! This is the single owner of the roster, the turn pointer, and the
//! rename buffer. Every command is atomic: preconditions are checked
//! before any mutation, so a rejected command leaves the state untouched,
//! and roster mutation and pointer re-normalization happen in one step.

use crate::core::{Player, PlayerId};
use crate::session::{SessionLogger, VerbosityLevel};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Roster floor: a session never drops below two players
pub const MIN_PLAYERS: usize = 2;

/// Roster capacity
pub const MAX_PLAYERS: usize = 8;

/// Transient buffer for an in-progress rename
///
/// Present only between begin and commit/cancel. Only one rename may be
/// active at a time; beginning another overwrites this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameBuffer {
    /// The player being renamed
    pub target: PlayerId,
    /// Draft name, held verbatim (trimming happens at commit)
    pub draft: String,
}

/// Complete session state
///
/// Insertion order of `players` is significant: it defines both display
/// order and turn order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// The roster (2-8 players, inline storage matches the cap)
    pub players: SmallVec<[Player; MAX_PLAYERS]>,

    /// Index of the player whose turn it is, always `< players.len()`
    pub current_turn: usize,

    /// In-progress rename, if any
    pub rename: Option<RenameBuffer>,

    /// Monotonic id counter; ids are never reused
    next_player_id: u32,

    /// Centralized logger for session events
    #[serde(skip)]
    pub logger: SessionLogger,
}

impl SessionState {
    /// Create a session with the default two players
    pub fn new() -> Self {
        Self::with_names(&[])
    }

    /// Create a session seeded with the given names
    ///
    /// Fewer than two names are padded with default `Player {n}` names;
    /// names beyond the roster cap are ignored.
    pub fn with_names(names: &[&str]) -> Self {
        let mut state = SessionState {
            players: SmallVec::new(),
            current_turn: 0,
            rename: None,
            next_player_id: 0,
            logger: SessionLogger::new(),
        };
        for name in names.iter().take(MAX_PLAYERS) {
            let id = state.fresh_id();
            state.players.push(Player::new(id, *name));
        }
        while state.players.len() < MIN_PLAYERS {
            let name = format!("Player {}", state.players.len() + 1);
            let id = state.fresh_id();
            state.players.push(Player::new(id, name));
        }
        state
    }

    fn fresh_id(&mut self) -> PlayerId {
        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        id
    }

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Look up a player by id
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Append a new player with a fresh id and a default name
    ///
    /// Rejected when the roster is at capacity. The turn pointer is
    /// unaffected.
    pub fn add_player(&mut self) -> bool {
        if self.players.len() >= MAX_PLAYERS {
            self.logger.rejected("add_player (roster at capacity)");
            return false;
        }
        let name = format!("Player {}", self.players.len() + 1);
        let id = self.fresh_id();
        self.players.push(Player::new(id, name.as_str()));
        self.logger.command(format!("added {} (id {})", name, id));
        true
    }

    /// Remove a player and re-normalize the turn pointer in the same step
    ///
    /// Rejected at the two-player floor or for an unknown id. The pointer
    /// rule, applied against the shrunk roster:
    /// 1. pointer past the end resets to 0;
    /// 2. otherwise a removal at or before the pointer shifts it back by
    ///    one (unless it is already 0);
    /// 3. otherwise the pointer is untouched.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        if self.players.len() <= MIN_PLAYERS {
            self.logger.rejected("remove_player (roster at floor)");
            return false;
        }
        let Some(removed_index) = self.index_of(id) else {
            self.logger.rejected(format!("remove_player (unknown id {})", id));
            return false;
        };
        let removed = self.players.remove(removed_index);
        if self.current_turn >= self.players.len() {
            self.current_turn = 0;
        } else if removed_index <= self.current_turn && self.current_turn > 0 {
            self.current_turn -= 1;
        }
        self.logger
            .command(format!("removed {} (id {})", removed.name, removed.id));
        true
    }

    /// Advance the turn pointer circularly
    pub fn advance_turn(&mut self) -> bool {
        self.current_turn = (self.current_turn + 1) % self.players.len();
        let name = self.players[self.current_turn].name.clone();
        self.logger.command(format!("turn: {}", name));
        true
    }

    /// Adjust a player's score by a signed delta, clamped at zero
    ///
    /// Rejected for an unknown id. Deltas of any magnitude are accepted.
    pub fn adjust_score(&mut self, id: PlayerId, delta: i32) -> bool {
        let Some(index) = self.index_of(id) else {
            self.logger.rejected(format!("adjust_score (unknown id {})", id));
            return false;
        };
        let player = &mut self.players[index];
        player.adjust_score(delta);
        let line = format!("{}: {:+} -> {}", player.name, delta, player.score);
        self.logger.command(line);
        true
    }

    /// Begin renaming a player, seeding the draft with the current name
    ///
    /// Rejected for an unknown id. Any prior in-progress rename is
    /// overwritten.
    pub fn begin_rename(&mut self, id: PlayerId) -> bool {
        let Some(player) = self.player(id) else {
            self.logger.rejected(format!("begin_rename (unknown id {})", id));
            return false;
        };
        self.rename = Some(RenameBuffer {
            target: id,
            draft: player.name.as_str().to_string(),
        });
        self.logger
            .log(VerbosityLevel::Verbose, format!("editing name of id {}", id));
        true
    }

    /// Replace the draft name verbatim
    ///
    /// Rejected when no rename is active. No trimming happens here.
    pub fn update_draft(&mut self, text: impl Into<String>) -> bool {
        let Some(buffer) = &mut self.rename else {
            self.logger.rejected("update_draft (no rename active)");
            return false;
        };
        buffer.draft = text.into();
        true
    }

    /// Apply the in-progress rename
    ///
    /// The buffer is always cleared; committing never leaves an edit
    /// active. The name changes only if the trimmed draft is non-empty
    /// and the target player still exists (it may have been removed while
    /// the edit was open).
    pub fn commit_rename(&mut self) -> bool {
        let Some(buffer) = self.rename.take() else {
            self.logger.rejected("commit_rename (no rename active)");
            return false;
        };
        let trimmed = buffer.draft.trim();
        if trimmed.is_empty() {
            self.logger.rejected("commit_rename (blank name discarded)");
            return false;
        }
        let Some(index) = self.index_of(buffer.target) else {
            self.logger
                .rejected(format!("commit_rename (unknown id {})", buffer.target));
            return false;
        };
        let trimmed = trimmed.to_string();
        let old = self.players[index].name.clone();
        self.players[index].rename(trimmed.as_str());
        self.logger.command(format!("renamed {} -> {}", old, trimmed));
        true
    }

    /// Discard the in-progress rename, if any
    pub fn cancel_rename(&mut self) -> bool {
        if self.rename.take().is_some() {
            self.logger.log(VerbosityLevel::Verbose, "rename cancelled");
            true
        } else {
            false
        }
    }

    /// Zero every score; roster membership, order, and turn are untouched
    pub fn reset_scores(&mut self) -> bool {
        for player in &mut self.players {
            player.reset_score();
        }
        self.logger.command("scores reset");
        true
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
