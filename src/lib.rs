//! Scorekeeper - in-memory score and turn tracker for party game sessions
//!
//! The core is a single session state manager: a bounded player roster
//! (2-8 entries), per-player scores with a zero floor, circular turn
//! rotation, and a transient rename workflow. Presentation layers render
//! a read-only projection of the state and forward commands into it.

pub mod core;
pub mod error;
pub mod session;

pub use error::{Result, ScoreError};
