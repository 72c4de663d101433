//! Core session types and entities

pub mod player;
pub mod types;

pub use player::Player;
pub use types::{PlayerId, PlayerName};
