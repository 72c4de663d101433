//! Error types for scorekeeper

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Player not found: {0}")]
    PlayerNotFound(u32),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
