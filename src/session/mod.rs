//! Session state, commands, and the read-only projection

pub mod command;
pub mod logger;
pub mod state;
pub mod view;

pub use command::Command;
pub use logger::{LogEntry, OutputMode, SessionLogger, VerbosityLevel};
pub use state::{RenameBuffer, SessionState, MAX_PLAYERS, MIN_PLAYERS};
pub use view::SessionView;
