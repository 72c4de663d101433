//! Session event logger
//!
//! Records applied and rejected commands with a verbosity filter. Output
//! can go to stdout, to an in-memory buffer (useful in tests), or both.

use serde::{Deserialize, Serialize};

/// Verbosity level for session output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum VerbosityLevel {
    /// Silent - no output
    Silent = 0,
    /// Minimal - session start/end only
    Minimal = 1,
    /// Normal - applied commands (default)
    #[default]
    Normal = 2,
    /// Verbose - applied and rejected commands
    Verbose = 3,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to the in-memory buffer (no stdout)
    Memory,
    /// Both stdout and the in-memory buffer
    Both,
}

/// A captured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
}

/// Centralized logger for session events
#[derive(Debug, Clone)]
pub struct SessionLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    buffer: Vec<LogEntry>,
}

impl SessionLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        SessionLogger {
            verbosity: VerbosityLevel::default(),
            output_mode: OutputMode::default(),
            buffer: Vec::new(),
        }
    }

    /// Create a logger with specified verbosity
    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        SessionLogger {
            verbosity,
            ..Self::new()
        }
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Log a message at the given level
    ///
    /// Messages above the configured verbosity are dropped entirely.
    pub fn log(&mut self, level: VerbosityLevel, message: impl Into<String>) {
        if level > self.verbosity || self.verbosity == VerbosityLevel::Silent {
            return;
        }
        let message = message.into();
        if self.output_mode != OutputMode::Memory {
            println!("{}", message);
        }
        if self.output_mode != OutputMode::Stdout {
            self.buffer.push(LogEntry { level, message });
        }
    }

    /// Log an applied command (Normal level)
    pub fn command(&mut self, message: impl Into<String>) {
        self.log(VerbosityLevel::Normal, message);
    }

    /// Log a rejected command (Verbose level)
    pub fn rejected(&mut self, message: impl Into<String>) {
        self.log(VerbosityLevel::Verbose, format!("rejected: {}", message.into()));
    }

    /// Captured entries (empty unless output mode includes Memory)
    pub fn entries(&self) -> &[LogEntry] {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for SessionLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_ordering() {
        assert!(VerbosityLevel::Silent < VerbosityLevel::Minimal);
        assert!(VerbosityLevel::Normal < VerbosityLevel::Verbose);
        assert_eq!(VerbosityLevel::default(), VerbosityLevel::Normal);
    }

    #[test]
    fn test_memory_capture() {
        let mut logger = SessionLogger::with_verbosity(VerbosityLevel::Normal);
        logger.set_output_mode(OutputMode::Memory);

        logger.command("add player");
        logger.rejected("roster full");

        // Rejections are Verbose and the logger is at Normal
        assert_eq!(logger.entries().len(), 1);
        assert_eq!(logger.entries()[0].message, "add player");

        logger.set_verbosity(VerbosityLevel::Verbose);
        logger.rejected("roster full");
        assert_eq!(logger.entries().len(), 2);
        assert_eq!(logger.entries()[1].message, "rejected: roster full");
    }

    #[test]
    fn test_silent_drops_everything() {
        let mut logger = SessionLogger::with_verbosity(VerbosityLevel::Silent);
        logger.set_output_mode(OutputMode::Memory);
        logger.command("add player");
        assert!(logger.entries().is_empty());
    }
}
