use std::fmt;

use logger::LoggerError;
use roster::RosterError;

/// Represents errors that can occur in the flight desk application.
#[derive(Debug)]
pub enum DeskError {
    Roster(RosterError),     // Rejected by the roster, parser or allocator
    Logger(LoggerError),     // Log file could not be set up
    Io(std::io::Error),      // Reading input or writing an export failed
    InvalidInput(String),    // Operator typed something unusable
    InvalidConfig(String),   // Bad command-line arguments
}

impl fmt::Display for DeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeskError::Roster(e) => write!(f, "{}", e),
            DeskError::Logger(e) => write!(f, "Logger error: {}", e),
            DeskError::Io(e) => write!(f, "I/O error: {}", e),
            DeskError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DeskError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for DeskError {}

impl From<RosterError> for DeskError {
    fn from(err: RosterError) -> Self {
        DeskError::Roster(err)
    }
}

impl From<LoggerError> for DeskError {
    fn from(err: LoggerError) -> Self {
        DeskError::Logger(err)
    }
}

impl From<std::io::Error> for DeskError {
    fn from(err: std::io::Error) -> Self {
        DeskError::Io(err)
    }
}
