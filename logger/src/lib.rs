use chrono::Local;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Info(Color),
    Warn,
    Error,
}

impl LogLevel {
    fn tag(&self) -> &'static str {
        match self {
            LogLevel::Info(_) => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn console_code(&self) -> &'static str {
        match self {
            LogLevel::Info(color) => color.to_ansi_code(),
            LogLevel::Warn => "\x1b[93m",  // Bright Yellow
            LogLevel::Error => "\x1b[91m", // Bright Red
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
        }
    }
}

/// Appends timestamped lines to the log file of one desk session.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    /// Creates a new `Logger` for a desk session.
    ///
    /// # Parameters
    /// - `log_dir`: Existing directory that will hold the log file.
    /// - `session`: Session name, used in the file name `flight_desk_<session>.log`.
    ///
    /// # Returns
    /// A new `Logger`, with its log file created empty.
    pub fn new(log_dir: &Path, session: &str) -> Result<Self, LoggerError> {
        if !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(format!(
                "{} is not a directory.",
                log_dir.display()
            )));
        }

        let sanitized: String = session
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        let log_file = log_dir.join(format!("flight_desk_{}.log", sanitized));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger { log_file })
    }

    /// Path of the file this logger writes to.
    pub fn path(&self) -> &Path {
        &self.log_file
    }

    fn log(&self, level: LogLevel, message: &str, to_console: bool) -> Result<(), LoggerError> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] [{}]: {}\n", level.tag(), timestamp, message);

        if to_console {
            print!("{}{}\x1b[0m", level.console_code(), line);
            io::stdout().flush()?;
        }

        let mut file = OpenOptions::new().append(true).open(&self.log_file)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Logs an informational message.
    ///
    /// # Parameters
    /// - `message`: The informational message to log.
    /// - `color`: The color to use for the console output.
    /// - `to_console`: Whether to echo the message to the console as well.
    pub fn info(&self, message: &str, color: Color, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Info(color), message, to_console)
    }

    /// Logs a warning, e.g. an operator action the roster rejected.
    pub fn warn(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message, to_console)
    }

    /// Logs an error.
    pub fn error(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message, to_console)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(io::Error),
    InvalidPath(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
            LoggerError::InvalidPath(msg) => write!(f, "Invalid Path: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            LoggerError::InvalidPath(_) => None,
        }
    }
}

impl From<io::Error> for LoggerError {
    fn from(err: io::Error) -> Self {
        LoggerError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("flight_desk_logger_{}", name));
        fs::create_dir_all(&dir).expect("Failed to create test directory");
        dir
    }

    #[test]
    fn test_logger_writes_levels() {
        let dir = test_dir("levels");
        let logger = Logger::new(&dir, "training").expect("Failed to create logger");

        logger
            .info("Added DAL1 squawking 4512", Color::Green, false)
            .expect("Failed to log info");
        logger
            .warn("Missing field: Route", false)
            .expect("Failed to log warning");
        logger.error("Export failed", false).expect("Failed to log error");

        let contents = fs::read_to_string(logger.path()).expect("Failed to read log file");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[INFO]"));
        assert!(lines[0].ends_with("Added DAL1 squawking 4512"));
        assert!(lines[1].starts_with("[WARN]"));
        assert!(lines[2].starts_with("[ERROR]"));

        fs::remove_dir_all(dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_session_name_is_sanitized() {
        let dir = test_dir("sanitize");
        let logger = Logger::new(&dir, "eve/2024:01").expect("Failed to create logger");
        assert_eq!(
            logger.path().file_name().and_then(|n| n.to_str()),
            Some("flight_desk_eve_2024_01.log")
        );
        fs::remove_dir_all(dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_new_logger_truncates_previous_session() {
        let dir = test_dir("truncate");
        let first = Logger::new(&dir, "same").expect("Failed to create logger");
        first.info("old", Color::White, false).expect("Failed to log");
        let second = Logger::new(&dir, "same").expect("Failed to create logger");
        let contents = fs::read_to_string(second.path()).expect("Failed to read log file");
        assert!(contents.is_empty());
        fs::remove_dir_all(dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_invalid_path() {
        let result = Logger::new(Path::new("/invalid/path"), "training");
        assert!(matches!(result, Err(LoggerError::InvalidPath(_))));
    }
}
