//! Logging utilities for the audit run

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Normal execution, no verbose flag
    Normal = 0,
    /// Info level, one verbose flag (-v)
    Info = 1,
    /// Debug level, two verbose flags (-v -v)
    Debug = 2,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Normal => "",
            LogLevel::Info => "info: ",
            LogLevel::Debug => "dbg: ",
        }
    }
}

/// Logger for audit messages
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbosity: u8,
}

impl Logger {
    /// Create a new logger with the specified verbosity
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Returns the formatted line if `level` is enabled at this verbosity
    pub fn format(&self, msg: &str, level: LogLevel) -> Option<String> {
        (self.verbosity >= level as u8).then(|| format!("{}{}", level.prefix(), msg))
    }

    /// Log a message if the current verbosity level is at least the specified level
    pub fn log(&self, msg: &str, level: LogLevel) {
        if let Some(line) = self.format(msg, level) {
            println!("{line}");
        }
    }

    /// Log at normal level (always displayed)
    pub fn normal(&self, msg: &str) {
        self.log(msg, LogLevel::Normal);
    }

    /// Log at info level (verbose >= 1)
    pub fn info(&self, msg: &str) {
        self.log(msg, LogLevel::Info);
    }

    /// Log at debug level (verbose >= 2)
    pub fn debug(&self, msg: &str) {
        self.log(msg, LogLevel::Debug);
    }
}
