//! Log Levels
//!
//! Severity levels in ascending order, plus the unleveled `Print` used by the
//! `print*` family, which is never filtered.

use std::fmt;
use std::str::FromStr;

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Unleveled output, always written
    Print = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// As a minimum level, silences everything up to `Error`
    Off = 5,
    /// Logged, then the caller panics
    Panic = 6,
    /// Logged, then the process terminates
    Fatal = 7,
}

impl Level {
    /// Name written into the `${level}` header placeholder
    pub fn name(self) -> &'static str {
        match self {
            Level::Print => "-",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }

    /// Whether a line at `self` passes a `minimum` level
    pub fn passes(self, minimum: Level) -> bool {
        self == Level::Print || self >= minimum
    }

    /// Matching filter for the `log` facade
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Level::Print | Level::Debug => log::LevelFilter::Trace,
            Level::Info => log::LevelFilter::Info,
            Level::Warn => log::LevelFilter::Warn,
            Level::Error => log::LevelFilter::Error,
            Level::Off | Level::Panic | Level::Fatal => log::LevelFilter::Off,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a level name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "OFF" => Ok(Level::Off),
            "PANIC" => Ok(Level::Panic),
            "FATAL" => Ok(Level::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Panic);
        assert!(Level::Panic < Level::Fatal);
    }

    #[test]
    fn test_passes() {
        assert!(Level::Print.passes(Level::Off));
        assert!(!Level::Debug.passes(Level::Info));
        assert!(Level::Info.passes(Level::Info));
        assert!(!Level::Error.passes(Level::Off));
        assert!(Level::Fatal.passes(Level::Off));
    }

    #[test]
    fn test_names() {
        assert_eq!(Level::Print.to_string(), "-");
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(Level::Fatal.name(), "FATAL");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("Warning".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("FATAL".parse::<Level>(), Ok(Level::Fatal));
        assert_eq!(
            "verbose".parse::<Level>(),
            Err(ParseLevelError("verbose".to_string()))
        );
    }

    #[test]
    fn test_log_facade_mapping() {
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
        assert_eq!(Level::from(log::Level::Error), Level::Error);
        assert_eq!(Level::Info.to_level_filter(), log::LevelFilter::Info);
        assert_eq!(Level::Off.to_level_filter(), log::LevelFilter::Off);
    }
}
