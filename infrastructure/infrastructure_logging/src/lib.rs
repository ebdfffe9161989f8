//! Infrastructure Layer: Logging
//!
//! Provides leveled logging with templated line headers:
//! - Levels `DEBUG < INFO < WARN < ERROR < PANIC < FATAL`, plus unleveled print
//! - `${time}`, `${prefix}`, `${level}`, `${file}`, `${line}` header placeholders
//! - Plain, formatted and JSON messages
//! - Explicit configuration through [`LoggerConfig`], including a pluggable
//!   [`Terminator`] for fatal lines
//! - A `log` facade backend, so library crates can emit diagnostics with
//!   `log::debug!` and friends

pub mod header;
pub mod level;
pub mod logger;
pub mod terminator;

pub use header::{HeaderTemplate, DEFAULT_HEADER};
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, LoggerConfig};
pub use terminator::{ProcessTerminator, Terminator};
