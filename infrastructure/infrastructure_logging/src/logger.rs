//! Logger Module
//!
//! A leveled logger writing one line per call:
//!
//! ```text
//! <header>\tmessage:<message>\n
//! ```
//!
//! The header comes from a [`HeaderTemplate`]. Lines below the minimum level
//! are dropped, except for the `print*` family which is always written.
//! Lines are assembled in pooled buffers and written to the output under a
//! mutex, so a `Logger` can be shared between threads.
//!
//! Everything the logger needs is passed in through [`LoggerConfig`]: the
//! output sink, prefix, minimum level, header template and the [`Terminator`]
//! used by `fatal*`.
//!
//! # Examples
//!
//! ```rust
//! use infrastructure_logging::{Level, Logger, LoggerConfig};
//!
//! let logger = Logger::new(
//!     LoggerConfig::new("api")
//!         .level(Level::Debug)
//!         .header("${level} ${prefix}")
//!         .output(Box::new(std::io::sink())),
//! );
//! logger.debugf(format_args!("scanned {} rows", 3));
//! ```

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::header::{HeaderFields, HeaderTemplate, DEFAULT_HEADER};
use crate::level::Level;
use crate::terminator::{ProcessTerminator, Terminator};

/// Buffers kept for reuse between lines
const MAX_POOLED_BUFFERS: usize = 16;

/// Buffers that grew beyond this are not returned to the pool
const MAX_POOLED_CAPACITY: usize = 64 * 1024;

const DEFAULT_LEVEL: Level = Level::Info;

/// Exit code passed to the terminator by `fatal*`
const FATAL_EXIT_CODE: i32 = 1;

/// Construction-time settings for a [`Logger`]
pub struct LoggerConfig {
    output: Box<dyn Write + Send>,
    prefix: String,
    level: Level,
    header: String,
    terminator: Arc<dyn Terminator>,
}

impl LoggerConfig {
    /// Defaults with the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    pub fn output(mut self, output: Box<dyn Write + Send>) -> Self {
        self.output = output;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Minimum level written
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Header template, see [`HeaderTemplate`]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Replacement for process exit on `fatal*`
    pub fn terminator(mut self, terminator: Arc<dyn Terminator>) -> Self {
        self.terminator = terminator;
        self
    }
}

impl Default for LoggerConfig {
    /// Stdout, no prefix, `Info`, [`DEFAULT_HEADER`], exits the process on fatal
    fn default() -> Self {
        Self {
            output: Box::new(io::stdout()),
            prefix: String::new(),
            level: DEFAULT_LEVEL,
            header: DEFAULT_HEADER.to_string(),
            terminator: Arc::new(ProcessTerminator),
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("prefix", &self.prefix)
            .field("level", &self.level)
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

struct Settings {
    prefix: String,
    level: Level,
    header: HeaderTemplate,
}

/// Leveled logger with templated line headers
pub struct Logger {
    output: Mutex<Box<dyn Write + Send>>,
    settings: RwLock<Settings>,
    terminator: Arc<dyn Terminator>,
    buffers: Mutex<Vec<Vec<u8>>>,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            output: Mutex::new(config.output),
            settings: RwLock::new(Settings {
                prefix: config.prefix,
                level: config.level,
                header: HeaderTemplate::parse(&config.header),
            }),
            terminator: config.terminator,
            buffers: Mutex::new(Vec::new()),
        }
    }

    /// Logger with default settings and the given prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(LoggerConfig::new(prefix))
    }

    /// Register this logger as the `log` facade backend
    ///
    /// The facade's max level is taken from the current minimum level; later
    /// calls to [`Logger::set_level`] only narrow what is written.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level().to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }

    pub fn set_output(&self, output: Box<dyn Write + Send>) {
        *self.output.lock() = output;
    }

    pub fn prefix(&self) -> String {
        self.settings.read().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.settings.write().prefix = prefix.into();
    }

    pub fn level(&self) -> Level {
        self.settings.read().level
    }

    pub fn set_level(&self, level: Level) {
        self.settings.write().level = level;
    }

    pub fn header(&self) -> String {
        self.settings.read().header.source().to_string()
    }

    pub fn set_header(&self, header: &str) {
        self.settings.write().header = HeaderTemplate::parse(header);
    }

    /// Whether a line at `level` would be written
    pub fn is_enabled(&self, level: Level) -> bool {
        level.passes(self.level())
    }

    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) {
        self.log_at(Level::Print, message);
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Print, args);
    }

    #[track_caller]
    pub fn printj(&self, j: &serde_json::Value) {
        self.log_at(Level::Print, j);
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log_at(Level::Debug, message);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Debug, args);
    }

    #[track_caller]
    pub fn debugj(&self, j: &serde_json::Value) {
        self.log_at(Level::Debug, j);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log_at(Level::Info, message);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Info, args);
    }

    #[track_caller]
    pub fn infoj(&self, j: &serde_json::Value) {
        self.log_at(Level::Info, j);
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log_at(Level::Warn, message);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Warn, args);
    }

    #[track_caller]
    pub fn warnj(&self, j: &serde_json::Value) {
        self.log_at(Level::Warn, j);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log_at(Level::Error, message);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Error, args);
    }

    #[track_caller]
    pub fn errorj(&self, j: &serde_json::Value) {
        self.log_at(Level::Error, j);
    }

    /// Log at fatal level, then hand control to the terminator
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log_at(Level::Fatal, message);
        self.terminator.terminate(FATAL_EXIT_CODE);
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.fatal(args);
    }

    #[track_caller]
    pub fn fatalj(&self, j: &serde_json::Value) {
        self.fatal(j);
    }

    /// Log at panic level, then panic with the same message
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let message = message.to_string();
        self.log_at(Level::Panic, &message);
        panic!("{}", message);
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.panic(args)
    }

    #[track_caller]
    pub fn panicj(&self, j: &serde_json::Value) -> ! {
        self.panic(j)
    }

    #[track_caller]
    fn log_at(&self, level: Level, message: impl fmt::Display) {
        let location = Location::caller();
        self.write(level, &message, location.file(), location.line());
    }

    fn write(&self, level: Level, message: &dyn fmt::Display, file: &str, line: u32) {
        if !self.is_enabled(level) {
            return;
        }

        let mut buf = self.take_buffer();
        {
            let settings = self.settings.read();
            settings.header.render(
                &mut buf,
                &HeaderFields {
                    time: chrono::Utc::now().timestamp(),
                    prefix: &settings.prefix,
                    level,
                    file,
                    line,
                },
            );
        }
        buf.extend_from_slice(b"\tmessage:");
        let _ = write!(buf, "{}", message);
        buf.push(b'\n');

        {
            let mut output = self.output.lock();
            // a failing sink must not fail the caller
            if output.write_all(&buf).is_ok() {
                let _ = output.flush();
            }
        }

        self.put_buffer(buf);
    }

    fn take_buffer(&self) -> Vec<u8> {
        let mut buf = self.buffers.lock().pop().unwrap_or_default();
        buf.clear();
        buf
    }

    fn put_buffer(&self, buf: Vec<u8>) {
        if buf.capacity() > MAX_POOLED_CAPACITY {
            return;
        }
        let mut buffers = self.buffers.lock();
        if buffers.len() < MAX_POOLED_BUFFERS {
            buffers.push(buf);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.settings.read();
        f.debug_struct("Logger")
            .field("prefix", &settings.prefix)
            .field("level", &settings.level)
            .field("header", &settings.header.source())
            .finish_non_exhaustive()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.is_enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        self.write(
            Level::from(record.level()),
            record.args(),
            record.file().unwrap_or("???"),
            record.line().unwrap_or(0),
        );
    }

    fn flush(&self) {
        let _ = self.output.lock().flush();
    }
}
