//! Process termination capability used by fatal-level logging.

/// Ends the program after a fatal log line
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32);
}

/// Exits the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTerminator;

impl Terminator for ProcessTerminator {
    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}
