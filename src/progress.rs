// src/progress.rs
use std::io::{self, Write};

/// Progress reporting for a conversion run. The CLI echoes raw request
/// lines to stderr through this; tests and library callers can ignore it.
pub trait Progress {
    /// Called once before the first request with the number of request
    /// lines, blank ones included.
    fn begin(&mut self, _total: usize) {}

    /// Raw request line (newline included when the input had one), before it is processed.
    fn echo(&mut self, _raw_line: &str) {}

    /// Called after an entry was written.
    fn item_done(&mut self, _name: &str) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Echo each request to stderr, flushed immediately so the last line shown
/// is the one that was being processed when a run dies.
pub struct StderrEcho;

impl Progress for StderrEcho {
    fn echo(&mut self, raw_line: &str) {
        let mut err = io::stderr().lock();
        let _ = err.write_all(raw_line.as_bytes());
        let _ = err.flush();
    }
}

/// Collects echoed lines; handy in tests.
#[derive(Default, Debug)]
pub struct EchoLog {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub done: Vec<String>,
    pub finished: bool,
}

impl Progress for EchoLog {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn echo(&mut self, raw_line: &str) {
        self.lines.push(raw_line.to_string());
    }
    fn item_done(&mut self, name: &str) {
        self.done.push(name.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
