// src/progress.rs
/// Progress reporting for long-running operations (batch parses, paged searches).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One entity finished parsing.
    fn item_done(&mut self, _id: u64, _name: &str) {}

    /// One entity failed; the batch carries on.
    fn item_failed(&mut self, _id: u64, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Collects every callback; handy in tests.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub done: Vec<u64>,
    pub failed: Vec<u64>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }

    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }

    fn item_done(&mut self, id: u64, _name: &str) {
        self.done.push(id);
    }

    fn item_failed(&mut self, id: u64, _reason: &str) {
        self.failed.push(id);
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
