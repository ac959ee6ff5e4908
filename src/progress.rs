// src/progress.rs
/// Lightweight progress reporting used by the resolution pipeline.
/// Frontends (the CLI today) implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a phase with the number of steps (shards or entities).
    fn begin(&mut self, _phase: &str, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One step of the current phase finished (a shard was scanned, a page was tried).
    fn step_done(&mut self, _label: &str) {}

    /// An entity was committed with its value.
    fn resolved(&mut self, _name: &str, _value: &str) {}

    /// An entity was matched but its asset could not be extracted.
    fn failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
