// src/progress.rs
/// Lightweight progress reporting for multi-author operations (seeding, reset).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of authors to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// `query` resolved to `name` and was merged.
    fn item_done(&mut self, _query: &str, _name: &str) {}

    /// `query` could not be added; `reason` is user-facing.
    fn item_failed(&mut self, _query: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
