//! Progress and output reporting for table generation
//!
//! A full generation is `rounds` passes over the table and can take a
//! noticeable moment for large tables or round counts. Reporters let callers
//! observe the passes without the builder knowing how output is formatted.

mod console;
mod silent;

pub use console::ConsoleGenerationReporter;
pub use silent::SilentGenerationReporter;

/// Base trait for all reporters
pub trait Reporter: Send + Sync {
    /// Report general progress with a message and completion percentage
    fn report_progress(&self, message: &str, progress: f64);

    /// Report an error that occurred during operation
    fn report_error(&self, error: &str);

    /// Report successful completion of an operation
    fn report_complete(&self, message: &str);
}

/// Trait for reporting table generation progress
pub trait GenerationReporter: Reporter {
    /// Report starting a build of `map_size` bytes over `rounds` passes
    fn report_generation_start(&self, map_size: usize, rounds: u32);

    /// Report that pass `pass` (0-indexed) of `rounds` has finished
    fn report_pass(&self, pass: u32, rounds: u32);

    /// Report the finished table's fingerprint
    fn report_generation_complete(&self, fingerprint: u32);
}
