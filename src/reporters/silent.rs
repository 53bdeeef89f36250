//! Silent reporter for table generation
//!
//! No-output implementation for library use, tests or quiet operation.

use super::{GenerationReporter, Reporter};

/// Silent implementation for table generation
#[derive(Default)]
pub struct SilentGenerationReporter;

impl SilentGenerationReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentGenerationReporter {
    fn report_progress(&self, _message: &str, _progress: f64) {}
    fn report_error(&self, _error: &str) {}
    fn report_complete(&self, _message: &str) {}
}

impl GenerationReporter for SilentGenerationReporter {
    fn report_generation_start(&self, _map_size: usize, _rounds: u32) {}
    fn report_pass(&self, _pass: u32, _rounds: u32) {}
    fn report_generation_complete(&self, _fingerprint: u32) {}
}
