//! Console reporter for table generation

use super::{GenerationReporter, Reporter};

/// Number of progress lines printed over a whole build
const PROGRESS_STEPS: u32 = 10;

/// Console implementation, writes progress to stderr
#[derive(Default)]
pub struct ConsoleGenerationReporter;

impl ConsoleGenerationReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleGenerationReporter {
    fn report_progress(&self, message: &str, progress: f64) {
        eprintln!("{} ({:.1}%)", message, progress * 100.0);
    }

    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }

    fn report_complete(&self, message: &str) {
        eprintln!("{}", message);
    }
}

impl GenerationReporter for ConsoleGenerationReporter {
    fn report_generation_start(&self, map_size: usize, rounds: u32) {
        eprintln!(
            "Generating {} byte table over {} rounds...",
            map_size, rounds
        );
    }

    fn report_pass(&self, pass: u32, rounds: u32) {
        let done = pass + 1;
        let step = (rounds / PROGRESS_STEPS).max(1);
        if done % step == 0 || done == rounds {
            self.report_progress(
                &format!("Pass {}/{}", done, rounds),
                done as f64 / rounds as f64,
            );
        }
    }

    fn report_generation_complete(&self, fingerprint: u32) {
        self.report_complete(&format!("Table ready (fingerprint {:08x})", fingerprint));
    }
}
