//! Deterministic ByteMap construction
//!
//! The table is shuffled by a feedback mixer that reads from the very table it
//! is permuting: each swap target depends on the table contents left by every
//! earlier swap. The output is fully determined by the seed, the table size and
//! the round count, so every build on every machine yields the same bytes.
//!
//! The step must stay bit-exact. Right shifts are arithmetic (on `i64`), left
//! shifts and the index addition wrap at 64 bits, and every index is masked
//! before use. Changing any of that changes every downstream hash value.

use crate::bytemap::ByteMap;
use crate::domain::{MapSize, Seed};
use crate::reporters::{GenerationReporter, SilentGenerationReporter};
use log::{debug, trace};

/// Running state of the shuffle's pseudo-random source
///
/// Transient: created per build and dropped once the table is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mixer {
    offset: i64,
    acc: i64,
}

impl Mixer {
    fn new(seed: Seed) -> Self {
        Mixer {
            offset: seed.as_i64(),
            acc: 0,
        }
    }

    /// Advance the mixer for index `i` and return the swap partner
    ///
    /// Only reads `table`; the caller performs the swap afterwards.
    #[inline]
    fn step(&mut self, table: &[u8], i: i64, mask: i64) -> usize {
        self.acc = i64::from(table[(((self.offset & i) ^ self.acc) & mask) as usize])
            ^ (self.acc << 9)
            ^ (self.acc >> 1);
        self.offset = (self.offset << 9)
            ^ (self.offset >> 1)
            ^ (self.offset >> 7)
            ^ i
            ^ i64::from(table[(self.acc.wrapping_add(i) & mask) as usize]);
        ((self.acc ^ self.offset) & mask) as usize
    }
}

/// Builds shuffled ByteMaps from a seed
///
/// # Example
///
/// ```
/// use bytemap::{MapSize, TableBuilder};
///
/// let table = TableBuilder::new(MapSize::default()).generate(200);
/// assert!(table.is_permutation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBuilder {
    size: MapSize,
    seed: Seed,
}

impl TableBuilder {
    /// Create a builder for tables of `size` bytes using the reference seed
    pub fn new(size: MapSize) -> Self {
        Self {
            size,
            seed: Seed::default(),
        }
    }

    /// Use an alternate seed
    pub fn seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    pub fn map_size(&self) -> MapSize {
        self.size
    }

    pub fn seed_value(&self) -> Seed {
        self.seed
    }

    /// Build a fresh table shuffled over `rounds` passes
    ///
    /// Zero rounds yields the canonical fill.
    pub fn generate(&self, rounds: u32) -> ByteMap {
        self.generate_with_reporter(rounds, &SilentGenerationReporter::new())
    }

    /// Build a fresh table, reporting each finished pass
    pub fn generate_with_reporter(
        &self,
        rounds: u32,
        reporter: &dyn GenerationReporter,
    ) -> ByteMap {
        let mut table = ByteMap::canonical(self.size);
        self.shuffle_with_reporter(&mut table, rounds, reporter);
        table
    }

    /// Reset `table` to the canonical fill and shuffle it in place
    ///
    /// The table keeps its own size; only the seed is taken from the builder.
    pub fn shuffle(&self, table: &mut ByteMap, rounds: u32) {
        self.shuffle_with_reporter(table, rounds, &SilentGenerationReporter::new());
    }

    fn shuffle_with_reporter(
        &self,
        table: &mut ByteMap,
        rounds: u32,
        reporter: &dyn GenerationReporter,
    ) {
        let mask = table.mask() as i64;
        reporter.report_generation_start(table.len(), rounds);

        let bytes = table.as_mut_slice();
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }

        let mut mixer = Mixer::new(self.seed);
        for pass in 0..rounds {
            for i in 0..bytes.len() {
                let j = mixer.step(bytes, i as i64, mask);
                bytes.swap(i, j);
            }
            trace!("Pass {}/{} done", pass + 1, rounds);
            reporter.report_pass(pass, rounds);
        }

        let fingerprint = table.fingerprint();
        debug!(
            "Generated {} byte table, seed {}, {} rounds, fingerprint {:08x}",
            table.len(),
            self.seed,
            rounds,
            fingerprint
        );
        reporter.report_generation_complete(fingerprint);
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new(MapSize::default())
    }
}
