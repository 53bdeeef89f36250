//! Core domain types for table construction
//!
//! Validated wrappers for the three parameters that fully determine a ByteMap:
//! its size, the mixer seed and the number of shuffle rounds. Mixing them up
//! (e.g. passing a round count where a size is expected) silently produces a
//! different table, so each gets its own type.

use crate::error::{Result, TableError};

/// Reference table size in bytes
pub const MAP_SIZE: usize = 0x1000;
/// Index mask for the reference table size
pub const MAP_MASK: usize = MAP_SIZE - 1;
/// Reference seed for the mixer's running offset
pub const FIRST_RAND: i64 = 0x13ef13156da2756b;
/// Round count used when a table has to be regenerated
pub const DEFAULT_ROUNDS: u32 = 200;

/// Smallest size for which every byte value appears equally often
const MIN_MAP_SIZE: usize = 256;

/// Table size, always a power of two of at least 256 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MapSize(usize);

impl MapSize {
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_MAP_SIZE || !size.is_power_of_two() {
            return Err(TableError::InvalidMapSize(size));
        }
        Ok(MapSize(size))
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }

    /// Mask applied to every table index
    pub fn mask(&self) -> usize {
        self.0 - 1
    }

    /// How many times each byte value occurs in a valid table
    pub fn copies_per_value(&self) -> usize {
        self.0 / 256
    }
}

impl Default for MapSize {
    fn default() -> Self {
        MapSize(MAP_SIZE)
    }
}

impl TryFrom<usize> for MapSize {
    type Error = TableError;

    fn try_from(size: usize) -> Result<Self> {
        MapSize::new(size)
    }
}

impl std::fmt::Display for MapSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Initial value of the mixer's running offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(i64);

impl Seed {
    pub fn new(value: i64) -> Self {
        Seed(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Parse a seed given as hex (`0x` prefix optional) of at most 16 digits
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() || digits.len() > 16 {
            return Err(TableError::InvalidSeed(s.to_string()));
        }
        let padded = format!("{:0>16}", digits);
        let bytes = hex::decode(&padded).map_err(|e| TableError::InvalidSeed(format!("{s}: {e}")))?;
        let raw: [u8; 8] = bytes
            .try_into()
            .map_err(|_| TableError::InvalidSeed(s.to_string()))?;
        Ok(Seed(i64::from_be_bytes(raw)))
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed(FIRST_RAND)
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed::new(value)
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0.to_be_bytes()))
    }
}

/// Number of full shuffle passes, between 1 and `u32::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rounds(u32);

impl Rounds {
    /// Validate a caller-supplied round count before any table is touched
    pub fn new(rounds: i64) -> Result<Self> {
        if rounds <= 0 || rounds > u32::MAX as i64 {
            return Err(TableError::InvalidRoundCount(rounds));
        }
        Ok(Rounds(rounds as u32))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for Rounds {
    fn default() -> Self {
        Rounds(DEFAULT_ROUNDS)
    }
}

impl std::fmt::Display for Rounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
