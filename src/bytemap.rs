//! The ByteMap substitution table
//!
//! A fixed-length byte table whose contents are a permutation of the canonical
//! fill `table[i] = i mod 256`. Consumers only read it through a masked index.

use crate::domain::{MapSize, MAP_SIZE};
use crate::error::{Result, TableError};

/// Fixed-size byte-substitution table
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ByteMap {
    bytes: Box<[u8]>,
    size: MapSize,
}

impl ByteMap {
    /// Create a table holding the canonical fill `table[i] = i mod 256`
    pub fn canonical(size: MapSize) -> Self {
        let bytes = (0..size.as_usize()).map(|i| i as u8).collect();
        ByteMap { bytes, size }
    }

    /// Wrap raw table bytes, checking only the length
    ///
    /// The permutation invariant is trusted, as it is for tables read from a
    /// cache file. Use [`ByteMap::is_permutation`] to check it explicitly.
    pub fn from_bytes(size: MapSize, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != size.as_usize() {
            return Err(TableError::InvalidTableLength {
                expected: size.as_usize(),
                actual: bytes.len(),
            });
        }
        Ok(ByteMap {
            bytes: bytes.into(),
            size,
        })
    }

    /// Wrap a reference-size table whose length is fixed by its type
    pub(crate) fn from_reference_bytes(bytes: &[u8; MAP_SIZE]) -> Self {
        ByteMap {
            bytes: bytes.as_slice().into(),
            size: MapSize::default(),
        }
    }

    pub fn size(&self) -> MapSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Index mask (`len - 1`)
    pub fn mask(&self) -> usize {
        self.size.mask()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes.into_vec()
    }

    /// Read the entry at `index & mask`; never out of bounds
    #[inline]
    pub fn lookup(&self, index: usize) -> u8 {
        self.bytes[index & self.size.mask()]
    }

    /// Count how often each byte value occurs
    pub fn histogram(&self) -> [usize; 256] {
        let mut counts = [0usize; 256];
        for &b in self.bytes.iter() {
            counts[b as usize] += 1;
        }
        counts
    }

    /// Check that every byte value occurs exactly `len / 256` times
    pub fn is_permutation(&self) -> bool {
        let expected = self.size.copies_per_value();
        self.histogram().iter().all(|&count| count == expected)
    }

    /// CRC32 of the raw table bytes, for identifying tables in logs and output
    pub fn fingerprint(&self) -> u32 {
        crc32fast::hash(&self.bytes)
    }

    /// Exclusive access for the shuffle; consumers only ever read
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl AsRef<[u8]> for ByteMap {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for ByteMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteMap")
            .field("size", &self.size.as_usize())
            .field("fingerprint", &format_args!("{:08x}", self.fingerprint()))
            .finish()
    }
}
