//! On-disk caching of generated tables
//!
//! A cache file is the raw table: exactly `MAP_SIZE` bytes in index order, no
//! header, no checksum. Any other length counts as a miss. A miss is never an
//! error for [`TableStore::load`]; it rebuilds the table and tries to persist
//! it so the next start does not pay for generation again.

use crate::builder::TableBuilder;
use crate::bytemap::ByteMap;
use crate::config::TableConfig;
use crate::domain::{MapSize, Rounds};
use crate::error::{Result, TableError};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Where a loaded table came from
#[derive(Debug)]
pub enum TableOrigin {
    /// Read unchanged from the cache file
    Cache,
    /// Built fresh and written to the cache file
    Regenerated,
    /// Built fresh, but persisting it failed
    Unpersisted(TableError),
    /// The bundled default table
    Default,
    /// Built from configuration without a cache
    Generated,
}

impl TableOrigin {
    /// Whether the table was built during this call
    pub fn was_generated(&self) -> bool {
        matches!(
            self,
            TableOrigin::Regenerated | TableOrigin::Unpersisted(_) | TableOrigin::Generated
        )
    }
}

impl std::fmt::Display for TableOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableOrigin::Cache => write!(f, "loaded from cache"),
            TableOrigin::Regenerated => write!(f, "regenerated and cached"),
            TableOrigin::Unpersisted(e) => write!(f, "regenerated, not cached: {}", e),
            TableOrigin::Default => write!(f, "bundled default"),
            TableOrigin::Generated => write!(f, "generated"),
        }
    }
}

/// A ready table together with its provenance
#[derive(Debug)]
pub struct LoadedTable {
    pub table: ByteMap,
    pub origin: TableOrigin,
}

impl LoadedTable {
    pub fn into_table(self) -> ByteMap {
        self.table
    }

    /// The write failure, if a regenerated table could not be cached
    pub fn persist_error(&self) -> Option<&TableError> {
        match &self.origin {
            TableOrigin::Unpersisted(e) => Some(e),
            _ => None,
        }
    }
}

/// Cache of a single table at a fixed path
#[derive(Debug, Clone)]
pub struct TableStore {
    path: PathBuf,
    builder: TableBuilder,
    rounds: Rounds,
}

impl TableStore {
    /// Create a store for the reference table (4096 bytes, reference seed, 200 rounds)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            builder: TableBuilder::default(),
            rounds: Rounds::default(),
        }
    }

    /// Create a store at `path` with the configured size, seed and rounds
    pub fn from_config(path: impl Into<PathBuf>, config: &TableConfig) -> Self {
        Self::new(path)
            .builder(config.builder())
            .rounds(config.rounds)
    }

    /// Builder used on a cache miss; also fixes the expected file length
    pub fn builder(mut self, builder: TableBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Round count used on a cache miss
    pub fn rounds(mut self, rounds: Rounds) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn map_size(&self) -> MapSize {
        self.builder.map_size()
    }

    /// Strict read of the cache file
    ///
    /// # Errors
    ///
    /// - `StorageRead` if the file cannot be read
    /// - `TruncatedCache` if it does not hold exactly `MAP_SIZE` bytes
    pub fn read(&self) -> Result<ByteMap> {
        let size = self.map_size();
        let data = fs::read(&self.path).map_err(|source| TableError::StorageRead {
            path: self.path.clone(),
            source,
        })?;
        if data.len() != size.as_usize() {
            return Err(TableError::TruncatedCache {
                path: self.path.clone(),
                expected: size.as_usize(),
                actual: data.len(),
            });
        }
        ByteMap::from_bytes(size, &data)
    }

    /// Load the cached table, rebuilding and caching it on a miss
    ///
    /// Never fails: read errors trigger regeneration, and a failure to persist
    /// the rebuilt table is logged and returned in [`TableOrigin::Unpersisted`]
    /// alongside the (valid) table.
    pub fn load(&self) -> LoadedTable {
        match self.read() {
            Ok(table) => {
                debug!(
                    "Loaded table from {} (fingerprint {:08x})",
                    self.path.display(),
                    table.fingerprint()
                );
                LoadedTable {
                    table,
                    origin: TableOrigin::Cache,
                }
            }
            Err(e) => {
                info!("Cache miss: {}; regenerating", e);
                let table = self.builder.generate(self.rounds.as_u32());
                let origin = match save(&self.path, &table) {
                    Ok(()) => TableOrigin::Regenerated,
                    Err(e) => {
                        warn!("{}; table will be regenerated on next start", e);
                        TableOrigin::Unpersisted(e)
                    }
                };
                LoadedTable { table, origin }
            }
        }
    }

    /// Write `table` to this store's path
    pub fn save(&self, table: &ByteMap) -> Result<()> {
        save(&self.path, table)
    }
}

/// Replace the file at `path` with the raw bytes of `table`
///
/// Any existing file is removed first; a missing file is not an error.
///
/// # Errors
///
/// Returns `StorageWrite` on any I/O failure.
pub fn save(path: &Path, table: &ByteMap) -> Result<()> {
    let write_err = |source: std::io::Error| TableError::StorageWrite {
        path: path.to_path_buf(),
        source,
    };

    match fs::remove_file(path) {
        Ok(()) => debug!("Removed stale table {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(write_err(e)),
    }

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(table.as_bytes()).map_err(write_err)?;
    let file = writer.into_inner().map_err(|e| write_err(e.into_error()))?;
    file.sync_all().map_err(write_err)?;

    debug!(
        "Saved {} byte table to {} (fingerprint {:08x})",
        table.len(),
        path.display(),
        table.fingerprint()
    );
    Ok(())
}
