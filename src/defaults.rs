//! Bundled default table and bootstrap policy
//!
//! The default table is the 4096-byte permutation every deployed hash engine
//! starts from, shipped as an asset so that a process without a cache file does
//! not have to run the generator at startup. It is not the output of a fresh
//! reference build: a cache miss regenerates with the builder, while a process
//! without a cache uses these bytes.

use crate::bytemap::ByteMap;
use crate::config::TableConfig;
use crate::domain::MAP_SIZE;
use crate::store::{LoadedTable, TableOrigin, TableStore};
use log::debug;

const DEFAULT_TABLE: &[u8; MAP_SIZE] = include_bytes!("../assets/default_bytemap.bin");

/// The bundled default table
pub fn default_table() -> ByteMap {
    ByteMap::from_reference_bytes(DEFAULT_TABLE)
}

/// Produce a ready table for `config`
///
/// - With a cache path, the store's load/regenerate/persist policy applies.
/// - Without one, the reference configuration gets the bundled table and any
///   other configuration is built in memory.
pub fn bootstrap(config: &TableConfig) -> LoadedTable {
    if let Some(path) = &config.cache_path {
        return TableStore::from_config(path, config).load();
    }

    if config.is_reference() {
        let table = default_table();
        debug!(
            "Using bundled default table (fingerprint {:08x})",
            table.fingerprint()
        );
        return LoadedTable {
            table,
            origin: TableOrigin::Default,
        };
    }

    LoadedTable {
        table: config.builder().generate(config.rounds.as_u32()),
        origin: TableOrigin::Generated,
    }
}
