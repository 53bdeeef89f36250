//! Deterministic byte-substitution tables for avalanche hashing
//!
//! A [`ByteMap`] is a fixed-size table holding each byte value equally often,
//! shuffled by a self-referential mixer into a reproducible order. Hash engines
//! read it through `table[index & MAP_MASK]` as a diffusion source.
//!
//! - [`TableBuilder`] runs the shuffle.
//! - [`TableStore`] caches a built table on disk and rebuilds it on a miss.
//! - [`bootstrap`] picks between the cache, the bundled default and a fresh build.

pub mod args;
pub mod builder;
pub mod bytemap;
pub mod config;
pub mod defaults;
pub mod domain;
pub mod error;
pub mod reporters;
pub mod store;

pub use args::parse_args;
pub use builder::TableBuilder;
pub use bytemap::ByteMap;
pub use config::TableConfig;
pub use defaults::{bootstrap, default_table};
pub use domain::{MapSize, Rounds, Seed, DEFAULT_ROUNDS, FIRST_RAND, MAP_MASK, MAP_SIZE};
pub use error::{Result, TableError};
pub use store::{save, LoadedTable, TableOrigin, TableStore};
