//! Configuration for table construction and caching

use crate::builder::TableBuilder;
use crate::domain::{MapSize, Rounds, Seed};
use crate::error::Result;
use clap::parser::MatchesError;
use std::path::PathBuf;

/// Everything needed to produce a ready table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Table size in bytes
    pub map_size: MapSize,
    /// Initial mixer offset
    pub seed: Seed,
    /// Shuffle passes used when a table has to be built
    pub rounds: Rounds,
    /// Cache file; `None` means use the bundled default (or build in memory)
    pub cache_path: Option<PathBuf>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            map_size: MapSize::default(),
            seed: Seed::default(),
            rounds: Rounds::default(),
            cache_path: None,
        }
    }
}

impl TableConfig {
    pub fn new(map_size: MapSize, seed: Seed, rounds: Rounds) -> Self {
        Self {
            map_size,
            seed,
            rounds,
            cache_path: None,
        }
    }

    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// Build a config from parsed arguments, falling back to defaults for
    /// anything the subcommand does not define or the user did not pass
    ///
    /// # Panics
    ///
    /// If an argument is defined with a value type other than the one read
    /// here, as `ArgMatches::get_one` does.
    pub fn from_args(matches: &clap::ArgMatches) -> Result<Self> {
        let mut config = Self::default();

        if let Some(&size) = arg_value::<usize>(matches, "size") {
            config.map_size = MapSize::new(size)?;
        }
        if let Some(seed) = arg_value::<String>(matches, "seed") {
            config.seed = Seed::parse(seed)?;
        }
        if let Some(&rounds) = arg_value::<i64>(matches, "rounds") {
            config.rounds = Rounds::new(rounds)?;
        }
        if let Some(cache) = arg_value::<String>(matches, "cache") {
            config.cache_path = Some(PathBuf::from(cache));
        }

        Ok(config)
    }

    /// Builder for this configuration's size and seed
    pub fn builder(&self) -> TableBuilder {
        TableBuilder::new(self.map_size).seed(self.seed)
    }

    /// Whether these are the reference parameters, for which bootstrap
    /// serves the bundled default table when no cache is configured
    pub fn is_reference(&self) -> bool {
        self.map_size == MapSize::default()
            && self.seed == Seed::default()
            && self.rounds == Rounds::default()
    }
}

/// Value of `id`, or `None` if the subcommand does not define it
fn arg_value<'a, T>(matches: &'a clap::ArgMatches, id: &str) -> Option<&'a T>
where
    T: std::any::Any + Clone + Send + Sync + 'static,
{
    match matches.try_get_one::<T>(id) {
        Ok(value) => value,
        Err(MatchesError::UnknownArgument { .. }) => None,
        Err(e) => panic!("Mismatch between definition and access of `{id}`. {e}"),
    }
}
