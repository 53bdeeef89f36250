//! Tests for on-disk table caching
//!
//! Exercises the load/regenerate/persist policy, strict reads and write
//! failure reporting against real files in temporary directories.

use bytemap::{
    bootstrap, ByteMap, MapSize, Rounds, TableBuilder, TableConfig, TableError, TableOrigin,
    TableStore, MAP_SIZE,
};
use std::fs;
use tempfile::TempDir;

static GOLDEN_4096_R200: &[u8] = include_bytes!("fixtures/bytemap_4096_r200.bin");
static BUNDLED_DEFAULT_4096: &[u8] = include_bytes!("fixtures/bytemap_default_4096.bin");

mod load_tests {
    use super::*;

    #[test]
    fn save_then_load_roundtrips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.dat");
        let table = TableBuilder::default().generate(5);

        bytemap::save(&path, &table).unwrap();
        let loaded = TableStore::new(&path).load();

        assert!(matches!(loaded.origin, TableOrigin::Cache));
        assert_eq!(loaded.table, table);
    }

    #[test]
    fn load_returns_cached_bytes_unchanged() {
        // The cache is trusted: anything of the right length comes back as-is.
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.dat");
        let content = vec![0x42u8; MAP_SIZE];
        fs::write(&path, &content).unwrap();

        let loaded = TableStore::new(&path).load();
        assert!(matches!(loaded.origin, TableOrigin::Cache));
        assert_eq!(loaded.table.as_bytes(), &content[..]);
    }

    #[test]
    fn missing_file_bootstraps_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lxr.dat");
        assert!(!path.exists());

        let loaded = TableStore::new(&path).load();

        assert!(matches!(loaded.origin, TableOrigin::Regenerated));
        assert!(loaded.table.is_permutation());
        assert_eq!(loaded.table.as_bytes(), GOLDEN_4096_R200);
        assert_eq!(fs::metadata(&path).unwrap().len(), MAP_SIZE as u64);
        assert_eq!(fs::read(&path).unwrap(), GOLDEN_4096_R200);
    }

    #[test]
    fn short_file_triggers_regeneration() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.dat");
        fs::write(&path, vec![0u8; MAP_SIZE - 1]).unwrap();

        let loaded = TableStore::new(&path).load();

        assert!(matches!(loaded.origin, TableOrigin::Regenerated));
        assert_eq!(loaded.table.as_bytes(), GOLDEN_4096_R200);
        assert_eq!(fs::read(&path).unwrap().len(), MAP_SIZE);
    }

    #[test]
    fn long_file_triggers_regeneration() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.dat");
        fs::write(&path, vec![7u8; MAP_SIZE + 1]).unwrap();

        let loaded = TableStore::new(&path).load();

        assert!(loaded.origin.was_generated());
        assert!(loaded.table.is_permutation());
        assert_eq!(fs::read(&path).unwrap().len(), MAP_SIZE);
    }

    #[test]
    fn empty_file_triggers_regeneration() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.dat");
        fs::write(&path, b"").unwrap();

        let loaded = TableStore::new(&path).load();
        assert!(matches!(loaded.origin, TableOrigin::Regenerated));
    }

    #[test]
    fn regeneration_uses_configured_rounds_and_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("small.dat");
        let size = MapSize::new(512).unwrap();
        let store = TableStore::new(&path)
            .builder(TableBuilder::new(size))
            .rounds(Rounds::new(9).unwrap());

        let loaded = store.load();
        assert_eq!(loaded.table, TableBuilder::new(size).generate(9));
        assert_eq!(fs::read(&path).unwrap().len(), 512);
    }
}

mod failure_tests {
    use super::*;

    #[test]
    fn strict_read_reports_missing_file() {
        let store = TableStore::new("/nonexistent/path/table.dat");
        let err = store.read().unwrap_err();
        assert!(matches!(err, TableError::StorageRead { .. }));
        assert!(err.is_recoverable_read());
    }

    #[test]
    fn save_surfaces_write_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("table.dat");
        let table = ByteMap::canonical(MapSize::default());

        let err = bytemap::save(&path, &table).unwrap_err();
        assert!(matches!(err, TableError::StorageWrite { .. }));
        assert!(err.to_string().contains("no_such_dir"));
    }

    #[test]
    fn unwritable_cache_still_yields_table() {
        // A directory at the cache path can be neither read as a table nor
        // replaced by a file.
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("occupied");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        let loaded = TableStore::new(&path).load();

        assert!(matches!(
            loaded.persist_error(),
            Some(TableError::StorageWrite { .. })
        ));
        assert_eq!(loaded.table.as_bytes(), GOLDEN_4096_R200);
        assert!(path.is_dir());
    }
}

mod bootstrap_tests {
    use super::*;

    #[test]
    fn reference_config_without_cache_uses_default() {
        let loaded = bootstrap(&TableConfig::default());
        assert!(matches!(loaded.origin, TableOrigin::Default));
        assert_eq!(loaded.table.as_bytes(), BUNDLED_DEFAULT_4096);
    }

    #[test]
    fn cache_path_goes_through_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("boot.dat");
        let config = TableConfig::default().with_cache_path(&path);

        let first = bootstrap(&config);
        assert!(matches!(first.origin, TableOrigin::Regenerated));
        assert_eq!(first.table.as_bytes(), GOLDEN_4096_R200);

        let second = bootstrap(&config);
        assert!(matches!(second.origin, TableOrigin::Cache));
        assert_eq!(first.into_table(), second.into_table());
    }

    #[test]
    fn non_reference_config_is_built_in_memory() {
        let config = TableConfig::new(
            MapSize::new(1024).unwrap(),
            Default::default(),
            Rounds::new(4).unwrap(),
        );
        let loaded = bootstrap(&config);
        assert!(matches!(loaded.origin, TableOrigin::Generated));
        assert_eq!(loaded.table.len(), 1024);
    }
}
