//! Property-based tests for table generation
//!
//! These tests use proptest to check the permutation and determinism
//! properties across random seeds, sizes and small round counts.

use bytemap::{MapSize, Seed, TableBuilder, TableStore};
use proptest::prelude::*;
use tempfile::TempDir;

fn map_size() -> impl Strategy<Value = MapSize> {
    (8u32..=13).prop_map(|bits| MapSize::new(1 << bits).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: shuffling never changes how often each byte value occurs
    #[test]
    fn prop_shuffle_preserves_histogram(
        size in map_size(),
        seed in any::<i64>(),
        rounds in 0u32..6,
    ) {
        let table = TableBuilder::new(size).seed(Seed::new(seed)).generate(rounds);
        prop_assert_eq!(table.len(), size.as_usize());
        let expected = size.copies_per_value();
        prop_assert!(table.histogram().iter().all(|&count| count == expected));
    }

    /// Property: the same parameters always yield the same table
    #[test]
    fn prop_generation_is_deterministic(
        size in map_size(),
        seed in any::<i64>(),
        rounds in 1u32..4,
    ) {
        let builder = TableBuilder::new(size).seed(Seed::new(seed));
        prop_assert_eq!(builder.generate(rounds), builder.generate(rounds));
    }

    /// Property: masked lookups never go out of bounds
    #[test]
    fn prop_lookup_is_masked(index in any::<usize>(), rounds in 0u32..3) {
        let table = TableBuilder::default().generate(rounds);
        prop_assert_eq!(table.lookup(index), table.as_bytes()[index & table.mask()]);
    }

    /// Property: any saved table is read back byte for byte
    #[test]
    fn prop_save_load_roundtrip(seed in any::<i64>(), rounds in 1u32..3) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.dat");
        let table = TableBuilder::default().seed(Seed::new(seed)).generate(rounds);

        bytemap::save(&path, &table).unwrap();
        prop_assert_eq!(TableStore::new(&path).read().unwrap(), table);
    }
}
