//! Tests for tile occurrence counting over the persisted grid

#[cfg(test)]
mod tests {
    use quiltgrid::analysis::counts::tile_counts;
    use quiltgrid::io::store::{GridStore, MemoryStore};

    // Tests counts reflect the exact occurrences in the snapshot
    // Verified by double-counting one identifier
    #[test]
    fn test_counts_match_snapshot_occurrences() {
        let mut store = GridStore::new(MemoryStore::new());
        assert!(store.save(&[3, 7, 3, 12, 3, 7]).is_ok());

        let counts = tile_counts(&store).unwrap_or_default();

        assert_eq!(counts.get(&3), Some(&3));
        assert_eq!(counts.get(&7), Some(&2));
        assert_eq!(counts.get(&12), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    // Tests identifiers absent from the grid get no zero-filled entry
    // Verified by pre-seeding the map with every catalog identifier
    #[test]
    fn test_counts_have_no_zero_fill() {
        let mut store = GridStore::new(MemoryStore::new());
        assert!(store.save(&[1, 1]).is_ok());

        let counts = tile_counts(&store).unwrap_or_default();

        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&2), None);
    }

    // Tests count values sum to the snapshot length
    // Verified by skipping one cell during the fold
    #[test]
    fn test_counts_sum_to_snapshot_length() {
        let mut store = GridStore::new(MemoryStore::new());
        assert!(store.save(&[4, 9, 4, 9, 4, 2, 17]).is_ok());

        let counts = tile_counts(&store).unwrap_or_default();
        let total: usize = counts.values().sum();

        assert_eq!(total, 7);
    }

    // Tests a fresh store summarizes as an empty map
    // Verified by zero-filling from a default fabric
    #[test]
    fn test_counts_on_fresh_store_are_empty() {
        let store = GridStore::new(MemoryStore::new());
        let counts = tile_counts(&store).unwrap_or_default();

        assert!(counts.is_empty());
    }
}
