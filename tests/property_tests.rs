//! Property-based tests for block geometry and streaming.
//!
//! Uses proptest to verify the geometry invariants across large input spaces.

use proptest::prelude::*;

use blockrs::{ChunkConfig, FileChunker, Geometry};

mod geometry_properties {
    use super::*;

    proptest! {
        /// total_blocks is ceiling division of the file size by the block size.
        #[test]
        fn total_blocks_is_ceiling_division(
            k in 1usize..64,
            words in 1usize..32,
            file_size in 0u64..1_000_000,
        ) {
            let config = ChunkConfig::new(k, words * 8).unwrap();
            let g = Geometry::for_file_size(&config, file_size);

            let block_size = g.block_size();
            prop_assert_eq!(g.total_blocks(), file_size.div_ceil(block_size));
        }

        /// Padding is the smallest non-negative value completing a block,
        /// and is zero exactly when the file size is already a multiple.
        #[test]
        fn padding_is_minimal_completion(
            k in 1usize..64,
            words in 1usize..32,
            file_size in 0u64..1_000_000,
        ) {
            let config = ChunkConfig::new(k, words * 8).unwrap();
            let g = Geometry::for_file_size(&config, file_size);

            prop_assert!(g.padding() < g.block_size());
            prop_assert_eq!(g.padded_size() % g.block_size(), 0);
            prop_assert_eq!(g.padding() == 0, file_size % g.block_size() == 0);
        }

        /// The padded length also divides evenly into symbols.
        #[test]
        fn padded_size_is_symbol_multiple(
            k in 1usize..64,
            words in 1usize..32,
            file_size in 0u64..1_000_000,
        ) {
            let config = ChunkConfig::new(k, words * 8).unwrap();
            let g = Geometry::for_file_size(&config, file_size);

            prop_assert_eq!(g.padded_size() % (config.symbol_size() as u64), 0);
        }
    }
}

mod streaming_properties {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    proptest! {
        // Real file I/O per case, so keep the case count moderate.
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// A full stream emits contiguous ids, full fixed-size symbols, and
        /// restores the file exactly.
        #[test]
        fn stream_and_restore(
            k in 1usize..8,
            words in 1usize..4,
            contents in prop::collection::vec(any::<u8>(), 0..4096),
        ) {
            let mut file = NamedTempFile::new().unwrap();
            file.write_all(&contents).unwrap();
            file.flush().unwrap();

            let config = ChunkConfig::new(k, words * 8).unwrap();
            let mut chunker = FileChunker::open(file.path(), config).unwrap();
            let total = chunker.geometry().total_blocks();
            let padding = chunker.geometry().padding();

            let mut next_id = 0u64;
            while let Some(block) = chunker.produce_next_block().unwrap() {
                prop_assert_eq!(block.id(), next_id);
                next_id += 1;

                prop_assert_eq!(block.len(), k, "padding guarantees full blocks");
                for symbol in block.symbols() {
                    prop_assert_eq!(symbol.len(), words * 8);
                }

                if block.id() == total - 1 {
                    prop_assert_eq!(block.padding(), padding);
                } else {
                    prop_assert_eq!(block.padding(), 0);
                }
            }
            prop_assert_eq!(next_id, total);

            let after = std::fs::read(file.path()).unwrap();
            prop_assert_eq!(after, contents);
        }
    }
}
