#![no_main]

use blockrs::{ChunkConfig, Geometry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, u8, u64)| {
    let (k, words, file_size) = input;
    let k = (k as usize % 256) + 1;
    let symbol_size = ((words as usize % 256) + 1) * 8;

    let config = ChunkConfig::new(k, symbol_size).unwrap();
    let g = Geometry::for_file_size(&config, file_size);

    // Verify: block count is ceiling division
    assert_eq!(g.total_blocks(), file_size.div_ceil(g.block_size()));

    // Verify: padding completes the last block and nothing more
    assert!(g.padding() < g.block_size());
    assert_eq!(g.padded_size() % g.block_size(), 0);
    assert_eq!(g.padding() == 0, file_size % g.block_size() == 0);

    // Verify: the padded length divides into whole symbols
    assert_eq!(g.padded_size() % (symbol_size as u64), 0);

    // Verify: determinism
    let g2 = Geometry::for_file_size(&config, file_size);
    assert_eq!(g, g2);
});
