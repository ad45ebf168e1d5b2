#![no_main]

use std::io::Write;

use blockrs::{ChunkConfig, FileChunker};
use libfuzzer_sys::fuzz_target;
use tempfile::NamedTempFile;

fuzz_target!(|input: (u8, u8, Vec<u8>)| {
    let (k, words, contents) = input;
    let k = (k as usize % 8) + 1;
    let symbol_size = ((words as usize % 4) + 1) * 8;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&contents).unwrap();
    file.flush().unwrap();

    let config = ChunkConfig::new(k, symbol_size).unwrap();
    let mut chunker = FileChunker::open(file.path(), config).unwrap();
    let total = chunker.geometry().total_blocks();
    let padding = chunker.geometry().padding();

    // Verify: ids are contiguous, blocks full, symbols fixed-size
    let mut next_id = 0u64;
    let mut reassembled = Vec::new();
    while let Some(block) = chunker.produce_next_block().unwrap() {
        assert_eq!(block.id(), next_id);
        next_id += 1;

        assert_eq!(block.len(), k);
        for symbol in block.symbols() {
            assert_eq!(symbol.len(), symbol_size);
            reassembled.extend_from_slice(symbol.as_bytes());
        }

        if block.id() == total - 1 {
            assert_eq!(block.padding(), padding);
        } else {
            assert_eq!(block.padding(), 0);
        }
    }
    assert_eq!(next_id, total);

    // Verify: symbols reassemble the padded file exactly
    assert_eq!(&reassembled[..contents.len()], &contents[..]);
    assert!(reassembled[contents.len()..].iter().all(|&b| b == 0));

    // Verify: the file is restored after the stream ends
    drop(chunker);
    let after = std::fs::read(file.path()).unwrap();
    assert_eq!(after, contents);
});
