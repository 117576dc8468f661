#![no_main]
use huffman::HuffmanTree;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, String)| {
    let (input, bits) = data;

    if input.is_empty() {
        return;
    }

    let tree = HuffmanTree::from_symbols(&input).unwrap();
    let encoded = tree.encode(&input).unwrap();
    assert_eq!(tree.decode(&encoded).unwrap(), input);

    // Arbitrary marker strings must fail cleanly, never panic.
    let _ = tree.decode(&bits);
});
