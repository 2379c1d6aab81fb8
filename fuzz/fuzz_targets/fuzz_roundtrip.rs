#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Round-trip law: decode(encode(x)) == x for every finite byte string.
    let compressed = huffc::encode_to_vec(data).unwrap();
    let decompressed = huffc::decode_to_vec(&compressed).unwrap();
    assert_eq!(decompressed, data);

    // The container is always a 257-byte header plus the packed body.
    assert!(compressed.len() >= 257);
    assert!(compressed[256] < 8);
});
