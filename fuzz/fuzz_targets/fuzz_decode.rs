#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic: every malformed stream is
    // either a typed corruption error or a (short) successful decode.
    let _ = huffc::decode_to_vec(data);
});
