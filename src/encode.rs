//! Encoder: histogram, code lengths, canonical codes, header, packed body.
//!
//! Encoding is deliberately two-pass: the header carries the exact length
//! table for the whole input, so the source is read once to count symbol
//! occurrences and a second time to emit codewords. The source therefore has
//! to be rewindable; see [`ByteSource`].

use std::io::Cursor;

use crate::bitio::BitWriter;
use crate::canonical::{CodeTable, NUM_SYMBOLS};
use crate::error::Error;
use crate::stream::{ByteSink, ByteSource};
use crate::tree;

/// Compress `src` into `dst`.
///
/// The output is the self-describing container: 256 length bytes in symbol
/// order, one `ignore_bits` byte counting the trailing padding bits of the
/// final body byte, then the MSB-first packed codewords. Any finite input is
/// representable; the only failures are source/sink I/O errors.
pub fn encode<S: ByteSource, D: ByteSink>(src: &mut S, dst: &mut D) -> Result<(), Error> {
    let mut counts = [0u64; NUM_SYMBOLS];
    while let Some(byte) = src.next_byte()? {
        counts[usize::from(byte)] += 1;
    }

    let lengths = tree::code_lengths(&counts);
    let table = CodeTable::from_lengths(&lengths)?;

    for &length in &lengths {
        dst.put_byte(length)?;
    }

    let message_bits: u64 = counts
        .iter()
        .zip(&lengths)
        .map(|(&count, &length)| count * u64::from(length))
        .sum();
    let ignore_bits = ((8 - message_bits % 8) % 8) as u8;
    dst.put_byte(ignore_bits)?;

    src.rewind()?;
    let mut writer = BitWriter::new();
    while let Some(byte) = src.next_byte()? {
        let code = table.code(byte);
        writer.push(dst, code.value, u32::from(code.length))?;
    }
    writer.flush(dst)
}

/// Compress an in-memory buffer, returning the compressed stream.
pub fn encode_to_vec(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut src = Cursor::new(input);
    let mut dst = Vec::with_capacity(NUM_SYMBOLS + 1 + input.len() / 2);
    encode(&mut src, &mut dst)?;
    Ok(dst)
}
