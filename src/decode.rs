//! Decoder: header, canonical codes, dispatch tables, symbol stream.
//!
//! After rebuilding the canonical code from the header's length table, the
//! decoder resolves each codeword in two steps: the window's leading byte
//! indexes a 256-entry dispatch table giving the shortest possible code
//! length, and for longer codes the true length class is found by comparing
//! the window against each next class's first code projected to the window
//! width. Within a class the codeword's distance from the class's first code
//! indexes straight into the canonical symbol order.

use std::io::Cursor;

use crate::bitio::{BitReader, CODE_WIDTH};
use crate::canonical::{CodeTable, NUM_SYMBOLS};
use crate::error::Error;
use crate::stream::{ByteSink, ByteSource};

/// `start` entry meaning "no codeword begins with this byte".
const NO_CODE: u16 = NUM_SYMBOLS as u16;

/// Per-length anchor arrays are indexed by code length, which the canonical
/// engine bounds below the accumulator width.
const MAX_LENGTHS: usize = CODE_WIDTH as usize;

/// Lookup state derived from a validated [`CodeTable`].
struct DecodeTables {
    /// Position of each symbol in canonical order.
    inv_perm: [usize; NUM_SYMBOLS],
    /// Smallest symbol of each present length.
    first_sym: [usize; MAX_LENGTHS],
    /// Canonical value of `first_sym[len]`, right-justified.
    first_code: [u64; MAX_LENGTHS],
    /// First code of the next-longer present length, projected into the
    /// 63-bit window; `1 << 63` past the maximum length, which no window
    /// value can reach. Gap lengths keep 0 so the length search walks
    /// through them.
    next_first_code: [u64; MAX_LENGTHS],
    /// Dispatch: smallest code length whose codeword starts with this byte.
    start: [u16; NUM_SYMBOLS],
}

impl DecodeTables {
    fn build(table: &CodeTable) -> DecodeTables {
        let perm = table.perm();

        let mut inv_perm = [0usize; NUM_SYMBOLS];
        for (pos, &sym) in perm.iter().enumerate() {
            inv_perm[sym] = pos;
        }

        let mut first_sym = [0usize; MAX_LENGTHS];
        let mut first_code = [0u64; MAX_LENGTHS];
        let mut next_first_code = [0u64; MAX_LENGTHS];
        let head = table.code(perm[0] as u8);
        first_sym[usize::from(head.length)] = perm[0];
        first_code[usize::from(head.length)] = head.value;
        for i in 1..NUM_SYMBOLS {
            let cur = table.code(perm[i] as u8);
            let prev_length = table.code(perm[i - 1] as u8).length;
            if cur.length != prev_length {
                first_sym[usize::from(cur.length)] = perm[i];
                first_code[usize::from(cur.length)] = cur.value;
                next_first_code[usize::from(prev_length)] =
                    cur.value << (CODE_WIDTH - 1 - u32::from(cur.length));
            }
        }
        next_first_code[usize::from(table.max_length())] = 1 << (CODE_WIDTH - 1);

        let mut start = [NO_CODE; NUM_SYMBOLS];
        for sym in 0..NUM_SYMBOLS {
            let code = table.code(sym as u8);
            if code.length == 0 {
                continue;
            }
            if code.length >= 8 {
                let first_byte = (code.value >> (code.length - 8)) as usize;
                start[first_byte] = start[first_byte].min(u16::from(code.length));
            } else {
                // short codes own every byte they prefix
                let first_byte = (code.value << (8 - code.length)) as usize;
                for tail in 0..1usize << (8 - code.length) {
                    start[first_byte | tail] =
                        start[first_byte | tail].min(u16::from(code.length));
                }
            }
        }

        DecodeTables {
            inv_perm,
            first_sym,
            first_code,
            next_first_code,
            start,
        }
    }
}

/// Decompress `src` into `dst`.
///
/// Fails with [`Error::CorruptHeader`] when the 257-byte header is truncated
/// or inconsistent, and with [`Error::CorruptMessage`] when body bits do not
/// resolve to a symbol. The source is consumed forward only.
pub fn decode<S: ByteSource, D: ByteSink>(src: &mut S, dst: &mut D) -> Result<(), Error> {
    let mut lengths = [0u8; NUM_SYMBOLS];
    for slot in lengths.iter_mut() {
        *slot = src.next_byte()?.ok_or(Error::CorruptHeader)?;
    }
    let ignore_bits = src.next_byte()?.ok_or(Error::CorruptHeader)?;
    if ignore_bits >= 8 {
        return Err(Error::CorruptHeader);
    }

    let table = CodeTable::from_lengths(&lengths)?;
    let tables = DecodeTables::build(&table);
    let perm = table.perm();

    let mut reader = BitReader::new();
    reader.refill(src)?;
    while !reader.is_exhausted() || reader.bits() > u32::from(ignore_bits) {
        let mut length = u32::from(tables.start[usize::from(reader.leading_byte())]);
        if length == u32::from(NO_CODE) {
            return Err(Error::CorruptMessage);
        }
        if length > 8 {
            while reader.window() >= tables.next_first_code[length as usize] {
                length += 1;
            }
        }
        if length > reader.bits() {
            // the remaining bits are more than padding but less than a symbol
            return Err(Error::CorruptMessage);
        }

        let offset = (reader.window() >> (CODE_WIDTH - 1 - length))
            .checked_sub(tables.first_code[length as usize])
            .ok_or(Error::CorruptMessage)?;
        if offset >= NUM_SYMBOLS as u64 {
            return Err(Error::CorruptMessage);
        }
        let position = tables.inv_perm[tables.first_sym[length as usize]] + offset as usize;
        if position >= NUM_SYMBOLS {
            return Err(Error::CorruptMessage);
        }

        dst.put_byte(perm[position] as u8)?;
        reader.consume(length);
        reader.refill(src)?;
    }
    Ok(())
}

/// Decompress an in-memory stream, returning the original bytes.
pub fn decode_to_vec(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut src = Cursor::new(input);
    let mut dst = Vec::new();
    decode(&mut src, &mut dst)?;
    Ok(dst)
}
