//! Canonical code construction, shared by the encoder and decoder.
//!
//! A canonical Huffman code is fully determined by its per-symbol code
//! lengths: symbols are ordered by `(length, symbol)`, codewords of a common
//! length are consecutive integers, and each length increase shifts the next
//! value left by the difference. Both sides of the codec run the identical
//! construction, so the 256-byte length table is the only code description
//! that crosses the wire.

use crate::bitio::CODE_WIDTH;
use crate::error::Error;

/// Number of symbols in the byte alphabet.
pub(crate) const NUM_SYMBOLS: usize = 256;

/// One codeword: `value` holds the code right-justified in its low `length`
/// bits. `length == 0` means the symbol does not appear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Code {
    pub value: u64,
    pub length: u8,
}

/// The full canonical code for the byte alphabet.
#[derive(Debug)]
pub(crate) struct CodeTable {
    codes: [Code; NUM_SYMBOLS],
    /// Symbol indices sorted by `(length, symbol)` ascending; unused symbols
    /// (length 0) sort first, used symbols follow in canonical order.
    perm: [usize; NUM_SYMBOLS],
}

impl CodeTable {
    /// Build and validate the canonical code for a length table.
    ///
    /// Fails with [`Error::CorruptHeader`] when the length multiset is not a
    /// complete prefix code: a value overflows its own length while being
    /// assigned, the final code of a multi-symbol table is not all-ones at
    /// the maximum length, or a table with exactly one used symbol gives it
    /// more than one bit. Lengths that cannot be represented in a 64-bit
    /// codeword are rejected outright.
    pub fn from_lengths(lengths: &[u8; NUM_SYMBOLS]) -> Result<CodeTable, Error> {
        let mut codes = [Code::default(); NUM_SYMBOLS];
        for (code, &length) in codes.iter_mut().zip(lengths) {
            code.length = length;
        }

        let mut perm = [0usize; NUM_SYMBOLS];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = i;
        }
        perm.sort_unstable_by_key(|&s| (codes[s].length, s));

        for i in 1..NUM_SYMBOLS {
            let cur = codes[perm[i]].length;
            if u32::from(cur) >= CODE_WIDTH {
                return Err(Error::CorruptHeader);
            }
            let prev = codes[perm[i - 1]].length;
            let value = if prev == 0 {
                // first used symbol after the run of absent ones
                0
            } else {
                (codes[perm[i - 1]].value + 1) << (cur - prev)
            };
            if value >> cur != 0 {
                return Err(Error::CorruptHeader);
            }
            codes[perm[i]].value = value;
        }

        // Completeness: with two or more symbols in use, Kraft equality holds
        // exactly when the largest canonical code is the all-ones word at the
        // maximum length. A lone symbol must get the one-bit code 0.
        let last = codes[perm[NUM_SYMBOLS - 1]];
        if codes[perm[NUM_SYMBOLS - 2]].length != 0 {
            if last.value != (1u64 << last.length) - 1 {
                return Err(Error::CorruptHeader);
            }
        } else if last.length > 1 {
            return Err(Error::CorruptHeader);
        }

        Ok(CodeTable { codes, perm })
    }

    /// The codeword for a symbol.
    pub fn code(&self, symbol: u8) -> Code {
        self.codes[usize::from(symbol)]
    }

    /// Symbol indices in canonical assignment order.
    pub fn perm(&self) -> &[usize; NUM_SYMBOLS] {
        &self.perm
    }

    /// The largest code length in use; 0 when no symbol appears.
    pub fn max_length(&self) -> u8 {
        self.codes[self.perm[NUM_SYMBOLS - 1]].length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths_of(pairs: &[(u8, u8)]) -> [u8; NUM_SYMBOLS] {
        let mut lengths = [0u8; NUM_SYMBOLS];
        for &(sym, len) in pairs {
            lengths[usize::from(sym)] = len;
        }
        lengths
    }

    #[test]
    fn assigns_rfc1951_style_example() {
        // The classic eight-symbol example: lengths 3,3,3,3,3,2,4,4 over
        // symbols 0..=7.
        let lengths =
            lengths_of(&[(0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (5, 2), (6, 4), (7, 4)]);
        let table = CodeTable::from_lengths(&lengths).unwrap();

        let expected = [
            0b010, 0b011, 0b100, 0b101, 0b110, 0b00, 0b1110, 0b1111,
        ];
        for (sym, &value) in expected.iter().enumerate() {
            assert_eq!(table.code(sym as u8).value, value, "symbol {sym}");
        }
        assert_eq!(table.max_length(), 4);
    }

    #[test]
    fn lone_symbol_gets_the_zero_code() {
        let table = CodeTable::from_lengths(&lengths_of(&[(b'a', 1)])).unwrap();
        assert_eq!(table.code(b'a'), Code { value: 0, length: 1 });
        assert_eq!(table.max_length(), 1);
    }

    #[test]
    fn two_symbols_get_zero_and_one() {
        let table = CodeTable::from_lengths(&lengths_of(&[(b'a', 1), (b'b', 1)])).unwrap();
        assert_eq!(table.code(b'a'), Code { value: 0, length: 1 });
        assert_eq!(table.code(b'b'), Code { value: 1, length: 1 });
    }

    #[test]
    fn all_absent_is_valid() {
        let table = CodeTable::from_lengths(&[0u8; NUM_SYMBOLS]).unwrap();
        assert_eq!(table.max_length(), 0);
    }

    #[test]
    fn canonical_order_breaks_length_ties_by_symbol() {
        let table =
            CodeTable::from_lengths(&lengths_of(&[(b'z', 2), (b'a', 2), (b'm', 2), (b'q', 2)]))
                .unwrap();
        assert_eq!(table.code(b'a').value, 0b00);
        assert_eq!(table.code(b'm').value, 0b01);
        assert_eq!(table.code(b'q').value, 0b10);
        assert_eq!(table.code(b'z').value, 0b11);
    }

    #[test]
    fn rejects_oversubscribed_lengths() {
        // three one-bit codes overflow at the third assignment
        let err = CodeTable::from_lengths(&lengths_of(&[(0, 1), (1, 1), (2, 1)])).unwrap_err();
        assert!(matches!(err, Error::CorruptHeader));
    }

    #[test]
    fn rejects_incomplete_lengths() {
        // {1, 2} leaves codeword 11 unassigned
        let err = CodeTable::from_lengths(&lengths_of(&[(0, 1), (1, 2)])).unwrap_err();
        assert!(matches!(err, Error::CorruptHeader));
    }

    #[test]
    fn accepts_the_matching_complete_set() {
        let table = CodeTable::from_lengths(&lengths_of(&[(0, 1), (1, 2), (2, 2)])).unwrap();
        assert_eq!(table.code(0).value, 0b0);
        assert_eq!(table.code(1).value, 0b10);
        assert_eq!(table.code(2).value, 0b11);
    }

    #[test]
    fn rejects_multibit_lone_symbol() {
        let err = CodeTable::from_lengths(&lengths_of(&[(b'x', 2)])).unwrap_err();
        assert!(matches!(err, Error::CorruptHeader));
    }

    #[test]
    fn rejects_lengths_beyond_the_code_width() {
        let err = CodeTable::from_lengths(&lengths_of(&[(0, 1), (1, 200)])).unwrap_err();
        assert!(matches!(err, Error::CorruptHeader));
    }

    #[test]
    fn rejects_a_random_looking_table() {
        let mut lengths = [0u8; NUM_SYMBOLS];
        let mut state = 0x9e3779b97f4a7c15u64;
        for slot in lengths.iter_mut() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            *slot = (state >> 32) as u8;
        }
        assert!(CodeTable::from_lengths(&lengths).is_err());
    }
}
