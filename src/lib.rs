#![forbid(unsafe_code)]

//! Canonical Huffman compression codec for arbitrary byte streams.
//!
//! The compressed container is self-describing and deliberately simple: a
//! 256-byte table of per-symbol code lengths, one byte counting the trailing
//! padding bits, then the body as MSB-first packed canonical codewords. The
//! length table alone reconstructs the code on the decode side, so no tree
//! or value table ever crosses the wire.
//!
//! [`encode`] makes two passes over a rewindable [`ByteSource`] (histogram,
//! then body); [`decode`] consumes its source forward only. Both are
//! synchronous, single-threaded, and O(1) in working memory.
//!
//! ```
//! let compressed = huffc::encode_to_vec(b"abracadabra").unwrap();
//! assert_eq!(huffc::decode_to_vec(&compressed).unwrap(), b"abracadabra");
//! ```

mod bitio;
mod canonical;
mod decode;
mod encode;
mod tree;

pub mod error;
pub mod stream;

pub use decode::{decode, decode_to_vec};
pub use encode::{encode, encode_to_vec};
pub use error::Error;
pub use stream::{ByteSink, ByteSource};
