//! A Huffman coding codec.
//!
//! Text is counted, a Huffman tree is built from the counts and every character
//! is replaced by the path leading to its leaf. The output is a string of `'0'`
//! and `'1'` characters, not packed bytes, and it always travels together with
//! the tree that produced it.
//!
//! ```
//! let encoded = huffcodec::compress("aaab")?;
//! assert_eq!(encoded.bit_len(), 4);
//! assert_eq!(huffcodec::decompress(&encoded)?, "aaab");
//! # Ok::<(), huffcodec::CodecError>(())
//! ```
//!
//! Symbols are restricted to the 256 code points `U+0000..=U+00FF`. Anything
//! wider is rejected with [`CodecError::AlphabetOverflow`].
#![no_std]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod code_table;
pub mod codec;
pub mod display;
pub mod errors;
pub mod frequency;
pub mod tree;
mod tests;

pub use code_table::CodeTable;
#[cfg(feature = "fuzz_exports")]
pub use codec::round_trip;
pub use codec::{compress, decode, decompress, encode, EncodedResult};
pub use errors::CodecError;
pub use frequency::{FrequencyTable, ALPHABET_SIZE};
pub use tree::{HuffmanTree, Node};
