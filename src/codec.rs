//! Compression and decompression of text into symbolic bit-strings.

use crate::code_table::CodeTable;
use crate::errors::CodecError;
use crate::frequency::{to_symbol, FrequencyTable};
use crate::tree::{HuffmanTree, Node};
use alloc::string::String;

/// A bit-string together with the tree needed to decode it.
///
/// No code assignments are transmitted implicitly, so the tree has to travel
/// with the bits. Empty input has no tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResult {
    bits: String,
    tree: Option<HuffmanTree>,
}

impl EncodedResult {
    pub fn new(bits: String, tree: Option<HuffmanTree>) -> EncodedResult {
        EncodedResult { bits, tree }
    }

    pub fn bits(&self) -> &str {
        &self.bits
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Average code length over `symbols` encoded symbols, 0 for empty input
    pub fn bits_per_symbol(&self, symbols: usize) -> f64 {
        if symbols == 0 {
            return 0.0;
        }
        self.bits.len() as f64 / symbols as f64
    }

    pub fn into_parts(self) -> (String, Option<HuffmanTree>) {
        (self.bits, self.tree)
    }
}

/// Build a tree for `text` and encode `text` with it.
pub fn compress(text: &str) -> Result<EncodedResult, CodecError> {
    let frequencies = FrequencyTable::from_text(text)?;
    let Some(tree) = HuffmanTree::build(&frequencies) else {
        return Ok(EncodedResult::new(String::new(), None));
    };
    let bits = encode(text, &tree.code_table())?;
    Ok(EncodedResult::new(bits, Some(tree)))
}

/// Restore the text that produced `result`.
pub fn decompress(result: &EncodedResult) -> Result<String, CodecError> {
    match result.tree() {
        Some(tree) => decode(result.bits(), tree),
        None if result.bits.is_empty() => Ok(String::new()),
        // without a tree no bit can ever end on a leaf
        None => Err(CodecError::TruncatedCode {
            consumed: result.bits.len(),
        }),
    }
}

/// Concatenate the code of every character of `text`.
///
/// The table does not have to come from `text` itself, any symbol it lacks is
/// reported as [`CodecError::SymbolNotCoded`]. So is a symbol mapped to the
/// empty path, which could not be told apart from its neighbours when decoding.
pub fn encode(text: &str, table: &CodeTable) -> Result<String, CodecError> {
    let mut bits = String::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        let symbol = to_symbol(character, position)?;
        match table.get(symbol) {
            Some(code) if !code.is_empty() => bits.push_str(code),
            _ => return Err(CodecError::SymbolNotCoded { symbol, position }),
        }
    }
    Ok(bits)
}

/// Walk `tree` along `bits`, emitting a symbol each time a leaf is reached.
pub fn decode(bits: &str, tree: &HuffmanTree) -> Result<String, CodecError> {
    let root = tree.root();
    let mut text = String::new();
    // Always an internal node: it starts at the root, which HuffmanTree
    // guarantees is internal, and only ever moves onto internal nodes.
    let mut current = root;
    let mut pending = 0;

    for (position, bit) in bits.chars().enumerate() {
        let Node::Internal { left, right, .. } = current else {
            unreachable!("decode cursor rests on a leaf");
        };
        let next = match bit {
            '0' => left,
            '1' => right,
            _ => return Err(CodecError::MalformedBit { bit, position }),
        };
        pending += 1;

        match next.as_ref() {
            Node::Leaf { symbol, .. } => {
                text.push(char::from(*symbol));
                current = root;
                pending = 0;
            }
            internal => current = internal,
        }
    }

    if pending > 0 {
        return Err(CodecError::TruncatedCode { consumed: pending });
    }
    Ok(text)
}

/// Compress `data` (one symbol per byte), decompress it again and check that
/// nothing got lost on the way.
#[cfg(any(test, feature = "fuzz_exports"))]
pub fn round_trip(data: &[u8]) {
    let text: String = data.iter().copied().map(char::from).collect();

    let encoded = compress(&text).unwrap();
    match encoded.tree() {
        Some(tree) => {
            let frequencies = FrequencyTable::from_bytes(data);
            let filler = usize::from(frequencies.distinct() == 1);
            assert_eq!(tree.root().weight(), data.len() + filler);
            assert_eq!(
                tree.code_table().len(),
                frequencies.distinct().max(2),
                "one code per distinct symbol, or two with the filler"
            );
        }
        None => assert!(data.is_empty()),
    }

    let decoded = decompress(&encoded).unwrap();
    assert_eq!(decoded, text);
}
