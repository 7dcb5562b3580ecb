//! Symbol counting over the fixed 256 entry alphabet.

use crate::errors::CodecError;

/// Number of distinct symbols the codec can represent.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count for every symbol of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; ALPHABET_SIZE],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    pub fn new() -> FrequencyTable {
        FrequencyTable {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Count every character of `text`.
    ///
    /// Characters above `U+00FF` do not fit the alphabet and are rejected
    /// instead of being truncated to their low byte.
    pub fn from_text(text: &str) -> Result<FrequencyTable, CodecError> {
        let mut table = FrequencyTable::new();
        for (position, character) in text.chars().enumerate() {
            let symbol = to_symbol(character, position)?;
            table.counts[symbol as usize] += 1;
        }
        Ok(table)
    }

    pub fn from_bytes(bytes: &[u8]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for &byte in bytes {
            table.counts[byte as usize] += 1;
        }
        table
    }

    pub fn count(&self, symbol: u8) -> usize {
        self.counts[symbol as usize]
    }

    /// Sum of all counts, which is the length of the counted input in symbols
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of symbols with a non-zero count
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|count| **count > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    /// Iterate `(symbol, count)` pairs with a non-zero count, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(symbol, count)| (symbol as u8, *count))
    }
}

/// Map a character onto its alphabet symbol. `position` is only used for error reporting.
pub(crate) fn to_symbol(character: char, position: usize) -> Result<u8, CodecError> {
    u8::try_from(u32::from(character))
        .map_err(|_| CodecError::AlphabetOverflow { character, position })
}
