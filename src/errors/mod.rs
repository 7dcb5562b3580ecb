//! Errors returned by the codec.

/// Everything that can go wrong while counting, encoding or decoding.
///
/// All variants describe bad input handed to the codec. Nothing here is
/// transient, so there is nothing worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    #[error("Character {character:?} at position {position} is outside of the 256 symbol alphabet")]
    AlphabetOverflow { character: char, position: usize },
    #[error("Symbol {symbol:#04x} at position {position} has no code in the code table")]
    SymbolNotCoded { symbol: u8, position: usize },
    #[error("Expected '0' or '1' in the bit-string but found {bit:?} at position {position}")]
    MalformedBit { bit: char, position: usize },
    #[error("Bit-string ended in the middle of a code, {consumed} trailing bits did not reach a leaf")]
    TruncatedCode { consumed: usize },
}

#[cfg(test)]
mod tests {
    use super::CodecError;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_input() {
        let err = CodecError::MalformedBit {
            bit: '2',
            position: 7,
        };
        assert_eq!(
            err.to_string(),
            "Expected '0' or '1' in the bit-string but found '2' at position 7"
        );

        let err = CodecError::SymbolNotCoded {
            symbol: b'a',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Symbol 0x61 at position 3 has no code in the code table"
        );

        let err = CodecError::AlphabetOverflow {
            character: '€',
            position: 0,
        };
        assert!(err.to_string().contains("'€'"));
    }
}
