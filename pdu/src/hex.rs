//! Hex rendering of byte payloads.
//!
//! Bytes are written as two lowercase digits each with no separator, so
//! `[0x01, 0xFF]` becomes `01ff`. Diagnostics and tool output all go through
//! this module to stay consistent.

use std::fmt;

use thiserror::Error;

/// Display adapter that writes a byte slice as hex without allocating.
#[derive(Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

pub fn format(bytes: &[u8]) -> String {
    Hex(bytes).to_string()
}

#[derive(Error, PartialEq, Eq, Debug, Clone, Copy)]
pub enum ParseHexError {
    #[error("Invalid hex character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Odd number of hex digits")]
    OddLength,
}

/// Parse hex text into bytes.
///
/// Either case is accepted. Whitespace and the separators `:`, `-` and `_`
/// are skipped, and a leading `0x` is ignored.
pub fn parse(text: &str) -> Result<Vec<u8>, ParseHexError> {
    let trimmed = text.trim_start();
    let (offset, body) = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(body) => (text.len() - body.len(), body),
        None => (text.len() - trimmed.len(), trimmed),
    };

    let mut bytes = Vec::with_capacity(body.len() / 2);
    let mut high: Option<u8> = None;

    for (index, character) in body.char_indices() {
        if character.is_ascii_whitespace() || matches!(character, ':' | '-' | '_') {
            continue;
        }
        let nibble = character.to_digit(16).ok_or(ParseHexError::InvalidCharacter {
            character,
            position: offset + index,
        })? as u8;
        match high.take() {
            Some(high) => bytes.push(high << 4 | nibble),
            None => high = Some(nibble),
        }
    }

    if high.is_some() {
        return Err(ParseHexError::OddLength);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lowercase_without_separators() {
        assert_eq!(format(&[0x01, 0xFF]), "01ff");
        assert_eq!(format(&[0x00, 0x0A, 0xB0]), "000ab0");
        assert_eq!(format(&[]), "");
        assert_eq!(format!("{:?}", Hex(&[0xDE, 0xAD])), "dead");
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!(parse("01ff"), Ok(vec![0x01, 0xFF]));
        assert_eq!(parse("0x01FF"), Ok(vec![0x01, 0xFF]));
        assert_eq!(parse(" 03 04 00:0a-00_14 "), Ok(vec![0x03, 0x04, 0x00, 0x0A, 0x00, 0x14]));
        assert_eq!(parse(""), Ok(vec![]));
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse("0"), Err(ParseHexError::OddLength));
        assert_eq!(
            parse("0g"),
            Err(ParseHexError::InvalidCharacter {
                character: 'g',
                position: 1
            })
        );
        assert_eq!(
            parse("0x0z"),
            Err(ParseHexError::InvalidCharacter {
                character: 'z',
                position: 3
            })
        );
    }

    #[test]
    fn parse_inverts_format() {
        let bytes: Vec<u8> = (0..=u8::MAX).collect();
        assert_eq!(parse(&format(&bytes)), Ok(bytes));
    }
}
