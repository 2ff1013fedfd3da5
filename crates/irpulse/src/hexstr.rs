//! Hex text helpers shared by the decoder and encoder.
//!
//! Commands travel as hex strings, two characters per byte. The codec itself
//! works on bytes; these helpers cover the text boundary and the few
//! digit-level operations that callers building commands by hand rely on.

use crate::error::{CodecError, Result};

/// Decode hex text (either case) into bytes.
pub fn decode_bytes(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

/// Encode bytes as lowercase hex text.
pub fn encode_bytes(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse up to four hex digits into an unsigned 16-bit value.
pub fn parse_u16(digits: &str) -> Result<u16> {
    if digits.is_empty() || digits.len() > 4 || !is_hex_digits(digits) {
        return Err(CodecError::MalformedHex {
            reason: format!("expected 1-4 hex digits, got {:?}", digits),
        });
    }
    u16::from_str_radix(digits, 16).map_err(|err| CodecError::MalformedHex {
        reason: format!("{digits:?}: {err}"),
    })
}

/// Lowercase hex digits of `value`, without padding.
pub fn to_hex(value: u32) -> String {
    format!("{value:x}")
}

/// Split off the first byte (two hex characters) from the rest.
///
/// `"1a2b3c"` becomes `("1a", "2b3c")`.
pub fn split_first_byte(text: &str) -> Result<(&str, &str)> {
    if text.len() < 2 {
        return Err(CodecError::TruncatedCommand {
            needed: 2,
            remaining: text.len(),
        });
    }
    match text.get(..2) {
        Some(head) if is_hex_digits(head) => Ok((head, &text[2..])),
        _ => Err(CodecError::MalformedHex {
            reason: format!("expected a hex byte at the start of {:?}", text),
        }),
    }
}

/// Swap the byte pairs of a four-digit value, converting between big and
/// little endian: `"1234"` becomes `"3412"`.
pub fn swap_double_byte(digits: &str) -> Result<String> {
    if digits.len() != 4 || !is_hex_digits(digits) {
        return Err(CodecError::MalformedHex {
            reason: format!("expected 4 hex digits, got {:?}", digits),
        });
    }
    Ok(format!("{}{}", &digits[2..], &digits[..2]))
}

/// Left-pad hex digits with zeros to one byte (`"a"` to `"0a"`).
pub fn pad_byte(digits: &str) -> String {
    format!("{digits:0>2}")
}

/// Left-pad hex digits with zeros to two bytes (`"a3"` to `"00a3"`).
pub fn pad_double_byte(digits: &str) -> String {
    format!("{digits:0>4}")
}

fn is_hex_digits(digits: &str) -> bool {
    digits.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepts_mixed_case() {
        assert_eq!(decode_bytes("26aB0d").unwrap(), vec![0x26, 0xab, 0x0d]);
    }

    #[test]
    fn decode_rejects_odd_length() {
        let err = decode_bytes("260").unwrap_err();
        assert!(matches!(err, CodecError::MalformedHex { .. }));
    }

    #[test]
    fn decode_rejects_non_hex() {
        let err = decode_bytes("26zz").unwrap_err();
        assert!(matches!(err, CodecError::MalformedHex { .. }));
    }

    #[test]
    fn encode_is_lowercase() {
        assert_eq!(encode_bytes(&[0x26, 0xAB]), "26ab");
    }

    #[test]
    fn parse_and_format_integers() {
        assert_eq!(parse_u16("26").unwrap(), 38);
        assert_eq!(parse_u16("FFFF").unwrap(), u16::MAX);
        assert!(parse_u16("").is_err());
        assert!(parse_u16("10000").is_err());
        assert!(parse_u16("xy").is_err());
        assert!(parse_u16("+ff").is_err());
        assert!(parse_u16("-1").is_err());
        assert_eq!(to_hex(38), "26");
        assert_eq!(to_hex(0x10d), "10d");
    }

    #[test]
    fn split_first_byte_pairs() {
        assert_eq!(split_first_byte("1a2b3c").unwrap(), ("1a", "2b3c"));
        assert_eq!(split_first_byte("1a").unwrap(), ("1a", ""));
        assert_eq!(
            split_first_byte("1").unwrap_err(),
            CodecError::TruncatedCommand {
                needed: 2,
                remaining: 1
            }
        );
        assert_eq!(
            split_first_byte("").unwrap_err(),
            CodecError::TruncatedCommand {
                needed: 2,
                remaining: 0
            }
        );
        assert!(matches!(
            split_first_byte("zz00"),
            Err(CodecError::MalformedHex { .. })
        ));
        assert!(matches!(
            split_first_byte("aé"),
            Err(CodecError::MalformedHex { .. })
        ));
    }

    #[test]
    fn swap_double_byte_converts_endianness() {
        assert_eq!(swap_double_byte("1234").unwrap(), "3412");
        assert_eq!(swap_double_byte("002a").unwrap(), "2a00");
        assert!(swap_double_byte("123").is_err());
        assert!(matches!(
            swap_double_byte("zzzz"),
            Err(CodecError::MalformedHex { .. })
        ));
    }

    #[test]
    fn padding() {
        assert_eq!(pad_byte("a"), "0a");
        assert_eq!(pad_byte("ff"), "ff");
        assert_eq!(pad_double_byte("a3"), "00a3");
        assert_eq!(pad_double_byte("10d"), "010d");
    }
}
