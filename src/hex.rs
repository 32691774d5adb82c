//! Hex text <-> byte conversion.
//!
//! Accepted input grammar:
//!
//! ```text
//! [whitespace] ["0x" | "0X"] [0-9a-fA-F]{2k} [whitespace]
//! ```
//!
//! Whitespace is anything `char::is_whitespace` accepts except U+0085 (next
//! line), plus U+FEFF (byte order mark).  Output of [`encode`] is always lowercase and always carries
//! the `0x` prefix, so the empty sequence encodes to `"0x"`.

use crate::error::InvalidHexError;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

#[inline]
fn is_padding(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim padding and strip an optional `0x` / `0X` prefix.
fn digit_run(text: &str) -> &str {
    let text = text.trim_matches(is_padding);
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

#[inline]
fn nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// Decode hex text into bytes.
///
/// Character validity is checked before length parity, so `"0xas"` reports
/// the `'s'` rather than the odd count.
pub fn decode<T: AsRef<str>>(text: T) -> Result<Vec<u8>, InvalidHexError> {
    let digits = digit_run(text.as_ref());

    if let Some((index, ch)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(InvalidHexError::InvalidCharacter { ch, index });
    }
    if digits.len() % 2 != 0 {
        return Err(InvalidHexError::OddLength { digits: digits.len() });
    }

    Ok(digits
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
        .collect())
}

/// Decode hex text held in a raw byte buffer (e.g. read from a file or stdin).
pub fn decode_utf8(raw: &[u8]) -> Result<Vec<u8>, InvalidHexError> {
    let text = std::str::from_utf8(raw).map_err(|_| InvalidHexError::NotText)?;
    decode(text)
}

/// Encode bytes as `0x`-prefixed lowercase hex.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + 2 * bytes.len());
    out.push_str("0x");
    for &b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}
