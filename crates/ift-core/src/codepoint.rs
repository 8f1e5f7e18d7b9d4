/// Highest codepoint addressable by a 16-bit glyph range.
pub const BMP_MAX: u32 = 0xFFFF;

/// Parse a codepoint literal into exactly one Unicode scalar value.
///
/// Accepted forms:
/// - the glyph itself, as a one-character string;
/// - `\uXXXX`, `\UXXXXXXXX`, `\u{X..}` escape text;
/// - CSS escapes `\X..` (1 to 6 hex digits);
/// - `0xX..`, `U+X..`.
///
/// Returns `None` for empty input, several scalars, surrogates and values
/// above U+10FFFF. Unmarked hex such as `"beef"` is four scalars, not U+BEEF:
/// feeds that store bare hex convert it with [`from_hex`] first.
///
/// # Example
/// ```
/// use ift_core::codepoint::parse_literal;
/// assert_eq!(parse_literal("\u{f09b}"), Some('\u{f09b}'));
/// assert_eq!(parse_literal("\\uf09b"), Some('\u{f09b}'));
/// assert_eq!(parse_literal("U+F09B"), Some('\u{f09b}'));
/// assert_eq!(parse_literal("f09b"), None);
/// assert_eq!(parse_literal(""), None);
/// ```
#[must_use]
pub fn parse_literal(literal: &str) -> Option<char> {
    let mut chars = literal.chars();
    let first = chars.next()?;
    if chars.next().is_none() {
        return Some(first);
    }

    let text = literal.trim();
    let digits = if let Some(rest) = text.strip_prefix("\\u{") {
        rest.strip_suffix('}').filter(|d| (1..=6).contains(&d.len()))?
    } else if let Some(rest) = text.strip_prefix("\\u") {
        Some(rest).filter(|d| d.len() == 4)?
    } else if let Some(rest) = text.strip_prefix("\\U") {
        Some(rest).filter(|d| d.len() == 8)?
    } else if let Some(rest) = text.strip_prefix('\\') {
        Some(rest).filter(|d| (1..=6).contains(&d.len()))?
    } else if let Some(rest) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(rest).filter(|d| (1..=6).contains(&d.len()))?
    } else if let Some(rest) = text.strip_prefix("U+").or_else(|| text.strip_prefix("u+")) {
        Some(rest).filter(|d| (4..=6).contains(&d.len()))?
    } else {
        return None;
    };

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    char::from_u32(value)
}

/// `U+XXXX` notation, at least four hex digits.
///
/// # Example
/// ```
/// use ift_core::codepoint::notation;
/// assert_eq!(notation('\u{f09b}'), "U+F09B");
/// assert_eq!(notation('A'), "U+0041");
/// ```
#[must_use]
pub fn notation(ch: char) -> String {
    format!("U+{:04X}", u32::from(ch))
}

/// Scalar value of an unmarked hex field (`"f09b"`, `"21"`), the form icon
/// metadata files use for their codepoint columns.
///
/// # Example
/// ```
/// use ift_core::codepoint::from_hex;
/// assert_eq!(from_hex("f09b"), Some('\u{f09b}'));
/// assert_eq!(from_hex("21"), Some('!'));
/// assert_eq!(from_hex("zz"), None);
/// ```
#[must_use]
pub fn from_hex(digits: &str) -> Option<char> {
    let digits = digits.trim();
    if !(1..=6).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}

/// Convert a declared bound into a scalar value.
#[inline]
#[must_use]
pub fn scalar(value: u32) -> Option<char> {
    char::from_u32(value)
}
