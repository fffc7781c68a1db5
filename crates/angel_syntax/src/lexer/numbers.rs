//! Numeric literal scanning.
//!
//! ## Notes
//! - `0b`, `0o`, `0d` and `0x` (either case) select a radix and produce a bits constant. Only digits valid in that
//!   radix are consumed, so `0b102` is the bits constant `0b10` followed by the integer `2`.
//! - A fraction or an exponent makes the literal a double; a trailing `f`/`F` makes it a float, also after a plain
//!   integer (`1f`).

use super::TokenKind;

pub(super) fn scan(source: &str) -> Option<(TokenKind, usize)> {
    let bytes = source.as_bytes();
    let starts_number = match bytes {
        [b'0'..=b'9', ..] => true,
        [b'.', b'0'..=b'9', ..] => true,
        _ => false,
    };
    if !starts_number {
        return None;
    }

    if let Some(radix) = radix_prefix(bytes) {
        let digits = bytes[2..].iter().take_while(|b| digit_in_radix(**b, radix)).count();
        return Some((TokenKind::BitsConstant, 2 + digits));
    }

    let mut len = decimal_digits(bytes, 0);
    let mut is_real = false;

    if bytes.get(len) == Some(&b'.') {
        is_real = true;
        len = decimal_digits(bytes, len + 1);
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        is_real = true;
        len += 1;
        if matches!(bytes.get(len), Some(b'+' | b'-')) {
            len += 1;
        }
        len = decimal_digits(bytes, len);
    }

    if matches!(bytes.get(len), Some(b'f' | b'F')) {
        return Some((TokenKind::FloatConstant, len + 1));
    }

    let kind = if is_real { TokenKind::DoubleConstant } else { TokenKind::IntConstant };
    Some((kind, len))
}

fn radix_prefix(bytes: &[u8]) -> Option<u32> {
    let [b'0', prefix, ..] = bytes else {
        return None;
    };
    match prefix.to_ascii_lowercase() {
        b'b' => Some(2),
        b'o' => Some(8),
        b'd' => Some(10),
        b'x' => Some(16),
        _ => None,
    }
}

fn digit_in_radix(b: u8, radix: u32) -> bool {
    char::from(b).to_digit(radix).is_some()
}

/// Index just past the run of decimal digits starting at `from`.
fn decimal_digits(bytes: &[u8], from: usize) -> usize {
    from + bytes
        .get(from..)
        .unwrap_or_default()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}
