//! Whitespace and comment scanning.

use super::TokenKind;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Length of a leading byte-order mark or whitespace run.
pub(super) fn whitespace(source: &str) -> Option<usize> {
    if source.starts_with(BYTE_ORDER_MARK) {
        return Some(BYTE_ORDER_MARK.len_utf8());
    }
    let len = source
        .bytes()
        .take_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        .count();
    (len > 0).then_some(len)
}

/// A `//` comment (newline included) or a `/* */` comment. Unterminated comments run to end of input.
pub(super) fn comment(source: &str) -> Option<(TokenKind, usize)> {
    let rest = source.strip_prefix('/')?;
    if let Some(body) = rest.strip_prefix('/') {
        let len = body.find('\n').map_or(source.len(), |i| 2 + i + 1);
        return Some((TokenKind::OnelineComment, len));
    }
    if let Some(body) = rest.strip_prefix('*') {
        let len = body.find("*/").map_or(source.len(), |i| 2 + i + 2);
        return Some((TokenKind::MultilineComment, len));
    }
    None
}
