//! String literal scanning.
//!
//! ## Notes
//! - `"""` opens a heredoc that ends at the next `"""` (or end of input). Heredocs have no escapes.
//! - `"` and `'` open a normal string. A backslash escapes the next character; an escaped quote does not close the
//!   string. A raw newline inside turns it into a multiline string.
//! - A normal string that reaches end of input is a nonterminated string spanning the rest of the source.

use super::TokenKind;

const HEREDOC_QUOTE: &str = "\"\"\"";

pub(super) fn scan(source: &str) -> Option<(TokenKind, usize)> {
    let bytes = source.as_bytes();
    let quote = match bytes.first()? {
        q @ (b'"' | b'\'') => *q,
        _ => return None,
    };

    if let Some(body) = source.strip_prefix(HEREDOC_QUOTE) {
        let len = body
            .find(HEREDOC_QUOTE)
            .map_or(source.len(), |i| HEREDOC_QUOTE.len() * 2 + i);
        return Some((TokenKind::HeredocStringConstant, len));
    }

    let mut kind = TokenKind::StringConstant;
    let mut even_slashes = true;
    for (i, &b) in bytes.iter().enumerate().skip(1) {
        if b == b'\n' {
            kind = TokenKind::MultilineStringConstant;
        }
        if b == quote && even_slashes {
            return Some((kind, i + 1));
        }
        even_slashes = if b == b'\\' { !even_slashes } else { true };
    }

    Some((TokenKind::NonTerminatedStringConstant, source.len()))
}
