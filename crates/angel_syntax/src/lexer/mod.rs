//! Tokenizer for AngelScript.
//!
//! [`classify`] is a pure function from a source suffix to the kind and byte length of the token it starts with. It
//! never fails: anything it cannot place becomes a one-character [`TokenKind::Unrecognized`] token. Advancing over
//! the source, skipping trivia and caching is the job of [`crate::cursor::TokenCursor`].
//!
//! Dispatch order, first match wins:
//! 1. byte-order mark and whitespace
//! 2. `//` and `/* */` comments
//! 3. numeric and bits constants
//! 4. string constants (plain, multiline, heredoc, unterminated)
//! 5. identifier-shaped runs that are not reserved words
//! 6. reserved words, operators and punctuation (longest match)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (`TokenKind`, `Token`)
//! - `trivia` - whitespace and comment scanning
//! - `numbers` - numeric literal scanning
//! - `strings` - string and heredoc scanning
//! - `words` - reserved word / operator / punctuation table matching

mod numbers;
mod strings;
pub mod tokens;
mod trivia;
mod words;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use crate::cursor::TokenCursor;

/// Classify the token at the start of `source`.
///
/// ## Returns
/// - `(kind, len)` where `len` is the byte length of the token. `len` is at least 1 for non-empty input and always
///   lands on a UTF-8 character boundary.
/// - `(TokenKind::End, 0)` for empty input.
pub fn classify(source: &str) -> (TokenKind, usize) {
    let Some(first) = source.chars().next() else {
        return (TokenKind::End, 0);
    };

    if let Some(len) = trivia::whitespace(source) {
        return (TokenKind::WhiteSpace, len);
    }
    if let Some(found) = trivia::comment(source) {
        return found;
    }
    if let Some(found) = numbers::scan(source) {
        return found;
    }
    if let Some(found) = strings::scan(source) {
        return found;
    }
    if let Some(len) = identifier(source) {
        return (TokenKind::Identifier, len);
    }
    if let Some(found) = words::longest_match(source) {
        return found;
    }

    (TokenKind::Unrecognized, first.len_utf8())
}

/// Tokenize a whole source string.
///
/// ## Returns
/// - Every significant token in order (whitespace and comments are dropped), terminated by a single
///   [`TokenKind::End`] token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut cursor = TokenCursor::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = cursor.next_token();
        tokens.push(token);
        if token.kind == TokenKind::End {
            return tokens;
        }
    }
}

/// End-of-file sentinel for a source of `len` bytes.
pub(crate) fn end_token(len: usize) -> Token {
    Token::new(TokenKind::End, Span::at(len, 0))
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a byte can start an identifier (ASCII-only).
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Check if a byte can continue an identifier (ASCII-only).
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Length of an identifier-shaped run that is not exactly a reserved spelling.
fn identifier(source: &str) -> Option<usize> {
    let bytes = source.as_bytes();
    if !is_ident_start(*bytes.first()?) {
        return None;
    }
    let len = 1 + bytes[1..].iter().take_while(|b| is_ident_continue(**b)).count();
    if words::is_reserved(&source[..len]) {
        return None;
    }
    Some(len)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use angel_core::lang::keywords::KeywordId;
    use angel_core::lang::operators::OperatorId;
    use angel_core::lang::punctuation::PunctuationId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn classify_empty_is_end() {
        assert_eq!(classify(""), (TokenKind::End, 0));
    }

    #[test]
    fn whitespace_and_bom() {
        assert_eq!(classify(" \t\r\nx"), (TokenKind::WhiteSpace, 4));
        assert_eq!(classify("\u{FEFF}int"), (TokenKind::WhiteSpace, 3));
    }

    #[test]
    fn comments() {
        assert_eq!(classify("// hi\nx"), (TokenKind::OnelineComment, 6));
        assert_eq!(classify("// eof"), (TokenKind::OnelineComment, 6));
        assert_eq!(classify("/* a */b"), (TokenKind::MultilineComment, 7));
        assert_eq!(classify("/* open"), (TokenKind::MultilineComment, 7));
    }

    #[test]
    fn reserved_words_are_not_identifiers() {
        assert_eq!(classify("int x"), (TokenKind::Keyword(KeywordId::Int), 3));
        assert_eq!(classify("int32 x"), (TokenKind::Keyword(KeywordId::Int), 5));
        assert_eq!(classify("integer"), (TokenKind::Identifier, 7));
        assert_eq!(classify("instance"), (TokenKind::Identifier, 8));
        assert_eq!(classify("in)"), (TokenKind::Keyword(KeywordId::In), 2));
    }

    #[test]
    fn word_operators() {
        assert_eq!(classify("and b"), (TokenKind::Operator(OperatorId::And), 3));
        assert_eq!(classify("!is null"), (TokenKind::Operator(OperatorId::NotIs), 3));
        assert_eq!(classify("!isValid"), (TokenKind::Operator(OperatorId::Not), 1));
    }

    #[test]
    fn longest_operator_match() {
        assert_eq!(classify(">>>= 1"), (TokenKind::Operator(OperatorId::ShrArithEq), 4));
        assert_eq!(classify(">> 1"), (TokenKind::Operator(OperatorId::Shr), 2));
        assert_eq!(classify("::x"), (TokenKind::Punctuation(PunctuationId::ColonColon), 2));
        assert_eq!(classify("**="), (TokenKind::Operator(OperatorId::StarStarEq), 3));
    }

    #[test]
    fn unrecognized_consumes_whole_char() {
        assert_eq!(classify("$"), (TokenKind::Unrecognized, 1));
        assert_eq!(classify("é!"), (TokenKind::Unrecognized, 2));
        assert_eq!(classify("λx"), (TokenKind::Unrecognized, 2));
    }

    #[test]
    fn tokenize_skips_trivia_and_ends() {
        assert_eq!(
            kinds("int a = 1; // done"),
            vec![
                TokenKind::Keyword(KeywordId::Int),
                TokenKind::Identifier,
                TokenKind::Operator(OperatorId::Eq),
                TokenKind::IntConstant,
                TokenKind::Punctuation(PunctuationId::Semicolon),
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn tokenize_spans_are_contiguous_modulo_trivia() {
        let source = "a.b(c, \"d\")";
        let tokens = tokenize(source);
        let texts: Vec<_> = tokens.iter().map(|t| t.text(source)).collect();
        assert_eq!(texts, vec!["a", ".", "b", "(", "c", ",", "\"d\"", ")", ""]);
        assert_eq!(tokens.last().map(|t| t.start()), Some(source.len()));
    }
}
