//! Token cursor: on-demand tokenization with rewind.
//!
//! The parser never materializes a token vector. It pulls tokens one at a time from a [`TokenCursor`], looks ahead
//! by reading further, and backtracks with [`TokenCursor::rewind_to`]. The most recently rewound-to token is cached
//! so that the very common "peek, rewind, read again" pattern costs a single classification.
//!
//! ## Notes
//! - The cursor position is a byte offset into the source. It only ever lands on character boundaries because every
//!   token length produced by [`crate::lexer::classify`] does.
//! - [`TokenCursor::jump_to`] drops the cache. It exists for splitting `>>`/`>>>` when nested template argument lists
//!   close back to back.

use crate::ast::Span;
use crate::lexer::{self, Token, TokenKind};

/// Position-tracking token source over one source string.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    source: &'a str,
    pos: usize,
    cached: Option<Token>,
}

impl<'a> TokenCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            cached: None,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Read the next significant token and advance past it.
    ///
    /// Whitespace and comments are skipped. At end of input this keeps returning a zero-length
    /// [`TokenKind::End`] token without advancing.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.cached.filter(|t| t.span.start == self.pos) {
            self.pos = token.span.end;
            return token;
        }

        loop {
            let rest = match self.source.get(self.pos..) {
                Some(rest) if !rest.is_empty() => rest,
                _ => return lexer::end_token(self.pos.max(self.source.len())),
            };
            let (kind, len) = lexer::classify(rest);
            let token = Token::new(kind, Span::at(self.pos, len));
            self.pos += len;
            if !kind.is_trivia() {
                return token;
            }
        }
    }

    /// Look at the next significant token without consuming it.
    pub fn peek(&mut self) -> Token {
        let token = self.next_token();
        self.rewind_to(token);
        token
    }

    /// Move back to the start of `token` and remember it so the next read is free.
    pub fn rewind_to(&mut self, token: Token) {
        self.cached = Some(token);
        self.pos = token.span.start;
    }

    /// Move to an arbitrary offset, dropping the cached token.
    pub fn jump_to(&mut self, offset: usize) {
        self.cached = None;
        self.pos = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angel_core::lang::operators::OperatorId;

    #[test]
    fn rewind_replays_the_same_token() {
        let mut cursor = TokenCursor::new("  foo bar");
        let foo = cursor.next_token();
        assert_eq!(foo.span, Span::new(2, 5));
        let bar = cursor.next_token();
        cursor.rewind_to(foo);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.next_token(), foo);
        assert_eq!(cursor.next_token(), bar);
    }

    #[test]
    fn end_is_sticky() {
        let mut cursor = TokenCursor::new("x ");
        cursor.next_token();
        let end = cursor.next_token();
        assert_eq!(end.kind, TokenKind::End);
        assert_eq!(end.span, Span::new(2, 2));
        assert_eq!(cursor.next_token(), end);
    }

    #[test]
    fn jump_splits_shift_token() {
        let mut cursor = TokenCursor::new(">>");
        let shr = cursor.next_token();
        assert!(shr.kind.is_operator(OperatorId::Shr));
        cursor.jump_to(shr.span.start + 1);
        let gt = cursor.next_token();
        assert!(gt.kind.is_operator(OperatorId::Gt));
        assert_eq!(gt.span, Span::new(1, 2));
    }

    #[test]
    fn peek_does_not_advance() {
        let mut cursor = TokenCursor::new("/* c */ a");
        let peeked = cursor.peek();
        assert_eq!(cursor.position(), peeked.span.start);
        assert_eq!(cursor.next_token(), peeked);
    }
}
