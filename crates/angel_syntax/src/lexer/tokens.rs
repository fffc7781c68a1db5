//! Token types for the AngelScript tokenizer.
//!
//! Language vocabulary is carried as **registry-backed IDs**:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators (including word operators like `and` and `is`)
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - Tokens never own text. A token is a kind plus a byte span into the source it was classified from.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use angel_core::lang::keywords::{self, KeywordId};
use angel_core::lang::operators::{self, OperatorId};
use angel_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and literals ==========
    Identifier,
    IntConstant,
    FloatConstant,
    DoubleConstant,
    BitsConstant,
    StringConstant,
    MultilineStringConstant,
    HeredocStringConstant,
    NonTerminatedStringConstant,

    // ========== Trivia ==========
    WhiteSpace,
    OnelineComment,
    MultilineComment,

    // ========== Special ==========
    Unrecognized,
    End,
}

impl TokenKind {
    /// Spelling used in diagnostics: the canonical text for vocabulary tokens, a `<placeholder>` otherwise.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::as_str(*id),
            TokenKind::Operator(id) => operators::as_str(*id),
            TokenKind::Punctuation(id) => punctuation::as_str(*id),
            TokenKind::Identifier => "<identifier>",
            TokenKind::IntConstant => "<integer constant>",
            TokenKind::FloatConstant => "<float constant>",
            TokenKind::DoubleConstant => "<double constant>",
            TokenKind::BitsConstant => "<bits constant>",
            TokenKind::StringConstant => "<string constant>",
            TokenKind::MultilineStringConstant => "<multiline string constant>",
            TokenKind::HeredocStringConstant => "<heredoc string constant>",
            TokenKind::NonTerminatedStringConstant => "<nonterminated string constant>",
            TokenKind::WhiteSpace => "<white space>",
            TokenKind::OnelineComment => "<one line comment>",
            TokenKind::MultilineComment => "<multiple lines comment>",
            TokenKind::Unrecognized => "<unrecognized token>",
            TokenKind::End => "<end of file>",
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Source text of this token (empty if the span does not fit `source`).
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.start..self.span.end).unwrap_or("")
    }
}
