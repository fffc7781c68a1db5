//! Punctuation vocabulary.
//!
//! Delimiters, separators and access markers used by the tokenizer and parser.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use angel_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("::"), Some(PunctuationId::ColonColon));
//! assert_eq!(punctuation::as_str(PunctuationId::LBrace), "{");
//! ```

use super::registry::{self, VocabEntry};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// `;`, `,` and `:`.
    Separator,
    /// `.` and `::`.
    Access,
    /// `?` (ternary condition and variable parameter type).
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Semicolon,
    Comma,
    Colon,
    Question,
    Dot,
    ColonColon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub spellings: &'static [&'static str],
    pub category: PunctuationCategory,
}

impl VocabEntry for PunctuationInfo {
    type Id = PunctuationId;

    fn id(&self) -> PunctuationId {
        self.id
    }

    fn spellings(&self) -> &'static [&'static str] {
        self.spellings
    }
}

/// Registry of all punctuation.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Semicolon, &[";"], PunctuationCategory::Separator),
    info(PunctuationId::Comma, &[","], PunctuationCategory::Separator),
    info(PunctuationId::Colon, &[":"], PunctuationCategory::Separator),
    info(PunctuationId::Question, &["?"], PunctuationCategory::Marker),
    info(PunctuationId::Dot, &["."], PunctuationCategory::Access),
    info(PunctuationId::ColonColon, &["::"], PunctuationCategory::Access),
    info(PunctuationId::LParen, &["("], PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, &[")"], PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, &["["], PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, &["]"], PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, &["{"], PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, &["}"], PunctuationCategory::Delimiter),
];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical()
}

/// Category.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    registry::row_for(PUNCTUATION, id)
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    registry::resolve(PUNCTUATION, s)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: PunctuationId, spellings: &'static [&'static str], category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, spellings, category }
}
