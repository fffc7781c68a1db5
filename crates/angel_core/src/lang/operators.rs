//! Operator vocabulary.
//!
//! This module defines the canonical operator set: symbol operators like `+=` and word operators like `and`, together
//! with the roles each operator can play in an expression.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Word operators have a symbol twin (`and`/`&&`, `or`/`||`, `xor`/`^^`, `not`/`!`); both spellings map to the same
//!   [`OperatorId`]. `is` and `!is` have no twin.
//! - `@` is listed here because it acts as the handle-of prefix operator inside expressions; in type position the parser
//!   treats it as a handle suffix.
//!
//! ## Examples
//! ```rust
//! use angel_core::lang::operators::{self, Fixity, OperatorId};
//!
//! assert_eq!(operators::from_str("and"), Some(OperatorId::And));
//! assert_eq!(operators::as_str(OperatorId::And), "&&");
//! assert!(operators::has_fixity(OperatorId::Minus, Fixity::Prefix));
//! ```

use super::registry::{self, VocabEntry};

/// The roles an operator can take in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    /// Binary operator between two expression terms.
    Infix,
    /// Unary operator before an expression value.
    Prefix,
    /// Unary operator after an expression value.
    Postfix,
    /// Plain or compound assignment.
    Assign,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    StarStar,

    // Increment / decrement
    PlusPlus,
    MinusMinus,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    StarStarEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    ShrArithEq,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,
    ShrArith,

    // Logical
    And,
    Or,
    Xor,
    Not,

    // Identity
    Is,
    NotIs,

    // Handle-of
    At,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    /// Canonical spelling first, aliases after.
    pub spellings: &'static [&'static str],
    pub fixity: &'static [Fixity],
    /// Whether the canonical spelling is a word rather than a symbol.
    pub is_keyword_spelling: bool,
}

impl VocabEntry for OperatorInfo {
    type Id = OperatorId;

    fn id(&self) -> OperatorId {
        self.id
    }

    fn spellings(&self) -> &'static [&'static str] {
        self.spellings
    }
}

const INFIX: &[Fixity] = &[Fixity::Infix];
const ASSIGN: &[Fixity] = &[Fixity::Assign];
const PREFIX: &[Fixity] = &[Fixity::Prefix];
const INFIX_PREFIX: &[Fixity] = &[Fixity::Infix, Fixity::Prefix];
const PREFIX_POSTFIX: &[Fixity] = &[Fixity::Prefix, Fixity::Postfix];

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, &["+"], INFIX_PREFIX),
    op(OperatorId::Minus, &["-"], INFIX_PREFIX),
    op(OperatorId::Star, &["*"], INFIX),
    op(OperatorId::Slash, &["/"], INFIX),
    op(OperatorId::Percent, &["%"], INFIX),
    op(OperatorId::StarStar, &["**"], INFIX),
    // Increment / decrement
    op(OperatorId::PlusPlus, &["++"], PREFIX_POSTFIX),
    op(OperatorId::MinusMinus, &["--"], PREFIX_POSTFIX),
    // Assignment
    op(OperatorId::Eq, &["="], ASSIGN),
    op(OperatorId::PlusEq, &["+="], ASSIGN),
    op(OperatorId::MinusEq, &["-="], ASSIGN),
    op(OperatorId::StarEq, &["*="], ASSIGN),
    op(OperatorId::SlashEq, &["/="], ASSIGN),
    op(OperatorId::PercentEq, &["%="], ASSIGN),
    op(OperatorId::StarStarEq, &["**="], ASSIGN),
    op(OperatorId::AmpEq, &["&="], ASSIGN),
    op(OperatorId::PipeEq, &["|="], ASSIGN),
    op(OperatorId::CaretEq, &["^="], ASSIGN),
    op(OperatorId::ShlEq, &["<<="], ASSIGN),
    op(OperatorId::ShrEq, &[">>="], ASSIGN),
    op(OperatorId::ShrArithEq, &[">>>="], ASSIGN),
    // Comparison
    op(OperatorId::EqEq, &["=="], INFIX),
    op(OperatorId::NotEq, &["!="], INFIX),
    op(OperatorId::Lt, &["<"], INFIX),
    op(OperatorId::LtEq, &["<="], INFIX),
    op(OperatorId::Gt, &[">"], INFIX),
    op(OperatorId::GtEq, &[">="], INFIX),
    // Bitwise
    op(OperatorId::Amp, &["&"], INFIX),
    op(OperatorId::Pipe, &["|"], INFIX),
    op(OperatorId::Caret, &["^"], INFIX),
    op(OperatorId::Tilde, &["~"], PREFIX),
    op(OperatorId::Shl, &["<<"], INFIX),
    op(OperatorId::Shr, &[">>"], INFIX),
    op(OperatorId::ShrArith, &[">>>"], INFIX),
    // Logical
    op(OperatorId::And, &["&&", "and"], INFIX),
    op(OperatorId::Or, &["||", "or"], INFIX),
    op(OperatorId::Xor, &["^^", "xor"], INFIX),
    op(OperatorId::Not, &["!", "not"], PREFIX),
    // Identity
    word(OperatorId::Is, &["is"], INFIX),
    op(OperatorId::NotIs, &["!is"], INFIX),
    // Handle-of
    op(OperatorId::At, &["@"], PREFIX),
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical()
}

/// Whether `id` can take the role `fixity`.
pub fn has_fixity(id: OperatorId, fixity: Fixity) -> bool {
    info_for(id).fixity.contains(&fixity)
}

/// Whether any spelling of `id` is a word (`and`, `is`, ...).
pub fn has_word_spelling(id: OperatorId) -> bool {
    info_for(id)
        .spellings
        .iter()
        .any(|s| s.chars().all(|c| c.is_ascii_alphabetic()))
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    registry::row_for(OPERATORS, id)
}

/// Lookup by spelling (canonical or alias).
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    registry::resolve(OPERATORS, spelling)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spellings: &'static [&'static str], fixity: &'static [Fixity]) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        fixity,
        is_keyword_spelling: false,
    }
}

const fn word(id: OperatorId, spellings: &'static [&'static str], fixity: &'static [Fixity]) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        fixity,
        is_keyword_spelling: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_twins_share_an_id() {
        assert_eq!(from_str("or"), from_str("||"));
        assert_eq!(from_str("xor"), Some(OperatorId::Xor));
        assert_eq!(from_str("not"), Some(OperatorId::Not));
    }

    #[test]
    fn prefix_set_matches_expression_grammar() {
        let prefix: Vec<_> = OPERATORS
            .iter()
            .filter(|o| o.fixity.contains(&Fixity::Prefix))
            .map(|o| o.canonical())
            .collect();
        assert_eq!(prefix, vec!["+", "-", "++", "--", "~", "!", "@"]);
    }

    #[test]
    fn word_spellings_are_flagged() {
        assert!(has_word_spelling(OperatorId::Is));
        assert!(has_word_spelling(OperatorId::And));
        assert!(!has_word_spelling(OperatorId::NotIs));
        assert!(info_for(OperatorId::Is).is_keyword_spelling);
    }
}
