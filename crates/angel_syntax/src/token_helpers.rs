//! Token matching helpers.
//!
//! These are small, pure helpers for working with [`TokenKind`] values that carry registry IDs. They keep grammar
//! rules free of nested `matches!` chains and let operator sets be derived from the `angel_core` fixity table.

use angel_core::lang::keywords::{self, KeywordId};
use angel_core::lang::operators::{self, Fixity, OperatorId};
use angel_core::lang::punctuation::PunctuationId;

use crate::lexer::TokenKind;

impl TokenKind {
    /// Return the keyword id if this token is a keyword.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Check whether this token is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id if this token is an operator.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Check whether this token is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id if this token is punctuation.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Check whether this token is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, TokenKind::Identifier)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, TokenKind::End)
    }

    /// Whitespace and comments, which the cursor never hands to grammar rules.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::WhiteSpace | TokenKind::OnelineComment | TokenKind::MultilineComment
        )
    }

    /// Built-in value type keyword (`void`, `bool`, `int8` ... `double`).
    pub fn is_primitive_type(&self) -> bool {
        self.keyword_id().is_some_and(keywords::is_primitive_type)
    }

    /// Literal constant: numbers, strings, `true`, `false`, `null`.
    pub fn is_constant(&self) -> bool {
        matches!(
            self,
            TokenKind::IntConstant
                | TokenKind::FloatConstant
                | TokenKind::DoubleConstant
                | TokenKind::BitsConstant
                | TokenKind::StringConstant
                | TokenKind::MultilineStringConstant
                | TokenKind::HeredocStringConstant
                | TokenKind::Keyword(KeywordId::True | KeywordId::False | KeywordId::Null)
        )
    }

    /// A terminated string literal of any flavor.
    pub fn is_string_constant(&self) -> bool {
        matches!(
            self,
            TokenKind::StringConstant | TokenKind::MultilineStringConstant | TokenKind::HeredocStringConstant
        )
    }

    /// Operator allowed between two expression terms.
    pub fn is_binary_operator(&self) -> bool {
        self.operator_id().is_some_and(|id| operators::has_fixity(id, Fixity::Infix))
    }

    pub fn is_assign_operator(&self) -> bool {
        self.operator_id().is_some_and(|id| operators::has_fixity(id, Fixity::Assign))
    }

    /// Operator allowed in front of an expression value.
    pub fn is_pre_operator(&self) -> bool {
        self.operator_id().is_some_and(|id| operators::has_fixity(id, Fixity::Prefix))
    }

    /// Token that may follow an expression value: `++`, `--`, member access, indexing or a call.
    pub fn is_post_operator(&self) -> bool {
        match self {
            TokenKind::Operator(id) => operators::has_fixity(*id, Fixity::Postfix),
            TokenKind::Punctuation(p) => matches!(p, PunctuationId::Dot | PunctuationId::LBracket | PunctuationId::LParen),
            _ => false,
        }
    }

    /// Reserved words, including word operators in either spelling (`and`/`&&`, `!is`).
    pub fn is_reserved_word(&self) -> bool {
        match self {
            TokenKind::Keyword(_) => true,
            TokenKind::Operator(id) => operators::has_word_spelling(*id) || *id == OperatorId::NotIs,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_sets_follow_fixity() {
        assert!(TokenKind::Operator(OperatorId::Plus).is_binary_operator());
        assert!(TokenKind::Operator(OperatorId::Plus).is_pre_operator());
        assert!(!TokenKind::Operator(OperatorId::Plus).is_assign_operator());
        assert!(TokenKind::Operator(OperatorId::ShrArithEq).is_assign_operator());
        assert!(TokenKind::Operator(OperatorId::At).is_pre_operator());
        assert!(!TokenKind::Operator(OperatorId::At).is_binary_operator());
        assert!(TokenKind::Operator(OperatorId::NotIs).is_binary_operator());
        assert!(TokenKind::Operator(OperatorId::PlusPlus).is_post_operator());
        assert!(TokenKind::Punctuation(PunctuationId::LBracket).is_post_operator());
        assert!(!TokenKind::Punctuation(PunctuationId::LBrace).is_post_operator());
    }

    #[test]
    fn constants_and_types() {
        assert!(TokenKind::Keyword(KeywordId::Null).is_constant());
        assert!(TokenKind::BitsConstant.is_constant());
        assert!(!TokenKind::NonTerminatedStringConstant.is_constant());
        assert!(TokenKind::Keyword(KeywordId::Void).is_primitive_type());
        assert!(!TokenKind::Keyword(KeywordId::Auto).is_primitive_type());
    }

    #[test]
    fn reserved_words() {
        assert!(TokenKind::Keyword(KeywordId::Class).is_reserved_word());
        assert!(TokenKind::Operator(OperatorId::And).is_reserved_word());
        assert!(TokenKind::Operator(OperatorId::NotIs).is_reserved_word());
        assert!(!TokenKind::Operator(OperatorId::Plus).is_reserved_word());
        assert!(!TokenKind::Identifier.is_reserved_word());
    }
}
