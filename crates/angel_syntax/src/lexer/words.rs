//! Reserved word, operator and punctuation matching against the `angel_core` registries.

use super::TokenKind;
use angel_core::lang::registry::all_spellings;
use angel_core::lang::{keywords, operators, punctuation};

/// Every spelling the tokenizer matches, with the token kind it produces.
fn vocabulary() -> impl Iterator<Item = (&'static str, TokenKind)> {
    all_spellings(keywords::KEYWORDS)
        .map(|(s, id)| (s, TokenKind::Keyword(id)))
        .chain(all_spellings(operators::OPERATORS).map(|(s, id)| (s, TokenKind::Operator(id))))
        .chain(all_spellings(punctuation::PUNCTUATION).map(|(s, id)| (s, TokenKind::Punctuation(id))))
}

/// Whether `word` is exactly a reserved spelling (keyword or word operator).
pub(super) fn is_reserved(word: &str) -> bool {
    keywords::from_str(word).is_some() || operators::from_str(word).is_some()
}

/// Longest vocabulary spelling that prefixes `source`.
///
/// A candidate ending in an alphanumeric character is rejected when the source continues the same alphanumeric run,
/// so `in` never matches inside `instance` and `!is` never matches inside `!isReady`.
pub(super) fn longest_match(source: &str) -> Option<(TokenKind, usize)> {
    vocabulary()
        .filter(|(spelling, _)| source.starts_with(spelling) && !splits_word(source, spelling.len()))
        .max_by_key(|(spelling, _)| spelling.len())
        .map(|(spelling, kind)| (kind, spelling.len()))
}

fn splits_word(source: &str, len: usize) -> bool {
    let bytes = source.as_bytes();
    let ends_alnum = len > 0 && bytes[len - 1].is_ascii_alphanumeric();
    let continues = bytes.get(len).is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_');
    ends_alnum && continues
}
