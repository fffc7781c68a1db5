//! Shared lookup machinery for the `angel_core::lang` registries.
//!
//! Every registry is a `const` slice of `Copy` metadata rows. This module provides the small trait those rows
//! implement plus the generic spelling resolution built on top of it.
//!
//! ## Notes
//! - Lookup is **case-sensitive**. AngelScript has no case-insensitive spellings.
//! - Canonical spellings win over aliases when both could match (they never overlap in practice; the guardrail tests
//!   enforce that).
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::operators`]
//! - [`crate::lang::punctuation`]
//! - [`crate::lang::contextual`]

/// A row in a vocabulary registry.
///
/// ## Notes
/// - `spellings()` returns the canonical spelling first, followed by aliases.
pub trait VocabEntry: 'static {
    type Id: Copy + Eq + 'static;

    fn id(&self) -> Self::Id;

    /// Canonical spelling followed by any accepted aliases.
    fn spellings(&self) -> &'static [&'static str];

    fn canonical(&self) -> &'static str {
        self.spellings()[0]
    }
}

/// Resolve a spelling to its registry id.
///
/// ## Parameters
/// - `table`: the registry to search.
/// - `spelling`: candidate text (canonical or alias).
///
/// ## Returns
/// - `Some(id)` when some row accepts `spelling`, `None` otherwise.
pub fn resolve<E: VocabEntry>(table: &'static [E], spelling: &str) -> Option<E::Id> {
    table
        .iter()
        .find(|e| e.canonical() == spelling)
        .or_else(|| table.iter().find(|e| e.spellings()[1..].contains(&spelling)))
        .map(VocabEntry::id)
}

/// Find the metadata row for an id.
///
/// ## Panics
/// - If the registry has no row for `id` (a programming error caught by the guardrail tests).
pub fn row_for<E: VocabEntry>(table: &'static [E], id: E::Id) -> &'static E {
    table.iter().find(|e| e.id() == id).expect("vocabulary row missing")
}

/// Iterate every `(spelling, id)` pair of a registry, aliases included.
pub fn all_spellings<E: VocabEntry>(table: &'static [E]) -> impl Iterator<Item = (&'static str, E::Id)> {
    table
        .iter()
        .flat_map(|e| e.spellings().iter().map(move |&s| (s, e.id())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::keywords::{KEYWORDS, KeywordId};

    #[test]
    fn resolve_prefers_canonical_then_alias() {
        assert_eq!(resolve(KEYWORDS, "uint"), Some(KeywordId::UInt));
        assert_eq!(resolve(KEYWORDS, "uint32"), Some(KeywordId::UInt));
        assert_eq!(resolve(KEYWORDS, "Uint"), None);
    }

    #[test]
    fn all_spellings_includes_aliases() {
        let ints: Vec<_> = all_spellings(KEYWORDS).filter(|(_, id)| *id == KeywordId::Int).collect();
        assert_eq!(ints, vec![("int", KeywordId::Int), ("int32", KeywordId::Int)]);
    }
}
