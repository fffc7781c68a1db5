//! Contextual words.
//!
//! These words are **not** reserved: the tokenizer produces plain identifier tokens for them. The parser recognizes
//! them by comparing the identifier's source text in the few grammar positions where they carry meaning, e.g.
//! `shared class`, `void f() override`, `int x { get; }`.
//!
//! ## Notes
//! - A word can have more than one role (`final` is both a declaration modifier and a method attribute).
//!
//! ## Examples
//! ```rust
//! use angel_core::lang::contextual::{self, ContextualRole, ContextualWord};
//!
//! assert_eq!(contextual::from_str("override"), Some(ContextualWord::Override));
//! assert!(contextual::has_role(ContextualWord::Final, ContextualRole::MethodAttribute));
//! ```

use super::registry::{self, VocabEntry};

/// Where a contextual word is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextualRole {
    /// May precede a top-level declaration (`shared`, `external`, `final`, `abstract`).
    DeclarationModifier,
    /// May follow a function's parameter list (`final`, `override`, `explicit`, `property`).
    MethodAttribute,
    /// Virtual property accessor name.
    Accessor,
    /// Fixed word inside a specific grammar rule.
    Syntax,
    /// Object receiver inside method bodies.
    Receiver,
}

/// Stable identifier for every contextual word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextualWord {
    Shared,
    External,
    Final,
    Abstract,
    Override,
    Explicit,
    Property,
    Get,
    Set,
    Function,
    From,
    IfHandleThenConst,
    Repeat,
    RepeatSame,
    This,
    Super,
}

/// Metadata for a contextual word.
#[derive(Debug, Clone, Copy)]
pub struct ContextualInfo {
    pub id: ContextualWord,
    pub spellings: &'static [&'static str],
    pub roles: &'static [ContextualRole],
}

impl VocabEntry for ContextualInfo {
    type Id = ContextualWord;

    fn id(&self) -> ContextualWord {
        self.id
    }

    fn spellings(&self) -> &'static [&'static str] {
        self.spellings
    }
}

const MODIFIER: &[ContextualRole] = &[ContextualRole::DeclarationModifier];
const ATTRIBUTE: &[ContextualRole] = &[ContextualRole::MethodAttribute];
const SYNTAX: &[ContextualRole] = &[ContextualRole::Syntax];

/// Registry of all contextual words.
pub const CONTEXTUAL_WORDS: &[ContextualInfo] = &[
    word(ContextualWord::Shared, &["shared"], MODIFIER),
    word(ContextualWord::External, &["external"], MODIFIER),
    word(
        ContextualWord::Final,
        &["final"],
        &[ContextualRole::DeclarationModifier, ContextualRole::MethodAttribute],
    ),
    word(ContextualWord::Abstract, &["abstract"], MODIFIER),
    word(ContextualWord::Override, &["override"], ATTRIBUTE),
    word(ContextualWord::Explicit, &["explicit"], ATTRIBUTE),
    word(ContextualWord::Property, &["property"], ATTRIBUTE),
    word(ContextualWord::Get, &["get"], &[ContextualRole::Accessor]),
    word(ContextualWord::Set, &["set"], &[ContextualRole::Accessor]),
    word(ContextualWord::Function, &["function"], SYNTAX),
    word(ContextualWord::From, &["from"], SYNTAX),
    word(ContextualWord::IfHandleThenConst, &["if_handle_then_const"], SYNTAX),
    word(ContextualWord::Repeat, &["repeat"], SYNTAX),
    word(ContextualWord::RepeatSame, &["repeat_same"], SYNTAX),
    word(ContextualWord::This, &["this"], &[ContextualRole::Receiver]),
    word(ContextualWord::Super, &["super"], &[ContextualRole::Receiver]),
];

/// Spelling.
pub fn as_str(id: ContextualWord) -> &'static str {
    info_for(id).canonical()
}

/// Whether `id` is meaningful in `role`.
pub fn has_role(id: ContextualWord, role: ContextualRole) -> bool {
    info_for(id).roles.contains(&role)
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ContextualWord) -> &'static ContextualInfo {
    registry::row_for(CONTEXTUAL_WORDS, id)
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<ContextualWord> {
    registry::resolve(CONTEXTUAL_WORDS, s)
}

// --- helpers -----------------------------------------------------------------

const fn word(
    id: ContextualWord,
    spellings: &'static [&'static str],
    roles: &'static [ContextualRole],
) -> ContextualInfo {
    ContextualInfo { id, spellings, roles }
}
