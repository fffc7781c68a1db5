//! Reserved keyword vocabulary for AngelScript.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording canonical spellings, aliases and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Word operators (`and`, `or`, `xor`, `not`, `is`) live in [`crate::lang::operators`], not here.
//! - Modifiers such as `shared` or `override` are not reserved; see [`crate::lang::contextual`].
//!
//! ## Examples
//! ```rust
//! use angel_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("funcdef"), Some(KeywordId::FuncDef));
//! assert_eq!(keywords::category(KeywordId::Double), KeywordCategory::PrimitiveType);
//! ```

use super::registry::{self, VocabEntry};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Else,
    For,
    While,
    Do,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Return,
    Try,
    Catch,

    // Declarations
    Class,
    Interface,
    Mixin,
    Enum,
    Typedef,
    FuncDef,
    Namespace,
    Import,

    // Types
    Const,
    Auto,
    Void,
    Bool,
    Int8,
    Int16,
    Int,
    Int64,
    UInt8,
    UInt16,
    UInt,
    UInt64,
    Float,
    Double,

    // Literals
    True,
    False,
    Null,

    // Expressions
    Cast,

    // Parameter reference modifiers
    In,
    Out,
    InOut,

    // Member access
    Private,
    Protected,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Declaration,
    /// `const` and `auto`.
    TypeQualifier,
    /// Built-in value types, `void` included.
    PrimitiveType,
    Literal,
    Expression,
    ParameterModifier,
    AccessModifier,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    /// Canonical spelling first, aliases after.
    pub spellings: &'static [&'static str],
    pub category: KeywordCategory,
}

impl VocabEntry for KeywordInfo {
    type Id = KeywordId;

    fn id(&self) -> KeywordId {
        self.id
    }

    fn spellings(&self) -> &'static [&'static str] {
        self.spellings
    }
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    kw(KeywordId::If, &["if"], KeywordCategory::ControlFlow),
    kw(KeywordId::Else, &["else"], KeywordCategory::ControlFlow),
    kw(KeywordId::For, &["for"], KeywordCategory::ControlFlow),
    kw(KeywordId::While, &["while"], KeywordCategory::ControlFlow),
    kw(KeywordId::Do, &["do"], KeywordCategory::ControlFlow),
    kw(KeywordId::Switch, &["switch"], KeywordCategory::ControlFlow),
    kw(KeywordId::Case, &["case"], KeywordCategory::ControlFlow),
    kw(KeywordId::Default, &["default"], KeywordCategory::ControlFlow),
    kw(KeywordId::Break, &["break"], KeywordCategory::ControlFlow),
    kw(KeywordId::Continue, &["continue"], KeywordCategory::ControlFlow),
    kw(KeywordId::Return, &["return"], KeywordCategory::ControlFlow),
    kw(KeywordId::Try, &["try"], KeywordCategory::ControlFlow),
    kw(KeywordId::Catch, &["catch"], KeywordCategory::ControlFlow),
    // Declarations
    kw(KeywordId::Class, &["class"], KeywordCategory::Declaration),
    kw(KeywordId::Interface, &["interface"], KeywordCategory::Declaration),
    kw(KeywordId::Mixin, &["mixin"], KeywordCategory::Declaration),
    kw(KeywordId::Enum, &["enum"], KeywordCategory::Declaration),
    kw(KeywordId::Typedef, &["typedef"], KeywordCategory::Declaration),
    kw(KeywordId::FuncDef, &["funcdef"], KeywordCategory::Declaration),
    kw(KeywordId::Namespace, &["namespace"], KeywordCategory::Declaration),
    kw(KeywordId::Import, &["import"], KeywordCategory::Declaration),
    // Types
    kw(KeywordId::Const, &["const"], KeywordCategory::TypeQualifier),
    kw(KeywordId::Auto, &["auto"], KeywordCategory::TypeQualifier),
    kw(KeywordId::Void, &["void"], KeywordCategory::PrimitiveType),
    kw(KeywordId::Bool, &["bool"], KeywordCategory::PrimitiveType),
    kw(KeywordId::Int8, &["int8"], KeywordCategory::PrimitiveType),
    kw(KeywordId::Int16, &["int16"], KeywordCategory::PrimitiveType),
    kw(KeywordId::Int, &["int", "int32"], KeywordCategory::PrimitiveType),
    kw(KeywordId::Int64, &["int64"], KeywordCategory::PrimitiveType),
    kw(KeywordId::UInt8, &["uint8"], KeywordCategory::PrimitiveType),
    kw(KeywordId::UInt16, &["uint16"], KeywordCategory::PrimitiveType),
    kw(KeywordId::UInt, &["uint", "uint32"], KeywordCategory::PrimitiveType),
    kw(KeywordId::UInt64, &["uint64"], KeywordCategory::PrimitiveType),
    kw(KeywordId::Float, &["float"], KeywordCategory::PrimitiveType),
    kw(KeywordId::Double, &["double"], KeywordCategory::PrimitiveType),
    // Literals
    kw(KeywordId::True, &["true"], KeywordCategory::Literal),
    kw(KeywordId::False, &["false"], KeywordCategory::Literal),
    kw(KeywordId::Null, &["null"], KeywordCategory::Literal),
    // Expressions
    kw(KeywordId::Cast, &["cast"], KeywordCategory::Expression),
    // Parameter reference modifiers
    kw(KeywordId::In, &["in"], KeywordCategory::ParameterModifier),
    kw(KeywordId::Out, &["out"], KeywordCategory::ParameterModifier),
    kw(KeywordId::InOut, &["inout"], KeywordCategory::ParameterModifier),
    // Member access
    kw(KeywordId::Private, &["private"], KeywordCategory::AccessModifier),
    kw(KeywordId::Protected, &["protected"], KeywordCategory::AccessModifier),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical()
}

/// Aliases (spellings other than the canonical one).
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    &info_for(id).spellings[1..]
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Whether the keyword names a built-in value type (`void` included).
pub fn is_primitive_type(id: KeywordId) -> bool {
    category(id) == KeywordCategory::PrimitiveType
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    registry::row_for(KEYWORDS, id)
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    registry::resolve(KEYWORDS, s)
}

// --- helpers -----------------------------------------------------------------

const fn kw(id: KeywordId, spellings: &'static [&'static str], category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, spellings, category }
}
