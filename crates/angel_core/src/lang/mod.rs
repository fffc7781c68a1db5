//! AngelScript vocabulary registries.
//!
//! This module is the front door for language-level vocabulary: reserved keywords, operators, punctuation, and the
//! contextual words that are lexically plain identifiers.
//!
//! Callers work with **stable IDs** (e.g. [`keywords::KeywordId`], [`operators::OperatorId`]) and look up spellings and
//! metadata via the registry tables instead of matching raw strings.
//!
//! ## Notes
//! - Registries are **pure**: no tree types, no IO, no side effects.
//! - The tokenizer builds its word table from [`keywords::KEYWORDS`], [`operators::OPERATORS`] and
//!   [`punctuation::PUNCTUATION`]; the parser uses [`contextual`] for words such as `shared` or `get`.
//!
//! ## Examples
//! ```rust
//! use angel_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::from_str("int32"), Some(KeywordId::Int));
//! assert_eq!(keywords::as_str(KeywordId::Int), "int");
//! ```

pub mod contextual;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
