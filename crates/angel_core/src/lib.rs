//! Canonical vocabulary for AngelScript tooling.
//!
//! This crate is intentionally small and dependency-free. It owns the spellings the tokenizer matches and the
//! parser recognizes, so no other crate needs to compare source text against string literals directly.
//!
//! ## Notes
//!
//! - No IO, no global state, no syntax-tree types.
//! - Every vocabulary item has a stable `Copy` identifier and a `const` metadata row; see [`lang`].

pub mod lang;
