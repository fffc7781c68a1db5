//! Syntax frontend for AngelScript: tokenizer, token cursor, syntax tree, diagnostics and parser.
//!
//! The parser is a hand-written recursive descent over a lazily tokenized source. It never aborts: malformed input
//! produces a best-effort tree plus diagnostics, so editor tooling can keep working on half-typed code.
//!
//! ## Notes
//! - This crate is "syntax-only". It does not resolve names, check types or compile anything.
//! - Vocabulary identity (keywords/operators/punctuation/contextual words) comes from `angel_core::lang` registries.
//! - Function and method bodies in a full script are only scanned superficially (brace balancing); use
//!   [`parse_statement_block_at`] to parse one in depth.
//!
//! ## Examples
//! ```rust
//! use angel_syntax::{NodeKind, parse_full_script};
//!
//! let output = parse_full_script("int counter = 0;\nvoid tick() { counter++; }\n");
//! assert!(output.diagnostics.is_empty());
//! assert_eq!(output.root.kind(), NodeKind::Script);
//! assert_eq!(output.root.children().len(), 2);
//! ```
//!
//! ## See also
//! - `angel_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod config;
pub mod cursor;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

pub use ast::{NodeKind, Span, SyntaxNode};
pub use config::ParserConfig;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use lexer::{Token, TokenKind};
pub use parser::{
    ParseFailure, ParseOutput, ScriptParser, parse_data_type, parse_full_script, parse_function_signature,
    parse_list_factory_signature, parse_property_declaration, parse_single_expression, parse_statement_block_at,
    parse_template_decl, parse_variable_initializer,
};
