#![forbid(unsafe_code)]
//! AngelScript syntax tooling.
//!
//! This crate bundles the workspace for use as one dependency and hosts the `angel` command-line tool: the
//! tokenizer and parser live in `angel_syntax`, the language vocabulary in `angel_core`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Grammar rules**: never panic and never return `Result`. Malformed input becomes diagnostics plus a
//!   best-effort tree.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use angel_core::lang;
pub use angel_syntax::{ast, config, cursor, diagnostics, lexer, parser};

pub use angel_syntax::{
    Diagnostic, Diagnostics, NodeKind, ParseFailure, ParseOutput, ParserConfig, ScriptParser, Severity, Span,
    SyntaxNode, Token, TokenKind, parse_data_type, parse_full_script, parse_function_signature,
    parse_list_factory_signature, parse_property_declaration, parse_single_expression, parse_statement_block_at,
    parse_template_decl, parse_variable_initializer,
};
