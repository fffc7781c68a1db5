//! Recursive-descent parser for AngelScript.
//!
//! Every grammar rule is a method on the private parse session. A rule pulls tokens from the cursor, returns a
//! [`SyntaxNode`] tagged with its construct, and reports violations into the session's diagnostics. Rules never
//! return `Result`: a violation sets a sticky syntax-error flag, and every caller polls that flag after each
//! sub-rule and returns its partial node immediately. Only the script level, namespace bodies, class bodies and
//! statement blocks recover, by skipping to a safe token and clearing the flag.
//!
//! ## Notes
//! - Ambiguous constructs (declaration vs. function, template type vs. comparison, lambda vs. call) are decided by
//!   pure lookahead predicates that always restore the cursor before returning.
//! - In a full script, function bodies and global/member initializers are only scanned superficially. Deep-parse
//!   them later with [`parse_statement_block_at`] and [`parse_variable_initializer`], passing the captured span.
//!
//! ## Examples
//!
//! ```rust
//! use angel_syntax::{NodeKind, parse_full_script, parse_variable_initializer};
//!
//! let source = "int answer = 6 * 7;";
//! let script = parse_full_script(source).root;
//! let decl = script.first_child().unwrap();
//! assert_eq!(decl.kind(), NodeKind::Declaration);
//!
//! let init = decl.child(2).unwrap().span().unwrap();
//! let deep = parse_variable_initializer(source, init);
//! assert!(deep.diagnostics.is_empty());
//! assert_eq!(deep.root.kind(), NodeKind::Assignment);
//! ```

use crate::ast::{NodeKind, Span, SyntaxNode};
use crate::config::ParserConfig;
use crate::cursor::TokenCursor;
use crate::diagnostics::{Diagnostic, Diagnostics, LineIndex, Severity, messages};
use crate::lexer::{Token, TokenKind};
use angel_core::lang::contextual::{self, ContextualRole, ContextualWord};
use angel_core::lang::keywords::KeywordId;
use angel_core::lang::operators::OperatorId;
use angel_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/lookahead.rs");
include!("parser/types.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/superficial.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
