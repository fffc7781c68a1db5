//! Diagnostics produced while parsing.
//!
//! The parser reports into a [`Diagnostics`] sink that keeps errors, warnings and infos as three ordered lists. Each
//! [`Diagnostic`] carries the byte span of the offending token plus a 1-based row and column resolved through a
//! [`LineIndex`] built once per source.
//!
//! ## Notes
//! - Infos are never standalone. They follow an error and name the construct that was being parsed when input ran
//!   out ("While parsing statement block").
//! - Columns count bytes, not characters.
//! - [`Diagnostic::to_report`] turns a diagnostic into a `miette` report for terminal rendering.

use std::fmt;

use crate::ast::Span;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// One message with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub text: String,
    pub span: Span,
    /// 1-based line number.
    pub row: usize,
    /// 1-based byte column.
    pub column: usize,
}

impl Diagnostic {
    /// Build a `miette` report over `source` for rendering.
    ///
    /// ## Parameters
    /// - `name`: file name shown in the report header.
    /// - `source`: the full text the diagnostic was produced from.
    pub fn to_report(&self, name: &str, source: &str) -> DiagnosticReport {
        DiagnosticReport {
            severity: self.severity,
            message: self.text.clone(),
            code: miette::NamedSource::new(name, source.to_string()),
            span: (self.span.start, self.span.len()).into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}: {}", self.row, self.column, self.severity, self.text)
    }
}

/// Ordered errors, warnings and infos of one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    infos: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn infos(&self) -> &[Diagnostic] {
        &self.infos
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.infos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.infos.len()
    }

    /// All diagnostics ordered by source position; ties keep errors before warnings before infos.
    pub fn sorted(&self) -> Vec<&Diagnostic> {
        let mut all: Vec<&Diagnostic> = self.errors.iter().chain(&self.warnings).chain(&self.infos).collect();
        all.sort_by_key(|d| d.span.start);
        all
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
            Severity::Info => self.infos.push(diagnostic),
        }
    }
}

// ============================================================================
// Row / column resolution
// ============================================================================

/// Line-start offsets of a source, for offset → (row, column) conversion.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { line_starts }
    }

    /// 1-based `(row, column)` of a byte offset.
    pub fn row_col(&self, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset).saturating_sub(1);
        let start = self.line_starts.get(line).copied().unwrap_or(0);
        (line + 1, offset - start + 1)
    }
}

// ============================================================================
// Message catalog
// ============================================================================

/// Texts of every message the parser emits.
pub mod messages {
    use crate::lexer::{Token, TokenKind};

    pub const AUTO_NOT_ALLOWED: &str = "Auto is not allowed here";
    pub const EXPECTED_CONSTANT: &str = "Expected constant";
    pub const EXPECTED_DATA_TYPE: &str = "Expected data type";
    pub const EXPECTED_EXPRESSION_VALUE: &str = "Expected expression value";
    pub const EXPECTED_IDENTIFIER: &str = "Expected identifier";
    pub const EXPECTED_METHOD_OR_PROPERTY: &str = "Expected method or property";
    pub const EXPECTED_OPERATOR: &str = "Expected operator";
    pub const EXPECTED_POST_OPERATOR: &str = "Expected post operator";
    pub const EXPECTED_PRE_OPERATOR: &str = "Expected pre operator";
    pub const EXPECTED_STRING: &str = "Expected string";
    pub const MAX_NESTING_DEPTH: &str = "Maximum nesting depth exceeded";
    pub const NAMED_ARGS_WITH_OLD_SYNTAX: &str = "Detected named argument with old syntax";
    pub const NONTERMINATED_STRING: &str = "Non-terminated string literal";
    pub const UNEXPECTED_END_OF_FILE: &str = "Unexpected end of file";
    pub const UNEXPECTED_VAR_DECL: &str = "Unexpected variable declaration";

    pub const WHILE_PARSING_ARG_LIST: &str = "While parsing argument list";
    pub const WHILE_PARSING_EXPRESSION: &str = "While parsing expression";
    pub const WHILE_PARSING_INIT_LIST: &str = "While parsing initialization list";
    pub const WHILE_PARSING_NAMESPACE: &str = "While parsing namespace";
    pub const WHILE_PARSING_STATEMENT_BLOCK: &str = "While parsing statement block";

    pub fn expected(what: &str) -> String {
        format!("Expected '{what}'")
    }

    pub fn expected_either(first: &str, second: &str) -> String {
        format!("Expected '{first}' or '{second}'")
    }

    pub fn expected_one_of(options: &[&str]) -> String {
        format!("Expected one of: {}", options.join(", "))
    }

    pub fn unexpected_token(what: &str) -> String {
        format!("Unexpected token '{what}'")
    }

    /// Second half of a syntax error: what was found where something else was expected.
    pub fn instead_found(token: Token, source: &str) -> String {
        match token.kind {
            TokenKind::Identifier => format!("Instead found identifier '{}'", token.text(source)),
            kind if kind.is_reserved_word() => format!("Instead found reserved keyword '{}'", kind.describe()),
            kind => format!("Instead found '{}'", kind.describe()),
        }
    }
}

// ============================================================================
// miette rendering
// ============================================================================

/// A diagnostic bundled with its source, renderable through `miette`.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DiagnosticReport {
    severity: Severity,
    message: String,
    code: miette::NamedSource<String>,
    span: miette::SourceSpan,
}

impl miette::Diagnostic for DiagnosticReport {
    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info => miette::Severity::Advice,
        })
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.code)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(miette::LabeledSpan::new_with_span(
            Some(self.severity.to_string()),
            self.span,
        ))))
    }
}
