/// Core parse session state shared by every grammar rule.
///
/// ## Notes
/// - Items here are included into `parser.rs` via `include!`.
/// - The session owns the cursor, the diagnostics sink and the two error flags. `is_syntax_error` is the sticky
///   "abort the current construct" signal every rule polls; `error_while_parsing` records that any error happened
///   at all and is never cleared.
struct Parser<'a> {
    source: &'a str,
    cursor: TokenCursor<'a>,
    config: &'a ParserConfig,
    lines: LineIndex,
    diagnostics: Diagnostics,
    is_syntax_error: bool,
    error_while_parsing: bool,
    /// Set while parsing registered application signatures, where `?` is accepted as a parameter type.
    is_parsing_app_interface: bool,
    depth: usize,
}

// Token kinds grammar rules compare against most often.
const SEMICOLON: TokenKind = TokenKind::Punctuation(PunctuationId::Semicolon);
const COMMA: TokenKind = TokenKind::Punctuation(PunctuationId::Comma);
const COLON: TokenKind = TokenKind::Punctuation(PunctuationId::Colon);
const QUESTION: TokenKind = TokenKind::Punctuation(PunctuationId::Question);
const DOT: TokenKind = TokenKind::Punctuation(PunctuationId::Dot);
const SCOPE: TokenKind = TokenKind::Punctuation(PunctuationId::ColonColon);
const LPAREN: TokenKind = TokenKind::Punctuation(PunctuationId::LParen);
const RPAREN: TokenKind = TokenKind::Punctuation(PunctuationId::RParen);
const LBRACKET: TokenKind = TokenKind::Punctuation(PunctuationId::LBracket);
const RBRACKET: TokenKind = TokenKind::Punctuation(PunctuationId::RBracket);
const LBRACE: TokenKind = TokenKind::Punctuation(PunctuationId::LBrace);
const RBRACE: TokenKind = TokenKind::Punctuation(PunctuationId::RBrace);
const ASSIGN: TokenKind = TokenKind::Operator(OperatorId::Eq);
const LT: TokenKind = TokenKind::Operator(OperatorId::Lt);
const GT: TokenKind = TokenKind::Operator(OperatorId::Gt);
const AMP: TokenKind = TokenKind::Operator(OperatorId::Amp);
const HANDLE: TokenKind = TokenKind::Operator(OperatorId::At);
const PLUS: TokenKind = TokenKind::Operator(OperatorId::Plus);
const TILDE: TokenKind = TokenKind::Operator(OperatorId::Tilde);
const END: TokenKind = TokenKind::End;

const fn kw(id: KeywordId) -> TokenKind {
    TokenKind::Keyword(id)
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, config: &'a ParserConfig) -> Self {
        Self {
            source,
            cursor: TokenCursor::new(source),
            config,
            lines: LineIndex::new(source),
            diagnostics: Diagnostics::new(),
            is_syntax_error: false,
            error_while_parsing: false,
            is_parsing_app_interface: false,
            depth: 0,
        }
    }

    /// Close the session and hand out the tree plus everything reported along the way.
    fn finish(self, root: SyntaxNode) -> ParseOutput {
        tracing::debug!(
            errors = self.diagnostics.errors().len(),
            warnings = self.diagnostics.warnings().len(),
            failed = self.error_while_parsing,
            "parse finished"
        );
        ParseOutput {
            root,
            diagnostics: self.diagnostics,
        }
    }
}
