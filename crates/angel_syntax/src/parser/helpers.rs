/// Low-level parser helpers (token movement, reporting, single-token rules).
///
/// ## Notes
/// - Items here are included into `parser.rs` via `include!`.
/// - Reporting an error or info moves the cursor back to the offending token, so a recovering caller resumes
///   scanning from there.
impl<'a> Parser<'a> {
    // ========================================================================
    // Token movement
    // ========================================================================

    fn next(&mut self) -> Token {
        self.cursor.next_token()
    }

    fn peek(&mut self) -> Token {
        self.cursor.peek()
    }

    fn rewind_to(&mut self, token: Token) {
        self.cursor.rewind_to(token);
    }

    fn jump_to(&mut self, offset: usize) {
        self.cursor.jump_to(offset);
    }

    fn text(&self, token: Token) -> &'a str {
        token.text(self.source)
    }

    // ========================================================================
    // Token classification that needs source text
    // ========================================================================

    /// `int`, `void`, ... or any identifier. Whether an identifier really names a type is not known here.
    fn is_data_type(&self, token: Token) -> bool {
        token.kind.is_identifier() || token.kind.is_primitive_type()
    }

    fn is_template_name(&self, token: Token) -> bool {
        token.kind.is_identifier() && self.config.is_template_type(self.text(token))
    }

    /// Identifier spelled exactly as the contextual `word`.
    fn is_word(&self, token: Token, word: ContextualWord) -> bool {
        token.kind.is_identifier() && self.text(token) == contextual::as_str(word)
    }

    /// Identifier that is one of the contextual words playing `role`.
    fn has_role(&self, token: Token, role: ContextualRole) -> bool {
        token.kind.is_identifier()
            && contextual::from_str(self.text(token)).is_some_and(|word| contextual::has_role(word, role))
    }

    fn is_access_modifier(&self, token: Token) -> bool {
        token.kind.is_keyword(KeywordId::Private) || token.kind.is_keyword(KeywordId::Protected)
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    fn report(&mut self, severity: Severity, text: String, span: Span) {
        let (row, column) = self.lines.row_col(span.start);
        tracing::trace!(%severity, row, column, text = text.as_str(), "diagnostic");
        self.diagnostics.push(Diagnostic {
            severity,
            text,
            span,
            row,
            column,
        });
    }

    /// Report an error at `token`, rewind to it and abort the current construct.
    fn error(&mut self, text: impl Into<String>, token: Token) {
        self.rewind_to(token);
        self.is_syntax_error = true;
        self.error_while_parsing = true;
        self.report(Severity::Error, text.into(), token.span);
    }

    fn warning(&mut self, text: impl Into<String>, token: Token) {
        self.report(Severity::Warning, text.into(), token.span);
    }

    /// Context note for a preceding error. Behaves like [`Parser::error`] with respect to the cursor and flags.
    fn info(&mut self, text: impl Into<String>, token: Token) {
        self.rewind_to(token);
        self.is_syntax_error = true;
        self.error_while_parsing = true;
        self.report(Severity::Info, text.into(), token.span);
    }

    /// The standard two-part syntax error: what was expected, then what was found instead.
    fn expected(&mut self, what: impl Into<String>, found: Token) {
        self.error(what, found);
        let instead = messages::instead_found(found, self.source);
        self.error(instead, found);
    }

    fn expected_token(&mut self, kind: TokenKind, found: Token) {
        self.expected(messages::expected(kind.describe()), found);
    }

    /// Consume a token of `kind`, or report it missing.
    fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.next();
        if token.kind != kind {
            self.expected_token(kind, token);
            return None;
        }
        Some(token)
    }

    /// Require end of input, unless something already went wrong.
    fn expect_end(&mut self) {
        if self.is_syntax_error {
            return;
        }
        let token = self.next();
        if !token.kind.is_end() {
            self.expected_token(END, token);
        }
    }

    // ========================================================================
    // Nesting guard
    // ========================================================================

    /// Run `rule` one nesting level deeper, or report and return `exceeded` once the configured limit is reached.
    fn nested<T>(&mut self, exceeded: T, rule: impl FnOnce(&mut Self) -> T) -> T {
        if self.depth >= self.config.max_nesting_depth {
            let token = self.peek();
            self.error(messages::MAX_NESTING_DEPTH, token);
            return exceeded;
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    // ========================================================================
    // Single-token rules
    // ========================================================================

    /// Consume a token of `kind` as an `Undefined` node anchored on it.
    fn parse_token(&mut self, kind: TokenKind) -> SyntaxNode {
        let token = self.next();
        if token.kind != kind {
            self.expected_token(kind, token);
            return SyntaxNode::new(NodeKind::Undefined);
        }
        SyntaxNode::with_token(NodeKind::Undefined, token)
    }

    fn parse_one_of(&mut self, kinds: &[TokenKind]) -> SyntaxNode {
        let token = self.next();
        if !kinds.contains(&token.kind) {
            let options: Vec<&str> = kinds.iter().map(|k| k.describe()).collect();
            self.expected(messages::expected_one_of(&options), token);
            return SyntaxNode::new(NodeKind::Undefined);
        }
        SyntaxNode::with_token(NodeKind::Undefined, token)
    }

    fn parse_identifier(&mut self) -> SyntaxNode {
        let token = self.next();
        if !token.kind.is_identifier() {
            self.expected(messages::EXPECTED_IDENTIFIER, token);
            return SyntaxNode::new(NodeKind::Identifier);
        }
        SyntaxNode::with_token(NodeKind::Identifier, token)
    }

    /// Append an `Identifier` for every leading contextual word playing `role` (`shared`, `external`, ...).
    fn parse_modifiers(&mut self, node: &mut SyntaxNode, role: ContextualRole) {
        loop {
            let token = self.peek();
            if !self.has_role(token, role) {
                break;
            }
            node.append(self.parse_identifier());
        }
    }

    /// Append `shared` / `external` markers only.
    fn parse_shared_external(&mut self, node: &mut SyntaxNode) {
        loop {
            let token = self.peek();
            if !self.is_word(token, ContextualWord::Shared) && !self.is_word(token, ContextualWord::External) {
                break;
            }
            node.append(self.parse_identifier());
        }
    }

    /// Skip a `{ ... }` block whose opening brace was already consumed.
    fn skip_block(&mut self) {
        let mut level = 1usize;
        while level > 0 {
            let token = self.next();
            match token.kind {
                LBRACE => level += 1,
                RBRACE => level -= 1,
                END => break,
                _ => {}
            }
        }
    }

    /// Skip a parenthesized group whose `(` was already consumed.
    ///
    /// ## Returns
    /// - `false` if input ended before the matching `)`.
    fn skip_parenthesized(&mut self) -> bool {
        let mut level = 1usize;
        loop {
            let token = self.next();
            match token.kind {
                LPAREN => level += 1,
                RPAREN => {
                    level -= 1;
                    if level == 0 {
                        return true;
                    }
                }
                END => return false,
                _ => {}
            }
        }
    }
}
