/// Statement rules.
///
/// ## Notes
/// - Items here are included into `parser.rs` via `include!`.
/// - These run only when a function body is deep-parsed with `parse_statement_block_at`.
impl<'a> Parser<'a> {
    /// `{ statements }` with local declarations allowed.
    ///
    /// A broken statement is skipped up to the next `;` or nested block, so the block keeps collecting the
    /// statements after it.
    fn parse_statement_block(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::StatementBlock);

        let Some(open) = self.expect(LBRACE) else {
            return node;
        };
        node.widen(open.span);

        loop {
            while !self.is_syntax_error {
                let t1 = self.next();
                if t1.kind == RBRACE {
                    node.widen(t1.span);
                    return node;
                }
                self.rewind_to(t1);

                if self.is_var_decl() {
                    node.append(self.parse_declaration(false, false));
                } else if let Some(statement) = self.parse_statement() {
                    node.append(statement);
                }
            }

            let mut t1 = self.next();
            while t1.kind != SEMICOLON && t1.kind != LBRACE && t1.kind != RBRACE && !t1.kind.is_end() {
                t1 = self.next();
            }
            match t1.kind {
                LBRACE => self.skip_block(),
                RBRACE => self.rewind_to(t1),
                END => {
                    self.error(messages::UNEXPECTED_END_OF_FILE, t1);
                    self.info(messages::WHILE_PARSING_STATEMENT_BLOCK, open);
                    return node;
                }
                _ => {}
            }
            tracing::debug!(offset = self.cursor.position(), "resynchronized statement block");
            self.is_syntax_error = false;
        }
    }

    /// One statement, or `None` after reporting a declaration where only a statement may appear.
    fn parse_statement(&mut self) -> Option<SyntaxNode> {
        self.nested(None, Self::parse_statement_inner)
    }

    fn parse_statement_inner(&mut self) -> Option<SyntaxNode> {
        let t1 = self.peek();
        let node = match t1.kind {
            TokenKind::Keyword(KeywordId::If) => self.parse_if(),
            TokenKind::Keyword(KeywordId::For) => self.parse_for(),
            TokenKind::Keyword(KeywordId::While) => self.parse_while(),
            TokenKind::Keyword(KeywordId::Return) => self.parse_return(),
            LBRACE => self.parse_statement_block(),
            TokenKind::Keyword(KeywordId::Break) => self.parse_break(),
            TokenKind::Keyword(KeywordId::Continue) => self.parse_continue(),
            TokenKind::Keyword(KeywordId::Do) => self.parse_do_while(),
            TokenKind::Keyword(KeywordId::Switch) => self.parse_switch(),
            TokenKind::Keyword(KeywordId::Try) => self.parse_try_catch(),
            _ => {
                if self.is_var_decl() {
                    self.error(messages::UNEXPECTED_VAR_DECL, t1);
                    return None;
                }
                self.parse_expression_statement()
            }
        };
        Some(node)
    }

    /// `expr;` or an empty `;`.
    fn parse_expression_statement(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::ExpressionStatement);

        let t = self.next();
        if t.kind == SEMICOLON {
            node.widen(t.span);
            return node;
        }
        self.rewind_to(t);

        node.append(self.parse_assignment());
        if self.is_syntax_error {
            return node;
        }

        let Some(t) = self.expect(SEMICOLON) else {
            return node;
        };
        node.widen(t.span);
        node
    }

    /// Statements that begin with a keyword and a parenthesized condition share this prefix.
    fn parse_keyword_condition(&mut self, node: &mut SyntaxNode, keyword: KeywordId) -> bool {
        let Some(t) = self.expect(kw(keyword)) else {
            return false;
        };
        node.widen(t.span);
        if self.expect(LPAREN).is_none() {
            return false;
        }
        node.append(self.parse_assignment());
        if self.is_syntax_error {
            return false;
        }
        self.expect(RPAREN).is_some()
    }

    fn parse_switch(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Switch);

        if !self.parse_keyword_condition(&mut node, KeywordId::Switch) {
            return node;
        }
        if self.expect(LBRACE).is_none() {
            return node;
        }

        while !self.is_syntax_error {
            let t = self.next();
            if t.kind == RBRACE {
                node.widen(t.span);
                break;
            }
            self.rewind_to(t);

            if !t.kind.is_keyword(KeywordId::Case) && !t.kind.is_keyword(KeywordId::Default) {
                self.expected(messages::expected_one_of(&["case", "default"]), t);
                return node;
            }

            node.append(self.parse_case());
        }

        node
    }

    /// `case expr:` or `default:` followed by its statements, up to the next label, the closing `}` or a `break`
    /// (which is included).
    fn parse_case(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Case);

        let t = self.next();
        let is_case = t.kind.is_keyword(KeywordId::Case);
        if !is_case && !t.kind.is_keyword(KeywordId::Default) {
            self.expected(messages::expected_either("case", "default"), t);
            return node;
        }
        node.widen(t.span);

        if is_case {
            node.append(self.parse_expression());
            if self.is_syntax_error {
                return node;
            }
        }

        let Some(colon) = self.expect(COLON) else {
            return node;
        };
        node.widen(colon.span);

        let mut t = self.peek();
        while !t.kind.is_keyword(KeywordId::Case)
            && !t.kind.is_keyword(KeywordId::Default)
            && t.kind != RBRACE
            && !t.kind.is_keyword(KeywordId::Break)
        {
            if self.is_var_decl() {
                node.append(self.parse_declaration(false, false));
            } else if let Some(statement) = self.parse_statement() {
                node.append(statement);
            }
            if self.is_syntax_error {
                return node;
            }
            t = self.peek();
        }

        if t.kind.is_keyword(KeywordId::Break) {
            node.append(self.parse_break());
        }
        node
    }

    fn parse_if(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::If);

        if !self.parse_keyword_condition(&mut node, KeywordId::If) {
            return node;
        }

        if let Some(statement) = self.parse_statement() {
            node.append(statement);
        }
        if self.is_syntax_error {
            return node;
        }

        let t = self.next();
        if !t.kind.is_keyword(KeywordId::Else) {
            self.rewind_to(t);
            return node;
        }
        if let Some(statement) = self.parse_statement() {
            node.append(statement);
        }
        node
    }

    fn parse_try_catch(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::TryCatch);

        let Some(t) = self.expect(kw(KeywordId::Try)) else {
            return node;
        };
        node.widen(t.span);

        node.append(self.parse_statement_block());
        if self.is_syntax_error {
            return node;
        }
        if self.expect(kw(KeywordId::Catch)).is_none() {
            return node;
        }
        node.append(self.parse_statement_block());
        node
    }

    /// `for (init; condition; increments) statement`. Each increment is wrapped in its own `ExpressionStatement`.
    fn parse_for(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::For);

        let Some(t) = self.expect(kw(KeywordId::For)) else {
            return node;
        };
        node.widen(t.span);
        if self.expect(LPAREN).is_none() {
            return node;
        }

        if self.is_var_decl() {
            node.append(self.parse_declaration(false, false));
        } else {
            node.append(self.parse_expression_statement());
        }
        if self.is_syntax_error {
            return node;
        }

        node.append(self.parse_expression_statement());
        if self.is_syntax_error {
            return node;
        }

        let t = self.next();
        if t.kind != RPAREN {
            self.rewind_to(t);
            loop {
                let mut increment = SyntaxNode::new(NodeKind::ExpressionStatement);
                increment.append(self.parse_assignment());
                node.append(increment);
                if self.is_syntax_error {
                    return node;
                }

                let t = self.next();
                match t.kind {
                    COMMA => continue,
                    RPAREN => break,
                    _ => {
                        self.expected(messages::expected_one_of(&[",", ")"]), t);
                        return node;
                    }
                }
            }
        }

        if let Some(statement) = self.parse_statement() {
            node.append(statement);
        }
        node
    }

    fn parse_while(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::While);

        if !self.parse_keyword_condition(&mut node, KeywordId::While) {
            return node;
        }
        if let Some(statement) = self.parse_statement() {
            node.append(statement);
        }
        node
    }

    /// `do statement while (condition);`
    fn parse_do_while(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::DoWhile);

        let Some(t) = self.expect(kw(KeywordId::Do)) else {
            return node;
        };
        node.widen(t.span);

        if let Some(statement) = self.parse_statement() {
            node.append(statement);
        }
        if self.is_syntax_error {
            return node;
        }

        if !self.parse_keyword_condition(&mut node, KeywordId::While) {
            return node;
        }
        let Some(t) = self.expect(SEMICOLON) else {
            return node;
        };
        node.widen(t.span);
        node
    }

    fn parse_return(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Return);

        let Some(t) = self.expect(kw(KeywordId::Return)) else {
            return node;
        };
        node.widen(t.span);

        let t = self.next();
        if t.kind == SEMICOLON {
            node.widen(t.span);
            return node;
        }
        self.rewind_to(t);

        node.append(self.parse_assignment());
        if self.is_syntax_error {
            return node;
        }

        let Some(t) = self.expect(SEMICOLON) else {
            return node;
        };
        node.widen(t.span);
        node
    }

    fn parse_break(&mut self) -> SyntaxNode {
        self.parse_jump(NodeKind::Break, KeywordId::Break)
    }

    fn parse_continue(&mut self) -> SyntaxNode {
        self.parse_jump(NodeKind::Continue, KeywordId::Continue)
    }

    /// `break;` / `continue;`. The node covers the token after the keyword even when it is not the `;`.
    fn parse_jump(&mut self, kind: NodeKind, keyword: KeywordId) -> SyntaxNode {
        let mut node = SyntaxNode::new(kind);

        let Some(t) = self.expect(kw(keyword)) else {
            return node;
        };
        node.widen(t.span);

        let t = self.next();
        if t.kind != SEMICOLON {
            self.expected_token(SEMICOLON, t);
        }
        node.widen(t.span);
        node
    }
}
