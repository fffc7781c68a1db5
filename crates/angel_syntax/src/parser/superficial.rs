/// Superficial scanners for bodies, initializers and default arguments.
///
/// ## Notes
/// - Items here are included into `parser.rs` via `include!`.
/// - These only balance brackets to find where a construct ends. The returned node has no children; its span is
///   what a later deep parse is pointed at.
impl<'a> Parser<'a> {
    /// A default argument value: everything up to the first unnested `,` or `)`, which is left unconsumed.
    fn superficially_parse_expression(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Expression);

        let start = self.peek();
        let mut stack: Vec<TokenKind> = Vec::new();
        loop {
            let t = self.next();
            match t.kind {
                LPAREN | LBRACE => stack.push(t.kind),
                RPAREN => match stack.last() {
                    None => {
                        self.rewind_to(t);
                        return node;
                    }
                    Some(&LPAREN) => {
                        stack.pop();
                    }
                    Some(_) => {
                        self.error(messages::unexpected_token(")"), t);
                        return node;
                    }
                },
                COMMA if stack.is_empty() => {
                    self.rewind_to(t);
                    return node;
                }
                RBRACE => {
                    if stack.last() != Some(&LBRACE) {
                        self.error(messages::unexpected_token("}"), t);
                        return node;
                    }
                    stack.pop();
                }
                SEMICOLON => {
                    self.error(messages::unexpected_token(";"), t);
                    return node;
                }
                TokenKind::NonTerminatedStringConstant => {
                    self.error(messages::NONTERMINATED_STRING, t);
                    return node;
                }
                END => {
                    self.error(messages::UNEXPECTED_END_OF_FILE, t);
                    self.info(messages::WHILE_PARSING_EXPRESSION, start);
                    return node;
                }
                _ => {}
            }
            node.widen(t.span);
        }
    }

    /// A global or member initializer, `= ...` up to an unnested `,`, `;` or `}`, or a constructor argument list
    /// `(...)`.
    ///
    /// The returned `Assignment` node spans the whole initializer including the leading `=` or `(`, which is the
    /// span [`parse_variable_initializer`] expects.
    fn superficially_parse_var_init(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Assignment);

        let first = self.next();
        node.widen(first.span);

        match first.kind {
            ASSIGN => self.skip_initializer_expression(&mut node),
            LPAREN => {
                let mut level = 1usize;
                while level > 0 {
                    let t = self.next();
                    match t.kind {
                        LPAREN => level += 1,
                        RPAREN => level -= 1,
                        TokenKind::NonTerminatedStringConstant => {
                            self.error(messages::NONTERMINATED_STRING, t);
                            break;
                        }
                        END => {
                            self.error(messages::UNEXPECTED_END_OF_FILE, t);
                            self.info(messages::WHILE_PARSING_ARG_LIST, first);
                            break;
                        }
                        _ => {}
                    }
                    node.widen(t.span);
                }
            }
            _ => self.expected(messages::expected_one_of(&["=", "("]), first),
        }
        node
    }

    /// Scan the expression after an initializer's `=`, leaving the terminating `,`, `;` or `}` unconsumed.
    fn skip_initializer_expression(&mut self, node: &mut SyntaxNode) {
        let start = self.next();
        if matches!(start.kind, COMMA | SEMICOLON | RBRACE) {
            self.expected(messages::EXPECTED_EXPRESSION_VALUE, start);
            return;
        }

        let mut parens = 0i32;
        let mut braces = 0i32;
        let mut t = start;
        while parens != 0 || braces != 0 || !matches!(t.kind, COMMA | SEMICOLON | RBRACE) {
            match t.kind {
                LPAREN => parens += 1,
                RPAREN => parens -= 1,
                LBRACE => braces += 1,
                RBRACE => braces -= 1,
                TokenKind::NonTerminatedStringConstant => {
                    self.error(messages::NONTERMINATED_STRING, t);
                    return;
                }
                END => {
                    self.error(messages::UNEXPECTED_END_OF_FILE, t);
                    self.info(messages::WHILE_PARSING_EXPRESSION, start);
                    return;
                }
                _ => {}
            }
            node.widen(t.span);
            t = self.next();
        }
        self.rewind_to(t);
    }

    /// A function body: `{` up to its matching `}`.
    fn superficially_parse_statement_block(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::StatementBlock);

        let open = self.next();
        if open.kind != LBRACE {
            self.expected_token(LBRACE, open);
            return node;
        }
        node.widen(open.span);

        let mut level = 1usize;
        let mut t = open;
        while level > 0 && !self.is_syntax_error {
            t = self.next();
            match t.kind {
                RBRACE => level -= 1,
                LBRACE => level += 1,
                TokenKind::NonTerminatedStringConstant => {
                    self.error(messages::NONTERMINATED_STRING, t);
                    break;
                }
                END => {
                    self.error(messages::UNEXPECTED_END_OF_FILE, t);
                    self.info(messages::WHILE_PARSING_STATEMENT_BLOCK, open);
                    break;
                }
                _ => {}
            }
        }

        node.widen(t.span);
        node
    }
}
