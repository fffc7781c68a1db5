/// Expression rules.
///
/// ## Notes
/// - Items here are included into `parser.rs` via `include!`.
/// - Expressions are not precedence-climbed. An `Expression` node is a flat alternation of `ExprTerm` and
///   `ExprOperator` children, and precedence is resolved later by whoever consumes the tree.
/// - `Assignment` is right-recursive (`a = b = c`) and wraps a `Condition`, which wraps an `Expression` plus an
///   optional `? :` tail.
impl<'a> Parser<'a> {
    // ========================================================================
    // Assignment / condition / expression
    // ========================================================================

    fn parse_assignment(&mut self) -> SyntaxNode {
        self.nested(SyntaxNode::new(NodeKind::Assignment), Self::parse_assignment_inner)
    }

    fn parse_assignment_inner(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Assignment);

        node.append(self.parse_condition());
        if self.is_syntax_error {
            return node;
        }

        if self.peek().kind.is_assign_operator() {
            node.append(self.parse_operator_token(TokenKind::is_assign_operator));
            if self.is_syntax_error {
                return node;
            }
            node.append(self.parse_assignment());
        }
        node
    }

    fn parse_condition(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Condition);

        node.append(self.parse_expression());
        if self.is_syntax_error {
            return node;
        }

        let t = self.next();
        if t.kind != QUESTION {
            self.rewind_to(t);
            return node;
        }

        node.append(self.parse_assignment());
        if self.is_syntax_error {
            return node;
        }
        if self.expect(COLON).is_none() {
            return node;
        }
        node.append(self.parse_assignment());
        node
    }

    fn parse_expression(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Expression);

        node.append(self.parse_expr_term());
        if self.is_syntax_error {
            return node;
        }

        while self.peek().kind.is_binary_operator() {
            node.append(self.parse_operator_token(TokenKind::is_binary_operator));
            if self.is_syntax_error {
                return node;
            }
            node.append(self.parse_expr_term());
            if self.is_syntax_error {
                return node;
            }
        }
        node
    }

    /// An `ExprOperator` node for one binary or assignment operator.
    fn parse_operator_token(&mut self, accepts: fn(&TokenKind) -> bool) -> SyntaxNode {
        let t = self.next();
        if !accepts(&t.kind) {
            self.expected(messages::EXPECTED_OPERATOR, t);
            return SyntaxNode::new(NodeKind::ExprOperator);
        }
        SyntaxNode::with_token(NodeKind::ExprOperator, t)
    }

    // ========================================================================
    // Terms
    // ========================================================================

    /// Pre-operators, a value, then post-operators. Also `Type = {...}` and bare `{...}` initialization lists.
    fn parse_expr_term(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::ExprTerm);

        let t = self.next();
        if self.is_data_type(t) && self.check_template_type(t) {
            let t2 = self.next();
            let t3 = self.next();
            if t2.kind == ASSIGN && t3.kind == LBRACE {
                self.rewind_to(t);
                node.append(self.parse_type(false, false, false));
                if self.is_syntax_error {
                    return node;
                }
                self.next();
                node.append(self.parse_init_list());
                return node;
            }
        } else if t.kind == LBRACE {
            self.rewind_to(t);
            node.append(self.parse_init_list());
            return node;
        }
        self.rewind_to(t);

        while self.peek().kind.is_pre_operator() {
            node.append(self.parse_expr_pre_op());
            if self.is_syntax_error {
                return node;
            }
        }

        node.append(self.parse_expr_value());
        if self.is_syntax_error {
            return node;
        }

        while self.peek().kind.is_post_operator() {
            node.append(self.parse_expr_post_op());
            if self.is_syntax_error {
                return node;
            }
        }
        node
    }

    fn parse_expr_pre_op(&mut self) -> SyntaxNode {
        let t = self.next();
        if !t.kind.is_pre_operator() {
            self.expected(messages::EXPECTED_PRE_OPERATOR, t);
            return SyntaxNode::new(NodeKind::ExprPreOp);
        }
        SyntaxNode::with_token(NodeKind::ExprPreOp, t)
    }

    /// `++`, `--`, `.member`, `.method(args)`, `[index, ...]` or `(args)`.
    fn parse_expr_post_op(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::ExprPostOp);

        let t = self.next();
        if !t.kind.is_post_operator() {
            self.expected(messages::EXPECTED_POST_OPERATOR, t);
            return node;
        }
        node.set_token(t);

        match t.kind {
            DOT => {
                let t1 = self.next();
                let t2 = self.next();
                self.rewind_to(t1);
                if t2.kind == LPAREN {
                    node.append(self.parse_function_call());
                } else {
                    node.append(self.parse_identifier());
                }
            }
            LBRACKET => {
                node.append(self.parse_arg_list(false));
                if self.is_syntax_error {
                    return node;
                }
                let Some(close) = self.expect(RBRACKET) else {
                    return node;
                };
                node.widen(close.span);
            }
            LPAREN => {
                self.rewind_to(t);
                node.append(self.parse_arg_list(true));
            }
            _ => {}
        }
        node
    }

    /// The operand at the core of a term.
    fn parse_expr_value(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::ExprValue);

        let t1 = self.next();
        let t2 = self.next();
        self.rewind_to(t1);

        if t1.kind.is_keyword(KeywordId::Void) {
            node.append(self.parse_token(kw(KeywordId::Void)));
        } else if t1.kind.is_primitive_type() {
            node.append(self.parse_construct_call());
        } else if t1.kind.is_identifier() || t1.kind == SCOPE {
            if self.is_lambda() {
                node.append(self.parse_lambda());
            } else {
                node.append(self.parse_name_value(t1, t2));
            }
        } else if t1.kind.is_keyword(KeywordId::Cast) {
            node.append(self.parse_cast());
        } else if t1.kind.is_constant() {
            node.append(self.parse_constant());
        } else if t1.kind == LPAREN {
            let open = self.next();
            node.widen(open.span);
            node.append(self.parse_assignment());
            if self.is_syntax_error {
                return node;
            }
            let close = self.next();
            if close.kind != RPAREN {
                self.expected_token(RPAREN, close);
            }
            node.widen(close.span);
        } else if t1.kind == TokenKind::NonTerminatedStringConstant {
            self.error(messages::NONTERMINATED_STRING, t1);
        } else {
            self.expected(messages::EXPECTED_EXPRESSION_VALUE, t1);
        }
        node
    }

    /// A value starting with a (possibly scoped) name: a construct call (`T[]()`, `array<T>()`), a function call
    /// or a variable access.
    fn parse_name_value(&mut self, t1: Token, t2: Token) -> SyntaxNode {
        let mut t = if t1.kind == SCOPE { t2 } else { t1 };
        self.rewind_to(t);
        let mut last = self.next();
        while t.kind.is_identifier() {
            last = t;
            t = self.next();
            if t.kind == SCOPE {
                t = self.next();
            } else {
                break;
            }
        }

        let is_data_type = self.is_data_type(last);
        let is_template = is_data_type && self.is_template_name(last);
        let after = self.next();
        self.rewind_to(t1);

        if is_data_type && t.kind == LBRACKET && after.kind == RBRACKET {
            self.parse_construct_call()
        } else if is_template && t.kind == LT {
            self.parse_construct_call()
        } else if self.is_function_call() {
            self.parse_function_call()
        } else {
            self.parse_variable_access()
        }
    }

    /// A literal. Adjacent string literals are collected as child `Constant` nodes so they can be concatenated.
    fn parse_constant(&mut self) -> SyntaxNode {
        let t = self.next();
        if !t.kind.is_constant() {
            self.expected(messages::EXPECTED_CONSTANT, t);
            return SyntaxNode::new(NodeKind::Constant);
        }
        let mut node = SyntaxNode::with_token(NodeKind::Constant, t);

        if t.kind.is_string_constant() {
            self.rewind_to(t);
            while self.peek().kind.is_string_constant() {
                node.append(self.parse_string_constant());
            }
        }
        node
    }

    fn parse_string_constant(&mut self) -> SyntaxNode {
        let t = self.next();
        if !t.kind.is_string_constant() {
            self.expected(messages::EXPECTED_STRING, t);
            return SyntaxNode::new(NodeKind::Constant);
        }
        SyntaxNode::with_token(NodeKind::Constant, t)
    }

    /// `cast<Type>(expr)`.
    fn parse_cast(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Cast);

        let Some(t) = self.expect(kw(KeywordId::Cast)) else {
            return node;
        };
        node.widen(t.span);

        if self.expect(LT).is_none() {
            return node;
        }
        node.append(self.parse_type(true, false, false));
        if self.is_syntax_error {
            return node;
        }
        if self.expect(GT).is_none() || self.expect(LPAREN).is_none() {
            return node;
        }

        node.append(self.parse_assignment());
        if self.is_syntax_error {
            return node;
        }

        let Some(t) = self.expect(RPAREN) else {
            return node;
        };
        node.widen(t.span);
        node
    }

    // ========================================================================
    // Lambdas and calls
    // ========================================================================

    /// `function(a, int b, const T &in c) { ... }` with a superficially captured body.
    fn parse_lambda(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Function);

        let t = self.next();
        if !self.is_word(t, ContextualWord::Function) {
            self.error(messages::expected(contextual::as_str(ContextualWord::Function)), t);
            return node;
        }
        node.widen(t.span);

        let t = self.next();
        if t.kind != LPAREN {
            self.error(messages::expected(LPAREN.describe()), t);
            return node;
        }

        self.parse_lambda_param_type(&mut node);
        if self.is_syntax_error {
            return node;
        }

        let mut t = self.next();
        if t.kind.is_identifier() {
            self.rewind_to(t);
            node.append(self.parse_identifier());
            t = self.next();
            while t.kind == COMMA {
                self.parse_lambda_param_type(&mut node);
                if self.is_syntax_error {
                    return node;
                }
                node.append(self.parse_identifier());
                if self.is_syntax_error {
                    return node;
                }
                t = self.next();
            }
        }

        if t.kind != RPAREN {
            self.error(messages::expected(RPAREN.describe()), t);
            return node;
        }

        node.append(self.superficially_parse_statement_block());
        node
    }

    /// Parameter types are optional in lambdas; a type is present only if a name or `&` follows it.
    fn parse_lambda_param_type(&mut self, node: &mut SyntaxNode) {
        let Some(after) = self.is_type() else {
            return;
        };
        if after.kind == AMP || after.kind.is_identifier() {
            node.append(self.parse_type(true, false, false));
            if self.is_syntax_error {
                return;
            }
            node.append(self.parse_type_mod(true));
        }
    }

    fn parse_function_call(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::FunctionCall);

        self.parse_optional_scope(&mut node);
        node.append(self.parse_identifier());
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_arg_list(true));
        node
    }

    fn parse_variable_access(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::VariableAccess);

        self.parse_optional_scope(&mut node);
        node.append(self.parse_identifier());
        node
    }

    fn parse_construct_call(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::ConstructCall);

        node.append(self.parse_type(false, false, false));
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_arg_list(true));
        node
    }

    /// Call or index arguments, each an `Assignment` or a `NamedArgument` (`name: value`).
    ///
    /// ## Parameters
    /// - `with_parenthesis`: `false` for index lists, whose `[` and `]` belong to the post-operator.
    fn parse_arg_list(&mut self, with_parenthesis: bool) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::ArgList);

        if with_parenthesis {
            let Some(open) = self.expect(LPAREN) else {
                return node;
            };
            node.widen(open.span);
        }

        let t1 = self.next();
        if t1.kind == RPAREN || t1.kind == RBRACKET {
            if !with_parenthesis {
                self.rewind_to(t1);
            } else if t1.kind == RPAREN {
                node.widen(t1.span);
            } else {
                self.error(messages::unexpected_token(RBRACKET.describe()), t1);
            }
            return node;
        }
        self.rewind_to(t1);

        loop {
            let name = self.next();
            let separator = self.next();
            self.rewind_to(name);

            let legacy = self.config.alternate_named_arg_syntax;
            if name.kind.is_identifier() && (separator.kind == COLON || (legacy && separator.kind == ASSIGN)) {
                let mut named = SyntaxNode::new(NodeKind::NamedArgument);
                named.append(self.parse_identifier());
                let separator = self.next();
                if legacy && separator.kind == ASSIGN {
                    self.warning(messages::NAMED_ARGS_WITH_OLD_SYNTAX, separator);
                }
                named.append(self.parse_assignment());
                node.append(named);
            } else {
                node.append(self.parse_assignment());
            }
            if self.is_syntax_error {
                return node;
            }

            let t1 = self.next();
            if t1.kind == COMMA {
                continue;
            }
            if !with_parenthesis {
                self.rewind_to(t1);
            } else if t1.kind == RPAREN {
                node.widen(t1.span);
            } else {
                self.expected(messages::expected_either(")", ","), t1);
            }
            return node;
        }
    }

    // ========================================================================
    // Initialization lists
    // ========================================================================

    /// `{a, {b, c}, , d}`. Empty slots become one-byte `Undefined` nodes at the separator or closing brace.
    fn parse_init_list(&mut self) -> SyntaxNode {
        self.nested(SyntaxNode::new(NodeKind::InitList), Self::parse_init_list_inner)
    }

    fn parse_init_list_inner(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::InitList);

        let Some(open) = self.expect(LBRACE) else {
            return node;
        };
        node.widen(open.span);

        let t1 = self.next();
        if t1.kind == RBRACE {
            node.widen(t1.span);
            return node;
        }
        self.rewind_to(t1);

        loop {
            let t1 = self.next();
            match t1.kind {
                COMMA => {
                    node.append(empty_slot(t1));
                    let t2 = self.next();
                    if t2.kind == RBRACE {
                        node.append(empty_slot(t2));
                        node.widen(t2.span);
                        return node;
                    }
                    self.rewind_to(t2);
                    continue;
                }
                RBRACE => {
                    node.append(empty_slot(t1));
                    node.widen(t1.span);
                    return node;
                }
                LBRACE => {
                    self.rewind_to(t1);
                    node.append(self.parse_init_list());
                }
                _ => {
                    self.rewind_to(t1);
                    node.append(self.parse_assignment());
                }
            }
            if self.is_syntax_error {
                return node;
            }

            let t1 = self.next();
            match t1.kind {
                COMMA => continue,
                RBRACE => {
                    node.widen(t1.span);
                    return node;
                }
                _ => {
                    self.expected(messages::expected_either("}", ","), t1);
                    return node;
                }
            }
        }
    }

    // ========================================================================
    // Deferred initializers
    // ========================================================================

    /// Deep-parse an initializer captured earlier: `= expr`, `= {...}` or `(args)`.
    ///
    /// Anything other than end of input, `;`, `,` or `}` after a well-formed initializer is reported.
    fn parse_var_init(&mut self) -> SyntaxNode {
        let t = self.next();
        let root = if t.kind == ASSIGN {
            if self.peek().kind == LBRACE {
                self.parse_init_list()
            } else {
                self.parse_assignment()
            }
        } else if t.kind == LPAREN {
            self.rewind_to(t);
            self.parse_arg_list(true)
        } else {
            self.expected(messages::expected_one_of(&["=", "("]), t);
            SyntaxNode::new(NodeKind::Undefined)
        };

        if self.is_syntax_error {
            return root;
        }
        let t = self.next();
        if !matches!(t.kind, END | SEMICOLON | COMMA | RBRACE) {
            self.error(messages::unexpected_token(t.kind.describe()), t);
        }
        root
    }
}

/// Placeholder for an omitted element of an initialization list.
fn empty_slot(at: Token) -> SyntaxNode {
    let mut node = SyntaxNode::new(NodeKind::Undefined);
    node.widen(Span::at(at.span.start, 1));
    node
}
