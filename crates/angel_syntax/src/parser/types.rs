/// Type, parameter and signature rules.
///
/// ## Notes
/// - Items here are included into `parser.rs` via `include!`.
/// - A type is a `DataType` node whose children are, in order: an optional `const` token, an optional `Scope`, the
///   type name, template arguments (each a nested `DataType`), then any `[` / `@` / `const` suffix tokens.
/// - Reference modifiers (`&in`, `&out`, `+`, `if_handle_then_const`) live in a separate `DataType` node that is
///   always present after a return or parameter type, even when empty.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn parse_type(&mut self, allow_const: bool, allow_variable_type: bool, allow_auto: bool) -> SyntaxNode {
        self.nested(SyntaxNode::new(NodeKind::DataType), |p| {
            p.parse_type_inner(allow_const, allow_variable_type, allow_auto)
        })
    }

    fn parse_type_inner(&mut self, allow_const: bool, allow_variable_type: bool, allow_auto: bool) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::DataType);

        if allow_const && self.peek().kind.is_keyword(KeywordId::Const) {
            node.append(self.parse_token(kw(KeywordId::Const)));
            if self.is_syntax_error {
                return node;
            }
        }

        self.parse_optional_scope(&mut node);

        let name = self.peek();
        node.append(self.parse_type_name(allow_variable_type, allow_auto));
        if self.is_syntax_error {
            return node;
        }

        if self.is_template_name(name) && self.peek().kind == LT {
            self.parse_template_type_list(&mut node);
            if self.is_syntax_error {
                return node;
            }
        }

        loop {
            let t = self.peek();
            if t.kind == LBRACKET {
                node.append(self.parse_token(LBRACKET));
                let close = self.next();
                if close.kind != RBRACKET {
                    self.expected_token(RBRACKET, close);
                    return node;
                }
                node.widen(close.span);
            } else if t.kind == HANDLE {
                node.append(self.parse_token(HANDLE));
                if self.peek().kind.is_keyword(KeywordId::Const) {
                    node.append(self.parse_token(kw(KeywordId::Const)));
                }
            } else {
                break;
            }
        }

        node
    }

    /// The bare type name: a primitive, an identifier, `?` where variable types are allowed, or `auto`.
    fn parse_type_name(&mut self, allow_variable_type: bool, allow_auto: bool) -> SyntaxNode {
        let node = SyntaxNode::new(NodeKind::DataType);
        let t = self.next();

        let accepted = self.is_data_type(t)
            || (allow_variable_type && t.kind == QUESTION)
            || (allow_auto && t.kind.is_keyword(KeywordId::Auto));
        if !accepted {
            if t.kind.is_keyword(KeywordId::Auto) {
                self.error(messages::AUTO_NOT_ALLOWED, t);
            } else {
                self.expected(messages::EXPECTED_DATA_TYPE, t);
            }
            return node;
        }

        SyntaxNode::with_token(NodeKind::DataType, t)
    }

    /// A primitive type keyword only (used by `typedef`).
    fn parse_real_type(&mut self) -> SyntaxNode {
        let t = self.next();
        if !t.kind.is_primitive_type() {
            self.expected(messages::EXPECTED_DATA_TYPE, t);
            return SyntaxNode::new(NodeKind::DataType);
        }
        SyntaxNode::with_token(NodeKind::DataType, t)
    }

    /// Append `<T, U, ...>` argument types to `node`.
    ///
    /// A closing `>>` or `>>>` is split: only its first `>` is consumed.
    fn parse_template_type_list(&mut self, node: &mut SyntaxNode) {
        let open = self.next();
        if open.kind != LT {
            self.expected_token(LT, open);
            return;
        }

        loop {
            node.append(self.parse_type(true, false, false));
            if self.is_syntax_error {
                return;
            }
            let t = self.next();
            if t.kind == COMMA {
                continue;
            }
            if self.source.as_bytes().get(t.span.start) != Some(&b'>') {
                self.expected_token(GT, t);
                return;
            }
            self.jump_to(t.span.start + 1);
            node.widen(Span::at(t.span.start, 1));
            return;
        }
    }

    /// Append a `Scope` node (`[::] [name ::]*`) to `node` if a scope prefix is present.
    ///
    /// The innermost scope segment may be a template instance, as in `array<int>::iterator`.
    fn parse_optional_scope(&mut self, node: &mut SyntaxNode) {
        let mut scope = SyntaxNode::new(NodeKind::Scope);

        let mut t1 = self.next();
        let mut t2 = self.next();
        if t1.kind == SCOPE {
            self.rewind_to(t1);
            scope.append(self.parse_token(SCOPE));
            t1 = self.next();
            t2 = self.next();
        }

        while t1.kind.is_identifier() && t2.kind == SCOPE {
            self.rewind_to(t1);
            scope.append(self.parse_identifier());
            scope.append(self.parse_token(SCOPE));
            t1 = self.next();
            t2 = self.next();
        }

        if t2.kind == LT && self.is_template_name(t1) && self.is_template_scope(t1) {
            scope.append(self.parse_identifier());
            self.parse_template_type_list(&mut scope);
            scope.append(self.parse_token(SCOPE));
            node.append(scope);
            return;
        }

        self.rewind_to(t1);
        if !scope.children().is_empty() {
            node.append(scope);
        }
    }

    /// Whether `name<...>` is followed by `::`. Leaves the cursor on `name`.
    fn is_template_scope(&mut self, name: Token) -> bool {
        self.rewind_to(name);
        self.next();
        let result = self.check_template_type(name) && self.next().kind == SCOPE;
        self.rewind_to(name);
        result
    }

    /// Reference and handle modifiers following a type.
    ///
    /// ## Parameters
    /// - `is_param`: parameters may spell the reference direction (`&in`, `&out`, `&inout`).
    fn parse_type_mod(&mut self, is_param: bool) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::DataType);

        if self.peek().kind == AMP {
            node.append(self.parse_token(AMP));
            if self.is_syntax_error {
                return node;
            }
            if is_param {
                let t = self.peek();
                let directions = [kw(KeywordId::In), kw(KeywordId::Out), kw(KeywordId::InOut)];
                if directions.contains(&t.kind) {
                    node.append(self.parse_one_of(&directions));
                }
            }
        }

        if self.peek().kind == PLUS {
            node.append(self.parse_token(PLUS));
            if self.is_syntax_error {
                return node;
            }
        }

        let t = self.peek();
        if self.is_word(t, ContextualWord::IfHandleThenConst) {
            node.append(self.parse_token(TokenKind::Identifier));
        }

        node
    }

    // ========================================================================
    // Parameters and signatures
    // ========================================================================

    /// `( [Type TypeMod [name] [= default]] , ... )`. `(void)` is an empty list.
    fn parse_parameter_list(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::ParameterList);

        let open = self.next();
        if open.kind != LPAREN {
            self.expected_token(LPAREN, open);
            return node;
        }
        node.widen(open.span);

        let t1 = self.next();
        if t1.kind == RPAREN {
            node.widen(t1.span);
            return node;
        }
        if t1.kind.is_keyword(KeywordId::Void) {
            let t2 = self.next();
            if t2.kind == RPAREN {
                node.widen(t2.span);
                return node;
            }
        }
        self.rewind_to(t1);

        loop {
            node.append(self.parse_type(true, self.is_parsing_app_interface, false));
            if self.is_syntax_error {
                return node;
            }
            node.append(self.parse_type_mod(true));
            if self.is_syntax_error {
                return node;
            }

            let mut t = self.next();
            if t.kind.is_identifier() {
                self.rewind_to(t);
                node.append(self.parse_identifier());
                t = self.next();
            }

            if t.kind == ASSIGN {
                node.append(self.superficially_parse_expression());
                if self.is_syntax_error {
                    return node;
                }
                t = self.next();
            }

            match t.kind {
                RPAREN => {
                    node.widen(t.span);
                    return node;
                }
                COMMA => continue,
                _ => {
                    self.expected(messages::expected_either(")", ","), t);
                    return node;
                }
            }
        }
    }

    /// A function signature without a body: return type, modifiers, optional scope, name, parameters, optional
    /// `const` and method attributes.
    fn parse_function_definition(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Function);

        node.append(self.parse_type(true, false, false));
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_type_mod(false));
        if self.is_syntax_error {
            return node;
        }

        self.parse_optional_scope(&mut node);

        node.append(self.parse_identifier());
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_parameter_list());
        if self.is_syntax_error {
            return node;
        }

        if self.peek().kind.is_keyword(KeywordId::Const) {
            node.append(self.parse_token(kw(KeywordId::Const)));
        }
        self.parse_method_attributes(&mut node);

        node
    }

    /// Append `final`, `override`, `explicit` and `property` markers.
    fn parse_method_attributes(&mut self, node: &mut SyntaxNode) {
        self.parse_modifiers(node, ContextualRole::MethodAttribute);
    }

    /// List factory pattern of a registered behaviour: `{ repeat int }`, `{ int, float }`, nested lists.
    fn parse_list_pattern(&mut self) -> SyntaxNode {
        self.nested(SyntaxNode::new(NodeKind::ListPattern), Self::parse_list_pattern_inner)
    }

    fn parse_list_pattern_inner(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::ListPattern);

        let open = self.next();
        if open.kind != LBRACE {
            self.expected_token(LBRACE, open);
            return node;
        }
        node.widen(open.span);

        let mut is_beginning = true;
        let mut after_type = false;
        let mut t1 = open;
        while !self.is_syntax_error {
            t1 = self.next();
            if t1.kind == RBRACE {
                if !after_type {
                    self.expected(messages::EXPECTED_DATA_TYPE, t1);
                }
                break;
            } else if t1.kind == LBRACE {
                if after_type {
                    self.expected(messages::expected_either(",", "}"), t1);
                    break;
                }
                self.rewind_to(t1);
                node.append(self.parse_list_pattern());
                after_type = true;
            } else if self.is_word(t1, ContextualWord::Repeat) || self.is_word(t1, ContextualWord::RepeatSame) {
                if !is_beginning {
                    self.error(messages::unexpected_token(self.text(t1)), t1);
                    break;
                }
                self.rewind_to(t1);
                node.append(self.parse_identifier());
            } else if t1.kind.is_end() {
                self.error(messages::UNEXPECTED_END_OF_FILE, t1);
                self.info(messages::WHILE_PARSING_STATEMENT_BLOCK, open);
                break;
            } else if t1.kind == COMMA {
                if !after_type {
                    self.expected(messages::EXPECTED_DATA_TYPE, t1);
                    break;
                }
                after_type = false;
            } else {
                if after_type {
                    self.expected(messages::expected_either(",", "}"), t1);
                    break;
                }
                self.rewind_to(t1);
                node.append(self.parse_type(true, true, false));
                after_type = true;
            }
            is_beginning = false;
        }

        node.widen(t1.span);
        node
    }
}
