/// Script-level declarations.
///
/// ## Notes
/// - Items here are included into `parser.rs` via `include!`.
/// - Function bodies and global/member initializers are captured superficially; see `superficial.rs`.
/// - The script level, namespace bodies and class bodies recover from syntax errors and keep going, so one bad
///   declaration does not hide the ones after it.
impl<'a> Parser<'a> {
    // ========================================================================
    // Script
    // ========================================================================

    /// Top-level declarations until end of input, or until the closing `}` of a namespace when `in_block`.
    fn parse_script(&mut self, in_block: bool) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Script);

        loop {
            while !self.is_syntax_error {
                let start = self.next();
                let mut t1 = start;
                while self.has_role(t1, ContextualRole::DeclarationModifier) {
                    t1 = self.next();
                }
                self.rewind_to(start);

                match t1.kind {
                    TokenKind::Keyword(KeywordId::Import) => node.append(self.parse_import()),
                    TokenKind::Keyword(KeywordId::Enum) => node.append(self.parse_enumeration()),
                    TokenKind::Keyword(KeywordId::Typedef) => node.append(self.parse_typedef()),
                    TokenKind::Keyword(KeywordId::Class) => node.append(self.parse_class()),
                    TokenKind::Keyword(KeywordId::Mixin) => node.append(self.parse_mixin()),
                    TokenKind::Keyword(KeywordId::Interface) => node.append(self.parse_interface()),
                    TokenKind::Keyword(KeywordId::FuncDef) => node.append(self.parse_funcdef()),
                    TokenKind::Keyword(KeywordId::Const) | TokenKind::Keyword(KeywordId::Auto) | SCOPE => {
                        node.append(self.parse_global_member());
                    }
                    _ if self.is_data_type(t1) => node.append(self.parse_global_member()),
                    SEMICOLON => {
                        self.next();
                    }
                    TokenKind::Keyword(KeywordId::Namespace) => node.append(self.parse_namespace()),
                    END => return node,
                    RBRACE if in_block => return node,
                    TokenKind::NonTerminatedStringConstant => self.error(messages::NONTERMINATED_STRING, t1),
                    _ => self.error(messages::unexpected_token(t1.kind.describe()), t1),
                }
            }

            self.resynchronize(in_block);
        }
    }

    /// A global variable, virtual property or function; which one is decided by lookahead.
    fn parse_global_member(&mut self) -> SyntaxNode {
        if self.is_virtual_property_decl() {
            self.parse_virtual_property_decl(false, false)
        } else if self.is_var_decl() {
            self.parse_declaration(false, true)
        } else {
            self.parse_function(false)
        }
    }

    /// Skip to the end of the broken declaration: past a `;`, past a whole `{ ... }` block, or up to (not past)
    /// the `}` closing the enclosing namespace.
    fn resynchronize(&mut self, in_block: bool) {
        let mut t = self.next();
        while t.kind != SEMICOLON && t.kind != LBRACE && !t.kind.is_end() && !(in_block && t.kind == RBRACE) {
            t = self.next();
        }
        match t.kind {
            LBRACE => self.skip_block(),
            RBRACE => self.rewind_to(t),
            _ => {}
        }
        tracing::debug!(offset = self.cursor.position(), "resynchronized after syntax error");
        self.is_syntax_error = false;
    }

    // ========================================================================
    // Import / namespace
    // ========================================================================

    /// `import Signature from "module";`
    fn parse_import(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Import);

        let t = self.next();
        if !t.kind.is_keyword(KeywordId::Import) {
            self.expected_token(kw(KeywordId::Import), t);
            return node;
        }
        node.set_token(t);

        node.append(self.parse_function_definition());
        if self.is_syntax_error {
            return node;
        }

        let t = self.next();
        if !self.is_word(t, ContextualWord::From) {
            self.expected(messages::expected(contextual::as_str(ContextualWord::From)), t);
            return node;
        }
        node.widen(t.span);

        let t = self.next();
        if !t.kind.is_string_constant() {
            self.expected(messages::EXPECTED_STRING, t);
            return node;
        }
        node.append(SyntaxNode::with_token(NodeKind::Constant, t));

        let t = self.next();
        if t.kind != SEMICOLON {
            self.expected_token(SEMICOLON, t);
            return node;
        }
        node.widen(t.span);
        node
    }

    /// `namespace a::b { ... }`, nested as `Namespace[a, Script[Namespace[b, Script[...]]]]`.
    fn parse_namespace(&mut self) -> SyntaxNode {
        self.nested(SyntaxNode::new(NodeKind::Namespace), Self::parse_namespace_inner)
    }

    fn parse_namespace_inner(&mut self) -> SyntaxNode {
        let mut levels = vec![SyntaxNode::new(NodeKind::Namespace)];

        let t1 = self.next();
        if t1.kind.is_keyword(KeywordId::Namespace) {
            levels[0].widen(t1.span);
        } else {
            self.expected_token(kw(KeywordId::Namespace), t1);
        }

        levels[0].append(self.parse_identifier());
        if self.is_syntax_error {
            return fold_namespaces(levels);
        }

        let mut t1 = self.next();
        while t1.kind == SCOPE {
            if let Some(lowest) = levels.last_mut() {
                lowest.widen(t1.span);
            }
            let mut inner = SyntaxNode::new(NodeKind::Namespace);
            inner.append(self.parse_identifier());
            levels.push(inner);
            if self.is_syntax_error {
                return fold_namespaces(levels);
            }
            t1 = self.next();
        }

        if t1.kind != LBRACE {
            self.expected_token(LBRACE, t1);
            return fold_namespaces(levels);
        }
        levels[0].widen(t1.span);
        let open = t1;

        let body = self.parse_script(true);
        if let Some(lowest) = levels.last_mut() {
            lowest.append(body);
        }

        if !self.is_syntax_error {
            let t1 = self.next();
            if t1.kind == RBRACE {
                levels[0].widen(t1.span);
            } else {
                if t1.kind.is_end() {
                    self.error(messages::UNEXPECTED_END_OF_FILE, t1);
                } else {
                    self.expected_token(RBRACE, t1);
                }
                self.info(messages::WHILE_PARSING_NAMESPACE, open);
            }
        }

        fold_namespaces(levels)
    }

    // ========================================================================
    // Enum / typedef / funcdef
    // ========================================================================

    /// `[shared] [external] enum Name { A, B = expr, ... }` or a forward `enum Name;`.
    fn parse_enumeration(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Enum);

        self.parse_shared_external(&mut node);
        if self.is_syntax_error {
            return node;
        }

        let t = self.next();
        if !t.kind.is_keyword(KeywordId::Enum) {
            self.expected_token(kw(KeywordId::Enum), t);
            return node;
        }
        node.set_token(t);

        let t = self.next();
        if !t.kind.is_identifier() {
            self.expected(messages::EXPECTED_IDENTIFIER, t);
            return node;
        }
        let mut data_type = SyntaxNode::new(NodeKind::DataType);
        data_type.append(SyntaxNode::with_token(NodeKind::Identifier, t));
        node.append(data_type);

        let t = self.next();
        if t.kind == SEMICOLON {
            self.rewind_to(t);
            node.append(self.parse_token(SEMICOLON));
            return node;
        }
        if t.kind != LBRACE {
            self.expected(messages::expected_one_of(&["{", ";"]), t);
            return node;
        }

        loop {
            let t = self.next();
            if t.kind == RBRACE {
                self.rewind_to(t);
                break;
            }
            if !t.kind.is_identifier() {
                self.expected(messages::EXPECTED_IDENTIFIER, t);
                return node;
            }
            node.append(SyntaxNode::with_token(NodeKind::Identifier, t));

            let mut t = self.next();
            if t.kind == ASSIGN {
                self.rewind_to(t);
                node.append(self.superficially_parse_var_init());
                if self.is_syntax_error {
                    return node;
                }
                t = self.next();
            }
            if t.kind != COMMA {
                self.rewind_to(t);
                break;
            }
        }

        let t = self.next();
        if t.kind != RBRACE {
            self.expected_token(RBRACE, t);
            return node;
        }
        node.widen(t.span);
        node
    }

    /// `typedef double real;` (primitive types only, `void` excluded).
    fn parse_typedef(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Typedef);

        let t = self.next();
        if !t.kind.is_keyword(KeywordId::Typedef) {
            self.expected_token(kw(KeywordId::Typedef), t);
            return node;
        }
        node.set_token(t);

        let t = self.peek();
        if !t.kind.is_primitive_type() || t.kind.is_keyword(KeywordId::Void) {
            self.error(messages::unexpected_token(t.kind.describe()), t);
            return node;
        }

        node.append(self.parse_real_type());
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_identifier());
        if self.is_syntax_error {
            return node;
        }

        let t = self.next();
        if t.kind != SEMICOLON {
            self.expected_token(SEMICOLON, t);
            return node;
        }
        node.widen(t.span);
        node
    }

    /// `[shared] [external] funcdef RetType Name(params);`
    fn parse_funcdef(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::FuncDef);

        self.parse_shared_external(&mut node);
        if self.is_syntax_error {
            return node;
        }

        let t = self.next();
        if !t.kind.is_keyword(KeywordId::FuncDef) {
            self.expected_token(kw(KeywordId::FuncDef), t);
            return node;
        }
        node.set_token(t);

        node.append(self.parse_type(true, false, false));
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_type_mod(false));
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_identifier());
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_parameter_list());
        if self.is_syntax_error {
            return node;
        }

        let t = self.next();
        if t.kind != SEMICOLON {
            self.expected_token(SEMICOLON, t);
            return node;
        }
        node.widen(t.span);
        node
    }

    // ========================================================================
    // Functions and virtual properties
    // ========================================================================

    /// A global function or a class method with its body captured superficially.
    ///
    /// Children: modifiers, [access], return type, type modifier, [`~`], name, parameters, [`const`], attributes,
    /// then the body (or a `;` token for external declarations). Constructors and destructors have no return type.
    fn parse_function(&mut self, is_method: bool) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Function);

        if !is_method {
            self.parse_shared_external(&mut node);
            if self.is_syntax_error {
                return node;
            }
        }

        let mut t1 = self.peek();
        if is_method && self.is_access_modifier(t1) {
            node.append(self.parse_token(t1.kind));
            t1 = self.peek();
        }
        if self.is_syntax_error {
            return node;
        }

        self.next();
        let t2 = self.next();
        self.rewind_to(t1);
        let is_destructor = is_method && t1.kind == TILDE;
        let is_constructor = is_method && t2.kind == LPAREN;
        if !is_destructor && !is_constructor {
            node.append(self.parse_type(true, false, false));
            if self.is_syntax_error {
                return node;
            }
            node.append(self.parse_type_mod(false));
            if self.is_syntax_error {
                return node;
            }
        }

        if is_destructor {
            node.append(self.parse_token(TILDE));
            if self.is_syntax_error {
                return node;
            }
        }

        node.append(self.parse_identifier());
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_parameter_list());
        if self.is_syntax_error {
            return node;
        }

        if is_method && self.peek().kind.is_keyword(KeywordId::Const) {
            node.append(self.parse_token(kw(KeywordId::Const)));
        }

        self.parse_method_attributes(&mut node);
        if self.is_syntax_error {
            return node;
        }

        if self.peek().kind == SEMICOLON {
            node.append(self.parse_token(SEMICOLON));
            return node;
        }

        node.append(self.superficially_parse_statement_block());
        node
    }

    /// An interface method signature ending in `;`.
    fn parse_interface_method(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Function);

        node.append(self.parse_type(true, false, false));
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_type_mod(false));
        if self.is_syntax_error {
            return node;
        }
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

        let t = self.next();
        if t.kind != SEMICOLON {
            self.expected_token(SEMICOLON, t);
            return node;
        }
        node.widen(t.span);
        node
    }

    /// `Type name { get {...} set {...} }`.
    ///
    /// Each accessor becomes a nested `VirtualProperty` holding the accessor word, then `const` and attributes
    /// (methods only), then its body unless it was declared with `;`.
    fn parse_virtual_property_decl(&mut self, is_method: bool, is_interface: bool) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::VirtualProperty);

        let t1 = self.peek();
        if is_method && self.is_access_modifier(t1) {
            node.append(self.parse_token(t1.kind));
            if self.is_syntax_error {
                return node;
            }
        }

        node.append(self.parse_type(true, false, false));
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_type_mod(false));
        if self.is_syntax_error {
            return node;
        }
        node.append(self.parse_identifier());
        if self.is_syntax_error {
            return node;
        }

        let open = self.next();
        if open.kind != LBRACE {
            self.expected_token(LBRACE, open);
            return node;
        }

        loop {
            let t1 = self.next();
            if t1.kind == RBRACE {
                node.widen(t1.span);
                break;
            }
            if !self.has_role(t1, ContextualRole::Accessor) {
                let close = RBRACE.describe();
                let options = [
                    contextual::as_str(ContextualWord::Get),
                    contextual::as_str(ContextualWord::Set),
                    close,
                ];
                self.expected(messages::expected_one_of(&options), t1);
                return node;
            }

            self.rewind_to(t1);
            let mut accessor = SyntaxNode::new(NodeKind::VirtualProperty);
            accessor.append(self.parse_identifier());

            if is_method {
                if self.peek().kind.is_keyword(KeywordId::Const) {
                    accessor.append(self.parse_token(kw(KeywordId::Const)));
                }
                if !is_interface {
                    self.parse_method_attributes(&mut accessor);
                }
            }

            let t = self.next();
            if !is_interface && t.kind == LBRACE {
                self.rewind_to(t);
                accessor.append(self.superficially_parse_statement_block());
                node.append(accessor);
                if self.is_syntax_error {
                    return node;
                }
            } else if t.kind == SEMICOLON {
                accessor.widen(t.span);
                node.append(accessor);
            } else {
                node.append(accessor);
                if is_interface {
                    self.expected_token(SEMICOLON, t);
                } else {
                    self.expected(messages::expected_either(";", "{"), t);
                }
                return node;
            }
        }

        node
    }

    // ========================================================================
    // Interfaces, mixins and classes
    // ========================================================================

    /// `[shared] [external] interface Name [: Base, ...] { methods and properties }` or a forward `interface Name;`.
    fn parse_interface(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Interface);

        self.parse_shared_external(&mut node);
        if self.is_syntax_error {
            return node;
        }

        let t = self.next();
        if !t.kind.is_keyword(KeywordId::Interface) {
            self.expected_token(kw(KeywordId::Interface), t);
            return node;
        }
        node.set_token(t);

        node.append(self.parse_identifier());
        if self.is_syntax_error {
            return node;
        }

        let t = self.next();
        if t.kind == SEMICOLON {
            self.rewind_to(t);
            node.append(self.parse_token(SEMICOLON));
            return node;
        }
        let t = if t.kind == COLON { self.parse_inherit_list(&mut node) } else { t };
        if self.is_syntax_error {
            return node;
        }
        if t.kind != LBRACE {
            self.expected_token(LBRACE, t);
            return node;
        }

        let mut t = self.peek();
        while t.kind != RBRACE && !t.kind.is_end() {
            if self.is_virtual_property_decl() {
                node.append(self.parse_virtual_property_decl(true, true));
            } else if t.kind == SEMICOLON {
                self.next();
            } else {
                node.append(self.parse_interface_method());
            }
            if self.is_syntax_error {
                return node;
            }
            t = self.peek();
        }

        let t = self.next();
        if t.kind != RBRACE {
            self.expected_token(RBRACE, t);
            return node;
        }
        node.widen(t.span);
        node
    }

    /// Append one `Identifier` node per base after `:`, each holding an optional scope and the base name.
    ///
    /// ## Returns
    /// - The token after the list.
    fn parse_inherit_list(&mut self, node: &mut SyntaxNode) -> Token {
        loop {
            let mut base = SyntaxNode::new(NodeKind::Identifier);
            self.parse_optional_scope(&mut base);
            base.append(self.parse_identifier());
            node.append(base);
            if self.is_syntax_error {
                return self.peek();
            }
            let t = self.next();
            if t.kind != COMMA {
                return t;
            }
        }
    }

    /// `mixin class Name { ... }`.
    fn parse_mixin(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Mixin);

        let t = self.next();
        if !t.kind.is_keyword(KeywordId::Mixin) {
            self.expected_token(kw(KeywordId::Mixin), t);
            return node;
        }
        node.set_token(t);

        node.append(self.parse_class());
        node
    }

    /// `[shared|abstract|final|external]* class [@]Name [: Bases] { members }` or a forward `class Name;`.
    fn parse_class(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Class);

        self.parse_modifiers(&mut node, ContextualRole::DeclarationModifier);

        let t = self.next();
        if !t.kind.is_keyword(KeywordId::Class) {
            self.expected_token(kw(KeywordId::Class), t);
            return node;
        }
        node.set_token(t);

        if self.config.allow_implicit_handle_types {
            let t = self.next();
            if t.kind == HANDLE {
                node.set_token(t);
            } else {
                self.rewind_to(t);
            }
        }

        node.append(self.parse_identifier());
        if self.is_syntax_error {
            return node;
        }

        let t = self.next();
        if t.kind == SEMICOLON {
            self.rewind_to(t);
            node.append(self.parse_token(SEMICOLON));
            return node;
        }
        let t = if t.kind == COLON { self.parse_inherit_list(&mut node) } else { t };
        if self.is_syntax_error {
            return node;
        }
        if t.kind != LBRACE {
            self.expected_token(LBRACE, t);
            return node;
        }

        let mut t = self.peek();
        while t.kind != RBRACE && !t.kind.is_end() {
            if t.kind.is_keyword(KeywordId::FuncDef) {
                node.append(self.parse_funcdef());
            } else if self.is_func_decl(true) {
                node.append(self.parse_function(true));
            } else if self.is_virtual_property_decl() {
                node.append(self.parse_virtual_property_decl(true, false));
            } else if self.is_var_decl() {
                node.append(self.parse_declaration(true, false));
            } else if t.kind == SEMICOLON {
                self.next();
            } else {
                self.expected(messages::EXPECTED_METHOD_OR_PROPERTY, t);
            }

            if self.is_syntax_error {
                self.skip_class_member();
            }
            t = self.peek();
        }

        let t = self.next();
        if t.kind != RBRACE {
            self.expected_token(RBRACE, t);
            return node;
        }
        node.widen(t.span);
        node
    }

    /// Skip the rest of a broken class member: past a `;` or a `{ ... }` block, or up to the class's `}`.
    fn skip_class_member(&mut self) {
        loop {
            let t = self.next();
            match t.kind {
                SEMICOLON => break,
                LBRACE => {
                    self.skip_block();
                    break;
                }
                RBRACE | END => {
                    self.rewind_to(t);
                    break;
                }
                _ => {}
            }
        }
        tracing::debug!(offset = self.cursor.position(), "skipped broken class member");
        self.is_syntax_error = false;
    }

    // ========================================================================
    // Variable declarations
    // ========================================================================

    /// `Type a [= init], b(args), ...;`
    ///
    /// Class members and globals only capture their initializer superficially; locals parse it in full.
    fn parse_declaration(&mut self, is_class_prop: bool, is_global_var: bool) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Declaration);

        let t = self.peek();
        if is_class_prop && self.is_access_modifier(t) {
            node.append(self.parse_token(t.kind));
        }

        node.append(self.parse_type(true, false, !is_class_prop));
        if self.is_syntax_error {
            return node;
        }

        loop {
            node.append(self.parse_identifier());
            if self.is_syntax_error {
                return node;
            }

            if is_class_prop || is_global_var {
                let t = self.peek();
                if t.kind == ASSIGN || t.kind == LPAREN {
                    node.append(self.superficially_parse_var_init());
                    if self.is_syntax_error {
                        return node;
                    }
                }
            } else {
                let t = self.next();
                if t.kind == LPAREN {
                    self.rewind_to(t);
                    node.append(self.parse_arg_list(true));
                    if self.is_syntax_error {
                        return node;
                    }
                } else if t.kind == ASSIGN {
                    if self.peek().kind == LBRACE {
                        node.append(self.parse_init_list());
                    } else {
                        node.append(self.parse_assignment());
                    }
                    if self.is_syntax_error {
                        return node;
                    }
                } else {
                    self.rewind_to(t);
                }
            }

            let t = self.next();
            match t.kind {
                COMMA => continue,
                SEMICOLON => {
                    node.widen(t.span);
                    return node;
                }
                _ => {
                    self.expected(messages::expected_either(",", ";"), t);
                    return node;
                }
            }
        }
    }
}

/// Nest collected `a::b::c` namespace levels, innermost last, into a single tree.
fn fold_namespaces(mut levels: Vec<SyntaxNode>) -> SyntaxNode {
    let mut inner = levels.pop().unwrap_or_else(|| SyntaxNode::new(NodeKind::Namespace));
    while let Some(mut outer) = levels.pop() {
        let mut script = SyntaxNode::new(NodeKind::Script);
        script.append(inner);
        outer.append(script);
        inner = outer;
    }
    inner
}
