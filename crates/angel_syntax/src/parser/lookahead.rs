/// Pure lookahead predicates used to pick a production.
///
/// ## Notes
/// - Items here are included into `parser.rs` via `include!`.
/// - None of these report diagnostics. Each one restores the cursor to where it started before returning, except
///   [`Parser::check_template_type`], whose caller owns the rewind.
impl<'a> Parser<'a> {
    /// Scan a type at the cursor.
    ///
    /// ## Returns
    /// - The first token after the type (past any `@`, `const`, `&` and `[]` suffixes), or `None` if no type starts
    ///   here.
    fn is_type(&mut self) -> Option<Token> {
        let start = self.next();
        let mut t1 = start;
        if t1.kind.is_keyword(KeywordId::Const) {
            t1 = self.next();
        }

        if !t1.kind.is_keyword(KeywordId::Auto) {
            if t1.kind == SCOPE {
                t1 = self.next();
            }
            let mut t2 = self.next();
            while t1.kind.is_identifier() {
                if t2.kind == SCOPE {
                    t1 = self.next();
                    t2 = self.next();
                    continue;
                }
                if t2.kind == LT {
                    // `ns<T>::Name` scopes through a template instance.
                    self.rewind_to(t2);
                    if self.check_template_type(t1) && self.next().kind == SCOPE {
                        t1 = self.next();
                        t2 = self.next();
                        continue;
                    }
                }
                break;
            }
            self.rewind_to(t2);
        }

        if !self.is_data_type(t1) && !t1.kind.is_keyword(KeywordId::Auto) {
            self.rewind_to(start);
            return None;
        }
        if !self.check_template_type(t1) {
            self.rewind_to(start);
            return None;
        }

        let mut t2 = self.next();
        while t2.kind == HANDLE || t2.kind == AMP || t2.kind == LBRACKET {
            if t2.kind == HANDLE {
                let t3 = self.next();
                if !t3.kind.is_keyword(KeywordId::Const) {
                    self.rewind_to(t3);
                }
            } else if t2.kind == LBRACKET {
                if self.next().kind != RBRACKET {
                    self.rewind_to(start);
                    return None;
                }
            }
            t2 = self.next();
        }

        self.rewind_to(start);
        Some(t2)
    }

    /// Skip over a template argument list following `name`, if `name` is a template type.
    ///
    /// The cursor must sit right after `name`. On success it is left after the closing `>`; a fused `>>` or `>>>`
    /// is split so the enclosing list can consume the rest.
    fn check_template_type(&mut self, name: Token) -> bool {
        if !self.is_template_name(name) {
            return true;
        }
        let open = self.next();
        if open.kind != LT {
            self.rewind_to(open);
            return true;
        }
        if self.depth >= self.config.max_nesting_depth {
            return false;
        }
        self.depth += 1;
        let result = self.check_template_arguments();
        self.depth -= 1;
        result
    }

    fn check_template_arguments(&mut self) -> bool {
        let mut t1;
        loop {
            t1 = self.next();
            if t1.kind.is_keyword(KeywordId::Const) {
                t1 = self.next();
            }
            if t1.kind == SCOPE {
                t1 = self.next();
            }
            let mut t2 = self.next();
            while t1.kind.is_identifier() && t2.kind == SCOPE {
                t1 = self.next();
                t2 = self.next();
            }
            self.rewind_to(t2);

            if !self.is_data_type(t1) || !self.check_template_type(t1) {
                return false;
            }

            t1 = self.next();
            while t1.kind == HANDLE || t1.kind == LBRACKET {
                if t1.kind == LBRACKET && self.next().kind != RBRACKET {
                    return false;
                }
                t1 = self.next();
            }

            if t1.kind != COMMA {
                break;
            }
        }

        if self.source.as_bytes().get(t1.span.start) != Some(&b'>') {
            return false;
        }
        if t1.len() != 1 {
            self.jump_to(t1.span.start + 1);
        }
        true
    }

    /// Whether a variable declaration starts at the cursor: `[private|protected] Type name` followed by `=`, `;`,
    /// `,` or a constructor argument list.
    fn is_var_decl(&mut self) -> bool {
        let start = self.peek();
        let t = self.next();
        if !self.is_access_modifier(t) {
            self.rewind_to(t);
        }

        let result = self.is_var_decl_after_modifier();
        self.rewind_to(start);
        result
    }

    fn is_var_decl_after_modifier(&mut self) -> bool {
        let Some(after) = self.is_type() else {
            return false;
        };
        self.rewind_to(after);

        if !self.next().kind.is_identifier() {
            return false;
        }
        let t = self.next();
        match t.kind {
            ASSIGN | SEMICOLON | COMMA => true,
            LPAREN => {
                // `Type name(args)` is a declaration; `Type name(params) {` or `... const` is a function.
                if !self.skip_parenthesized() {
                    return false;
                }
                let t = self.next();
                !(t.kind == LBRACE || t.kind.is_identifier() || t.kind.is_end())
            }
            _ => false,
        }
    }

    /// Whether a virtual property declaration starts at the cursor: `[access] Type name {` followed by `get`,
    /// `set` or `}`.
    fn is_virtual_property_decl(&mut self) -> bool {
        let start = self.peek();
        let t = self.next();
        if !self.is_access_modifier(t) {
            self.rewind_to(t);
        }

        let result = match self.is_type() {
            Some(after) => {
                self.rewind_to(after);
                let name = self.next();
                let open = self.next();
                if name.kind.is_identifier() && open.kind == LBRACE {
                    let t = self.next();
                    t.kind == RBRACE
                        || self.is_word(t, ContextualWord::Get)
                        || self.is_word(t, ContextualWord::Set)
                } else {
                    false
                }
            }
            None => false,
        };

        self.rewind_to(start);
        result
    }

    /// Whether a function definition with a body starts at the cursor.
    ///
    /// Methods additionally recognize constructors (`Name(`) and destructors (`~Name`).
    fn is_func_decl(&mut self, is_method: bool) -> bool {
        let start = self.peek();
        let result = self.is_func_decl_at(is_method);
        self.rewind_to(start);
        result
    }

    fn is_func_decl_at(&mut self, is_method: bool) -> bool {
        if is_method {
            let t = self.next();
            if !self.is_access_modifier(t) {
                self.rewind_to(t);
            }
            let t1 = self.next();
            let t2 = self.next();
            if (t1.kind.is_identifier() && t2.kind == LPAREN) || t1.kind == TILDE {
                return true;
            }
            self.rewind_to(t1);
        }

        let Some(after) = self.is_type() else {
            return false;
        };
        self.rewind_to(after);

        let mut t = self.next();
        if t.kind == AMP {
            return true;
        }
        if !t.kind.is_identifier() {
            return false;
        }
        t = self.next();
        if t.kind != LPAREN || !self.skip_parenthesized() {
            return false;
        }

        if is_method {
            let t = self.next();
            if !t.kind.is_keyword(KeywordId::Const) {
                self.rewind_to(t);
            }
        }
        loop {
            let t = self.next();
            if !self.has_role(t, ContextualRole::MethodAttribute) {
                self.rewind_to(t);
                break;
            }
        }

        self.next().kind == LBRACE
    }

    /// `function (...) {` starts a lambda.
    fn is_lambda(&mut self) -> bool {
        let start = self.next();
        let mut result = false;
        if self.is_word(start, ContextualWord::Function) && self.next().kind == LPAREN && self.skip_parenthesized() {
            result = self.next().kind == LBRACE;
        }
        self.rewind_to(start);
        result
    }

    /// `[::] [ns ::]* name (` is a call rather than a variable access.
    fn is_function_call(&mut self) -> bool {
        let start = self.next();
        let mut t = start;
        if t.kind == SCOPE {
            t = self.next();
        }
        let mut t2 = self.next();
        while t.kind.is_identifier() && t2.kind == SCOPE {
            t = self.next();
            t2 = self.next();
        }
        self.rewind_to(start);
        t.kind.is_identifier() && t2.kind == LPAREN
    }
}
