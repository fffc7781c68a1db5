// ============================================================================
// Public API
// ============================================================================

/// A parse result: the (possibly partial) tree plus everything reported while building it.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub root: SyntaxNode,
    pub diagnostics: Diagnostics,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Keep the tree only if no error was reported. Warnings do not fail a parse.
    ///
    /// ## Errors
    /// - [`ParseFailure`] carrying the partial tree and every diagnostic when at least one error was reported.
    pub fn into_result(self) -> Result<SyntaxNode, ParseFailure> {
        if self.diagnostics.has_errors() {
            return Err(ParseFailure {
                root: self.root,
                diagnostics: self.diagnostics,
            });
        }
        Ok(self.root)
    }
}

/// A parse that reported at least one error.
#[derive(Debug, Clone, thiserror::Error)]
#[error("parsing failed with {} error(s)", .diagnostics.errors().len())]
pub struct ParseFailure {
    /// The best-effort tree; subtrees before the first error are reliable.
    pub root: SyntaxNode,
    pub diagnostics: Diagnostics,
}

/// Entry points bound to one [`ParserConfig`].
///
/// Each call runs a fresh session, so one `ScriptParser` can be shared freely (including across threads).
///
/// ## Examples
///
/// ```rust
/// use angel_syntax::{NodeKind, ParserConfig, ScriptParser};
///
/// let parser = ScriptParser::new(ParserConfig::new().with_template_type("dictionary"));
/// let output = parser.parse_data_type("dictionary<string, int>@", false);
/// assert!(output.diagnostics.is_empty());
/// assert_eq!(output.root.kind(), NodeKind::DataType);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptParser {
    config: ParserConfig,
}

impl ScriptParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// A whole script: imports, namespaces, types, functions and globals.
    ///
    /// Function bodies and initializers are captured superficially; see [`ScriptParser::parse_statement_block_at`]
    /// and [`ScriptParser::parse_variable_initializer`].
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn parse_full_script(&self, source: &str) -> ParseOutput {
        let mut parser = Parser::new(source, &self.config);
        let root = parser.parse_script(false);
        parser.finish(root)
    }

    /// A registered function signature without a body. `?` is accepted as a parameter type.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn parse_function_signature(&self, source: &str) -> ParseOutput {
        let mut parser = Parser::new(source, &self.config);
        parser.is_parsing_app_interface = true;
        let root = parser.parse_function_definition();
        parser.expect_end();
        parser.finish(root)
    }

    /// A list factory signature: a function signature followed by its list pattern, which is appended to the
    /// `Function` node.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn parse_list_factory_signature(&self, source: &str) -> ParseOutput {
        let mut parser = Parser::new(source, &self.config);
        parser.is_parsing_app_interface = true;
        let mut root = parser.parse_function_definition();
        if !parser.is_syntax_error {
            root.append(parser.parse_list_pattern());
        }
        parser.expect_end();
        parser.finish(root)
    }

    /// One expression. Tokens after it are left unread and not reported.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn parse_single_expression(&self, source: &str) -> ParseOutput {
        let mut parser = Parser::new(source, &self.config);
        let root = parser.parse_expression();
        parser.finish(root)
    }

    /// Deep-parse a statement block whose span was captured by an earlier full-script parse.
    #[tracing::instrument(skip_all, fields(source_len = source.len(), start = block.start))]
    pub fn parse_statement_block_at(&self, source: &str, block: Span) -> ParseOutput {
        let mut parser = Parser::new(source, &self.config);
        parser.jump_to(block.start);
        let root = parser.parse_statement_block();
        parser.finish(root)
    }

    /// Deep-parse an initializer (`= expr`, `= {...}` or `(args)`) captured by an earlier full-script parse.
    #[tracing::instrument(skip_all, fields(source_len = source.len(), start = init.start))]
    pub fn parse_variable_initializer(&self, source: &str, init: Span) -> ParseOutput {
        let mut parser = Parser::new(source, &self.config);
        parser.jump_to(init.start);
        let root = parser.parse_var_init();
        parser.finish(root)
    }

    /// A standalone type, wrapped in a `DataType` root. Return types also carry their reference modifiers.
    #[tracing::instrument(skip_all, fields(source_len = source.len(), is_return_type = is_return_type))]
    pub fn parse_data_type(&self, source: &str, is_return_type: bool) -> ParseOutput {
        let mut parser = Parser::new(source, &self.config);
        let mut root = SyntaxNode::new(NodeKind::DataType);
        root.append(parser.parse_type(true, true, true));
        if is_return_type && !parser.is_syntax_error {
            root.append(parser.parse_type_mod(false));
        }
        parser.expect_end();
        parser.finish(root)
    }

    /// A template declaration such as `array<class T>` or `dictionary<K, V>`.
    ///
    /// The root is an `Undefined` node holding the template name followed by one `Identifier` per subtype.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn parse_template_decl(&self, source: &str) -> ParseOutput {
        let mut parser = Parser::new(source, &self.config);
        let root = parser.parse_template_decl();
        parser.expect_end();
        parser.finish(root)
    }

    /// A registered property: `[const] Type [&] [scope::]name`.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn parse_property_declaration(&self, source: &str) -> ParseOutput {
        let mut parser = Parser::new(source, &self.config);
        let root = parser.parse_property_declaration();
        parser.expect_end();
        parser.finish(root)
    }
}

impl<'a> Parser<'a> {
    fn parse_template_decl(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Undefined);

        node.append(self.parse_identifier());
        if self.is_syntax_error {
            return node;
        }
        if self.expect(LT).is_none() {
            return node;
        }

        loop {
            let t = self.next();
            if !t.kind.is_keyword(KeywordId::Class) {
                self.rewind_to(t);
            }
            node.append(self.parse_identifier());
            if self.is_syntax_error {
                return node;
            }

            let t = self.next();
            if t.kind == COMMA {
                continue;
            }
            if t.kind != GT {
                self.expected_token(GT, t);
            }
            return node;
        }
    }

    fn parse_property_declaration(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::Declaration);

        node.append(self.parse_type(true, false, false));
        if self.is_syntax_error {
            return node;
        }

        // A `&` marks a property stored by reference.
        if self.peek().kind == AMP {
            node.append(self.parse_token(AMP));
        }

        self.parse_optional_scope(&mut node);
        node.append(self.parse_identifier());
        node
    }
}

// ============================================================================
// Convenience functions using the default configuration
// ============================================================================

/// [`ScriptParser::parse_full_script`] with [`ParserConfig::default`].
pub fn parse_full_script(source: &str) -> ParseOutput {
    ScriptParser::default().parse_full_script(source)
}

/// [`ScriptParser::parse_function_signature`] with [`ParserConfig::default`].
pub fn parse_function_signature(source: &str) -> ParseOutput {
    ScriptParser::default().parse_function_signature(source)
}

/// [`ScriptParser::parse_list_factory_signature`] with [`ParserConfig::default`].
pub fn parse_list_factory_signature(source: &str) -> ParseOutput {
    ScriptParser::default().parse_list_factory_signature(source)
}

/// [`ScriptParser::parse_single_expression`] with [`ParserConfig::default`].
pub fn parse_single_expression(source: &str) -> ParseOutput {
    ScriptParser::default().parse_single_expression(source)
}

/// [`ScriptParser::parse_statement_block_at`] with [`ParserConfig::default`].
pub fn parse_statement_block_at(source: &str, block: Span) -> ParseOutput {
    ScriptParser::default().parse_statement_block_at(source, block)
}

/// [`ScriptParser::parse_variable_initializer`] with [`ParserConfig::default`].
pub fn parse_variable_initializer(source: &str, init: Span) -> ParseOutput {
    ScriptParser::default().parse_variable_initializer(source, init)
}

/// [`ScriptParser::parse_data_type`] with [`ParserConfig::default`].
pub fn parse_data_type(source: &str, is_return_type: bool) -> ParseOutput {
    ScriptParser::default().parse_data_type(source, is_return_type)
}

/// [`ScriptParser::parse_template_decl`] with [`ParserConfig::default`].
pub fn parse_template_decl(source: &str) -> ParseOutput {
    ScriptParser::default().parse_template_decl(source)
}

/// [`ScriptParser::parse_property_declaration`] with [`ParserConfig::default`].
pub fn parse_property_declaration(source: &str) -> ParseOutput {
    ScriptParser::default().parse_property_declaration(source)
}
