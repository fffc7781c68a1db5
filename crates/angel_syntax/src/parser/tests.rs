#[cfg(test)]
/// Parser unit tests.
///
/// These pin the tree shape of individual constructs and the recovery behaviour after syntax errors.
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> SyntaxNode {
        let output = parse_full_script(source);
        assert!(
            output.diagnostics.is_empty(),
            "expected a clean parse of {source:?}, got: {:?}",
            output.diagnostics.sorted()
        );
        output.root
    }

    fn kinds(node: &SyntaxNode) -> Vec<NodeKind> {
        node.children().iter().map(SyntaxNode::kind).collect()
    }

    fn error_texts(output: &ParseOutput) -> Vec<&str> {
        output.diagnostics.errors().iter().map(|d| d.text.as_str()).collect()
    }

    /// Deep-parse the body of the first top-level function.
    fn parse_first_body(source: &str) -> ParseOutput {
        let script = parse_ok(source);
        let function = script.first_child().expect("script should contain a function");
        let body = function.last_child().expect("function should have a body");
        assert_eq!(body.kind(), NodeKind::StatementBlock);
        parse_statement_block_at(source, body.span().expect("body should have a span"))
    }

    /// Deep-parse the initializer of the first top-level declaration.
    fn parse_first_initializer(source: &str) -> ParseOutput {
        let script = parse_ok(source);
        let decl = script.first_child().expect("script should contain a declaration");
        let init = decl.child(2).expect("declaration should have an initializer");
        parse_variable_initializer(source, init.span().expect("initializer should have a span"))
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    #[test]
    fn test_function_declaration_shape() {
        let source = "void main() { int x = 1; }";
        let script = parse_ok(source);
        let function = &script.children()[0];
        assert_eq!(
            kinds(function),
            vec![
                NodeKind::DataType,
                NodeKind::DataType,
                NodeKind::Identifier,
                NodeKind::ParameterList,
                NodeKind::StatementBlock
            ]
        );
        assert_eq!(function.child(2).map(|n| n.text(source)), Some("main"));
        assert_eq!(function.last_child().map(|n| n.text(source)), Some("{ int x = 1; }"));
        assert!(function.last_child().is_some_and(|b| b.children().is_empty()), "body must stay superficial");
    }

    #[test]
    fn test_global_variable_declaration_captures_initializer() {
        let source = "int answer = 6 * 7;";
        let script = parse_ok(source);
        let decl = &script.children()[0];
        assert_eq!(decl.kind(), NodeKind::Declaration);
        assert_eq!(kinds(decl), vec![NodeKind::DataType, NodeKind::Identifier, NodeKind::Assignment]);
        assert_eq!(decl.child(2).map(|n| n.text(source)), Some("= 6 * 7"));
        assert_eq!(decl.text(source), source);
    }

    #[test]
    fn test_parameters_with_defaults_and_modifiers() {
        let source = "void draw(const Point &in at, int w = max(1, 2), float scale = 1.0f) {}";
        let script = parse_ok(source);
        let params = script.children()[0].child(3).expect("parameter list");
        assert_eq!(
            kinds(params),
            vec![
                NodeKind::DataType,
                NodeKind::DataType,
                NodeKind::Identifier,
                NodeKind::DataType,
                NodeKind::DataType,
                NodeKind::Identifier,
                NodeKind::Expression,
                NodeKind::DataType,
                NodeKind::DataType,
                NodeKind::Identifier,
                NodeKind::Expression,
            ]
        );
        assert_eq!(params.child(6).map(|n| n.text(source)), Some("max(1, 2)"));
        assert_eq!(params.child(1).map(|n| n.children().len()), Some(2), "`&in` is two modifier tokens");
    }

    #[test]
    fn test_void_parameter_list_is_empty() {
        let script = parse_ok("int f(void) { return 0; }");
        let params = script.children()[0].child(3).expect("parameter list");
        assert!(params.children().is_empty());
    }

    #[test]
    fn test_namespace_chain() {
        let script = parse_ok("namespace a::b { int x; }");
        assert_eq!(kinds(&script), vec![NodeKind::Namespace]);
        let outer = &script.children()[0];
        assert_eq!(kinds(outer), vec![NodeKind::Identifier, NodeKind::Script]);
        let inner = &outer.children()[1].children()[0];
        assert_eq!(inner.kind(), NodeKind::Namespace);
        assert_eq!(kinds(inner), vec![NodeKind::Identifier, NodeKind::Script]);
        assert_eq!(kinds(&inner.children()[1]), vec![NodeKind::Declaration]);
    }

    #[test]
    fn test_unclosed_namespace_reports_context() {
        let output = parse_full_script("namespace a { int x;");
        assert_eq!(error_texts(&output), vec!["Unexpected end of file"]);
        assert_eq!(output.diagnostics.infos()[0].text, "While parsing namespace");
    }

    #[test]
    fn test_enum_with_values() {
        let source = "enum Color { Red, Green = 2, Blue }";
        let script = parse_ok(source);
        let color = &script.children()[0];
        assert_eq!(color.kind(), NodeKind::Enum);
        assert_eq!(
            kinds(color),
            vec![
                NodeKind::DataType,
                NodeKind::Identifier,
                NodeKind::Identifier,
                NodeKind::Assignment,
                NodeKind::Identifier
            ]
        );
        assert_eq!(color.child(3).map(|n| n.text(source)), Some("= 2"));
        assert_eq!(color.text(source), source);
    }

    #[test]
    fn test_forward_declarations() {
        let script = parse_ok("enum E; class C; interface I;");
        assert_eq!(kinds(&script), vec![NodeKind::Enum, NodeKind::Class, NodeKind::Interface]);
    }

    #[test]
    fn test_typedef_requires_primitive() {
        let script = parse_ok("typedef double real;");
        assert_eq!(kinds(&script.children()[0]), vec![NodeKind::DataType, NodeKind::Identifier]);

        let output = parse_full_script("typedef Foo bar;");
        assert_eq!(error_texts(&output), vec!["Unexpected token '<identifier>'"]);
    }

    #[test]
    fn test_funcdef_and_import() {
        let source = "funcdef bool Callback(int, int);\nimport void log(const string &in) from \"core\";";
        let script = parse_ok(source);
        assert_eq!(kinds(&script), vec![NodeKind::FuncDef, NodeKind::Import]);
        assert_eq!(
            kinds(&script.children()[0]),
            vec![NodeKind::DataType, NodeKind::DataType, NodeKind::Identifier, NodeKind::ParameterList]
        );
        let import = &script.children()[1];
        assert_eq!(kinds(import), vec![NodeKind::Function, NodeKind::Constant]);
        assert_eq!(import.child(1).map(|n| n.text(source)), Some("\"core\""));
    }

    #[test]
    fn test_class_members() {
        let source = "shared class Foo : Base, ns::Other {\n\
                      Foo() {}\n\
                      ~Foo() {}\n\
                      private int count = 0;\n\
                      int get_count() const override { return count; }\n\
                      int size { get const { return 1; } set {} }\n\
                      funcdef void Handler();\n\
                      }";
        let script = parse_ok(source);
        let class = &script.children()[0];
        assert_eq!(class.kind(), NodeKind::Class);
        assert_eq!(
            kinds(class),
            vec![
                NodeKind::Identifier,
                NodeKind::Identifier,
                NodeKind::Identifier,
                NodeKind::Identifier,
                NodeKind::Function,
                NodeKind::Function,
                NodeKind::Declaration,
                NodeKind::Function,
                NodeKind::VirtualProperty,
                NodeKind::FuncDef,
            ]
        );
        assert_eq!(class.child(0).map(|n| n.text(source)), Some("shared"));
        assert_eq!(class.child(3).map(|n| n.children().len()), Some(2), "scoped base keeps its scope");

        let destructor = &class.children()[5];
        assert_eq!(
            kinds(destructor),
            vec![NodeKind::Undefined, NodeKind::Identifier, NodeKind::ParameterList, NodeKind::StatementBlock]
        );

        let property = &class.children()[8];
        assert_eq!(
            kinds(property),
            vec![
                NodeKind::DataType,
                NodeKind::DataType,
                NodeKind::Identifier,
                NodeKind::VirtualProperty,
                NodeKind::VirtualProperty
            ]
        );
        assert_eq!(kinds(&property.children()[3]), vec![NodeKind::Identifier, NodeKind::Undefined, NodeKind::StatementBlock]);
    }

    #[test]
    fn test_implicit_handle_class_follows_config() {
        let script = parse_ok("class @Node {}");
        assert_eq!(script.children()[0].token(), Some(HANDLE));

        let strict = ScriptParser::new(ParserConfig::new().with_implicit_handle_types(false));
        let output = strict.parse_full_script("class @Node {}");
        assert_eq!(error_texts(&output), vec!["Expected identifier", "Instead found '@'"]);
    }

    #[test]
    fn test_interface_and_mixin() {
        let source = "interface IShape : IBase { float area() const; int sides { get; } }\nmixin class M { int m; }";
        let script = parse_ok(source);
        assert_eq!(kinds(&script), vec![NodeKind::Interface, NodeKind::Mixin]);
        assert_eq!(
            kinds(&script.children()[0]),
            vec![NodeKind::Identifier, NodeKind::Identifier, NodeKind::Function, NodeKind::VirtualProperty]
        );
        assert_eq!(kinds(&script.children()[1]), vec![NodeKind::Class]);
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    #[test]
    fn test_script_recovers_after_broken_declaration() {
        let output = parse_full_script("x y z;\nint ok = 1;");
        assert_eq!(error_texts(&output), vec!["Expected '('", "Instead found identifier 'z'"]);
        assert_eq!(kinds(&output.root), vec![NodeKind::Function, NodeKind::Declaration]);
    }

    #[test]
    fn test_class_body_recovers_after_broken_initializer() {
        let output = parse_full_script("class C { int a = ; void f(){} }");
        assert!(output.has_errors());
        assert_eq!(error_texts(&output)[0], "Expected expression value");
        let class = &output.root.children()[0];
        assert!(
            class.children().iter().any(|n| n.kind() == NodeKind::Function),
            "method after the broken property must still be parsed: {:?}",
            kinds(class)
        );
    }

    #[test]
    fn test_nonterminated_string_is_single_error() {
        let output = parse_full_script("\"abc");
        assert_eq!(error_texts(&output), vec!["Non-terminated string literal"]);
        let error = &output.diagnostics.errors()[0];
        assert_eq!((error.row, error.column), (1, 1));
    }

    #[test]
    fn test_unterminated_body_reports_context_and_terminates() {
        let output = parse_full_script("void f() {");
        assert_eq!(error_texts(&output), vec!["Unexpected end of file"]);
        assert_eq!(output.diagnostics.infos()[0].text, "While parsing statement block");
    }

    #[test]
    fn test_unexpected_top_level_token() {
        let output = parse_full_script(")");
        assert_eq!(error_texts(&output), vec!["Unexpected token ')'"]);
    }

    // ========================================================================
    // Statements
    // ========================================================================

    #[test]
    fn test_statement_block_deep_parse() {
        let output = parse_first_body("void main() { int x = 1; x++; }");
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        assert_eq!(kinds(&output.root), vec![NodeKind::Declaration, NodeKind::ExpressionStatement]);
    }

    #[test]
    fn test_control_flow_statements() {
        let source = "void f() {\n\
                      if (a) b(); else { c(); }\n\
                      for (int i = 0; i < 10; i++, j--) {}\n\
                      while (true) break;\n\
                      do { continue; } while (x);\n\
                      try { risky(); } catch { }\n\
                      return;\n\
                      ;\n\
                      }";
        let output = parse_first_body(source);
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        assert_eq!(
            kinds(&output.root),
            vec![
                NodeKind::If,
                NodeKind::For,
                NodeKind::While,
                NodeKind::DoWhile,
                NodeKind::TryCatch,
                NodeKind::Return,
                NodeKind::ExpressionStatement,
            ]
        );

        let if_node = &output.root.children()[0];
        assert_eq!(
            kinds(if_node),
            vec![NodeKind::Assignment, NodeKind::ExpressionStatement, NodeKind::StatementBlock]
        );

        let for_node = &output.root.children()[1];
        assert_eq!(
            kinds(for_node),
            vec![
                NodeKind::Declaration,
                NodeKind::ExpressionStatement,
                NodeKind::ExpressionStatement,
                NodeKind::ExpressionStatement,
                NodeKind::StatementBlock
            ]
        );
    }

    #[test]
    fn test_switch_cases() {
        let output = parse_first_body("void f() { switch (x) { case 1: y(); break; default: z(); } }");
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        let switch = &output.root.children()[0];
        assert_eq!(kinds(switch), vec![NodeKind::Assignment, NodeKind::Case, NodeKind::Case]);
        assert_eq!(
            kinds(&switch.children()[1]),
            vec![NodeKind::Expression, NodeKind::ExpressionStatement, NodeKind::Break]
        );
        assert_eq!(kinds(&switch.children()[2]), vec![NodeKind::ExpressionStatement]);
    }

    #[test]
    fn test_declaration_not_allowed_as_sub_statement() {
        let output = parse_first_body("void f() { if (a) int x = 1; done(); }");
        assert_eq!(error_texts(&output), vec!["Unexpected variable declaration"]);
        assert_eq!(
            kinds(&output.root),
            vec![NodeKind::If, NodeKind::ExpressionStatement],
            "block must resume after the broken statement"
        );
    }

    #[test]
    fn test_block_hitting_end_of_input() {
        let output = parse_statement_block_at("{ a(); ", Span::new(0, 1));
        assert_eq!(
            error_texts(&output),
            vec!["Expected expression value", "Instead found '<end of file>'", "Unexpected end of file"]
        );
        assert_eq!(output.diagnostics.infos()[0].text, "While parsing statement block");
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    #[test]
    fn test_binary_expression_dump() {
        let output = parse_single_expression("a + 1");
        assert!(output.diagnostics.is_empty());
        insta::assert_snapshot!(output.root.display("a + 1").to_string(), @r###"
        Expression@0..5
          ExprTerm@0..1
            ExprValue@0..1
              VariableAccess@0..1
                Identifier@0..1 "a"
          ExprOperator@2..3 "+"
          ExprTerm@4..5
            ExprValue@4..5
              Constant@4..5 "1"
        "###);
    }

    #[test]
    fn test_initializer_deep_parse_chain() {
        let output = parse_first_initializer("int answer = 42;");
        assert!(output.diagnostics.is_empty());
        let chain: Vec<NodeKind> = output.root.descendants().map(SyntaxNode::kind).collect();
        assert_eq!(
            chain,
            vec![
                NodeKind::Assignment,
                NodeKind::Condition,
                NodeKind::Expression,
                NodeKind::ExprTerm,
                NodeKind::ExprValue,
                NodeKind::Constant
            ]
        );
        assert_eq!(output.root.descendants().last().map(|n| n.text("int answer = 42;")), Some("42"));
    }

    #[test]
    fn test_ternary_condition() {
        let output = parse_first_initializer("int v = a ? b : c;");
        assert!(output.diagnostics.is_empty());
        let condition = &output.root.children()[0];
        assert_eq!(kinds(condition), vec![NodeKind::Expression, NodeKind::Assignment, NodeKind::Assignment]);
    }

    #[test]
    fn test_constructor_style_initializer() {
        let output = parse_first_initializer("Point origin(0, 0);");
        assert!(output.diagnostics.is_empty());
        assert_eq!(output.root.kind(), NodeKind::ArgList);
        assert_eq!(kinds(&output.root), vec![NodeKind::Assignment, NodeKind::Assignment]);
    }

    #[test]
    fn test_init_list_empty_slots() {
        let source = "int[] a = {1, , 2};";
        let output = parse_first_initializer(source);
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        assert_eq!(output.root.kind(), NodeKind::InitList);
        assert_eq!(kinds(&output.root), vec![NodeKind::Assignment, NodeKind::Undefined, NodeKind::Assignment]);
        assert_eq!(output.root.children()[1].span(), Some(Span::new(14, 15)));
    }

    #[test]
    fn test_named_arguments() {
        let output = parse_single_expression("foo(x: 1)");
        assert!(output.diagnostics.is_empty());
        let call = output
            .root
            .descendants()
            .find(|n| n.kind() == NodeKind::FunctionCall)
            .expect("function call");
        let args = call.last_child().expect("argument list");
        assert_eq!(kinds(args), vec![NodeKind::NamedArgument]);
        assert_eq!(kinds(&args.children()[0]), vec![NodeKind::Identifier, NodeKind::Assignment]);
    }

    #[test]
    fn test_legacy_named_argument_warns() {
        let output = parse_single_expression("foo(x = 1)");
        assert!(!output.has_errors());
        assert_eq!(output.diagnostics.warnings().len(), 1);
        assert_eq!(output.diagnostics.warnings()[0].text, "Detected named argument with old syntax");
        assert!(output.root.descendants().any(|n| n.kind() == NodeKind::NamedArgument));

        let strict = ScriptParser::new(ParserConfig::new().with_alternate_named_arg_syntax(false));
        let output = strict.parse_single_expression("foo(x = 1)");
        assert!(output.diagnostics.is_empty());
        assert!(!output.root.descendants().any(|n| n.kind() == NodeKind::NamedArgument));
        let assign = output
            .root
            .descendants()
            .find(|n| n.kind() == NodeKind::ArgList)
            .and_then(SyntaxNode::first_child)
            .expect("argument");
        assert_eq!(kinds(assign), vec![NodeKind::Condition, NodeKind::ExprOperator, NodeKind::Assignment]);
    }

    #[test]
    fn test_post_operators() {
        let output = parse_single_expression("obj.method(1).field[2, 3]++");
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        let term = &output.root.children()[0];
        assert_eq!(
            kinds(term),
            vec![
                NodeKind::ExprValue,
                NodeKind::ExprPostOp,
                NodeKind::ExprPostOp,
                NodeKind::ExprPostOp,
                NodeKind::ExprPostOp
            ]
        );
        assert_eq!(kinds(&term.children()[1]), vec![NodeKind::FunctionCall]);
        assert_eq!(kinds(&term.children()[2]), vec![NodeKind::Identifier]);
        assert_eq!(kinds(&term.children()[3]), vec![NodeKind::ArgList]);
        assert!(term.children()[4].children().is_empty());
    }

    #[test]
    fn test_construct_calls() {
        for source in ["array<int>()", "int(3.5)", "Foo[]()"] {
            let output = parse_single_expression(source);
            assert!(output.diagnostics.is_empty(), "{source}: {:?}", output.diagnostics.sorted());
            let value = &output.root.children()[0].children()[0];
            assert_eq!(kinds(value), vec![NodeKind::ConstructCall], "{source}");
        }
    }

    #[test]
    fn test_scoped_function_call() {
        let output = parse_single_expression("::ns::helper(1)");
        assert!(output.diagnostics.is_empty());
        let call = &output.root.children()[0].children()[0].children()[0];
        assert_eq!(call.kind(), NodeKind::FunctionCall);
        assert_eq!(kinds(call), vec![NodeKind::Scope, NodeKind::Identifier, NodeKind::ArgList]);
    }

    #[test]
    fn test_lambdas() {
        let output = parse_single_expression("function(a, b) { return a + b; }");
        assert!(output.diagnostics.is_empty());
        let lambda = &output.root.children()[0].children()[0].children()[0];
        assert_eq!(lambda.kind(), NodeKind::Function);
        assert_eq!(kinds(lambda), vec![NodeKind::Identifier, NodeKind::Identifier, NodeKind::StatementBlock]);

        let output = parse_single_expression("function(int a) {}");
        assert!(output.diagnostics.is_empty());
        let lambda = &output.root.children()[0].children()[0].children()[0];
        assert_eq!(
            kinds(lambda),
            vec![NodeKind::DataType, NodeKind::DataType, NodeKind::Identifier, NodeKind::StatementBlock]
        );
    }

    #[test]
    fn test_cast_and_pre_operators() {
        let output = parse_single_expression("-cast<Foo>(bar)");
        assert!(output.diagnostics.is_empty());
        let term = &output.root.children()[0];
        assert_eq!(kinds(term), vec![NodeKind::ExprPreOp, NodeKind::ExprValue]);
        assert_eq!(kinds(&term.children()[1]), vec![NodeKind::Cast]);
        assert_eq!(kinds(&term.children()[1].children()[0]), vec![NodeKind::DataType, NodeKind::Assignment]);
    }

    #[test]
    fn test_adjacent_strings_are_collected() {
        let output = parse_single_expression("\"a\" \"b\"");
        assert!(output.diagnostics.is_empty());
        let constant = &output.root.children()[0].children()[0].children()[0];
        assert_eq!(constant.kind(), NodeKind::Constant);
        assert_eq!(kinds(constant), vec![NodeKind::Constant, NodeKind::Constant]);
    }

    #[test]
    fn test_missing_expression_value() {
        let output = parse_single_expression(";");
        assert_eq!(error_texts(&output), vec!["Expected expression value", "Instead found ';'"]);
    }

    #[test]
    fn test_nesting_limit() {
        let parser = ScriptParser::new(ParserConfig::new().with_max_nesting_depth(8));
        let source = format!("{}1{}", "(".repeat(10), ")".repeat(10));
        let output = parser.parse_single_expression(&source);
        assert_eq!(error_texts(&output), vec!["Maximum nesting depth exceeded"]);

        let output = parser.parse_single_expression("((1))");
        assert!(output.diagnostics.is_empty());
    }

    // ========================================================================
    // Types and signatures
    // ========================================================================

    #[test]
    fn test_nested_template_closing_split() {
        let output = parse_data_type("array<array<int>>", false);
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        let ty = &output.root.children()[0];
        assert_eq!(ty.span(), Some(Span::new(0, 17)));
        assert_eq!(kinds(ty), vec![NodeKind::DataType, NodeKind::DataType]);
        let inner = &ty.children()[1];
        assert_eq!(kinds(inner), vec![NodeKind::DataType, NodeKind::DataType]);
        assert_eq!(inner.span(), Some(Span::new(6, 16)));
    }

    #[test]
    fn test_handle_and_array_suffixes() {
        let output = parse_data_type("const Foo@ const[]", false);
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        let output = parse_data_type("Foo@ &", true);
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        assert_eq!(kinds(&output.root), vec![NodeKind::DataType, NodeKind::DataType]);
    }

    #[test]
    fn test_auto_only_where_allowed() {
        assert!(parse_data_type("auto", false).diagnostics.is_empty());
        let output = parse_function_signature("auto f()");
        assert_eq!(error_texts(&output), vec!["Auto is not allowed here"]);
    }

    #[test]
    fn test_function_signature_entry() {
        let output = parse_function_signature("void f(int a, ?&in b) const");
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        assert_eq!(output.root.kind(), NodeKind::Function);
        assert_eq!(output.root.last_child().map(SyntaxNode::kind), Some(NodeKind::Undefined));

        let output = parse_function_signature("void f() x y");
        assert_eq!(error_texts(&output), vec!["Expected '<end of file>'", "Instead found identifier 'x'"]);
    }

    #[test]
    fn test_list_factory_signature() {
        let output = parse_list_factory_signature("array<T>@ f(int&in) {repeat T}");
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        let pattern = output.root.last_child().expect("list pattern");
        assert_eq!(pattern.kind(), NodeKind::ListPattern);
        assert_eq!(kinds(pattern), vec![NodeKind::Identifier, NodeKind::DataType]);

        let output = parse_list_factory_signature("void f() {int, {repeat_same float}}");
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());

        let output = parse_list_factory_signature("void f() {int repeat}");
        assert!(output.has_errors());
    }

    #[test]
    fn test_template_decl() {
        let output = parse_template_decl("array<class T>");
        assert!(output.diagnostics.is_empty());
        assert_eq!(kinds(&output.root), vec![NodeKind::Identifier, NodeKind::Identifier]);

        let output = parse_template_decl("dictionary<K, V>");
        assert!(output.diagnostics.is_empty());
        assert_eq!(output.root.children().len(), 3);

        let output = parse_template_decl("dictionary<K V>");
        assert_eq!(error_texts(&output), vec!["Expected '>'", "Instead found identifier 'V'"]);
    }

    #[test]
    fn test_property_declaration() {
        let output = parse_property_declaration("const int &ns::value");
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        assert_eq!(
            kinds(&output.root),
            vec![NodeKind::DataType, NodeKind::Undefined, NodeKind::Scope, NodeKind::Identifier]
        );
    }

    #[test]
    fn test_template_scope() {
        let output = parse_data_type("array<int>::iterator", false);
        assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
        let ty = &output.root.children()[0];
        assert_eq!(kinds(ty), vec![NodeKind::Scope, NodeKind::DataType]);
        assert_eq!(
            kinds(&ty.children()[0]),
            vec![NodeKind::Identifier, NodeKind::DataType, NodeKind::Undefined]
        );
    }

    #[test]
    fn test_into_result() {
        assert!(parse_full_script("int x;").into_result().is_ok());
        let failure = parse_full_script("int x").into_result().expect_err("missing ';' must fail");
        assert_eq!(failure.to_string(), "parsing failed with 2 error(s)");
        assert_eq!(failure.root.kind(), NodeKind::Script);
    }
}
