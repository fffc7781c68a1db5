#![no_main]

use angel_syntax::lexer::tokenize;
use angel_syntax::{ParserConfig, ScriptParser, Span};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = tokenize(s);

        let parser = ScriptParser::new(ParserConfig::new().with_max_nesting_depth(64));
        let script = parser.parse_full_script(s);

        // Feed every captured body back through the deep parser, as an editor would.
        for node in script.root.descendants() {
            if let Some(span) = node.span() {
                match node.kind() {
                    angel_syntax::NodeKind::StatementBlock => {
                        let _ = parser.parse_statement_block_at(s, span);
                    }
                    angel_syntax::NodeKind::Assignment => {
                        let _ = parser.parse_variable_initializer(s, span);
                    }
                    _ => {}
                }
            }
        }

        let whole = Span::new(0, s.len());
        let _ = parser.parse_function_signature(s);
        let _ = parser.parse_list_factory_signature(s);
        let _ = parser.parse_single_expression(s);
        let _ = parser.parse_variable_initializer(s, whole);
        let _ = parser.parse_data_type(s, true);
        let _ = parser.parse_template_decl(s);
        let _ = parser.parse_property_declaration(s);
    }
});
