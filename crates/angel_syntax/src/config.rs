//! Parser configuration.
//!
//! ## Examples
//! ```rust
//! use angel_syntax::ParserConfig;
//!
//! let config = ParserConfig::default()
//!     .with_template_type("dictionary")
//!     .with_alternate_named_arg_syntax(false);
//! assert!(config.is_template_type("array"));
//! assert!(config.is_template_type("dictionary"));
//! ```

/// Settings shared by every parse a [`crate::ScriptParser`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Names that take a `<...>` argument list when used as types.
    pub template_types: Vec<String>,
    /// Accept `class @Foo {}` as a class whose instances are always handles.
    pub allow_implicit_handle_types: bool,
    /// Accept `f(name = value)` as a named argument, with a warning.
    pub alternate_named_arg_syntax: bool,
    /// Deepest nesting of expressions, statements, types and initialization lists before parsing gives up.
    pub max_nesting_depth: usize,
}

pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            template_types: vec![String::from("array")],
            allow_implicit_handle_types: true,
            alternate_named_arg_syntax: true,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole template type set.
    pub fn with_template_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template_types = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add one template type name.
    pub fn with_template_type(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.is_template_type(&name) {
            self.template_types.push(name);
        }
        self
    }

    pub fn with_implicit_handle_types(mut self, allow: bool) -> Self {
        self.allow_implicit_handle_types = allow;
        self
    }

    pub fn with_alternate_named_arg_syntax(mut self, allow: bool) -> Self {
        self.alternate_named_arg_syntax = allow;
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn is_template_type(&self, name: &str) -> bool {
        self.template_types.iter().any(|t| t == name)
    }
}
