//! Homogeneous syntax tree for AngelScript.
//!
//! Every construct is a [`SyntaxNode`] tagged with a [`NodeKind`]. What "child N" means is a per-kind convention
//! documented on the grammar rules (for example a `Function` holds its return type, type modifier, name, parameter
//! list and body in that order). Keeping one uniform node shape makes generic walks (dumps, span checks, editor
//! outlines) trivial.
//!
//! ## Notes
//! - A node's span is always the union of its anchoring token and the spans of all its children. Appending a child
//!   widens the parent, and nothing except [`SyntaxNode::rollback`] ever narrows it.
//! - Speculative appends are undone with [`SyntaxNode::checkpoint`] / [`SyntaxNode::rollback`]; children are owned
//!   by value, so there are no parent or sibling links to repair.

use std::fmt;

use crate::lexer::{Token, TokenKind};

/// Source location span (byte offsets, end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span of `len` bytes starting at `start`.
    pub fn at(start: usize, len: usize) -> Self {
        Self { start, end: start + len }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Syntactic category of a [`SyntaxNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Undefined,
    Script,
    Function,
    Constant,
    DataType,
    Identifier,
    ParameterList,
    StatementBlock,
    Declaration,
    ExpressionStatement,
    Expression,
    ExprTerm,
    FunctionCall,
    ConstructCall,
    ArgList,
    ExprPreOp,
    ExprPostOp,
    ExprOperator,
    ExprValue,
    Break,
    Continue,
    Return,
    Assignment,
    Condition,
    If,
    For,
    While,
    DoWhile,
    Switch,
    Case,
    Import,
    Class,
    Interface,
    Enum,
    Typedef,
    Cast,
    VariableAccess,
    FuncDef,
    VirtualProperty,
    Namespace,
    Mixin,
    InitList,
    ListPattern,
    NamedArgument,
    Scope,
    TryCatch,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A saved child count and span, taken before a speculative append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    children: usize,
    span: Option<Span>,
}

/// One node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: NodeKind,
    token: Option<TokenKind>,
    span: Option<Span>,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create an empty structural node with no anchor and no span yet.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            token: None,
            span: None,
            children: Vec::new(),
        }
    }

    /// Create a node anchored on `token`.
    pub fn with_token(kind: NodeKind, token: Token) -> Self {
        let mut node = Self::new(kind);
        node.set_token(token);
        node
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Kind of the anchoring token, if this node was ever anchored.
    pub fn token(&self) -> Option<TokenKind> {
        self.token
    }

    /// Covered source range, `None` for a node that never saw a token.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Start offset, `0` for an unanchored node.
    pub fn position(&self) -> usize {
        self.span.map_or(0, |s| s.start)
    }

    pub fn length(&self) -> usize {
        self.span.map_or(0, |s| s.len())
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&SyntaxNode> {
        self.children.get(index)
    }

    pub fn first_child(&self) -> Option<&SyntaxNode> {
        self.children.first()
    }

    pub fn last_child(&self) -> Option<&SyntaxNode> {
        self.children.last()
    }

    /// Source text covered by this node (empty when unanchored or out of range).
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span
            .and_then(|s| source.get(s.start..s.end))
            .unwrap_or("")
    }

    /// Depth-first, pre-order walk starting with `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Render an indented one-node-per-line dump.
    pub fn display<'a>(&'a self, source: &'a str) -> TreeDisplay<'a> {
        TreeDisplay { node: self, source }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Anchor the node on `token`: record its kind and widen the span over it.
    pub fn set_token(&mut self, token: Token) {
        self.token = Some(token.kind);
        self.widen(token.span);
    }

    /// Record an anchoring token kind without touching the span.
    pub fn set_token_kind(&mut self, kind: TokenKind) {
        self.token = Some(kind);
    }

    pub fn set_kind(&mut self, kind: NodeKind) {
        self.kind = kind;
    }

    /// Grow the span to cover `span`. A zero-width span at offset 0 carries no position and is ignored.
    pub fn widen(&mut self, span: Span) {
        if span == Span::default() {
            return;
        }
        self.span = Some(match self.span {
            Some(current) => current.merge(span),
            None => span,
        });
    }

    /// Append `child` and widen this node over it.
    pub fn append(&mut self, child: SyntaxNode) {
        if let Some(span) = child.span {
            self.widen(span);
        }
        self.children.push(child);
    }

    /// Remove and return the last child. The span is left as is.
    pub fn pop(&mut self) -> Option<SyntaxNode> {
        self.children.pop()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            children: self.children.len(),
            span: self.span,
        }
    }

    /// Detach every child appended since `checkpoint` and restore the span it recorded.
    ///
    /// ## Returns
    /// - The detached children, in their original order.
    pub fn rollback(&mut self, checkpoint: Checkpoint) -> Vec<SyntaxNode> {
        let detached = self.children.split_off(checkpoint.children.min(self.children.len()));
        self.span = checkpoint.span;
        detached
    }
}

/// Iterator returned by [`SyntaxNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Tree dump adapter returned by [`SyntaxNode::display`].
///
/// Each line is `Kind@start..end`, followed by the quoted source text for leaves.
pub struct TreeDisplay<'a> {
    node: &'a SyntaxNode,
    source: &'a str,
}

impl TreeDisplay<'_> {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: &SyntaxNode, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", node.kind, indent = depth * 2)?;
        if let Some(span) = node.span {
            write!(f, "@{}..{}", span.start, span.end)?;
            if node.children.is_empty() {
                write!(f, " {:?}", node.text(self.source))?;
            }
        }
        writeln!(f)?;
        for child in &node.children {
            self.write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.node, 0)
    }
}
