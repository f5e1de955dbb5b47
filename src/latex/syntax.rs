//! The concrete syntax tree produced by the [parser](super::parser).
//!
//! This mirrors the surface grammar closely, including `Group` nodes for parentheses, and keeps the
//! token each node came from so that later stages can point at the source. It is consumed by the
//! [converter](super::converter) and then thrown away.

use alloc::{boxed::Box, string::String};

use super::lexer::Token;

#[derive(PartialEq, Debug, Clone)]
pub enum SyntaxNode {
    Number {
        value: f64,
        token: Token,
    },
    Variable {
        name: String,
        token: Token,
    },
    BinaryOp {
        left: Box<SyntaxNode>,
        operator: Token,
        right: Box<SyntaxNode>,
    },
    Group {
        inner: Box<SyntaxNode>,
        token: Token,
    },
    /// A command such as `\sqrt[3]{x}`; `optional` is the bracketed argument, if there was one.
    Command {
        name: String,
        argument: Box<SyntaxNode>,
        optional: Option<Box<SyntaxNode>>,
        token: Token,
    },
    /// Kept apart from `BinaryOp` so that chains like `a = b = c` can be recognised.
    Equal {
        left: Box<SyntaxNode>,
        operator: Token,
        right: Box<SyntaxNode>,
    },
}

impl SyntaxNode {
    /// The name of this node's variant, for use in error messages.
    pub fn node_type(&self) -> &'static str {
        match self {
            SyntaxNode::Number { .. } => "NumberNode",
            SyntaxNode::Variable { .. } => "VariableNode",
            SyntaxNode::BinaryOp { .. } => "BinaryOpNode",
            SyntaxNode::Group { .. } => "GroupNode",
            SyntaxNode::Command { .. } => "CommandNode",
            SyntaxNode::Equal { .. } => "EqualNode",
        }
    }

    /// The token which introduced this node - the operator for binary nodes.
    pub fn token(&self) -> &Token {
        match self {
            SyntaxNode::Number { token, .. }
            | SyntaxNode::Variable { token, .. }
            | SyntaxNode::Group { token, .. }
            | SyntaxNode::Command { token, .. } => token,

            SyntaxNode::BinaryOp { operator, .. } | SyntaxNode::Equal { operator, .. } => operator,
        }
    }

    /// Returns a clone of this node with every `Group` removed, since grouping is already encoded
    /// by the shape of the tree.
    pub fn ungrouped(&self) -> SyntaxNode {
        match self {
            SyntaxNode::Group { inner, .. } => inner.ungrouped(),

            SyntaxNode::BinaryOp { left, operator, right } => SyntaxNode::BinaryOp {
                left: Box::new(left.ungrouped()),
                operator: operator.clone(),
                right: Box::new(right.ungrouped()),
            },
            SyntaxNode::Equal { left, operator, right } => SyntaxNode::Equal {
                left: Box::new(left.ungrouped()),
                operator: operator.clone(),
                right: Box::new(right.ungrouped()),
            },
            SyntaxNode::Command { name, argument, optional, token } => SyntaxNode::Command {
                name: name.clone(),
                argument: Box::new(argument.ungrouped()),
                optional: optional.as_ref().map(|o| Box::new(o.ungrouped())),
                token: token.clone(),
            },

            SyntaxNode::Number { .. } | SyntaxNode::Variable { .. } => self.clone(),
        }
    }
}
