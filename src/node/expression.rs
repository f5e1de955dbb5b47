use core::fmt;

use alloc::{boxed::Box, collections::BTreeSet, string::{String, ToString}, vec, vec::Vec};

use crate::{error::ConvertError, value::Value};

/// A semantic expression tree. Unlike the [syntax tree](crate::latex::syntax::SyntaxNode), there
/// are no grouping nodes; the structure of the tree alone determines the order of operations.
///
/// `Equal` and `And` are propositions - they evaluate to a `Bool` rather than a `Real`. Every other
/// variant is an arithmetic expression. Each node owns its children, so trees never share or
/// cycle, and the derived `PartialEq` is deep structural equality.
#[derive(PartialEq, Debug, Clone)]
pub enum Expression {
    Constant(Value),
    Variable(String),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Power(Box<Expression>, Box<Expression>),
    /// Radicand, then degree.
    NthRoot(Box<Expression>, Box<Expression>),
    Equal(Box<Expression>, Box<Expression>),
    And(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn constant(value: Value) -> Expression {
        Expression::Constant(value)
    }

    pub fn real(value: f64) -> Expression {
        Expression::Constant(Value::Real(value))
    }

    pub fn variable(name: impl Into<String>) -> Expression {
        Expression::Variable(name.into())
    }

    pub fn add(left: Expression, right: Expression) -> Expression {
        Expression::Add(Box::new(left), Box::new(right))
    }

    pub fn sub(left: Expression, right: Expression) -> Expression {
        Expression::Sub(Box::new(left), Box::new(right))
    }

    pub fn mul(left: Expression, right: Expression) -> Expression {
        Expression::Mul(Box::new(left), Box::new(right))
    }

    pub fn div(left: Expression, right: Expression) -> Expression {
        Expression::Div(Box::new(left), Box::new(right))
    }

    pub fn power(base: Expression, exponent: Expression) -> Expression {
        Expression::Power(Box::new(base), Box::new(exponent))
    }

    /// A square root, i.e. a root of degree 2.
    pub fn sqrt(radicand: Expression) -> Expression {
        Self::nth_root(radicand, Expression::real(2.0))
    }

    pub fn nth_root(radicand: Expression, degree: Expression) -> Expression {
        Expression::NthRoot(Box::new(radicand), Box::new(degree))
    }

    pub fn equal(left: Expression, right: Expression) -> Expression {
        Expression::Equal(Box::new(left), Box::new(right))
    }

    /// Builds a conjunction of two propositions, or returns an error if either side is not a
    /// proposition.
    pub fn and(left: Expression, right: Expression) -> Result<Expression, ConvertError> {
        for side in [&left, &right] {
            if !side.is_proposition() {
                return Err(ConvertError::NotAProposition { found: side.node_type() });
            }
        }

        Ok(Expression::And(Box::new(left), Box::new(right)))
    }

    /// Returns true if this node evaluates to a `Bool`, i.e. it is `Equal` or `And`.
    pub fn is_proposition(&self) -> bool {
        matches!(self, Expression::Equal(_, _) | Expression::And(_, _))
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Constant(_) | Expression::Variable(_))
    }

    /// The name of this node's variant, for use in error messages.
    pub fn node_type(&self) -> &'static str {
        match self {
            Expression::Constant(_) => "Constant",
            Expression::Variable(_) => "Variable",
            Expression::Add(_, _) => "Add",
            Expression::Sub(_, _) => "Sub",
            Expression::Mul(_, _) => "Mul",
            Expression::Div(_, _) => "Div",
            Expression::Power(_, _) => "Power",
            Expression::NthRoot(_, _) => "NthRoot",
            Expression::Equal(_, _) => "Equal",
            Expression::And(_, _) => "And",
        }
    }

    /// If this is a real constant, returns its value.
    pub fn as_real(&self) -> Option<f64> {
        if let Expression::Constant(Value::Real(r)) = self {
            Some(*r)
        } else {
            None
        }
    }

    /// The direct children of this node, left to right. For roots this is the radicand followed by
    /// the degree.
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Constant(_) | Expression::Variable(_) => vec![],

            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r)
            | Expression::Power(l, r)
            | Expression::NthRoot(l, r)
            | Expression::Equal(l, r)
            | Expression::And(l, r)
                => vec![l.as_ref(), r.as_ref()],
        }
    }

    /// Calls `visit` on this node and then on every descendant, in pre-order.
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a Expression)) {
        // Explicit stack so that long left-leaning chains can't overflow
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            visit(node);
            stack.extend(node.children().into_iter().rev());
        }
    }

    /// The names of every variable which appears in this tree.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut result = BTreeSet::new();
        self.walk(|node| {
            if let Expression::Variable(name) = node {
                result.insert(name.clone());
            }
        });
        result
    }

    /// Returns true if this tree contains no variables.
    pub fn is_closed(&self) -> bool {
        let mut closed = true;
        self.walk(|node| if matches!(node, Expression::Variable(_)) { closed = false });
        closed
    }

    /// Binding strength used when printing. Leaves and roots bind tightest, since a root's
    /// arguments are always braced.
    fn precedence(&self) -> u8 {
        match self {
            Expression::And(_, _) => 0,
            Expression::Equal(_, _) => 1,
            Expression::Add(_, _) | Expression::Sub(_, _) => 2,
            Expression::Mul(_, _) | Expression::Div(_, _) => 3,
            Expression::Power(_, _) => 4,
            Expression::Constant(_) | Expression::Variable(_) | Expression::NthRoot(_, _) => 5,
        }
    }

    /// Writes `child`, wrapped in parentheses if `parens` is true.
    fn fmt_child(f: &mut fmt::Formatter, child: &Expression, parens: bool) -> fmt::Result {
        if parens {
            write!(f, "({})", child)
        } else {
            write!(f, "{}", child)
        }
    }

    fn fmt_binop(&self, f: &mut fmt::Formatter, op: &str, left: &Expression, right: &Expression) -> fmt::Result {
        // We need to add parentheses around:
        //   - operands which bind more loosely than this operator, e.g. (3+2)*4
        //   - operands which go against associativity: right side for left-associative
        //     operators, e.g. 3-(3-2), and left side for power, e.g. (2^3)^2
        let here = self.precedence();
        let right_assoc = matches!(self, Expression::Power(_, _));

        let left_parens = left.precedence() < here || (right_assoc && left.precedence() == here);
        let right_parens = right.precedence() < here || (!right_assoc && right.precedence() == here);

        Self::fmt_child(f, left, left_parens)?;
        write!(f, " {} ", op)?;
        Self::fmt_child(f, right, right_parens)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Constant(v) => write!(f, "{}", v),
            Expression::Variable(name) => write!(f, "{}", name),

            Expression::Add(l, r) => self.fmt_binop(f, "+", l, r),
            Expression::Sub(l, r) => self.fmt_binop(f, "-", l, r),
            Expression::Mul(l, r) => self.fmt_binop(f, "*", l, r),
            Expression::Div(l, r) => self.fmt_binop(f, "/", l, r),
            Expression::Power(l, r) => self.fmt_binop(f, "^", l, r),
            Expression::Equal(l, r) => self.fmt_binop(f, "=", l, r),
            Expression::And(l, r) => self.fmt_binop(f, "and", l, r),

            Expression::NthRoot(radicand, degree) => {
                if degree.as_real() == Some(2.0) {
                    write!(f, "\\sqrt{{{}}}", radicand)
                } else {
                    write!(f, "\\sqrt[{}]{{{}}}", degree, radicand)
                }
            }
        }
    }
}

impl From<f64> for Expression {
    fn from(r: f64) -> Self {
        Expression::real(r)
    }
}

impl From<char> for Expression {
    fn from(c: char) -> Self {
        Expression::Variable(c.to_string())
    }
}
