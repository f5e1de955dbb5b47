//! Lowers a [SyntaxNode] tree into an [Expression] tree.
//!
//! Grouping disappears, commands become the nodes they stand for, and chains of equalities are
//! rewritten into conjunctions of pairwise equalities.

use alloc::string::ToString;

use crate::{error::ConvertError, evaluate::Evaluable, node::expression::Expression};

use super::{lexer::{TokenKind, SQRT_COMMAND}, syntax::SyntaxNode};

/// Converts a syntax tree into an expression tree.
pub fn convert(node: &SyntaxNode) -> Result<Expression, ConvertError> {
    match node {
        SyntaxNode::Number { value, .. } => Ok(Expression::real(*value)),
        SyntaxNode::Variable { name, .. } => Ok(Expression::Variable(name.clone())),
        SyntaxNode::Group { inner, .. } => convert(inner),

        SyntaxNode::BinaryOp { left, operator, right } => {
            let left = convert_operand(left, "left")?;
            let right = convert_operand(right, "right")?;

            match operator.kind {
                TokenKind::Plus => Ok(Expression::add(left, right)),
                TokenKind::Minus => Ok(Expression::sub(left, right)),
                TokenKind::Star => Ok(Expression::mul(left, right)),
                TokenKind::Slash => Ok(Expression::div(left, right)),
                TokenKind::Caret => Ok(Expression::power(left, right)),

                _ => Err(ConvertError::UnknownOperator(operator.literal.clone())),
            }
        }

        SyntaxNode::Command { name, argument, optional, .. } => {
            if name != SQRT_COMMAND {
                return Err(ConvertError::UnknownCommand(name.to_string()))
            }

            let radicand = convert_operand(argument, "argument")?;
            let degree = match optional {
                Some(optional) => convert_degree(optional)?,
                None => Expression::real(2.0),
            };

            Ok(Expression::nth_root(radicand, degree))
        }

        SyntaxNode::Equal { left, right, .. } => {
            // The parser builds a = b = c as (a = b) = c. Rather than comparing a boolean with c,
            // this becomes (a = b) and (b = c)
            if let SyntaxNode::Equal { right: middle, .. } = left.as_ref() {
                let previous = convert(left)?;
                let middle = convert_operand(middle, "middle")?;
                let right = convert_operand(right, "right")?;

                log::trace!("desugaring chained equality onto {}", previous);
                return Expression::and(previous, Expression::equal(middle, right))
            }

            let left = convert_operand(left, "left")?;
            let right = convert_operand(right, "right")?;
            Ok(Expression::equal(left, right))
        }
    }
}

/// Converts a node which must be an arithmetic expression rather than a proposition.
fn convert_operand(node: &SyntaxNode, role: &'static str) -> Result<Expression, ConvertError> {
    let expr = convert(node)?;
    if expr.is_proposition() {
        return Err(ConvertError::NotAnExpression { role, found: expr.node_type() })
    }

    Ok(expr)
}

/// Converts the bracketed degree of a root. This has to end up as a real constant, so anything
/// without variables is folded down to its value.
fn convert_degree(node: &SyntaxNode) -> Result<Expression, ConvertError> {
    let degree = convert_operand(node, "degree")?;

    if degree.as_real().is_some() {
        return Ok(degree)
    }

    match degree.eval_real() {
        Some(value) if degree.is_closed() => Ok(Expression::real(value)),
        _ => Err(ConvertError::RootDegreeNotConstant { found: degree.node_type() }),
    }
}
