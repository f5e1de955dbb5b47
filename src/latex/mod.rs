//! The LaTeX-like input notation, and the pipeline which turns it into an
//! [Expression](crate::Expression).
//!
//! Text goes through three stages:
//!   1. The [lexer] splits it into tokens. It never fails; unknown input becomes `Illegal` tokens.
//!   2. The [parser] builds a [syntax tree](syntax::SyntaxNode) by precedence climbing, collecting
//!      every error with its source position.
//!   3. The [converter] lowers the syntax tree into an expression tree.
//!
//! [parse] runs all three. The stages are public too, for callers which want to look at the
//! tokens or the syntax tree.

pub mod lexer;
pub mod syntax;
pub mod parser;
pub mod converter;

use crate::{
    error::{Error, ParseErrors},
    evaluate::{Evaluable, EvaluationSettings},
    node::expression::Expression,
    value::Value,
};

use self::{parser::{Parser, ParserSettings}, syntax::SyntaxNode};

/// Parses `text` into a syntax tree, without converting it.
pub fn parse_syntax(text: &str, settings: &ParserSettings) -> Result<SyntaxNode, ParseErrors> {
    Parser::new(text, *settings).parse()
}

/// Parses `text` into an expression tree with the given settings.
pub fn parse_with(text: &str, settings: &ParserSettings) -> Result<Expression, Error> {
    let syntax = parse_syntax(text, settings)?;
    Ok(converter::convert(&syntax)?)
}

/// Parses `text` into an expression tree.
///
/// ```
/// use mathtree::{parse, Expression};
///
/// assert_eq!(
///     parse("2 + x").unwrap(),
///     Expression::add(Expression::real(2.0), Expression::variable("x")),
/// );
/// assert!(parse("2 +").is_err());
/// ```
pub fn parse(text: &str) -> Result<Expression, Error> {
    parse_with(text, &ParserSettings::default())
}

/// Parses and evaluates `text` with default settings. Fails if any stage fails, including when the
/// expression contains variables.
pub fn parse_and_eval(text: &str) -> Result<Value, Error> {
    let expr = parse(text)?;
    Ok(expr.evaluate(&EvaluationSettings::default())?)
}

/// Like [parse_and_eval], but also fails if the result is a `Bool`.
pub fn parse_and_eval_real(text: &str) -> Result<f64, Error> {
    match parse_and_eval(text)? {
        Value::Real(r) => Ok(r),
        other => Err(Error::NotANumber(other)),
    }
}
