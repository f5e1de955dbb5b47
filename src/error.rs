//! Error types for each stage of the pipeline.
//!
//! Nothing here is fatal: every failure is returned to the immediate caller. Parse errors carry the
//! source position of the token which caused them.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::value::Value;

/// A single diagnostic produced while parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at position {position}: {literal}")]
    UnexpectedToken { position: usize, literal: String },

    #[error("illegal token at position {position}: {literal}")]
    IllegalToken { position: usize, literal: String },

    #[error("expected '{expected}' at position {position}")]
    ExpectedDelimiter { expected: char, position: usize },

    #[error("expected '{{' after \\{command} at position {position}")]
    MissingArgument { command: String, position: usize },

    #[error("unexpected trailing input at position {position}: {literal}")]
    TrailingInput { position: usize, literal: String },

    #[error("expression at position {position} is nested deeper than {max_depth} levels")]
    TooDeep { max_depth: usize, position: usize },
}

/// Every diagnostic collected during one parse. A parse which produced any of these never returns
/// a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    /// The first error encountered, which is usually the one worth showing.
    pub fn first(&self) -> Option<&ParseError> {
        self.0.first()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "parse errors: ")?;
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl core::error::Error for ParseErrors {}

/// Raised when a syntax tree cannot be turned into an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("unknown command: \\{0}")]
    UnknownCommand(String),

    #[error("unknown binary operator: {0}")]
    UnknownOperator(String),

    #[error("{role} operand must be an Expression, got {found}")]
    NotAnExpression { role: &'static str, found: &'static str },

    #[error("operand of a conjunction must be a Proposition, got {found}")]
    NotAProposition { found: &'static str },

    #[error("root degree must be a constant, got {found}")]
    RootDegreeNotConstant { found: &'static str },
}

/// Reasons an evaluation can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathsError {
    #[error("variable {0} has no value")]
    UnresolvedVariable(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("root of degree zero")]
    ZeroRootDegree,

    #[error("even root of a negative number")]
    EvenRootOfNegative,

    #[error("non-integer root of a negative number")]
    NonIntegerRootOfNegative,

    #[error("result is not a real number")]
    Domain,

    #[error("operands of {operation} have the wrong type")]
    TypeMismatch { operation: &'static str },

    #[error("expression is nested deeper than {max_depth} levels")]
    TooDeep { max_depth: usize },
}

/// Raised by the monomial and polynomial analysis functions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("expression is not a monomial")]
    NotMonomial,

    #[error("exponent does not evaluate to a constant")]
    NonConstantExponent,

    #[error("exponent {0} is not a non-negative integer")]
    UnsupportedExponent(f64),

    #[error("degree does not fit in a u32")]
    DegreeOverflow,

    #[error("coefficient could not be evaluated: {0}")]
    Evaluation(#[from] MathsError),
}

/// Top-level error returned by [parse](crate::parse) and [parse_and_eval](crate::parse_and_eval).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseErrors),

    #[error("conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("evaluation failed: {0}")]
    Evaluate(#[from] MathsError),

    #[error("result is not a number: {0}")]
    NotANumber(Value),
}
