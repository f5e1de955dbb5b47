//! Numeric evaluation of [Expression] trees.

use num_integer::Integer;
use num_traits::{Float, ToPrimitive};

use crate::{
    error::MathsError,
    evaluate::{EvaluationSettings, Evaluable},
    value::Value,
};

use super::expression::Expression;

impl Evaluable for Expression {
    fn evaluate(&self, settings: &EvaluationSettings) -> Result<Value, MathsError> {
        let result = evaluate_at_depth(self, settings, 0);
        if let Err(e) = &result {
            log::trace!("evaluation of {} failed: {}", self, e);
        }
        result
    }
}

/// Evaluates both operands and requires that both are `Real`.
fn evaluate_reals(
    left: &Expression,
    right: &Expression,
    operation: &'static str,
    settings: &EvaluationSettings,
    depth: usize,
) -> Result<(f64, f64), MathsError> {
    let l = evaluate_at_depth(left, settings, depth)?;
    let r = evaluate_at_depth(right, settings, depth)?;

    match (l, r) {
        (Value::Real(l), Value::Real(r)) => Ok((l, r)),
        _ => Err(MathsError::TypeMismatch { operation }),
    }
}

fn evaluate_at_depth(node: &Expression, settings: &EvaluationSettings, depth: usize) -> Result<Value, MathsError> {
    if depth > settings.max_depth {
        return Err(MathsError::TooDeep { max_depth: settings.max_depth })
    }
    let depth = depth + 1;

    match node {
        Expression::Constant(v) => Ok(*v),
        Expression::Variable(name) => Err(MathsError::UnresolvedVariable(name.clone())),

        Expression::Add(l, r) => {
            let (l, r) = evaluate_reals(l, r, "addition", settings, depth)?;
            Ok(Value::Real(l + r))
        }
        Expression::Sub(l, r) => {
            let (l, r) = evaluate_reals(l, r, "subtraction", settings, depth)?;
            Ok(Value::Real(l - r))
        }
        Expression::Mul(l, r) => {
            let (l, r) = evaluate_reals(l, r, "multiplication", settings, depth)?;
            Ok(Value::Real(l * r))
        }
        Expression::Div(l, r) => {
            let (l, r) = evaluate_reals(l, r, "division", settings, depth)?;
            if r == 0.0 {
                return Err(MathsError::DivisionByZero)
            }
            Ok(Value::Real(l / r))
        }

        Expression::Power(base, exp) => {
            let (base, exp) = evaluate_reals(base, exp, "power", settings, depth)?;

            // powf gives 0^0 = 1, and handles negative and fractional exponents. A NaN out of
            // non-NaN inputs means the result would be complex, e.g. (-8)^0.5
            let result = Float::powf(base, exp);
            if result.is_nan() && !base.is_nan() && !exp.is_nan() {
                return Err(MathsError::Domain)
            }
            Ok(Value::Real(result))
        }

        Expression::NthRoot(radicand, degree) => {
            let (radicand, degree) = evaluate_reals(radicand, degree, "root", settings, depth)?;
            nth_root(radicand, degree).map(Value::Real)
        }

        Expression::Equal(l, r) => {
            let l = evaluate_at_depth(l, settings, depth)?;
            let r = evaluate_at_depth(r, settings, depth)?;

            match (l, r) {
                (Value::Real(l), Value::Real(r))
                    => Ok(Value::Bool(Float::abs(l - r) < settings.equality_tolerance)),
                (Value::Bool(l), Value::Bool(r))
                    => Ok(Value::Bool(l == r)),
                _ => Err(MathsError::TypeMismatch { operation: "equality" }),
            }
        }

        Expression::And(l, r) => {
            let l = evaluate_at_depth(l, settings, depth)?;
            let r = evaluate_at_depth(r, settings, depth)?;

            match (l, r) {
                (Value::Bool(l), Value::Bool(r)) => Ok(Value::Bool(l && r)),
                _ => Err(MathsError::TypeMismatch { operation: "conjunction" }),
            }
        }
    }
}

/// Calculates the real `degree`-th root of `radicand`.
///
/// Negative radicands are only accepted for odd integer degrees. For those, the root of the
/// magnitude is taken and the sign carried through, since a fractional power of a negative base
/// is not real.
pub fn nth_root(radicand: f64, degree: f64) -> Result<f64, MathsError> {
    if degree == 0.0 {
        return Err(MathsError::ZeroRootDegree)
    }

    if radicand >= 0.0 {
        return Ok(Float::powf(radicand, 1.0 / degree))
    }

    let integer_degree = if Float::fract(degree) == 0.0 { degree.to_i64() } else { None };
    match integer_degree {
        Some(d) if d.is_odd() => Ok(-Float::powf(-radicand, 1.0 / degree)),
        Some(_) => Err(MathsError::EvenRootOfNegative),
        None => Err(MathsError::NonIntegerRootOfNegative),
    }
}
