//! Monomial and polynomial structure of [Expression] trees.
//!
//! Products and sums are binary in the expression tree, so `2*x*y` is really `(2*x)*y`. The
//! `split_` functions flatten such chains into lists of factors or terms, and the `combine_`
//! functions rebuild a strictly left-associative chain from a list. Splitting after combining gives
//! back the same list, but combining after splitting normalises the associativity of the tree:
//! `2*(x*y)` comes back as `(2*x)*y`.

use alloc::{vec, vec::Vec};
use num_traits::{Float, ToPrimitive};

use crate::{error::AnalysisError, evaluate::Evaluable, value::Value};

use super::expression::Expression;

/// Which expressions count as monomials.
///
/// Older revisions of the analyser also accepted roots and zero exponents. Both are kept so callers
/// can opt in, but [MONOMIAL_POLICY] is what [is_monomial] uses.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum MonomialPolicy {
    /// Powers need an exponent which evaluates to an integer of at least 1, and roots are never
    /// monomials.
    Strict,

    /// Also accepts exponents of 0, and roots whose radicand is a monomial and whose degree
    /// evaluates to a constant.
    Lenient,
}

/// The policy used by [is_monomial] and [is_polynomial_term].
pub const MONOMIAL_POLICY: MonomialPolicy = MonomialPolicy::Strict;

/// The two kinds of chain which can be split and combined.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
enum Chain {
    Product,
    Sum,
}

impl Chain {
    /// If `node` is a link of this chain, returns its two operands.
    fn operands<'a>(&self, node: &'a Expression) -> Option<(&'a Expression, &'a Expression)> {
        match (self, node) {
            (Chain::Product, Expression::Mul(l, r)) | (Chain::Sum, Expression::Add(l, r))
                => Some((l.as_ref(), r.as_ref())),
            _ => None,
        }
    }

    fn join(&self) -> fn(Expression, Expression) -> Expression {
        match self {
            Chain::Product => Expression::mul,
            Chain::Sum => Expression::add,
        }
    }

    /// Flattens `node` into a list of its links' operands. The left subtree is fully expanded
    /// before the right, so the list reads in the same order as the written expression.
    fn flatten(&self, node: &Expression) -> Vec<Expression> {
        let mut result = vec![];
        self.visit(node, |item| result.push(item.clone()));
        result
    }

    /// Counts what [flatten](Chain::flatten) would return, without cloning anything.
    fn count(&self, node: &Expression) -> usize {
        let mut count = 0;
        self.visit(node, |_| count += 1);
        count
    }

    /// Calls `f` on each operand which is not itself a link, in left-to-right order.
    fn visit<'a>(&self, node: &'a Expression, mut f: impl FnMut(&'a Expression)) {
        // Explicit stack, since parsed chains lean left and can be long
        let mut stack = vec![node];
        while let Some(item) = stack.pop() {
            if let Some((l, r)) = self.operands(item) {
                // Right is pushed first so that left is popped first
                stack.push(r);
                stack.push(l);
            } else {
                f(item);
            }
        }
    }

    /// Left-folds `items` into a chain. Returns None for an empty list.
    fn combine(&self, items: Vec<Expression>) -> Option<Expression> {
        let mut items = items.into_iter();
        let first = items.next()?;
        Some(items.fold(first, self.join()))
    }
}

/// Splits a chain of multiplications into its factors, in left-to-right order. Anything which is
/// not a `Mul` is a single factor.
pub fn split_factors(expr: &Expression) -> Vec<Expression> {
    Chain::Product.flatten(expr)
}

/// Rebuilds a left-associative chain of multiplications from a list of factors. Returns None for an
/// empty list, and the only factor as-is for a single-element list.
pub fn combine_factors(factors: Vec<Expression>) -> Option<Expression> {
    Chain::Product.combine(factors)
}

/// The number of factors [split_factors] would return.
pub fn count_factors(expr: &Expression) -> usize {
    Chain::Product.count(expr)
}

/// Applies `f` to every factor of `expr`, then recombines them.
pub fn map_factors(expr: &Expression, f: impl FnMut(Expression) -> Expression) -> Expression {
    let factors = split_factors(expr).into_iter().map(f).collect();

    // split_factors never returns an empty list
    combine_factors(factors).unwrap_or_else(|| expr.clone())
}

/// Splits a chain of additions into its terms, in left-to-right order. Anything which is not an
/// `Add` is a single term; in particular, subtraction is not split.
pub fn split_terms(expr: &Expression) -> Vec<Expression> {
    Chain::Sum.flatten(expr)
}

/// Rebuilds a left-associative chain of additions from a list of terms. Returns None for an empty
/// list, and the only term as-is for a single-element list.
pub fn combine_terms(terms: Vec<Expression>) -> Option<Expression> {
    Chain::Sum.combine(terms)
}

/// The number of terms [split_terms] would return.
pub fn count_terms(expr: &Expression) -> usize {
    Chain::Sum.count(expr)
}

/// Applies `f` to every term of `expr`, then recombines them.
pub fn map_terms(expr: &Expression, f: impl FnMut(Expression) -> Expression) -> Expression {
    let terms = split_terms(expr).into_iter().map(f).collect();
    combine_terms(terms).unwrap_or_else(|| expr.clone())
}

/// Returns true if `expr` is a monomial under [MONOMIAL_POLICY]: a product of constants and
/// positive integer powers of variables, optionally divided by something constant.
///
/// ```
/// use mathtree::{parse, node::algebra::is_monomial};
///
/// assert!(is_monomial(&parse("3*x^2*y").unwrap()));
/// assert!(!is_monomial(&parse("x+y").unwrap()));
/// ```
pub fn is_monomial(expr: &Expression) -> bool {
    is_monomial_with(expr, MONOMIAL_POLICY)
}

/// Returns true if `expr` is a monomial under the given policy.
pub fn is_monomial_with(expr: &Expression, policy: MonomialPolicy) -> bool {
    match expr {
        Expression::Constant(Value::Real(_)) | Expression::Variable(_) => true,
        Expression::Constant(Value::Bool(_)) => false,

        Expression::Mul(l, r) => is_monomial_with(l, policy) && is_monomial_with(r, policy),

        // A variable in the denominator would make this a negative power
        Expression::Div(numerator, denominator)
            => is_monomial_with(numerator, policy) && denominator.eval_real().is_some(),

        Expression::Power(base, exponent) => {
            // x^2 can be expanded to x*x, so it's built only from multiplication. x^0.5 can't be
            // expanded like that, and x^-2 is really a division by a variable
            let minimum = match policy {
                MonomialPolicy::Strict => 1.0,
                MonomialPolicy::Lenient => 0.0,
            };

            match exponent.eval_real() {
                Some(e) if e >= minimum && Float::fract(e) == 0.0 => is_monomial_with(base, policy),
                _ => false,
            }
        }

        Expression::NthRoot(radicand, degree) => match policy {
            MonomialPolicy::Strict => false,
            MonomialPolicy::Lenient
                => is_monomial_with(radicand, policy) && degree.eval_real().is_some(),
        },

        Expression::Add(_, _) | Expression::Sub(_, _) => false,
        Expression::Equal(_, _) | Expression::And(_, _) => false,
    }
}

/// Returns true if `expr` can be one of the terms of a polynomial. Subtractions are rejected, since
/// [split_terms] only splits additions; a term containing `-` has not been flattened.
pub fn is_polynomial_term(expr: &Expression) -> bool {
    !matches!(expr, Expression::Sub(_, _)) && is_monomial(expr)
}

/// Returns true if `expr` is built from polynomial terms joined by addition and subtraction.
pub fn is_polynomial(expr: &Expression) -> bool {
    match expr {
        Expression::Add(l, r) | Expression::Sub(l, r) => is_polynomial(l) && is_polynomial(r),
        _ => is_polynomial_term(expr),
    }
}

/// Returns the numeric coefficient of a monomial: the product of every factor which evaluates to a
/// constant. A monomial with no constant factors has a coefficient of 1.
pub fn coefficient(expr: &Expression) -> Result<f64, AnalysisError> {
    if !is_monomial(expr) {
        return Err(AnalysisError::NotMonomial)
    }

    let mut coefficient_factors = vec![Expression::real(1.0)];
    coefficient_factors.extend(
        split_factors(expr).into_iter().filter(|factor| factor.eval_real().is_some())
    );

    // Always has at least the leading 1
    let product = combine_factors(coefficient_factors).ok_or(AnalysisError::NotMonomial)?;
    match product.evaluate(&Default::default())? {
        Value::Real(r) => Ok(r),
        Value::Bool(_) => Err(AnalysisError::NotMonomial),
    }
}

/// Returns the total degree of a product: 1 for each bare variable factor, plus the exponent times
/// the degree of the base for each power factor. Other factors contribute nothing.
///
/// Fails if any power factor's exponent is not a non-negative integer constant.
pub fn degree(expr: &Expression) -> Result<u32, AnalysisError> {
    let mut total: u32 = 0;

    for factor in split_factors(expr) {
        let contribution = match &factor {
            Expression::Variable(_) => 1,

            Expression::Power(base, exponent) => {
                let exponent = exponent.eval_real().ok_or(AnalysisError::NonConstantExponent)?;
                if exponent < 0.0 || Float::fract(exponent) != 0.0 {
                    return Err(AnalysisError::UnsupportedExponent(exponent))
                }

                let exponent = exponent.to_u32().ok_or(AnalysisError::DegreeOverflow)?;
                exponent.checked_mul(degree(base)?).ok_or(AnalysisError::DegreeOverflow)?
            }

            _ => 0,
        };

        total = total.checked_add(contribution).ok_or(AnalysisError::DegreeOverflow)?;
    }

    Ok(total)
}
