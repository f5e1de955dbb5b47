//! Structural pattern matching and its inverse, substitution.
//!
//! A pattern is an ordinary [Expression] in which every `Variable` acts as a wildcard. Matching is
//! a single linear pass over both trees with no backtracking: a wildcard binds whatever
//! subexpression it meets the first time, and every later occurrence of the same name must meet a
//! structurally equal subexpression.
//!
//! Both matching and substitution recurse once per level of the tree. Parsed trees are never
//! deeper than [ParserSettings::max_depth](crate::ParserSettings::max_depth), but a tree built by
//! hand thousands of levels deep can exhaust the stack here.

use alloc::{boxed::Box, collections::BTreeMap, string::String};

use super::expression::Expression;

/// Maps each wildcard name to the subexpression it matched.
pub type Bindings = BTreeMap<String, Expression>;

/// Matches `expr` against `pattern`, returning the bindings for each wildcard if the match
/// succeeds.
///
/// ```
/// use mathtree::{Expression, node::pattern::match_pattern};
///
/// let pattern = Expression::add('x'.into(), 'x'.into());
/// let bindings = match_pattern(&pattern, &Expression::add(2.0.into(), 2.0.into())).unwrap();
/// assert_eq!(bindings["x"], Expression::real(2.0));
///
/// assert!(match_pattern(&pattern, &Expression::add(2.0.into(), 3.0.into())).is_none());
/// ```
pub fn match_pattern(pattern: &Expression, expr: &Expression) -> Option<Bindings> {
    let mut bindings = Bindings::new();
    if match_into(pattern, expr, &mut bindings) {
        Some(bindings)
    } else {
        None
    }
}

/// Like [match_pattern], but extends an existing set of bindings. Wildcards which are already bound
/// must match their existing binding. On failure, `bindings` may have been partially extended.
pub fn match_into(pattern: &Expression, expr: &Expression, bindings: &mut Bindings) -> bool {
    match (pattern, expr) {
        (Expression::Variable(name), _) => {
            if let Some(existing) = bindings.get(name) {
                existing == expr
            } else {
                bindings.insert(name.clone(), expr.clone());
                true
            }
        }

        (Expression::Constant(p), Expression::Constant(e)) => p == e,

        (Expression::Add(pl, pr), Expression::Add(el, er))
        | (Expression::Sub(pl, pr), Expression::Sub(el, er))
        | (Expression::Mul(pl, pr), Expression::Mul(el, er))
        | (Expression::Div(pl, pr), Expression::Div(el, er))
        | (Expression::Power(pl, pr), Expression::Power(el, er))
        | (Expression::NthRoot(pl, pr), Expression::NthRoot(el, er))
        | (Expression::Equal(pl, pr), Expression::Equal(el, er))
        | (Expression::And(pl, pr), Expression::And(el, er))
            => match_into(pl, el, bindings) && match_into(pr, er, bindings),

        // Different kinds of node never match
        _ => false,
    }
}

/// Replaces every variable in `expr` which has a binding with its bound expression. Unbound
/// variables and constants are left as they are.
///
/// Substituting the bindings from a successful [match_pattern] back into the pattern always
/// reproduces the matched expression.
pub fn substitute(expr: &Expression, bindings: &Bindings) -> Expression {
    let rebuild = |l: &Expression, r: &Expression| (
        Box::new(substitute(l, bindings)),
        Box::new(substitute(r, bindings)),
    );

    match expr {
        Expression::Variable(name) => match bindings.get(name) {
            Some(replacement) => replacement.clone(),
            None => expr.clone(),
        },
        Expression::Constant(_) => expr.clone(),

        Expression::Add(l, r) => { let (l, r) = rebuild(l, r); Expression::Add(l, r) }
        Expression::Sub(l, r) => { let (l, r) = rebuild(l, r); Expression::Sub(l, r) }
        Expression::Mul(l, r) => { let (l, r) = rebuild(l, r); Expression::Mul(l, r) }
        Expression::Div(l, r) => { let (l, r) = rebuild(l, r); Expression::Div(l, r) }
        Expression::Power(l, r) => { let (l, r) = rebuild(l, r); Expression::Power(l, r) }
        Expression::NthRoot(l, r) => { let (l, r) = rebuild(l, r); Expression::NthRoot(l, r) }
        Expression::Equal(l, r) => { let (l, r) = rebuild(l, r); Expression::Equal(l, r) }
        Expression::And(l, r) => { let (l, r) = rebuild(l, r); Expression::And(l, r) }
    }
}

/// Matches `expr` against `pattern` and, if it matches, substitutes the bindings into `template`.
/// This is one rewrite step, e.g. `x*(y+z)` to `x*y+x*z`.
pub fn rewrite(pattern: &Expression, template: &Expression, expr: &Expression) -> Option<Expression> {
    let bindings = match_pattern(pattern, expr)?;
    Some(substitute(template, &bindings))
}
