//! The semantic expression tree, and everything which operates on it.
//!
//! [Expressions](expression::Expression) are built by the [converter](crate::latex::converter) or
//! by hand using the constructor functions. Once built, they can be
//! [evaluated](crate::evaluate::Evaluable), [matched and substituted](pattern), or analysed for
//! their [algebraic structure](algebra). None of these mutate the tree; each returns a fresh
//! result.

pub mod expression;
pub mod evaluation;
pub mod pattern;
pub mod algebra;
