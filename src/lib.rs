#![no_std]
extern crate alloc;

pub mod error;
pub mod value;
pub mod evaluate;
pub mod node;
pub mod latex;

#[cfg(test)]
mod tests;

pub use crate::{
    value::Value,
    evaluate::{Evaluable, EvaluationSettings},
    error::Error,
    node::{
        expression::Expression,
        pattern::{Bindings, match_pattern, substitute},
        algebra::{
            split_factors, combine_factors, split_terms, combine_terms,
            is_monomial, is_polynomial_term, coefficient, degree,
        },
    },
    latex::{parse, parse_with, parse_and_eval, parse_and_eval_real, parser::ParserSettings},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
