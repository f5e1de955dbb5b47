//! An abstraction for something which can be evaluated into a [Value].
//!
//! Currently, this is only implemented for [Expression](crate::Expression). Evaluation never
//! mutates anything and never consults an environment; variables must be
//! [substituted](crate::node::pattern::substitute) away before an expression can be evaluated.

use crate::{error::MathsError, value::Value};

/// Settings which affect evaluation.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct EvaluationSettings {
    /// Two reals closer together than this are considered equal by an `Equal` node.
    pub equality_tolerance: f64,

    /// Trees nested deeper than this fail to evaluate rather than risk exhausting the stack.
    pub max_depth: usize,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            equality_tolerance: 1e-9,
            max_depth: 1024,
        }
    }
}

/// Something which can be evaluated into a [Value].
pub trait Evaluable {
    /// Evaluates this expression and returns either a [Value] with the result, or a [MathsError]
    /// describing why evaluation was not possible.
    fn evaluate(&self, settings: &EvaluationSettings) -> Result<Value, MathsError>;

    /// Evaluates with default settings, discarding the reason for any failure.
    fn eval(&self) -> Option<Value> {
        self.evaluate(&EvaluationSettings::default()).ok()
    }

    /// Evaluates with default settings, returning a number only if the result is `Real`.
    fn eval_real(&self) -> Option<f64> {
        self.eval()?.as_real()
    }
}
