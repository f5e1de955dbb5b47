use core::fmt;

/// The result of evaluating an expression. There is no implicit coercion between the two kinds; an
/// operation given the wrong kind fails instead.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum Value {
    Real(f64),
    Bool(bool),
}

impl Value {
    /// If this is a `Real`, returns it. Otherwise returns None.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            Value::Bool(_) => None,
        }
    }

    /// If this is a `Bool`, returns it. Otherwise returns None.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Real(_) => None,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Self::Real(r)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Real(r) => write!(f, "{}", r),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}
