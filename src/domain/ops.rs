//! The operation registry: a fixed mapping from operation name to a binary
//! arithmetic function over `f64`.

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// Resolves an operation name by exact match. Names are neither trimmed
    /// nor case-folded.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Self::Add),
            "sub" => Some(Self::Sub),
            "mul" => Some(Self::Mul),
            "div" => Some(Self::Div),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }

    /// Applies the operation. Division fails iff the divisor is zero; a zero
    /// dividend is an ordinary input.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, AppError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div => {
                if b == 0.0 {
                    return Err(AppError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}
