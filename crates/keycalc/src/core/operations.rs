//! Binary operators and checked floating-point arithmetic

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// The four operators a keypad can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction or negation (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator character as it appears in expression text
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parses an operator character
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns true if `c` is one of `+ - * /`
    #[must_use]
    pub const fn is_operator_char(c: char) -> bool {
        Self::from_char(c).is_some()
    }

    /// Returns the precedence level (higher = evaluated first)
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Returns true for `-`, the only operator allowed to start a literal
    #[must_use]
    pub const fn is_minus(self) -> bool {
        matches!(self, Self::Subtract)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Checked arithmetic - every result is finite or an error
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic;

impl Arithmetic {
    /// Applies `op` to two operands
    pub fn apply(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
        match op {
            Operator::Add => Self::check_finite(a + b),
            Operator::Subtract => Self::check_finite(a - b),
            Operator::Multiply => Self::check_finite(a * b),
            Operator::Divide => Self::divide(a, b),
        }
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_finite(a / b)
    }

    /// Negation never overflows but still rejects NaN input
    pub fn negate(a: f64) -> CalcResult<f64> {
        Self::check_finite(-a)
    }

    /// Rejects NaN and infinities, including over-long typed literals
    pub fn check_finite(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::InvalidResult("NaN".into()))
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}
