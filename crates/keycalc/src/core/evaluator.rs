//! AST evaluator over checked `f64` arithmetic

use crate::core::parser::{AstNode, Parser};
use crate::core::{Arithmetic, CalcResult};

/// Walks an [`AstNode`] tree with checked arithmetic
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Reduces a tree to a finite number.
    ///
    /// The left operand is reduced first, so its error wins.
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(value) => Arithmetic::check_finite(*value),
            AstNode::Negate(inner) => Arithmetic::negate(self.evaluate(inner)?),
            AstNode::BinaryOp { left, op, right } => {
                let lhs = self.evaluate(left)?;
                Arithmetic::apply(lhs, self.evaluate(right)?, *op)
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        self.evaluate(&Parser::parse_str(input)?)
    }
}
