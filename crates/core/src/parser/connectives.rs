use super::Parser;
use crate::ast::Expression;
use crate::error::ParseError;
use crate::operators::OperatorMapping;
use crate::token::TokenKind;

type Rule<M> = fn(&mut Parser<M>) -> Result<Expression, ParseError>;

impl<M: OperatorMapping> Parser<M> {
    // -- Binary levels ------------------------------------------

    pub(super) fn equivalence(&mut self) -> Result<Expression, ParseError> {
        self.fold_left(&[TokenKind::Eq], Self::implication)
    }

    pub(super) fn implication(&mut self) -> Result<Expression, ParseError> {
        self.fold_left(&[TokenKind::If], Self::conjunction_disjunction)
    }

    /// `∧` and `∨` share one level and fold strictly in text order.
    pub(super) fn conjunction_disjunction(&mut self) -> Result<Expression, ParseError> {
        self.fold_left(&[TokenKind::And, TokenKind::Or], Self::clause)
    }

    /// `operand (op operand)*` folded as `((a op b) op c) ...`.
    fn fold_left(
        &mut self,
        operators: &[TokenKind],
        operand: Rule<M>,
    ) -> Result<Expression, ParseError> {
        let mut lhs = operand(self)?;
        while operators.contains(&self.peek()) {
            let op = self.operator(self.peek(), self.literal_at(0))?;
            self.advance();
            let rhs = operand(self)?;
            lhs = Expression::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }
}
