use super::{Parser, MAX_NESTING_DEPTH};
use crate::ast::{Expression, Quantifier, Term};
use crate::error::ParseError;
use crate::operators::OperatorMapping;
use crate::token::TokenKind;

impl<M: OperatorMapping> Parser<M> {
    // -- Clause dispatch ----------------------------------------

    /// Every recursive path in the grammar passes through here, so this is
    /// where nesting depth is counted.
    pub(super) fn clause(&mut self) -> Result<Expression, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.err(format!(
                "formula nested too deeply (more than {} levels)",
                MAX_NESTING_DEPTH
            )));
        }
        self.depth += 1;
        let result = self.clause_alternative();
        self.depth -= 1;
        result
    }

    /// Picks the alternative from the lookahead kind; never tries more than
    /// one.
    fn clause_alternative(&mut self) -> Result<Expression, ParseError> {
        match self.peek() {
            kind if kind.is_term() => self.atomic(),
            kind if kind.is_unary_operator() => self.unary(),
            kind if kind.is_quantifier() => self.quantified(),
            TokenKind::LParen => self.bracketed(TokenKind::RParen, ")"),
            TokenKind::LBracket => self.bracketed(TokenKind::RBracket, "]"),
            _ => Err(self.expected_clause()),
        }
    }

    fn expected_clause(&self) -> ParseError {
        let found = self.describe_at(0);
        match self.previous() {
            Some(prev) => self.err(format!(
                "expected clause after {}, found {}",
                prev.describe(),
                found
            )),
            None => self.err(format!("expected clause, found {}", found)),
        }
    }

    /// `(` or `[` already under the cursor. The inside is parsed with the
    /// configured entry rule, not a fixed precedence level.
    fn bracketed(
        &mut self,
        close: TokenKind,
        close_literal: &str,
    ) -> Result<Expression, ParseError> {
        self.advance();
        let inner = self.entry_rule()?;
        if self.peek() != close {
            return Err(self.err(format!(
                "expected '{}', found {}",
                close_literal,
                self.describe_at(0)
            )));
        }
        self.advance();
        Ok(inner)
    }

    // -- Unary --------------------------------------------------

    pub(super) fn unary(&mut self) -> Result<Expression, ParseError> {
        let kind = self.peek();
        if !kind.is_unary_operator() {
            return Err(self.err(format!(
                "expected '¬', '□' or '⋄', found {}",
                self.describe_at(0)
            )));
        }
        let op = self.operator(kind, self.literal_at(0))?;
        self.advance();
        let operand = self.clause()?;
        Ok(Expression::unary(op, operand))
    }

    // -- Quantification -----------------------------------------

    pub(super) fn quantified(&mut self) -> Result<Expression, ParseError> {
        let kind = self.peek();
        let quantifier = match kind {
            TokenKind::Forall => Quantifier::Universal,
            TokenKind::Exists | TokenKind::NotExists => Quantifier::Existential,
            _ => {
                return Err(self.err(format!(
                    "expected '∀', '∃' or '∄', found {}",
                    self.describe_at(0)
                )))
            }
        };
        if self.peek_at(1) != TokenKind::Variable {
            return Err(self.err_at(
                1,
                format!(
                    "expected variable after quantifier {}, found {}",
                    self.describe_at(0),
                    self.describe_at(1)
                ),
            ));
        }

        let symbol = self.literal_at(0).to_owned();
        self.advance();
        let variable = Term::variable(self.literal_at(0));
        self.advance();

        let body = self.clause()?;
        let quantified = Expression::quantification(quantifier, variable, body);

        // ∄x φ is ¬∃x φ
        if kind == TokenKind::NotExists {
            let negation = self.operator(TokenKind::Not, &symbol)?;
            return Ok(Expression::unary(negation, quantified));
        }
        Ok(quantified)
    }
}
