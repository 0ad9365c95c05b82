use super::Parser;
use crate::ast::Expression;
use crate::error::ParseError;
use crate::operators::OperatorMapping;
use crate::token::TokenKind;

impl<M: OperatorMapping> Parser<M> {
    // -- Atomic formulas ----------------------------------------

    /// Decides between predication, identity and inequality from the token
    /// after the leading term.
    pub(super) fn atomic(&mut self) -> Result<Expression, ParseError> {
        if !self.peek().is_term() {
            return Err(self.err(format!("expected term, found {}", self.describe_at(0))));
        }
        match self.peek_at(1) {
            TokenKind::LParen => self.predication(),
            TokenKind::Id => self.identity(),
            TokenKind::Neq => self.inequality(),
            _ => Err(self.err_at(
                1,
                format!(
                    "expected '(', '=' or '≠' after {}, found {}",
                    self.describe_at(0),
                    self.describe_at(1)
                ),
            )),
        }
    }

    /// `P(t1, ..., tn)`.
    ///
    /// The name, `(`, first term and the token after it are checked before
    /// anything is consumed. Past that point a malformed argument list
    /// rewinds the cursor to the predicate name before the error is returned.
    pub(super) fn predication(&mut self) -> Result<Expression, ParseError> {
        match self.peek() {
            TokenKind::Identifier => {}
            TokenKind::Variable => {
                return Err(self.err(format!(
                    "variable {} cannot be used as a predicate",
                    self.describe_at(0)
                )))
            }
            _ => {
                return Err(self.err(format!(
                    "expected predicate, found {}",
                    self.describe_at(0)
                )))
            }
        }
        if self.peek_at(1) != TokenKind::LParen {
            return Err(self.err_at(
                1,
                format!(
                    "expected '(' after predicate {}, found {}",
                    self.describe_at(0),
                    self.describe_at(1)
                ),
            ));
        }
        if !self.peek_at(2).is_term() {
            return Err(self.err_at(
                2,
                format!("expected term after '(', found {}", self.describe_at(2)),
            ));
        }
        if !matches!(self.peek_at(3), TokenKind::Comma | TokenKind::RParen) {
            return Err(self.err_at(
                3,
                format!(
                    "expected ',' or ')' after term {}, found {}",
                    self.describe_at(2),
                    self.describe_at(3)
                ),
            ));
        }

        let rollback = self.pos;
        let predicate = self.literal_at(0).to_owned();
        self.advance(); // predicate
        self.advance(); // '('

        let mut arguments = vec![self.term_at(0)];
        self.advance();

        while self.peek() == TokenKind::Comma {
            if !self.peek_at(1).is_term() {
                let err = self.err_at(
                    1,
                    format!("expected term after ',', found {}", self.describe_at(1)),
                );
                self.pos = rollback;
                return Err(err);
            }
            self.advance(); // ','
            arguments.push(self.term_at(0));
            self.advance();
        }

        if self.peek() != TokenKind::RParen {
            let err = self.err(format!(
                "expected ')' after argument list, found {}",
                self.describe_at(0)
            ));
            self.pos = rollback;
            return Err(err);
        }
        self.advance();

        Ok(Expression::predication(predicate, arguments))
    }

    /// `a = b`.
    pub(super) fn identity(&mut self) -> Result<Expression, ParseError> {
        self.expect_relation(TokenKind::Id, "=")?;
        let lhs = self.term_at(0);
        let rhs = self.term_at(2);
        self.pos += 3;
        Ok(Expression::identity(lhs, rhs))
    }

    /// `a ≠ b`, built as the negation of `a = b`.
    pub(super) fn inequality(&mut self) -> Result<Expression, ParseError> {
        self.expect_relation(TokenKind::Neq, "≠")?;
        let lhs = self.term_at(0);
        let rhs = self.term_at(2);
        let symbol = self.literal_at(1).to_owned();
        self.pos += 3;

        let negation = self.operator(TokenKind::Not, &symbol)?;
        Ok(Expression::unary(negation, Expression::identity(lhs, rhs)))
    }

    /// Check `term <relation> term` at the cursor without consuming it.
    fn expect_relation(&self, relation: TokenKind, symbol: &str) -> Result<(), ParseError> {
        if !self.peek().is_term() {
            return Err(self.err(format!("expected term, found {}", self.describe_at(0))));
        }
        if self.peek_at(1) != relation {
            return Err(self.err_at(
                1,
                format!(
                    "expected '{}' after {}, found {}",
                    symbol,
                    self.describe_at(0),
                    self.describe_at(1)
                ),
            ));
        }
        if !self.peek_at(2).is_term() {
            return Err(self.err_at(
                2,
                format!(
                    "expected term after '{}', found {}",
                    symbol,
                    self.describe_at(2)
                ),
            ));
        }
        Ok(())
    }
}
