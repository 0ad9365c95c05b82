//! Recursive-descent parser for QML formulas.
//!
//! Grammar, loosest binding first. Every binary level folds to the left.
//!
//! ```text
//! equivalence := implication ( '↔' implication )*
//! implication := conj_disj ( '→' conj_disj )*
//! conj_disj   := clause ( ('∧' | '∨') clause )*
//! clause      := atomic | unary | quantified | '(' entry ')' | '[' entry ']'
//! unary       := ('¬' | '□' | '⋄') clause
//! quantified  := ('∀' | '∃' | '∄') VARIABLE clause
//! atomic      := predication | identity | inequality
//! predication := IDENTIFIER '(' term (',' term)* ')'
//! identity    := term '=' term
//! inequality  := term '≠' term
//! ```
//!
//! Alternatives are chosen from the lookahead token alone. Once a rule is
//! chosen its first error aborts the parse; the only cursor rewind is the
//! one in `predication`, which leaves the cursor at the predicate name when
//! the argument list turns out malformed.

use crate::ast::{Expression, Operator, Term};
use crate::error::ParseError;
use crate::lexer;
use crate::operators::{ModalFlavor, OperatorMapping};
use crate::token::{Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod atoms;
mod clauses;
mod connectives;

// ──────────────────────────────────────────────
// Entry rules
// ──────────────────────────────────────────────

/// Grammar rule a parse starts at. Bracketed subformulas recurse into the
/// same rule, so a narrower entry still allows regrouping inside brackets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryRule {
    #[default]
    Equivalence,
    Implication,
    ConjunctionDisjunction,
    Clause,
    Quantified,
    Unary,
    Atomic,
    Predication,
    Identity,
    Inequality,
}

impl EntryRule {
    pub const ALL: [EntryRule; 10] = [
        EntryRule::Equivalence,
        EntryRule::Implication,
        EntryRule::ConjunctionDisjunction,
        EntryRule::Clause,
        EntryRule::Quantified,
        EntryRule::Unary,
        EntryRule::Atomic,
        EntryRule::Predication,
        EntryRule::Identity,
        EntryRule::Inequality,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntryRule::Equivalence => "equivalence",
            EntryRule::Implication => "implication",
            EntryRule::ConjunctionDisjunction => "conjunction_disjunction",
            EntryRule::Clause => "clause",
            EntryRule::Quantified => "quantified",
            EntryRule::Unary => "unary",
            EntryRule::Atomic => "atomic",
            EntryRule::Predication => "predication",
            EntryRule::Identity => "identity",
            EntryRule::Inequality => "inequality",
        }
    }
}

impl fmt::Display for EntryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntryRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryRule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| format!("unknown entry rule '{}'", s))
    }
}

// ──────────────────────────────────────────────
// Parser
// ──────────────────────────────────────────────

/// Deepest clause nesting the parser will descend into. Every bracket, unary
/// operator and quantifier opens one level; past the limit the parse fails
/// with a syntax error instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Cursor over an owned token sequence.
///
/// `parse` resets the cursor, so one parser can be run repeatedly; each run
/// is independent and deterministic.
#[derive(Debug, Clone)]
pub struct Parser<M = ModalFlavor> {
    tokens: Vec<Token>,
    pos: usize,
    mapping: M,
    entry: EntryRule,
    /// Current clause nesting depth.
    depth: usize,
}

impl Parser<ModalFlavor> {
    /// Parser with the alethic operator mapping.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_mapping(tokens, ModalFlavor::Alethic)
    }
}

impl<M: OperatorMapping> Parser<M> {
    pub fn with_mapping(tokens: Vec<Token>, mapping: M) -> Self {
        Parser {
            tokens,
            pos: 0,
            mapping,
            entry: EntryRule::default(),
            depth: 0,
        }
    }

    /// Parse the whole token sequence starting at `entry`.
    pub fn parse(&mut self, entry: EntryRule) -> Result<Expression, ParseError> {
        self.pos = 0;
        self.depth = 0;
        self.entry = entry;

        if matches!(
            self.tokens.as_slice(),
            [] | [Token {
                kind: TokenKind::Eoi,
                ..
            }]
        ) {
            return Err(ParseError::EmptyInput);
        }

        tracing::debug!(%entry, tokens = self.tokens.len(), "parsing formula");
        let result = self.sentence();
        if let Err(e) = &result {
            tracing::debug!(error = %e, position = self.pos, "parse failed");
        }
        result
    }

    // -- Start rule ---------------------------------------------

    fn sentence(&mut self) -> Result<Expression, ParseError> {
        let expr = self.entry_rule()?;
        if self.peek() != TokenKind::Eoi {
            return Err(self.err(format!(
                "unexpected symbol {} after complete formula",
                self.describe_at(0)
            )));
        }
        Ok(expr)
    }

    /// Run the configured entry rule. Called at the start and again for
    /// every bracketed subformula.
    fn entry_rule(&mut self) -> Result<Expression, ParseError> {
        match self.entry {
            EntryRule::Equivalence => self.equivalence(),
            EntryRule::Implication => self.implication(),
            EntryRule::ConjunctionDisjunction => self.conjunction_disjunction(),
            EntryRule::Clause => self.clause(),
            EntryRule::Quantified => self.quantified(),
            EntryRule::Unary => self.unary(),
            EntryRule::Atomic => self.atomic(),
            EntryRule::Predication => self.predication(),
            EntryRule::Identity => self.identity(),
            EntryRule::Inequality => self.inequality(),
        }
    }

    // -- Cursor helpers -----------------------------------------

    fn token_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Kind of the lookahead token. Running off the end reads as `Eoi`.
    fn peek(&self) -> TokenKind {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> TokenKind {
        self.token_at(offset).map_or(TokenKind::Eoi, |t| t.kind)
    }

    fn literal_at(&self, offset: usize) -> &str {
        self.token_at(offset).map_or("", |t| t.literal.as_str())
    }

    fn describe_at(&self, offset: usize) -> String {
        self.token_at(offset)
            .map_or_else(|| "end of input".to_owned(), Token::describe)
    }

    fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    fn advance(&mut self) {
        if self.peek() != TokenKind::Eoi {
            self.pos += 1;
        }
    }

    /// The term under the cursor at `offset`. Callers check `is_term` first.
    fn term_at(&self, offset: usize) -> Term {
        let name = self.literal_at(offset);
        match self.peek_at(offset) {
            TokenKind::Variable => Term::variable(name),
            _ => Term::constant(name),
        }
    }

    fn operator(&self, kind: TokenKind, literal: &str) -> Result<Operator, ParseError> {
        self.mapping
            .operator_for(kind)
            .ok_or_else(|| ParseError::MissingOperator {
                kind,
                literal: literal.to_owned(),
            })
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::syntax(self.pos, msg)
    }

    fn err_at(&self, offset: usize, msg: impl Into<String>) -> ParseError {
        ParseError::syntax(self.pos + offset, msg)
    }
}

// ──────────────────────────────────────────────
// Convenience entry points
// ──────────────────────────────────────────────

/// Lex and parse a formula as an equivalence under the alethic reading.
pub fn parse(src: &str) -> Result<Expression, ParseError> {
    parse_with(src, EntryRule::Equivalence, ModalFlavor::Alethic)
}

/// Lex and parse a formula with an explicit entry rule and operator mapping.
pub fn parse_with<M: OperatorMapping>(
    src: &str,
    entry: EntryRule,
    mapping: M,
) -> Result<Expression, ParseError> {
    Parser::with_mapping(lexer::lex(src), mapping).parse(entry)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
