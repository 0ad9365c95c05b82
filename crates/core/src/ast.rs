//! Expression model produced by the parser.
//!
//! The parser only ever builds these values through the constructors below;
//! it never inspects a node once built. Downstream semantics (model checking,
//! evaluation, printing) belong to whoever consumes the tree.

use serde::Serialize;

// ──────────────────────────────────────────────
// Terms
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    Variable,
    Constant,
}

/// A singular term: a bound/free variable or an individual constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Term {
    pub name: String,
    pub kind: TermKind,
}

impl Term {
    pub fn new(name: impl Into<String>, kind: TermKind) -> Self {
        Term {
            name: name.into(),
            kind,
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Term::new(name, TermKind::Variable)
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Term::new(name, TermKind::Constant)
    }
}

// ──────────────────────────────────────────────
// Operators
// ──────────────────────────────────────────────

/// Semantic operator tags. Which one a surface symbol denotes depends on
/// the operator mapping the parser was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Negation,
    Conjunction,
    Disjunction,
    Conditional,
    Biconditional,
    Necessity,
    Possibility,
    DeonticNecessity,
    DeonticPossibility,
    EpistemicNecessity,
    EpistemicPossibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quantifier {
    Universal,
    Existential,
}

// ──────────────────────────────────────────────
// Expressions
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    Predication {
        predicate: String,
        arguments: Vec<Term>,
    },
    Identity {
        lhs: Term,
        rhs: Term,
    },
    Unary {
        operator: Operator,
        operand: Box<Expression>,
    },
    Binary {
        operator: Operator,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    Quantification {
        quantifier: Quantifier,
        variable: Term,
        body: Box<Expression>,
    },
}

impl Expression {
    pub fn predication(predicate: impl Into<String>, arguments: Vec<Term>) -> Self {
        Expression::Predication {
            predicate: predicate.into(),
            arguments,
        }
    }

    pub fn identity(lhs: Term, rhs: Term) -> Self {
        Expression::Identity { lhs, rhs }
    }

    pub fn unary(operator: Operator, operand: Expression) -> Self {
        Expression::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: Operator, lhs: Expression, rhs: Expression) -> Self {
        Expression::Binary {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn quantification(quantifier: Quantifier, variable: Term, body: Expression) -> Self {
        Expression::Quantification {
            quantifier,
            variable,
            body: Box::new(body),
        }
    }
}
