//! qml-core: lexer and parser for Quantified Modal Logic formulas.
//!
//! Turns text such as `∀x (Man(x) → □Mortal(x))` into an [`Expression`]
//! tree. The pipeline is one-way: [`lex`] produces tokens, [`Parser`]
//! consumes them under a selectable [`EntryRule`] and an
//! [`OperatorMapping`] that decides what `□` and `⋄` mean.
//!
//! # Public API
//!
//! - [`lex()`] / [`lex_bytes()`] -- total tokenizers, never fail
//! - [`parse()`] -- lex and parse with the defaults (equivalence, alethic)
//! - [`parse_with()`] -- lex and parse with an explicit entry rule and mapping
//! - [`Parser`] -- direct form for pre-lexed input
//! - [`ModalFlavor`], [`alethic`], [`deontic`], [`epistemic`] -- stock mappings
//! - AST types: [`Expression`], [`Term`], [`TermKind`], [`Operator`],
//!   [`Quantifier`]
//! - [`ParseError`] -- empty input, syntax and configuration failures

pub mod ast;
pub mod error;
pub mod lexer;
pub mod operators;
pub mod parser;
pub mod token;

// ── Convenience re-exports: key types ────────────────────────────────

pub use ast::{Expression, Operator, Quantifier, Term, TermKind};
pub use error::{ErrorReport, ParseError};
pub use operators::{alethic, deontic, epistemic, ModalFlavor, OperatorMapping};
pub use parser::{EntryRule, Parser};
pub use token::{Token, TokenKind};

// ── Convenience re-exports: entry points ─────────────────────────────

pub use lexer::{lex, lex_bytes};
pub use parser::{parse, parse_with};
