//! Token model shared by the lexer and the parser.

use serde::Serialize;
use std::fmt;

/// Closed set of token classes produced by the lexer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Structural markers
    #[default]
    Nil,
    Eoi,
    Illegal,
    // Logical connectives
    Not, // U+00AC
    And, // U+2227
    Or,  // U+2228
    If,  // U+2192
    Eq,  // U+2194
    // Modal operators
    Nec, // U+25A1
    Pos, // U+22C4
    // Quantifiers
    Forall,    // U+2200
    Exists,    // U+2203
    NotExists, // U+2204
    // Identity and inequality
    Id,  // '='
    Neq, // U+2260
    // Terms
    Variable,
    Identifier,
    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
}

impl TokenKind {
    /// True for the kinds that can stand as a singular term.
    pub fn is_term(self) -> bool {
        matches!(self, TokenKind::Variable | TokenKind::Identifier)
    }

    pub fn is_quantifier(self) -> bool {
        matches!(
            self,
            TokenKind::Forall | TokenKind::Exists | TokenKind::NotExists
        )
    }

    pub fn is_unary_operator(self) -> bool {
        matches!(self, TokenKind::Not | TokenKind::Nec | TokenKind::Pos)
    }

    /// Upper-case tag used in diagnostics and the CLI token listing.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Nil => "NIL",
            TokenKind::Eoi => "EOI",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::If => "IF",
            TokenKind::Eq => "EQ",
            TokenKind::Nec => "NEC",
            TokenKind::Pos => "POS",
            TokenKind::Forall => "FORALL",
            TokenKind::Exists => "EXISTS",
            TokenKind::NotExists => "NOT_EXISTS",
            TokenKind::Id => "ID",
            TokenKind::Neq => "NEQ",
            TokenKind::Variable => "VARIABLE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Comma => "COMMA",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of the input. The literal is kept verbatim so that
/// diagnostics can quote exactly what the user wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub literal: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(literal: impl Into<String>, kind: TokenKind) -> Self {
        Token {
            literal: literal.into(),
            kind,
        }
    }

    /// The end-of-input sentinel. Its literal is empty.
    pub fn eoi() -> Self {
        Token::new("", TokenKind::Eoi)
    }

    /// How the token reads inside an error message. Illegal literals are
    /// escaped so control bytes never break the message across lines.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eoi => "end of input".to_owned(),
            TokenKind::Illegal => format!("'{}'", self.literal.escape_debug()),
            _ => format!("'{}'", self.literal),
        }
    }
}
