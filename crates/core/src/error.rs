use crate::token::TokenKind;
use serde::Serialize;

/// Why a formula could not be turned into an expression tree.
///
/// Every variant renders to a single human-readable message; the variants
/// keep malformed input apart from a misconfigured operator mapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No tokens at all, or only the end-of-input sentinel.
    #[error("empty input, nothing to parse")]
    EmptyInput,

    /// The input does not match the grammar. `position` is the index of the
    /// offending token in the token stream.
    #[error("{message}")]
    Syntax { position: usize, message: String },

    /// The operator mapping has no operator for a token kind the grammar
    /// needs one for. Caused by the caller, not by the input.
    #[error("no operator mapped for {kind} ('{literal}')")]
    MissingOperator { kind: TokenKind, literal: String },
}

impl ParseError {
    pub fn syntax(position: usize, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            position,
            message: message.into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ParseError::MissingOperator { .. })
    }

    /// Stable short name of the variant, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "empty_input",
            ParseError::Syntax { .. } => "syntax",
            ParseError::MissingOperator { .. } => "missing_operator",
        }
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { position, .. } => Some(*position),
            _ => None,
        }
    }

    pub fn to_json_value(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
            position: self.position(),
        }
    }
}

/// Flat, serializable view of a [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
    pub position: Option<usize>,
}
