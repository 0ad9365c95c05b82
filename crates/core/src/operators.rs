//! Mapping from surface operator tokens to semantic operators.
//!
//! The grammar is the same for every modal reading; only the meaning of `□`
//! and `⋄` changes. A mapping answers one question: which operator, if any,
//! does this token kind stand for.

use crate::ast::Operator;
use crate::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy the parser consults whenever it needs an operator for a token.
pub trait OperatorMapping {
    fn operator_for(&self, kind: TokenKind) -> Option<Operator>;
}

impl<F> OperatorMapping for F
where
    F: Fn(TokenKind) -> Option<Operator>,
{
    fn operator_for(&self, kind: TokenKind) -> Option<Operator> {
        self(kind)
    }
}

/// The stock modal readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalFlavor {
    #[default]
    Alethic,
    Deontic,
    Epistemic,
}

impl ModalFlavor {
    pub const ALL: [ModalFlavor; 3] = [
        ModalFlavor::Alethic,
        ModalFlavor::Deontic,
        ModalFlavor::Epistemic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModalFlavor::Alethic => "alethic",
            ModalFlavor::Deontic => "deontic",
            ModalFlavor::Epistemic => "epistemic",
        }
    }
}

impl OperatorMapping for ModalFlavor {
    fn operator_for(&self, kind: TokenKind) -> Option<Operator> {
        match self {
            ModalFlavor::Alethic => alethic(kind),
            ModalFlavor::Deontic => deontic(kind),
            ModalFlavor::Epistemic => epistemic(kind),
        }
    }
}

impl fmt::Display for ModalFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModalFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModalFlavor::ALL
            .into_iter()
            .find(|flavor| flavor.name() == s)
            .ok_or_else(|| {
                format!(
                    "unknown modal flavor '{}' (expected alethic, deontic or epistemic)",
                    s
                )
            })
    }
}

/// Connectives read the same way under every flavor.
fn connective(kind: TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Not => Some(Operator::Negation),
        TokenKind::And => Some(Operator::Conjunction),
        TokenKind::Or => Some(Operator::Disjunction),
        TokenKind::If => Some(Operator::Conditional),
        TokenKind::Eq => Some(Operator::Biconditional),
        _ => None,
    }
}

/// □ as necessity, ⋄ as possibility.
pub fn alethic(kind: TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Nec => Some(Operator::Necessity),
        TokenKind::Pos => Some(Operator::Possibility),
        _ => connective(kind),
    }
}

/// □ as obligation, ⋄ as permission.
pub fn deontic(kind: TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Nec => Some(Operator::DeonticNecessity),
        TokenKind::Pos => Some(Operator::DeonticPossibility),
        _ => connective(kind),
    }
}

/// □ as knowledge, ⋄ as epistemic possibility.
pub fn epistemic(kind: TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Nec => Some(Operator::EpistemicNecessity),
        TokenKind::Pos => Some(Operator::EpistemicPossibility),
        _ => connective(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONNECTIVES: [(TokenKind, Operator); 5] = [
        (TokenKind::Not, Operator::Negation),
        (TokenKind::And, Operator::Conjunction),
        (TokenKind::Or, Operator::Disjunction),
        (TokenKind::If, Operator::Conditional),
        (TokenKind::Eq, Operator::Biconditional),
    ];

    #[test]
    fn connectives_are_flavor_independent() {
        for flavor in ModalFlavor::ALL {
            for (kind, op) in CONNECTIVES {
                assert_eq!(flavor.operator_for(kind), Some(op), "{flavor} {kind}");
            }
        }
    }

    #[test]
    fn modal_operators_follow_flavor() {
        assert_eq!(alethic(TokenKind::Nec), Some(Operator::Necessity));
        assert_eq!(alethic(TokenKind::Pos), Some(Operator::Possibility));
        assert_eq!(deontic(TokenKind::Nec), Some(Operator::DeonticNecessity));
        assert_eq!(deontic(TokenKind::Pos), Some(Operator::DeonticPossibility));
        assert_eq!(epistemic(TokenKind::Nec), Some(Operator::EpistemicNecessity));
        assert_eq!(
            epistemic(TokenKind::Pos),
            Some(Operator::EpistemicPossibility)
        );
    }

    #[test]
    fn non_operator_kinds_map_to_nothing() {
        for kind in [
            TokenKind::Forall,
            TokenKind::Exists,
            TokenKind::NotExists,
            TokenKind::Id,
            TokenKind::Neq,
            TokenKind::Variable,
            TokenKind::LParen,
            TokenKind::Eoi,
        ] {
            assert_eq!(ModalFlavor::Alethic.operator_for(kind), None, "{kind}");
        }
    }

    #[test]
    fn plain_functions_and_closures_are_mappings() {
        let f = deontic;
        assert_eq!(f.operator_for(TokenKind::Nec), Some(Operator::DeonticNecessity));

        let only_negation = |kind: TokenKind| match kind {
            TokenKind::Not => Some(Operator::Negation),
            _ => None,
        };
        assert_eq!(only_negation.operator_for(TokenKind::Not), Some(Operator::Negation));
        assert_eq!(only_negation.operator_for(TokenKind::And), None);
    }

    #[test]
    fn flavor_names_round_trip() {
        for flavor in ModalFlavor::ALL {
            assert_eq!(flavor.to_string().parse::<ModalFlavor>(), Ok(flavor));
        }
        assert!("doxastic".parse::<ModalFlavor>().is_err());
    }
}
