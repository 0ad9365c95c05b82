//! Byte-level scanner for QML formulas.
//!
//! The scanner walks the raw UTF-8 bytes of the input instead of decoded
//! chars. Every logical symbol except `=` is a multi-byte sequence, and most
//! of them share their leading bytes (`∀ ∃ ∄ ∧ ∨` all start `E2 88`), so a
//! partial sequence is buffered until one byte either completes a symbol or
//! rules every symbol out. Lexing never fails: anything unrecognised is
//! emitted as an `Illegal` token and left for the parser to reject.

use crate::token::{Token, TokenKind};

/// Every multi-byte symbol the language knows, with its exact UTF-8 encoding.
const SYMBOLS: &[(&[u8], TokenKind)] = &[
    (&[0xC2, 0xAC], TokenKind::Not),             // ¬
    (&[0xE2, 0x86, 0x92], TokenKind::If),        // →
    (&[0xE2, 0x86, 0x94], TokenKind::Eq),        // ↔
    (&[0xE2, 0x88, 0x80], TokenKind::Forall),    // ∀
    (&[0xE2, 0x88, 0x83], TokenKind::Exists),    // ∃
    (&[0xE2, 0x88, 0x84], TokenKind::NotExists), // ∄
    (&[0xE2, 0x88, 0xA7], TokenKind::And),       // ∧
    (&[0xE2, 0x88, 0xA8], TokenKind::Or),        // ∨
    (&[0xE2, 0x89, 0xA0], TokenKind::Neq),       // ≠
    (&[0xE2, 0x8B, 0x84], TokenKind::Pos),       // ⋄
    (&[0xE2, 0x96, 0xA1], TokenKind::Nec),       // □
];

/// Bytes that open a symbol sequence. Seeing one always starts a fresh buffer.
const LEAD_BYTES: [u8; 2] = [0xC2, 0xE2];

/// Tokenize a formula. Always ends with exactly one `Eoi` token.
pub fn lex(src: &str) -> Vec<Token> {
    lex_bytes(src.as_bytes())
}

/// Tokenize arbitrary bytes. Broken UTF-8 is reported through `Illegal`
/// tokens whose literal is decoded lossily.
pub fn lex_bytes(src: &[u8]) -> Vec<Token> {
    let mut scanner = Scanner::default();
    for &byte in src {
        scanner.feed(byte);
    }
    scanner.finish()
}

/// Classify a completed identifier run.
///
/// DFA: 0 -[xyz]-> 1, 1 -[_]-> 2, 1 -[0-9]-> 3, 2 -[0-9]-> 3, 3 -[0-9]-> 3.
/// Accepting states are 1 and 3.
pub fn is_variable(word: &str) -> bool {
    let mut state = 0u8;
    for byte in word.bytes() {
        state = match (state, byte) {
            (0, b'x' | b'y' | b'z') => 1,
            (1, b'_') => 2,
            (1..=3, b'0'..=b'9') => 3,
            _ => return false,
        };
    }
    matches!(state, 1 | 3)
}

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'.'
}

fn is_continuation_byte(byte: u8) -> bool {
    SYMBOLS
        .iter()
        .any(|(bytes, _)| bytes[1..].contains(&byte))
}

// ──────────────────────────────────────────────
// Scanner
// ──────────────────────────────────────────────

#[derive(Default)]
struct Scanner {
    tokens: Vec<Token>,
    /// Pending run of `[A-Za-z0-9_.]`.
    identifier: String,
    /// Pending bytes of a multi-byte symbol.
    operator: Vec<u8>,
}

impl Scanner {
    fn feed(&mut self, byte: u8) {
        match byte {
            b' ' => self.flush(),
            b'(' => self.punctuation("(", TokenKind::LParen),
            b')' => self.punctuation(")", TokenKind::RParen),
            b'[' => self.punctuation("[", TokenKind::LBracket),
            b']' => self.punctuation("]", TokenKind::RBracket),
            b',' => self.punctuation(",", TokenKind::Comma),
            b'=' => self.punctuation("=", TokenKind::Id),
            b if LEAD_BYTES.contains(&b) => {
                self.flush();
                self.operator.push(b);
            }
            b if is_continuation_byte(b) => self.continue_operator(b),
            b if is_identifier_byte(b) => {
                self.flush_operator();
                self.identifier.push(char::from(b));
            }
            b => {
                self.flush();
                self.push_illegal(&[b]);
            }
        }
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush();
        self.tokens.push(Token::eoi());
        tracing::trace!(tokens = self.tokens.len(), "lexed formula");
        self.tokens
    }

    fn punctuation(&mut self, literal: &str, kind: TokenKind) {
        self.flush();
        self.tokens.push(Token::new(literal, kind));
    }

    /// Append a continuation byte to the pending symbol. A byte that
    /// completes a symbol commits it; one that still leaves a valid prefix is
    /// buffered; anything else turns the buffer plus the byte into one
    /// `Illegal` token. The `0x84` tail of `∄` and `⋄` is told apart here by
    /// the second byte already in the buffer.
    fn continue_operator(&mut self, byte: u8) {
        self.flush_identifier();
        self.operator.push(byte);

        if let Some(kind) = symbol_kind(&self.operator) {
            let literal = String::from_utf8_lossy(&self.operator).into_owned();
            self.operator.clear();
            self.tokens.push(Token::new(literal, kind));
        } else if !is_symbol_prefix(&self.operator) {
            self.flush_operator();
        }
    }

    fn flush(&mut self) {
        self.flush_identifier();
        self.flush_operator();
    }

    fn flush_identifier(&mut self) {
        if self.identifier.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.identifier);
        let kind = if is_variable(&word) {
            TokenKind::Variable
        } else {
            TokenKind::Identifier
        };
        self.tokens.push(Token::new(word, kind));
    }

    /// Pending symbol bytes that never completed are illegal.
    fn flush_operator(&mut self) {
        if self.operator.is_empty() {
            return;
        }
        let bytes = std::mem::take(&mut self.operator);
        self.push_illegal(&bytes);
    }

    fn push_illegal(&mut self, bytes: &[u8]) {
        let literal = String::from_utf8_lossy(bytes).into_owned();
        self.tokens.push(Token::new(literal, TokenKind::Illegal));
    }
}

fn symbol_kind(bytes: &[u8]) -> Option<TokenKind> {
    SYMBOLS
        .iter()
        .find(|(symbol, _)| *symbol == bytes)
        .map(|(_, kind)| *kind)
}

fn is_symbol_prefix(bytes: &[u8]) -> bool {
    SYMBOLS
        .iter()
        .any(|(symbol, _)| symbol.len() > bytes.len() && symbol.starts_with(bytes))
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
