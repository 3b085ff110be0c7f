//! Token data model: a small positional `Location` type, a tagged
//! `TokenKind` enum, and a `Token` that owns its textual content plus, for
//! typed variants, a decoded value.

use ordered_float::OrderedFloat;

/// 1-based source position of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Signedness/width subtype of an integer literal, per the promotion table
/// in §4.1. Variant order matches the promotion chains so `PartialOrd` can
/// express "at least as wide as".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntSubtype {
    SignedInt,
    UnsignedInt,
    SignedLong,
    UnsignedLong,
    SignedLongLong,
    UnsignedLongLong,
}

impl IntSubtype {
    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            IntSubtype::UnsignedInt | IntSubtype::UnsignedLong | IntSubtype::UnsignedLongLong
        )
    }
}

/// Subtype of a float literal, selected by suffix (§4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FloatSubtype {
    Float,
    Double,
    LongDouble,
}

/// A tagged variant over the token categories in §3.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral { value: u64, subtype: IntSubtype },
    FloatLiteral { value: OrderedFloat<f64>, subtype: FloatSubtype },
    BoolLiteral(bool),
    PointerLiteral,
    StringLiteral { decoded: Vec<u8> },
    CharLiteral { decoded: Vec<u8> },
    Operator,
    Eof,
}

impl TokenKind {
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral { .. }
                | TokenKind::FloatLiteral { .. }
                | TokenKind::BoolLiteral(_)
                | TokenKind::PointerLiteral
                | TokenKind::StringLiteral { .. }
                | TokenKind::CharLiteral { .. }
        )
    }
}

/// An immutable lexical token. `content` is the exact source slice the token
/// was lexed from; `kind` carries any decoded semantic value.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub content: String,
    pub location: Location,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(content: impl Into<String>, location: Location, kind: TokenKind) -> Self {
        Self {
            content: content.into(),
            location,
            kind,
        }
    }

    /// True for the two `>` tokens the lexer deliberately splits `>>`/`>>=`
    /// into (§4.1 dispatch note, §4.6).
    pub fn is_operator(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Operator) && self.content == text
    }

    /// Two tokens are textually contiguous when the second starts exactly
    /// where the first ends on the same line (§4.6).
    pub fn immediately_followed_by(&self, next: &Token) -> bool {
        self.location.line == next.location.line
            && next.location.column == self.location.column + self.content.chars().count() as u32
    }
}
