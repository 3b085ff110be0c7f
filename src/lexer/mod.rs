//! Lexical analyzer.
//!
//! `tokenize` runs to completion and returns the whole token vector before
//! any parsing starts, dispatching per-character in `advance`.

pub(crate) mod cursor;
pub(crate) mod number;
pub(crate) mod operators;
pub(crate) mod string_escape;

use cursor::Cursor;
use number::Base;

use crate::error::{ErrorLoc, LexError};
use crate::token::{FloatSubtype, IntSubtype, Location, Token, TokenKind};
use ordered_float::OrderedFloat;

/// Tokenize `source` to completion. On success the final token is an `Eof`
/// sentinel so the parser never has to special-case running off the end of
/// the vector (this also gives `maximum_extent` somewhere sensible to sit).
#[tracing::instrument(level = "trace", skip(source))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();

    loop {
        skip_trivia(&mut cursor);
        let line = cursor.line();
        let column = cursor.column();
        let Some(c) = cursor.first() else {
            tokens.push(Token::new("", Location::new(line, column), TokenKind::Eof));
            break;
        };

        let token = lex_one(&mut cursor, c, line, column)?;
        tokens.push(token);
    }

    Ok(tokens)
}

fn skip_trivia(cursor: &mut Cursor<'_>) {
    loop {
        match cursor.first() {
            Some(c) if c.is_whitespace() => {
                cursor.bump();
            }
            Some('/') if cursor.second() == Some('/') => {
                while !matches!(cursor.first(), None | Some('\n')) {
                    cursor.bump();
                }
            }
            Some('/') if cursor.second() == Some('*') => {
                cursor.bump_n(2);
                loop {
                    match cursor.first() {
                        None => break,
                        Some('*') if cursor.second() == Some('/') => {
                            cursor.bump_n(2);
                            break;
                        }
                        Some(_) => {
                            cursor.bump();
                        }
                    }
                }
            }
            _ => break,
        }
    }
}

fn lex_one(cursor: &mut Cursor<'_>, c: char, line: u32, column: u32) -> Result<Token, LexError> {
    let loc = Location::new(line, column);

    if c == '"' || c == '\'' {
        let start = cursor.rest();
        cursor.bump();
        let decoded =
            string_escape::decode_quoted(cursor, c, line, column)?;
        let consumed = start.len() - cursor.rest().len();
        let content = start[..consumed].to_string();
        let kind = if c == '"' {
            TokenKind::StringLiteral { decoded }
        } else {
            TokenKind::CharLiteral { decoded }
        };
        return Ok(Token::new(content, loc, kind));
    }

    if is_ident_start(c) {
        return Ok(lex_identifier_like(cursor, loc));
    }

    if c.is_ascii_digit() || (c == '.' && cursor.second().map_or(false, |d| d.is_ascii_digit())) {
        return lex_number(cursor, loc);
    }

    if let Some(op) = operators::longest_match(cursor.rest()) {
        cursor.bump_n(op.chars().count());
        return Ok(Token::new(op, loc, TokenKind::Operator));
    }

    let err_loc = ErrorLoc::new(line as i64, column as i64);
    Err(LexError::UnclassifiableChar { loc: err_loc, ch: c })
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn lex_identifier_like(cursor: &mut Cursor<'_>, loc: Location) -> Token {
    let mut text = String::new();
    while let Some(c) = cursor.first() {
        if is_ident_continue(c) {
            text.push(c);
            cursor.bump();
        } else {
            break;
        }
    }

    let kind = match text.as_str() {
        "true" => TokenKind::BoolLiteral(true),
        "false" => TokenKind::BoolLiteral(false),
        "nullptr" => TokenKind::PointerLiteral,
        _ => TokenKind::Identifier,
    };
    Token::new(text, loc, kind)
}

fn lex_number(cursor: &mut Cursor<'_>, loc: Location) -> Result<Token, LexError> {
    let err_loc = ErrorLoc::new(loc.line as i64, loc.column as i64);
    let mut text = String::new();

    let base = if cursor.first() == Some('0')
        && matches!(cursor.second(), Some('x') | Some('X'))
    {
        text.push(cursor.bump().unwrap());
        text.push(cursor.bump().unwrap());
        Base::Hex
    } else if cursor.first() == Some('0') && cursor.second().map_or(false, |c| c.is_ascii_digit())
    {
        Base::Octal
    } else {
        Base::Decimal
    };

    let is_digit = |c: char| match base {
        Base::Hex => c.is_ascii_hexdigit(),
        Base::Octal => matches!(c, '0'..='7'),
        Base::Decimal => c.is_ascii_digit(),
    };

    let mut int_digits = String::new();
    while let Some(c) = cursor.first() {
        if is_digit(c) {
            int_digits.push(c);
            text.push(c);
            cursor.bump();
        } else {
            break;
        }
    }

    let mut frac_digits = String::new();
    let mut is_float = false;
    if cursor.first() == Some('.') {
        is_float = true;
        text.push(cursor.bump().unwrap());
        while let Some(c) = cursor.first() {
            if is_digit(c) {
                frac_digits.push(c);
                text.push(c);
                cursor.bump();
            } else {
                break;
            }
        }
    }

    let exponent_char = match base {
        Base::Hex => ('p', 'P'),
        _ => ('e', 'E'),
    };
    let mut exponent: i32 = 0;
    if matches!(cursor.first(), Some(c) if c == exponent_char.0 || c == exponent_char.1) {
        is_float = true;
        text.push(cursor.bump().unwrap());
        let mut sign = 1i32;
        if matches!(cursor.first(), Some('+') | Some('-')) {
            if cursor.first() == Some('-') {
                sign = -1;
            }
            text.push(cursor.bump().unwrap());
        }
        let mut exp_digits = String::new();
        while let Some(c) = cursor.first() {
            if c.is_ascii_digit() {
                exp_digits.push(c);
                text.push(c);
                cursor.bump();
            } else {
                break;
            }
        }
        if exp_digits.is_empty() {
            return Err(LexError::MissingExponentDigit { loc: err_loc });
        }
        exponent = sign * exp_digits.parse::<i32>().unwrap_or(0);
    }

    if is_float {
        let mut subtype = FloatSubtype::Double;
        if matches!(cursor.first(), Some('f') | Some('F')) {
            text.push(cursor.bump().unwrap());
            subtype = FloatSubtype::Float;
        } else if matches!(cursor.first(), Some('l') | Some('L')) {
            text.push(cursor.bump().unwrap());
            subtype = FloatSubtype::LongDouble;
        } else if let Some(c) = cursor.first() {
            if is_ident_continue(c) && !is_digit(c) {
                return Err(LexError::UnknownFloatSuffix { loc: err_loc, suffix: c });
            }
        }

        let value = match base {
            Base::Hex => number::evaluate_hex_float(&int_digits, &frac_digits, exponent),
            _ => number::evaluate_decimal_float(&int_digits, &frac_digits, exponent),
        };
        return Ok(Token::new(
            text,
            loc,
            TokenKind::FloatLiteral { value: OrderedFloat(value), subtype },
        ));
    }

    let mut has_u = false;
    let mut l_count = 0u8;
    loop {
        match cursor.first() {
            Some('u') | Some('U') if !has_u => {
                has_u = true;
                text.push(cursor.bump().unwrap());
            }
            Some('l') | Some('L') if l_count < 2 => {
                l_count += 1;
                text.push(cursor.bump().unwrap());
            }
            _ => break,
        }
    }

    let (value, subtype) = number::evaluate_integer(&int_digits, base, has_u, l_count, err_loc)?;
    Ok(Token::new(text, loc, TokenKind::IntegerLiteral { value, subtype: normalize(subtype) }))
}

fn normalize(s: IntSubtype) -> IntSubtype {
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn simple_declaration() {
        let tokens = tokenize("int x = 3.25f;").unwrap();
        assert_eq!(tokens.len(), 6); // int x = 3.25f ; EOF
        match &tokens[3].kind {
            TokenKind::FloatLiteral { value, subtype } => {
                assert!((value.0 - 3.25).abs() < 1e-9);
                assert_eq!(*subtype, FloatSubtype::Float);
            }
            other => panic!("expected float literal, got {other:?}"),
        }
    }

    #[test]
    fn right_shift_splits_into_two_gt() {
        let tokens = tokenize("a<b<int>>").unwrap();
        let gts: Vec<_> = tokens.iter().filter(|t| t.is_operator(">")).collect();
        assert_eq!(gts.len(), 2);
    }

    #[test]
    fn line_column_tracks_newlines() {
        let tokens = tokenize("int\nx;").unwrap();
        assert_eq!(tokens[0].location, Location::new(1, 1));
        assert_eq!(tokens[1].location, Location::new(2, 1));
    }

    #[test]
    fn tokens_strictly_increase_in_position() {
        let tokens = tokenize("int x = (a << 2) >> 3;").unwrap();
        for w in tokens.windows(2) {
            let a = (w[0].location.line, w[0].location.column);
            let b = (w[1].location.line, w[1].location.column);
            assert!(a < b, "{:?} should precede {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn new_keyword_lexes_as_operator_not_identifier_prefix() {
        let ks = kinds("newtype");
        assert_eq!(ks.len(), 2); // identifier "newtype", EOF
        assert!(matches!(ks[0], TokenKind::Identifier));
    }

    #[test]
    fn string_literal_decodes_escapes() {
        let tokens = tokenize(r#""a\nb""#).unwrap();
        match &tokens[0].kind {
            TokenKind::StringLiteral { decoded } => assert_eq!(decoded, b"a\nb"),
            other => panic!("{other:?}"),
        }
    }
}
