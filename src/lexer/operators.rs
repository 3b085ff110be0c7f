//! Punctuator/operator table.
//!
//! Ordered longest-first so the naive linear scan in `longest_match`
//! implements the "longest prefix wins" rule without extra bookkeeping.
//! `>>` and `>>=` are deliberately absent — the lexer always emits two (or
//! three) single-character tokens there and the parser reassembles them.
pub(crate) const OPERATORS: &[&str] = &[
    // 4-char
    "<=>",
    // 3-char
    "...", "->*", "<<=",
    // alphabetic alternative tokens and hard keywords resolved at lex time
    "and_eq", "or_eq", "xor_eq", "not_eq", "bitand", "bitor", "compl", "and", "or", "not", "xor",
    "new", "delete",
    // 2-char
    "::", "->", ".*", "++", "--", "<<", "==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=",
    "/=", "%=", "^=", "&=", "|=",
    // 1-char
    "{", "}", "(", ")", "[", "]", ";", ":", "?", "~", "!", "+", "-", "*", "/", "%", "^", "&", "|",
    "=", "<", ">", ",", ".",
];

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Find the longest operator in `OPERATORS` that is a prefix of `rest`,
/// subject to the lookahead rule: if the candidate's last character is an
/// identifier character, it only matches when the character following the
/// candidate in `rest` is not itself an identifier character (this is what
/// keeps `newtype` from lexing as the operator `new` followed by `type`).
pub(crate) fn longest_match(rest: &str) -> Option<&'static str> {
    let mut best: Option<&'static str> = None;
    for candidate in OPERATORS {
        if best.map_or(false, |b: &str| b.len() >= candidate.len()) {
            continue;
        }
        if !rest.starts_with(candidate) {
            continue;
        }
        let last_is_ident = candidate.chars().last().map_or(false, is_ident_char);
        if last_is_ident {
            let next = rest[candidate.len()..].chars().next();
            if next.map_or(false, is_ident_char) {
                continue;
            }
        }
        best = Some(candidate);
    }
    best
}
