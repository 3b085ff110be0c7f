//! Error taxonomy: a small closed set of variants with positional data,
//! deriving `Display`/`std::error::Error` via `thiserror` instead of hand-
//! rolling them.

use thiserror::Error as ThisError;

/// 1-based line/column; `line == -1` marks a file-level error (§6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLoc {
    pub line: i64,
    pub column: i64,
}

impl ErrorLoc {
    pub fn new(line: i64, column: i64) -> Self {
        Self { line, column }
    }

    pub fn file_level() -> Self {
        Self { line: -1, column: 1 }
    }
}

#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum LexError {
    #[error("empty escape sequence")]
    EmptyEscape { loc: ErrorLoc },
    #[error("unknown escape character '\\{ch}'")]
    UnknownEscape { loc: ErrorLoc, ch: char },
    #[error("unterminated string literal")]
    UnterminatedString { loc: ErrorLoc },
    #[error("unterminated character literal")]
    UnterminatedChar { loc: ErrorLoc },
    #[error("missing exponent digit")]
    MissingExponentDigit { loc: ErrorLoc },
    #[error("integer literal overflows a decimal integer type")]
    DecimalIntegerOverflow { loc: ErrorLoc },
    #[error("unknown float literal suffix '{suffix}'")]
    UnknownFloatSuffix { loc: ErrorLoc, suffix: char },
    #[error("unclassifiable character '{ch}'")]
    UnclassifiableChar { loc: ErrorLoc, ch: char },
}

impl LexError {
    pub fn loc(&self) -> ErrorLoc {
        match *self {
            LexError::EmptyEscape { loc }
            | LexError::UnknownEscape { loc, .. }
            | LexError::UnterminatedString { loc }
            | LexError::UnterminatedChar { loc }
            | LexError::MissingExponentDigit { loc }
            | LexError::DecimalIntegerOverflow { loc }
            | LexError::UnknownFloatSuffix { loc, .. }
            | LexError::UnclassifiableChar { loc, .. } => loc,
        }
    }
}

#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum GrammarError {
    #[error("malformed template-parameter structure")]
    MalformedTemplateParameter { loc: ErrorLoc },
    #[error("missing identifier in namespace definition")]
    MissingNamespaceIdentifier { loc: ErrorLoc },
    #[error("decltype-specifier not yet supported in a nested-name-specifier")]
    DecltypeInNestedNameSpecifier { loc: ErrorLoc },
    #[error("scope-resolution failure: node has no reachable scope")]
    UnreachableScope { loc: ErrorLoc },
}

impl GrammarError {
    pub fn loc(&self) -> ErrorLoc {
        match *self {
            GrammarError::MalformedTemplateParameter { loc }
            | GrammarError::MissingNamespaceIdentifier { loc }
            | GrammarError::DecltypeInNestedNameSpecifier { loc }
            | GrammarError::UnreachableScope { loc } => loc,
        }
    }
}

#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum ParseError {
    #[error("could not match token '{content}'")]
    CouldNotMatchToken { loc: ErrorLoc, content: String },
    #[error("root matcher failed to match translation-unit")]
    RootMatchFailed { loc: ErrorLoc },
    #[error("parser recursion limit ({limit}) reached")]
    RecursionLimitReached { loc: ErrorLoc, limit: usize },
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

impl ParseError {
    pub fn loc(&self) -> ErrorLoc {
        match self {
            ParseError::CouldNotMatchToken { loc, .. } => *loc,
            ParseError::RootMatchFailed { loc } => *loc,
            ParseError::RecursionLimitReached { loc, .. } => *loc,
            ParseError::Grammar(g) => g.loc(),
        }
    }
}

/// Render `"<prog>: <unit>:<line>:<col>: <msg>\n<offending-line>\n<spaces>^"`
/// as specified in §6.
pub fn render_caret(prog: &str, unit: &str, loc: ErrorLoc, msg: &str, source: &str) -> String {
    let mut out = format!("{prog}: {unit}:{}:{}: {msg}\n", loc.line, loc.column);
    if loc.line >= 1 {
        if let Some(line_text) = source.lines().nth((loc.line - 1) as usize) {
            out.push_str(line_text);
            out.push('\n');
            let col = loc.column.max(1) as usize;
            out.push_str(&" ".repeat(col - 1));
            out.push('^');
        }
    }
    out
}
