//! A lexer and context-sensitive concrete-syntax-tree front end for a
//! C++-family language.
//!
//! [`tokenize`] runs the lexer to completion; [`build_syntax_tree`] drives
//! the recursive-descent parser over the resulting tokens, then applies
//! right-shift reassembly and tree contraction as post-parse passes. The
//! two are kept separate, rather than fused into one call, so tooling that
//! only needs tokens (syntax highlighting, a formatter) never has to pay
//! for a full parse.

mod error;
mod intern;
mod lexer;
mod limit;
mod parser;
mod symtab;
mod token;
mod tree;

pub use crate::error::{render_caret, ErrorLoc, GrammarError, LexError, ParseError};
pub use crate::lexer::tokenize;
pub use crate::parser::Parser;
pub use crate::token::{FloatSubtype, IntSubtype, Location, Token, TokenKind};
pub use crate::tree::{contract::contract, right_shift::fix_right_shifts, NodeId, SyntaxKind, Tree};

/// A fully parsed translation unit: the contracted, right-shift-repaired
/// tree, its root, and the token vector it was built from (kept around so
/// callers can render `TOKEN` leaves back to source text).
#[derive(Debug)]
pub struct SyntaxTree {
    pub tree: Tree,
    pub root: NodeId,
    pub tokens: Vec<Token>,
}

impl SyntaxTree {
    pub fn debug_string(&self) -> String {
        self.tree.debug_string(self.root, &self.tokens)
    }
}

/// Parse `tokens` into a [`SyntaxTree`]: run the grammar driver,
/// then reassemble any split `>>`/`>>=` pairs and splice away intermediate
/// grouping nodes.
#[tracing::instrument(level = "trace", skip(tokens))]
pub fn build_syntax_tree(mut tokens: Vec<Token>) -> Result<SyntaxTree, ParseError> {
    let parser = Parser::new(&tokens);
    let (mut tree, root) = parser.parse()?;
    fix_right_shifts(&mut tree, &mut tokens, root);
    contract(&mut tree, root);
    Ok(SyntaxTree { tree, root, tokens })
}

/// Parse `tokens` with a caller-supplied recursion limit.
pub fn build_syntax_tree_with_recursion_limit(
    mut tokens: Vec<Token>,
    recursion_limit: usize,
) -> Result<SyntaxTree, ParseError> {
    let parser = Parser::with_recursion_limit(&tokens, recursion_limit);
    let (mut tree, root) = parser.parse()?;
    fix_right_shifts(&mut tree, &mut tokens, root);
    contract(&mut tree, root);
    Ok(SyntaxTree { tree, root, tokens })
}
