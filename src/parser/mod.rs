//! Recursive-descent parser.
//!
//! This grammar needs genuine backtracking: a failed alternative must make
//! its nodes, and any symbol-table entries they caused, disappear. A
//! RAII-close-on-success builder doesn't fit that: instead [`try_node`]
//! attaches a node to its parent *optimistically* before parsing its
//! children (so nested semantic terminals can always walk a fully attached
//! ancestor chain for scope queries) and rolls the attachment back by
//! snapshot/restore on failure.

pub mod context;
pub mod grammar;
pub mod handlers;
pub mod terminals;

use crate::error::{ErrorLoc, ParseError};
use crate::intern::Interner;
use crate::symtab::{SymbolEnvironment, SymtabSnapshot};
use crate::token::{Token, TokenKind};
use crate::tree::{NodeId, SyntaxKind, Tree};
use context::ParseContext;

pub struct Parser<'a> {
    pub(crate) ctx: ParseContext<'a>,
    pub(crate) tree: Tree,
    pub(crate) env: SymbolEnvironment,
    pub(crate) interner: Interner,
}

const DEFAULT_RECURSION_LIMIT: usize = 4_096;

/// A snapshot of every piece of mutable parse state, taken before a
/// speculative attempt and restored verbatim on failure.
pub(crate) struct Snap {
    tree: usize,
    env: SymtabSnapshot,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_recursion_limit(tokens, DEFAULT_RECURSION_LIMIT)
    }

    pub fn with_recursion_limit(tokens: &'a [Token], recursion_limit: usize) -> Self {
        let mut interner = Interner::new();
        let env = SymbolEnvironment::new(&mut interner);
        Self {
            ctx: ParseContext::new(tokens, recursion_limit),
            tree: Tree::new(),
            env,
            interner,
        }
    }

    pub(crate) fn full_snapshot(&self) -> Snap {
        Snap {
            tree: self.tree.snapshot(),
            env: self.env.snapshot(),
            pos: self.ctx.pos(),
        }
    }

    pub(crate) fn restore(&mut self, snap: Snap) {
        self.tree.restore(snap.tree);
        self.env.restore(snap.env);
        self.ctx.set_pos(snap.pos);
    }

    pub(crate) fn at_operator(&self, text: &str) -> bool {
        let tok = self.ctx.current();
        matches!(tok.kind, TokenKind::Operator) && tok.content == text
    }

    pub(crate) fn at_identifier_text(&self, text: &str) -> bool {
        let tok = self.ctx.current();
        matches!(tok.kind, TokenKind::Identifier) && tok.content == text
    }

    fn current_loc(&self) -> ErrorLoc {
        let loc = self.ctx.current().location;
        ErrorLoc::new(loc.line as i64, loc.column as i64)
    }

    /// The token at the furthest position the parse ever reached, before
    /// whatever backtracking unwound it back here. That token, not wherever
    /// the parser ended up after unwinding, is the one the input actually
    /// got stuck on.
    fn maximum_extent_token(&self) -> &Token {
        let idx = self.ctx.maximum_extent().min(self.ctx.tokens().len() - 1);
        &self.ctx.tokens()[idx]
    }

    /// Run the grammar's root matcher (`translation-unit`) and report a
    /// parse error if it did not consume the whole token stream.
    pub fn parse(mut self) -> Result<(Tree, NodeId), ParseError> {
        let root = grammar::translation_unit::translation_unit(&mut self);

        if self.ctx.recursion_limited() {
            return Err(ParseError::RecursionLimitReached {
                loc: self.current_loc(),
                limit: self.ctx.recursion.limit,
            });
        }

        if !self.ctx.is_eof() {
            let tok = self.maximum_extent_token();
            return Err(ParseError::CouldNotMatchToken {
                loc: ErrorLoc::new(tok.location.line as i64, tok.location.column as i64),
                content: tok.content.clone(),
            });
        }

        Ok((self.tree, root))
    }
}

/// Consume the current token as a bare `TOKEN` leaf if it is the operator
/// `text`, attaching it directly under `parent`.
pub(crate) fn eat_operator(p: &mut Parser, parent: NodeId, text: &str) -> bool {
    if !p.at_operator(text) {
        return false;
    }
    let idx = p.ctx.advance();
    let leaf = p.tree.new_token_leaf(idx);
    p.tree.push_child(parent, leaf);
    true
}

/// Build a new node of `kind` under `parent`, attaching it *before* running
/// `build` so every semantic terminal invoked by `build` sees a fully
/// attached ancestor chain. On failure, detaches and discards everything
/// `build` created.
pub(crate) fn try_node<F>(p: &mut Parser, parent: NodeId, kind: SyntaxKind, build: F) -> Option<NodeId>
where
    F: FnOnce(&mut Parser, NodeId) -> bool,
{
    p.ctx.recursion.consume();
    if p.ctx.recursion_limited() {
        return None;
    }

    let snap = p.full_snapshot();
    let node = p.tree.new_node(kind);
    p.tree.push_child(parent, node);

    if build(p, node) {
        Some(node)
    } else {
        p.tree.node_mut(parent).children.pop();
        p.restore(snap);
        None
    }
}

/// Re-parent `parent`'s current last child under a fresh node of `kind`
/// (the left-associative-operator "wrap the last child" pattern), then let
/// `build` add the operator and right-hand operand. Rolls the wrap back on
/// failure.
pub(crate) fn wrap_last_child<F>(
    p: &mut Parser,
    parent: NodeId,
    kind: SyntaxKind,
    build: F,
) -> bool
where
    F: FnOnce(&mut Parser, NodeId) -> bool,
{
    let snap = p.full_snapshot();
    let lhs = match p.tree.node_mut(parent).children.pop() {
        Some(id) => id,
        None => return false,
    };

    let wrapper = p.tree.new_node(kind);
    p.tree.push_child(parent, wrapper);
    p.tree.push_child(wrapper, lhs);

    if build(p, wrapper) {
        true
    } else {
        p.tree.node_mut(parent).children.pop();
        p.restore(snap);
        p.tree.node_mut(parent).children.push(lhs);
        p.tree.node_mut(lhs).parent = Some(parent);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn parse_simple_declaration() {
        let tokens = tokenize("int x = 3.25f;").unwrap();
        let parser = Parser::new(&tokens);
        let (tree, root) = parser.parse().unwrap();
        assert_eq!(tree.kind(root), SyntaxKind::TRANSLATION_UNIT);
    }

    #[test]
    fn reports_could_not_match_token() {
        let tokens = tokenize("int x = ;").unwrap();
        let parser = Parser::new(&tokens);
        let err = parser.parse().unwrap_err();
        assert!(matches!(err, ParseError::CouldNotMatchToken { .. }));
    }
}
