//! `function-body`, `compound-statement`, and `statement`.
//! Reached from `declaration::function_definition`, the same way
//! `member_declaration` reuses `simple_declaration` rather than growing its
//! own copy.

use crate::tree::{NodeId, SyntaxKind};

use super::super::{eat_operator, terminals, try_node, Parser};
use super::declaration::simple_declaration;
use super::expression::expression;

pub(crate) fn function_body(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    compound_statement(p, parent)
}

pub(crate) fn compound_statement(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::COMPOUND_STATEMENT, |p, node| {
        if !eat_operator(p, node, "{") {
            return false;
        }
        statement_seq(p, node);
        eat_operator(p, node, "}")
    })
}

fn statement_seq(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    if p.at_operator("}") || p.ctx.is_eof() {
        return None;
    }
    try_node(p, parent, SyntaxKind::STATEMENT_SEQ, |p, node| {
        while !p.at_operator("}") && !p.ctx.is_eof() {
            if statement(p, node).is_none() {
                break;
            }
        }
        true
    })
}

fn statement(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::STATEMENT, |p, node| {
        jump_statement(p, node).is_some()
            || simple_declaration(p, node).is_some()
            || (expression(p, node, None).is_some() && eat_operator(p, node, ";"))
    })
}

/// `jump-statement -> 'return' expression? ';'` (the only jump form this
/// subset needs).
fn jump_statement(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::JUMP_STATEMENT, |p, node| {
        if !terminals::keyword(p, node, "return") {
            return false;
        }
        if !p.at_operator(";") {
            expression(p, node, None);
        }
        eat_operator(p, node, ";")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::Parser;
    use crate::tree::SyntaxKind;

    #[test]
    fn compound_statement_with_return() {
        let tokens = tokenize("{ return 1 ; }").unwrap();
        let mut p = Parser::new(&tokens);
        let root = p.tree.new_node(SyntaxKind::ERROR);
        assert!(compound_statement(&mut p, root).is_some());
        assert!(p.ctx.is_eof());
    }

    #[test]
    fn compound_statement_with_local_declaration() {
        let tokens = tokenize("{ int x = 2 ; return x ; }").unwrap();
        let mut p = Parser::new(&tokens);
        let root = p.tree.new_node(SyntaxKind::ERROR);
        assert!(compound_statement(&mut p, root).is_some());
        assert!(p.ctx.is_eof());
    }
}
