//! Expression grammar: a pragmatic precedence ladder
//! covering exactly the constructs this subset's scenarios exercise —
//! comma, assignment, shift (for the `>>` reassembly scenarios), additive,
//! unary/new, and primary expressions.

use crate::tree::{NodeId, SyntaxKind};

use super::super::{eat_operator, terminals, try_node, wrap_last_child, Parser};

/// `expression -> assignment-expression (',' assignment-expression)*`,
/// left-associative.
pub(crate) fn expression(p: &mut Parser, parent: NodeId, ns: Option<NodeId>) -> Option<NodeId> {
    let first = assignment_expression(p, parent, ns)?;
    while p.at_operator(",") {
        let wrapped = wrap_last_child(p, parent, SyntaxKind::EXPRESSION, |p, node| {
            eat_operator(p, node, ",") && assignment_expression(p, node, ns).is_some()
        });
        if !wrapped {
            break;
        }
    }
    Some(first)
}

/// `assignment-expression -> shift-expression (assignment-operator
/// assignment-expression)?`, right-associative: a single optional wrap,
/// not a loop.
pub(crate) fn assignment_expression(
    p: &mut Parser,
    parent: NodeId,
    ns: Option<NodeId>,
) -> Option<NodeId> {
    let lhs = shift_expression(p, parent, ns)?;
    if terminals::assignment_operator(p, parent).is_some() {
        if assignment_expression(p, parent, ns).is_some() {
            return Some(lhs);
        }
        return None;
    }
    Some(lhs)
}

/// `shift-expression -> additive-expression (shift-operator
/// additive-expression)*`, left-associative.
fn shift_expression(p: &mut Parser, parent: NodeId, ns: Option<NodeId>) -> Option<NodeId> {
    let first = additive_expression(p, parent, ns)?;
    loop {
        let wrapped = wrap_last_child(p, parent, SyntaxKind::SHIFT_EXPRESSION, |p, node| {
            terminals::shift_operator(p, node).is_some() && additive_expression(p, node, ns).is_some()
        });
        if !wrapped {
            break;
        }
    }
    Some(first)
}

/// `additive-expression -> unary-expression (('+' | '-') unary-expression)*`,
/// left-associative.
fn additive_expression(p: &mut Parser, parent: NodeId, ns: Option<NodeId>) -> Option<NodeId> {
    let first = unary_expression(p, parent, ns)?;
    loop {
        let wrapped = wrap_last_child(p, parent, SyntaxKind::ADDITIVE_EXPRESSION, |p, node| {
            (eat_operator(p, node, "+") || eat_operator(p, node, "-"))
                && unary_expression(p, node, ns).is_some()
        });
        if !wrapped {
            break;
        }
    }
    Some(first)
}

fn unary_expression(p: &mut Parser, parent: NodeId, ns: Option<NodeId>) -> Option<NodeId> {
    if let Some(id) = new_expression(p, parent, ns) {
        return Some(id);
    }
    postfix_expression(p, parent, ns)
}

/// `new-expression -> 'new' type-specifier ('[' expression ']')?`.
fn new_expression(p: &mut Parser, parent: NodeId, ns: Option<NodeId>) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::NEW_EXPRESSION, |p, node| {
        if !terminals::keyword(p, node, "new") {
            return false;
        }
        if super::declarator::type_specifier(p, node, None).is_none() {
            return false;
        }
        if eat_operator(p, node, "[") {
            return expression(p, node, ns).is_some() && eat_operator(p, node, "]");
        }
        true
    })
}

fn postfix_expression(p: &mut Parser, parent: NodeId, ns: Option<NodeId>) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::POSTFIX_EXPRESSION, |p, node| {
        primary_expression(p, node, ns).is_some()
    })
}

fn primary_expression(p: &mut Parser, parent: NodeId, ns: Option<NodeId>) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::PRIMARY_EXPRESSION, |p, node| {
        if literal(p, node).is_some() {
            return true;
        }
        if eat_operator(p, node, "(") {
            return expression(p, node, ns).is_some() && eat_operator(p, node, ")");
        }
        id_expression(p, node, ns).is_some()
    })
}

/// `literal`: any token whose kind is one of the lexer's literal kinds
/// — integer, float, bool, pointer (`nullptr`), string, char.
pub(crate) fn literal(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    if !p.ctx.current().kind.is_literal() {
        return None;
    }
    try_node(p, parent, SyntaxKind::LITERAL, |p, node| {
        let idx = p.ctx.advance();
        let leaf = p.tree.new_token_leaf(idx);
        p.tree.push_child(node, leaf);
        true
    })
}

fn id_expression(p: &mut Parser, parent: NodeId, ns: Option<NodeId>) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::ID_EXPRESSION, |p, node| {
        unqualified_id(p, node, ns).is_some()
    })
}

fn unqualified_id(p: &mut Parser, parent: NodeId, _ns: Option<NodeId>) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::UNQUALIFIED_ID, |p, node| {
        terminals::identifier(p, node)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::Parser;
    use crate::tree::SyntaxKind;

    #[test]
    fn float_literal_parses() {
        let tokens = tokenize("3.25f").unwrap();
        let mut p = Parser::new(&tokens);
        let root = p.tree.new_node(SyntaxKind::ERROR);
        assert!(expression(&mut p, root, None).is_some());
        assert!(p.ctx.is_eof());
    }

    #[test]
    fn right_shift_collapses_in_genuine_shift_context() {
        let tokens = tokenize("x >> y").unwrap();
        let mut p = Parser::new(&tokens);
        let root = p.tree.new_node(SyntaxKind::ERROR);
        assert!(expression(&mut p, root, None).is_some());
        assert!(p.ctx.is_eof());
    }

    #[test]
    fn new_expression_with_array_size() {
        let tokens = tokenize("new int [ 4 ]").unwrap();
        let mut p = Parser::new(&tokens);
        let root = p.tree.new_node(SyntaxKind::ERROR);
        assert!(expression(&mut p, root, None).is_some());
        assert!(p.ctx.is_eof());
    }
}
