//! `class-specifier`, `class-head`, `member-specification`.

use crate::tree::{NodeId, SyntaxKind};

use super::super::{eat_operator, handlers, terminals, try_node, Parser};

/// `class-specifier`: a `class-head` followed by a brace-enclosed
/// `member-specification`. `enclosing_declaration` is the `simple-declaration`
/// (or `member-declaration`) this specifier sits inside, which becomes the
/// `declaration` half of the class-name binding the head introduces, while
/// the class-specifier node itself is the `complete_declaration`.
pub(crate) fn class_specifier(
    p: &mut Parser,
    parent: NodeId,
    enclosing_declaration: NodeId,
) -> Option<NodeId> {
    let result = try_node(p, parent, SyntaxKind::CLASS_SPECIFIER, |p, node| {
        class_head(p, node, node).is_some()
            && eat_operator(p, node, "{")
            && member_specification(p, node).is_some()
            && eat_operator(p, node, "}")
    });
    if let Some(id) = result {
        handlers::class_specifier_done(p, id, enclosing_declaration);
    }
    result
}

fn class_head(p: &mut Parser, parent: NodeId, class_specifier_id: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::CLASS_HEAD, |p, node| {
        (terminals::keyword(p, node, "class") || terminals::keyword(p, node, "struct"))
            && class_head_name(p, node, class_specifier_id).is_some()
    })
}

fn class_head_name(
    p: &mut Parser,
    parent: NodeId,
    class_specifier_id: NodeId,
) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::CLASS_HEAD_NAME, |p, node| {
        let ns = p.env.current_ns();
        terminals::class_name(p, node, ns, Some(class_specifier_id)).is_some()
    })
}

/// `member-specification`: zero or more access specifiers or member
/// declarations, always succeeding (an empty class body is valid).
fn member_specification(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::MEMBER_SPECIFICATION, |p, node| {
        while !p.at_operator("}") && !p.ctx.is_eof() {
            if access_specifier(p, node).is_some() {
                eat_operator(p, node, ":");
                continue;
            }
            if member_declaration(p, node).is_none() {
                break;
            }
        }
        true
    })
}

fn member_declaration(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    super::declaration::simple_declaration(p, parent)
}

fn access_specifier(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::ACCESS_SPECIFIER, |p, node| {
        terminals::keyword(p, node, "public")
            || terminals::keyword(p, node, "private")
            || terminals::keyword(p, node, "protected")
    })
}
