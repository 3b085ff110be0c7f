//! `type-specifier`, `declarator`, and friends.

use crate::tree::{NodeId, SyntaxKind};

use super::super::{eat_operator, terminals, try_node, Parser};

const BUILTIN_TYPE_KEYWORDS: &[&str] = &[
    "int", "char", "bool", "void", "double", "float", "long", "short", "unsigned", "signed", "auto",
];

/// `type-specifier`: a built-in type keyword, a `decltype-specifier`, or a
/// possibly namespace-qualified `class-name`/`typedef-name`.
/// `class_head_ctx` is threaded through to [`terminals::class_name`] so a
/// `class-head-name` can introduce a brand new binding; every other caller
/// passes `None`.
pub(crate) fn type_specifier(
    p: &mut Parser,
    parent: NodeId,
    class_head_ctx: Option<NodeId>,
) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::TYPE_SPECIFIER, |p, node| {
        for kw in BUILTIN_TYPE_KEYWORDS {
            if terminals::keyword(p, node, kw) {
                return true;
            }
        }
        if decltype_specifier(p, node).is_some() {
            return true;
        }

        let pushes = maybe_nested_name_specifier(p, node);
        let ns = p.env.current_ns();
        let matched = terminals::class_name(p, node, ns, class_head_ctx).is_some();
        for _ in 0..pushes {
            p.env.pop_ns();
        }
        matched
    })
}

/// A `nested-name-specifier`: zero or more `identifier ::`
/// components, each resolved (namespace table first, then class table)
/// under the namespace context active at the time it's seen, pushing the
/// resolved scope for every subsequent component to qualify against.
/// Returns the number of scopes pushed, which the caller must pop exactly
/// that many times once it is done resolving the final component.
fn maybe_nested_name_specifier(p: &mut Parser, parent: NodeId) -> usize {
    let mut pushes = 0;
    while looks_like_qualifier(p) {
        let ns = p.env.current_ns();
        let Some(wrapper) = try_node(p, parent, SyntaxKind::NESTED_NAME_SPECIFIER, |p, node| {
            let matched = terminals::original_namespace_name(p, node, ns).is_some()
                || terminals::class_name(p, node, ns, None).is_some();
            matched && eat_operator(p, node, "::")
        }) else {
            break;
        };
        let component = p.tree.children(wrapper)[0];
        let declaration = p.tree.node(component).declaration;
        let next_scope = match p.tree.kind(component) {
            SyntaxKind::ORIGINAL_NAMESPACE_NAME => declaration.and_then(|d| p.tree.scope_below(d)),
            SyntaxKind::CLASS_NAME => declaration,
            _ => None,
        };
        p.env.push_ns(next_scope);
        pushes += 1;
    }
    pushes
}

fn looks_like_qualifier(p: &Parser) -> bool {
    use crate::token::TokenKind;
    matches!(p.ctx.current().kind, TokenKind::Identifier) && p.ctx.nth(1).is_operator("::")
}

fn decltype_specifier(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::DECLTYPE_SPECIFIER, |p, node| {
        terminals::keyword(p, node, "decltype")
            && eat_operator(p, node, "(")
            && super::expression::expression(p, node, None).is_some()
            && eat_operator(p, node, ")")
    })
}

/// `declarator`: a `ptr-declarator`, with trailing-return-type repair applied when a `->` follows.
pub(crate) fn declarator(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::DECLARATOR, |p, node| {
        if ptr_declarator(p, node).is_none() {
            return false;
        }
        if p.at_operator("->") {
            repair_noptr_declarator_for_trailing_return(p, node);
            if parameters_and_qualifiers(p, node).is_none() {
                return false;
            }
            return trailing_return_type(p, node).is_some();
        }
        true
    })
}

/// The §4.8 repair: `noptr-declarator` greedily consumes a trailing
/// `parameters-and-qualifiers` per its own production, but a trailing
/// return type (`auto f() -> T`) needs that clause re-parsed one level up,
/// as the `declarator`'s own `parameters-and-qualifiers` + `->`
/// `trailing-return-type`. Detach the over-eager child, rewind the token
/// cursor to its first token, and let the caller re-parse from there.
/// The detached subtree is left allocated-but-unreachable in the arena.
fn repair_noptr_declarator_for_trailing_return(p: &mut Parser, declarator_node: NodeId) {
    let Some(&noptr) = p
        .tree
        .children(declarator_node)
        .iter()
        .rev()
        .find(|&&c| p.tree.kind(c) == SyntaxKind::NOPTR_DECLARATOR)
    else {
        return;
    };
    let Some(&last) = p.tree.children(noptr).last() else {
        return;
    };
    if p.tree.kind(last) != SyntaxKind::PARAMETERS_AND_QUALIFIERS {
        return;
    }
    let Some(&first_child) = p.tree.children(last).first() else {
        return;
    };
    let Some(tok_idx) = p.tree.token_index_of(first_child) else {
        return;
    };
    p.tree.node_mut(noptr).children.pop();
    p.ctx.set_pos(tok_idx);
}

fn ptr_declarator(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::PTR_DECLARATOR, |p, node| {
        while eat_operator(p, node, "*") {}
        noptr_declarator(p, node).is_some()
    })
}

fn noptr_declarator(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::NOPTR_DECLARATOR, |p, node| {
        if !terminals::identifier(p, node) {
            return false;
        }
        if p.at_operator("(") {
            parameters_and_qualifiers(p, node);
        }
        true
    })
}

fn parameters_and_qualifiers(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::PARAMETERS_AND_QUALIFIERS, |p, node| {
        if !eat_operator(p, node, "(") {
            return false;
        }
        if !p.at_operator(")") {
            parameter_declaration_clause(p, node);
        }
        eat_operator(p, node, ")")
    })
}

fn parameter_declaration_clause(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::PARAMETER_DECLARATION_CLAUSE, |p, node| {
        parameter_declaration_list(p, node).is_some()
    })
}

fn parameter_declaration_list(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::PARAMETER_DECLARATION_LIST, |p, node| {
        if parameter_declaration(p, node).is_none() {
            return false;
        }
        while eat_operator(p, node, ",") {
            if parameter_declaration(p, node).is_none() {
                return false;
            }
        }
        true
    })
}

fn parameter_declaration(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::PARAMETER_DECLARATION, |p, node| {
        if type_specifier(p, node, None).is_none() {
            return false;
        }
        declarator(p, node);
        true
    })
}

fn trailing_return_type(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::TRAILING_RETURN_TYPE, |p, node| {
        eat_operator(p, node, "->") && type_specifier(p, node, None).is_some()
    })
}
