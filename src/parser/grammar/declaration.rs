//! `simple-declaration`, `decl-specifier-seq`, and `elaborated-type-specifier`.

use crate::tree::{NodeId, SyntaxKind};

use super::super::{eat_operator, handlers, terminals, try_node, Parser};
use super::{class_, declarator, statement};

/// `simple-declaration`: a `decl-specifier-seq`, an optional
/// `init-declarator-list`, and a terminating `;`. Also reused verbatim as
/// `member-declaration`.
pub(crate) fn simple_declaration(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    let mut spec_seq_id = None;
    let result = try_node(p, parent, SyntaxKind::SIMPLE_DECLARATION, |p, node| {
        let Some(spec_seq) = decl_specifier_seq(p, node, node) else {
            return false;
        };
        spec_seq_id = Some(spec_seq);
        if !p.at_operator(";") {
            init_declarator_list(p, node);
        }
        eat_operator(p, node, ";")
    });
    if let (Some(id), Some(spec_seq)) = (result, spec_seq_id) {
        handlers::simple_declaration_done(p, id, spec_seq);
    }
    result
}

/// `function-definition`: a `decl-specifier-seq`, a `declarator`, and a
/// brace-enclosed `function-body` in place of the `;`/initializer a
/// `simple-declaration` would take there. Tried before `simple-declaration`
/// at the `declaration` level so a trailing `{` isn't mistaken for a failed
/// initializer.
pub(crate) fn function_definition(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::FUNCTION_DEFINITION, |p, node| {
        if decl_specifier_seq(p, node, node).is_none() {
            return false;
        }
        if declarator::declarator(p, node).is_none() {
            return false;
        }
        statement::function_body(p, node).is_some()
    })
}

/// `decl-specifier-seq`: one or more of `typedef`, a `class-specifier`, an
/// `elaborated-type-specifier`, or a `type-specifier`, in any mix a real
/// C++ grammar would gate much more tightly — this subset accepts a loop of
/// any of them, relying on each alternative's own terminal matching to
/// reject tokens that don't belong.
pub(crate) fn decl_specifier_seq(
    p: &mut Parser,
    parent: NodeId,
    enclosing_declaration: NodeId,
) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::DECL_SPECIFIER_SEQ, |p, node| {
        let mut matched_any = false;
        loop {
            if terminals::keyword(p, node, "typedef") {
                matched_any = true;
                continue;
            }
            if class_::class_specifier(p, node, enclosing_declaration).is_some() {
                matched_any = true;
                continue;
            }
            if elaborated_type_specifier(p, node).is_some() {
                matched_any = true;
                continue;
            }
            if declarator::type_specifier(p, node, None).is_some() {
                matched_any = true;
                continue;
            }
            break;
        }
        matched_any
    })
}

/// `elaborated-type-specifier`: `class` or `struct` followed by a plain
/// (not symbol-table-resolved) identifier — the forward-declaration form.
fn elaborated_type_specifier(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::ELABORATED_TYPE_SPECIFIER, |p, node| {
        (terminals::keyword(p, node, "class") || terminals::keyword(p, node, "struct"))
            && terminals::identifier(p, node)
    })
}

fn init_declarator_list(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::INIT_DECLARATOR_LIST, |p, node| {
        if init_declarator(p, node).is_none() {
            return false;
        }
        while eat_operator(p, node, ",") {
            if init_declarator(p, node).is_none() {
                return false;
            }
        }
        true
    })
}

fn init_declarator(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::INIT_DECLARATOR, |p, node| {
        if declarator::declarator(p, node).is_none() {
            return false;
        }
        if p.at_operator("=") || p.at_operator("(") {
            initializer(p, node);
        }
        true
    })
}

/// `initializer -> brace-or-equal-initializer | '(' expression ')'`. The
/// parenthesized form (direct-initialization, e.g. `x(4 << 2)`) is reachable
/// here precisely because `noptr-declarator` gives up on `(` without
/// consuming it once it fails to match a `parameters-and-qualifiers`.
fn initializer(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::INITIALIZER, |p, node| {
        brace_or_equal_initializer(p, node).is_some() || direct_initializer(p, node).is_some()
    })
}

fn brace_or_equal_initializer(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::BRACE_OR_EQUAL_INITIALIZER, |p, node| {
        eat_operator(p, node, "=") && super::expression::assignment_expression(p, node, None).is_some()
    })
}

fn direct_initializer(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::DIRECT_INITIALIZER, |p, node| {
        eat_operator(p, node, "(")
            && super::expression::expression(p, node, None).is_some()
            && eat_operator(p, node, ")")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::Parser;
    use crate::tree::SyntaxKind;

    #[test]
    fn simple_declaration_with_initializer() {
        let tokens = tokenize("int x = 3 ;").unwrap();
        let mut p = Parser::new(&tokens);
        let root = p.tree.new_node(SyntaxKind::DECLARATION_SEQ);
        assert!(simple_declaration(&mut p, root).is_some());
        assert!(p.ctx.is_eof());
    }

    #[test]
    fn forward_declared_class_registers_class_name() {
        let tokens = tokenize("class Foo ; Foo x ;").unwrap();
        let mut p = Parser::new(&tokens);
        let root = p.tree.new_node(SyntaxKind::DECLARATION_SEQ);
        assert!(simple_declaration(&mut p, root).is_some());
        assert!(simple_declaration(&mut p, root).is_some());
        assert!(p.ctx.is_eof());
    }

    #[test]
    fn function_definition_with_body() {
        let tokens = tokenize("int f ( ) { return 1 ; }").unwrap();
        let mut p = Parser::new(&tokens);
        let root = p.tree.new_node(SyntaxKind::DECLARATION_SEQ);
        assert!(function_definition(&mut p, root).is_some());
        assert!(p.ctx.is_eof());
    }
}
