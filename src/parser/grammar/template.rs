//! `template-declaration`, `template-parameter-list`, `simple-template-id`,
//! and `template-argument-list`.

use crate::tree::{NodeId, SyntaxKind};

use super::super::{eat_operator, handlers, terminals, try_node, Parser};
use super::{declaration, declarator, expression};

pub(crate) fn template_declaration(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    let result = try_node(p, parent, SyntaxKind::TEMPLATE_DECLARATION, |p, node| {
        terminals::keyword(p, node, "template")
            && eat_operator(p, node, "<")
            && template_parameter_list(p, node).is_some()
            && eat_operator(p, node, ">")
            && declaration::simple_declaration(p, node).is_some()
    });
    if let Some(id) = result {
        handlers::template_declaration_done(p, id);
    }
    result
}

fn template_parameter_list(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::TEMPLATE_PARAMETER_LIST, |p, node| {
        if template_parameter(p, node).is_none() {
            return false;
        }
        while eat_operator(p, node, ",") {
            if template_parameter(p, node).is_none() {
                return false;
            }
        }
        true
    })
}

fn template_parameter(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    let result = try_node(p, parent, SyntaxKind::TEMPLATE_PARAMETER, |p, node| {
        type_parameter(p, node).is_some() || non_type_parameter(p, node)
    });
    if let Some(id) = result {
        handlers::template_parameter_done(p, id);
    }
    result
}

fn type_parameter(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::TYPE_PARAMETER, |p, node| {
        if !(terminals::keyword(p, node, "typename") || terminals::keyword(p, node, "class")) {
            return false;
        }
        if !terminals::identifier(p, node) {
            return false;
        }
        if eat_operator(p, node, "=") {
            declarator::type_specifier(p, node, None).is_some()
        } else {
            true
        }
    })
}

fn non_type_parameter(p: &mut Parser, parent: NodeId) -> bool {
    declarator::type_specifier(p, parent, None).is_some() && terminals::identifier(p, parent)
}

/// `simple-template-id`: a `template-name` followed by a
/// `<`-delimited argument list. Each nesting level consumes its own closing
/// `>` with a plain single-token [`eat_operator`], never the two-token
/// right-shift terminal — this is what keeps `a<b<int>>` from ever needing
/// special-cased "don't collapse" logic: the reassembly terminal is never on
/// the call path for a template closing angle.
pub(crate) fn simple_template_id(p: &mut Parser, parent: NodeId, ns: Option<NodeId>) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::SIMPLE_TEMPLATE_ID, |p, node| {
        terminals::template_name(p, node, ns).is_some()
            && eat_operator(p, node, "<")
            && template_argument_list(p, node).is_some()
            && eat_operator(p, node, ">")
    })
}

fn template_argument_list(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::TEMPLATE_ARGUMENT_LIST, |p, node| {
        if template_argument(p, node).is_none() {
            return false;
        }
        while eat_operator(p, node, ",") {
            if template_argument(p, node).is_none() {
                return false;
            }
        }
        true
    })
}

fn template_argument(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::TEMPLATE_ARGUMENT, |p, node| {
        declarator::type_specifier(p, node, None).is_some() || expression::literal(p, node).is_some()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::grammar::translation_unit::translation_unit;

    #[test]
    fn simple_template_id_resolves_against_registered_template_name() {
        let tokens = tokenize("template < class T > class Box { } ; typedef Box < int > IntBox ;").unwrap();
        let mut p = Parser::new(&tokens);
        translation_unit(&mut p);
        assert!(p.ctx.is_eof());
    }
}
