//! `namespace-definition`, `original-namespace-definition`, and
//! `namespace-body`.

use crate::tree::{NodeId, SyntaxKind};

use super::super::{eat_operator, handlers, terminals, try_node, Parser};
use super::translation_unit::declaration_seq;

pub(crate) fn namespace_definition(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::NAMESPACE_DEFINITION, |p, node| {
        original_namespace_definition(p, node, node).is_some()
    })
}

fn original_namespace_definition(
    p: &mut Parser,
    parent: NodeId,
    namespace_definition_id: NodeId,
) -> Option<NodeId> {
    let result = try_node(p, parent, SyntaxKind::ORIGINAL_NAMESPACE_DEFINITION, |p, node| {
        terminals::keyword(p, node, "inline");
        if !(terminals::keyword(p, node, "namespace") && terminals::identifier(p, node)) {
            return false;
        }
        if !eat_operator(p, node, "{") {
            return false;
        }
        namespace_body(p, node);
        eat_operator(p, node, "}")
    });
    if let Some(id) = result {
        handlers::original_namespace_definition_done(p, id, namespace_definition_id);
    }
    result
}

/// `namespace-body`: a `declaration-seq`, always succeeding (an empty
/// namespace body is valid, and the enclosing match already checked for
/// `}`).
fn namespace_body(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    try_node(p, parent, SyntaxKind::NAMESPACE_BODY, |p, node| {
        declaration_seq(p, node);
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::grammar::translation_unit::translation_unit;
    use crate::parser::Parser;

    #[test]
    fn nested_namespace_with_class() {
        let tokens = tokenize("namespace outer { namespace inner { class Widget { } ; } }").unwrap();
        let mut p = Parser::new(&tokens);
        translation_unit(&mut p);
        assert!(p.ctx.is_eof());
    }

    #[test]
    fn empty_namespace() {
        let tokens = tokenize("namespace n { }").unwrap();
        let mut p = Parser::new(&tokens);
        translation_unit(&mut p);
        assert!(p.ctx.is_eof());
    }
}
