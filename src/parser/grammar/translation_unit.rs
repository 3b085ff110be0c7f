//! `translation-unit`, `declaration-seq`, and `declaration`.

use crate::tree::{NodeId, SyntaxKind};

use super::super::{try_node, Parser};
use super::{namespace, template};
use crate::parser::grammar::declaration::{function_definition, simple_declaration};

pub fn translation_unit(p: &mut Parser) -> NodeId {
    let root = p.tree.new_node(SyntaxKind::TRANSLATION_UNIT);
    p.tree.root = Some(root);
    declaration_seq(p, root);
    root
}

pub(crate) fn declaration_seq(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    if p.at_operator("}") || p.ctx.is_eof() {
        return None;
    }
    try_node(p, parent, SyntaxKind::DECLARATION_SEQ, |p, node| {
        while !p.at_operator("}") && !p.ctx.is_eof() {
            if declaration(p, node).is_none() {
                break;
            }
        }
        true
    })
}

fn declaration(p: &mut Parser, parent: NodeId) -> Option<NodeId> {
    let result = try_node(p, parent, SyntaxKind::DECLARATION, |p, node| {
        namespace::namespace_definition(p, node).is_some()
            || template::template_declaration(p, node).is_some()
            || function_definition(p, node).is_some()
            || simple_declaration(p, node).is_some()
    });
    if let Some(id) = result {
        p.tree.mark_intermediate(id);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::tree::contract::contract;

    #[test]
    fn parses_two_declarations() {
        let tokens = tokenize("int x; int y;").unwrap();
        let mut p = Parser::new(&tokens);
        let root = translation_unit(&mut p);
        assert!(p.ctx.is_eof());
        contract(&mut p.tree, root);
        assert_eq!(p.tree.children(root).len(), 2);
    }
}
