//! Declaration handlers.
//!
//! Each of these runs once, immediately after its triggering nonterminal
//! has successfully matched, and registers exactly the bindings that
//! nonterminal introduces. None of them backtrack on their own: if the
//! registration later turns out to be part of a failed speculative parse,
//! [`super::try_node`]'s snapshot/restore unwinds it along with the tree
//! nodes, since every `insert_*` call appends to the tail of its table.

use crate::token::{Token, TokenKind};
use crate::tree::{NodeId, SyntaxKind, Tree};

use super::Parser;

/// After a `simple-declaration` (or, reused verbatim, a `member-declaration`)
/// matches: if its `decl-specifier-seq` carries `typedef`, register every
/// introduced declarator name as a typedef-name; else if it carries an
/// `elaborated-type-specifier`, register the named class as a forward
/// declaration.
pub(crate) fn simple_declaration_done(p: &mut Parser, declaration: NodeId, spec_seq: NodeId) {
    if has_typedef_specifier(p, spec_seq) {
        register_typedef_declarators(p, declaration);
        return;
    }

    if let Some(&ets) = p
        .tree
        .children(spec_seq)
        .iter()
        .find(|&&c| p.tree.kind(c) == SyntaxKind::ELABORATED_TYPE_SPECIFIER)
    {
        if let Some(text) = last_identifier_leaf_text(&p.tree, p.ctx.tokens(), ets) {
            let sym = p.interner.intern(&text);
            p.env.insert_class(sym, declaration, declaration);
        }
    }
}

fn has_typedef_specifier(p: &Parser, spec_seq: NodeId) -> bool {
    p.tree.children(spec_seq).iter().any(|&c| {
        p.tree.kind(c) == SyntaxKind::TOKEN
            && p
                .tree
                .token_index_of(c)
                .map(|i| p.ctx.tokens()[i].content.as_str())
                == Some("typedef")
    })
}

fn register_typedef_declarators(p: &mut Parser, declaration: NodeId) {
    let Some(&idl) = p
        .tree
        .children(declaration)
        .iter()
        .find(|&&c| p.tree.kind(c) == SyntaxKind::INIT_DECLARATOR_LIST)
    else {
        return;
    };

    let init_decls: Vec<NodeId> = p.tree.children(idl).to_vec();
    for init_decl in init_decls {
        if p.tree.kind(init_decl) != SyntaxKind::INIT_DECLARATOR {
            continue;
        }
        let Some(&declarator_id) = p.tree.children(init_decl).first() else {
            continue;
        };
        if let Some(text) = first_identifier_in_subtree(&p.tree, p.ctx.tokens(), declarator_id) {
            let sym = p.interner.intern(&text);
            p.env.insert_typedef(sym, declaration);
        }
    }
}

/// After a `class-specifier` matches: register its `class-head-name` (a
/// plain introduced name, or the template-name of a `simple-template-id` in
/// a partial-specialization head) as a class-name, with `declaration` the
/// nearest enclosing declaration and `complete_declaration` the
/// class-specifier itself.
pub(crate) fn class_specifier_done(p: &mut Parser, class_specifier: NodeId, declaration: NodeId) {
    let Some(text) = class_head_name_text(&p.tree, p.ctx.tokens(), class_specifier) else {
        return;
    };
    let sym = p.interner.intern(&text);
    p.env.insert_class(sym, declaration, class_specifier);
}

fn class_head_name_text(tree: &Tree, tokens: &[Token], class_specifier: NodeId) -> Option<String> {
    let head = *tree
        .children(class_specifier)
        .iter()
        .find(|&&c| tree.kind(c) == SyntaxKind::CLASS_HEAD)?;
    let head_name = *tree
        .children(head)
        .iter()
        .find(|&&c| tree.kind(c) == SyntaxKind::CLASS_HEAD_NAME)?;
    let name_node = *tree.children(head_name).first()?;

    let ident_leaf = match tree.kind(name_node) {
        SyntaxKind::CLASS_NAME => *tree.children(name_node).first()?,
        SyntaxKind::SIMPLE_TEMPLATE_ID => {
            let template_name = *tree.children(name_node).first()?;
            *tree.children(template_name).first()?
        }
        _ => return None,
    };

    let idx = tree.token_index_of(ident_leaf)?;
    Some(tokens[idx].content.clone())
}

/// After a `template-declaration` matches: mirror the class-name declared
/// by its templated `class-specifier` into the template-names table, so
/// both `Foo` (as a class-name) and `Foo<...>` (as a simple-template-id)
/// resolve to the same entity.
pub(crate) fn template_declaration_done(p: &mut Parser, template_declaration: NodeId) {
    let Some(cs) = find_descendant(&p.tree, template_declaration, SyntaxKind::CLASS_SPECIFIER)
    else {
        return;
    };
    let Some(text) = class_head_name_text(&p.tree, p.ctx.tokens(), cs) else {
        return;
    };
    let sym = p.interner.intern(&text);
    p.env.insert_template(sym, cs, cs);
}

/// After a `template-parameter` matches: if it is a type-parameter, register
/// its name under the table matching its lead keyword (`template`,
/// `typename`, or `class`), with `declaration` the template-parameter node
/// itself, so backtracking a single parameter clears only its own binding.
pub(crate) fn template_parameter_done(p: &mut Parser, template_parameter: NodeId) {
    let Some(&first) = p.tree.children(template_parameter).first() else {
        return;
    };
    if p.tree.kind(first) != SyntaxKind::TYPE_PARAMETER {
        return;
    }
    let children = p.tree.children(first).to_vec();
    let (Some(&kw_leaf), Some(&ident_leaf)) = (children.first(), children.get(1)) else {
        return;
    };
    let (Some(kw_idx), Some(ident_idx)) =
        (p.tree.token_index_of(kw_leaf), p.tree.token_index_of(ident_leaf))
    else {
        return;
    };
    let lead = p.ctx.tokens()[kw_idx].content.clone();
    let name = p.ctx.tokens()[ident_idx].content.clone();
    let sym = p.interner.intern(&name);

    match lead.as_str() {
        "typename" => p.env.insert_typedef(sym, template_parameter),
        "class" => p.env.insert_class(sym, template_parameter, template_parameter),
        "template" => p.env.insert_template(sym, template_parameter, template_parameter),
        _ => {}
    }
}

/// After an `original-namespace-definition` matches: register its name
/// (after the optional `inline`) as an original-namespace-name, with both
/// `declaration` and `complete_declaration` the enclosing
/// `namespace-definition` node.
pub(crate) fn original_namespace_definition_done(
    p: &mut Parser,
    original_namespace_definition: NodeId,
    namespace_definition: NodeId,
) {
    let children: Vec<NodeId> = p
        .tree
        .children(original_namespace_definition)
        .to_vec();
    let tokens = p.ctx.tokens();

    let mut ident_child = None;
    for w in children.windows(2) {
        if let Some(idx) = p.tree.token_index_of(w[0]) {
            if tokens[idx].content == "namespace" {
                ident_child = Some(w[1]);
                break;
            }
        }
    }
    let Some(ident_child) = ident_child else {
        return;
    };
    let Some(idx) = p.tree.token_index_of(ident_child) else {
        return;
    };
    let text = p.ctx.tokens()[idx].content.clone();
    let sym = p.interner.intern(&text);
    p.env.insert_namespace(sym, namespace_definition);
}

fn first_identifier_in_subtree(tree: &Tree, tokens: &[Token], id: NodeId) -> Option<String> {
    if tree.kind(id) == SyntaxKind::TOKEN {
        let idx = tree.token_index_of(id)?;
        return matches!(tokens[idx].kind, TokenKind::Identifier)
            .then(|| tokens[idx].content.clone());
    }
    for &child in tree.children(id) {
        if let Some(found) = first_identifier_in_subtree(tree, tokens, child) {
            return Some(found);
        }
    }
    None
}

fn last_identifier_leaf_text(tree: &Tree, tokens: &[Token], id: NodeId) -> Option<String> {
    let &last = tree.children(id).last()?;
    let idx = tree.token_index_of(last)?;
    Some(tokens[idx].content.clone())
}

fn find_descendant(tree: &Tree, id: NodeId, kind: SyntaxKind) -> Option<NodeId> {
    for &child in tree.children(id) {
        if tree.kind(child) == kind {
            return Some(child);
        }
        if let Some(found) = find_descendant(tree, child, kind) {
            return Some(found);
        }
    }
    None
}
