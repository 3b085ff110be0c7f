//! Structural invariants that should hold for any successfully parsed input.

use cxxfront::{build_syntax_tree, tokenize, NodeId, SyntaxKind, Tree};
use pretty_assertions::assert_eq;

const SOURCES: &[&str] = &[
    "int x = 3.25f;",
    "template<typename T> class d {}; d<int> m;",
    "template<class T> class a{}; template<class T> class b{}; \
     auto f() -> decltype(new a<b<int>>[42]) { return new a<b<int>>[1]; }",
    "void g() { int x((4 << 2) >> 3); x >>= 1; }",
    "namespace foo { class bar { public: class baz {}; }; } foo::bar::baz *x;",
    "template<bool B, class T = void> struct enable_if {}; \
     template<class T> struct enable_if<true, T> { typedef T type; };",
];

fn leaf_token_indices(tree: &Tree, id: NodeId, out: &mut Vec<usize>) {
    if let Some(idx) = tree.token_index_of(id) {
        out.push(idx);
        return;
    }
    for &child in tree.children(id) {
        leaf_token_indices(tree, child, out);
    }
}

fn assert_no_collapsible_nodes(tree: &Tree, id: NodeId, parent_kind: Option<SyntaxKind>) {
    if tree.token_index_of(id).is_none() {
        assert!(!tree.node(id).intermediate, "intermediate node survived contract");
        if let Some(pk) = parent_kind {
            assert_ne!(tree.kind(id), pk, "same-kind parent/child pair survived contract");
        }
    }
    for &child in tree.children(id) {
        assert_no_collapsible_nodes(tree, child, Some(tree.kind(id)));
    }
}

#[test]
fn every_source_parses_to_eof_and_reconstructs_its_tokens() {
    for src in SOURCES {
        let tokens = tokenize(src).unwrap();
        let token_count_without_eof = tokens.len() - 1;
        let syntax = build_syntax_tree(tokens).expect(src);

        let mut indices = Vec::new();
        leaf_token_indices(&syntax.tree, syntax.root, &mut indices);

        assert_eq!(
            indices.len(),
            token_count_without_eof,
            "every non-EOF token must appear exactly once as a leaf for {src:?}"
        );
        for pair in indices.windows(2) {
            assert!(pair[0] < pair[1], "leaf token indices must be strictly increasing for {src:?}");
        }
        assert_eq!(indices, (0..token_count_without_eof).collect::<Vec<_>>());
    }
}

#[test]
fn contraction_leaves_no_intermediate_or_same_kind_pairs() {
    for src in SOURCES {
        let tokens = tokenize(src).unwrap();
        let syntax = build_syntax_tree(tokens).expect(src);
        assert_no_collapsible_nodes(&syntax.tree, syntax.root, None);
    }
}

#[test]
fn no_unmerged_right_shift_pairs_remain_adjacent_in_a_shift_or_assignment_operator() {
    fn walk(tree: &Tree, tokens: &[cxxfront::Token], id: NodeId) {
        if matches!(
            tree.kind(id),
            SyntaxKind::SHIFT_OPERATOR | SyntaxKind::ASSIGNMENT_OPERATOR
        ) {
            let children = tree.children(id);
            if children.len() == 2 {
                let (Some(a), Some(b)) = (
                    tree.token_index_of(children[0]),
                    tree.token_index_of(children[1]),
                ) else {
                    return;
                };
                let joinable = (tokens[a].content == ">" && tokens[b].content == ">")
                    || (tokens[a].content == ">" && tokens[b].content == ">=");
                assert!(
                    !joinable || !tokens[a].immediately_followed_by(&tokens[b]),
                    "a contiguous right-shift pair should have been merged by fix_right_shifts"
                );
            }
        }
        for &child in tree.children(id) {
            walk(tree, tokens, child);
        }
    }

    for src in SOURCES {
        let tokens = tokenize(src).unwrap();
        let syntax = build_syntax_tree(tokens).expect(src);
        walk(&syntax.tree, &syntax.tokens, syntax.root);
    }
}

#[test]
fn top_level_declaration_scope_is_the_translation_units_declaration_seq() {
    let tokens = tokenize("int x = 3;").unwrap();
    let syntax = build_syntax_tree(tokens).unwrap();

    let declaration_seq = syntax.tree.children(syntax.root)[0];
    assert_eq!(syntax.tree.kind(declaration_seq), SyntaxKind::DECLARATION_SEQ);

    let decl = syntax
        .tree
        .children(declaration_seq)
        .iter()
        .copied()
        .find(|&id| syntax.tree.kind(id) == SyntaxKind::SIMPLE_DECLARATION)
        .expect("a top-level simple-declaration");

    // `declaration` is intermediate and gets contracted away, so the
    // surviving declaration-seq becomes the declaration's direct scope.
    assert_eq!(syntax.tree.scope_above(decl), Some(declaration_seq));
}
