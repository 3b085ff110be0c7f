//! End-to-end tests against the six walkthroughs.

use cxxfront::{build_syntax_tree, tokenize, FloatSubtype, NodeId, SyntaxKind, Tree};
use pretty_assertions::assert_eq;

fn find_kind(tree: &Tree, id: NodeId, kind: SyntaxKind) -> Option<NodeId> {
    if tree.kind(id) == kind {
        return Some(id);
    }
    for &child in tree.children(id) {
        if let Some(found) = find_kind(tree, child, kind) {
            return Some(found);
        }
    }
    None
}

fn token_text<'a>(tree: &Tree, tokens: &'a [cxxfront::Token], id: NodeId) -> Option<&'a str> {
    tree.token_index_of(id).map(|idx| tokens[idx].content.as_str())
}

/// Find the first leaf token node whose text equals `content`, depth-first.
fn find_leaf_with_text(
    tree: &Tree,
    tokens: &[cxxfront::Token],
    id: NodeId,
    content: &str,
) -> Option<NodeId> {
    if tree.token_index_of(id).is_some() {
        return (token_text(tree, tokens, id) == Some(content)).then_some(id);
    }
    for &child in tree.children(id) {
        if let Some(found) = find_leaf_with_text(tree, tokens, child, content) {
            return Some(found);
        }
    }
    None
}

#[test]
fn scenario_1_float_literal_initializer() {
    let tokens = tokenize("int x = 3.25f;").unwrap();
    let syntax = build_syntax_tree(tokens).unwrap();

    let leaf = find_leaf_with_text(&syntax.tree, &syntax.tokens, syntax.root, "3.25f")
        .expect("float literal leaf");
    let idx = syntax.tree.token_index_of(leaf).unwrap();
    match &syntax.tokens[idx].kind {
        cxxfront::TokenKind::FloatLiteral { value, subtype } => {
            assert_eq!(*subtype, FloatSubtype::Float);
            assert!((value.0 - 3.25).abs() < f64::EPSILON);
        }
        other => panic!("expected a float literal, got {other:?}"),
    }
}

#[test]
fn scenario_2_template_instantiation_does_not_collapse_right_angle_pair() {
    let tokens = tokenize("template<typename T> class d {}; d<int> m;").unwrap();
    let syntax = build_syntax_tree(tokens).unwrap();

    // The simple-template-id `d<int>` closes with a single `>`, never a
    // merged `>>`, since only one `<...>` nests here.
    let template_id = find_kind(&syntax.tree, syntax.root, SyntaxKind::SIMPLE_TEMPLATE_ID)
        .expect("simple-template-id for d<int>");
    let closing = syntax
        .tree
        .children(template_id)
        .iter()
        .filter(|&&c| token_text(&syntax.tree, &syntax.tokens, c) == Some(">"))
        .count();
    assert_eq!(closing, 1);
}

#[test]
fn scenario_3_nested_template_arguments_keep_two_closing_angles() {
    let tokens = tokenize(
        "template<class T> class a{}; template<class T> class b{}; \
         auto f() -> decltype(new a<b<int>>[42]) { return new a<b<int>>[1]; }",
    )
    .unwrap();
    let syntax = build_syntax_tree(tokens).unwrap();

    // Both the trailing-return-type's decltype and the body's new-expression
    // contain two nested simple-template-ids, each closed by its own plain
    // `>`, never reassembled into a `>>` token.
    let has_double_angle = syntax
        .tokens
        .iter()
        .any(|t| t.content == ">>" || t.content == ">>=");
    assert!(!has_double_angle, "nested template angles must stay split");

    let function = find_kind(&syntax.tree, syntax.root, SyntaxKind::FUNCTION_DEFINITION)
        .expect("function-definition for f");
    assert!(find_kind(&syntax.tree, function, SyntaxKind::TRAILING_RETURN_TYPE).is_some());
    assert!(find_kind(&syntax.tree, function, SyntaxKind::COMPOUND_STATEMENT).is_some());
}

#[test]
fn scenario_4_right_shift_and_right_shift_assign_reassemble() {
    // `x >>= 1;` is an assignment-expression-statement, which only this
    // grammar's statement-seq (inside a function body) accepts -- a
    // translation-unit is a plain declaration-seq, same as in full C++.
    let tokens = tokenize("void g() { int x((4 << 2) >> 3); x >>= 1; }").unwrap();
    let syntax = build_syntax_tree(tokens).unwrap();

    let shift_merged = syntax.tokens.iter().any(|t| t.content == ">>");
    let assign_merged = syntax.tokens.iter().any(|t| t.content == ">>=");
    assert!(shift_merged, "`>> ` should reassemble into one token");
    assert!(assign_merged, "`>>=` should reassemble into one token");

    let direct_init = find_kind(&syntax.tree, syntax.root, SyntaxKind::DIRECT_INITIALIZER)
        .expect("direct-initializer for x(...)");
    assert!(find_kind(&syntax.tree, direct_init, SyntaxKind::SHIFT_EXPRESSION).is_some());
}

#[test]
fn scenario_5_qualified_name_resolves_through_nested_namespace_and_class() {
    let tokens =
        tokenize("namespace foo { class bar { public: class baz {}; }; } foo::bar::baz *x;")
            .unwrap();
    let syntax = build_syntax_tree(tokens).unwrap();

    // The trailing declaration's declarator type-specifier resolves `baz`
    // through the qualified-id, so the whole thing must parse to EOF with a
    // final SIMPLE_DECLARATION for `*x`.
    let leaf = find_leaf_with_text(&syntax.tree, &syntax.tokens, syntax.root, "x")
        .expect("the trailing `foo::bar::baz *x;` declarator");
    let declarator = syntax
        .tree
        .parent(leaf)
        .and_then(|p| syntax.tree.parent(p))
        .expect("noptr-declarator then ptr-declarator above the `x` leaf");
    assert_eq!(syntax.tree.kind(declarator), SyntaxKind::PTR_DECLARATOR);
}

#[test]
fn scenario_6_partial_specialization_accepts_simple_template_id_head_name() {
    let tokens = tokenize(
        "template<bool B, class T = void> struct enable_if {}; \
         template<class T> struct enable_if<true, T> { typedef T type; };",
    )
    .unwrap();
    let syntax = build_syntax_tree(tokens).unwrap();

    let specializations: Vec<NodeId> = {
        let mut out = Vec::new();
        fn collect(tree: &Tree, id: NodeId, out: &mut Vec<NodeId>) {
            if tree.kind(id) == SyntaxKind::CLASS_HEAD_NAME {
                out.push(id);
            }
            for &child in tree.children(id) {
                collect(tree, child, out);
            }
        }
        collect(&syntax.tree, syntax.root, &mut out);
        out
    };
    assert_eq!(specializations.len(), 2);
    let partial = specializations[1];
    assert!(
        find_kind(&syntax.tree, partial, SyntaxKind::SIMPLE_TEMPLATE_ID).is_some(),
        "the partial specialization's class-head-name must be a simple-template-id"
    );
}
