//! Checks the descriptive grammar table stays in lock-step with the
//! hand-coded matchers: every `kind` the table names is a real `SyntaxKind`.

use cxxfront::SyntaxKind;
use serde::Deserialize;

#[derive(Deserialize)]
struct GrammarTable {
    nonterminal: Vec<Nonterminal>,
}

#[derive(Deserialize)]
struct Nonterminal {
    name: String,
    kind: String,
}

fn kind_from_name(name: &str) -> Option<SyntaxKind> {
    use SyntaxKind::*;
    Some(match name {
        "TOKEN" => TOKEN,
        "OVERLOADABLE_OPERATOR" => OVERLOADABLE_OPERATOR,
        "TRIVIALLY_BALANCED_TOKEN" => TRIVIALLY_BALANCED_TOKEN,
        "TYPEDEF_NAME" => TYPEDEF_NAME,
        "CLASS_NAME" => CLASS_NAME,
        "TEMPLATE_NAME" => TEMPLATE_NAME,
        "ORIGINAL_NAMESPACE_NAME" => ORIGINAL_NAMESPACE_NAME,
        "TRANSLATION_UNIT" => TRANSLATION_UNIT,
        "DECLARATION_SEQ" => DECLARATION_SEQ,
        "DECLARATION" => DECLARATION,
        "SIMPLE_DECLARATION" => SIMPLE_DECLARATION,
        "FUNCTION_DEFINITION" => FUNCTION_DEFINITION,
        "DECL_SPECIFIER_SEQ" => DECL_SPECIFIER_SEQ,
        "ELABORATED_TYPE_SPECIFIER" => ELABORATED_TYPE_SPECIFIER,
        "TYPE_SPECIFIER" => TYPE_SPECIFIER,
        "CLASS_SPECIFIER" => CLASS_SPECIFIER,
        "CLASS_HEAD" => CLASS_HEAD,
        "CLASS_HEAD_NAME" => CLASS_HEAD_NAME,
        "MEMBER_SPECIFICATION" => MEMBER_SPECIFICATION,
        "ACCESS_SPECIFIER" => ACCESS_SPECIFIER,
        "TEMPLATE_DECLARATION" => TEMPLATE_DECLARATION,
        "TEMPLATE_PARAMETER_LIST" => TEMPLATE_PARAMETER_LIST,
        "TEMPLATE_PARAMETER" => TEMPLATE_PARAMETER,
        "TYPE_PARAMETER" => TYPE_PARAMETER,
        "SIMPLE_TEMPLATE_ID" => SIMPLE_TEMPLATE_ID,
        "TEMPLATE_ARGUMENT_LIST" => TEMPLATE_ARGUMENT_LIST,
        "TEMPLATE_ARGUMENT" => TEMPLATE_ARGUMENT,
        "INIT_DECLARATOR_LIST" => INIT_DECLARATOR_LIST,
        "INIT_DECLARATOR" => INIT_DECLARATOR,
        "DECLARATOR" => DECLARATOR,
        "PTR_DECLARATOR" => PTR_DECLARATOR,
        "NOPTR_DECLARATOR" => NOPTR_DECLARATOR,
        "PARAMETERS_AND_QUALIFIERS" => PARAMETERS_AND_QUALIFIERS,
        "PARAMETER_DECLARATION_CLAUSE" => PARAMETER_DECLARATION_CLAUSE,
        "PARAMETER_DECLARATION_LIST" => PARAMETER_DECLARATION_LIST,
        "PARAMETER_DECLARATION" => PARAMETER_DECLARATION,
        "TRAILING_RETURN_TYPE" => TRAILING_RETURN_TYPE,
        "DECLTYPE_SPECIFIER" => DECLTYPE_SPECIFIER,
        "INITIALIZER" => INITIALIZER,
        "BRACE_OR_EQUAL_INITIALIZER" => BRACE_OR_EQUAL_INITIALIZER,
        "DIRECT_INITIALIZER" => DIRECT_INITIALIZER,
        "FUNCTION_BODY" => FUNCTION_BODY,
        "COMPOUND_STATEMENT" => COMPOUND_STATEMENT,
        "STATEMENT_SEQ" => STATEMENT_SEQ,
        "STATEMENT" => STATEMENT,
        "JUMP_STATEMENT" => JUMP_STATEMENT,
        "EXPRESSION" => EXPRESSION,
        "ASSIGNMENT_EXPRESSION" => ASSIGNMENT_EXPRESSION,
        "ASSIGNMENT_OPERATOR" => ASSIGNMENT_OPERATOR,
        "SHIFT_EXPRESSION" => SHIFT_EXPRESSION,
        "SHIFT_OPERATOR" => SHIFT_OPERATOR,
        "ADDITIVE_EXPRESSION" => ADDITIVE_EXPRESSION,
        "UNARY_EXPRESSION" => UNARY_EXPRESSION,
        "NEW_EXPRESSION" => NEW_EXPRESSION,
        "POSTFIX_EXPRESSION" => POSTFIX_EXPRESSION,
        "PRIMARY_EXPRESSION" => PRIMARY_EXPRESSION,
        "LITERAL" => LITERAL,
        "ID_EXPRESSION" => ID_EXPRESSION,
        "UNQUALIFIED_ID" => UNQUALIFIED_ID,
        "NESTED_NAME_SPECIFIER" => NESTED_NAME_SPECIFIER,
        "NAMESPACE_DEFINITION" => NAMESPACE_DEFINITION,
        "ORIGINAL_NAMESPACE_DEFINITION" => ORIGINAL_NAMESPACE_DEFINITION,
        "NAMESPACE_BODY" => NAMESPACE_BODY,
        _ => return None,
    })
}

#[test]
fn every_table_kind_names_a_real_syntax_kind() {
    let table: GrammarTable = toml::from_str(include_str!("../grammar.toml")).unwrap();
    for nt in &table.nonterminal {
        assert!(
            kind_from_name(&nt.kind).is_some(),
            "grammar.toml nonterminal {:?} names unknown kind {:?}",
            nt.name,
            nt.kind
        );
    }
}

#[test]
fn table_names_are_unique() {
    let table: GrammarTable = toml::from_str(include_str!("../grammar.toml")).unwrap();
    let mut names: Vec<&str> = table.nonterminal.iter().map(|nt| nt.name.as_str()).collect();
    let before = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), before, "grammar.toml has a duplicate nonterminal name");
}
