//! Concrete syntax tree: arena of nodes with parent/child links.
//!
//! This grammar's semantic terminals need a failed alternative to make its
//! speculative nodes vanish, including any symbol-table entries they caused
//! to be registered. An immutable shared tree works against that. Instead
//! nodes live in a flat, append-only `Vec<Node>` addressed by `NodeId`, and
//! backtracking is "restore a snapshot" rather than "run destructors" or
//! chase cyclic back-references.

pub mod contract;
pub mod right_shift;

use crate::token::Token;

/// A tagged kind drawn from a closed set unioning every grammar nonterminal,
/// the `Token` leaf kind, and the synthetic semantic-class kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    TOKEN,

    OVERLOADABLE_OPERATOR,
    TRIVIALLY_BALANCED_TOKEN,
    TYPEDEF_NAME,
    CLASS_NAME,
    TEMPLATE_NAME,
    ORIGINAL_NAMESPACE_NAME,

    TRANSLATION_UNIT,
    DECLARATION_SEQ,
    DECLARATION,
    SIMPLE_DECLARATION,
    FUNCTION_DEFINITION,
    DECL_SPECIFIER_SEQ,
    ELABORATED_TYPE_SPECIFIER,
    TYPE_SPECIFIER,
    CLASS_SPECIFIER,
    CLASS_HEAD,
    CLASS_HEAD_NAME,
    MEMBER_SPECIFICATION,
    MEMBER_DECLARATION,
    ACCESS_SPECIFIER,

    TEMPLATE_DECLARATION,
    TEMPLATE_PARAMETER_LIST,
    TEMPLATE_PARAMETER,
    TYPE_PARAMETER,
    SIMPLE_TEMPLATE_ID,
    TEMPLATE_ARGUMENT_LIST,
    TEMPLATE_ARGUMENT,

    INIT_DECLARATOR_LIST,
    INIT_DECLARATOR,
    DECLARATOR,
    PTR_DECLARATOR,
    NOPTR_DECLARATOR,
    PARAMETERS_AND_QUALIFIERS,
    PARAMETER_DECLARATION_CLAUSE,
    PARAMETER_DECLARATION_LIST,
    PARAMETER_DECLARATION,
    TRAILING_RETURN_TYPE,
    DECLTYPE_SPECIFIER,

    INITIALIZER,
    BRACE_OR_EQUAL_INITIALIZER,
    DIRECT_INITIALIZER,

    FUNCTION_BODY,
    COMPOUND_STATEMENT,
    STATEMENT_SEQ,
    STATEMENT,
    JUMP_STATEMENT,

    EXPRESSION,
    ASSIGNMENT_EXPRESSION,
    ASSIGNMENT_OPERATOR,
    SHIFT_EXPRESSION,
    SHIFT_OPERATOR,
    ADDITIVE_EXPRESSION,
    UNARY_EXPRESSION,
    NEW_EXPRESSION,
    POSTFIX_EXPRESSION,
    PRIMARY_EXPRESSION,
    LITERAL,
    ID_EXPRESSION,
    UNQUALIFIED_ID,
    QUALIFIED_ID,
    NESTED_NAME_SPECIFIER,

    NAMESPACE_DEFINITION,
    ORIGINAL_NAMESPACE_DEFINITION,
    NAMESPACE_BODY,

    ERROR,
}

/// A handle into a [`Tree`]'s arena. Cheap to copy; only meaningful relative
/// to the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: SyntaxKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Index into the token vector, for `TOKEN` leaves.
    pub token: Option<usize>,
    /// Grammar-structural node to be collapsed by `contract`.
    pub intermediate: bool,
    /// For semantic-class leaves: the declaration node that introduced the
    /// name. `None` means a built-in with no declaration.
    pub declaration: Option<NodeId>,
}

/// The arena-backed concrete syntax tree. Append-only during a parse:
/// speculative nodes created by a failed alternative are discarded by
/// truncating the arena back to a snapshot taken before the attempt, never
/// by removing individual nodes out of order.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    pub root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.node(id).kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Create a detached node (no parent yet). The caller attaches it with
    /// [`Tree::push_child`] once the enclosing matcher succeeds.
    pub fn new_node(&mut self, kind: SyntaxKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
            token: None,
            intermediate: false,
            declaration: None,
        });
        id
    }

    pub fn new_token_leaf(&mut self, token_index: usize) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind: SyntaxKind::TOKEN,
            parent: None,
            children: Vec::new(),
            token: Some(token_index),
            intermediate: false,
            declaration: None,
        });
        id
    }

    pub fn mark_intermediate(&mut self, id: NodeId) {
        self.node_mut(id).intermediate = true;
    }

    pub fn set_declaration(&mut self, id: NodeId, declaration: Option<NodeId>) {
        self.node_mut(id).declaration = declaration;
    }

    /// Attach `child` to `parent`, appending it to `parent`'s child list.
    pub fn push_child(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Arena length, used as a backtracking snapshot.
    pub fn snapshot(&self) -> usize {
        self.nodes.len()
    }

    /// Discard every node created since `snapshot`. Only valid when none of
    /// those nodes have been attached as a child of a node that survives
    /// (true for a strictly depth-first, single-threaded recursive descent:
    /// a matcher only attaches its own freshly-created nodes).
    pub fn restore(&mut self, snapshot: usize) {
        self.nodes.truncate(snapshot);
    }

    pub fn token_index_of(&self, id: NodeId) -> Option<usize> {
        self.node(id).token
    }

    /// `scope()`: nearest ancestor that is `compound-statement`,
    /// `class-specifier`, or `declaration-seq`, with the `template-declaration`
    /// special case redirecting to the scope *inside* that declaration.
    pub fn scope(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.parent(id);
        while let Some(node) = current {
            match self.kind(node) {
                SyntaxKind::COMPOUND_STATEMENT
                | SyntaxKind::CLASS_SPECIFIER
                | SyntaxKind::DECLARATION_SEQ => return Some(node),
                SyntaxKind::TEMPLATE_DECLARATION => return self.scope_below(node),
                _ => current = self.parent(node),
            }
        }
        None
    }

    /// `scope_above()`: like `scope` but without the template special case.
    pub fn scope_above(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.parent(id);
        while let Some(node) = current {
            match self.kind(node) {
                SyntaxKind::COMPOUND_STATEMENT
                | SyntaxKind::CLASS_SPECIFIER
                | SyntaxKind::DECLARATION_SEQ => return Some(node),
                _ => current = self.parent(node),
            }
        }
        None
    }

    /// `scope_below()`: depth-first search for the first descendant scope
    /// node.
    pub fn scope_below(&self, id: NodeId) -> Option<NodeId> {
        for &child in self.children(id) {
            match self.kind(child) {
                SyntaxKind::COMPOUND_STATEMENT
                | SyntaxKind::CLASS_SPECIFIER
                | SyntaxKind::DECLARATION_SEQ => return Some(child),
                _ => {
                    if let Some(found) = self.scope_below(child) {
                        return Some(found);
                    }
                }
            }
        }
        None
    }

    /// `sees(other)`: `other == None` (built-in) is always
    /// visible; otherwise walk `user`'s enclosing scopes looking for
    /// `other`'s scope.
    pub fn sees(&self, user: NodeId, declaration: Option<NodeId>) -> bool {
        let Some(declaration) = declaration else {
            return true;
        };
        let Some(target_scope) = self.scope(declaration) else {
            return false;
        };
        let mut current = self.scope(user);
        while let Some(scope) = current {
            if scope == target_scope {
                return true;
            }
            current = self.scope_above(scope);
        }
        false
    }

    /// `sees_in_ns(other, ns)`: when `ns` is active, the
    /// declaration must sit directly in `ns`; otherwise fall back to `sees`.
    pub fn sees_in_ns(
        &self,
        user: NodeId,
        declaration: Option<NodeId>,
        ns: Option<NodeId>,
    ) -> bool {
        match ns {
            None => self.sees(user, declaration),
            Some(ns) => match declaration {
                None => false,
                Some(decl) => self.scope_above(decl) == Some(ns),
            },
        }
    }

    /// Render the tree for debugging / CLI dump, `KIND@start..end` style.
    pub fn debug_string(&self, root: NodeId, tokens: &[Token]) -> String {
        let mut out = String::new();
        self.write_node(root, tokens, 0, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, tokens: &[Token], indent: usize, out: &mut String) {
        let node = self.node(id);
        out.push_str(&" ".repeat(indent));
        match node.token {
            Some(tok) => {
                out.push_str(&format!("{:?} {:?}\n", node.kind, tokens[tok].content));
            }
            None => {
                out.push_str(&format!("{:?}\n", node.kind));
                for &child in &node.children {
                    self.write_node(child, tokens, indent + 2, out);
                }
            }
        }
    }
}
