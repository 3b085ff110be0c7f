//! Symbol environment: scoped declaration tables.
//!
//! Each table is an append-only `Vec<Entry>`, mirroring the arena-snapshot
//! trick used by [`crate::tree::Tree`]: a speculative match registers
//! entries at the tail of a table, and backtracking truncates them away
//! instead of chasing a `declaration_node -> entries` back-index. Built-in
//! keywords are seeded once at construction with `declaration: None`, which
//! the visibility rules treat as "always visible" — a snapshot
//! can never truncate past them because nothing is ever restored to an
//! index below `new()`'s starting length.

use crate::intern::Symbol;
use crate::tree::{NodeId, Tree};

#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub symbol: Symbol,
    /// The node whose destruction (here: arena truncation past it) should
    /// invalidate this binding. `None` for built-ins.
    pub declaration: Option<NodeId>,
    /// The subtree qualified-name lookup must descend into. Usually equal to `declaration`.
    pub complete_declaration: Option<NodeId>,
}

const BUILTIN_KEYWORDS: &[&str] = &[
    "typedef", "class", "struct", "template", "typename", "namespace", "using", "int", "char",
    "bool", "void", "double", "float", "long", "short", "unsigned", "signed", "auto", "new",
    "delete", "return", "decltype", "public", "private", "protected", "inline", "true", "false",
    "nullptr", "const", "volatile", "static", "extern", "virtual", "friend", "operator", "this",
    "sizeof", "enum", "union",
];

#[derive(Debug, Clone, Copy)]
pub struct SymtabSnapshot {
    keywords: usize,
    typedefs: usize,
    classes: usize,
    templates: usize,
    namespaces: usize,
    ns_stack: usize,
}

/// Per-scope declaration tables plus the namespace-context stack. One instance is process-local for the duration of a single
/// `build_syntax_tree` call.
#[derive(Debug, Default)]
pub struct SymbolEnvironment {
    keywords: Vec<Entry>,
    typedefs: Vec<Entry>,
    classes: Vec<Entry>,
    templates: Vec<Entry>,
    namespaces: Vec<Entry>,
    /// Active namespace-qualification context for a qualified-id currently
    /// being parsed; `None` disables namespace-restricted lookup.
    ns_stack: Vec<Option<NodeId>>,
}

impl SymbolEnvironment {
    pub fn new(interner: &mut crate::intern::Interner) -> Self {
        let mut env = Self::default();
        for kw in BUILTIN_KEYWORDS {
            let symbol = interner.intern(kw);
            env.keywords.push(Entry {
                symbol,
                declaration: None,
                complete_declaration: None,
            });
        }
        env
    }

    pub fn snapshot(&self) -> SymtabSnapshot {
        SymtabSnapshot {
            keywords: self.keywords.len(),
            typedefs: self.typedefs.len(),
            classes: self.classes.len(),
            templates: self.templates.len(),
            namespaces: self.namespaces.len(),
            ns_stack: self.ns_stack.len(),
        }
    }

    pub fn restore(&mut self, snap: SymtabSnapshot) {
        self.keywords.truncate(snap.keywords);
        self.typedefs.truncate(snap.typedefs);
        self.classes.truncate(snap.classes);
        self.templates.truncate(snap.templates);
        self.namespaces.truncate(snap.namespaces);
        self.ns_stack.truncate(snap.ns_stack);
    }

    pub fn insert_typedef(&mut self, symbol: Symbol, declaration: NodeId) {
        self.typedefs.push(Entry {
            symbol,
            declaration: Some(declaration),
            complete_declaration: Some(declaration),
        });
    }

    pub fn insert_class(&mut self, symbol: Symbol, declaration: NodeId, complete: NodeId) {
        self.classes.push(Entry {
            symbol,
            declaration: Some(declaration),
            complete_declaration: Some(complete),
        });
    }

    pub fn insert_template(&mut self, symbol: Symbol, declaration: NodeId, complete: NodeId) {
        self.templates.push(Entry {
            symbol,
            declaration: Some(declaration),
            complete_declaration: Some(complete),
        });
    }

    pub fn insert_namespace(&mut self, symbol: Symbol, declaration: NodeId) {
        self.namespaces.push(Entry {
            symbol,
            declaration: Some(declaration),
            complete_declaration: Some(declaration),
        });
    }

    /// Keyword lookup has no namespace restriction: §4.3 defines it purely
    /// in terms of `sees`.
    pub fn lookup_keyword(&self, tree: &Tree, user: NodeId, symbol: Symbol) -> Option<Entry> {
        lookup(&self.keywords, tree, user, symbol, None)
    }

    pub fn lookup_typedef(
        &self,
        tree: &Tree,
        user: NodeId,
        symbol: Symbol,
        ns: Option<NodeId>,
    ) -> Option<Entry> {
        lookup(&self.typedefs, tree, user, symbol, ns)
    }

    pub fn lookup_class(
        &self,
        tree: &Tree,
        user: NodeId,
        symbol: Symbol,
        ns: Option<NodeId>,
    ) -> Option<Entry> {
        lookup(&self.classes, tree, user, symbol, ns)
    }

    pub fn lookup_template(
        &self,
        tree: &Tree,
        user: NodeId,
        symbol: Symbol,
        ns: Option<NodeId>,
    ) -> Option<Entry> {
        lookup(&self.templates, tree, user, symbol, ns)
    }

    pub fn lookup_namespace(
        &self,
        tree: &Tree,
        user: NodeId,
        symbol: Symbol,
        ns: Option<NodeId>,
    ) -> Option<Entry> {
        lookup(&self.namespaces, tree, user, symbol, ns)
    }

    /// Push a namespace-qualification context. Returns nothing;
    /// callers pop the same count they pushed once the enclosing construct
    /// finishes.
    pub fn push_ns(&mut self, scope: Option<NodeId>) {
        self.ns_stack.push(scope);
    }

    pub fn pop_ns(&mut self) {
        self.ns_stack.pop();
    }

    pub fn current_ns(&self) -> Option<NodeId> {
        self.ns_stack.last().copied().flatten()
    }
}

/// Scan most-recently-inserted-first so a shadowing declaration wins over an
/// outer one with the same spelling.
fn lookup(
    table: &[Entry],
    tree: &Tree,
    user: NodeId,
    symbol: Symbol,
    ns: Option<NodeId>,
) -> Option<Entry> {
    table
        .iter()
        .rev()
        .find(|entry| {
            entry.symbol == symbol && tree.sees_in_ns(user, entry.declaration, ns)
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intern::Interner;
    use crate::tree::SyntaxKind;

    #[test]
    fn builtin_keyword_always_visible() {
        let mut interner = Interner::new();
        let env = SymbolEnvironment::new(&mut interner);
        let mut tree = Tree::new();
        let user = tree.new_node(SyntaxKind::UNQUALIFIED_ID);
        let int_sym = interner.intern("int");

        assert!(env.lookup_keyword(&tree, user, int_sym).is_some());
    }

    #[test]
    fn restore_forgets_speculative_typedef() {
        let mut interner = Interner::new();
        let mut env = SymbolEnvironment::new(&mut interner);
        let mut tree = Tree::new();
        let decl = tree.new_node(SyntaxKind::SIMPLE_DECLARATION);
        let user = tree.new_node(SyntaxKind::UNQUALIFIED_ID);
        tree.push_child(decl, user);
        let sym = interner.intern("Foo");

        let snap = env.snapshot();
        env.insert_typedef(sym, decl);
        assert!(env.lookup_typedef(&tree, user, sym, None).is_some());

        env.restore(snap);
        assert!(env.lookup_typedef(&tree, user, sym, None).is_none());
    }

    #[test]
    fn ns_stack_push_pop() {
        let mut interner = Interner::new();
        let mut env = SymbolEnvironment::new(&mut interner);
        let mut tree = Tree::new();
        let scope = tree.new_node(SyntaxKind::DECLARATION_SEQ);

        assert_eq!(env.current_ns(), None);
        env.push_ns(Some(scope));
        assert_eq!(env.current_ns(), Some(scope));
        env.push_ns(None);
        assert_eq!(env.current_ns(), None);
        env.pop_ns();
        assert_eq!(env.current_ns(), Some(scope));
        env.pop_ns();
        assert_eq!(env.current_ns(), None);
    }
}
