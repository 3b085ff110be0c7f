//! Tree contraction.
//!
//! Post-order walk: recurse into a child first, then drop it if it is
//! `intermediate` or shares its parent's `type` (a recursive-rule loop
//! node), splicing its own children into its place. The walk continues past
//! the spliced-in grandchildren so multiple stacked collapses flatten in one
//! pass.

use super::{NodeId, Tree};

/// Contract `root` in place. Safe to call more than once:
/// `contract(contract(tree)) == contract(tree)`, since a tree
/// with no `intermediate` nodes and no same-kind parent/child pairs is a
/// fixed point.
pub fn contract(tree: &mut Tree, root: NodeId) {
    let new_children = contract_children(tree, root);
    tree.node_mut(root).children = new_children;
}

fn contract_children(tree: &mut Tree, parent: NodeId) -> Vec<NodeId> {
    let children: Vec<NodeId> = tree.node(parent).children.clone();
    let parent_kind = tree.kind(parent);
    let mut result = Vec::with_capacity(children.len());

    for child in children {
        let grandchildren = contract_children(tree, child);
        tree.node_mut(child).children = grandchildren.clone();

        let collapses = tree.node(child).intermediate || tree.kind(child) == parent_kind;
        if collapses && tree.node(child).token.is_none() {
            for gc in grandchildren {
                tree.node_mut(gc).parent = Some(parent);
                result.push(gc);
            }
        } else {
            result.push(child);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SyntaxKind;

    #[test]
    fn drops_intermediate_node_splicing_children() {
        let mut tree = Tree::new();
        let root = tree.new_node(SyntaxKind::DECLARATION_SEQ);
        let intermediate = tree.new_node(SyntaxKind::DECL_SPECIFIER_SEQ);
        tree.mark_intermediate(intermediate);
        let leaf = tree.new_token_leaf(0);
        tree.push_child(root, intermediate);
        tree.push_child(intermediate, leaf);

        contract(&mut tree, root);

        assert_eq!(tree.children(root), &[leaf]);
        assert_eq!(tree.parent(leaf), Some(root));
    }

    #[test]
    fn drops_recursive_same_kind_loop_node() {
        let mut tree = Tree::new();
        let root = tree.new_node(SyntaxKind::EXPRESSION);
        let loop_node = tree.new_node(SyntaxKind::EXPRESSION);
        let leaf = tree.new_token_leaf(0);
        tree.push_child(root, loop_node);
        tree.push_child(loop_node, leaf);

        contract(&mut tree, root);

        assert_eq!(tree.children(root), &[leaf]);
    }

    #[test]
    fn idempotent() {
        let mut tree = Tree::new();
        let root = tree.new_node(SyntaxKind::DECLARATION_SEQ);
        let intermediate = tree.new_node(SyntaxKind::DECL_SPECIFIER_SEQ);
        tree.mark_intermediate(intermediate);
        let leaf = tree.new_token_leaf(0);
        tree.push_child(root, intermediate);
        tree.push_child(intermediate, leaf);

        contract(&mut tree, root);
        let once = tree.children(root).to_vec();
        contract(&mut tree, root);
        let twice = tree.children(root).to_vec();
        assert_eq!(once, twice);
    }
}
