//! Right-shift token repair.
//!
//! The lexer always splits `>>` into two `>` tokens and `>>=` into `>` +
//! `>=`, so that nested template argument lists (`a<b<int>>`) never need the
//! parser to un-split anything. Two parser terminals (see
//! `parser::terminals::try_right_shift` / `try_right_shift_assign`) instead
//! opportunistically consume a contiguous `>`/`>` or `>`/`>=` pair at
//! operator positions, attaching both tokens directly under a
//! `shift-operator` or `assignment-operator` node. This pass rewrites those
//! pairs into a single token after the fact, which is what lets
//! `fix_right_shifts` be expressed as a simple post-order walk instead of
//! being threaded through every expression matcher.

use crate::token::{Token, TokenKind};
use crate::tree::{NodeId, SyntaxKind, Tree};

/// Collapse every `shift-operator`/`assignment-operator` node holding a
/// contiguous `>`/`>` or `>`/`>=` pair into a single token. Idempotent:
/// `fix_right_shifts(fix_right_shifts(tree)) == fix_right_shifts(tree)`
///, since a node with one child is never touched again.
pub fn fix_right_shifts(tree: &mut Tree, tokens: &mut Vec<Token>, root: NodeId) {
    let children: Vec<NodeId> = tree.children(root).to_vec();
    for child in &children {
        fix_right_shifts(tree, tokens, *child);
    }

    if !matches!(
        tree.kind(root),
        SyntaxKind::SHIFT_OPERATOR | SyntaxKind::ASSIGNMENT_OPERATOR
    ) {
        return;
    }

    let node_children = tree.children(root).to_vec();
    let [first, second] = node_children[..] else {
        return;
    };

    let (Some(first_tok), Some(second_tok)) =
        (tree.token_index_of(first), tree.token_index_of(second))
    else {
        return;
    };

    let joined = match (&tokens[first_tok].kind, &tokens[second_tok].kind) {
        (TokenKind::Operator, TokenKind::Operator)
            if tokens[first_tok].content == ">" && tokens[second_tok].content == ">" =>
        {
            ">>"
        }
        (TokenKind::Operator, TokenKind::Operator)
            if tokens[first_tok].content == ">" && tokens[second_tok].content == ">=" =>
        {
            ">>="
        }
        _ => return,
    };

    tokens[first_tok].content = joined.to_string();
    tree.node_mut(root).children = vec![first];
}
