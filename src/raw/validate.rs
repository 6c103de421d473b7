use alloc::string::String;
use alloc::vec::Vec;

use super::node::{Node, balance_factor};

/// Validates BST order, AVL balance, sizes, and heights. Panics with a descriptive message
/// if any are violated.
pub(crate) fn validate_invariants(root: Option<&Node>) {
    let mut errors: Vec<String> = Vec::new();
    validate_node(root, None, None, &mut errors);
    assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
}

// Returns (size, height) of the subtree as recomputed from scratch.
fn validate_node(node: Option<&Node>, lower: Option<i32>, upper: Option<i32>, errors: &mut Vec<String>) -> (usize, i32) {
    let Some(node) = node else {
        return (0, -1);
    };
    let key = node.key();

    if lower.is_some_and(|lower| key <= lower) || upper.is_some_and(|upper| key >= upper) {
        errors.push(alloc::format!("BST order violated at key {key}: bounds ({lower:?}, {upper:?})"));
    }

    let (left_size, left_height) = validate_node(node.left(), lower, Some(key), errors);
    let (right_size, right_height) = validate_node(node.right(), Some(key), upper, errors);

    let size = 1 + left_size + right_size;
    if node.size() != size {
        errors.push(alloc::format!("Size mismatch at key {key}: stored {}, actual {size}", node.size()));
    }

    let node_height = 1 + left_height.max(right_height);
    if node.height() != node_height {
        errors.push(alloc::format!("Height mismatch at key {key}: stored {}, actual {node_height}", node.height()));
    }

    let bf = balance_factor(Some(node));
    if !(-1..=1).contains(&bf) {
        errors.push(alloc::format!("Unbalanced at key {key}: balance factor {bf}"));
    }

    (size, node_height)
}
