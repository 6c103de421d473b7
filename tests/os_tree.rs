use pretty_assertions::assert_eq;
use proptest::prelude::*;

use osavl_tree::raw::{self, Iter, Link, Node, balance_factor, height};
use osavl_tree::{Counter, OSTree, Rank, Uncounted};

/// The largest tree built by the randomized tests.
const TEST_SIZE: i32 = 2_000;

// ─── Invariant checks through the public node accessors ─────────────────────

/// Recomputes (size, height) bottom-up and asserts every cached value and balance factor.
fn check_node(node: Option<&Node>) -> (usize, i32) {
    let Some(node) = node else {
        return (0, -1);
    };

    let (left_size, left_height) = check_node(node.left());
    let (right_size, right_height) = check_node(node.right());

    assert_eq!(node.size(), 1 + left_size + right_size, "size of {}", node.key());
    assert_eq!(node.height(), 1 + left_height.max(right_height), "height of {}", node.key());
    assert!((-1..=1).contains(&balance_factor(Some(node))), "balance of {}", node.key());

    (node.size(), node.height())
}

fn check_tree(tree: &OSTree) {
    check_node(tree.root());
    let keys: Vec<i32> = tree.iter().collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys out of order: {keys:?}");
    assert_eq!(keys.len(), tree.len());
}

#[derive(Default)]
struct Tally(u64);

impl Counter for Tally {
    fn count(&mut self, units: u64) {
        self.0 += units;
    }
}

// ─── End-to-end scenarios ───────────────────────────────────────────────────

#[test]
fn build_and_select_middle() {
    let tree = OSTree::from_range(1, 7);
    check_tree(&tree);

    assert_eq!(tree.len(), 7);
    assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.select(4), Some(4));
}

#[test]
fn delete_middle_keeps_invariants() {
    let mut tree = OSTree::from_range(1, 7);
    assert_eq!(tree.delete(4), Some(4));
    check_tree(&tree);

    assert_eq!(tree.len(), 6);
    assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 3, 5, 6, 7]);
}

#[test]
fn drain_from_smallest() {
    let mut tree = OSTree::from_range(1, 10);
    let mut removed = Vec::new();

    for _ in 0..10 {
        removed.push(tree.delete(1).expect("tree should not be empty yet"));
        check_tree(&tree);
    }

    assert_eq!(removed, (1..=10).collect::<Vec<_>>());
    assert!(tree.is_empty());
    assert!(tree.into_root().is_none());
}

#[test]
fn drain_from_largest() {
    let mut tree = OSTree::from_range(1, 100);
    for expected in (1..=100).rev() {
        let len = tree.len();
        assert_eq!(tree.delete(len), Some(expected));
        check_tree(&tree);
    }
    assert_eq!(tree.height(), -1);
}

#[test]
fn pretty_print_of_seven() {
    let tree = OSTree::from_range(1, 7);
    let expected = "\
4 (b: 0, h: 2, s: 7)
   2 (b: 0, h: 1, s: 3)
      1 (b: 0, h: 0, s: 1)
      3 (b: 0, h: 0, s: 1)
   6 (b: 0, h: 1, s: 3)
      5 (b: 0, h: 0, s: 1)
      7 (b: 0, h: 0, s: 1)
";
    assert_eq!(tree.pretty().to_string(), expected);
}

#[test]
fn destroy_is_idempotent() {
    let mut root: Link = raw::build_tree(1, 20, &mut Uncounted);
    raw::delete_tree(&mut root);
    assert!(root.is_none());
    raw::delete_tree(&mut root);
    assert!(root.is_none());

    let mut tree = OSTree::from_range(1, 20);
    tree.clear();
    tree.clear();
    assert_eq!(tree.len(), 0);
}

#[test]
fn out_of_range_operations_are_noops() {
    let mut tree = OSTree::from_range(1, 5);
    assert_eq!(tree.select(0), None);
    assert_eq!(tree.select(6), None);
    assert_eq!(tree.delete(0), None);
    assert_eq!(tree.delete(6), None);
    assert!(!tree.remove(9));
    assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    let mut empty = OSTree::new();
    assert_eq!(empty.select(1), None);
    assert_eq!(empty.delete(1), None);
}

#[test]
fn counter_sees_every_operation_kind() {
    let mut build = Tally::default();
    let mut select = Tally::default();
    let mut delete = Tally::default();

    let mut tree = OSTree::from_range_counted(1, 1000, &mut build);
    assert_eq!(build.0, 3000);

    assert_eq!(tree.select_counted(500, &mut select), Some(500));
    assert!(select.0 > 0);

    assert_eq!(tree.delete_counted(500, &mut delete), Some(500));
    assert!(delete.0 > select.0);
}

#[test]
fn height_is_logarithmic_throughout_drain() {
    let n = 4096;
    let mut tree = OSTree::from_range(1, n);
    assert_eq!(tree.height(), 12);

    let mut i = 1;
    while !tree.is_empty() {
        // 1.45 log2(n) bound on AVL height, rounded up.
        let bound = (1.45 * (tree.len() as f64 + 2.0).log2()).ceil() as i32;
        assert!(tree.height() <= bound, "height {} > {bound} at len {}", tree.height(), tree.len());

        i = (i * 7919) % tree.len() + 1;
        tree.delete(i);
    }
}

// ─── Randomized properties ──────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// The i-th smallest key of a tree over `[l, r]` is `l + i - 1`.
    #[test]
    fn select_matches_range_offset(l in -50_000i32..50_000, width in 1i32..TEST_SIZE) {
        let r = l + width - 1;
        let tree = OSTree::from_range(l, r);
        check_tree(&tree);

        for i in 1..=width {
            prop_assert_eq!(tree.select(i as usize), Some(l + i - 1));
            prop_assert_eq!(tree[Rank(i as usize)], l + i - 1);
        }
    }

    /// Deleting random order statistics matches removing from a sorted vector.
    #[test]
    fn delete_matches_vec(n in 1i32..TEST_SIZE, picks in prop::collection::vec(any::<usize>(), 0..500)) {
        let mut tree = OSTree::from_range(1, n);
        let mut model: Vec<i32> = (1..=n).collect();

        for pick in picks {
            if model.is_empty() {
                prop_assert!(tree.is_empty());
                break;
            }

            let i = pick % model.len() + 1;
            prop_assert_eq!(tree.delete(i), Some(model.remove(i - 1)));
            prop_assert_eq!(tree.len(), model.len());
        }

        check_tree(&tree);
        prop_assert_eq!(tree.iter().collect::<Vec<_>>(), model);
    }

    /// Ranks and selections stay inverse to each other after mutations.
    #[test]
    fn rank_of_inverts_select(n in 1i32..500, removals in prop::collection::vec(1i32..500, 0..200)) {
        let mut tree = OSTree::from_range(1, n);
        for key in removals {
            tree.remove(key);
        }
        check_tree(&tree);

        for (index, key) in tree.iter().enumerate() {
            prop_assert_eq!(tree.rank_of(key), Some(index + 1));
            prop_assert_eq!(tree.select(index + 1), Some(key));
            prop_assert!(tree.contains(key));
        }
    }

    /// Counting never changes the shape of the tree.
    #[test]
    fn counting_is_side_effect_free(n in 1i32..500, picks in prop::collection::vec(1usize..500, 0..100)) {
        let mut counted: Link = raw::build_tree(1, n, &mut Tally::default());
        let mut plain: Link = raw::build_tree(1, n, &mut Uncounted);
        let mut tally = Tally::default();

        for i in picks {
            counted = raw::os_delete(counted, i, &mut tally);
            plain = raw::os_delete(plain, i, &mut Uncounted);
        }

        prop_assert_eq!(height(counted.as_deref()), height(plain.as_deref()));
        prop_assert!(Iter::new(counted.as_deref()).eq(Iter::new(plain.as_deref())));
    }
}
