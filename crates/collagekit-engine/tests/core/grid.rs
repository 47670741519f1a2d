use collagekit_engine::grid::{GridTree, SplitDirection};
use proptest::prelude::*;

#[test]
fn test_new_tree_is_one_full_cell() {
    let tree = GridTree::new();
    let cells = tree.flatten();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].x, 0.0);
    assert_eq!(cells[0].y, 0.0);
    assert_eq!(cells[0].width, 1.0);
    assert_eq!(cells[0].height, 1.0);
}

#[test]
fn test_split_then_resize_yields_three_cells() {
    let mut tree = GridTree::new();
    let root = tree.root_id();
    tree.split(root, SplitDirection::Horizontal);

    // Split the right child vertically, then drag its divider to 0.3.
    let leaves = tree.leaf_ids();
    let right = leaves[1];
    tree.split(right, SplitDirection::Vertical);
    tree.set_ratio(right, 0.3);

    let cells = tree.flatten();
    assert_eq!(cells.len(), 3);
    // Left half untouched.
    assert!((cells[0].width - 0.5).abs() < 1e-12);
    assert!((cells[0].height - 1.0).abs() < 1e-12);
    // Right half divided 0.3 / 0.7 vertically.
    assert!((cells[1].height - 0.3).abs() < 1e-12);
    assert!((cells[2].height - 0.7).abs() < 1e-12);
    assert!((cells[1].x - 0.5).abs() < 1e-12);
    assert!((cells[2].y - 0.3).abs() < 1e-12);
}

#[test]
fn test_set_ratio_clamps_to_bounds() {
    let mut tree = GridTree::new();
    let root = tree.root_id();
    tree.split(root, SplitDirection::Horizontal);

    tree.set_ratio(root, 0.01);
    assert!((tree.flatten()[0].width - 0.15).abs() < 1e-12);

    tree.set_ratio(root, 0.99);
    assert!((tree.flatten()[0].width - 0.85).abs() < 1e-12);
}

#[test]
fn test_cell_ids_stable_across_ratio_changes() {
    let mut tree = GridTree::new();
    tree.split(tree.root_id(), SplitDirection::Vertical);
    let before = tree.leaf_ids();
    tree.set_ratio(tree.root_id(), 0.4);
    assert_eq!(tree.leaf_ids(), before);
}

#[test]
fn test_tree_rebuilds_from_flat_cells() {
    let mut tree = GridTree::new();
    tree.split(tree.root_id(), SplitDirection::Horizontal);
    let leaves = tree.leaf_ids();
    tree.split(leaves[0], SplitDirection::Vertical);
    tree.set_ratio(leaves[0], 0.25);

    let restored = GridTree::from_cells(&tree.flatten());
    let mut original: Vec<_> = tree.flatten().iter().map(|c| c.rect()).collect();
    let mut reloaded: Vec<_> = restored.flatten().iter().map(|c| c.rect()).collect();
    let key = |r: &collagekit_core::FracRect| {
        ((r.x * 1e9) as i64, (r.y * 1e9) as i64, (r.width * 1e9) as i64)
    };
    original.sort_by_key(key);
    reloaded.sort_by_key(key);
    assert_eq!(original.len(), 3);
    for (a, b) in original.iter().zip(&reloaded) {
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
        assert!((a.width - b.width).abs() < 1e-9);
        assert!((a.height - b.height).abs() < 1e-9);
    }
}

#[test]
fn test_non_partition_cell_list_degrades_to_one_cell() {
    let cells = vec![
        collagekit_engine::grid::GridCell {
            id: 1,
            x: 0.0,
            y: 0.0,
            width: 0.4,
            height: 1.0,
        },
        collagekit_engine::grid::GridCell {
            id: 2,
            x: 0.5,
            y: 0.0,
            width: 0.5,
            height: 1.0,
        },
    ];
    let tree = GridTree::from_cells(&cells);
    assert_eq!(tree.leaf_count(), 1);
}

/// Drives a tree through an arbitrary edit script.
fn apply_script(script: &[(u8, u64, f64)]) -> GridTree {
    let mut tree = GridTree::new();
    for &(op, seed, ratio) in script {
        match op % 3 {
            0 => {
                let leaves = tree.leaf_ids();
                let target = leaves[(seed as usize) % leaves.len()];
                tree.split(target, SplitDirection::Horizontal);
            }
            1 => {
                let leaves = tree.leaf_ids();
                let target = leaves[(seed as usize) % leaves.len()];
                tree.split(target, SplitDirection::Vertical);
            }
            _ => {
                let splits = tree.split_ids();
                if !splits.is_empty() {
                    let target = splits[(seed as usize) % splits.len()];
                    tree.set_ratio(target, ratio);
                }
            }
        }
    }
    tree
}

proptest! {
    /// Whatever the edit history, the flattened cells exactly tile the
    /// unit square: areas sum to 1, no cell leaves the canvas, no two
    /// cells overlap.
    #[test]
    fn test_flatten_always_partitions_unit_square(
        script in proptest::collection::vec((any::<u8>(), any::<u64>(), 0.0f64..1.0), 0..24)
    ) {
        let tree = apply_script(&script);
        let cells = tree.flatten();

        prop_assert_eq!(cells.len(), tree.leaf_count());

        let total: f64 = cells.iter().map(|c| c.rect().area()).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);

        for cell in &cells {
            prop_assert!(cell.x >= -1e-9 && cell.y >= -1e-9);
            prop_assert!(cell.x + cell.width <= 1.0 + 1e-9);
            prop_assert!(cell.y + cell.height <= 1.0 + 1e-9);
        }

        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                prop_assert!(!a.rect().overlaps(&b.rect()));
            }
        }
    }
}
