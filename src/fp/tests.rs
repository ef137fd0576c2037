use super::*;
use crate::config::{MinSupport, MiningConfig, MiningStrategy};
use crate::error::MiningError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

fn tx(items: &[&[usize]]) -> Vec<Vec<usize>> {
    items.iter().map(|t| t.to_vec()).collect()
}

#[test]
fn test_itemset_storage() {
    let mut storage = ItemsetStorage::new();

    storage.add_itemset_with_support(vec![7, 2, 5], 4);
    storage.add_itemset_with_support(vec![1, 3], 2);

    assert_eq!(storage.get_itemset(0), &[2, 5, 7]); // sorted!
    assert_eq!(storage.get_support(0), 4);
    assert_eq!(storage.get_itemset(1), &[1, 3]);
    assert_eq!(storage.len(), 2);
}

#[test]
fn test_frequent_levels() {
    let mut patterns = FrequentPatterns::new();
    patterns.insert(Itemset::new([1]), 5);
    patterns.insert(Itemset::new([2]), 3);
    patterns.insert(Itemset::new([2, 1]), 3);

    let levels = patterns.to_levels();
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].itemset_size, 1);
    assert_eq!(levels[0].len(), 2);

    let pairs: Vec<_> = levels[1].iter_itemsets().collect();
    assert_eq!(pairs, vec![(&[1, 2][..], 3)]);
}

#[test]
fn test_fp_tree_insert() {
    let mut tree = FPTree::new();

    tree.insert_transaction(&[1, 2, 3], 1);

    assert!(tree.nodes[0].children.contains_key(&1));
    assert_eq!(tree.node_chain(1).count(), 1);
    assert_eq!(tree.node_chain(3).count(), 1);

    // Shares the [1, 2] prefix with the first transaction.
    tree.insert_transaction(&[1, 2, 4], 1);

    let node1_idx = tree.nodes[0].children[&1];
    assert_eq!(tree.nodes[node1_idx].count, 2);
    assert_eq!(tree.nodes[node1_idx].children.len(), 1);
    assert_eq!(tree.node_chain(4).count(), 1);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.nodes[0].count, 0);
}

#[test]
fn test_header_chain_links_in_insertion_order() {
    let mut tree = FPTree::new();
    tree.insert_transaction(&[1, 3], 1);
    tree.insert_transaction(&[2, 3], 2);
    tree.insert_transaction(&[3], 4);

    let chain: Vec<usize> = tree.node_chain(3).collect();
    assert_eq!(chain.len(), 3);
    let parents: Vec<Option<usize>> = chain
        .iter()
        .map(|&idx| tree.nodes[idx].parent.and_then(|p| tree.nodes[p].item))
        .collect();
    assert_eq!(parents, vec![Some(1), Some(2), None]);
    assert_eq!(tree.item_support(3), 7);
    assert!(tree.node_chain(9).next().is_none());
}

#[test]
fn test_weighted_insert() {
    let mut tree = FPTree::new();
    tree.insert_transaction(&[5, 6], 3);
    tree.insert_transaction(&[5], 2);

    let node5 = tree.nodes[0].children[&5];
    assert_eq!(tree.nodes[node5].count, 5);
    assert_eq!(tree.item_support(6), 3);
    assert_eq!(tree.root_mass(), 5);
}

#[test]
fn test_fp_tree_prefix_paths() {
    let mut tree = FPTree::new();

    // root → 1 → 2 → 3
    //           └→ 4
    tree.insert_transaction(&[1, 2, 3], 1);
    tree.insert_transaction(&[1, 2, 4], 1);

    let paths = tree.conditional_pattern_base(3);
    assert_eq!(paths, vec![(vec![1, 2], 1)]);

    let paths = tree.conditional_pattern_base(4);
    assert_eq!(paths, vec![(vec![1, 2], 1)]);

    let paths = tree.conditional_pattern_base(2);
    assert_eq!(paths, vec![(vec![1], 2)]);
}

#[test]
fn test_root_level_occurrences_have_no_pattern_base() {
    let mut tree = FPTree::new();
    tree.insert_transaction(&[1], 1);
    tree.insert_transaction(&[2, 1], 1);

    // The node for 1 directly under the root contributes nothing.
    assert_eq!(tree.conditional_pattern_base(1), vec![(vec![2], 1)]);
    assert!(tree.conditional_pattern_base(2).is_empty());
}

#[test]
fn test_fp_tree_single_path() {
    let mut tree1 = FPTree::new();
    tree1.insert_transaction(&[1, 2, 3], 1);
    tree1.insert_transaction(&[1, 2], 1);
    assert!(tree1.has_single_path());
    assert_eq!(tree1.single_path(), vec![(1, 2), (2, 2), (3, 1)]);

    let mut tree2 = FPTree::new();
    tree2.insert_transaction(&[1, 2], 1);
    tree2.insert_transaction(&[1, 3], 1);
    assert!(!tree2.has_single_path());

    assert!(FPTree::new().has_single_path());
    assert!(FPTree::new().single_path().is_empty());
}

#[test]
fn test_build_fp_tree() {
    let transactions = tx(&[&[0, 1], &[0, 1, 2], &[0, 2], &[1, 2], &[0, 1, 2], &[3]]);
    let built = build_fp_tree(&transactions, 3);

    assert_eq!(built.order.items().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(built.counts.len(), 3);
    assert!(!built.counts.contains_key(&3));
    // Item 3 is infrequent, so its transaction is dropped entirely.
    assert_eq!(built.tree.root_mass(), 5);
    assert_eq!(built.tree.item_support(0), 4);
    assert_eq!(built.tree.item_support(3), 0);
}

#[test]
fn test_build_fp_tree_nothing_frequent() {
    let transactions = tx(&[&[0], &[1]]);
    let built = build_fp_tree(&transactions, 2);

    assert!(built.tree.is_empty());
    assert!(built.order.is_empty());
    assert!(mine(&built.tree, 2, &[]).is_empty());
}

#[test]
fn test_build_conditional_tree() {
    let prefix_paths = vec![(vec![1, 2], 2), (vec![1], 1)];

    let cond_tree = build_conditional_fp_tree(&prefix_paths, 2).unwrap();

    // 1 appears with weight 3, 2 with weight 2: both survive.
    assert_eq!(cond_tree.item_support(1), 3);
    assert_eq!(cond_tree.item_support(2), 2);
    assert!(cond_tree.has_single_path());

    let cond_tree = build_conditional_fp_tree(&prefix_paths, 3).unwrap();
    assert_eq!(cond_tree.item_support(1), 3);
    assert!(!cond_tree.header_table.contains_key(&2));

    assert!(build_conditional_fp_tree(&prefix_paths, 4).is_none());
    assert!(build_conditional_fp_tree(&[], 1).is_none());
}

#[test]
fn test_conditional_tree_reorders_paths() {
    // Locally, 7 is more frequent than 3, so it moves toward the root.
    let prefix_paths = vec![(vec![3, 7], 1), (vec![7], 2)];
    let cond_tree = build_conditional_fp_tree(&prefix_paths, 1).unwrap();

    assert_eq!(cond_tree.single_path(), vec![(7, 3), (3, 1)]);
}

#[test]
fn test_combination_generation() {
    let path = vec![(5, 10), (7, 8), (9, 5)];

    let mut ones = FrequentPatterns::new();
    combinations::generate_combinations_from_path(&path, 1, &[], 1, &mut ones);
    assert_eq!(ones.len(), 3);

    let mut pairs = FrequentPatterns::new();
    combinations::generate_combinations_from_path(&path, 2, &[], 1, &mut pairs);
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs.support(&[5, 9]), Some(5));
    assert_eq!(pairs.support(&[5, 7]), Some(8));
}

#[test]
fn test_path_patterns_respect_threshold_and_prefix() {
    let path = vec![(5, 10), (7, 8), (9, 5)];
    let mut result = FrequentPatterns::new();
    combinations::generate_path_patterns(&path, &[1], 6, &mut result);

    // Subsets touching item 9 fall below 6.
    assert_eq!(result.len(), 3);
    assert_eq!(result.support(&[1, 5]), Some(10));
    assert_eq!(result.support(&[1, 7]), Some(8));
    assert_eq!(result.support(&[1, 5, 7]), Some(8));
    assert_eq!(result.support(&[1, 9]), None);
}

#[test]
fn test_fp_growth_simple() {
    // Items 0, 1, 2 each appear 3 times; each pair twice; the triple once.
    let transactions = tx(&[&[0, 1], &[0, 1, 2], &[0, 2], &[1, 2]]);

    let result = fp_growth_algorithm(&transactions, 2).unwrap();

    assert_eq!(result.len(), 6);
    for item in 0..3 {
        assert_eq!(result.support(&[item]), Some(3));
    }
    assert_eq!(result.support(&[1, 2]), Some(2));
    assert_eq!(result.support(&[0, 1, 2]), None);
}

#[test]
fn test_mine_with_prefix() {
    let mut tree = FPTree::new();
    tree.insert_transaction(&[1, 2], 2);
    tree.insert_transaction(&[2], 1);

    let result = mine(&tree, 1, &[9]);
    assert_eq!(result.support(&[9, 1]), Some(2));
    assert_eq!(result.support(&[9, 2]), Some(3));
    assert_eq!(result.support(&[9, 1, 2]), Some(2));
    assert_eq!(result.len(), 3);
}

#[test]
fn test_strategies_agree() {
    let transactions = tx(&[
        &[0, 1, 3],
        &[1, 2, 3],
        &[0, 2],
        &[0, 1, 2, 3],
        &[2, 3],
        &[0, 3],
        &[1],
    ]);

    let sequential = fp_growth_algorithm(&transactions, 2).unwrap();
    for strategy in [MiningStrategy::Parallel, MiningStrategy::WorkList] {
        let miner = FpGrowth::new(2).unwrap().with_strategy(strategy);
        assert_eq!(miner.mine_transactions(&transactions).unwrap(), sequential);

        let without_shortcut = miner.with_single_path_shortcut(false);
        assert_eq!(without_shortcut.mine_transactions(&transactions).unwrap(), sequential);
    }
}

#[test]
fn test_zero_min_count_rejected() {
    assert!(matches!(FpGrowth::new(0), Err(MiningError::ZeroMinSupport)));
    assert!(fp_growth_algorithm(&[], 0).is_err());
}

#[test]
fn test_cancellation() {
    let transactions = tx(&[&[0, 1], &[1, 2], &[0, 2]]);
    let flag = Arc::new(AtomicBool::new(true));

    for strategy in [
        MiningStrategy::Sequential,
        MiningStrategy::Parallel,
        MiningStrategy::WorkList,
    ] {
        let miner = FpGrowth::new(1)
            .unwrap()
            .with_strategy(strategy)
            .with_cancellation(flag.clone());
        assert!(matches!(
            miner.mine_transactions(&transactions),
            Err(MiningError::Cancelled)
        ));
    }
}

#[test]
fn test_max_merge_on_duplicate_keys() {
    let mut patterns = FrequentPatterns::new();
    assert!(patterns.insert(Itemset::new([2, 1]), 3));
    assert!(!patterns.insert(Itemset::new([1, 2]), 2));
    assert!(patterns.insert(Itemset::new([1, 2]), 5));
    assert_eq!(patterns.support(&[2, 1]), Some(5));

    let mut other = FrequentPatterns::new();
    other.insert(Itemset::new([1, 2]), 4);
    other.insert(Itemset::new([3]), 1);
    patterns.merge(other);
    assert_eq!(patterns.support(&[1, 2]), Some(5));
    assert!(patterns.contains(&Itemset::new([3])));
    assert_eq!(patterns.len(), 2);
}

#[test]
fn test_map_items_relabels_patterns() {
    let mut patterns = FrequentPatterns::new();
    patterns.insert(Itemset::new([0, 2]), 4);
    patterns.insert(Itemset::new([1]), 6);
    patterns.insert(Itemset::new([3]), 2);

    let labels = ['a', 'b', 'c', 'd'];
    let named = patterns.clone().map_items(|id| labels[id]);
    assert_eq!(named.len(), 3);
    assert_eq!(named.support(&['c', 'a']), Some(4));
    assert_eq!(named.support(&['b']), Some(6));

    // 1 and 3 both map to the same label; the larger support wins.
    let parity = patterns.map_items(|id| id % 2);
    assert_eq!(parity.support(&[1]), Some(6));
    assert_eq!(parity.support(&[0]), Some(4));
    assert_eq!(parity.len(), 2);
}

#[test]
fn test_from_config_resolves_threshold() {
    let config = MiningConfig::new(MinSupport::Fraction(0.55)).with_strategy(MiningStrategy::Parallel);
    let miner = FpGrowth::from_config(&config, 100).unwrap();

    assert_eq!(miner.min_count(), 55);
    assert_eq!(miner.strategy(), MiningStrategy::Parallel);
}

#[test]
fn test_work_list_defers_conditional_trees() {
    // A long shared chain yields a deep stack of pending pattern bases.
    let transactions: Vec<Vec<usize>> = (0..12)
        .map(|i| (0..12).filter(|&item| item != i).collect())
        .collect();
    let miner = FpGrowth::new(10).unwrap().with_single_path_shortcut(false);

    let sequential = miner.mine_transactions(&transactions).unwrap();
    let work_list = miner
        .with_strategy(MiningStrategy::WorkList)
        .mine_transactions(&transactions)
        .unwrap();
    assert_eq!(work_list, sequential);
    assert_eq!(work_list.support(&[0, 1]), Some(10));
    assert_eq!(work_list.support(&[0, 1, 2]), None);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "minimum support count must be positive")]
fn test_mine_rejects_zero_min_count() {
    mine(&FPTree::new(), 0, &[]);
}
