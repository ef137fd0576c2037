use tracing::debug;

use super::counts::{count_items, count_weighted, ItemCounts};
use super::order::FrequencyOrder;
use super::tree::FPTree;

/// Result of the two-scan construction.
#[derive(Debug, Clone)]
pub struct BuiltTree {
    pub tree: FPTree,
    /// Counts of the items that met the threshold.
    pub counts: ItemCounts,
    pub order: FrequencyOrder,
}

/// Builds an FP-tree from `transactions` in two scans: count, then insert
/// every transaction pruned to frequent items and sorted by frequency.
///
/// When no item reaches `min_count` the tree holds only its root.
pub fn build_fp_tree(transactions: &[Vec<usize>], min_count: usize) -> BuiltTree {
    let item_counts = count_items(transactions.iter().map(Vec::as_slice));
    let order = FrequencyOrder::from_counts(&item_counts, min_count);
    let mut fp_tree = FPTree::new();

    if !order.is_empty() {
        for transaction in transactions {
            let tx_items = order.arrange(transaction);
            if !tx_items.is_empty() {
                fp_tree.insert_transaction(&tx_items, 1);
            }
        }
    }

    debug!(
        transactions = transactions.len(),
        frequent_items = order.len(),
        nodes = fp_tree.len(),
        min_count,
        "built FP-tree"
    );

    BuiltTree {
        tree: fp_tree,
        counts: order.frequent_counts(),
        order,
    }
}

/// Builds the conditional FP-tree for a pattern base, treating each path as a
/// transaction weighted by its count.
///
/// Returns `None` when no item of the base reaches `min_count`.
pub fn build_conditional_fp_tree(
    prefix_paths: &[(Vec<usize>, usize)],
    min_count: usize,
) -> Option<FPTree> {
    let item_counts = count_weighted(prefix_paths.iter().map(|(path, count)| (path.as_slice(), *count)));
    let order = FrequencyOrder::from_counts(&item_counts, min_count);

    if order.is_empty() {
        return None;
    }

    let mut conditional_tree = FPTree::new();

    for (path, count) in prefix_paths {
        let filtered_path = order.arrange(path);
        if !filtered_path.is_empty() {
            conditional_tree.insert_transaction(&filtered_path, *count);
        }
    }

    Some(conditional_tree)
}
