use std::collections::{HashMap, HashSet};

/// Per-item occurrence counts for one build pass.
pub type ItemCounts = HashMap<usize, usize>;

/// Counts the transactions containing each item. An item repeated within a
/// transaction is counted once.
pub fn count_items<'a, I>(transactions: I) -> ItemCounts
where
    I: IntoIterator<Item = &'a [usize]>,
{
    count_weighted(transactions.into_iter().map(|tx| (tx, 1)))
}

/// Like [`count_items`], but each transaction contributes `weight` instead of 1.
pub fn count_weighted<'a, I>(transactions: I) -> ItemCounts
where
    I: IntoIterator<Item = (&'a [usize], usize)>,
{
    let mut item_counts = ItemCounts::new();
    let mut seen = HashSet::new();

    for (transaction, weight) in transactions {
        seen.clear();
        for &item in transaction {
            if seen.insert(item) {
                *item_counts.entry(item).or_insert(0) += weight;
            }
        }
    }

    item_counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_transactions_not_multiplicity() {
        let transactions: Vec<Vec<usize>> = vec![vec![1, 1, 2], vec![2], vec![3, 2, 3]];
        let counts = count_items(transactions.iter().map(Vec::as_slice));

        assert_eq!(counts[&1], 1);
        assert_eq!(counts[&2], 3);
        assert_eq!(counts[&3], 1);
    }

    #[test]
    fn empty_input() {
        assert!(count_items(std::iter::empty::<&[usize]>()).is_empty());
    }

    #[test]
    fn weighted() {
        let paths: Vec<(Vec<usize>, usize)> = vec![(vec![0, 1], 3), (vec![0], 2)];
        let counts = count_weighted(paths.iter().map(|(p, c)| (p.as_slice(), *c)));

        assert_eq!(counts[&0], 5);
        assert_eq!(counts[&1], 3);
    }
}
