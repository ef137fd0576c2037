use std::collections::HashMap;

use super::counts::ItemCounts;

/// Total order over the frequent items of one (conditional) database:
/// count descending, item id ascending on ties.
#[derive(Debug, Clone, Default)]
pub struct FrequencyOrder {
    ranked: Vec<(usize, usize)>,
    ranks: HashMap<usize, usize>,
}

impl FrequencyOrder {
    /// Drops items below `min_count` and ranks the rest.
    pub fn from_counts(item_counts: &ItemCounts, min_count: usize) -> Self {
        let mut ranked: Vec<(usize, usize)> = item_counts
            .iter()
            .filter(|&(_, &count)| count >= min_count)
            .map(|(&item, &count)| (item, count))
            .collect();

        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        let ranks = ranked
            .iter()
            .enumerate()
            .map(|(rank, &(item, _))| (item, rank))
            .collect();

        Self { ranked, ranks }
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Frequent items, most frequent first.
    pub fn items(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranked.iter().map(|&(item, _)| item)
    }

    pub fn rank(&self, item: usize) -> Option<usize> {
        self.ranks.get(&item).copied()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.ranks.contains_key(&item)
    }

    /// Counts of the surviving items only.
    pub fn frequent_counts(&self) -> ItemCounts {
        self.ranked.iter().copied().collect()
    }

    /// Prunes `transaction` to frequent items and sorts it by rank, collapsing
    /// duplicates.
    pub fn arrange(&self, transaction: &[usize]) -> Vec<usize> {
        let mut ranked: Vec<(usize, usize)> = transaction
            .iter()
            .filter_map(|&item| self.rank(item).map(|rank| (rank, item)))
            .collect();

        ranked.sort_unstable();
        ranked.dedup();
        ranked.into_iter().map(|(_, item)| item).collect()
    }
}
