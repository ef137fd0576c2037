use std::collections::HashMap;
use std::hash::Hash;

use super::patterns::{FrequentPatterns, Itemset};

/// Interns items into dense ids.
///
/// Ids follow the items' own ascending order, so breaking frequency ties by
/// id is the same as breaking them by item.
#[derive(Debug, Clone)]
pub struct ItemCatalog<T> {
    items: Vec<T>,
    ids: HashMap<T, usize>,
}

impl<T: Ord + Hash + Clone> ItemCatalog<T> {
    pub fn from_transactions<Tx: AsRef<[T]>>(transactions: &[Tx]) -> Self {
        let mut items: Vec<T> = transactions
            .iter()
            .flat_map(|tx| tx.as_ref().iter().cloned())
            .collect();
        items.sort_unstable();
        items.dedup();

        let ids = items
            .iter()
            .enumerate()
            .map(|(id, item)| (item.clone(), id))
            .collect();

        Self { items, ids }
    }

    pub fn id_of(&self, item: &T) -> Option<usize> {
        self.ids.get(item).copied()
    }

    pub fn item(&self, id: usize) -> Option<&T> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rewrites transactions as sorted, duplicate-free id lists. Items the
    /// catalog has never seen are dropped.
    pub fn encode<Tx: AsRef<[T]>>(&self, transactions: &[Tx]) -> Vec<Vec<usize>> {
        transactions
            .iter()
            .map(|tx| {
                let mut ids: Vec<usize> = tx.as_ref().iter().filter_map(|item| self.id_of(item)).collect();
                ids.sort_unstable();
                ids.dedup();
                ids
            })
            .collect()
    }

    /// Maps id patterns back to items. Ids outside the catalog are dropped.
    pub fn decode(&self, patterns: FrequentPatterns<usize>) -> FrequentPatterns<T> {
        patterns
            .into_iter()
            .map(|(itemset, support)| {
                let itemset: Itemset<T> = itemset
                    .iter()
                    .filter_map(|&id| self.item(id).cloned())
                    .collect();
                (itemset, support)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_item_order() {
        let transactions = vec![vec!["milk", "bread"], vec!["butter", "milk", "milk"]];
        let catalog = ItemCatalog::from_transactions(&transactions);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.id_of(&"bread"), Some(0));
        assert_eq!(catalog.id_of(&"butter"), Some(1));
        assert_eq!(catalog.id_of(&"milk"), Some(2));
        assert_eq!(catalog.item(1), Some(&"butter"));
        assert_eq!(catalog.id_of(&"eggs"), None);
    }

    #[test]
    fn encode_collapses_duplicates() {
        let transactions = vec![vec!["b", "a", "b"], vec![]];
        let catalog = ItemCatalog::from_transactions(&transactions);

        assert_eq!(catalog.encode(&transactions), vec![vec![0, 1], vec![]]);
    }

    #[test]
    fn decode_round_trips_patterns() {
        let transactions = vec![vec!["x", "y"]];
        let catalog = ItemCatalog::from_transactions(&transactions);
        let mut patterns = FrequentPatterns::new();
        patterns.insert(Itemset::new([1, 0]), 1);

        let decoded = catalog.decode(patterns);
        assert_eq!(decoded.support(&["y", "x"]), Some(1));
    }
}
