use std::collections::hash_map::{self, Entry};
use std::collections::HashMap;
use std::hash::Hash;

use super::storage::FrequentLevel;

/// A sorted, duplicate-free set of items. Equality and hashing go by content,
/// so insertion order never matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset<T>(Vec<T>);

impl<T: Ord> Itemset<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn is_subset_of(&self, other: &Itemset<T>) -> bool {
        self.0.iter().all(|item| other.0.binary_search(item).is_ok())
    }
}

impl<T> Itemset<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Ord> FromIterator<T> for Itemset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Mined itemsets and their support counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentPatterns<T: Eq + Hash = usize> {
    patterns: HashMap<Itemset<T>, usize>,
}

impl<T: Eq + Hash> Default for FrequentPatterns<T> {
    fn default() -> Self {
        Self {
            patterns: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash> FrequentPatterns<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `itemset` with `support`. If the itemset is already present the
    /// larger support wins. Returns whether the stored value changed.
    pub fn insert(&mut self, itemset: Itemset<T>, support: usize) -> bool {
        match self.patterns.entry(itemset) {
            Entry::Occupied(mut slot) => {
                if *slot.get() < support {
                    slot.insert(support);
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(support);
                true
            }
        }
    }

    /// Folds `other` in with the same max-wins rule as [`insert`](Self::insert).
    pub fn merge(&mut self, other: FrequentPatterns<T>) {
        if self.patterns.is_empty() {
            self.patterns = other.patterns;
            return;
        }
        for (itemset, support) in other.patterns {
            self.insert(itemset, support);
        }
    }

    pub fn get(&self, itemset: &Itemset<T>) -> Option<usize> {
        self.patterns.get(itemset).copied()
    }

    pub fn contains(&self, itemset: &Itemset<T>) -> bool {
        self.patterns.contains_key(itemset)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Itemset<T>, usize> {
        self.patterns.iter()
    }

    /// Patterns with exactly `size` items.
    pub fn of_size(&self, size: usize) -> impl Iterator<Item = (&Itemset<T>, usize)> + '_ {
        self.patterns
            .iter()
            .filter(move |(itemset, _)| itemset.len() == size)
            .map(|(itemset, &support)| (itemset, support))
    }

    /// Size of the largest pattern, 0 when empty.
    pub fn max_len(&self) -> usize {
        self.patterns.keys().map(Itemset::len).max().unwrap_or(0)
    }

    /// Relabels every item with `f`. Itemsets that collapse onto the same key
    /// keep the larger support.
    pub fn map_items<U, F>(self, mut f: F) -> FrequentPatterns<U>
    where
        U: Ord + Hash,
        F: FnMut(T) -> U,
    {
        let mut mapped = FrequentPatterns::new();
        for (itemset, support) in self.patterns {
            mapped.insert(Itemset::new(itemset.into_vec().into_iter().map(&mut f)), support);
        }
        mapped
    }
}

impl<T: Ord + Hash + Clone> FrequentPatterns<T> {
    /// Support of the itemset made of `items`, in any order.
    pub fn support(&self, items: &[T]) -> Option<usize> {
        self.get(&Itemset::new(items.iter().cloned()))
    }

    /// Patterns ordered by size, then support descending, then items.
    pub fn sorted(&self) -> Vec<(Itemset<T>, usize)> {
        let mut sorted: Vec<(Itemset<T>, usize)> = self
            .patterns
            .iter()
            .map(|(itemset, &support)| (itemset.clone(), support))
            .collect();
        sorted.sort_by(|a, b| {
            a.0.len()
                .cmp(&b.0.len())
                .then(b.1.cmp(&a.1))
                .then_with(|| a.0.cmp(&b.0))
        });
        sorted
    }
}

impl FrequentPatterns<usize> {
    /// Flat per-size storage; `levels[k - 1]` holds the `k`-itemsets.
    pub fn to_levels(&self) -> Vec<FrequentLevel> {
        let mut levels: Vec<FrequentLevel> = (1..=self.max_len()).map(FrequentLevel::new).collect();
        for (itemset, support) in self.sorted() {
            levels[itemset.len() - 1].add_itemset_with_support(itemset.into_vec(), support);
        }
        levels
    }
}

impl<T: Eq + Hash> IntoIterator for FrequentPatterns<T> {
    type Item = (Itemset<T>, usize);
    type IntoIter = hash_map::IntoIter<Itemset<T>, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a FrequentPatterns<T> {
    type Item = (&'a Itemset<T>, &'a usize);
    type IntoIter = hash_map::Iter<'a, Itemset<T>, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

impl<T: Ord + Hash> FromIterator<(Itemset<T>, usize)> for FrequentPatterns<T> {
    fn from_iter<I: IntoIterator<Item = (Itemset<T>, usize)>>(iter: I) -> Self {
        let mut patterns = FrequentPatterns::new();
        for (itemset, support) in iter {
            patterns.insert(itemset, support);
        }
        patterns
    }
}
