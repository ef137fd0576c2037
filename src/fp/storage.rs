/// Flat itemset storage: all items in one buffer, addressed by offsets.
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<usize>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// All frequent itemsets of one size.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_itemset_with_support(&mut self, mut items: Vec<usize>, support: usize) -> usize {
        items.sort_unstable();
        items.dedup();

        let start = self.items.len();
        self.items.extend_from_slice(&items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);

        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset_with_support(&mut self, items: Vec<usize>, support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset_with_support(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        self.storage.get_itemset(idx)
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.storage.get_support(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = (&[usize], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.get_support(idx)))
    }
}
