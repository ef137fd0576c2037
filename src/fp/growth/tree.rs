use std::collections::HashMap;

/// One `(prefix path, count)` entry per occurrence node of an item.
pub type PatternBase = Vec<(Vec<usize>, usize)>;

#[derive(Debug, Clone)]
pub struct FPNode {
    /// `None` only for the root.
    pub item: Option<usize>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<usize, usize>,
    /// Next node carrying the same item, in insertion order.
    pub node_link: Option<usize>,
}

/// Head and tail of an item's node chain, plus the item's summed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderEntry {
    pub head: usize,
    tail: usize,
    pub support: usize,
}

/// Arena-backed FP-tree. Parent, child and node-link references are indices
/// into `nodes`; index 0 is the root.
#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header_table: HashMap<usize, HeaderEntry>,
    pub root_index: usize,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            node_link: None,
        }
    }

    pub fn new_item(item: usize, count: usize, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
            node_link: None,
        }
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            root_index: 0,
        }
    }

    /// Threads `transaction` (already pruned and ordered) into the tree,
    /// adding `weight` to every node on its path.
    pub fn insert_transaction(&mut self, transaction: &[usize], weight: usize) {
        let mut current_index = self.root_index;

        for &item in transaction {
            let next_index = match self.nodes[current_index].children.get(&item) {
                Some(&child_index) => {
                    self.nodes[child_index].count += weight;
                    child_index
                }
                None => {
                    let new_index = self.nodes.len();
                    self.nodes
                        .push(FPNode::new_item(item, weight, current_index));
                    self.nodes[current_index].children.insert(item, new_index);
                    self.link_node(item, new_index);
                    new_index
                }
            };

            if let Some(entry) = self.header_table.get_mut(&item) {
                entry.support += weight;
            }
            current_index = next_index;
        }
    }

    fn link_node(&mut self, item: usize, node_index: usize) {
        match self.header_table.get_mut(&item) {
            Some(entry) => {
                let tail = entry.tail;
                entry.tail = node_index;
                self.nodes[tail].node_link = Some(node_index);
            }
            None => {
                self.header_table.insert(
                    item,
                    HeaderEntry {
                        head: node_index,
                        tail: node_index,
                        support: 0,
                    },
                );
            }
        }
    }

    /// Node count, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Every node carrying `item`, following the header chain.
    pub fn node_chain(&self, item: usize) -> impl Iterator<Item = usize> + '_ {
        let head = self.header_table.get(&item).map(|entry| entry.head);
        std::iter::successors(head, move |&idx| self.nodes[idx].node_link)
    }

    /// Summed count of `item` across all of its nodes.
    pub fn item_support(&self, item: usize) -> usize {
        self.header_table.get(&item).map_or(0, |entry| entry.support)
    }

    /// `(item, support)` for every item in the tree, least frequent first,
    /// ties broken by item id.
    pub fn items_by_support(&self) -> Vec<(usize, usize)> {
        let mut items: Vec<(usize, usize)> = self
            .header_table
            .iter()
            .map(|(&item, entry)| (item, entry.support))
            .collect();
        items.sort_unstable_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        items
    }

    /// Sum of the counts directly under the root.
    pub fn root_mass(&self) -> usize {
        self.nodes[self.root_index]
            .children
            .values()
            .map(|&idx| self.nodes[idx].count)
            .sum()
    }

    /// Items on the path from the root down to `node_index`'s parent.
    pub fn prefix_path(&self, node_index: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = self.nodes[node_index].parent;

        while let Some(i) = current {
            if let Some(item) = self.nodes[i].item {
                path.push(item);
            }
            current = self.nodes[i].parent;
        }

        path.reverse();
        path
    }

    /// The projected database for `item`. Occurrences directly under the root
    /// have no context and are left out.
    pub fn conditional_pattern_base(&self, item: usize) -> PatternBase {
        self.node_chain(item)
            .filter_map(|idx| {
                let path = self.prefix_path(idx);
                (!path.is_empty()).then(|| (path, self.nodes[idx].count))
            })
            .collect()
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            let children = &self.nodes[current_index].children;
            match children.len() {
                0 => return true,
                1 => match children.values().next() {
                    Some(&child) => current_index = child,
                    None => return true,
                },
                _ => return false,
            }
        }
    }

    /// `(item, count)` pairs from the root down, following the first child at
    /// each level. Only meaningful when [`has_single_path`](Self::has_single_path) holds.
    pub fn single_path(&self) -> Vec<(usize, usize)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(&child_index) = self.nodes[current_index].children.values().next() {
            let child_node = &self.nodes[child_index];
            if let Some(item) = child_node.item {
                path.push((item, child_node.count));
            }
            current_index = child_index;
        }
        path
    }
}
