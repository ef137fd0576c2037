use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, trace};

use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::tree::{FPTree, PatternBase};
use crate::config::{MiningConfig, MiningStrategy};
use crate::error::{MiningError, MiningResult};
use crate::fp::combinations::generate_path_patterns;
use crate::fp::patterns::{FrequentPatterns, Itemset};

/// Mines every itemset of `transactions` occurring at least `min_count` times.
pub fn fp_growth_algorithm(
    transactions: &[Vec<usize>],
    min_count: usize,
) -> MiningResult<FrequentPatterns<usize>> {
    FpGrowth::new(min_count)?.mine_transactions(transactions)
}

/// Mines `tree` sequentially, extending every pattern found with `prefix`.
///
/// `min_count` must be positive.
pub fn mine(tree: &FPTree, min_count: usize, prefix: &[usize]) -> FrequentPatterns<usize> {
    debug_assert!(min_count > 0, "minimum support count must be positive");
    let miner = FpGrowth {
        min_count,
        strategy: MiningStrategy::Sequential,
        single_path_shortcut: true,
        cancel: None,
    };
    miner.mine_recursive(tree, prefix).unwrap_or_default()
}

/// FP-Growth miner over id-encoded transactions.
#[derive(Debug, Clone)]
pub struct FpGrowth {
    min_count: usize,
    strategy: MiningStrategy,
    single_path_shortcut: bool,
    cancel: Option<Arc<AtomicBool>>,
}

impl FpGrowth {
    pub fn new(min_count: usize) -> MiningResult<Self> {
        if min_count == 0 {
            return Err(MiningError::ZeroMinSupport);
        }
        Ok(Self {
            min_count,
            strategy: MiningStrategy::default(),
            single_path_shortcut: true,
            cancel: None,
        })
    }

    /// Resolves `config` against an input of `num_transactions`.
    pub fn from_config(config: &MiningConfig, num_transactions: usize) -> MiningResult<Self> {
        Ok(Self::new(config.min_support.resolve(num_transactions)?)?
            .with_strategy(config.strategy)
            .with_single_path_shortcut(config.single_path_shortcut))
    }

    pub fn with_strategy(mut self, strategy: MiningStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_single_path_shortcut(mut self, enabled: bool) -> Self {
        self.single_path_shortcut = enabled;
        self
    }

    /// Aborts the run with [`MiningError::Cancelled`] once `flag` is set.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn strategy(&self) -> MiningStrategy {
        self.strategy
    }

    pub fn mine_transactions(&self, transactions: &[Vec<usize>]) -> MiningResult<FrequentPatterns<usize>> {
        let built = build_fp_tree(transactions, self.min_count);
        self.mine_tree(&built.tree, &[])
    }

    pub fn mine_tree(&self, tree: &FPTree, prefix: &[usize]) -> MiningResult<FrequentPatterns<usize>> {
        let patterns = match self.strategy {
            MiningStrategy::Sequential => self.mine_recursive(tree, prefix)?,
            MiningStrategy::Parallel => self.mine_parallel(tree, prefix)?,
            MiningStrategy::WorkList => self.mine_work_list(tree, prefix)?,
        };

        info!(
            patterns = patterns.len(),
            min_count = self.min_count,
            strategy = ?self.strategy,
            "mining complete"
        );
        Ok(patterns)
    }

    fn check_cancelled(&self) -> MiningResult<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(MiningError::Cancelled),
            _ => Ok(()),
        }
    }

    fn single_path_patterns(&self, tree: &FPTree, prefix: &[usize]) -> Option<FrequentPatterns<usize>> {
        if !self.single_path_shortcut || !tree.has_single_path() {
            return None;
        }
        let mut patterns = FrequentPatterns::new();
        generate_path_patterns(&tree.single_path(), prefix, self.min_count, &mut patterns);
        Some(patterns)
    }

    /// Locally frequent items of `tree`, least frequent first.
    fn frequent_items(&self, tree: &FPTree) -> Vec<(usize, usize)> {
        tree.items_by_support()
            .into_iter()
            .filter(|&(_, support)| support >= self.min_count)
            .collect()
    }

    /// Records `prefix ∪ {item}` and returns the extended prefix together
    /// with the item's conditional pattern base.
    fn grow(
        &self,
        tree: &FPTree,
        prefix: &[usize],
        item: usize,
        support: usize,
        result: &mut FrequentPatterns<usize>,
    ) -> (Vec<usize>, PatternBase) {
        let mut new_pattern = prefix.to_vec();
        new_pattern.push(item);
        result.insert(Itemset::new(new_pattern.iter().copied()), support);

        let prefix_paths = tree.conditional_pattern_base(item);
        (new_pattern, prefix_paths)
    }

    /// `None` when no item of `prefix_paths` is still frequent.
    fn conditional_tree(&self, pattern: &[usize], prefix_paths: &PatternBase) -> Option<FPTree> {
        let conditional_tree = build_conditional_fp_tree(prefix_paths, self.min_count)?;
        trace!(
            depth = pattern.len(),
            nodes = conditional_tree.len(),
            "conditional FP-tree"
        );
        Some(conditional_tree)
    }

    fn mine_recursive(&self, tree: &FPTree, prefix: &[usize]) -> MiningResult<FrequentPatterns<usize>> {
        self.check_cancelled()?;
        if let Some(patterns) = self.single_path_patterns(tree, prefix) {
            return Ok(patterns);
        }

        let mut result = FrequentPatterns::new();
        for (item, support) in self.frequent_items(tree) {
            let (new_pattern, prefix_paths) = self.grow(tree, prefix, item, support, &mut result);
            if let Some(conditional_tree) = self.conditional_tree(&new_pattern, &prefix_paths) {
                result.merge(self.mine_recursive(&conditional_tree, &new_pattern)?);
            }
        }
        Ok(result)
    }

    fn mine_parallel(&self, tree: &FPTree, prefix: &[usize]) -> MiningResult<FrequentPatterns<usize>> {
        self.check_cancelled()?;
        if let Some(patterns) = self.single_path_patterns(tree, prefix) {
            return Ok(patterns);
        }

        // Each branch returns its own map; merging happens here, after the join.
        let parallel_results: Vec<FrequentPatterns<usize>> = self
            .frequent_items(tree)
            .par_iter()
            .map(|&(item, support)| -> MiningResult<FrequentPatterns<usize>> {
                let mut item_result = FrequentPatterns::new();
                let (new_pattern, prefix_paths) = self.grow(tree, prefix, item, support, &mut item_result);
                if let Some(conditional_tree) = self.conditional_tree(&new_pattern, &prefix_paths) {
                    item_result.merge(self.mine_parallel(&conditional_tree, &new_pattern)?);
                }
                Ok(item_result)
            })
            .collect::<MiningResult<_>>()?;

        let mut result = FrequentPatterns::new();
        for item_result in parallel_results {
            result.merge(item_result);
        }
        Ok(result)
    }

    fn mine_work_list(&self, tree: &FPTree, prefix: &[usize]) -> MiningResult<FrequentPatterns<usize>> {
        let mut result = FrequentPatterns::new();
        let mut pending = Vec::new();

        // Pending entries hold pattern bases; each conditional tree is built
        // only when popped and dropped once expanded.
        self.expand(tree, prefix, &mut result, &mut pending)?;
        while let Some((prefix, prefix_paths)) = pending.pop() {
            if let Some(conditional_tree) = self.conditional_tree(&prefix, &prefix_paths) {
                self.expand(&conditional_tree, &prefix, &mut result, &mut pending)?;
            }
        }
        Ok(result)
    }

    fn expand(
        &self,
        tree: &FPTree,
        prefix: &[usize],
        result: &mut FrequentPatterns<usize>,
        pending: &mut Vec<(Vec<usize>, PatternBase)>,
    ) -> MiningResult<()> {
        self.check_cancelled()?;
        if let Some(patterns) = self.single_path_patterns(tree, prefix) {
            result.merge(patterns);
            return Ok(());
        }

        for (item, support) in self.frequent_items(tree) {
            let (new_pattern, prefix_paths) = self.grow(tree, prefix, item, support, result);
            if !prefix_paths.is_empty() {
                pending.push((new_pattern, prefix_paths));
            }
        }
        Ok(())
    }
}
