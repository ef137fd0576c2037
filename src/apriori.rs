//! Level-wise Apriori miner.
//!
//! Slower than FP-Growth, since it generates and counts candidates explicitly,
//! but simple enough to serve as a cross-check for it.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::debug;

use crate::error::{MiningError, MiningResult};
use crate::fp::{FrequentPatterns, Itemset};

/// Mines every itemset occurring in at least `min_count` transactions.
pub fn apriori<T, Tx>(transactions: &[Tx], min_count: usize) -> MiningResult<FrequentPatterns<T>>
where
    T: Ord + Hash + Clone,
    Tx: AsRef<[T]>,
{
    if min_count == 0 {
        return Err(MiningError::ZeroMinSupport);
    }

    let transactions: Vec<Itemset<T>> = transactions
        .iter()
        .map(|tx| Itemset::new(tx.as_ref().iter().cloned()))
        .collect();

    let mut result = FrequentPatterns::new();
    let mut candidates: Vec<Itemset<T>> = {
        let items: HashSet<&T> = transactions.iter().flat_map(Itemset::iter).collect();
        items.into_iter().map(|item| Itemset::new([item.clone()])).collect()
    };

    let mut k = 1;
    while !candidates.is_empty() {
        let frequent = count_frequent(&candidates, &transactions, min_count);
        debug!(k, candidates = candidates.len(), frequent = frequent.len(), "apriori level");

        let mut level: Vec<Itemset<T>> = frequent.iter().map(|(itemset, _)| itemset.clone()).collect();
        level.sort_unstable();
        for (itemset, support) in frequent {
            result.insert(itemset, support);
        }

        candidates = next_candidates(&level);
        k += 1;
    }

    Ok(result)
}

fn count_frequent<T: Ord + Clone>(
    candidates: &[Itemset<T>],
    transactions: &[Itemset<T>],
    min_count: usize,
) -> Vec<(Itemset<T>, usize)> {
    candidates
        .iter()
        .filter_map(|candidate| {
            let support = transactions
                .iter()
                .filter(|tx| candidate.is_subset_of(tx))
                .count();
            (support >= min_count).then(|| (candidate.clone(), support))
        })
        .collect()
}

/// Joins sorted `k`-itemsets sharing their first `k - 1` items, then drops any
/// candidate with an infrequent `k`-subset.
fn next_candidates<T: Ord + Hash + Clone>(level: &[Itemset<T>]) -> Vec<Itemset<T>> {
    let known: HashSet<&Itemset<T>> = level.iter().collect();
    let mut candidates = Vec::new();

    for (i, a) in level.iter().enumerate() {
        let a = a.as_slice();
        for b in &level[i + 1..] {
            let b = b.as_slice();
            let k = a.len();
            if a[..k - 1] != b[..k - 1] {
                break;
            }

            let candidate = Itemset::new(a.iter().chain(&b[k - 1..]).cloned());
            let all_subsets_frequent = (0..candidate.len()).all(|skip| {
                let subset: Itemset<T> = candidate
                    .iter()
                    .enumerate()
                    .filter(|&(idx, _)| idx != skip)
                    .map(|(_, item)| item.clone())
                    .collect();
                known.contains(&subset)
            });
            if all_subsets_frequent {
                candidates.push(candidate);
            }
        }
    }

    candidates
}
