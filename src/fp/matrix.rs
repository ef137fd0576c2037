use ndarray::ArrayView2;

use super::growth::FpGrowth;
use super::patterns::FrequentPatterns;
use crate::config::MiningConfig;
use crate::error::MiningResult;

/// Converts a binary transaction matrix to item-id lists: one row per
/// transaction, one column per item, non-zero meaning present.
pub fn matrix_to_transactions(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    transactions
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}

/// Mines a binary transaction matrix. Itemsets hold column indices.
pub fn fp_growth_matrix(
    transactions: ArrayView2<i32>,
    config: &MiningConfig,
) -> MiningResult<FrequentPatterns<usize>> {
    let num_transactions = transactions.nrows();
    let miner = FpGrowth::from_config(config, num_transactions)?;
    miner.mine_transactions(&matrix_to_transactions(transactions))
}
