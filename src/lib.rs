//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are compressed into a frequency-ordered prefix tree in two
//! scans, then mined recursively through conditional pattern bases and
//! conditional trees. No candidate itemsets are generated.
//!
//! ```
//! use baskets::{mine_frequent_itemsets, MinSupport, MiningConfig};
//!
//! let orders = vec![
//!     vec!["bread", "milk"],
//!     vec!["bread", "butter", "milk"],
//!     vec!["bread", "butter"],
//! ];
//! let config = MiningConfig::new(MinSupport::Count(2));
//! let patterns = mine_frequent_itemsets(&orders, &config).unwrap();
//!
//! assert_eq!(patterns.support(&["milk", "bread"]), Some(2));
//! ```

use std::hash::Hash;

pub mod apriori;
pub mod config;
pub mod error;
pub mod fp;

pub use config::{MinSupport, MiningConfig, MiningStrategy};
pub use error::{MiningError, MiningResult};
pub use fp::{FpGrowth, FrequentPatterns, ItemCatalog, Itemset};

/// Mines every itemset of `transactions` that meets `config.min_support`.
///
/// Items may be any ordered, hashable type. Duplicates within a transaction
/// count once.
pub fn mine_frequent_itemsets<T, Tx>(
    transactions: &[Tx],
    config: &MiningConfig,
) -> MiningResult<FrequentPatterns<T>>
where
    T: Ord + Hash + Clone,
    Tx: AsRef<[T]>,
{
    let miner = FpGrowth::from_config(config, transactions.len())?;
    let catalog = ItemCatalog::from_transactions(transactions);
    let encoded = catalog.encode(transactions);

    let patterns = miner.mine_transactions(&encoded)?;
    Ok(catalog.decode(patterns))
}
