//! Mining configuration.

use serde::{Deserialize, Serialize};

use crate::error::{MiningError, MiningResult};

/// Minimum support threshold, either absolute or relative to the input size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinSupport {
    /// Number of transactions an itemset must occur in.
    Count(usize),
    /// Fraction of all transactions, in (0, 1].
    Fraction(f64),
}

impl MinSupport {
    /// Resolves the threshold to an absolute count for `num_transactions`.
    ///
    /// A fraction resolves to the smallest count `c` with `c / n >= fraction`,
    /// so `0.6` of 5 transactions requires 3 and `0.55` of 100 requires 55.
    /// The result is never below 1, even for an empty input.
    pub fn resolve(&self, num_transactions: usize) -> MiningResult<usize> {
        match *self {
            MinSupport::Count(0) => Err(MiningError::ZeroMinSupport),
            MinSupport::Count(count) => Ok(count),
            MinSupport::Fraction(fraction) => {
                if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
                    return Err(MiningError::InvalidSupportFraction(fraction));
                }
                if num_transactions == 0 {
                    return Ok(1);
                }
                let n = num_transactions as f64;
                // The product can land just past an integer; settle on the exact ratio.
                let mut count = (fraction * n).ceil() as usize;
                while count > 1 && (count - 1) as f64 / n >= fraction {
                    count -= 1;
                }
                while (count as f64) / n < fraction {
                    count += 1;
                }
                Ok(count.max(1))
            }
        }
    }
}

impl Default for MinSupport {
    fn default() -> Self {
        MinSupport::Fraction(0.01)
    }
}

/// How the recursion over conditional trees is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MiningStrategy {
    /// Plain recursion on the calling thread.
    #[default]
    Sequential,
    /// Sibling conditional trees are mined on the rayon pool.
    Parallel,
    /// Explicit work-list; call-stack depth stays constant.
    WorkList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    pub strategy: MiningStrategy,
    /// Enumerate subsets directly when a tree degenerates to one chain.
    pub single_path_shortcut: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::default(),
            strategy: MiningStrategy::default(),
            single_path_shortcut: true,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: MiningStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_single_path_shortcut(mut self, enabled: bool) -> Self {
        self.single_path_shortcut = enabled;
        self
    }

    /// Parses a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> MiningResult<Self> {
        let config: MiningConfig = toml::from_str(source)?;
        config.min_support.resolve(1)?;
        Ok(config)
    }
}
