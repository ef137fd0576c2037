//! Error types for mining runs.

/// Errors raised while configuring or running a mining pass.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    /// A support count of zero matches every itemset, including the empty one.
    #[error("minimum support count must be positive")]
    ZeroMinSupport,

    #[error("minimum support fraction must lie in (0, 1], got {0}")]
    InvalidSupportFraction(f64),

    /// The cancellation flag was raised while mining.
    #[error("mining cancelled")]
    Cancelled,

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type MiningResult<T> = Result<T, MiningError>;
