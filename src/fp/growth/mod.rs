pub mod builder;
pub mod counts;
pub mod mining;
pub mod order;
pub mod tree;

pub use builder::{build_conditional_fp_tree, build_fp_tree, BuiltTree};
pub use counts::{count_items, count_weighted, ItemCounts};
pub use mining::{fp_growth_algorithm, mine, FpGrowth};
pub use order::FrequencyOrder;
pub use tree::{FPNode, FPTree, HeaderEntry, PatternBase};
