pub mod catalog;
pub mod combinations;
pub mod growth;
pub mod matrix;
pub mod patterns;
pub mod storage;

pub use catalog::ItemCatalog;
pub use growth::{
    build_conditional_fp_tree, build_fp_tree, count_items, count_weighted, fp_growth_algorithm, mine,
    BuiltTree, FPNode, FPTree, FpGrowth, FrequencyOrder, ItemCounts, PatternBase,
};
pub use matrix::{fp_growth_matrix, matrix_to_transactions};
pub use patterns::{FrequentPatterns, Itemset};
pub use storage::{FrequentLevel, ItemsetStorage};

#[cfg(test)]
mod tests;
