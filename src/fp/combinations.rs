use super::patterns::{FrequentPatterns, Itemset};

/// Single-path shortcut: records `alpha ∪ S` for every non-empty subset `S` of
/// the chain whose support reaches `min_count`.
///
/// `path` runs root to leaf, so counts never increase along it and a subset's
/// support is the count of its deepest node.
pub fn generate_path_patterns(
    path: &[(usize, usize)],
    alpha: &[usize],
    min_count: usize,
    result: &mut FrequentPatterns<usize>,
) {
    let frequent = path.iter().take_while(|&&(_, count)| count >= min_count).count();
    let path = &path[..frequent];

    for k in 1..=path.len() {
        generate_combinations_from_path(path, k, alpha, min_count, result);
    }
}

/// Records every `k`-subset of `path` (prefixed by `alpha`) that reaches `min_count`.
pub fn generate_combinations_from_path(
    path: &[(usize, usize)],
    k: usize,
    alpha: &[usize],
    min_count: usize,
    result: &mut FrequentPatterns<usize>,
) {
    if k == 0 || k > path.len() {
        return;
    }

    let indices: Vec<usize> = (0..path.len()).collect();
    let mut callback = |combination: &[usize]| {
        let support = combination
            .iter()
            .map(|&idx| path[idx].1)
            .min()
            .unwrap_or(0);
        if support < min_count {
            return;
        }
        let pattern = alpha
            .iter()
            .copied()
            .chain(combination.iter().map(|&idx| path[idx].0));
        result.insert(Itemset::new(pattern), support);
    };
    generate_combinations_recursive(&indices, k, 0, &mut Vec::with_capacity(k), &mut callback);
}

pub fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Not enough items left to fill the combination.
    if items.len() - start < k - current.len() {
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
