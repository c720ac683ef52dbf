use std::cmp::Ordering;

/// Sentence indices ordered by score, highest first.
///
/// The sort is stable, so sentences with equal scores stay in document
/// order: the earlier sentence wins a tie.
pub fn rank(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
    indices
}

/// The `n` best sentence indices, returned in ascending (document) order.
/// Asking for more sentences than exist returns all of them.
pub fn select_top(scores: &[f64], n: usize) -> Vec<usize> {
    let mut selected: Vec<usize> = rank(scores).into_iter().take(n).collect();
    selected.sort_unstable();
    selected
}
