use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    /// 1-based position, highest score first.
    pub rank: usize,
    /// Position of the record in the input array.
    pub index: usize,
    pub serial: Option<String>,
    pub score: f64,
}

/// Orders records by score, highest first; equal scores keep input order.
/// Returns at most `top` entries.
pub fn rank_descending(values: &[f64], serials: &[Option<String>], top: usize) -> Vec<RankEntry> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    order
        .into_iter()
        .take(top)
        .enumerate()
        .map(|(pos, index)| RankEntry {
            rank: pos + 1,
            index,
            serial: serials.get(index).cloned().flatten(),
            score: values[index],
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/ranking.rs"]
mod tests;
