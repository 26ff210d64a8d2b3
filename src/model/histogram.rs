use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
    pub density: Vec<f64>,
}

impl Histogram {
    /// Equal-width bins over `[min, max]`. Bins are half-open except the
    /// last one. A constant sample is widened to `[v - 0.5, v + 0.5]`.
    pub fn build(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
        edges[bins] = hi;

        let mut counts = vec![0u64; bins];
        for &v in values {
            counts[bin_index(&edges, lo, width, v)] += 1;
        }

        let n = values.len() as f64;
        let density = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| c as f64 / (n * (edges[i + 1] - edges[i])))
            .collect();

        Some(Self {
            edges,
            counts,
            density,
        })
    }

    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if self.n_bins() > 0 => (hi - lo) / self.n_bins() as f64,
            _ => 0.0,
        }
    }

    pub fn max_density(&self) -> f64 {
        self.density.iter().copied().fold(0.0, f64::max)
    }

    /// Area under the bars; 1.0 for any non-empty input.
    pub fn area(&self) -> f64 {
        self.density
            .iter()
            .enumerate()
            .map(|(i, d)| d * (self.edges[i + 1] - self.edges[i]))
            .sum()
    }
}

/// Bin for `v`, checked against the stored edges so a value equal to an
/// edge always lands in the bin that edge opens.
fn bin_index(edges: &[f64], lo: f64, width: f64, v: f64) -> usize {
    let bins = edges.len() - 1;
    let mut idx = (((v - lo) / width).floor() as isize).clamp(0, bins as isize - 1) as usize;
    if idx > 0 && v < edges[idx] {
        idx -= 1;
    } else if idx + 1 < bins && v >= edges[idx + 1] {
        idx += 1;
    }
    idx
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/histogram.rs"]
mod tests;
