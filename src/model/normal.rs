use std::f64::consts::PI;

use serde::Serialize;

use crate::model::stats::Descriptive;

pub const CURVE_SIGMA_SPAN: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalFit {
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl NormalFit {
    pub fn from_stats(stats: &Descriptive) -> Self {
        Self {
            mean: stats.mean,
            std_dev: stats.std_dev,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.std_dev.is_finite() && self.std_dev > 0.0)
    }

    pub fn pdf(&self, x: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let z = (x - self.mean) / self.std_dev;
        (-0.5 * z * z).exp() / (self.std_dev * (2.0 * PI).sqrt())
    }

    pub fn peak(&self) -> f64 {
        self.pdf(self.mean)
    }

    /// Samples the density over `mean ± 3σ`, endpoints included.
    pub fn curve(&self, points: usize) -> Vec<CurvePoint> {
        if self.is_degenerate() || points == 0 {
            return Vec::new();
        }
        let lo = self.mean - CURVE_SIGMA_SPAN * self.std_dev;
        let hi = self.mean + CURVE_SIGMA_SPAN * self.std_dev;
        linspace(lo, hi, points)
            .into_iter()
            .map(|x| CurvePoint { x, y: self.pdf(x) })
            .collect()
    }
}

pub fn linspace(lo: f64, hi: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (points - 1) as f64;
            let mut out: Vec<f64> = (0..points).map(|i| lo + step * i as f64).collect();
            out[points - 1] = hi;
            out
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/normal.rs"]
mod tests;
