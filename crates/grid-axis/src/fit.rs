use serde::{Deserialize, Serialize};

/// Straight line `value = slope * index + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    /// Ordinary least squares through `(xs[i], ys[i])`.
    ///
    /// When `|n·Σx² − (Σx)²| < eps` (a single distinct `x`, or no points) the
    /// fit degenerates to the horizontal line through the mean of `ys`.
    pub fn least_squares(xs: &[f64], ys: &[f64], eps: f64) -> Self {
        let n = xs.len().min(ys.len());
        if n == 0 {
            return Self {
                slope: 0.0,
                intercept: 0.0,
            };
        }

        let (mut sx, mut sy, mut sxy, mut sxx) = (0.0, 0.0, 0.0, 0.0);
        for (&x, &y) in xs.iter().zip(ys) {
            sx += x;
            sy += y;
            sxy += x * y;
            sxx += x * x;
        }
        let nf = n as f64;
        let denom = nf * sxx - sx * sx;
        if denom.abs() < eps {
            return Self {
                slope: 0.0,
                intercept: sy / nf,
            };
        }

        let slope = (nf * sxy - sx * sy) / denom;
        Self {
            slope,
            intercept: (sy - slope * sx) / nf,
        }
    }

    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// A horizontal line carries no spacing information.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.slope == 0.0
    }
}
