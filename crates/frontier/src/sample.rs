//! Synthetic trade-off clouds (noisy concave frontier + replay tokens).
//!
//! Purpose
//! - Provide small, deterministic point clouds that look like search logs:
//!   cost on x, quality on y, most points a noisy distance below a concave
//!   frontier `y = scale * t^curvature` with `t` the normalized cost.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so fixtures, benches and property tests can name a cloud by its token.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n.max(1),
            PointCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    /// Cost range `[lo, hi]` on x.
    pub x_range: (f64, f64),
    /// Frontier exponent; values in (0, 1) give a concave, saturating frontier.
    pub curvature: f64,
    /// Quality at the most expensive frontier point.
    pub y_scale: f64,
    /// Maximum relative gap below the frontier. Gaps are skewed toward zero.
    pub noise: f64,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(200),
            x_range: (1.0, 10.0),
            curvature: 0.4,
            y_scale: 1.0,
            noise: 0.3,
        }
    }
}

impl CloudCfg {
    /// Frontier quality at cost `x` (no noise).
    pub fn frontier(&self, x: f64) -> f64 {
        let (lo, hi) = self.x_range;
        let span = (hi - lo).max(1e-12);
        let t = ((x - lo) / span).clamp(0.0, 1.0);
        self.y_scale * t.powf(self.curvature.max(1e-6))
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a noisy trade-off cloud. Every point lies on or below `cfg.frontier`.
pub fn draw_tradeoff_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let (lo, hi) = cfg.x_range;
    let noise = cfg.noise.max(0.0);
    (0..n)
        .map(|_| {
            let x = lo + rng.gen::<f64>() * (hi - lo);
            let u: f64 = rng.gen();
            let gap = noise * u * u * cfg.y_scale.abs();
            Point::new(x, cfg.frontier(x) - gap)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = CloudCfg {
            count: PointCount::Uniform { min: 20, max: 40 },
            ..CloudCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_tradeoff_cloud(cfg, tok);
        let b = draw_tradeoff_cloud(cfg, tok);
        assert_eq!(a, b);
        assert!((20..=40).contains(&a.len()));
        let c = draw_tradeoff_cloud(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);
    }

    #[test]
    fn points_stay_under_frontier() {
        let cfg = CloudCfg::default();
        let pts = draw_tradeoff_cloud(cfg, ReplayToken { seed: 1, index: 0 });
        assert_eq!(pts.len(), 200);
        for p in pts {
            assert!(p.objective1 >= 1.0 && p.objective1 <= 10.0);
            assert!(p.objective2 <= cfg.frontier(p.objective1) + 1e-12);
        }
    }
}
