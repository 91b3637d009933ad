//! Reproducible random integer point clouds.
//!
//! Purpose
//! - Stand in for mouse-click input in demos, benches, and tests.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the n-th cloud of a seeded stream can be regenerated on its own.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::geom::Point;

/// Shape of the sampling region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Spread {
    /// Uniform in the inset rectangle.
    #[default]
    Box,
    /// Uniform in the largest disk centred in the inset rectangle.
    Disk,
}

/// Point cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub width: i32,
    pub height: i32,
    /// Inset from every canvas border. Clamped to half the extent.
    pub margin: i32,
    pub spread: Spread,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 16,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            margin: 20,
            spread: Spread::Box,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
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

/// Draw `cfg.count` points (duplicates possible) in screen coordinates.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let (x0, x1) = inset(cfg.width, cfg.margin);
    let (y0, y1) = inset(cfg.height, cfg.margin);
    match cfg.spread {
        Spread::Box => (0..cfg.count)
            .map(|_| Point::new(rng.gen_range(x0..=x1), rng.gen_range(y0..=y1)))
            .collect(),
        Spread::Disk => {
            let center = Vector2::new(
                (f64::from(x0) + f64::from(x1)) * 0.5,
                (f64::from(y0) + f64::from(y1)) * 0.5,
            );
            let radius = f64::from((x1 - x0).min(y1 - y0)) * 0.5;
            (0..cfg.count)
                .map(|_| {
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    let r = radius * rng.gen::<f64>().sqrt();
                    let v = center + Vector2::new(th.cos(), th.sin()) * r;
                    Point::new(
                        (v.x.round() as i32).clamp(x0, x1),
                        (v.y.round() as i32).clamp(y0, y1),
                    )
                })
                .collect()
        }
    }
}

fn inset(extent: i32, margin: i32) -> (i32, i32) {
    let extent = extent.max(0);
    let m = margin.clamp(0, extent / 2);
    (m, extent - m)
}
