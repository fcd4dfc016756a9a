//! Random weakly monotone curves (seeded steps + replay tokens).
//!
//! Purpose
//! - Deterministic, parameterizable curve generator for benches, tests and the
//!   CLI `sample` command.
//!
//! Model
//! - Walk X forward by a random non-negative step per point and draw Y uniformly.
//! - With probability `repeat_prob` a point repeats its predecessor exactly; with
//!   probability `vertical_prob` X does not advance (vertical step).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::monotone::{is_monotone, Monotone};
use super::types::{Natural, Xy};

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CurveCfg {
    pub point_count: PointCount,
    /// X of the first point.
    pub start_x: f64,
    /// Range of the X advance between consecutive points. Negative bounds are clamped to 0.
    pub x_step: (f64, f64),
    pub y_range: (f64, f64),
    pub repeat_prob: f64,
    pub vertical_prob: f64,
}
impl Default for CurveCfg {
    fn default() -> Self {
        Self {
            point_count: PointCount::Fixed(16),
            start_x: 0.0,
            x_step: (0.5, 2.0),
            y_range: (0.0, 100.0),
            repeat_prob: 0.0,
            vertical_prob: 0.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    /// Expand the token into a full 256-bit `StdRng` seed from a SplitMix64 stream
    /// started at `seed` and offset by `index`.
    fn to_std_rng(self) -> StdRng {
        let mut state = self.seed;
        state = splitmix64(&mut state) ^ self.index;
        let mut key = [0u8; 32];
        for chunk in key.chunks_exact_mut(8) {
            chunk.copy_from_slice(&splitmix64(&mut state).to_le_bytes());
        }
        StdRng::from_seed(key)
    }
}

/// One step of SplitMix64 (Steele, Lea & Flood 2014), with the constants of
/// Vigna's reference `splitmix64.c`.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

#[inline]
fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Draw a random weakly monotone curve.
pub fn draw_curve(cfg: CurveCfg, tok: ReplayToken) -> Monotone<Xy> {
    let mut rng = tok.to_std_rng();
    let n = cfg.point_count.sample(&mut rng);
    let (step_lo, step_hi) = ordered((cfg.x_step.0.max(0.0), cfg.x_step.1.max(0.0)));
    let (y_lo, y_hi) = ordered(cfg.y_range);

    let mut pts: Vec<Xy> = Vec::with_capacity(n);
    let mut x = cfg.start_x;
    for _ in 0..n {
        if let Some(&last) = pts.last() {
            if rng.gen::<f64>() < cfg.repeat_prob {
                pts.push(last);
                continue;
            }
            if rng.gen::<f64>() >= cfg.vertical_prob {
                x += rng.gen_range(step_lo..=step_hi);
            }
        }
        pts.push(Xy::new(x, rng.gen_range(y_lo..=y_hi)));
    }
    debug_assert!(is_monotone(&pts, &Natural));
    Monotone(pts)
}
