//! Random simple polygons (star-shaped, radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   jitter (keeps the angles strictly increasing) and radial jitter.
//! - Connecting the points in angle order gives a polygon that is star-shaped
//!   around the origin, hence simple. Large radial jitter produces plenty of
//!   split and merge vertices.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::{Point, Polygon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    /// Clamped to [0, 0.95] so every radius stays positive.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(16),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.6,
            base_radius: 1.0,
            random_phase: true,
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
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
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

/// Vertices of a random star-shaped polygon, counterclockwise.
pub fn draw_star_points(cfg: StarCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            Point::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Draw a random simple polygon. `None` only if validation rejects the sample.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Option<Polygon> {
    Polygon::new(draw_star_points(cfg, tok)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_token_is_deterministic() {
        let cfg = StarCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(draw_star_points(cfg, tok), draw_star_points(cfg, tok));
        let other = ReplayToken { seed: 7, index: 4 };
        assert_ne!(draw_star_points(cfg, tok), draw_star_points(cfg, other));
    }

    #[test]
    fn uniform_count_respects_bounds() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 9 },
            ..StarCfg::default()
        };
        for index in 0..20 {
            let pts = draw_star_points(cfg, ReplayToken { seed: 1, index });
            assert!((5..=9).contains(&pts.len()));
        }
    }

    #[test]
    fn samples_are_counterclockwise_polygons() {
        let cfg = StarCfg::default();
        let poly = draw_star_polygon(cfg, ReplayToken { seed: 11, index: 0 }).unwrap();
        assert!(!poly.was_reversed());
        assert!(poly.area() > 0.0);
    }
}
