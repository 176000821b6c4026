//! Diamond-square fractal terrain.
//!
//! Midpoint displacement on a lattice of seed points spaced `2^n` apart,
//! refined in halving steps: each **diamond** pass sets square centers from
//! their four corners, each **square** pass sets the remaining lattice
//! points from their 2–4 in-bounds orthogonal neighbors, both with a
//! uniform perturbation whose amplitude decays by the smoothness factor per
//! resolution level. The resulting height field is normalized to `[0, 1]`
//! and classified into the nine terrain classes by ascending thresholds.

use gridway_core::{ClassMap, Terrain};
use rand::{Rng, RngExt};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::MapBuilder;

/// Ascending cutoffs for the first eight classes; anything above the last
/// threshold is [`Terrain::Peaks`].
const THRESHOLDS: [(f64, Terrain); 8] = [
    (0.50, Terrain::DeepWater),
    (0.55, Terrain::ShallowWater),
    (0.58, Terrain::Desert),
    (0.62, Terrain::Plains),
    (0.70, Terrain::Grassland),
    (0.80, Terrain::Forest),
    (0.88, Terrain::Hills),
    (0.95, Terrain::Mountains),
];

/// Classify a normalized height in `[0, 1]` into a terrain class.
fn classify(value: f64) -> Terrain {
    for (cutoff, class) in THRESHOLDS {
        if value < cutoff {
            return class;
        }
    }
    Terrain::Peaks
}

/// Fractal terrain generator.
///
/// The detail level `n` sets the lattice spacing `2^n`; the width and
/// height multipliers set how many `2^n`-sized regions the map spans, for
/// output dimensions `wm·2^n + 1` × `hm·2^n + 1`. Higher smoothness damps
/// the perturbation faster, giving gentler terrain.
pub struct DiamondSquareBuilder<R: Rng = ChaCha8Rng> {
    detail: u32,
    width_mult: i32,
    height_mult: i32,
    smoothness: f64,
    rng: R,
}

impl DiamondSquareBuilder<ChaCha8Rng> {
    /// Create a builder at detail level `n` with a deterministic generator
    /// for `seed`. Multipliers default to 4×2 and smoothness to 3.0.
    pub fn new(detail: u32, seed: u64) -> Self {
        Self::with_rng(detail, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DiamondSquareBuilder<R> {
    /// Create a builder drawing from the given generator.
    pub fn with_rng(detail: u32, rng: R) -> Self {
        Self {
            detail,
            width_mult: 4,
            height_mult: 2,
            smoothness: 3.0,
            rng,
        }
    }

    /// Set the region multipliers. Values below 1 are clamped to 1.
    pub fn multipliers(mut self, width_mult: i32, height_mult: i32) -> Self {
        self.width_mult = width_mult.max(1);
        self.height_mult = height_mult.max(1);
        self
    }

    /// Set the smoothness factor. Must be positive; higher is smoother.
    pub fn smoothness(mut self, smoothness: f64) -> Self {
        debug_assert!(smoothness > 0.0);
        self.smoothness = smoothness;
        self
    }

    /// Output dimensions: `(wm·2^n + 1, hm·2^n + 1)`.
    pub fn dimensions(&self) -> (i32, i32) {
        let power = 1i32 << self.detail;
        (self.width_mult * power + 1, self.height_mult * power + 1)
    }

    fn displace(&mut self, amplitude: f64) -> f64 {
        self.rng.random_range(-amplitude..amplitude)
    }
}

impl<R: Rng> MapBuilder for DiamondSquareBuilder<R> {
    fn build(&mut self) -> ClassMap {
        let power = 1i32 << self.detail;
        let (width, height) = self.dimensions();
        let w = width as usize;
        let mut field = vec![0.0f64; w * height as usize];

        let mut step = power / 2;
        let mut h = 1.0f64;

        // Seed every lattice point at the coarsest spacing.
        let spacing = power.max(1);
        let mut x = 0;
        while x < width {
            let mut y = 0;
            while y < height {
                field[y as usize * w + x as usize] = self.rng.random_range(0.0..2.0 * h);
                y += spacing;
            }
            x += spacing;
        }

        while step > 0 {
            // Diamond step: centers of squares from their four corners.
            let mut x = step;
            while x < width {
                let mut y = step;
                while y < height {
                    let sum = field[(y - step) as usize * w + (x - step) as usize]
                        + field[(y - step) as usize * w + (x + step) as usize]
                        + field[(y + step) as usize * w + (x - step) as usize]
                        + field[(y + step) as usize * w + (x + step) as usize];
                    field[y as usize * w + x as usize] = sum / 4.0 + self.displace(h);
                    y += 2 * step;
                }
                x += 2 * step;
            }

            // Square step: remaining lattice points from their in-bounds
            // orthogonal neighbors (2 at an edge, 4 interior).
            let mut x = 0;
            while x < width {
                let mut y = step * (1 - (x / step) % 2);
                while y < height {
                    let mut sum = 0.0;
                    let mut count = 0;
                    if x - step >= 0 {
                        sum += field[y as usize * w + (x - step) as usize];
                        count += 1;
                    }
                    if x + step < width {
                        sum += field[y as usize * w + (x + step) as usize];
                        count += 1;
                    }
                    if y - step >= 0 {
                        sum += field[(y - step) as usize * w + x as usize];
                        count += 1;
                    }
                    if y + step < height {
                        sum += field[(y + step) as usize * w + x as usize];
                        count += 1;
                    }
                    field[y as usize * w + x as usize] = if count > 0 {
                        sum / f64::from(count) + self.displace(h)
                    } else {
                        0.0
                    };
                    y += 2 * step;
                }
                x += step;
            }

            h /= self.smoothness;
            step /= 2;
        }

        // Normalize to [0, 1] by the global extrema, then classify.
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &field {
            min = min.min(v);
            max = max.max(v);
        }
        let span = max - min;

        let mut map = ClassMap::new(width, height);
        for p in map.bounds().iter() {
            let v = field[p.y as usize * w + p.x as usize];
            // A flat field normalizes to 0 rather than dividing by zero.
            let norm = if span > 0.0 { (v - min) / span } else { 0.0 };
            map.set(p, classify(norm));
        }

        log::info!(
            "diamond-square map generated: {}x{} (detail {}, smoothness {})",
            width,
            height,
            self.detail,
            self.smoothness,
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridway_core::Point;

    #[test]
    fn dimension_law() {
        for (n, wm, hm) in [(3u32, 4, 2), (5, 4, 2), (2, 1, 1), (4, 3, 5)] {
            let mut builder = DiamondSquareBuilder::new(n, 11).multipliers(wm, hm);
            let power = 1i32 << n;
            assert_eq!(builder.dimensions(), (wm * power + 1, hm * power + 1));
            let map = builder.build();
            assert_eq!(map.width(), wm * power + 1);
            assert_eq!(map.height(), hm * power + 1);
        }
    }

    #[test]
    fn classification_is_total_and_monotonic() {
        assert_eq!(classify(0.0), Terrain::DeepWater);
        assert_eq!(classify(0.49), Terrain::DeepWater);
        assert_eq!(classify(0.50), Terrain::ShallowWater);
        assert_eq!(classify(0.56), Terrain::Desert);
        assert_eq!(classify(0.60), Terrain::Plains);
        assert_eq!(classify(0.65), Terrain::Grassland);
        assert_eq!(classify(0.75), Terrain::Forest);
        assert_eq!(classify(0.85), Terrain::Hills);
        assert_eq!(classify(0.90), Terrain::Mountains);
        assert_eq!(classify(0.95), Terrain::Peaks);
        assert_eq!(classify(1.0), Terrain::Peaks);

        // Classes never regress as the height rises.
        let mut prev = 0u8;
        let mut v = 0.0;
        while v <= 1.0 {
            let code = classify(v).code();
            assert!(code >= prev);
            prev = code;
            v += 0.01;
        }
    }

    #[test]
    fn every_cell_gets_one_of_nine_classes() {
        let map = DiamondSquareBuilder::new(4, 3).build();
        for (_, t) in map.iter() {
            assert!(t.code() <= 8);
            assert_eq!(t.walkable(), (2..=5).contains(&t.code()));
        }
    }

    #[test]
    fn same_seed_reproduces_the_map() {
        let a = DiamondSquareBuilder::new(4, 99).build();
        let b = DiamondSquareBuilder::new(4, 99).build();
        assert_eq!(a, b);
        let c = DiamondSquareBuilder::new(4, 100).build();
        assert_ne!(a, c);
    }

    #[test]
    fn detail_zero_is_a_degenerate_map() {
        // 2^0 = 1: every cell is its own seed point, no refinement passes.
        let map = DiamondSquareBuilder::new(0, 1).multipliers(8, 8).build();
        assert_eq!(map.width(), 9);
        assert_eq!(map.height(), 9);
        assert!(map.at(Point::new(8, 8)).is_some());
    }

    #[test]
    fn smoothness_controls_roughness() {
        // A very smooth map should have fewer class transitions between
        // horizontal neighbors than a rough one.
        let transitions = |map: &ClassMap| {
            let mut n = 0;
            for (p, t) in map.iter() {
                if let Some(right) = map.at(Point::new(p.x + 1, p.y)) {
                    if right != t {
                        n += 1;
                    }
                }
            }
            n
        };
        let smooth = DiamondSquareBuilder::new(4, 7).smoothness(8.0).build();
        let rough = DiamondSquareBuilder::new(4, 7).smoothness(1.1).build();
        assert!(transitions(&smooth) < transitions(&rough));
    }
}
