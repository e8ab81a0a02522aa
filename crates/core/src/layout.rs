//! Seeded shape layout for the empire map.

use serde::Serialize;

use crate::ladder::MAX_TILES;
use crate::rng::{Lcg, MapRng};

pub const MIN_DENSITY: f64 = 0.2;
pub const MAX_DENSITY: f64 = 1.0;

/// One decorative circle, in map units (`0..100` on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shape {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub opacity: f64,
}

/// `clamp(tiles / 36, 0.2, 1.0)`.
pub fn density_for_tiles(tiles: u32) -> f64 {
    (tiles as f64 / MAX_TILES as f64).clamp(MIN_DENSITY, MAX_DENSITY)
}

/// `floor(14 + 18 * density)`.
pub fn shape_count(density: f64) -> usize {
    (14.0 + 18.0 * density).floor() as usize
}

/// Shapes for `seed` at `density`. Each shape consumes four draws, in the
/// order x, y, radius, opacity.
pub fn generate(seed: u32, density: f64) -> Vec<Shape> {
    generate_with(&mut Lcg::new(seed), density)
}

pub fn generate_with<R: MapRng>(rng: &mut R, density: f64) -> Vec<Shape> {
    (0..shape_count(density))
        .map(|_| {
            let x = rng.next_f64() * 100.0;
            let y = rng.next_f64() * 100.0;
            let r = 2.0 + rng.next_f64() * (6.0 + 10.0 * density);
            let opacity = 0.35 + rng.next_f64() * 0.55;
            Shape { x, y, r, opacity }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_clamps() {
        assert_eq!(density_for_tiles(4), 0.2);
        assert_eq!(density_for_tiles(6), 0.2);
        assert_eq!(density_for_tiles(9), 0.25);
        assert_eq!(density_for_tiles(36), 1.0);
        assert_eq!(density_for_tiles(100), 1.0);
        assert_eq!(density_for_tiles(0), 0.2);
    }

    #[test]
    fn test_shape_count_per_estate() {
        let counts: Vec<usize> = [4, 6, 9, 14, 20, 28, 36]
            .iter()
            .map(|t| shape_count(density_for_tiles(*t)))
            .collect();
        assert_eq!(counts, vec![17, 17, 18, 21, 24, 28, 32]);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = generate(4_242_424, 0.55);
        let b = generate(4_242_424, 0.55);
        assert_eq!(a, b);
        assert_ne!(a, generate(4_242_425, 0.55));
    }

    #[test]
    fn test_first_shape_for_seed_zero() {
        let shapes = generate(0, 0.2);
        assert_eq!(shapes.len(), 17);
        let s = shapes[0];
        assert_eq!(s.x, 1_013_904_223.0 / 4_294_967_296.0 * 100.0);
        assert_eq!(format!("{:.2}", s.x), "23.61");
        assert_eq!(format!("{:.2}", s.y), "27.86");
        assert_eq!(format!("{:.2}", s.r), "8.56");
        assert_eq!(format!("{:.2}", s.opacity), "0.72");
    }

    #[test]
    fn test_shapes_within_bounds() {
        for density in [0.2, 0.5, 1.0] {
            for s in generate(987_654, density) {
                assert!((0.0..100.0).contains(&s.x));
                assert!((0.0..100.0).contains(&s.y));
                assert!(s.r >= 2.0 && s.r < 2.0 + 6.0 + 10.0 * density);
                assert!(s.opacity >= 0.35 && s.opacity <= 0.9);
            }
        }
    }

    #[test]
    fn test_generate_with_consumes_four_draws_per_shape() {
        let mut rng = Lcg::new(99);
        let shapes = generate_with(&mut rng, 0.2);
        let mut replay = Lcg::new(99);
        for _ in 0..shapes.len() * 4 {
            replay.next_u32();
        }
        assert_eq!(rng, replay);
    }
}
