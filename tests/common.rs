//! Common test utilities for the geocache test suite.

#![allow(dead_code)]

use geocache::{Board, BoardConfig, Point};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Location used throughout the scenario tests.
pub const SCENARIO_POINT: Point = Point::new(36.9895, -122.0628);

/// Board with the default game parameters (tile 1e-4, radius 8, p = 0.1).
pub fn default_board() -> Board {
    Board::new(BoardConfig::default()).expect("default config is valid")
}

/// Board where every cell in the window holds a cache.
pub fn dense_board(radius: u32) -> Board {
    Board::new(
        BoardConfig::default()
            .with_visibility_radius(radius)
            .with_spawn_probability(1.0),
    )
    .expect("dense config is valid")
}

/// Reproducible points scattered on both sides of the origin.
///
/// # Arguments
///
/// * `seed` - Seed for the point generator
/// * `count` - Number of points to produce
/// * `extent` - Points fall in `[-extent, extent)` on both axes
pub fn sample_points(seed: u64, count: usize, extent: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(-extent..extent),
                rng.random_range(-extent..extent),
            )
        })
        .collect()
}
