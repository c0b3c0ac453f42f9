use rand::Rng;

use crate::error::Result;
use crate::generators::{Generator, generate_maze};
use crate::maze::Grid;

/// Upper bound on candidate builds for any bias.
const MAX_ATTEMPTS: usize = 10;
/// Candidate builds for the smallest nonzero bias.
const BASE_ATTEMPTS: usize = 3;

/// How many candidate mazes to build for a given dead-end bias.
///
/// A zero bias builds exactly one maze; otherwise stronger biases sample more
/// candidates, up to [`MAX_ATTEMPTS`].
pub fn attempt_count(dead_end_bias: f64) -> usize {
    if dead_end_bias == 0.0 {
        return 1;
    }
    let extra = (10.0 * dead_end_bias.abs()).round() as usize;
    MAX_ATTEMPTS.min(BASE_ATTEMPTS + extra)
}

/// Carve one candidate maze into a fresh grid and measure it.
fn build_candidate<R: Rng + ?Sized>(
    width: u8,
    height: u8,
    generator: Generator,
    rng: &mut R,
) -> Result<(Grid, f64)> {
    let mut grid = Grid::new(width, height)?;
    generate_maze(&mut grid, generator, rng);
    let ratio = grid.dead_end_ratio();
    Ok((grid, ratio))
}

/// Build candidate mazes and keep the one whose dead-end ratio best matches the bias:
/// the highest ratio for a positive bias, the lowest for a negative one.
///
/// Each candidate is carved into its own fresh grid. Ties keep the earliest candidate.
/// Returns the chosen grid and its dead-end ratio.
pub fn select_by_dead_end_bias<R: Rng + ?Sized>(
    width: u8,
    height: u8,
    generator: Generator,
    dead_end_bias: f64,
    rng: &mut R,
) -> Result<(Grid, f64)> {
    let attempts = attempt_count(dead_end_bias);
    let mut best = build_candidate(width, height, generator, rng)?;
    tracing::debug!(
        "[bias] Attempt 1/{} with {} has dead-end ratio {:.3}",
        attempts,
        generator.name(),
        best.1
    );

    for attempt in 1..attempts {
        let candidate = build_candidate(width, height, generator, rng)?;
        tracing::debug!(
            "[bias] Attempt {}/{} with {} has dead-end ratio {:.3}",
            attempt + 1,
            attempts,
            generator.name(),
            candidate.1
        );

        let better = if dead_end_bias > 0.0 {
            candidate.1 > best.1
        } else {
            candidate.1 < best.1
        };
        if better {
            best = candidate;
        }
    }

    Ok(best)
}
