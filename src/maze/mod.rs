pub mod cell;
mod grid;

use rand::Rng;

pub use cell::{Cell, Direction};
pub use grid::Grid;

use crate::error::Result;
use crate::generators::{Generator, get_rng};
use crate::solvers::compute_shortest_path;
use crate::tuning::{braid, select_by_dead_end_bias};

/// Parameters for building a [`Maze`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeConfig {
    /// Number of columns, at least 2. Coordinates are `u8`, so at most 255.
    pub width: u8,
    /// Number of rows, at least 2. Coordinates are `u8`, so at most 255.
    pub height: u8,
    /// Spanning-tree algorithm used to carve each candidate.
    pub generator: Generator,
    /// Probability in `[0, 1]` that a dead end gets an extra opening.
    pub braid_factor: f64,
    /// Preference in `[-1, 1]` for more (positive) or fewer (negative) dead ends.
    pub dead_end_bias: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        crate::game::Difficulty::default().config(Generator::default())
    }
}

/// Clamp into `[min, max]`, mapping NaN to zero.
fn sanitize(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}

/// A fully built rectangular maze.
///
/// The maze is carved once at construction (generator, bias selection, braiding)
/// and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    generator: Generator,
    braid_factor: f64,
    dead_end_bias: f64,
    dead_end_ratio: f64,
}

impl Maze {
    /// Builds a maze from `config`, seeding the random source with `seed`
    /// or from the operating system when `seed` is `None`.
    ///
    /// Fails with [`crate::MazeError::InvalidDimension`] if either dimension is below 2.
    pub fn new(config: MazeConfig, seed: Option<u64>) -> Result<Self> {
        let mut rng = get_rng(seed);
        Maze::with_rng(config, &mut rng)
    }

    /// Builds a maze from `config`, drawing every random choice from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(config: MazeConfig, rng: &mut R) -> Result<Self> {
        let braid_factor = sanitize(config.braid_factor, 0.0, 1.0);
        let dead_end_bias = sanitize(config.dead_end_bias, -1.0, 1.0);

        let (mut grid, mut dead_end_ratio) = select_by_dead_end_bias(
            config.width,
            config.height,
            config.generator,
            dead_end_bias,
            rng,
        )?;

        if braid_factor > 0.0 {
            braid(&mut grid, braid_factor, rng);
            dead_end_ratio = grid.dead_end_ratio();
        }

        tracing::info!(
            "[maze] Built {}x{} maze with {} (bias {:.2}, braid {:.2}), dead-end ratio {:.3}",
            config.width,
            config.height,
            config.generator.name(),
            dead_end_bias,
            braid_factor,
            dead_end_ratio
        );

        Ok(Maze {
            grid,
            generator: config.generator,
            braid_factor,
            dead_end_bias,
            dead_end_ratio,
        })
    }

    #[cfg(test)]
    /// Wraps a hand-carved grid, for testing purposes.
    pub(crate) fn from_grid(grid: Grid) -> Self {
        let dead_end_ratio = grid.dead_end_ratio();
        Maze {
            grid,
            generator: Generator::default(),
            braid_factor: 0.0,
            dead_end_bias: 0.0,
            dead_end_ratio,
        }
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    pub fn braid_factor(&self) -> f64 {
        self.braid_factor
    }

    pub fn dead_end_bias(&self) -> f64 {
        self.dead_end_bias
    }

    /// Fraction of cells with exactly one opening in the final maze.
    pub fn dead_end_ratio(&self) -> f64 {
        self.dead_end_ratio
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Rows of cells, top to bottom, for drawing.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.rows()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: (u8, u8)) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// Whether the wall on side `direction` of cell `(x, y)` is present.
    ///
    /// # Panics
    /// If `(x, y)` is out of bounds.
    pub fn has_wall(&self, x: u8, y: u8, direction: Direction) -> bool {
        self.grid.has_wall((x, y), direction)
    }

    /// The cell reached by moving from `from` in `direction`, or `None` if a wall
    /// or the maze border is in the way.
    pub fn can_move(&self, from: (u8, u8), direction: Direction) -> Option<(u8, u8)> {
        if !self.is_in_bounds(from) || self.grid.has_wall(from, direction) {
            return None;
        }
        self.grid.neighbor(from, direction)
    }

    /// Shortest route from `start` to `goal`, see [`compute_shortest_path`].
    pub fn shortest_path(&self, start: (u8, u8), goal: (u8, u8)) -> Vec<(u8, u8)> {
        compute_shortest_path(self, start, goal)
    }
}
