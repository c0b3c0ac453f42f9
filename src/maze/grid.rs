use super::cell::{Cell, Direction};
use crate::error::{MazeError, Result};

/// Row-major array of cells, `height` rows of `width` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u8,
    height: u8,
}

impl Grid {
    /// Smallest allowed extent in either dimension.
    pub const MIN_DIMENSION: u8 = 2;

    /// Allocates a grid where every cell has all four walls set.
    /// Fails if either dimension is below [`Grid::MIN_DIMENSION`].
    pub fn new(width: u8, height: u8) -> Result<Self> {
        if width < Self::MIN_DIMENSION || height < Self::MIN_DIMENSION {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Grid {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: (u8, u8)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub(crate) fn ravel_index(&self, coord: (u8, u8)) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// The in-bounds cell one step away from `coord` in `direction`.
    pub fn neighbor(&self, coord: (u8, u8), direction: Direction) -> Option<(u8, u8)> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        direction.step(coord, self.width, self.height)
    }

    /// Get neighbors of a cell together with the direction leading to each of them.
    pub fn neighbors(
        &self,
        coord: (u8, u8),
    ) -> impl Iterator<Item = (Direction, (u8, u8))> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(coord, dir).map(|next| (dir, next)))
    }

    /// # Panics
    /// If `coord` is out of bounds.
    pub fn has_wall(&self, coord: (u8, u8), direction: Direction) -> bool {
        self[coord].has_wall(direction)
    }

    /// Removes the wall between `coord` and its neighbor in `direction`, on both sides.
    ///
    /// Border walls are never removed: if the neighbor lies outside the grid nothing changes.
    /// Returns `true` if a wall was removed, `false` if there was nothing to remove.
    pub fn carve(&mut self, coord: (u8, u8), direction: Direction) -> bool {
        let Some(next) = self.neighbor(coord, direction) else {
            return false;
        };
        if !self[coord].has_wall(direction) && !self[next].has_wall(direction.opposite()) {
            return false;
        }
        let from = self.ravel_index(coord);
        let to = self.ravel_index(next);
        self.data[from].open(direction);
        self.data[to].open(direction.opposite());
        true
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.data.chunks(self.width as usize)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.data.iter()
    }

    /// Coordinates of every cell with exactly one open wall, in row-major order.
    pub fn dead_ends(&self) -> Vec<(u8, u8)> {
        self.cells()
            .filter(|cell| cell.is_dead_end())
            .map(Cell::coord)
            .collect()
    }

    /// Fraction of cells that are dead ends.
    pub fn dead_end_ratio(&self) -> f64 {
        let dead_ends = self.cells().filter(|cell| cell.is_dead_end()).count();
        dead_ends as f64 / self.len() as f64
    }

    /// Number of cleared wall-pairs between adjacent cells.
    pub fn open_passage_count(&self) -> usize {
        // Looking only east and south counts each adjacency once
        self.cells()
            .map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&dir| {
                        self.neighbor(cell.coord(), dir).is_some() && !cell.has_wall(dir)
                    })
                    .count()
            })
            .sum()
    }
}

impl std::ops::Index<(u8, u8)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u8, u8)) -> &Self::Output {
        if !self.is_in_bounds(index) {
            panic!(
                "The given coordinate {:?} is out of bounds for a {}x{} grid",
                index, self.width, self.height
            );
        }
        &self.data[self.ravel_index(index)]
    }
}
