use rand::{Rng, seq::IndexedRandom};

use crate::maze::Grid;

/// Randomized depth-first backtracker, carving outward from `(0, 0)`.
///
/// Produces long, winding corridors with few branch points.
pub fn randomized_dfs<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let total_cells = grid.len();
    let mut visited = vec![false; total_cells];

    let mut current: (u8, u8) = (0, 0);
    visited[grid.ravel_index(current)] = true;
    let mut visited_cells = 1;

    // Branch points to resume from once the current corridor is exhausted
    let mut stack = Vec::new();

    while visited_cells < total_cells {
        let neighbors = grid
            .neighbors(current)
            .filter(|&(_, next)| !visited[grid.ravel_index(next)])
            .collect::<Vec<_>>();

        match neighbors.choose(rng) {
            Some(&(direction, next)) => {
                grid.carve(current, direction);
                stack.push(current);
                current = next;
                visited[grid.ravel_index(current)] = true;
                visited_cells += 1;
            }
            None => match stack.pop() {
                Some(previous) => current = previous,
                // Unreachable on a connected grid, but never spin forever
                None => break,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::generators::tests::reachable_from_origin;

    #[test]
    fn test_two_by_two_maze() {
        let mut grid = Grid::new(2, 2).unwrap();
        randomized_dfs(&mut grid, &mut get_rng(Some(7)));
        assert_eq!(grid.open_passage_count(), 3);
        assert_eq!(reachable_from_origin(&grid), 4);
    }

    #[test]
    fn test_corridor_grid_is_fully_open() {
        // A 2-wide strip still has to reach every cell
        let mut grid = Grid::new(2, 20).unwrap();
        randomized_dfs(&mut grid, &mut get_rng(Some(3)));
        assert_eq!(grid.open_passage_count(), 39);
        assert_eq!(reachable_from_origin(&grid), 40);
    }
}
