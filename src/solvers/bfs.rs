use std::collections::VecDeque;

use crate::maze::{Direction, Maze};

/// Breadth-first search for the shortest route from `start` to `goal`.
///
/// The returned path starts at `start`, ends at `goal`, and every consecutive pair is
/// joined by an open wall. A path to oneself is just `[start]`.
/// An empty path means `goal` cannot be reached (or a coordinate is out of bounds).
pub fn compute_shortest_path(maze: &Maze, start: (u8, u8), goal: (u8, u8)) -> Vec<(u8, u8)> {
    let grid = maze.grid();
    if !grid.is_in_bounds(start) || !grid.is_in_bounds(goal) {
        return Vec::new();
    }
    if start == goal {
        return vec![start];
    }

    // Parent of every reached cell, indexed by ravel index. The start is its own parent.
    let mut parents: Vec<Option<(u8, u8)>> = vec![None; grid.len()];
    parents[grid.ravel_index(start)] = Some(start);

    let mut queue = VecDeque::from([start]);
    let mut found = false;
    while let Some(current) = queue.pop_front() {
        if current == goal {
            found = true;
            break;
        }
        for direction in Direction::ALL {
            let Some(next) = maze.can_move(current, direction) else {
                continue;
            };
            let idx = grid.ravel_index(next);
            if parents[idx].is_none() {
                parents[idx] = Some(current);
                queue.push_back(next);
            }
        }
    }

    if !found {
        tracing::debug!("[solver] No path from {:?} to {:?}", start, goal);
        return Vec::new();
    }

    // Backtrack from the goal to the start
    let mut path = vec![goal];
    let mut node = goal;
    while node != start {
        match parents[grid.ravel_index(node)] {
            Some(parent) => {
                path.push(parent);
                node = parent;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Generator;
    use crate::maze::{Grid, MazeConfig};

    fn is_valid_path(maze: &Maze, path: &[(u8, u8)]) -> bool {
        path.windows(2).all(|pair| {
            Direction::between(pair[0], pair[1])
                .is_some_and(|dir| maze.can_move(pair[0], dir) == Some(pair[1]))
        })
    }

    #[test]
    fn test_path_to_self() {
        let maze = Maze::new(MazeConfig::default(), Some(1)).unwrap();
        for cell in maze.grid().cells() {
            assert_eq!(
                compute_shortest_path(&maze, cell.coord(), cell.coord()),
                vec![cell.coord()]
            );
        }
    }

    #[test]
    fn test_unreachable_goal_gives_empty_path() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.carve((0, 0), Direction::East);
        let maze = Maze::from_grid(grid);
        assert_eq!(compute_shortest_path(&maze, (0, 0), (1, 0)), vec![(0, 0), (1, 0)]);
        assert!(compute_shortest_path(&maze, (0, 0), (2, 2)).is_empty());
        assert!(compute_shortest_path(&maze, (0, 0), (9, 9)).is_empty());
    }

    #[test]
    fn test_prefers_shorter_loop_side() {
        // 3x2 ring: (0,0)-(1,0)-(2,0)-(2,1)-(1,1)-(0,1)-(0,0)
        let mut grid = Grid::new(3, 2).unwrap();
        grid.carve((0, 0), Direction::East);
        grid.carve((1, 0), Direction::East);
        grid.carve((2, 0), Direction::South);
        grid.carve((2, 1), Direction::West);
        grid.carve((1, 1), Direction::West);
        grid.carve((0, 1), Direction::North);
        let maze = Maze::from_grid(grid);
        assert_eq!(
            compute_shortest_path(&maze, (0, 0), (1, 1)),
            vec![(0, 0), (0, 1), (1, 1)]
        );
        assert_eq!(
            compute_shortest_path(&maze, (1, 0), (2, 1)),
            vec![(1, 0), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn test_paths_follow_open_walls() {
        for generator in Generator::ALL {
            let config = MazeConfig {
                width: 20,
                height: 20,
                generator,
                braid_factor: 0.5,
                dead_end_bias: 0.0,
            };
            let maze = Maze::new(config, Some(21)).unwrap();
            let path = compute_shortest_path(&maze, (0, 0), (19, 19));
            assert_eq!(path.first(), Some(&(0, 0)));
            assert_eq!(path.last(), Some(&(19, 19)));
            assert!(is_valid_path(&maze, &path));
            // Manhattan distance is a lower bound on any route
            assert!(path.len() >= 39);
        }
    }

    #[test]
    fn test_tree_path_matches_reverse_path() {
        // In a perfect maze the route is unique, so both directions agree
        let maze = Maze::new(
            MazeConfig {
                width: 10,
                height: 10,
                generator: Generator::Kruskal,
                braid_factor: 0.0,
                dead_end_bias: 0.0,
            },
            Some(6),
        )
        .unwrap();
        let forward = compute_shortest_path(&maze, (3, 7), (9, 0));
        let mut backward = compute_shortest_path(&maze, (9, 0), (3, 7));
        backward.reverse();
        assert_eq!(forward, backward);
        assert!(is_valid_path(&maze, &forward));
    }
}
