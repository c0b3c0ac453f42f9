use super::compute_shortest_path;
use crate::maze::{Direction, Maze};

/// Outcome of asking the [`HintCursor`] for one more step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintStatus {
    /// One more step of the route was revealed.
    Revealed {
        /// Move leading onto the newly revealed cell.
        direction: Direction,
        /// Index of the newly revealed cell in the route.
        index: usize,
        /// Whether the route is now revealed all the way to the goal.
        is_complete: bool,
    },
    /// The whole route was already revealed by earlier calls.
    AlreadyComplete,
    /// The player is standing on the goal.
    AtGoal,
    /// The goal cannot be reached from the player's position.
    NoPath,
}

impl HintStatus {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            HintStatus::Revealed { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(
            self,
            HintStatus::Revealed {
                is_complete: true,
                ..
            } | HintStatus::AlreadyComplete
        )
    }

    pub fn has_path(&self) -> bool {
        !matches!(self, HintStatus::NoPath)
    }
}

/// Reveals the route to the goal one step at a time.
///
/// The route is recomputed from the player's position on every call, and progress
/// starts over whenever the route changes (e.g. after the player moved).
#[derive(Debug, Default, Clone)]
pub struct HintCursor {
    /// Last computed route from the player to the goal
    path: Vec<(u8, u8)>,
    /// Index of the last revealed cell in `path`
    index: usize,
}

impl HintCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the last revealed cell.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The revealed prefix of the route, starting at the player's position.
    pub fn revealed(&self) -> &[(u8, u8)] {
        if self.path.is_empty() {
            return &[];
        }
        &self.path[..=self.index.min(self.path.len() - 1)]
    }

    /// Forget the stored route.
    pub fn reset(&mut self) {
        self.path.clear();
        self.index = 0;
    }

    /// Reveal the next step of the route from `current` to `goal`.
    pub fn advance(&mut self, maze: &Maze, current: (u8, u8), goal: (u8, u8)) -> HintStatus {
        if current == goal {
            return HintStatus::AtGoal;
        }

        let path = compute_shortest_path(maze, current, goal);
        if path.len() < 2 {
            return HintStatus::NoPath;
        }
        if path != self.path {
            tracing::debug!("[hint] Route changed, restarting from {:?}", current);
            self.path = path;
            self.index = 0;
        }

        let last = self.path.len() - 1;
        if self.index >= last {
            return HintStatus::AlreadyComplete;
        }

        self.index += 1;
        let (from, to) = (self.path[self.index - 1], self.path[self.index]);
        match Direction::between(from, to) {
            Some(direction) => HintStatus::Revealed {
                direction,
                index: self.index,
                is_complete: self.index == last,
            },
            // Consecutive path cells are always adjacent
            None => HintStatus::NoPath,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Grid;

    /// A 5x2 maze whose top row is a straight corridor, bottom row hanging off (0, 0).
    fn corridor_maze() -> Maze {
        let mut grid = Grid::new(5, 2).unwrap();
        for x in 0..4 {
            grid.carve((x, 0), Direction::East);
            grid.carve((x, 1), Direction::East);
        }
        grid.carve((0, 0), Direction::South);
        Maze::from_grid(grid)
    }

    #[test]
    fn test_reveals_five_cell_route_step_by_step() {
        let maze = corridor_maze();
        let mut cursor = HintCursor::new();

        for step in 1..=4 {
            let status = cursor.advance(&maze, (0, 0), (4, 0));
            assert_eq!(
                status,
                HintStatus::Revealed {
                    direction: Direction::East,
                    index: step,
                    is_complete: step == 4,
                }
            );
            assert_eq!(cursor.index(), step);
            assert_eq!(cursor.revealed().len(), step + 1);
        }

        let status = cursor.advance(&maze, (0, 0), (4, 0));
        assert_eq!(status, HintStatus::AlreadyComplete);
        assert!(status.is_complete());
        assert_eq!(status.direction(), None);
        assert_eq!(cursor.index(), 4);
    }

    #[test]
    fn test_moving_restarts_the_hint() {
        let maze = corridor_maze();
        let mut cursor = HintCursor::new();
        cursor.advance(&maze, (0, 0), (4, 0));
        cursor.advance(&maze, (0, 0), (4, 0));
        assert_eq!(cursor.index(), 2);

        let status = cursor.advance(&maze, (1, 0), (4, 0));
        assert_eq!(status.direction(), Some(Direction::East));
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.revealed(), &[(1, 0), (2, 0)]);
    }

    #[test]
    fn test_hint_turns_corners() {
        let maze = corridor_maze();
        let mut cursor = HintCursor::new();
        assert_eq!(
            cursor.advance(&maze, (3, 0), (1, 1)).direction(),
            Some(Direction::West)
        );
        cursor.advance(&maze, (3, 0), (1, 1));
        cursor.advance(&maze, (3, 0), (1, 1));
        assert_eq!(
            cursor.advance(&maze, (3, 0), (1, 1)).direction(),
            Some(Direction::South)
        );
    }

    #[test]
    fn test_at_goal_and_no_path() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.carve((0, 0), Direction::East);
        let maze = Maze::from_grid(grid);
        let mut cursor = HintCursor::new();

        let status = cursor.advance(&maze, (1, 0), (1, 0));
        assert_eq!(status, HintStatus::AtGoal);
        assert!(status.has_path());

        let status = cursor.advance(&maze, (0, 0), (1, 1));
        assert_eq!(status, HintStatus::NoPath);
        assert!(!status.has_path());
        assert!(cursor.revealed().is_empty());
    }

    #[test]
    fn test_reset_clears_progress() {
        let maze = corridor_maze();
        let mut cursor = HintCursor::new();
        cursor.advance(&maze, (0, 0), (4, 0));
        cursor.reset();
        assert_eq!(cursor.index(), 0);
        assert!(cursor.revealed().is_empty());
    }
}
