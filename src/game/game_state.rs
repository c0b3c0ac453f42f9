use rand::rngs::StdRng;

use super::Difficulty;
use crate::error::Result;
use crate::generators::get_rng;
use crate::maze::{Direction, Maze, MazeConfig};
use crate::solvers::{HintCursor, HintStatus};

/// Result of trying to move the player one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player moved and the goal is still ahead.
    Moved((u8, u8)),
    /// The move landed on the goal.
    GoalReached((u8, u8)),
    /// A wall (or the maze border) is in the way; nothing changed.
    Blocked,
    /// The goal was already reached, moves are ignored until reset.
    Finished,
}

/// A player's session over one maze.
pub struct GameState {
    /// Parameters every new maze is built from
    config: MazeConfig,
    /// Random source shared by every maze built during this session
    rng: StdRng,
    /// The maze being played
    maze: Maze,
    /// Tracks where the player currently is
    current: (u8, u8),
    /// Goal position, the bottom right cell
    goal: (u8, u8),
    /// Number of successful moves since the last reset
    step_count: usize,
    /// Whether the guide path to the goal is shown
    show_path: bool,
    /// Step-by-step route reveal
    hint: HintCursor,
}

impl GameState {
    /// Set up the initial game state with a maze built from `config`.
    /// The player starts in the top left cell and the goal is the bottom right cell.
    ///
    /// Fails if either dimension of `config` is below 2.
    pub fn new(config: MazeConfig, seed: Option<u64>) -> Result<Self> {
        let mut rng = get_rng(seed);
        let maze = Maze::with_rng(config, &mut rng)?;
        let goal = (maze.width() - 1, maze.height() - 1);
        Ok(GameState {
            config,
            rng,
            maze,
            current: (0, 0),
            goal,
            step_count: 0,
            show_path: false,
            hint: HintCursor::new(),
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn config(&self) -> MazeConfig {
        self.config
    }

    pub fn position(&self) -> (u8, u8) {
        self.current
    }

    pub fn goal(&self) -> (u8, u8) {
        self.goal
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Check if the goal has been reached.
    pub fn goal_reached(&self) -> bool {
        self.current == self.goal
    }

    pub fn show_path(&self) -> bool {
        self.show_path
    }

    /// Flip the guide path on or off. Returns the new setting.
    pub fn toggle_guide_path(&mut self) -> bool {
        self.show_path = !self.show_path;
        self.show_path
    }

    /// Attempt to move the player one cell in `direction`.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        if self.goal_reached() {
            return MoveOutcome::Finished;
        }

        let Some(new_pos) = self.maze.can_move(self.current, direction) else {
            tracing::debug!(
                "[game] Bumped into a wall moving {} from {:?}",
                direction,
                self.current
            );
            return MoveOutcome::Blocked;
        };

        tracing::debug!("[game] Moving to cell at {:?}", new_pos);
        self.current = new_pos;
        self.step_count += 1;

        if self.goal_reached() {
            tracing::info!("[game] Goal reached in {} steps!", self.step_count);
            MoveOutcome::GoalReached(new_pos)
        } else {
            MoveOutcome::Moved(new_pos)
        }
    }

    /// The current shortest route from the player to the goal, if the guide is shown.
    /// Empty when the guide is hidden, the goal is reached, or there is no route to draw.
    pub fn guide_path(&self) -> Vec<(u8, u8)> {
        if !self.show_path || self.goal_reached() {
            return Vec::new();
        }
        let path = self.maze.shortest_path(self.current, self.goal);
        if path.len() < 2 { Vec::new() } else { path }
    }

    /// Reveal one more step of the route to the goal.
    pub fn hint(&mut self) -> HintStatus {
        self.hint.advance(&self.maze, self.current, self.goal)
    }

    /// The part of the route revealed by [`GameState::hint`] so far.
    pub fn revealed_hint(&self) -> &[(u8, u8)] {
        self.hint.revealed()
    }

    /// Replace the maze with a freshly built one and put the player back at the start.
    pub fn reset(&mut self) -> Result<()> {
        self.maze = Maze::with_rng(self.config, &mut self.rng)?;
        self.current = (0, 0);
        self.goal = (self.maze.width() - 1, self.maze.height() - 1);
        self.step_count = 0;
        self.hint.reset();
        tracing::info!(
            "[game] New {}x{} maze, reach {:?}",
            self.maze.width(),
            self.maze.height(),
            self.goal
        );
        Ok(())
    }

    /// Switch to a difficulty preset, keeping the current generator.
    /// Nothing happens if the preset has the same size as the current maze.
    /// Returns whether a new maze was built.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) -> Result<bool> {
        if difficulty.size() == (self.config.width, self.config.height) {
            return Ok(false);
        }
        tracing::info!("[game] Switching difficulty to {}", difficulty);
        self.config = difficulty.config(self.config.generator);
        self.reset()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Generator;

    fn perfect_config(width: u8, height: u8) -> MazeConfig {
        MazeConfig {
            width,
            height,
            generator: Generator::Dfs,
            braid_factor: 0.0,
            dead_end_bias: 0.0,
        }
    }

    #[test]
    fn test_initial_state() {
        let game = GameState::new(perfect_config(6, 4), Some(1)).unwrap();
        assert_eq!(game.position(), (0, 0));
        assert_eq!(game.goal(), (5, 3));
        assert_eq!(game.step_count(), 0);
        assert!(!game.goal_reached());
        assert!(GameState::new(perfect_config(1, 4), Some(1)).is_err());
    }

    #[test]
    fn test_walking_the_route_reaches_goal() {
        let mut game = GameState::new(perfect_config(8, 8), Some(2)).unwrap();
        let route = game.maze().shortest_path(game.position(), game.goal());

        for (i, pair) in route.windows(2).enumerate() {
            let direction = Direction::between(pair[0], pair[1]).unwrap();
            let outcome = game.move_player(direction);
            if i + 2 == route.len() {
                assert_eq!(outcome, MoveOutcome::GoalReached(pair[1]));
            } else {
                assert_eq!(outcome, MoveOutcome::Moved(pair[1]));
            }
        }
        assert!(game.goal_reached());
        assert_eq!(game.step_count(), route.len() - 1);
        assert_eq!(game.move_player(Direction::North), MoveOutcome::Finished);
        assert_eq!(game.step_count(), route.len() - 1);
    }

    #[test]
    fn test_walls_block_moves() {
        let mut game = GameState::new(perfect_config(5, 5), Some(3)).unwrap();
        // The start corner is always walled on the outside
        assert_eq!(game.move_player(Direction::North), MoveOutcome::Blocked);
        assert_eq!(game.move_player(Direction::West), MoveOutcome::Blocked);
        assert_eq!(game.position(), (0, 0));
        assert_eq!(game.step_count(), 0);
    }

    #[test]
    fn test_guide_path_toggle() {
        let mut game = GameState::new(perfect_config(5, 5), Some(4)).unwrap();
        assert!(game.guide_path().is_empty());
        assert!(game.toggle_guide_path());
        let path = game.guide_path();
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(4, 4)));
        assert!(!game.toggle_guide_path());
        assert!(game.guide_path().is_empty());
    }

    #[test]
    fn test_hint_follows_player() {
        let mut game = GameState::new(perfect_config(6, 6), Some(5)).unwrap();
        let status = game.hint();
        let direction = status.direction().unwrap();
        assert_eq!(game.revealed_hint().len(), 2);

        game.move_player(direction);
        game.hint();
        assert_eq!(game.revealed_hint()[0], game.position());
    }

    #[test]
    fn test_reset_and_difficulty() {
        let mut game = GameState::new(Difficulty::Easy.config(Generator::Prim), Some(6)).unwrap();
        game.toggle_guide_path();
        let first = game.guide_path();
        if let Some(direction) = Direction::between(first[0], first[1]) {
            game.move_player(direction);
        }
        game.reset().unwrap();
        assert_eq!(game.position(), (0, 0));
        assert_eq!(game.step_count(), 0);

        assert!(!game.change_difficulty(Difficulty::Easy).unwrap());
        assert!(game.change_difficulty(Difficulty::Hard).unwrap());
        assert_eq!(game.goal(), (19, 19));
        assert_eq!((game.maze().width(), game.maze().height()), (20, 20));
        assert_eq!(game.config().generator, Generator::Prim);
    }
}
