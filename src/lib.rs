pub mod error;
pub mod game;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;
pub mod tuning;

pub use error::{MazeError, Result};
pub use game::{Difficulty, GameState, MoveOutcome};
pub use generators::Generator;
pub use maze::{Cell, Direction, Grid, Maze, MazeConfig};
pub use solvers::{HintCursor, HintStatus, compute_shortest_path};
