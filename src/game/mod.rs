mod game_state;

pub use game_state::{GameState, MoveOutcome};

use crate::generators::Generator;
use crate::maze::MazeConfig;

/// Preset maze shapes, from small and loopy to large and branchy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Resolve a preset by name. Unknown names fall back to [`Difficulty::Medium`].
    pub fn from_name(name: &str) -> Difficulty {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => {
                tracing::warn!("[game] Unknown difficulty {:?}, falling back to medium", other);
                Difficulty::Medium
            }
        }
    }

    /// Maze width and height in cells.
    pub fn size(self) -> (u8, u8) {
        match self {
            Difficulty::Easy => (10, 10),
            Difficulty::Medium => (15, 15),
            Difficulty::Hard => (20, 20),
        }
    }

    pub fn braid_factor(self) -> f64 {
        match self {
            Difficulty::Easy => 0.65,
            Difficulty::Medium => 0.15,
            Difficulty::Hard => 0.0,
        }
    }

    pub fn dead_end_bias(self) -> f64 {
        match self {
            Difficulty::Easy => -0.5,
            Difficulty::Medium => 0.2,
            Difficulty::Hard => 0.8,
        }
    }

    /// Maze parameters for this preset, carved with `generator`.
    pub fn config(self, generator: Generator) -> MazeConfig {
        let (width, height) = self.size();
        MazeConfig {
            width,
            height,
            generator,
            braid_factor: self.braid_factor(),
            dead_end_bias: self.dead_end_bias(),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.size();
        write!(f, "{} ({}x{})", self.name(), width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let easy = Difficulty::Easy.config(Generator::Prim);
        assert_eq!((easy.width, easy.height), (10, 10));
        assert_eq!(easy.braid_factor, 0.65);
        assert_eq!(easy.dead_end_bias, -0.5);
        assert_eq!(easy.generator, Generator::Prim);

        let hard = Difficulty::Hard.config(Generator::Dfs);
        assert_eq!((hard.width, hard.height), (20, 20));
        assert_eq!(hard.braid_factor, 0.0);
        assert_eq!(hard.dead_end_bias, 0.8);

        assert_eq!(MazeConfig::default(), Difficulty::Medium.config(Generator::Dfs));
    }

    #[test]
    fn test_from_name() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(difficulty.name()), difficulty);
        }
        assert_eq!(Difficulty::from_name("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Medium);
        assert_eq!(Difficulty::Easy.to_string(), "easy (10x10)");
    }
}
