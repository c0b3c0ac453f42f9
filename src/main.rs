use std::path::PathBuf;

use clap::Parser;
use mazeweave::{Difficulty, Generator, HintCursor, HintStatus, Maze, logging};

/// Build a maze and report its shape and the route through it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Difficulty preset providing the defaults: easy, medium or hard
    #[arg(long, default_value = "medium")]
    difficulty: String,

    /// Maze width in cells, overrides the preset
    #[arg(long)]
    width: Option<u8>,

    /// Maze height in cells, overrides the preset
    #[arg(long)]
    height: Option<u8>,

    /// Generation algorithm: dfs, prim or kruskal. Anything else means dfs
    #[arg(long, default_value = "dfs")]
    algorithm: String,

    /// Probability of opening an extra wall at each dead end, overrides the preset
    #[arg(long)]
    braid: Option<f64>,

    /// Dead-end preference in [-1, 1], overrides the preset
    #[arg(long, allow_negative_numbers = true)]
    bias: Option<f64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of hint steps to print
    #[arg(long, default_value_t = 3)]
    hints: usize,

    /// Directory the log file is written to
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _guard = logging::init_file_logging(&args.log_dir);

    let generator = Generator::from_name(&args.algorithm);
    let mut config = Difficulty::from_name(&args.difficulty).config(generator);
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(braid) = args.braid {
        config.braid_factor = braid;
    }
    if let Some(bias) = args.bias {
        config.dead_end_bias = bias;
    }

    let maze = Maze::new(config, args.seed)?;
    let start = (0, 0);
    let goal = (maze.width() - 1, maze.height() - 1);

    println!("Maze: {}x{}", maze.width(), maze.height());
    println!("Algorithm: {}", maze.generator());
    println!(
        "Braid factor: {:.2}, dead-end bias: {:.2}",
        maze.braid_factor(),
        maze.dead_end_bias()
    );
    println!("Dead-end ratio: {:.3}", maze.dead_end_ratio());
    println!("Open passages: {}", maze.grid().open_passage_count());

    let path = maze.shortest_path(start, goal);
    if path.is_empty() {
        println!("No path from {:?} to {:?}", start, goal);
    } else {
        println!(
            "Shortest path from {:?} to {:?}: {} steps",
            start,
            goal,
            path.len() - 1
        );
    }

    let mut cursor = HintCursor::new();
    for _ in 0..args.hints {
        match cursor.advance(&maze, start, goal) {
            HintStatus::Revealed {
                direction,
                index,
                is_complete,
            } => {
                println!("Hint {}: go {}", index, direction);
                if is_complete {
                    println!("Route fully revealed.");
                    break;
                }
            }
            HintStatus::AlreadyComplete => break,
            HintStatus::AtGoal => {
                println!("Already at the goal.");
                break;
            }
            HintStatus::NoPath => {
                println!("No hint available.");
                break;
            }
        }
    }
    Ok(())
}
