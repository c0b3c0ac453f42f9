use std::path::Path;
use std::time::Instant;

use mazeweave::{Generator, Maze, MazeConfig, logging};

const PROFILE_SIZE: u8 = 40;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = logging::init_file_logging(Path::new("logs"));

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100);
    let generators = match args.next() {
        Some(name) => vec![Generator::from_name(&name)],
        None => Generator::ALL.to_vec(),
    };

    for generator in generators {
        let config = MazeConfig {
            width: PROFILE_SIZE,
            height: PROFILE_SIZE,
            generator,
            ..MazeConfig::default()
        };

        let started = Instant::now();
        let mut ratio_sum = 0.0;
        for seed in 0..num_iters as u64 {
            let maze = Maze::new(config, Some(seed))?;
            ratio_sum += maze.dead_end_ratio();
        }
        let elapsed = started.elapsed();

        let mean_ratio = ratio_sum / num_iters.max(1) as f64;
        tracing::info!(
            "[profile] {} x{}: {:?} total, mean dead-end ratio {:.3}",
            generator.name(),
            num_iters,
            elapsed,
            mean_ratio
        );
        println!(
            "{:<40} {:>6} builds in {:.2?} ({:.2?}/build), mean dead-end ratio {:.3}",
            generator.to_string(),
            num_iters,
            elapsed,
            elapsed / num_iters.max(1) as u32,
            mean_ratio
        );
    }
    Ok(())
}
