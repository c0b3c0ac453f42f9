use rand::{Rng, SeedableRng, rngs::StdRng};

mod dfs;
mod kruskal;
mod prim;

pub use dfs::randomized_dfs;
pub use kruskal::randomized_kruskal;
pub use prim::randomized_prim;

use crate::maze::Grid;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// The spanning-tree algorithms a maze can be carved with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    #[default]
    Dfs,
    Prim,
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 3] = [Generator::Dfs, Generator::Prim, Generator::Kruskal];

    /// Short machine name, as accepted by [`Generator::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Generator::Dfs => "dfs",
            Generator::Prim => "prim",
            Generator::Kruskal => "kruskal",
        }
    }

    /// Resolve a generator by name. Unknown names fall back to [`Generator::Dfs`].
    pub fn from_name(name: &str) -> Generator {
        match name.trim().to_ascii_lowercase().as_str() {
            "dfs" | "backtracker" => Generator::Dfs,
            "prim" => Generator::Prim,
            "kruskal" => Generator::Kruskal,
            other => {
                tracing::warn!("[maze] Unknown algorithm {:?}, falling back to dfs", other);
                Generator::Dfs
            }
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

/// Carve a perfect maze into a freshly allocated, fully walled grid.
pub fn generate_maze<R: Rng + ?Sized>(grid: &mut Grid, generator: Generator, rng: &mut R) {
    match generator {
        Generator::Dfs => randomized_dfs(grid, rng),
        Generator::Prim => randomized_prim(grid, rng),
        Generator::Kruskal => {
            randomized_kruskal(grid, rng);
        }
    }
}
