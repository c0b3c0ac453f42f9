mod bfs;
mod hint;

pub use bfs::compute_shortest_path;
pub use hint::{HintCursor, HintStatus};
