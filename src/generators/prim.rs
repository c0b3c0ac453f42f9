use rand::Rng;

use crate::maze::{Direction, Grid};

/// Candidate passage from a visited cell towards one of its neighbors.
#[derive(Debug, Clone, Copy)]
struct FrontierEdge {
    from: (u8, u8),
    direction: Direction,
    to: (u8, u8),
}

/// Push every edge from `coord` to a not-yet-visited neighbor onto the frontier.
fn add_frontier(grid: &Grid, coord: (u8, u8), visited: &[bool], frontier: &mut Vec<FrontierEdge>) {
    frontier.extend(
        grid.neighbors(coord)
            .filter(|&(_, to)| !visited[grid.ravel_index(to)])
            .map(|(direction, to)| FrontierEdge {
                from: coord,
                direction,
                to,
            }),
    );
}

/// Randomized Prim's algorithm over frontier edges, grown from `(0, 0)`.
///
/// Stale edges (whose target got visited after they were queued) stay in the
/// frontier and are dropped when drawn.
pub fn randomized_prim<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let mut visited = vec![false; grid.len()];
    let mut frontier = Vec::new();

    let start = (0, 0);
    visited[grid.ravel_index(start)] = true;
    add_frontier(grid, start, &visited, &mut frontier);

    while !frontier.is_empty() {
        // Randomly select an edge from the frontier
        let idx = rng.random_range(0..frontier.len());
        let edge = frontier.swap_remove(idx);

        let target = grid.ravel_index(edge.to);
        if visited[target] {
            continue;
        }

        grid.carve(edge.from, edge.direction);
        visited[target] = true;
        add_frontier(grid, edge.to, &visited, &mut frontier);
    }
}
