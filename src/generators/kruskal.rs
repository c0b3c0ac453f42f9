use crate::maze::{Direction, Grid};
use rand::{Rng, seq::SliceRandom};

/// Disjoint sets over cell indices, with path halving and union by rank.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub(crate) fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub(crate) fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            // Point every other node on the way up at its grandparent
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets containing `x` and `y`.
    /// Returns `false` if they were already in the same set.
    pub(crate) fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Wall edge between a cell and its east or south neighbor
#[derive(Clone, Copy)]
struct Edge {
    cell: (u8, u8),
    direction: Direction,
    neighbor: (u8, u8),
}

/// Randomized Kruskal's algorithm.
///
/// Returns the number of successful unions, which is `width * height - 1`
/// for any grid since every candidate edge is considered.
pub fn randomized_kruskal<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let width = grid.width();
    let height = grid.height();

    let mut uf = UnionFind::new(grid.len());

    // East and south edges only, so each adjacency appears exactly once
    let mut edges: Vec<Edge> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|cell| {
            [Direction::East, Direction::South].map(|direction| {
                grid.neighbor(cell, direction).map(|neighbor| Edge {
                    cell,
                    direction,
                    neighbor,
                })
            })
        })
        .flatten()
        .collect();

    edges.shuffle(rng);

    let mut unions = 0;
    for edge in edges {
        let idx1 = grid.ravel_index(edge.cell);
        let idx2 = grid.ravel_index(edge.neighbor);

        // If cells are not yet connected, remove the wall between them
        if uf.unite(idx1, idx2) {
            grid.carve(edge.cell, edge.direction);
            unions += 1;
        }
    }

    tracing::debug!("[maze] Kruskal carved {} passages", unions);
    unions
}
