use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom},
};

use crate::maze::{Direction, Grid};

/// Opens extra walls at dead ends to introduce loops.
///
/// Every current dead end, visited in random order, gets one more opening with
/// probability `braid_factor`. Candidate walls must lead to an in-bounds neighbor whose
/// matching wall is still standing; dead ends without such a wall are left alone.
/// Returns the number of walls removed.
pub fn braid<R: Rng + ?Sized>(grid: &mut Grid, braid_factor: f64, rng: &mut R) -> usize {
    if braid_factor <= 0.0 {
        return 0;
    }
    let braid_factor = braid_factor.min(1.0);

    let mut dead_ends = grid.dead_ends();
    dead_ends.shuffle(rng);

    let mut opened = 0;
    for coord in dead_ends {
        if !rng.random_bool(braid_factor) {
            continue;
        }

        let candidates = Direction::ALL
            .into_iter()
            .filter(|&dir| grid.has_wall(coord, dir))
            .filter(|&dir| {
                grid.neighbor(coord, dir)
                    .is_some_and(|next| grid.has_wall(next, dir.opposite()))
            })
            .collect::<Vec<_>>();

        let Some(&direction) = candidates.choose(rng) else {
            tracing::debug!("[braid] No wall left to open at {:?}", coord);
            continue;
        };
        if grid.carve(coord, direction) {
            opened += 1;
        }
    }

    tracing::debug!(
        "[braid] Opened {} walls with braid factor {:.2}",
        opened,
        braid_factor
    );
    opened
}
