//! Cellular growth over an [`IntensityGrid`].
//!
//! A run looks like:
//! 1. [`spawn`] scatters seed cells at random positions.
//! 2. [`growth_step`] is applied a fixed number of times. Each active cell
//!    may spread a weaker copy of itself to its four neighbors.
//!
//! [`simulate`] runs both phases.

use crate::{grid::IntensityGrid, rng::Lcg, types::CellValue};
use glam::IVec2;

/// Neighbor offsets, in the order they are attempted.
const NEIGHBORS: [IVec2; 4] = [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y];

/// Scatters up to `amount` cells of intensity `value`.
///
/// Each attempt draws `x` then `y`, each modulo `dimension - 1`, and hands
/// the pair to [`IntensityGrid::place_cell`]. Attempts that land on the
/// excluded first row/column or on an occupied cell are dropped, not retried.
///
/// ### Returns
/// The number of cells actually written.
///
/// ### Panics
/// Panics if the grid is narrower or shorter than 2 cells.
pub fn spawn(grid: &mut IntensityGrid, amount: usize, value: CellValue, rng: &mut Lcg) -> usize {
    let x_span = (grid.width() - 1) as u32;
    let y_span = (grid.height() - 1) as u32;

    let mut placed = 0;
    for _ in 0..amount {
        let x = rng.draw() % x_span;
        let y = rng.draw() % y_span;
        if grid.place_cell(x as i32, y as i32, value) {
            placed += 1;
        }
    }
    placed
}

/// Performs one synchronous spreading round from `current` into `next`.
///
/// `next` is first overwritten with a copy of `current`. Then, visiting
/// `current` row by row, every nonzero cell draws once; on `draw % 4 == 1`
/// it writes `value - 1` into its four neighbors in `next`. Neighbors already
/// set in `next`, including ones set earlier in this same round, keep their
/// value. Reads only ever come from `current`, so spreads never cascade within
/// a round.
///
/// ### Parameters
/// - `current` - Snapshot the round is computed against.
/// - `next` - Output grid; must have the same size as `current`.
/// - `rng` - Draw stream; advanced once per active cell.
///
/// ### Panics
/// Panics if the two grids have different sizes.
pub fn growth_step(current: &IntensityGrid, next: &mut IntensityGrid, rng: &mut Lcg) {
    next.copy_from(current);

    for y in 0..current.height() {
        for x in 0..current.width() {
            let value = current.get(x, y);
            if value == 0 || rng.draw() % 4 != 1 {
                continue;
            }

            let pos = IVec2::new(x as i32, y as i32);
            for offset in NEIGHBORS {
                let n = pos + offset;
                next.place_cell(n.x, n.y, value - 1);
            }
        }
    }
}

/// Spawns `spawn_amount` cells of `value`, then runs exactly `repeat` rounds
/// of [`growth_step`].
///
/// The loop stops after `repeat` rounds whether or not growth could continue.
///
/// ### Returns
/// The number of cells placed by the spawn phase.
pub fn simulate(
    grid: &mut IntensityGrid,
    spawn_amount: usize,
    repeat: usize,
    value: CellValue,
    rng: &mut Lcg,
) -> usize {
    let placed = spawn(grid, spawn_amount, value, rng);

    let mut next = grid.clone();
    for _ in 0..repeat {
        growth_step(grid, &mut next, rng);
        std::mem::swap(grid, &mut next);
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Seed;

    #[test]
    fn spawn_drops_misses_without_retrying() {
        let mut grid = IntensityGrid::new(8, 6);
        let mut rng = Seed::CLASSIC.rng();

        let placed = spawn(&mut grid, 5, 255, &mut rng);

        // Three of the five draws land on row 0 or column 0.
        assert_eq!(placed, 2);
        assert_eq!(grid.active_count(), 2);
        assert_eq!(grid.get(5, 1), 255);
        assert_eq!(grid.get(2, 1), 255);
    }

    #[test]
    fn spawn_stays_inside_the_grid() {
        let mut grid = IntensityGrid::new(10, 7);
        let mut rng = Seed::CLASSIC.rng();

        let placed = spawn(&mut grid, 500, 3, &mut rng);

        assert!(placed <= 500);
        assert_eq!(placed, grid.active_count());
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if x == 0 || y == 0 {
                    assert_eq!(grid.get(x, y), 0);
                }
                // Draws are taken modulo `dimension - 1`.
                if x == grid.width() - 1 || y == grid.height() - 1 {
                    assert_eq!(grid.get(x, y), 0);
                }
            }
        }
    }

    #[test]
    fn spawn_matches_recorded_layout() {
        let mut grid = IntensityGrid::new(4, 4);
        let mut rng = Seed::CLASSIC.rng();

        spawn(&mut grid, 200, 255, &mut rng);

        #[rustfmt::skip]
        let expected = [
            0, 0,   0,   0,
            0, 255, 255, 0,
            0, 255, 255, 0,
            0, 0,   0,   0,
        ];
        assert_eq!(grid.cells(), &expected);
    }

    #[test]
    fn simulate_with_zero_repeats_equals_spawn() {
        let mut spawned = IntensityGrid::new(16, 12);
        spawn(&mut spawned, 40, 255, &mut Seed::CLASSIC.rng());

        let mut simulated = IntensityGrid::new(16, 12);
        let placed = simulate(&mut simulated, 40, 0, 255, &mut Seed::CLASSIC.rng());

        assert_eq!(simulated, spawned);
        assert_eq!(placed, spawned.active_count());
    }

    #[test]
    fn growth_step_spreads_once_without_cascading() {
        let mut current = IntensityGrid::new(7, 7);
        current.place_cell(3, 3, 10);
        let mut next = IntensityGrid::new(7, 7);

        // Seeded so that the first draw satisfies `draw % 4 == 1`.
        let mut rng = Lcg::new(9, 12345);
        growth_step(&current, &mut next, &mut rng);

        assert_eq!(next.get(3, 3), 10);
        for (x, y) in [(4, 3), (2, 3), (3, 4), (3, 2)] {
            assert_eq!(next.get(x, y), 9);
        }
        // Only the center was active in `current`, so nothing spreads further.
        assert_eq!(next.active_count(), 5);
    }

    #[test]
    fn growth_step_consumes_one_draw_per_active_cell() {
        let mut current = IntensityGrid::new(6, 6);
        current.place_cell(1, 1, 5);
        current.place_cell(4, 4, 5);
        current.place_cell(2, 3, 5);
        let mut next = IntensityGrid::new(6, 6);

        let mut rng = Seed::CLASSIC.rng();
        let mut probe = rng.clone();
        growth_step(&current, &mut next, &mut rng);

        for _ in 0..3 {
            probe.draw();
        }
        assert_eq!(rng, probe);
    }

    #[test]
    fn growth_step_keeps_first_writer_in_same_round() {
        let mut current = IntensityGrid::new(5, 3);
        current.place_cell(1, 1, 10);
        current.place_cell(3, 1, 5);
        let mut next = IntensityGrid::new(5, 3);

        // Both active cells spread with this stream.
        let mut rng = Lcg::new(9, 12345);
        growth_step(&current, &mut next, &mut rng);

        // (2, 1) neighbors both cells; (1, 1) is visited first.
        assert_eq!(next.get(2, 1), 9);
        assert_eq!(next.get(4, 1), 4);
        assert_eq!(next.get(1, 1), 10);
        assert_eq!(next.get(3, 1), 5);
    }

    #[test]
    fn growth_step_never_writes_below_one() {
        let mut current = IntensityGrid::new(5, 5);
        current.place_cell(2, 2, 1);
        let mut next = IntensityGrid::new(5, 5);

        let mut rng = Lcg::new(9, 12345);
        growth_step(&current, &mut next, &mut rng);

        assert_eq!(next.active_count(), 1);
    }

    #[test]
    fn existing_cells_are_never_overwritten_by_growth() {
        let mut grid = IntensityGrid::new(12, 12);
        let mut rng = Seed::CLASSIC.rng();
        spawn(&mut grid, 30, 255, &mut rng);
        let before = grid.clone();

        let mut next = grid.clone();
        for _ in 0..20 {
            growth_step(&grid, &mut next, &mut rng);
            std::mem::swap(&mut grid, &mut next);
        }

        for (old, new) in before.cells().iter().zip(grid.cells()) {
            if *old != 0 {
                assert_eq!(old, new);
            }
        }
    }
}
