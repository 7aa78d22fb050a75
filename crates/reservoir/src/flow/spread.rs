//! Row-level writes made once a spread has been decided.

use log::trace;

use crate::cell::Cell;
use crate::Grid;

/// Turn the basin row around `(x, y)` into resting water, stopping at clay
/// or water that already rests. Returns the number of tiles written.
pub(super) fn flood_resting(grid: &mut Grid, x: i32, y: i32) -> usize {
    grid.put(x, y, Cell::RestingWater);
    let mut filled = 1;
    for dx in [-1, 1] {
        let mut cx = x + dx;
        while !matches!(grid.cell(cx, y), Cell::Clay | Cell::RestingWater) {
            grid.put(cx, y, Cell::RestingWater);
            filled += 1;
            cx += dx;
        }
    }
    trace!("row {y} pooled {filled} tiles around x={x}");
    filled
}

/// Rewrite blocked markers on the segment that spread from `(x, y)` back to
/// falling water.
///
/// The segment ends at clay, sand, resting water, or after a tile that
/// spills (nothing solid beneath it).
pub(super) fn settle_markers(grid: &mut Grid, x: i32, y: i32) {
    if grid.cell(x, y).is_marker() {
        grid.put(x, y, Cell::FallingWater);
    }
    for dx in [-1, 1] {
        let mut cx = x + dx;
        loop {
            match grid.cell(cx, y) {
                Cell::LeftBlocked | Cell::RightBlocked => grid.put(cx, y, Cell::FallingWater),
                Cell::FallingWater => {}
                Cell::Sand | Cell::Clay | Cell::RestingWater => break,
            }
            if !grid.cell(cx, y + 1).is_obstruction() {
                break;
            }
            cx += dx;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Tile;

    fn cup() -> Grid {
        // #...#
        // #####
        let mut grid = Grid::new(-1, 5, 0, 1);
        for x in 0..=4 {
            grid.set(x, 1, Tile::Clay);
        }
        grid.set(0, 0, Tile::Clay);
        grid.set(4, 0, Tile::Clay);
        grid
    }

    #[test]
    fn flood_stops_at_clay() {
        let mut grid = cup();
        grid.put(1, 0, Cell::LeftBlocked);
        grid.put(2, 0, Cell::FallingWater);
        grid.put(3, 0, Cell::RightBlocked);
        assert_eq!(flood_resting(&mut grid, 2, 0), 3);
        assert_eq!(grid.to_string(), ".#~~~#.\n.#####.");
    }

    #[test]
    fn flood_stops_at_resting_water() {
        let mut grid = cup();
        grid.put(1, 0, Cell::RestingWater);
        grid.put(2, 0, Cell::FallingWater);
        grid.put(3, 0, Cell::FallingWater);
        assert_eq!(flood_resting(&mut grid, 3, 0), 2);
        assert_eq!(grid.count(|t| t == Tile::RestingWater), 3);
    }

    #[test]
    fn settle_clears_markers_up_to_the_spill() {
        // Markers over the clay at 1..=4, spills at 0 and 5.
        let mut grid = Grid::new(0, 7, 0, 1);
        for x in 1..=4 {
            grid.set(x, 1, Tile::Clay);
        }
        grid.put(0, 0, Cell::FallingWater);
        grid.put(1, 0, Cell::LeftBlocked);
        grid.put(2, 0, Cell::LeftBlocked);
        grid.put(3, 0, Cell::LeftBlocked);
        grid.put(4, 0, Cell::LeftBlocked);
        grid.put(5, 0, Cell::FallingWater);
        grid.put(6, 0, Cell::RightBlocked);

        settle_markers(&mut grid, 2, 0);

        assert!((0..=5).all(|x| grid.cell(x, 0) == Cell::FallingWater));
        // Past the spill at x=5 belongs to another segment.
        assert_eq!(grid.cell(6, 0), Cell::RightBlocked);
    }
}
