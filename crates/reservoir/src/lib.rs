//! Groundwater reservoir simulator.
//!
//! A spring pours water onto a vertical slice of sand threaded with clay
//! veins. [`flow::fill`] works out which tiles the water only passes through
//! and which it pools in. [`report::WaterReport`] counts both.

pub mod api;
pub mod cell;
pub mod config;
pub mod error;
pub mod flow;
pub mod report;
pub mod scan;

use std::fmt;

use cell::{Cell, Tile};
use log::debug;
use scan::Scan;

pub use config::ReservoirConfig;
pub use error::ReservoirError;

/// Clay and water over an absolute-coordinate region.
/// Out-of-bounds reads return Sand, out-of-bounds writes panic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    min_x: i32,
    min_y: i32,
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

fn span(min: i32, max: i32) -> usize {
    usize::try_from(i64::from(max) - i64::from(min) + 1).unwrap_or(0)
}

impl Grid {
    /// All-sand grid covering `min_x..=max_x` by `min_y..=max_y`.
    #[must_use]
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        let width = span(min_x, max_x);
        let height = span(min_y, max_y);
        Self {
            min_x,
            min_y,
            width,
            height,
            cells: vec![Cell::Sand; width * height],
        }
    }

    /// Grid sized to the scan, `margin` spare columns on each side, with
    /// every vein painted as clay.
    ///
    /// # Errors
    ///
    /// [`ReservoirError::InvalidMargin`] when `margin` is below 1: overflow at
    /// the outermost clay would otherwise spill outside the grid.
    pub fn from_scan(scan: &Scan, margin: i32) -> Result<Self, ReservoirError> {
        if margin < 1 {
            return Err(ReservoirError::InvalidMargin { margin });
        }
        let bounds = scan.bounds(margin);
        let mut grid = Self::new(bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y);
        for vein in scan.veins() {
            for (x, y) in vein.cells() {
                grid.put(x, y, Cell::Clay);
            }
        }
        debug!(
            "built {}x{} grid at ({}, {}) with {} clay tiles from {} veins",
            grid.width,
            grid.height,
            grid.min_x,
            grid.min_y,
            grid.count(|t| t == Tile::Clay),
            scan.veins().len()
        );
        Ok(grid)
    }

    #[must_use]
    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> i32 {
        self.min_x + self.width as i32 - 1
    }

    #[must_use]
    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> i32 {
        self.min_y + self.height as i32 - 1
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let col = usize::try_from(i64::from(x) - i64::from(self.min_x))
            .ok()
            .filter(|&col| col < self.width)?;
        let row = usize::try_from(i64::from(y) - i64::from(self.min_y))
            .ok()
            .filter(|&row| row < self.height)?;
        Some(row * self.width + col)
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Tile at `(x, y)`; Sand anywhere outside the grid.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Tile {
        self.cell(x, y).tile()
    }

    /// Write a tile.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is outside the grid.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        self.put(x, y, tile.into());
    }

    /// Count tiles matching `predicate` over the whole grid.
    pub fn count(&self, predicate: impl Fn(Tile) -> bool) -> usize {
        self.cells.iter().filter(|cell| predicate(cell.tile())).count()
    }

    pub(crate) fn cell(&self, x: i32, y: i32) -> Cell {
        self.index(x, y).map_or(Cell::Sand, |i| self.cells[i])
    }

    pub(crate) fn put(&mut self, x: i32, y: i32, cell: Cell) {
        let Some(i) = self.index(x, y) else {
            panic!(
                "write of {cell:?} at ({x}, {y}) outside grid {}..={} x {}..={}",
                self.min_x(),
                self.max_x(),
                self.min_y(),
                self.max_y()
            );
        };
        self.cells[i] = cell;
    }
}

impl fmt::Display for Grid {
    /// One line per row, top to bottom, using [`Tile::glyph`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.tile().glyph())?;
            }
        }
        Ok(())
    }
}

/// Build the grid for `scan` and fill it from the configured spring.
///
/// # Errors
///
/// Any precondition failure from [`Grid::from_scan`] or [`flow::fill`].
pub fn simulate(scan: &Scan, config: &ReservoirConfig) -> Result<Grid, ReservoirError> {
    let mut grid = Grid::from_scan(scan, config.margin)?;
    flow::fill(&mut grid, config.spring_x)?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::Vein;
    use proptest::prelude::*;

    fn arb_tile() -> impl Strategy<Value = Tile> {
        prop_oneof![
            Just(Tile::Sand),
            Just(Tile::Clay),
            Just(Tile::FallingWater),
            Just(Tile::RestingWater),
        ]
    }

    #[test]
    fn grid_new_initializes_all_sand() {
        let grid = Grid::new(10, 19, -5, 4);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.cells.len(), 100);
        assert_eq!((grid.min_x(), grid.max_x()), (10, 19));
        assert_eq!((grid.min_y(), grid.max_y()), (-5, 4));
        assert_eq!(grid.count(|t| t == Tile::Sand), 100);
    }

    #[test]
    fn grid_new_with_inverted_bounds_is_empty() {
        let grid = Grid::new(5, 4, 0, 3);
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.count(|_| true), 0);
        assert!(!grid.in_bounds(5, 0));
    }

    #[test]
    fn grid_get_set_in_bounds() {
        let mut grid = Grid::new(490, 510, 1, 20);
        grid.set(500, 7, Tile::Clay);
        assert_eq!(grid.get(500, 7), Tile::Clay);
        grid.set(490, 1, Tile::RestingWater);
        grid.set(510, 20, Tile::FallingWater);
        assert_eq!(grid.get(490, 1), Tile::RestingWater);
        assert_eq!(grid.get(510, 20), Tile::FallingWater);
    }

    #[test]
    fn grid_get_out_of_bounds_returns_sand() {
        let mut grid = Grid::new(0, 3, 0, 3);
        for x in 0..4 {
            for y in 0..4 {
                grid.set(x, y, Tile::Clay);
            }
        }
        assert_eq!(grid.get(-1, 0), Tile::Sand);
        assert_eq!(grid.get(0, -1), Tile::Sand);
        assert_eq!(grid.get(4, 0), Tile::Sand);
        assert_eq!(grid.get(0, 4), Tile::Sand);
        assert_eq!(grid.get(i32::MIN, i32::MAX), Tile::Sand);
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn grid_set_out_of_bounds_panics() {
        let mut grid = Grid::new(0, 3, 0, 3);
        grid.set(4, 0, Tile::FallingWater);
    }

    #[test]
    fn grid_in_bounds_checks() {
        let grid = Grid::new(-2, 2, 10, 12);
        assert!(grid.in_bounds(-2, 10));
        assert!(grid.in_bounds(2, 12));
        assert!(!grid.in_bounds(-3, 10));
        assert!(!grid.in_bounds(3, 10));
        assert!(!grid.in_bounds(0, 9));
        assert!(!grid.in_bounds(0, 13));
    }

    #[test]
    fn from_scan_paints_veins_inside_margin() {
        let scan = Scan::from_veins(vec![Vein::new(3, 3, 2, 4), Vein::new(3, 6, 4, 4)]).unwrap();
        let grid = Grid::from_scan(&scan, 1).unwrap();
        assert_eq!((grid.min_x(), grid.max_x()), (2, 7));
        assert_eq!((grid.min_y(), grid.max_y()), (2, 4));
        assert_eq!(grid.count(|t| t == Tile::Clay), 6);
        assert_eq!(grid.to_string(), ".#....\n.#....\n.####.");
    }

    #[test]
    fn from_scan_rejects_zero_margin() {
        let scan = Scan::from_veins(vec![Vein::new(3, 3, 2, 4)]).unwrap();
        assert!(matches!(
            Grid::from_scan(&scan, 0),
            Err(ReservoirError::InvalidMargin { margin: 0 })
        ));
    }

    #[test]
    fn count_matches_predicate_over_whole_grid() {
        let mut grid = Grid::new(0, 4, 0, 1);
        grid.set(0, 0, Tile::FallingWater);
        grid.set(1, 0, Tile::RestingWater);
        grid.set(2, 1, Tile::Clay);
        assert_eq!(grid.count(Tile::is_water), 2);
        assert_eq!(grid.count(|t| t == Tile::RestingWater), 1);
        assert_eq!(grid.count(|_| true), 10);
    }

    #[test]
    fn simulate_fills_sample_scan() {
        let scan: Scan = scan::SAMPLE_SCAN.parse().unwrap();
        let grid = simulate(&scan, &ReservoirConfig::default()).unwrap();
        assert_eq!(grid.count(Tile::is_water), 57);
        assert_eq!(grid.count(|t| t == Tile::RestingWater), 29);
    }

    proptest! {
        #[test]
        fn prop_grid_in_bounds_get_set_round_trip(
            x in -50i32..50,
            y in 0i32..100,
            tile in arb_tile(),
        ) {
            let mut grid = Grid::new(-50, 49, 0, 99);
            grid.set(x, y, tile);
            prop_assert_eq!(grid.get(x, y), tile);
        }
    }

    proptest! {
        #[test]
        fn prop_grid_out_of_bounds_reads_sand(
            x in prop_oneof![(-1000i32..-50), (50i32..1000)],
            y in prop_oneof![(-1000i32..0), (100i32..1000)],
        ) {
            let mut grid = Grid::new(-50, 49, 0, 99);
            for cell in &mut grid.cells {
                *cell = Cell::Clay;
            }
            prop_assert_eq!(grid.get(x, y), Tile::Sand);
            prop_assert_eq!(grid.get(x, 50), Tile::Sand);
            prop_assert_eq!(grid.get(0, y), Tile::Sand);
        }
    }
}
