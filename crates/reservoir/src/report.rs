//! Tile counts over a filled grid.

use std::fmt;

use crate::cell::Tile;
use crate::Grid;

/// How much of the scan the spring's water touched, and how much of that
/// stays once the spring runs dry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct WaterReport {
    /// Tiles holding falling or resting water.
    pub reachable: usize,
    /// Tiles holding resting water.
    pub retained: usize,
}

impl WaterReport {
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            reachable: grid.count(Tile::is_water),
            retained: grid.count(|t| t == Tile::RestingWater),
        }
    }
}

impl fmt::Display for WaterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tiles reachable by water: {}", self.reachable)?;
        write!(f, "Tiles retaining water: {}", self.retained)
    }
}
