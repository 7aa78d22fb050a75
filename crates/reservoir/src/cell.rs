//! Tile and Cell types for the reservoir grid.

use std::fmt;

/// Observable state of a grid position.
///
/// Discriminants match the first four `Cell` variants so a stored cell maps
/// onto its tile without a lookup.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Tile {
    #[default]
    Sand = 0,
    Clay = 1,
    FallingWater = 2,
    RestingWater = 3,
}

impl Tile {
    /// Falling or resting water.
    #[must_use]
    pub fn is_water(self) -> bool {
        matches!(self, Self::FallingWater | Self::RestingWater)
    }

    /// Water landing on this tile stops falling and spreads sideways.
    #[must_use]
    pub fn is_obstruction(self) -> bool {
        matches!(self, Self::Clay | Self::RestingWater)
    }

    /// Glyph used by the text rendering of a grid.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Sand => '.',
            Self::Clay => '#',
            Self::FallingWater => '|',
            Self::RestingWater => '~',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sand => write!(f, "Sand"),
            Self::Clay => write!(f, "Clay"),
            Self::FallingWater => write!(f, "FallingWater"),
            Self::RestingWater => write!(f, "RestingWater"),
        }
    }
}

/// Stored grid cell: a [`Tile`] or one of the row markers the resolver
/// leaves behind while the row it belongs to is still unresolved.
///
/// `LeftBlocked` means a leftward probe from here ran into clay,
/// `RightBlocked` the same for a rightward probe. Both read as falling water.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub(crate) enum Cell {
    #[default]
    Sand = 0,
    Clay = 1,
    FallingWater = 2,
    RestingWater = 3,
    LeftBlocked = 4,
    RightBlocked = 5,
}

impl Cell {
    pub(crate) fn tile(self) -> Tile {
        match self {
            Self::Sand => Tile::Sand,
            Self::Clay => Tile::Clay,
            Self::FallingWater | Self::LeftBlocked | Self::RightBlocked => Tile::FallingWater,
            Self::RestingWater => Tile::RestingWater,
        }
    }

    pub(crate) fn is_marker(self) -> bool {
        matches!(self, Self::LeftBlocked | Self::RightBlocked)
    }

    pub(crate) fn is_obstruction(self) -> bool {
        matches!(self, Self::Clay | Self::RestingWater)
    }

    /// Result of a leftward probe that hit a wall.
    pub(crate) fn blocks_left(self) -> bool {
        matches!(self, Self::Clay | Self::LeftBlocked)
    }

    /// Result of a rightward probe that hit a wall.
    pub(crate) fn blocks_right(self) -> bool {
        matches!(self, Self::Clay | Self::RightBlocked)
    }
}

impl From<Tile> for Cell {
    fn from(tile: Tile) -> Self {
        match tile {
            Tile::Sand => Self::Sand,
            Tile::Clay => Self::Clay,
            Tile::FallingWater => Self::FallingWater,
            Tile::RestingWater => Self::RestingWater,
        }
    }
}
