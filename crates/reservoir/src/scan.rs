//! Clay scan parsing.
//!
//! A scan lists one vein of clay per line, either vertical (`x=495, y=2..7`)
//! or horizontal (`y=7, x=495..501`). Ranges are inclusive.

use std::str::FromStr;

use crate::error::{ParseVeinError, ReservoirError};

/// Inclusive, axis-aligned rectangle of clay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vein {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Vein {
    #[must_use]
    pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Every clay coordinate in the vein, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.y_min..=self.y_max).flat_map(move |y| (self.x_min..=self.x_max).map(move |x| (x, y)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

fn parse_coord(s: &str) -> Result<i32, ParseVeinError> {
    s.trim()
        .parse()
        .map_err(|e| ParseVeinError::new(format!("bad coordinate {s:?}: {e}")))
}

/// `x=12` or `y=3..9`.
fn parse_axis(s: &str) -> Result<(Axis, i32, i32), ParseVeinError> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| ParseVeinError::new(format!("missing '=' in {:?}", s.trim())))?;
    let axis = match name.trim() {
        "x" => Axis::X,
        "y" => Axis::Y,
        other => return Err(ParseVeinError::new(format!("unknown axis {other:?}"))),
    };
    let (lo, hi) = match value.split_once("..") {
        Some((lo, hi)) => (parse_coord(lo)?, parse_coord(hi)?),
        None => {
            let v = parse_coord(value)?;
            (v, v)
        }
    };
    if lo > hi {
        return Err(ParseVeinError::new(format!("empty range {lo}..{hi}")));
    }
    Ok((axis, lo, hi))
}

impl FromStr for Vein {
    type Err = ParseVeinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = s
            .split_once(',')
            .ok_or_else(|| ParseVeinError::new(format!("missing ',' in {:?}", s.trim())))?;
        match (parse_axis(first)?, parse_axis(second)?) {
            ((Axis::X, x_min, x_max), (Axis::Y, y_min, y_max))
            | ((Axis::Y, y_min, y_max), (Axis::X, x_min, x_max)) => {
                Ok(Vein::new(x_min, x_max, y_min, y_max))
            }
            _ => Err(ParseVeinError::new("vein needs one x and one y range")),
        }
    }
}

/// Region a scan covers, widened horizontally by the grid margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

/// Non-empty list of clay veins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scan {
    veins: Vec<Vein>,
}

impl Scan {
    /// Wraps veins that were parsed or generated elsewhere.
    ///
    /// # Errors
    ///
    /// [`ReservoirError::EmptyScan`] when `veins` is empty.
    pub fn from_veins(veins: Vec<Vein>) -> Result<Self, ReservoirError> {
        if veins.is_empty() {
            return Err(ReservoirError::EmptyScan);
        }
        Ok(Self { veins })
    }

    /// One vein per line; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// [`ReservoirError::Parse`] naming the first bad line, or
    /// [`ReservoirError::EmptyScan`] when no line holds a vein.
    pub fn parse(text: &str) -> Result<Self, ReservoirError> {
        let veins = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                line.parse::<Vein>()
                    .map_err(|source| ReservoirError::Parse { line: i + 1, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_veins(veins)
    }

    #[must_use]
    pub fn veins(&self) -> &[Vein] {
        &self.veins
    }

    /// Rows run from the topmost to the bottommost clay. Columns get `margin`
    /// extra on each side.
    #[must_use]
    pub fn bounds(&self, margin: i32) -> Bounds {
        let fold = self.veins.iter().fold(
            Bounds {
                min_x: i32::MAX,
                max_x: i32::MIN,
                min_y: i32::MAX,
                max_y: i32::MIN,
            },
            |b, v| Bounds {
                min_x: b.min_x.min(v.x_min),
                max_x: b.max_x.max(v.x_max),
                min_y: b.min_y.min(v.y_min),
                max_y: b.max_y.max(v.y_max),
            },
        );
        Bounds {
            min_x: fold.min_x.saturating_sub(margin),
            max_x: fold.max_x.saturating_add(margin),
            ..fold
        }
    }
}

impl FromStr for Scan {
    type Err = ReservoirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Puzzle sample: 57 tiles wet, 29 of them resting, with the spring at x=500.
#[cfg(test)]
pub(crate) const SAMPLE_SCAN: &str = "x=495, y=2..7
y=7, x=495..501
x=501, y=3..7
x=498, y=2..4
x=506, y=1..2
x=498, y=10..13
x=504, y=10..13
y=13, x=498..504
";
