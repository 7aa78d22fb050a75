//! Error types for scanning, grid construction and filling.

use std::fmt;

/// A single vein line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVeinError {
    reason: String,
}

impl ParseVeinError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for ParseVeinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for ParseVeinError {}

/// Errors surfaced before a fill starts.
///
/// A fill over a well-formed grid cannot fail halfway; every failure here is
/// either bad input or a precondition the caller got wrong.
#[derive(Debug)]
pub enum ReservoirError {
    /// Vein line `line` (1-based) is malformed.
    Parse { line: usize, source: ParseVeinError },
    /// The scan holds no veins, so there is no region to fill.
    EmptyScan,
    /// Grids need at least one spare column on each side for water to spill into.
    InvalidMargin { margin: i32 },
    /// Spring column lies outside the grid.
    SpringOutOfBounds { x: i32, min_x: i32, max_x: i32 },
    /// Spring cell is clay.
    SpringBlocked { x: i32, y: i32 },
    /// Reading the scan failed.
    Io(std::io::Error),
}

impl fmt::Display for ReservoirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, source } => write!(f, "Invalid vein on line {line}: {source}"),
            Self::EmptyScan => write!(f, "Scan contains no clay veins"),
            Self::InvalidMargin { margin } => {
                write!(f, "Grid margin must be at least 1 column, got {margin}")
            }
            Self::SpringOutOfBounds { x, min_x, max_x } => write!(
                f,
                "Spring at x={x} lies outside the scanned columns {min_x}..={max_x}"
            ),
            Self::SpringBlocked { x, y } => write!(f, "Spring at ({x}, {y}) is inside clay"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ReservoirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReservoirError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
