//! Flow resolver: classifies every tile the spring's water reaches.
//!
//! Water falls until it lands on clay or resting water, then probes left and
//! right along that row. A sideways probe that runs into clay leaves a
//! blocked marker, which the cell that started the spread reads back: a row
//! blocked on both sides becomes resting water, anything else keeps falling.
//! Rows that fill can turn the row above into a basin too, which is how
//! reservoirs build up from the bottom.
//!
//! The depth-first walk runs on an explicit stack of frames so that tall
//! scans do not exhaust the native call stack.

mod spread;


use log::debug;

use crate::cell::{Cell, Tile};
use crate::error::ReservoirError;
use crate::Grid;

/// Where a suspended frame resumes once the probe it pushed has resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Enter,
    Below,
    Left,
    Right,
}

/// How a frame was reached. A frame entered from above owns the row
/// segment its sideways probes spread over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Entry {
    Above,
    Side,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    x: i32,
    y: i32,
    entry: Entry,
    step: Step,
    /// Result of the left probe, held until the right probe returns.
    left: Cell,
}

impl Frame {
    fn new(x: i32, y: i32, entry: Entry) -> Self {
        Self {
            x,
            y,
            entry,
            step: Step::Enter,
            left: Cell::Sand,
        }
    }
}

#[derive(Debug)]
struct Resolver<'a> {
    grid: &'a mut Grid,
    stack: Vec<Frame>,
    peak_depth: usize,
    floods: usize,
}

impl<'a> Resolver<'a> {
    fn new(grid: &'a mut Grid) -> Self {
        let capacity = grid.height() + grid.width();
        Self {
            grid,
            stack: Vec::with_capacity(capacity),
            peak_depth: 0,
            floods: 0,
        }
    }

    /// Park `frame` at `step` and resolve `probe` first.
    fn suspend(&mut self, mut frame: Frame, step: Step, probe: Frame) {
        frame.step = step;
        self.stack.push(frame);
        self.stack.push(probe);
        self.peak_depth = self.peak_depth.max(self.stack.len());
    }

    /// Final state of `(x, y)`. `resolved` always holds the result of the
    /// most recently finished frame, which is what its parent resumes with.
    fn run(&mut self, x: i32, y: i32) -> Cell {
        self.stack.push(Frame::new(x, y, Entry::Above));
        self.peak_depth = self.peak_depth.max(1);
        let mut resolved = Cell::Sand;

        while let Some(mut frame) = self.stack.pop() {
            let (x, y) = (frame.x, frame.y);
            match frame.step {
                Step::Enter => {
                    // Past the lowest clay: the water is lost.
                    if y > self.grid.max_y() {
                        resolved = Cell::FallingWater;
                        continue;
                    }
                    let current = self.grid.cell(x, y);
                    if current != Cell::Sand {
                        resolved = current;
                        continue;
                    }
                    self.grid.put(x, y, Cell::FallingWater);
                    self.suspend(frame, Step::Below, Frame::new(x, y + 1, Entry::Above));
                }
                Step::Below => {
                    if resolved.is_obstruction() {
                        self.suspend(frame, Step::Left, Frame::new(x - 1, y, Entry::Side));
                    } else {
                        resolved = self.grid.cell(x, y);
                    }
                }
                Step::Left => {
                    frame.left = resolved;
                    self.suspend(frame, Step::Right, Frame::new(x + 1, y, Entry::Side));
                }
                Step::Right => {
                    resolved = self.decide(frame, resolved);
                }
            }
        }
        resolved
    }

    /// Settle a cell whose row probes have both returned.
    fn decide(&mut self, frame: Frame, right: Cell) -> Cell {
        let (x, y) = (frame.x, frame.y);
        let blocked_left = frame.left.blocks_left();
        let blocked_right = right.blocks_right();

        if blocked_left && blocked_right {
            spread::flood_resting(self.grid, x, y);
            self.floods += 1;
        } else if blocked_left {
            self.grid.put(x, y, Cell::LeftBlocked);
        } else if blocked_right {
            self.grid.put(x, y, Cell::RightBlocked);
        } else {
            self.grid.put(x, y, Cell::FallingWater);
        }

        // The segment is finished once the frame that landed on it decides.
        if frame.entry == Entry::Above {
            spread::settle_markers(self.grid, x, y);
        }
        self.grid.cell(x, y)
    }
}

/// Resolve `(x, y)` and everything below and beside it that water reaches,
/// returning the tile `(x, y)` settles into.
///
/// Tiles that are already wet or clay are returned as-is, so resolving a
/// filled grid again changes nothing.
///
/// # Panics
///
/// If water would have to be written outside the grid, which only happens
/// when `x` itself is outside it or clay touches the grid's side columns.
pub fn resolve(grid: &mut Grid, x: i32, y: i32) -> Tile {
    Resolver::new(grid).run(x, y).tile()
}

/// Fill the grid from a spring at column `spring_x` on the top row.
///
/// # Errors
///
/// [`ReservoirError::SpringOutOfBounds`] when the column is outside the grid,
/// [`ReservoirError::SpringBlocked`] when the spring tile is clay.
pub fn fill(grid: &mut Grid, spring_x: i32) -> Result<Tile, ReservoirError> {
    let y = grid.min_y();
    if spring_x < grid.min_x() || spring_x > grid.max_x() {
        return Err(ReservoirError::SpringOutOfBounds {
            x: spring_x,
            min_x: grid.min_x(),
            max_x: grid.max_x(),
        });
    }
    if grid.get(spring_x, y) == Tile::Clay {
        return Err(ReservoirError::SpringBlocked { x: spring_x, y });
    }

    debug!("filling from spring at ({spring_x}, {y})");
    let mut resolver = Resolver::new(grid);
    let tile = resolver.run(spring_x, y).tile();
    debug!(
        "spring settled as {tile}: {} basin rows flooded, work stack peaked at {} frames",
        resolver.floods, resolver.peak_depth
    );
    Ok(tile)
}
