//! WASM-facing handle over a filled reservoir.

use wasm_bindgen::prelude::*;

use crate::config::{ReservoirConfig, DEFAULT_MARGIN};
use crate::report::WaterReport;
use crate::scan::Scan;
use crate::{simulate, Grid, ReservoirError};

/// Scan parsed, grid built and filled once at construction; read-only after.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Reservoir {
    grid: Grid,
    report: WaterReport,
}

impl Reservoir {
    /// Native entry point behind the JS constructor.
    ///
    /// # Errors
    ///
    /// Whatever [`Scan::parse`] or [`simulate`] rejects.
    pub fn from_scan(scan: &str, config: &ReservoirConfig) -> Result<Self, ReservoirError> {
        let scan = Scan::parse(scan)?;
        let grid = simulate(&scan, config)?;
        let report = WaterReport::from_grid(&grid);
        Ok(Self { grid, report })
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn report(&self) -> WaterReport {
        self.report
    }
}

#[wasm_bindgen]
impl Reservoir {
    /// # Errors
    ///
    /// A JS error carrying the [`ReservoirError`] message.
    #[wasm_bindgen(constructor)]
    pub fn new(scan: &str, spring_x: i32) -> Result<Reservoir, JsError> {
        let config = ReservoirConfig {
            spring_x,
            margin: DEFAULT_MARGIN,
        };
        Ok(Self::from_scan(scan, &config)?)
    }

    #[must_use]
    pub fn reachable(&self) -> usize {
        self.report.reachable
    }

    #[must_use]
    pub fn retained(&self) -> usize {
        self.report.retained
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Text picture of the grid, one line per row.
    #[must_use]
    pub fn render(&self) -> String {
        self.grid.to_string()
    }
}
