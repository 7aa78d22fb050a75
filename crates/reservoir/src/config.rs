//! Simulation parameters.

/// Column of the spring. Water enters at this column on the topmost clay row.
pub const DEFAULT_SPRING_X: i32 = 500;

/// Spare columns added on each side of the scanned clay so overflow has
/// somewhere to fall.
pub const DEFAULT_MARGIN: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReservoirConfig {
    pub spring_x: i32,
    pub margin: i32,
}

impl Default for ReservoirConfig {
    fn default() -> Self {
        Self {
            spring_x: DEFAULT_SPRING_X,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl ReservoirConfig {
    #[must_use]
    pub fn with_spring_x(mut self, spring_x: i32) -> Self {
        self.spring_x = spring_x;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ReservoirConfig::default();
        assert_eq!(config.spring_x, 500);
        assert_eq!(config.margin, 1);
    }

    #[test]
    fn with_spring_x_keeps_margin() {
        let config = ReservoirConfig::default().with_spring_x(12);
        assert_eq!(config.spring_x, 12);
        assert_eq!(config.margin, DEFAULT_MARGIN);
    }
}
