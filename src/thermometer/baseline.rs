use super::{ColumnIndexTable, RangeConfig};

/// Degrees moved per adjustment.
const STEP: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Holds the baseline the readings are centred on, and the legend table
/// derived from the range.
#[derive(Debug, Clone)]
pub struct BaselineController {
    range: RangeConfig,
    baseline: f64,
    column_index: ColumnIndexTable,
}

impl BaselineController {
    pub fn new(range: RangeConfig, initial: f64) -> Self {
        Self {
            range,
            baseline: initial,
            column_index: ColumnIndexTable::new(&range),
        }
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn column_index(&self) -> &ColumnIndexTable {
        &self.column_index
    }

    /// Move the baseline one degree, staying inside `[min, max]`. The legend
    /// table is rebuilt after every call, including a no-op at a bound.
    pub fn adjust(&mut self, direction: Direction) -> f64 {
        let previous = self.baseline;
        match direction {
            Direction::Up if self.baseline < self.range.max => {
                self.baseline = (self.baseline + STEP).min(self.range.max);
            }
            Direction::Down if self.baseline > self.range.min => {
                self.baseline = (self.baseline - STEP).max(self.range.min);
            }
            _ => {}
        }
        self.column_index.recompute(&self.range);
        tracing::debug!(?direction, previous, baseline = self.baseline, "baseline adjusted");
        self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(initial: f64) -> BaselineController {
        BaselineController::new(RangeConfig::default(), initial)
    }

    #[test]
    fn test_starts_at_initial_baseline() {
        let c = controller(25.0);
        assert_eq!(c.baseline(), 25.0);
        assert_eq!(c.column_index().threshold(5), Some(25.0));
    }

    #[test]
    fn test_adjust_moves_one_degree() {
        let mut c = controller(25.0);
        assert_eq!(c.adjust(Direction::Up), 26.0);
        assert_eq!(c.adjust(Direction::Down), 25.0);
        assert_eq!(c.adjust(Direction::Down), 24.0);
    }

    #[test]
    fn test_clamped_at_max() {
        let mut c = controller(35.0);
        assert_eq!(c.adjust(Direction::Up), 35.0);
    }

    #[test]
    fn test_clamped_at_min() {
        let mut c = controller(15.0);
        assert_eq!(c.adjust(Direction::Down), 15.0);
    }

    #[test]
    fn test_fractional_baseline_stops_at_max() {
        let mut c = controller(34.5);
        assert_eq!(c.adjust(Direction::Up), 35.0);
        assert_eq!(c.adjust(Direction::Up), 35.0);
        assert_eq!(c.adjust(Direction::Down), 34.0);
    }

    #[test]
    fn test_fractional_baseline_stops_at_min() {
        let mut c = controller(15.5);
        assert_eq!(c.adjust(Direction::Down), 15.0);
        assert_eq!(c.adjust(Direction::Down), 15.0);
        assert_eq!(c.adjust(Direction::Up), 16.0);
    }

    #[test]
    fn test_repeated_presses_never_leave_range() {
        let mut c = controller(25.0);
        for _ in 0..30 {
            c.adjust(Direction::Up);
        }
        assert_eq!(c.baseline(), 35.0);
        for _ in 0..30 {
            c.adjust(Direction::Down);
        }
        assert_eq!(c.baseline(), 15.0);
    }

    #[test]
    fn test_adjust_keeps_table_intact() {
        let mut c = controller(35.0);
        let before = c.column_index().clone();
        c.adjust(Direction::Up);
        assert_eq!(c.column_index(), &before);
    }
}
