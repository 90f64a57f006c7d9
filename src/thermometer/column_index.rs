use std::collections::BTreeMap;

use super::RangeConfig;

/// Number of discrete column levels on the thermometer.
pub const LEVELS: u8 = 10;

/// Per-level legend thresholds: `threshold(lvl) = min + step * lvl`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnIndexTable {
    thresholds: BTreeMap<u8, f64>,
}

impl ColumnIndexTable {
    pub fn new(range: &RangeConfig) -> Self {
        let mut table = Self {
            thresholds: BTreeMap::new(),
        };
        table.recompute(range);
        table
    }

    /// Rebuild every threshold from the range. The table is swapped in whole,
    /// never patched level by level.
    pub fn recompute(&mut self, range: &RangeConfig) {
        let step = range.span() / f64::from(LEVELS);
        let mut fresh = BTreeMap::new();
        for lvl in (1..=LEVELS).rev() {
            fresh.insert(lvl, range.min + step * f64::from(lvl));
        }
        self.thresholds = fresh;
    }

    /// Threshold for `lvl`, or `None` outside `1..=LEVELS`.
    pub fn threshold(&self, lvl: u8) -> Option<f64> {
        self.thresholds.get(&lvl).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.thresholds.iter().map(|(lvl, t)| (*lvl, *t))
    }

    /// Whether the legend read-out for `temp` belongs on level `lvl`.
    ///
    /// The top level catches everything at or above its threshold and the bottom
    /// level everything at or below its own; the levels between are half-open
    /// `[threshold(lvl), threshold(lvl + 1))`.
    pub fn label_fires(&self, lvl: u8, temp: f64) -> bool {
        let Some(lower) = self.threshold(lvl) else {
            return false;
        };
        if lvl == LEVELS {
            temp >= lower
        } else if lvl == 1 {
            temp <= lower
        } else {
            match self.threshold(lvl + 1) {
                Some(upper) => temp >= lower && temp < upper,
                None => false,
            }
        }
    }
}
