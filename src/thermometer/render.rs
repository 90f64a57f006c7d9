//! ANSI thermometer frame.
//!
//! Produces the frame as plain lines with embedded SGR colour codes; writing
//! them to a terminal (and clearing the previous frame) is the display's job.
//!
//! ```text
//! Use Up/Down Arrow key to change the base temperature
//!
//!            ┌─┐
//!            │ │
//!            ...
//!            │█│  25°C
//!            ...
//!            │█│
//!           ╱███╲
//!          │█████│
//!          │█████│
//!           ╲███╱
//!
//!     Current: 25°C
//! ```

use super::{ColumnIndexTable, LEVELS, RangeConfig};

pub const HEADER: &str = "Use Up/Down Arrow key to change the base temperature";
pub const RESET: &str = "\x1b[0m";

const INDENT: &str = "           ";
const SPACER: &str = "     ";

/// Colour band a reading falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempBand {
    Cool,
    Neutral,
    Hot,
}

impl TempBand {
    /// `temp < low` cool, `low <= temp < high` neutral, otherwise hot.
    pub fn classify(temp: f64, range: &RangeConfig) -> Self {
        if temp < range.low_temp {
            TempBand::Cool
        } else if temp < range.high_temp {
            TempBand::Neutral
        } else {
            TempBand::Hot
        }
    }

    /// 256-colour foreground escape for the band.
    pub fn ansi(self) -> &'static str {
        match self {
            TempBand::Cool => "\x1b[38;5;117m",
            TempBand::Neutral => "\x1b[38;5;14m",
            TempBand::Hot => "\x1b[38;5;196m",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThermometerRenderer {
    range: RangeConfig,
}

impl ThermometerRenderer {
    pub fn new(range: RangeConfig) -> Self {
        Self { range }
    }

    /// Number of lit column cells. Not clamped: below `min` this is negative,
    /// above `max` it exceeds `LEVELS`.
    pub fn mercury_level(&self, temp: f64) -> i32 {
        (((temp - self.range.min) / self.range.span()) * f64::from(LEVELS)).floor() as i32
    }

    pub fn band(&self, temp: f64) -> TempBand {
        TempBand::classify(temp, &self.range)
    }

    pub fn render(&self, temp: f64, column_index: &ColumnIndexTable) -> Vec<String> {
        let color = self.band(temp).ansi();
        let mercury = self.mercury_level(temp);
        let label = format!("{}°C", format_temp(temp));

        let mut lines = Vec::with_capacity(21);
        lines.push(HEADER.to_string());
        lines.push(String::new());
        lines.push(format!("{INDENT}┌─┐"));
        for lvl in (1..=LEVELS).rev() {
            let cell = if mercury >= i32::from(lvl) {
                format!("{color}█{RESET}")
            } else {
                " ".to_string()
            };
            let legend = if column_index.label_fires(lvl, temp) { label.as_str() } else { "" };
            lines.push(format!("{INDENT}│{cell}│  {legend}"));
        }
        lines.push(format!("{INDENT}│{color}█{RESET}│"));
        lines.push(format!("          ╱{color}███{RESET}╲"));
        lines.push(format!("         │{color}█████{RESET}│"));
        lines.push(format!("         │{color}█████{RESET}│"));
        lines.push(format!("          ╲{color}███{RESET}╱"));
        lines.push(SPACER.to_string());
        lines.push(format!("    Current: {color}{label}{RESET}"));
        lines.push(SPACER.to_string());
        lines
    }
}

/// Shortest decimal form: `25`, `25.3`. Negative zero prints as `0`.
pub fn format_temp(temp: f64) -> String {
    if temp == 0.0 {
        "0".to_string()
    } else {
        temp.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (ThermometerRenderer, ColumnIndexTable) {
        let range = RangeConfig::default();
        (ThermometerRenderer::new(range), ColumnIndexTable::new(&range))
    }

    /// Column rows of a rendered frame, level 10 first.
    fn column_rows(frame: &[String]) -> &[String] {
        &frame[3..13]
    }

    #[test]
    fn test_band_boundaries() {
        let (r, _) = setup();
        assert_eq!(r.band(21.9), TempBand::Cool);
        assert_eq!(r.band(22.0), TempBand::Neutral);
        assert_eq!(r.band(27.9), TempBand::Neutral);
        assert_eq!(r.band(28.0), TempBand::Hot);
    }

    #[test]
    fn test_mercury_level() {
        let (r, _) = setup();
        assert_eq!(r.mercury_level(15.0), 0);
        assert_eq!(r.mercury_level(25.0), 5);
        assert_eq!(r.mercury_level(35.0), 10);
        assert_eq!(r.mercury_level(14.0), -1);
        assert_eq!(r.mercury_level(36.9), 10);
        assert_eq!(r.mercury_level(37.0), 11);
    }

    #[test]
    fn test_frame_layout() {
        let (r, table) = setup();
        let frame = r.render(25.0, &table);
        assert_eq!(frame.len(), 21);
        assert_eq!(frame[0], HEADER);
        assert_eq!(frame[1], "");
        assert_eq!(frame[2], "           ┌─┐");
        assert_eq!(frame[13], format!("           │\x1b[38;5;14m█{RESET}│"));
        assert!(frame[14].starts_with("          ╱"));
        assert!(frame[17].starts_with("          ╲"));
        assert_eq!(frame[18], "     ");
        assert_eq!(frame[19], format!("    Current: \x1b[38;5;14m25°C{RESET}"));
        assert_eq!(frame[20], "     ");
    }

    #[test]
    fn test_fill_and_label_at_baseline() {
        let (r, table) = setup();
        let frame = r.render(25.0, &table);
        let rows = column_rows(&frame);
        // rows[0] is level 10, rows[9] is level 1
        for (i, row) in rows.iter().enumerate() {
            let lvl = 10 - i as u8;
            let lit = row.contains('█');
            assert_eq!(lit, lvl <= 5, "level {} lit={}", lvl, lit);
            let labelled = row.ends_with("25°C");
            assert_eq!(labelled, lvl == 5, "level {} labelled={}", lvl, labelled);
        }
        assert_eq!(rows[5], format!("           │\x1b[38;5;14m█{RESET}│  25°C"));
        assert_eq!(rows[0], "           │ │  ");
    }

    #[test]
    fn test_hot_reading_above_range_lights_everything() {
        let (r, table) = setup();
        let frame = r.render(36.2, &table);
        let rows = column_rows(&frame);
        assert!(rows.iter().all(|row| row.contains("\x1b[38;5;196m█")));
        assert!(rows[0].ends_with("36.2°C"));
        assert_eq!(rows.iter().filter(|row| row.ends_with("°C")).count(), 1);
    }

    #[test]
    fn test_cold_reading_below_range() {
        let (r, table) = setup();
        let frame = r.render(14.3, &table);
        let rows = column_rows(&frame);
        assert!(rows.iter().all(|row| !row.contains('█')));
        assert!(rows[9].ends_with("14.3°C"));
        assert!(frame[19].contains("\x1b[38;5;117m14.3°C"));
    }

    #[test]
    fn test_format_temp() {
        assert_eq!(format_temp(25.0), "25");
        assert_eq!(format_temp(25.3), "25.3");
        assert_eq!(format_temp(-0.0), "0");
        assert_eq!(format_temp(-1.5), "-1.5");
    }
}
