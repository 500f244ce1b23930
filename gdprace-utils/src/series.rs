// Series: one entity's values indexed by year

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Display colour of a series, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// ANSI 24-bit foreground escape for this colour
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// ANSI reset sequence
    pub fn ansi_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("'{}' does not start with '#'", s))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("'{}' is not a #rrggbb colour", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A named entity and its value for each year.
///
/// A `Series` on its own is unchecked; [`crate::Dataset`] validates it
/// against a timeline before the animator ever sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub code: String,
    pub name: String,
    pub color: Color,
    pub values: BTreeMap<i32, f64>,
}

impl Series {
    pub fn new(code: impl Into<String>, name: impl Into<String>, color: Color) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            color,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insertion of a single yearly value
    pub fn with_value(mut self, year: i32, value: f64) -> Self {
        self.values.insert(year, value);
        self
    }

    /// Assign consecutive values starting at `first_year`
    pub fn with_values_from(mut self, first_year: i32, values: &[f64]) -> Self {
        for (offset, value) in values.iter().enumerate() {
            self.values.insert(first_year + offset as i32, *value);
        }
        self
    }

    pub fn value(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_str() {
        assert_eq!("#3b82f6".parse::<Color>(), Ok(Color::new(0x3b, 0x82, 0xf6)));
        assert_eq!("#FFFFFF".parse::<Color>(), Ok(Color::new(255, 255, 255)));
        assert!("3b82f6".parse::<Color>().is_err());
        assert!("#3b82f".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::new(0x3b, 0x82, 0xf6).to_string(), "#3b82f6");
    }

    #[test]
    fn test_color_ansi() {
        assert_eq!(Color::new(255, 0, 16).ansi_fg(), "\x1b[38;2;255;0;16m");
    }

    #[test]
    fn test_series_with_values_from() {
        let series = Series::new("A", "Alpha", Color::new(0, 0, 0))
            .with_values_from(2000, &[1.0, 2.0, 3.0]);
        assert_eq!(series.value(2000), Some(1.0));
        assert_eq!(series.value(2002), Some(3.0));
        assert_eq!(series.value(2003), None);
    }

    #[test]
    fn test_series_deserialize() {
        let json = r##"{"code":"A","name":"Alpha","color":"#102030","values":{"2000":1.5}}"##;
        let series: Series = serde_json::from_str(json).unwrap();
        assert_eq!(series.color, Color::new(0x10, 0x20, 0x30));
        assert_eq!(series.value(2000), Some(1.5));
    }
}
