// Frame: a ranked, interpolated snapshot of every series at one progress value

use crate::series::Color;
use serde::Serialize;

/// One ranked row of a [`Frame`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameEntry {
    /// 1-based position after sorting
    pub rank: usize,
    pub code: String,
    pub name: String,
    pub color: Color,
    pub value: f64,
}

/// Ephemeral snapshot produced once per tick and never cached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Display year, rounded from the interpolated position
    pub year: i32,
    pub progress: f64,
    /// Entries sorted descending by value, truncated to the top N
    pub entries: Vec<FrameEntry>,
    /// Value of the rank-1 entry, used to normalize bar widths
    pub max_value: f64,
}

impl Frame {
    /// Bar length for `entry` as a fraction of the widest bar, in [0, 1]
    pub fn share(&self, entry: &FrameEntry) -> f64 {
        if self.max_value > 0.0 {
            (entry.value / self.max_value).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.code.as_str()).collect()
    }
}
