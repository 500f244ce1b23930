// Bar chart rendering for race frames
// Header line with the display year, then one row per ranked entry:
//  1 United States  ████████████▓   10.25T

use super::engine::DirtyRegion;
use gdprace_utils::{Color, Frame, FrameEntry};

/// Renders frames as text bars and tracks which lines changed
pub struct BarChart {
    /// Width of the longest bar in characters
    bar_width: usize,
    /// Width reserved for series names
    name_width: usize,
    /// Y-coordinate of the header line (for dirty region calculation)
    y_position: usize,
    /// X-coordinate offset (for dirty region calculation)
    x_offset: usize,
    /// Wrap rows in the series' 24-bit colour
    color: bool,
    /// Plain lines of the last render
    previous: Vec<String>,
}

impl BarChart {
    const FULL: char = '█';

    /// Partial cell shades for remainders of at least ¼, ½ and ¾
    const SHADES: [char; 3] = ['░', '▒', '▓'];

    pub fn new(bar_width: usize, y_position: usize, x_offset: usize) -> Self {
        Self {
            bar_width,
            name_width: 16,
            y_position,
            x_offset,
            color: false,
            previous: Vec::new(),
        }
    }

    pub fn with_name_width(mut self, name_width: usize) -> Self {
        self.name_width = name_width;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// Render `frame`, returning the text and the regions that changed
    /// since the previous call
    pub fn render(&mut self, frame: &Frame) -> (String, Vec<DirtyRegion>) {
        let mut lines = Vec::with_capacity(frame.entries.len() + 1);
        lines.push(frame.year.to_string());
        lines.extend(frame.entries.iter().map(|entry| self.row(frame, entry)));

        let dirty_regions = self.diff(&lines);

        let content = if self.color {
            let mut painted = Vec::with_capacity(lines.len());
            painted.push(lines[0].clone());
            for (line, entry) in lines[1..].iter().zip(&frame.entries) {
                painted.push(format!(
                    "{}{}{}",
                    entry.color.ansi_fg(),
                    line,
                    Color::ansi_reset()
                ));
            }
            painted.join("\n")
        } else {
            lines.join("\n")
        };

        self.previous = lines;
        (content, dirty_regions)
    }

    /// Forget the previous render so the next one is fully dirty
    pub fn reset(&mut self) {
        self.previous.clear();
    }

    fn row(&self, frame: &Frame, entry: &FrameEntry) -> String {
        let name: String = entry.name.chars().take(self.name_width).collect();
        format!(
            "{:>2} {:<width$} {} {}",
            entry.rank,
            name,
            self.bar(frame.share(entry)),
            format_value(entry.value),
            width = self.name_width
        )
    }

    fn bar(&self, share: f64) -> String {
        let cells = share * self.bar_width as f64;
        let full = (cells.floor() as usize).min(self.bar_width);
        let remainder = cells - full as f64;

        let mut bar: String = std::iter::repeat(Self::FULL).take(full).collect();
        if full < self.bar_width {
            if remainder >= 0.75 {
                bar.push(Self::SHADES[2]);
            } else if remainder >= 0.5 {
                bar.push(Self::SHADES[1]);
            } else if remainder >= 0.25 {
                bar.push(Self::SHADES[0]);
            }
        }

        let drawn = bar.chars().count();
        bar.extend(std::iter::repeat(' ').take(self.bar_width - drawn));
        bar
    }

    fn diff(&self, lines: &[String]) -> Vec<DirtyRegion> {
        let rows = lines.len().max(self.previous.len());
        (0..rows)
            .filter_map(|i| {
                let current = lines.get(i);
                let previous = self.previous.get(i);
                if current == previous {
                    return None;
                }
                let width = [current, previous]
                    .into_iter()
                    .flatten()
                    .map(|line| line.chars().count())
                    .max()
                    .unwrap_or(0);
                Some(DirtyRegion {
                    x: self.x_offset,
                    y: self.y_position + i,
                    width,
                    height: 1,
                })
            })
            .collect()
    }
}

/// Compact label for a value in billions: `10.25T`, `842B`
pub fn format_value(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.2}T", value / 1000.0)
    } else {
        format!("{:.0}B", value)
    }
}
