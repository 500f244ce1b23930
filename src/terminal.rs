// Terminal painting for race frames
// Redraws only the dirty lines of each frame using ANSI cursor movement

use gdprace_client::AnimationFrame;
use std::io::{self, Write};

const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";
const CLEAR_SCREEN: &str = "\x1b[2J";

/// Writes frames to a terminal-like sink
pub struct TerminalPainter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPainter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Prepare the screen for painting
    pub fn enter(&mut self) -> io::Result<()> {
        write!(self.out, "{}{}", HIDE_CURSOR, CLEAR_SCREEN)?;
        self.out.flush()
    }

    /// Restore the cursor below the chart
    pub fn leave(&mut self, rows: usize) -> io::Result<()> {
        write!(self.out, "\x1b[{};1H{}\n", rows + 1, SHOW_CURSOR)?;
        self.out.flush()
    }

    /// Repaint the lines covered by the frame's dirty regions.
    /// Each region is blanked across its width before the new text lands.
    pub fn paint(&mut self, frame: &AnimationFrame) -> io::Result<()> {
        let lines: Vec<&str> = frame.content.lines().collect();
        for region in &frame.dirty_regions {
            for y in region.y..region.y + region.height {
                write!(self.out, "\x1b[{};{}H", y + 1, region.x + 1)?;
                if region.width > 0 {
                    write!(self.out, "\x1b[{}X", region.width)?;
                }
                if let Some(line) = lines.get(y) {
                    self.out.write_all(line.as_bytes())?;
                }
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
