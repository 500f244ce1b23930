// Animator configuration: pacing, end-of-loop pause and top-N cutoff
//
// Defaults cover the built-in race. A KDL file can override any of them:
//
// ```kdl
// year_duration "400ms"
// pause "2s"
// top_n 10
// fps 60
// bar_width 40
// ```

use crate::errors::{ConfigError, ConfigResult};
use kdl::{KdlDocument, KdlNode};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Configuration accepted by the animator at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatorConfig {
    /// Time spent travelling across one timeline year
    pub year_duration: Duration,

    /// How long the final frame is held before the loop restarts
    pub pause: Duration,

    /// Number of ranked entries kept per frame
    pub top_n: usize,

    /// Target ticks per second of the frame loop
    pub fps: u32,

    /// Width of the longest bar in terminal cells
    pub bar_width: usize,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            year_duration: Duration::from_millis(400),
            pause: Duration::from_millis(2000),
            top_n: 10,
            fps: 60,
            bar_width: 40,
        }
    }
}

impl AnimatorConfig {
    /// Total duration of one pass over a timeline of `years` years,
    /// saturating at `Duration::MAX`
    pub fn loop_duration(&self, years: usize) -> Duration {
        let years = u32::try_from(years).unwrap_or(u32::MAX);
        self.year_duration.saturating_mul(years)
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn with_year_duration(mut self, year_duration: Duration) -> Self {
        self.year_duration = year_duration;
        self
    }

    /// Reject values the animator cannot run with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.year_duration.is_zero() {
            return Err(invalid("year_duration", "must be greater than zero"));
        }
        if self.top_n == 0 {
            return Err(invalid("top_n", "must be at least 1"));
        }
        if self.fps == 0 || self.fps > 240 {
            return Err(invalid("fps", "must be between 1 and 240"));
        }
        if self.bar_width == 0 {
            return Err(invalid("bar_width", "must be at least 1"));
        }
        Ok(())
    }

    /// Parse a KDL document, starting from the defaults
    pub fn from_kdl(text: &str) -> ConfigResult<Self> {
        let document: KdlDocument = text.parse()?;
        let mut config = Self::default();

        for node in document.nodes() {
            let key = node.name().value();
            match key {
                "year_duration" => config.year_duration = duration_arg(node)?,
                "pause" => config.pause = duration_arg(node)?,
                "top_n" => config.top_n = integer_arg(node)?,
                "fps" => config.fps = integer_arg(node)?,
                "bar_width" => config.bar_width = integer_arg(node)?,
                other => return Err(ConfigError::UnknownKey(other.to_string())),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Read a KDL config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_kdl(&text)
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn first_arg<'a>(node: &'a KdlNode) -> ConfigResult<&'a kdl::KdlValue> {
    let key = node.name().value();
    node.entries()
        .iter()
        .find(|entry| entry.name().is_none())
        .map(|entry| entry.value())
        .ok_or_else(|| invalid(key, "missing value"))
}

fn duration_arg(node: &KdlNode) -> ConfigResult<Duration> {
    let key = node.name().value();
    let text = first_arg(node)?
        .as_string()
        .ok_or_else(|| invalid(key, "expected a duration string such as \"500ms\""))?;
    humantime::parse_duration(text).map_err(|e| invalid(key, e.to_string()))
}

fn integer_arg<T: TryFrom<i64>>(node: &KdlNode) -> ConfigResult<T> {
    let key = node.name().value();
    let value = first_arg(node)?
        .as_i64()
        .ok_or_else(|| invalid(key, "expected an integer"))?;
    T::try_from(value).map_err(|_| invalid(key, format!("{} is out of range", value)))
}
