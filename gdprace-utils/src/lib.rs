// gdprace shared data model
//
// Series, timelines and the validated dataset that feeds the race animator,
// plus the frame snapshot type handed to renderers and the animator config.

pub mod config;
pub mod dataset;
pub mod errors;
pub mod frame;
pub mod gdp;
pub mod series;
pub mod timeline;

pub use config::AnimatorConfig;
pub use dataset::Dataset;
pub use errors::{ConfigError, ConfigResult, DatasetError, DatasetResult};
pub use frame::{Frame, FrameEntry};
pub use series::{Color, Series};
pub use timeline::Timeline;
