use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Default)]
#[clap(name = "gdprace", version, about)]
pub struct CliArgs {
    /// Path to a KDL config file
    #[clap(long, short, value_parser, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a JSON dataset (defaults to the built-in GDP table)
    #[clap(long, short, value_parser, global = true)]
    pub data: Option<PathBuf>,

    /// Number of ranked entries per frame
    #[clap(long, value_parser, global = true)]
    pub top: Option<usize>,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the looping race in the terminal
    Play(PlayArgs),

    /// Print a single frame
    Frame(FrameArgs),
}

#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Time spent on each timeline year, e.g. "400ms"
    #[clap(long, value_parser = humantime::parse_duration)]
    pub year_duration: Option<Duration>,

    /// How long the final frame is held, e.g. "2s"
    #[clap(long, value_parser = humantime::parse_duration)]
    pub pause: Option<Duration>,

    /// Target frames per second
    #[clap(long, value_parser)]
    pub fps: Option<u32>,

    /// Exit after this many complete loops
    #[clap(long, value_parser)]
    pub loops: Option<u64>,

    /// Do not colour the bars
    #[clap(long, value_parser)]
    pub no_color: bool,
}

#[derive(Args, Debug)]
pub struct FrameArgs {
    /// Position along the timeline, from 0 to 1
    #[clap(long, value_parser = parse_progress)]
    pub progress: f64,

    /// Print the frame as JSON
    #[clap(long, value_parser)]
    pub json: bool,
}

fn parse_progress(s: &str) -> Result<f64, String> {
    let progress: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&progress) {
        Ok(progress)
    } else {
        Err(format!("{} is outside 0..=1", progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let args = CliArgs::try_parse_from(["gdprace"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_play_args() {
        let args = CliArgs::try_parse_from([
            "gdprace",
            "play",
            "--year-duration",
            "250ms",
            "--pause",
            "1s",
            "--loops",
            "2",
            "--top",
            "5",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(args.top, Some(5));
        match args.command {
            Some(Command::Play(play)) => {
                assert_eq!(play.year_duration, Some(Duration::from_millis(250)));
                assert_eq!(play.pause, Some(Duration::from_secs(1)));
                assert_eq!(play.loops, Some(2));
                assert!(play.no_color);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_frame_args() {
        let args =
            CliArgs::try_parse_from(["gdprace", "frame", "--progress", "0.5", "--json"]).unwrap();
        match args.command {
            Some(Command::Frame(frame)) => {
                assert_eq!(frame.progress, 0.5);
                assert!(frame.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_progress_out_of_range() {
        assert!(CliArgs::try_parse_from(["gdprace", "frame", "--progress", "1.5"]).is_err());
        assert!(CliArgs::try_parse_from(["gdprace", "frame", "--progress", "abc"]).is_err());
    }

    #[test]
    fn test_bad_duration() {
        assert!(CliArgs::try_parse_from(["gdprace", "play", "--pause", "soon"]).is_err());
    }
}
