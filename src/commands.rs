use crate::cli::{CliArgs, Command, FrameArgs, PlayArgs};
use crate::terminal::TerminalPainter;
use gdprace_client::{AnimationFrame, BarChart, FrameLoop, RaceAnimation, RaceAnimator};
use gdprace_utils::{gdp, AnimatorConfig, Dataset};
use log::info;
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};
use std::sync::Arc;

/// Paints frames and tracks whether `--loops` playback is over
pub struct PlaybackView<W: Write> {
    painter: TerminalPainter<W>,
    loops: Option<u64>,
}

impl<W: Write> PlaybackView<W> {
    pub fn new(painter: TerminalPainter<W>, loops: Option<u64>) -> Self {
        Self { painter, loops }
    }

    /// Paint one frame; true once the frame completing the last requested
    /// loop has been shown
    pub fn show(&mut self, frame: &AnimationFrame) -> io::Result<bool> {
        self.painter.paint(frame)?;
        Ok(self
            .loops
            .map_or(false, |limit| frame.loops_completed >= limit))
    }

    pub fn painter_mut(&mut self) -> &mut TerminalPainter<W> {
        &mut self.painter
    }

    pub fn into_painter(self) -> TerminalPainter<W> {
        self.painter
    }
}

/// Config file (or defaults) with command-line overrides applied
pub fn resolve_config(opts: &CliArgs, play: Option<&PlayArgs>) -> Result<AnimatorConfig> {
    let mut config = match &opts.config {
        Some(path) => AnimatorConfig::load(path)?,
        None => AnimatorConfig::default(),
    };

    if let Some(top) = opts.top {
        config.top_n = top;
    }
    if let Some(play) = play {
        if let Some(year_duration) = play.year_duration {
            config.year_duration = year_duration;
        }
        if let Some(pause) = play.pause {
            config.pause = pause;
        }
        if let Some(fps) = play.fps {
            config.fps = fps;
        }
    }

    config.validate()?;
    Ok(config)
}

pub fn resolve_dataset(opts: &CliArgs) -> Result<Arc<Dataset>> {
    let dataset = match &opts.data {
        Some(path) => Dataset::load(path)?,
        None => gdp::dataset()?,
    };
    Ok(Arc::new(dataset))
}

pub fn run(opts: CliArgs) -> Result<()> {
    let dataset = resolve_dataset(&opts)?;
    match &opts.command {
        Some(Command::Frame(args)) => {
            let config = resolve_config(&opts, None)?;
            print_frame(dataset, &config, args)
        }
        Some(Command::Play(args)) => play(dataset, resolve_config(&opts, Some(args))?, args),
        None => {
            let args = PlayArgs::default();
            play(dataset, resolve_config(&opts, Some(&args))?, &args)
        }
    }
}

fn print_frame(dataset: Arc<Dataset>, config: &AnimatorConfig, args: &FrameArgs) -> Result<()> {
    let frame = RaceAnimator::new(dataset, config.top_n).compute_frame(args.progress);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&frame).into_diagnostic()?);
    } else {
        let (content, _) = BarChart::new(config.bar_width, 0, 0).render(&frame);
        println!("{}", content);
    }
    Ok(())
}

fn play(dataset: Arc<Dataset>, config: AnimatorConfig, args: &PlayArgs) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .into_diagnostic()?;
    runtime.block_on(play_loop(dataset, config, args))
}

async fn play_loop(dataset: Arc<Dataset>, config: AnimatorConfig, args: &PlayArgs) -> Result<()> {
    info!(
        "Playing {} series over {}-{}",
        dataset.len(),
        dataset.timeline().first(),
        dataset.timeline().last()
    );
    let rows = config.top_n.min(dataset.len()) + 1;
    let animation = RaceAnimation::new(dataset, &config).with_color(!args.no_color);

    let mut frame_loop = FrameLoop::default();
    let mut frames = frame_loop.start(animation).into_diagnostic()?;
    let mut view = PlaybackView::new(TerminalPainter::new(io::stdout()), args.loops);
    view.painter_mut().enter().into_diagnostic()?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("Interrupted");
                break;
            }
            frame = frames.recv() => {
                let frame = match frame {
                    Some(frame) => frame,
                    None => break,
                };
                if view.show(&frame).into_diagnostic()? {
                    info!("Finished after {} loops", frame.loops_completed);
                    break;
                }
            }
        }
    }

    frame_loop.stop().await.into_diagnostic()?;
    view.into_painter().leave(rows).into_diagnostic()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use gdprace_client::AnimationEngine;
    use std::time::Duration;

    /// Feed a built-in race through a view at 10ms steps until it stops
    fn play_until_done(loops: u64) -> (Vec<AnimationFrame>, String) {
        let config = AnimatorConfig::default()
            .with_year_duration(Duration::from_millis(100))
            .with_pause(Duration::from_millis(50));
        let dataset = resolve_dataset(&CliArgs::default()).unwrap();
        let mut animation = RaceAnimation::new(dataset, &config);
        let mut view = PlaybackView::new(TerminalPainter::new(Vec::new()), Some(loops));

        let mut shown = Vec::new();
        for step in 0..10_000u64 {
            let frame = animation
                .next_frame(Duration::from_millis(step * 10))
                .unwrap();
            let done = view.show(&frame).unwrap();
            shown.push(frame);
            if done {
                break;
            }
        }
        let out = String::from_utf8(view.into_painter().into_inner()).unwrap();
        (shown, out)
    }

    #[test]
    fn test_resolve_config_overrides() {
        let opts = CliArgs::try_parse_from([
            "gdprace", "play", "--top", "3", "--fps", "24", "--pause", "500ms",
        ])
        .unwrap();
        let play = match &opts.command {
            Some(Command::Play(play)) => play,
            other => panic!("unexpected command: {:?}", other),
        };

        let config = resolve_config(&opts, Some(play)).unwrap();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.fps, 24);
        assert_eq!(config.pause, Duration::from_millis(500));
        assert_eq!(config.year_duration, AnimatorConfig::default().year_duration);
    }

    #[test]
    fn test_resolve_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "top_n 4\nbar_width 12").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let opts = CliArgs::try_parse_from(["gdprace", "--config", path.as_str()]).unwrap();
        let config = resolve_config(&opts, None).unwrap();
        assert_eq!(config.top_n, 4);
        assert_eq!(config.bar_width, 12);
    }

    #[test]
    fn test_resolve_config_rejects_invalid_override() {
        let opts = CliArgs::try_parse_from(["gdprace", "play", "--fps", "0"]).unwrap();
        let play = match &opts.command {
            Some(Command::Play(play)) => play,
            other => panic!("unexpected command: {:?}", other),
        };
        assert!(resolve_config(&opts, Some(play)).is_err());
    }

    #[test]
    fn test_resolve_dataset() {
        let builtin = resolve_dataset(&CliArgs::default()).unwrap();
        assert_eq!(builtin.len(), 15);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"years": [2000, 2001], "series": [{{"code": "A", "name": "Alpha", "color": "#000000", "values": {{"2000": 1}}}}]}}"##
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let opts = CliArgs::try_parse_from(["gdprace", "--data", path.as_str()]).unwrap();
        assert!(resolve_dataset(&opts).is_err());
    }

    #[test]
    fn test_loops_stop_on_final_year() {
        let (shown, out) = play_until_done(1);
        let last = shown.last().unwrap();

        assert_eq!(last.snapshot.year, 2023);
        assert_eq!(last.snapshot.progress, 1.0);
        assert_eq!(last.loops_completed, 1);
        // 24 years at 100ms each, one frame every 10ms
        assert_eq!(shown.len(), 241);
        assert!(out.contains("2023"));
    }

    #[test]
    fn test_loops_count_full_passes() {
        let (shown, _) = play_until_done(2);
        let last = shown.last().unwrap();

        assert_eq!(last.snapshot.year, 2023);
        assert_eq!(last.loops_completed, 2);
        // The second pass restarted from the first year
        let restarts = shown
            .windows(2)
            .filter(|pair| pair[0].snapshot.progress >= 1.0 && pair[1].snapshot.progress < 1.0)
            .count();
        assert_eq!(restarts, 1);
    }

    #[test]
    fn test_without_loops_never_done() {
        let dataset = resolve_dataset(&CliArgs::default()).unwrap();
        let mut animation = RaceAnimation::new(dataset, &AnimatorConfig::default());
        let mut view = PlaybackView::new(TerminalPainter::new(Vec::new()), None);
        let frame = animation.next_frame(Duration::from_secs(3600)).unwrap();
        assert!(!view.show(&frame).unwrap());
    }

    #[test]
    fn test_frame_json_snapshot() {
        let dataset = resolve_dataset(&CliArgs::default()).unwrap();
        let frame = RaceAnimator::new(dataset, 3).compute_frame(1.0);
        let codes: Vec<&str> = frame.codes();
        insta::assert_debug_snapshot!(codes, @r###"
        [
            "USA",
            "CHN",
            "DEU",
        ]
        "###);
    }
}
