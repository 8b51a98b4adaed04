use ampscope::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 100;

/// Terminal display for a screening run: a spinner while a phase is set up, then a bar that
/// counts screened candidates.
///
/// `ProgressBar` is internally reference counted and thread-safe, so rayon workers can share
/// the callback without extra locking.
#[derive(Clone)]
pub struct ScreeningProgress {
    bar: ProgressBar,
}

impl ScreeningProgress {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(None, target).with_style(Self::spinner_style());
        Self { bar }
    }

    pub fn callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();
        Box::new(move |event: Progress| Self::apply(&bar, event))
    }

    fn apply(bar: &ProgressBar, event: Progress) {
        match event {
            Progress::PhaseStart { name } => {
                bar.set_style(Self::spinner_style());
                bar.set_prefix(name);
                bar.set_message("preparing candidates");
                bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            // An empty batch keeps the spinner; there is nothing to count.
            Progress::BatchStart { total: 0 } => {}
            Progress::BatchStart { total } => {
                bar.set_length(total);
                bar.set_position(0);
                bar.set_message("");
                bar.set_style(Self::candidates_style());
            }
            Progress::CandidateDone => bar.inc(1),
            Progress::BatchFinish => {
                if let Some(total) = bar.length() {
                    bar.set_position(total);
                }
            }
            Progress::Message(note) => {
                bar.println(format!("  note: {}", note));
                bar.set_message(note);
            }
            Progress::PhaseFinish => {
                bar.disable_steady_tick();
                let screened = bar.position();
                bar.finish_with_message(format!("✓ {} candidate(s) screened", screened));
            }
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn candidates_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{prefix:.bold} [{wide_bar:.green/white}] {pos}/{len} candidates, {per_sec} ({elapsed}) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
    }
}

impl Default for ScreeningProgress {
    fn default() -> Self {
        Self::new()
    }
}
