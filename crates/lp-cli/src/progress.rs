use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use lp_chain::ChainObserver;
use lp_client::ClientError;
use lp_core::Stage;

use crate::ui;

pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_ok(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}

/// One spinner per chain stage, mirroring the web form's step indicator.
#[derive(Default)]
pub struct StageSpinners {
    current: Option<Progress>,
}

fn step_label(stage: Stage) -> String {
    format!("[{}/{}] {}", stage.position(), Stage::ALL.len(), stage.title())
}

impl ChainObserver for StageSpinners {
    fn stage_started(&mut self, stage: Stage) {
        self.current = Some(Progress::spinner(&format!("{}...", step_label(stage))));
    }

    fn stage_finished(&mut self, stage: Stage, elapsed: Duration) {
        if let Some(progress) = self.current.take() {
            progress.finish_ok(&format!("{} done in {}s", step_label(stage), elapsed.as_secs()));
        }
    }

    fn stage_failed(&mut self, stage: Stage, error: &ClientError) {
        if let Some(progress) = self.current.take() {
            progress.finish_err(&format!("{} failed ({})", step_label(stage), error.kind()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_labels_count_stages() {
        assert_eq!(step_label(Stage::MarketAnalysis), "[1/3] Market Analysis");
        assert_eq!(step_label(Stage::TechBlueprint), "[3/3] Technical Blueprint");
    }

    #[test]
    fn spinners_are_inert_without_a_terminal() {
        let mut spinners = StageSpinners::default();
        spinners.stage_started(Stage::MarketAnalysis);
        spinners.stage_finished(Stage::MarketAnalysis, Duration::from_secs(3));
        assert!(spinners.current.is_none());
    }
}
