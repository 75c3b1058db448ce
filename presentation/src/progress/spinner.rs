//! Spinner shown while waiting on the question or validation service

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A transient spinner; a disabled one draws nothing
pub struct ActivitySpinner {
    bar: Option<ProgressBar>,
}

impl ActivitySpinner {
    pub fn start(message: impl Into<String>, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Remove the spinner line
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
