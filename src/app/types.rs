//! Type definitions for the application module.

use crate::constants::AUTOSAVE_INTERVAL_SECS;
use crate::export::ExportFormat;
use std::time::{Duration, Instant};

/// Which panel is shown. Purely presentational: both views share one draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Input,
    Preview,
}

impl ViewMode {
    pub fn is_preview(&self) -> bool {
        matches!(self, ViewMode::Preview)
    }
}

/// What the user picked in the download dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Keep the contact line of each listing in the image
    pub include_contact: bool,
}

impl ExportOptions {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            include_contact: true,
        }
    }

    pub fn without_contact(mut self) -> Self {
        self.include_contact = false;
        self
    }
}

/// Fixed-interval autosave clock.
///
/// Time is passed in rather than read, so the controller stays
/// deterministic and tests can step the clock.
#[derive(Clone, Copy, Debug)]
pub struct AutosaveTimer {
    interval: Duration,
    last: Instant,
}

impl AutosaveTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last) >= self.interval
    }

    pub fn mark(&mut self, now: Instant) {
        self.last = now;
    }
}

impl Default for AutosaveTimer {
    fn default() -> Self {
        Self::new(Duration::from_secs(AUTOSAVE_INTERVAL_SECS), Instant::now())
    }
}
