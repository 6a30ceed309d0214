//! User-facing notices.
//!
//! Everything the agent needs to read (rejected actions, export results,
//! reset confirmation) goes through a [`Notice`]. Front ends drain the
//! [`NoticeLog`] and show each one; blocking notices are meant to be
//! acknowledged before the agent continues.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeVariant {
    pub fn default_duration(&self) -> Duration {
        match self {
            NoticeVariant::Success | NoticeVariant::Info => Duration::from_secs(3),
            NoticeVariant::Warning => Duration::from_secs(4),
            NoticeVariant::Error => Duration::from_secs(5),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeVariant::Success => "✓",
            NoticeVariant::Info => "ℹ",
            NoticeVariant::Warning => "⚠",
            NoticeVariant::Error => "✗",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub variant: NoticeVariant,
    /// Must be acknowledged (alert-style) rather than fading out
    pub blocking: bool,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Notice {
    fn new(message: impl Into<String>, variant: NoticeVariant) -> Self {
        Self {
            id: NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            variant,
            blocking: false,
            duration: variant.default_duration(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NoticeVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeVariant::Error)
    }

    pub fn blocking(mut self) -> Self {
        self.blocking = true;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Blocking notices never expire on their own
    pub fn is_expired(&self) -> bool {
        !self.blocking && self.created_at.elapsed() >= self.duration
    }

    /// Line for plain-text front ends
    pub fn display_line(&self) -> String {
        format!("{} {}", self.variant.icon(), self.message)
    }
}

/// Pending notices, oldest first
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        match notice.variant {
            NoticeVariant::Error => tracing::error!("notice: {}", notice.message),
            NoticeVariant::Warning => tracing::warn!("notice: {}", notice.message),
            _ => tracing::debug!("notice: {}", notice.message),
        }
        self.notices.push(notice);
    }

    pub fn count(&self) -> usize {
        self.notices.len()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn remove(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    /// Drop notices that have faded out
    pub fn prune_expired(&mut self) {
        self.notices.retain(|n| !n.is_expired());
    }

    /// Take all pending notices for display
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}
