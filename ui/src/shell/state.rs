//! Page state and the reducer that owns every transition.
//!
//! Side effects never touch [`ViewState`] directly: they are requested as
//! [`Command`]s and report back through a [`ShellEvent`].

use api::WordStat;
use tracing::{debug, info, warn};

use crate::core::config::STATUS_CLEAR_MS;

/// Transient notice shown under the cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// The backend finished a rebuild. `ticket` ties the notice to the timer
    /// that will clear it.
    Recomputed { ticket: u64 },
}

impl StatusMessage {
    pub fn ticket(&self) -> u64 {
        match self {
            StatusMessage::Recomputed { ticket } => *ticket,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    Mounted,
    FetchSucceeded(Vec<WordStat>),
    FetchFailed(String),
    RebuildRequested,
    RebuildSucceeded(Vec<WordStat>),
    RebuildFailed(String),
    StatusExpired { ticket: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchAnalysis,
    RebuildAnalysis,
    ScheduleStatusClear { ticket: u64, after_ms: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub words: Vec<WordStat>,
    pub loading: bool,
    pub error: Option<String>,
    pub status: Option<StatusMessage>,
    /// Bumped to force a fresh layout even when `words` compares equal.
    pub layout_epoch: u64,
    status_clear_ms: u64,
    last_status_ticket: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// State before the first fetch resolves: loading, nothing to show.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            loading: true,
            error: None,
            status: None,
            layout_epoch: 0,
            status_clear_ms: STATUS_CLEAR_MS,
            last_status_ticket: 0,
        }
    }

    pub fn with_status_clear_ms(mut self, ms: u64) -> Self {
        self.status_clear_ms = ms;
        self
    }

    /// The cloud is only drawn when nothing is pending and nothing failed.
    pub fn shows_cloud(&self) -> bool {
        !self.loading && self.error.is_none()
    }

    pub fn apply(&mut self, event: ShellEvent) -> Vec<Command> {
        match event {
            ShellEvent::Mounted => {
                self.loading = true;
                vec![Command::FetchAnalysis]
            }
            ShellEvent::FetchSucceeded(words) => {
                info!(words = words.len(), "analysis loaded");
                self.loading = false;
                self.error = None;
                self.words = words;
                Vec::new()
            }
            ShellEvent::FetchFailed(message) => {
                warn!(%message, "analysis fetch failed");
                self.loading = false;
                self.error = Some(message);
                Vec::new()
            }
            ShellEvent::RebuildRequested => {
                if self.loading {
                    debug!("rebuild ignored while a request is in flight");
                    return Vec::new();
                }
                self.loading = true;
                self.error = None;
                vec![Command::RebuildAnalysis]
            }
            ShellEvent::RebuildSucceeded(words) => {
                info!(words = words.len(), "analysis rebuilt");
                self.loading = false;
                self.words = words;
                self.layout_epoch = self.layout_epoch.wrapping_add(1);

                self.last_status_ticket += 1;
                let ticket = self.last_status_ticket;
                self.status = Some(StatusMessage::Recomputed { ticket });
                vec![Command::ScheduleStatusClear {
                    ticket,
                    after_ms: self.status_clear_ms,
                }]
            }
            ShellEvent::RebuildFailed(message) => {
                warn!(%message, "analysis rebuild failed");
                self.loading = false;
                self.error = Some(message);
                self.words.clear();
                Vec::new()
            }
            ShellEvent::StatusExpired { ticket } => {
                if self.status.map(|s| s.ticket()) == Some(ticket) {
                    self.status = None;
                }
                Vec::new()
            }
        }
    }
}
