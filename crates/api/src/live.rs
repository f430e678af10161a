//! Shared in-memory mirror of the submission set.
//!
//! [`LiveBoard`] wraps the core [`SubmissionLog`] in an async `RwLock`
//! so the signup handler (optimistic merge), the feed task (fanout
//! echo), and the read endpoints (leaderboard, map) all observe one
//! consistent view. Seeded from the store at startup; the store
//! remains the source of truth.

use premiere_core::feed::SubmissionLog;
use premiere_core::leaderboard::{self, CityAggregate};
use premiere_core::submission::Submission;
use tokio::sync::RwLock;

/// Thread-safe live view of all submissions, deduplicated by id.
pub struct LiveBoard {
    log: RwLock<SubmissionLog>,
}

impl LiveBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            log: RwLock::new(SubmissionLog::new()),
        }
    }

    /// Create a board pre-populated from persisted history.
    pub fn from_submissions(submissions: Vec<Submission>) -> Self {
        Self {
            log: RwLock::new(SubmissionLog::from_submissions(submissions)),
        }
    }

    /// Merge a submission; returns `false` if its id was already present.
    pub async fn merge(&self, submission: Submission) -> bool {
        self.log.write().await.merge(submission)
    }

    /// All submissions, newest first.
    pub async fn snapshot(&self) -> Vec<Submission> {
        self.log.read().await.snapshot_newest_first()
    }

    /// Ranked per-city aggregates over the current view.
    pub async fn leaderboard(&self, threshold: u32) -> Vec<CityAggregate> {
        let log = self.log.read().await;
        leaderboard::aggregate(log.entries(), threshold)
    }

    /// Number of submissions currently on the board.
    pub async fn len(&self) -> usize {
        self.log.read().await.len()
    }

    /// Drop every entry. Mirrors the administrative bulk reset.
    pub async fn clear(&self) {
        self.log.write().await.clear();
    }
}

impl Default for LiveBoard {
    fn default() -> Self {
        Self::new()
    }
}
