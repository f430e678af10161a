//! Insert-only, dedup-by-id submission log.
//!
//! Both the originating request (optimistic merge of the store's direct
//! response) and the realtime fanout echo of the same insert feed this
//! log, so the same record routinely arrives twice. [`SubmissionLog`]
//! makes that harmless: merging is keyed by the store-assigned id and
//! idempotent.

use std::collections::HashSet;

use crate::submission::Submission;
use crate::types::DbId;

/// An append-only set of submissions, deduplicated by id.
#[derive(Debug, Default)]
pub struct SubmissionLog {
    entries: Vec<Submission>,
    seen: HashSet<DbId>,
}

impl SubmissionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log pre-populated from persisted history.
    ///
    /// Duplicate ids in the input are collapsed.
    pub fn from_submissions(submissions: impl IntoIterator<Item = Submission>) -> Self {
        let mut log = Self::new();
        for submission in submissions {
            log.merge(submission);
        }
        log
    }

    /// Merge a submission into the log.
    ///
    /// Returns `true` if the record was new, `false` if a record with
    /// the same id was already present (the log is left unchanged).
    pub fn merge(&mut self, submission: Submission) -> bool {
        if !self.seen.insert(submission.id) {
            return false;
        }
        self.entries.push(submission);
        true
    }

    /// Whether a record with the given id has been merged.
    pub fn contains(&self, id: DbId) -> bool {
        self.seen.contains(&id)
    }

    /// All entries in arrival order.
    pub fn entries(&self) -> &[Submission] {
        &self.entries
    }

    /// A copy of the entries ordered newest-first (`created_at`
    /// descending, id descending as the tiebreak). Fanout delivery
    /// order is not guaranteed, so ordering is imposed here rather
    /// than assumed from arrival order.
    pub fn snapshot_newest_first(&self) -> Vec<Submission> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. Mirrors the administrative bulk reset.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.seen.clear();
    }
}
