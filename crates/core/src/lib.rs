//! Domain logic for the premiere signup pipeline.
//!
//! Everything in this crate is pure: form validation, the canonical
//! [`Submission`](submission::Submission) model, the insert-only
//! dedup-by-id [`SubmissionLog`](feed::SubmissionLog), per-city
//! leaderboard aggregation, and CSV export. I/O (database, HTTP,
//! WebSocket) lives in the sibling crates.

pub mod export;
pub mod feed;
pub mod leaderboard;
pub mod signup;
pub mod submission;
pub mod types;
