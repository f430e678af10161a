//! In-process event infrastructure for the signup pipeline.
//!
//! - [`EventBus`]: publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`SignupEvent`]: the closed set of events fanned out to
//!   realtime consumers, each carrying the full persisted record.

pub mod bus;

pub use bus::{EventBus, SignupEvent};
